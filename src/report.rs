use fpl_core::{NamedTransfer, TransferModel};
use serde::Serialize;

/// Machine-readable result of one selection run.
#[derive(Debug, Serialize)]
pub struct SelectionReport<'a> {
    pub selected: &'a TransferModel,
    pub shortlist: Vec<NamedTransfer>,
}

impl<'a> SelectionReport<'a> {
    pub fn new(selected: &'a TransferModel, shortlist: Vec<NamedTransfer>) -> Self {
        SelectionReport {
            selected,
            shortlist,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpl_core::{CurrencyValue, EvaluatedPlayer, PlayerPosition, named_transfers};
    use serde_json::Value;

    fn defender(id: u32, cost: i32, evaluation: f64) -> EvaluatedPlayer {
        EvaluatedPlayer::builder()
            .id(id)
            .second_name(format!("Defender{}", id))
            .team_id(id)
            .position(PlayerPosition::Defender)
            .cost(CurrencyValue::new(cost))
            .evaluation(evaluation)
            .build()
            .unwrap()
    }

    #[test]
    fn test_report_serializes_selected_transfer_and_shortlist() {
        let transfer = TransferModel::new(defender(1, 45, 2.0), defender(2, 50, 6.5));
        let shortlist = named_transfers(std::slice::from_ref(&transfer));

        let json = SelectionReport::new(&transfer, shortlist).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let selected = &value["selected"];
        assert_eq!(selected["player_out"]["player_info"]["id"], 1);
        assert_eq!(selected["player_in"]["player_info"]["position"], "DEF");
        assert_eq!(selected["player_in"]["player_info"]["cost"], 50);
        assert_eq!(selected["player_in"]["player_info"]["availability"], "Available");
        assert_eq!(selected["eval_difference"], 4.5);
        assert_eq!(value["shortlist"][0]["player_in"], "Defender2");
    }
}
