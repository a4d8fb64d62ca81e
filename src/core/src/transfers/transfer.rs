use crate::EvaluatedPlayer;
use serde::Serialize;

/// One outgoing squad player swapped for one incoming player of the same position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferModel {
    pub player_out: EvaluatedPlayer,
    pub player_in: EvaluatedPlayer,
    pub eval_difference: f64,
}

impl TransferModel {
    pub fn new(player_out: EvaluatedPlayer, player_in: EvaluatedPlayer) -> Self {
        let eval_difference = player_in.evaluation - player_out.evaluation;

        TransferModel {
            player_out,
            player_in,
            eval_difference,
        }
    }
}
