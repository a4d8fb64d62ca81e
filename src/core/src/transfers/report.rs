use crate::transfers::TransferModel;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Surname-only view of a transfer, handy when eyeballing a ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedTransfer {
    pub player_out: String,
    pub player_in: String,
}

impl From<&TransferModel> for NamedTransfer {
    fn from(transfer: &TransferModel) -> Self {
        NamedTransfer {
            player_out: transfer.player_out.player_info.second_name.clone(),
            player_in: transfer.player_in.player_info.second_name.clone(),
        }
    }
}

pub fn named_transfers(transfers: &[TransferModel]) -> Vec<NamedTransfer> {
    transfers.iter().map(NamedTransfer::from).collect()
}

impl Display for NamedTransfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} -> {}", self.player_out, self.player_in)
    }
}

impl Display for TransferModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} -> {}: {:+.2}",
            self.player_out, self.player_in, self.eval_difference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::player;
    use crate::PlayerPosition;

    #[test]
    fn test_named_transfers() {
        let transfers = vec![
            TransferModel::new(
                player(1, PlayerPosition::Defender, 1, 45, 2.0),
                player(2, PlayerPosition::Defender, 2, 50, 6.5),
            ),
            TransferModel::new(
                player(3, PlayerPosition::Forward, 3, 80, 4.0),
                player(4, PlayerPosition::Forward, 4, 75, 5.0),
            ),
        ];

        let named = named_transfers(&transfers);

        assert_eq!(named.len(), 2);
        assert_eq!(named[0].to_string(), "Player1 -> Player2");
        assert_eq!(named[1].player_in, "Player4");
    }

    #[test]
    fn test_transfer_display() {
        let transfer = TransferModel::new(
            player(1, PlayerPosition::Defender, 1, 45, 2.0),
            player(2, PlayerPosition::Defender, 2, 50, 6.5),
        );

        assert_eq!(
            transfer.to_string(),
            "Player1 (DEF, £4.5m) -> Player2 (DEF, £5.0m): +4.50"
        );
    }
}
