use crate::player::builder::EvaluatedPlayerBuilder;
use crate::shared::CurrencyValue;
use crate::{PlayerAvailability, PlayerPosition};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInfo {
    pub id: u32,
    pub first_name: String,
    pub second_name: String,
    pub team_id: u32,
    pub position: PlayerPosition,
    pub cost: CurrencyValue,
    pub availability: PlayerAvailability,
}

/// A player together with the externally computed projection of their value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedPlayer {
    pub player_info: PlayerInfo,
    pub evaluation: f64,
}

impl EvaluatedPlayer {
    pub fn builder() -> EvaluatedPlayerBuilder {
        EvaluatedPlayerBuilder::new()
    }

    pub fn new(player_info: PlayerInfo, evaluation: f64) -> Self {
        EvaluatedPlayer {
            player_info,
            evaluation,
        }
    }

    pub fn id(&self) -> u32 {
        self.player_info.id
    }

    pub fn position(&self) -> PlayerPosition {
        self.player_info.position
    }

    pub fn cost(&self) -> CurrencyValue {
        self.player_info.cost
    }

    pub fn team_id(&self) -> u32 {
        self.player_info.team_id
    }
}

impl Display for EvaluatedPlayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({}, {})",
            self.player_info.second_name, self.player_info.position, self.player_info.cost
        )
    }
}
