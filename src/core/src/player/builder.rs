use crate::shared::CurrencyValue;
use crate::{EvaluatedPlayer, PlayerAvailability, PlayerInfo, PlayerPosition};

// Builder for EvaluatedPlayer
#[derive(Default)]
pub struct EvaluatedPlayerBuilder {
    id: Option<u32>,
    first_name: Option<String>,
    second_name: Option<String>,
    team_id: Option<u32>,
    position: Option<PlayerPosition>,
    cost: Option<CurrencyValue>,
    availability: Option<PlayerAvailability>,
    evaluation: Option<f64>,
}

impl EvaluatedPlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn second_name(mut self, second_name: impl Into<String>) -> Self {
        self.second_name = Some(second_name.into());
        self
    }

    pub fn team_id(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn cost(mut self, cost: CurrencyValue) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn availability(mut self, availability: PlayerAvailability) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn evaluation(mut self, evaluation: f64) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    pub fn build(self) -> Result<EvaluatedPlayer, String> {
        let id = self.id.ok_or("id is required")?;
        let evaluation = self.evaluation.ok_or("evaluation is required")?;
        if !evaluation.is_finite() {
            return Err(format!("evaluation must be finite, got {}", evaluation));
        }

        Ok(EvaluatedPlayer::new(
            PlayerInfo {
                id,
                first_name: self.first_name.unwrap_or_default(),
                second_name: self.second_name.unwrap_or_else(|| format!("Player {}", id)),
                team_id: self.team_id.ok_or("team_id is required")?,
                position: self.position.ok_or("position is required")?,
                cost: self.cost.ok_or("cost is required")?,
                availability: self.availability.unwrap_or_default(),
            },
            evaluation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let player = EvaluatedPlayerBuilder::new()
            .id(7)
            .team_id(3)
            .position(PlayerPosition::Defender)
            .cost(CurrencyValue::new(45))
            .evaluation(3.5)
            .build()
            .unwrap();

        assert_eq!(player.player_info.second_name, "Player 7");
        assert_eq!(player.player_info.availability, PlayerAvailability::Available);
        assert_eq!(player.cost(), CurrencyValue::new(45));
    }

    #[test]
    fn test_build_requires_position() {
        let result = EvaluatedPlayerBuilder::new()
            .id(7)
            .team_id(3)
            .cost(CurrencyValue::new(45))
            .evaluation(3.5)
            .build();

        assert_eq!(result.unwrap_err(), "position is required");
    }

    #[test]
    fn test_build_rejects_nan_evaluation() {
        let result = EvaluatedPlayerBuilder::new()
            .id(7)
            .team_id(3)
            .position(PlayerPosition::Defender)
            .cost(CurrencyValue::new(45))
            .evaluation(f64::NAN)
            .build();

        assert!(result.is_err());
    }
}
