use crate::loaders::{PlayerEntity, SnapshotEntity};
use crate::{DatabaseError, DatabaseResult};
use fpl_core::{
    CurrencyValue, EvaluatedPlayer, PlayerAvailability, PlayerInfo, PlayerPool, PlayerPosition,
    Squad,
};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Squad, candidate universe and bank ready to hand to the transfer selector.
#[derive(Debug)]
pub struct GameSnapshot {
    pub squad: Squad,
    pub pool: PlayerPool,
    pub in_bank: CurrencyValue,
}

pub struct SnapshotGenerator;

impl SnapshotGenerator {
    pub fn generate(data: &SnapshotEntity) -> DatabaseResult<GameSnapshot> {
        let mut seen = HashSet::new();
        let mut players = HashMap::with_capacity(data.players.len());

        for entity in &data.players {
            if !seen.insert(entity.id) {
                return Err(DatabaseError::InvalidData(format!(
                    "player {} is listed twice",
                    entity.id
                )));
            }
            players.insert(entity.id, Self::generate_player(entity)?);
        }

        let squad_players = data
            .squad
            .iter()
            .map(|id| {
                players.get(id).cloned().ok_or_else(|| {
                    DatabaseError::InvalidData(format!("squad player {} not found", id))
                })
            })
            .collect::<DatabaseResult<Vec<EvaluatedPlayer>>>()?;

        let squad = Squad::from_players(squad_players)
            .map_err(|err| DatabaseError::InvalidData(err.to_string()))?;

        let pool = PlayerPool::from_players(players.into_values());

        debug!(
            "snapshot generated: squad {} players ({}), pool {} players",
            squad.len(),
            squad.total_cost(),
            pool.len()
        );

        Ok(GameSnapshot {
            squad,
            pool,
            in_bank: CurrencyValue::new(data.in_bank),
        })
    }

    fn generate_player(entity: &PlayerEntity) -> DatabaseResult<EvaluatedPlayer> {
        let position = entity
            .position
            .parse::<PlayerPosition>()
            .map_err(DatabaseError::InvalidData)?;
        let availability = entity
            .status
            .parse::<PlayerAvailability>()
            .map_err(DatabaseError::InvalidData)?;

        Ok(EvaluatedPlayer::new(
            PlayerInfo {
                id: entity.id,
                first_name: entity.first_name.clone(),
                second_name: entity.second_name.clone(),
                team_id: entity.team_id,
                position,
                cost: CurrencyValue::new(entity.cost),
                availability,
            },
            entity.evaluation,
        ))
    }
}
