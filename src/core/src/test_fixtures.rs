use crate::shared::CurrencyValue;
use crate::{EvaluatedPlayer, PlayerPosition, Squad};

pub fn player(
    id: u32,
    position: PlayerPosition,
    team_id: u32,
    cost: i32,
    evaluation: f64,
) -> EvaluatedPlayer {
    EvaluatedPlayer::builder()
        .id(id)
        .first_name("Test")
        .second_name(format!("Player{}", id))
        .team_id(team_id)
        .position(position)
        .cost(CurrencyValue::new(cost))
        .evaluation(evaluation)
        .build()
        .unwrap()
}

/// Legal 2/5/5/3 squad, ids 1..=15, every player from their own club (team id == player id).
///
/// Goalkeepers cost 45, defenders 50, midfielders 70, forwards 80: 930 in total.
/// Evaluations are 4.0 everywhere except the defender with id 3 at 2.0.
pub fn full_squad() -> Squad {
    let mut players = Vec::with_capacity(15);

    for id in 1..=2 {
        players.push(player(id, PlayerPosition::Goalkeeper, id, 45, 4.0));
    }
    for id in 3..=7 {
        let evaluation = if id == 3 { 2.0 } else { 4.0 };
        players.push(player(id, PlayerPosition::Defender, id, 50, evaluation));
    }
    for id in 8..=12 {
        players.push(player(id, PlayerPosition::Midfielder, id, 70, 4.0));
    }
    for id in 13..=15 {
        players.push(player(id, PlayerPosition::Forward, id, 80, 4.0));
    }

    Squad::from_players(players).unwrap()
}
