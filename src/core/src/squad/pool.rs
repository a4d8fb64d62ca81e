use crate::{EvaluatedPlayer, PlayerPosition};
use std::collections::BTreeMap;

/// The universe of evaluated players replacements are drawn from.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: BTreeMap<PlayerPosition, Vec<EvaluatedPlayer>>,
}

impl PlayerPool {
    pub fn new(players: BTreeMap<PlayerPosition, Vec<EvaluatedPlayer>>) -> Self {
        PlayerPool { players }
    }

    /// Groups players by position. Every position gets a key, so an empty
    /// list means "looked up, nobody available".
    pub fn from_players(players: impl IntoIterator<Item = EvaluatedPlayer>) -> Self {
        let mut grouped: BTreeMap<PlayerPosition, Vec<EvaluatedPlayer>> = PlayerPosition::ALL
            .iter()
            .map(|position| (*position, Vec::new()))
            .collect();

        for player in players {
            grouped.entry(player.position()).or_default().push(player);
        }

        PlayerPool { players: grouped }
    }

    pub fn by_position(&self, position: PlayerPosition) -> Option<&[EvaluatedPlayer]> {
        self.players.get(&position).map(Vec::as_slice)
    }

    pub fn players(&self) -> impl Iterator<Item = &EvaluatedPlayer> {
        self.players.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.players.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
