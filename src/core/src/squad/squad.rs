use crate::shared::CurrencyValue;
use crate::transfers::{TransferError, TransferResult};
use crate::{EvaluatedPlayer, PlayerPosition};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Players currently held, grouped by position.
///
/// Player ids are unique across the whole squad. Formation legality is
/// not enforced here; that is what [`SquadRules`](crate::SquadRules) checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Squad {
    players: BTreeMap<PlayerPosition, Vec<EvaluatedPlayer>>,
}

impl Squad {
    pub fn new(players: BTreeMap<PlayerPosition, Vec<EvaluatedPlayer>>) -> TransferResult<Self> {
        let mut seen = HashSet::new();

        for (position, group) in &players {
            for player in group {
                if player.position() != *position {
                    return Err(TransferError::InvalidInput(format!(
                        "player {} listed under {} but plays {}",
                        player.id(),
                        position,
                        player.position()
                    )));
                }
                if !seen.insert(player.id()) {
                    return Err(TransferError::InvalidInput(format!(
                        "player {} appears more than once in the squad",
                        player.id()
                    )));
                }
            }
        }

        Ok(Squad { players })
    }

    pub fn from_players(
        players: impl IntoIterator<Item = EvaluatedPlayer>,
    ) -> TransferResult<Self> {
        let mut grouped: BTreeMap<PlayerPosition, Vec<EvaluatedPlayer>> = BTreeMap::new();

        for player in players {
            grouped.entry(player.position()).or_default().push(player);
        }

        Squad::new(grouped)
    }

    pub fn total_cost(&self) -> CurrencyValue {
        self.players().map(|p| p.cost()).sum()
    }

    pub fn len(&self) -> usize {
        self.players.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players().any(|p| p.id() == player_id)
    }

    pub fn by_position(&self, position: PlayerPosition) -> &[EvaluatedPlayer] {
        self.players
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn positions(&self) -> impl Iterator<Item = PlayerPosition> + '_ {
        self.players
            .iter()
            .filter(|(_, group)| !group.is_empty())
            .map(|(position, _)| *position)
    }

    pub fn players(&self) -> impl Iterator<Item = &EvaluatedPlayer> {
        self.players.values().flatten()
    }

    pub fn club_counts(&self) -> HashMap<u32, usize> {
        let mut counts = HashMap::new();
        for player in self.players() {
            *counts.entry(player.team_id()).or_insert(0) += 1;
        }
        counts
    }

    /// Hypothetical squad with `player_out` replaced by `player_in`.
    ///
    /// `player_in` is appended to the end of its position's list; every
    /// other position is carried over untouched.
    pub fn with_swap(&self, player_out: &EvaluatedPlayer, player_in: &EvaluatedPlayer) -> Squad {
        let mut players = self.players.clone();

        if let Some(group) = players.get_mut(&player_out.position()) {
            group.retain(|p| p.id() != player_out.id());
        }

        players
            .entry(player_in.position())
            .or_default()
            .push(player_in.clone());

        Squad { players }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{full_squad, player};

    #[test]
    fn test_from_players_groups_by_position() {
        let squad = full_squad();

        assert_eq!(squad.len(), 15);
        assert_eq!(squad.by_position(PlayerPosition::Goalkeeper).len(), 2);
        assert_eq!(squad.by_position(PlayerPosition::Defender).len(), 5);
        assert_eq!(squad.by_position(PlayerPosition::Midfielder).len(), 5);
        assert_eq!(squad.by_position(PlayerPosition::Forward).len(), 3);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Squad::from_players(vec![
            player(1, PlayerPosition::Defender, 1, 45, 2.0),
            player(1, PlayerPosition::Defender, 2, 50, 3.0),
        ]);

        assert!(matches!(result, Err(TransferError::InvalidInput(_))));
    }

    #[test]
    fn test_misfiled_position_is_rejected() {
        let mut players = BTreeMap::new();
        players.insert(
            PlayerPosition::Forward,
            vec![player(1, PlayerPosition::Defender, 1, 45, 2.0)],
        );

        assert!(Squad::new(players).is_err());
    }

    #[test]
    fn test_with_swap_leaves_original_untouched() {
        let squad = full_squad();
        let out = squad.by_position(PlayerPosition::Defender)[0].clone();
        let incoming = player(500, PlayerPosition::Defender, 19, 40, 6.0);

        let swapped = squad.with_swap(&out, &incoming);

        assert!(squad.contains(out.id()));
        assert!(!squad.contains(500));
        assert!(!swapped.contains(out.id()));
        assert_eq!(swapped.by_position(PlayerPosition::Defender).last(), Some(&incoming));
        assert_eq!(swapped.len(), squad.len());
        assert_eq!(
            swapped.total_cost(),
            squad.total_cost() - out.cost() + incoming.cost()
        );
    }

    #[test]
    fn test_club_counts() {
        let squad = Squad::from_players(vec![
            player(1, PlayerPosition::Defender, 4, 45, 2.0),
            player(2, PlayerPosition::Midfielder, 4, 50, 3.0),
            player(3, PlayerPosition::Forward, 9, 60, 3.0),
        ])
        .unwrap();

        let counts = squad.club_counts();
        assert_eq!(counts.get(&4), Some(&2));
        assert_eq!(counts.get(&9), Some(&1));
    }
}
