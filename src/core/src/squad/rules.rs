use crate::shared::CurrencyValue;
use crate::{PlayerPosition, Squad};
use log::trace;

/// Decides whether a (possibly hypothetical) squad is legal under the given funds.
pub trait SquadRules {
    fn is_valid_squad(&self, squad: &Squad, available_funds: CurrencyValue) -> bool;
}

impl<F> SquadRules for F
where
    F: Fn(&Squad, CurrencyValue) -> bool,
{
    fn is_valid_squad(&self, squad: &Squad, available_funds: CurrencyValue) -> bool {
        self(squad, available_funds)
    }
}

#[derive(Debug, Clone)]
pub struct SquadRulesConfig {
    pub squad_size: usize,
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
    pub max_players_per_club: usize,
}

impl SquadRulesConfig {
    pub fn quota(&self, position: PlayerPosition) -> usize {
        match position {
            PlayerPosition::Goalkeeper => self.goalkeepers,
            PlayerPosition::Defender => self.defenders,
            PlayerPosition::Midfielder => self.midfielders,
            PlayerPosition::Forward => self.forwards,
        }
    }
}

impl Default for SquadRulesConfig {
    fn default() -> Self {
        SquadRulesConfig {
            squad_size: 15,
            goalkeepers: 2,
            defenders: 5,
            midfielders: 5,
            forwards: 3,
            max_players_per_club: 3,
        }
    }
}

/// The standard fantasy squad rules: budget, squad size, position quotas and club cap.
#[derive(Debug, Clone, Default)]
pub struct FplSquadRules {
    config: SquadRulesConfig,
}

impl FplSquadRules {
    pub fn new(config: SquadRulesConfig) -> Self {
        FplSquadRules { config }
    }

    fn within_budget(&self, squad: &Squad, available_funds: CurrencyValue) -> bool {
        let cost = squad.total_cost();
        if cost > available_funds {
            trace!("squad rejected: cost {} exceeds funds {}", cost, available_funds);
            return false;
        }
        true
    }

    fn has_squad_size(&self, squad: &Squad) -> bool {
        if squad.len() != self.config.squad_size {
            trace!(
                "squad rejected: {} players, {} required",
                squad.len(),
                self.config.squad_size
            );
            return false;
        }
        true
    }

    fn meets_position_quotas(&self, squad: &Squad) -> bool {
        PlayerPosition::ALL.iter().all(|position| {
            let count = squad.by_position(*position).len();
            let quota = self.config.quota(*position);
            if count != quota {
                trace!("squad rejected: {} {} players, {} required", count, position, quota);
                return false;
            }
            true
        })
    }

    fn within_club_limit(&self, squad: &Squad) -> bool {
        match squad
            .club_counts()
            .into_iter()
            .find(|(_, count)| *count > self.config.max_players_per_club)
        {
            Some((team_id, count)) => {
                trace!(
                    "squad rejected: {} players from club {}, max {}",
                    count,
                    team_id,
                    self.config.max_players_per_club
                );
                false
            }
            None => true,
        }
    }
}

impl SquadRules for FplSquadRules {
    fn is_valid_squad(&self, squad: &Squad, available_funds: CurrencyValue) -> bool {
        self.within_budget(squad, available_funds)
            && self.has_squad_size(squad)
            && self.meets_position_quotas(squad)
            && self.within_club_limit(squad)
    }
}
