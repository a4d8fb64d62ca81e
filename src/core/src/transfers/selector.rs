use crate::shared::CurrencyValue;
use crate::transfers::{
    TransferError, TransferModel, TransferRandom, TransferResult, TransferWishlistBuilder,
    WishlistBuilder,
};
use crate::{EvaluatedPlayer, FplSquadRules, PlayerPool, Squad, SquadRules};
use itertools::iproduct;
use log::{debug, warn};

const DEFAULT_SELECTION_WINDOW: usize = 5;

/// What to do when fewer legal transfers exist than the selection window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortlistPolicy {
    /// Draw from however many legal transfers there are.
    #[default]
    Clamp,
    /// Fail with [`TransferError::InsufficientCandidates`].
    Fail,
}

#[derive(Debug, Clone)]
pub struct SelectorSettings {
    /// How many of the best-ranked transfers the random pick is drawn from.
    pub selection_window: usize,
    pub shortlist_policy: ShortlistPolicy,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        SelectorSettings {
            selection_window: DEFAULT_SELECTION_WINDOW,
            shortlist_policy: ShortlistPolicy::default(),
        }
    }
}

/// Picks one transfer from the best-ranked legal swaps.
///
/// Every same-position pair of (weakest-first squad member, best-first
/// target) is applied to a copy of the squad and kept only if the squad
/// rules accept the copy under the squad's cost plus the bank. Kept pairs
/// are ranked by evaluation gain and one of the top `selection_window` is
/// returned, so repeated runs do not always make the same move.
pub struct TransferSelector<W = TransferWishlistBuilder, R = FplSquadRules> {
    wishlist: W,
    rules: R,
    settings: SelectorSettings,
}

impl TransferSelector {
    pub fn new() -> Self {
        TransferSelector {
            wishlist: TransferWishlistBuilder,
            rules: FplSquadRules::default(),
            settings: SelectorSettings::default(),
        }
    }
}

impl Default for TransferSelector {
    fn default() -> Self {
        TransferSelector::new()
    }
}

impl<W: WishlistBuilder, R: SquadRules> TransferSelector<W, R> {
    pub fn with(wishlist: W, rules: R, settings: SelectorSettings) -> Self {
        TransferSelector {
            wishlist,
            rules,
            settings,
        }
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    pub fn select_single_transfer(
        &self,
        existing_squad: &Squad,
        all_players: &PlayerPool,
        in_bank: CurrencyValue,
        random: &mut dyn TransferRandom,
    ) -> TransferResult<TransferModel> {
        self.select_transfer(existing_squad, all_players, in_bank, 1, random)
    }

    /// Selects one transfer.
    ///
    /// `number_of_transfers` greater than one is accepted but still yields a
    /// single swap; planning several transfers together is not supported.
    pub fn select_transfer(
        &self,
        existing_squad: &Squad,
        all_players: &PlayerPool,
        in_bank: CurrencyValue,
        number_of_transfers: u8,
        random: &mut dyn TransferRandom,
    ) -> TransferResult<TransferModel> {
        if number_of_transfers == 0 {
            return Err(TransferError::InvalidInput(
                "number of transfers must be at least 1".to_string(),
            ));
        }
        if number_of_transfers > 1 {
            warn!(
                "{} transfers requested, only a single transfer is selected",
                number_of_transfers
            );
        }

        let mut ranked = self.rank_transfers(existing_squad, all_players, in_bank)?;

        let window = self.selection_window(ranked.len())?;
        // a caller-supplied source may not honour `0..window`
        let index = random.next_index(window).min(window - 1);

        debug!(
            "selected transfer rank {} of {} (window {})",
            index,
            ranked.len(),
            window
        );

        Ok(ranked.swap_remove(index))
    }

    /// Every legal transfer, best evaluation gain first.
    ///
    /// Equal gains are ordered by incoming player id, then outgoing player id.
    pub fn rank_transfers(
        &self,
        existing_squad: &Squad,
        all_players: &PlayerPool,
        in_bank: CurrencyValue,
    ) -> TransferResult<Vec<TransferModel>> {
        Self::validate_input(existing_squad, all_players, in_bank)?;

        let in_candidates = self
            .wishlist
            .build_transfer_target_wishlist(all_players, existing_squad);
        let out_candidates = self.wishlist.build_squad_transfer_list(existing_squad);

        debug!(
            "transfer candidates: {} out, {} in",
            out_candidates.len(),
            in_candidates.len()
        );

        let mut transfers: Vec<TransferModel> =
            iproduct!(in_candidates.iter(), out_candidates.iter())
                    .filter(|(player_in, player_out)| {
                    self.is_valid_transfer(player_out, player_in, existing_squad, in_bank)
                })
                .map(|(player_in, player_out)| {
                    TransferModel::new((*player_out).clone(), (*player_in).clone())
                })
                .collect();

        transfers.sort_by(|a, b| {
            b.eval_difference
                .total_cmp(&a.eval_difference)
                .then_with(|| a.player_in.id().cmp(&b.player_in.id()))
                .then_with(|| a.player_out.id().cmp(&b.player_out.id()))
        });

        debug!("legal transfers: {}", transfers.len());

        Ok(transfers)
    }

    fn validate_input(
        existing_squad: &Squad,
        all_players: &PlayerPool,
        in_bank: CurrencyValue,
    ) -> TransferResult<()> {
        if existing_squad.is_empty() {
            return Err(TransferError::InvalidInput("existing squad is empty".to_string()));
        }

        if in_bank.is_negative() {
            return Err(TransferError::InvalidInput(format!(
                "money in bank is negative: {}",
                in_bank
            )));
        }

        if existing_squad
            .players()
            .try_fold(in_bank, |funds, p| funds.checked_add(p.cost()))
            .is_none()
        {
            return Err(TransferError::InvalidInput(format!(
                "squad cost plus {} in bank overflows available funds",
                in_bank
            )));
        }

        if let Some(position) = existing_squad
            .positions()
            .find(|position| all_players.by_position(*position).is_none())
        {
            return Err(TransferError::InvalidInput(format!(
                "no {} candidates were looked up",
                position
            )));
        }

        // total_cmp would rank NaN above every real evaluation
        if let Some(player) = existing_squad
            .players()
            .chain(all_players.players())
            .find(|p| !p.evaluation.is_finite())
        {
            return Err(TransferError::InvalidInput(format!(
                "player {} has non-finite evaluation {}",
                player.id(),
                player.evaluation
            )));
        }

        Ok(())
    }

    fn selection_window(&self, available: usize) -> TransferResult<usize> {
        if available == 0 {
            return Err(TransferError::NoLegalTransfer);
        }

        let required = self.settings.selection_window.max(1);

        if available < required {
            return match self.settings.shortlist_policy {
                ShortlistPolicy::Clamp => Ok(available),
                ShortlistPolicy::Fail => Err(TransferError::InsufficientCandidates {
                    available,
                    required,
                }),
            };
        }

        Ok(required)
    }

    fn is_valid_transfer(
        &self,
        player_out: &EvaluatedPlayer,
        player_in: &EvaluatedPlayer,
        existing_squad: &Squad,
        in_bank: CurrencyValue,
    ) -> bool {
        player_out.position() == player_in.position()
            && self.are_squad_rules_valid(player_out, player_in, existing_squad, in_bank)
    }

    fn are_squad_rules_valid(
        &self,
        player_out: &EvaluatedPlayer,
        player_in: &EvaluatedPlayer,
        existing_squad: &Squad,
        in_bank: CurrencyValue,
    ) -> bool {
        let available_funds = existing_squad.total_cost() + in_bank;
        let new_squad = existing_squad.with_swap(player_out, player_in);

        self.rules.is_valid_squad(&new_squad, available_funds)
    }
}
