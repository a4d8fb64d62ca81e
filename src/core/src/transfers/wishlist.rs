use crate::{EvaluatedPlayer, PlayerPool, Squad};
use itertools::Itertools;

pub trait WishlistBuilder {
    /// Players worth buying, best evaluation first. Never contains a squad member.
    fn build_transfer_target_wishlist<'p>(
        &self,
        all_players: &'p PlayerPool,
        existing_squad: &Squad,
    ) -> Vec<&'p EvaluatedPlayer>;

    /// Squad members that could be sold, weakest first.
    fn build_squad_transfer_list<'s>(&self, existing_squad: &'s Squad) -> Vec<&'s EvaluatedPlayer>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransferWishlistBuilder;

impl WishlistBuilder for TransferWishlistBuilder {
    fn build_transfer_target_wishlist<'p>(
        &self,
        all_players: &'p PlayerPool,
        existing_squad: &Squad,
    ) -> Vec<&'p EvaluatedPlayer> {
        all_players
            .players()
            .filter(|p| !existing_squad.contains(p.id()))
            .filter(|p| p.player_info.availability.can_be_bought())
            .sorted_by(|a, b| {
                b.evaluation
                    .total_cmp(&a.evaluation)
                    .then_with(|| a.id().cmp(&b.id()))
            })
            .collect()
    }

    fn build_squad_transfer_list<'s>(&self, existing_squad: &'s Squad) -> Vec<&'s EvaluatedPlayer> {
        existing_squad
            .players()
            .sorted_by(|a, b| {
                a.evaluation
                    .total_cmp(&b.evaluation)
                    .then_with(|| a.id().cmp(&b.id()))
            })
            .collect()
    }
}
