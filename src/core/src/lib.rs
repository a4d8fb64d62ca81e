pub mod player;
pub mod shared;
pub mod squad;
pub mod transfers;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use player::{
    EvaluatedPlayer, EvaluatedPlayerBuilder, PlayerAvailability, PlayerInfo, PlayerPosition,
};
pub use shared::CurrencyValue;
pub use squad::{FplSquadRules, PlayerPool, Squad, SquadRules, SquadRulesConfig};
pub use transfers::{
    named_transfers, FixedIndex, NamedTransfer, SeededRandom, SelectorSettings, ShortlistPolicy,
    ThreadRandom, TransferError, TransferModel, TransferRandom, TransferResult, TransferSelector,
    TransferWishlistBuilder, WishlistBuilder,
};
