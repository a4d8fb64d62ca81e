pub mod error;
pub mod random;
pub mod report;
pub mod selector;
pub mod transfer;
pub mod wishlist;

pub use error::*;
pub use random::*;
pub use report::*;
pub use selector::*;
pub use transfer::*;
pub use wishlist::*;
