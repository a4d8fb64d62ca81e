pub mod availability;
pub mod builder;
pub mod player;
pub mod position;

pub use availability::*;
pub use builder::*;
pub use player::*;
pub use position::*;
