pub mod pool;
pub mod rules;
pub mod squad;

pub use pool::*;
pub use rules::*;
pub use squad::*;
