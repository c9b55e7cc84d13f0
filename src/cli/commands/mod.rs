//! Command implementations

mod check;
mod env;
mod mask;
mod serve;

pub use check::check;
pub use env::env;
pub use mask::mask;
pub use serve::serve;
