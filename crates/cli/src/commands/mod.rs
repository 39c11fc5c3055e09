//! Command implementations.

mod info;
mod split;
mod validate;

pub use info::run_info;
pub use split::run_split;
pub use validate::run_validate;
