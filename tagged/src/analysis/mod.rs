pub mod format;
pub(crate) mod validation;

pub use format::*;
