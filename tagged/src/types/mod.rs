mod error;
mod product;
mod sum;
mod variant;

pub use error::*;
pub use product::*;
pub use sum::*;
pub use variant::*;
