mod error;
mod handlers;
mod product;
mod sum;
mod value_;

pub use error::*;
pub use handlers::*;
pub use product::*;
pub use sum::*;
pub use value_::*;
