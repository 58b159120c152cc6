mod construct;
mod constructor;
mod declarations;
mod error;
mod member;
mod sum_descriptor;
mod variant_constructor;

pub use construct::*;
pub use constructor::*;
pub use declarations::*;
pub use error::*;
pub use member::*;
pub use sum_descriptor::*;
pub use variant_constructor::*;
