//! Tagged product and sum types with case analysis.
//!
//! [`tagged`] declares a product type and returns its constructor.
//! [`tagged_sum`] declares a closed set of variants sharing one sum type.
//! Values of sum types dispatch on their own variant with
//! [`cata`](value::Sum::cata).

pub mod analysis;
pub mod build;
mod error;
mod macros;
pub mod types;
pub mod value;

pub use build::{
    tagged, tagged_sum, Construct, ConstructError, Constructor, Member, SumDescriptor,
    VariantConstructor,
};
pub use error::Error;
pub use types::DeclarationError;
pub use value::{CataError, Handlers, Value};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
