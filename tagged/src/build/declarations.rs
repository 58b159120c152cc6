use super::{constructor::Constructor, sum_descriptor::SumDescriptor};
use crate::types::{self, DeclarationError};
use log::debug;

/// Declares a product type with the given field names and returns its
/// constructor.
///
/// ```rust
/// use tagged::{tagged, Construct};
///
/// let tuple3 = tagged(["x", "y", "z"]).unwrap();
/// let value = tuple3.construct(vec![1.into(), 2.into(), 3.into()]).unwrap();
///
/// assert_eq!(value.get("y"), Some(&2.into()));
/// assert!(tuple3.is_instance(&value.into()));
/// ```
pub fn tagged(
    fields: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<Constructor, DeclarationError> {
    let type_ = types::Product::new(fields)?;

    debug!("declared product type with {} fields", type_.arity());

    Ok(Constructor::new(type_))
}

/// Declares a sum type from variant names and their field names.
///
/// ```rust
/// use tagged::{tagged_sum, Construct, Handlers, Value};
///
/// let option = tagged_sum([("Some", vec!["x"]), ("None", vec![])]).unwrap();
/// let handlers = Handlers::new()
///     .case("Some", |fields: &[Value]| fields[0].to_integer().unwrap_or_default() + 1)
///     .case("None", |_| 0);
///
/// let some = option.constructor("Some").unwrap().construct(vec![1.into()]).unwrap();
///
/// assert_eq!(some.cata(&handlers), Ok(2));
/// assert_eq!(option.singleton("None").unwrap().cata(&handlers), Ok(0));
/// ```
pub fn tagged_sum<N, F>(
    variants: impl IntoIterator<Item = (N, F)>,
) -> Result<SumDescriptor, DeclarationError>
where
    N: AsRef<str>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    let type_ = types::Sum::new(variants)?;

    debug!("declared sum type with {} variants", type_.len());

    Ok(SumDescriptor::new(type_))
}
