use super::{error::CataError, handlers::Handlers, value_::Value};
use crate::{analysis::format, types};
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// A value of one variant of a sum type.
#[derive(Clone, Debug)]
pub struct Sum(Arc<SumInner>);

#[derive(Debug)]
struct SumInner {
    variant: types::Variant,
    fields: Vec<Value>,
}

impl Sum {
    pub(crate) fn new(variant: types::Variant, fields: Vec<Value>) -> Self {
        debug_assert_eq!(variant.arity(), fields.len());

        Self(SumInner { variant, fields }.into())
    }

    pub fn variant(&self) -> &types::Variant {
        &self.0.variant
    }

    pub fn type_(&self) -> &types::Sum {
        self.0.variant.sum()
    }

    pub fn tag(&self) -> &str {
        self.0.variant.name()
    }

    pub fn fields(&self) -> &[Value] {
        &self.0.fields
    }

    pub fn field_names(&self) -> &[String] {
        self.0.variant.fields()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .variant
            .product()
            .field_index(name)
            .map(|index| &self.0.fields[index])
    }

    pub fn is_variant(&self, variant: &types::Variant) -> bool {
        &self.0.variant == variant
    }

    pub fn is_a(&self, sum: &types::Sum) -> bool {
        self.type_() == sum
    }

    /// Calls the handler for this value's own variant with its fields in
    /// declaration order. Handlers that take a receiver get this value too.
    pub fn cata<R>(&self, handlers: &Handlers<'_, R>) -> Result<R, CataError> {
        let handler = handlers
            .get(self.tag())
            .ok_or_else(|| CataError::MissingCase(self.tag().into()))?;

        Ok(handler(self, self.fields()))
    }
}

impl PartialEq for Sum {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for Sum {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", format::format_values(self.fields()))
    }
}
