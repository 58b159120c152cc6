use super::value_::Value;
use crate::{analysis::format, types};
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// A value of a standalone product type.
#[derive(Clone, Debug)]
pub struct Product(Arc<ProductInner>);

#[derive(Debug)]
struct ProductInner {
    type_: types::Product,
    fields: Vec<Value>,
}

impl Product {
    pub(crate) fn new(type_: types::Product, fields: Vec<Value>) -> Self {
        debug_assert_eq!(type_.arity(), fields.len());

        Self(ProductInner { type_, fields }.into())
    }

    pub fn type_(&self) -> &types::Product {
        &self.0.type_
    }

    pub fn fields(&self) -> &[Value] {
        &self.0.fields
    }

    pub fn field_names(&self) -> &[String] {
        self.0.type_.fields()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .type_
            .field_index(name)
            .map(|index| &self.0.fields[index])
    }

    pub fn is_instance_of(&self, type_: &types::Product) -> bool {
        &self.0.type_ == type_
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for Product {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", format::format_values(self.fields()))
    }
}
