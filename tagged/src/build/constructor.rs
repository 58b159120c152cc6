use super::{
    construct::{check_arity, Construct},
    error::ConstructError,
};
use crate::{
    types,
    value::{self, Value},
};

/// Builds values of a standalone product type.
#[derive(Clone, Debug, PartialEq)]
pub struct Constructor {
    type_: types::Product,
}

impl Constructor {
    pub fn new(type_: types::Product) -> Self {
        Self { type_ }
    }

    pub fn type_(&self) -> &types::Product {
        &self.type_
    }

    pub fn fields(&self) -> &[String] {
        self.type_.fields()
    }

    pub fn arity(&self) -> usize {
        self.type_.arity()
    }

    pub fn is_instance(&self, value: &Value) -> bool {
        value
            .to_product()
            .map(|product| product.is_instance_of(&self.type_))
            .unwrap_or_default()
    }
}

impl Construct for Constructor {
    type Output = value::Product;

    fn construct(&self, arguments: Vec<Value>) -> Result<value::Product, ConstructError> {
        check_arity(self.arity(), &arguments)?;

        Ok(value::Product::new(self.type_.clone(), arguments))
    }
}
