use super::variant_constructor::VariantConstructor;
use crate::{
    types,
    value::{self, Value},
};

/// A variant exposed by a sum type: a constructor, or the only value of a
/// variant without fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Constructor(VariantConstructor),
    Singleton(value::Sum),
}

impl Member {
    pub fn variant(&self) -> &types::Variant {
        match self {
            Self::Constructor(constructor) => constructor.variant(),
            Self::Singleton(singleton) => singleton.variant(),
        }
    }

    pub fn name(&self) -> &str {
        self.variant().name()
    }

    pub fn is_instance(&self, value: &Value) -> bool {
        value
            .to_sum()
            .map(|sum| sum.is_variant(self.variant()))
            .unwrap_or_default()
    }

    pub fn to_constructor(&self) -> Option<&VariantConstructor> {
        if let Self::Constructor(constructor) = self {
            Some(constructor)
        } else {
            None
        }
    }

    pub fn to_singleton(&self) -> Option<&value::Sum> {
        if let Self::Singleton(singleton) = self {
            Some(singleton)
        } else {
            None
        }
    }
}
