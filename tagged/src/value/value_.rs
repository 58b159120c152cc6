use super::{product::Product, sum::Sum};
use crate::analysis::format;
use std::{
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// A field value.
///
/// Products and sums compare by reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(Arc<str>),
    Product(Product),
    Sum(Sum),
}

impl Value {
    pub fn to_boolean(&self) -> Option<bool> {
        if let Self::Boolean(boolean) = self {
            Some(*boolean)
        } else {
            None
        }
    }

    pub fn to_integer(&self) -> Option<i64> {
        if let Self::Integer(integer) = self {
            Some(*integer)
        } else {
            None
        }
    }

    pub fn to_float(&self) -> Option<f64> {
        if let Self::Float(float) = self {
            Some(*float)
        } else {
            None
        }
    }

    pub fn to_str(&self) -> Option<&str> {
        if let Self::String(string) = self {
            Some(string.as_ref())
        } else {
            None
        }
    }

    pub fn to_product(&self) -> Option<&Product> {
        if let Self::Product(product) = self {
            Some(product)
        } else {
            None
        }
    }

    pub fn to_sum(&self) -> Option<&Sum> {
        if let Self::Sum(sum) = self {
            Some(sum)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", format::format_value(self))
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Integer(integer.into())
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.into())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(string.into())
    }
}

impl From<Product> for Value {
    fn from(product: Product) -> Self {
        Self::Product(product)
    }
}

impl From<Sum> for Value {
    fn from(sum: Sum) -> Self {
        Self::Sum(sum)
    }
}
