use super::{product::Product, sum::Sum};

/// One variant of one sum declaration.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variant {
    sum: Sum,
    index: usize,
}

impl Variant {
    pub(crate) fn new(sum: Sum, index: usize) -> Self {
        Self { sum, index }
    }

    pub fn sum(&self) -> &Sum {
        &self.sum
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        self.sum.variant_name(self.index)
    }

    pub fn product(&self) -> &Product {
        self.sum.variant_product(self.index)
    }

    pub fn fields(&self) -> &[String] {
        self.product().fields()
    }

    pub fn arity(&self) -> usize {
        self.product().arity()
    }

    pub fn is_nullary(&self) -> bool {
        self.arity() == 0
    }
}
