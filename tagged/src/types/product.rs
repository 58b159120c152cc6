use super::error::DeclarationError;
use crate::analysis::validation;
use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

/// An ordered list of field names.
///
/// Every call to [`Product::new`] creates a distinct identity. Two products
/// with the same field names are still different types.
#[derive(Clone, Debug)]
pub struct Product(Arc<ProductInner>);

#[derive(Debug)]
struct ProductInner {
    fields: Vec<String>,
}

impl Product {
    pub fn new(fields: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Self, DeclarationError> {
        let fields = fields
            .into_iter()
            .map(|field| field.as_ref().to_owned())
            .collect::<Vec<_>>();

        validation::check_field_names(fields.iter().map(String::as_str))?;

        Ok(Self(ProductInner { fields }.into()))
    }

    pub fn fields(&self) -> &[String] {
        &self.0.fields
    }

    pub fn arity(&self) -> usize {
        self.0.fields.len()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.0.fields.iter().position(|field| field == name)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keep_field_order() {
        let product = Product::new(["x", "y", "z"]).unwrap();

        assert_eq!(product.fields(), ["x", "y", "z"]);
        assert_eq!(product.arity(), 3);
        assert_eq!(product.field_index("y"), Some(1));
        assert_eq!(product.field_index("w"), None);
    }

    #[test]
    fn create_empty_product() {
        assert_eq!(Product::new(Vec::<String>::new()).unwrap().arity(), 0);
    }

    #[test]
    fn compare_by_identity() {
        let product = Product::new(["x"]).unwrap();

        assert_eq!(product, product.clone());
        assert_ne!(product, Product::new(["x"]).unwrap());
    }

    #[test]
    fn reject_duplicate_fields() {
        assert_eq!(
            Product::new(["x", "y", "x"]),
            Err(DeclarationError::DuplicateField("x".into()))
        );
    }

    #[test]
    fn reject_invalid_field_names() {
        assert_eq!(
            Product::new(["x", "1y"]),
            Err(DeclarationError::InvalidName("1y".into()))
        );
    }
}
