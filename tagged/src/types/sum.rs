use super::{error::DeclarationError, product::Product, variant::Variant};
use crate::{
    analysis::validation,
    value::{CataError, Handlers},
};
use indexmap::IndexMap;
use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A closed set of named variants, each an ordered list of field names.
///
/// Like [`Product`], a sum has identity: values built under one declaration
/// never belong to another declaration of the same shape.
#[derive(Clone, Debug)]
pub struct Sum(Arc<SumInner>);

#[derive(Debug)]
struct SumInner {
    variants: IndexMap<String, Product>,
}

impl Sum {
    pub fn new<N, F>(variants: impl IntoIterator<Item = (N, F)>) -> Result<Self, DeclarationError>
    where
        N: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let variants = variants
            .into_iter()
            .map(|(name, fields)| (name.as_ref().to_owned(), fields))
            .collect::<Vec<_>>();

        validation::check_variant_names(variants.iter().map(|(name, _)| name.as_str()))?;

        let mut products = IndexMap::with_capacity(variants.len());

        for (name, fields) in variants {
            let product = Product::new(fields)?;

            products.insert(name, product);
        }

        Ok(Self(SumInner { variants: products }.into()))
    }

    pub fn len(&self) -> usize {
        self.0.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.variants.is_empty()
    }

    pub fn variant(&self, name: &str) -> Option<Variant> {
        self.0
            .variants
            .get_index_of(name)
            .map(|index| Variant::new(self.clone(), index))
    }

    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        (0..self.len()).map(|index| Variant::new(self.clone(), index))
    }

    /// Checks that `handlers` covers every variant, reporting the first
    /// uncovered one in declaration order.
    pub fn check_exhaustive<R>(&self, handlers: &Handlers<'_, R>) -> Result<(), CataError> {
        match self
            .0
            .variants
            .keys()
            .find(|name| !handlers.contains(name))
        {
            Some(name) => Err(CataError::MissingCase(name.clone())),
            None => Ok(()),
        }
    }

    pub(crate) fn variant_name(&self, index: usize) -> &str {
        self.entry(index).0
    }

    pub(crate) fn variant_product(&self, index: usize) -> &Product {
        self.entry(index).1
    }

    fn entry(&self, index: usize) -> (&str, &Product) {
        let (name, product) = self
            .0
            .variants
            .get_index(index)
            .unwrap_or_else(|| unreachable!("variant index out of range: {}", index));

        (name.as_str(), product)
    }
}

impl PartialEq for Sum {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Sum {}

impl Hash for Sum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn option() -> Sum {
        Sum::new([("Some", vec!["x"]), ("None", vec![])]).unwrap()
    }

    #[test]
    fn keep_variant_order() {
        let sum = Sum::new([("C", vec![]), ("A", vec!["x"]), ("B", vec!["x", "y"])]).unwrap();

        assert_eq!(
            sum.variants()
                .map(|variant| variant.name().to_owned())
                .collect::<Vec<_>>(),
            ["C", "A", "B"]
        );
    }

    #[test]
    fn find_variant() {
        let sum = option();

        assert_eq!(sum.variant("None").map(|variant| variant.index()), Some(1));
        assert_eq!(sum.variant("Other"), None);
    }

    #[test]
    fn reject_duplicate_variants() {
        assert_eq!(
            Sum::new([("A", vec![]), ("B", vec![]), ("A", vec!["x"])]),
            Err(DeclarationError::DuplicateVariant("A".into()))
        );
    }

    #[test]
    fn reject_duplicate_fields_in_variant() {
        assert_eq!(
            Sum::new([("A", vec!["x", "x"])]),
            Err(DeclarationError::DuplicateField("x".into()))
        );
    }

    #[test]
    fn reject_invalid_variant_names() {
        assert_eq!(
            Sum::new([("Some thing", vec!["x"])]),
            Err(DeclarationError::InvalidName("Some thing".into()))
        );
    }

    #[test]
    fn compare_by_identity() {
        let sum = option();

        assert_eq!(sum, sum.clone());
        assert_ne!(sum, option());
    }

    #[test]
    fn check_exhaustive_handlers() {
        let handlers = Handlers::new()
            .case("Some", |_| ())
            .case("None", |_| ());

        assert_eq!(option().check_exhaustive(&handlers), Ok(()));
    }

    #[test]
    fn check_non_exhaustive_handlers() {
        let handlers = Handlers::new().case("Some", |_| ());

        assert_eq!(
            option().check_exhaustive(&handlers),
            Err(CataError::MissingCase("None".into()))
        );
    }

    #[test]
    fn ignore_extra_handlers_in_exhaustiveness_check() {
        let handlers = Handlers::new()
            .case("Some", |_| ())
            .case("None", |_| ())
            .case("Other", |_| ());

        assert_eq!(option().check_exhaustive(&handlers), Ok(()));
    }
}
