use super::{
    construct::{check_arity, Construct},
    error::ConstructError,
    member::Member,
    variant_constructor::VariantConstructor,
};
use crate::{
    types,
    value::{self, Value},
};

/// The members of a sum type, one per variant in declaration order.
///
/// Variants with fields are exposed as constructors and variants without
/// fields as singleton values. The descriptor itself is not constructible.
#[derive(Clone, Debug)]
pub struct SumDescriptor {
    type_: types::Sum,
    members: Vec<Member>,
}

impl SumDescriptor {
    pub fn new(type_: types::Sum) -> Self {
        let members = type_
            .variants()
            .map(|variant| {
                if variant.is_nullary() {
                    Member::Singleton(value::Sum::new(variant, vec![]))
                } else {
                    Member::Constructor(VariantConstructor::new(variant))
                }
            })
            .collect();

        Self { type_, members }
    }

    pub fn type_(&self) -> &types::Sum {
        &self.type_
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.type_
            .variant(name)
            .map(|variant| &self.members[variant.index()])
    }

    pub fn constructor(&self, name: &str) -> Option<&VariantConstructor> {
        self.member(name)?.to_constructor()
    }

    pub fn singleton(&self, name: &str) -> Option<&value::Sum> {
        self.member(name)?.to_singleton()
    }

    pub fn is_instance(&self, value: &Value) -> bool {
        value
            .to_sum()
            .map(|sum| sum.is_a(&self.type_))
            .unwrap_or_default()
    }

    /// Builds a value of the variant named `name`, which yields the singleton
    /// for a variant without fields.
    pub fn construct_variant(
        &self,
        name: &str,
        arguments: Vec<Value>,
    ) -> Result<value::Sum, ConstructError> {
        match self
            .member(name)
            .ok_or_else(|| ConstructError::UnknownVariant(name.into()))?
        {
            Member::Constructor(constructor) => constructor.construct(arguments),
            Member::Singleton(singleton) => {
                check_arity(0, &arguments)?;

                Ok(singleton.clone())
            }
        }
    }
}

impl Construct for SumDescriptor {
    type Output = value::Sum;

    fn construct(&self, _: Vec<Value>) -> Result<value::Sum, ConstructError> {
        Err(ConstructError::InvalidInvocation)
    }
}
