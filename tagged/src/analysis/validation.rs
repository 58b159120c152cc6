use crate::types::DeclarationError;
use fnv::FnvHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

pub fn check_field_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), DeclarationError> {
    check_names(names, DeclarationError::DuplicateField)
}

pub fn check_variant_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), DeclarationError> {
    check_names(names, DeclarationError::DuplicateVariant)
}

fn check_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    duplicate: fn(String) -> DeclarationError,
) -> Result<(), DeclarationError> {
    let mut checked = FnvHashSet::default();

    for name in names {
        check_name(name)?;

        if !checked.insert(name) {
            return Err(duplicate(name.into()));
        }
    }

    Ok(())
}

fn check_name(name: &str) -> Result<(), DeclarationError> {
    if IDENTIFIER_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(DeclarationError::InvalidName(name.into()))
    }
}
