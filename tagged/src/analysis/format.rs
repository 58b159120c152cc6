use crate::value::Value;
use std::fmt::Display;

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Boolean(boolean) => boolean.to_string(),
        Value::Integer(integer) => integer.to_string(),
        Value::Float(float) => format_float(*float),
        Value::String(string) => string.to_string(),
        Value::Product(product) => format_values(product.fields()),
        Value::Sum(sum) => format_values(sum.fields()),
    }
}

pub fn format_values(values: &[Value]) -> String {
    format_fields(
        &values
            .iter()
            .map(|value| value as &dyn Display)
            .collect::<Vec<_>>(),
    )
}

/// Renders fields as `(a, b, c)`, or `()` without any.
pub fn format_fields(fields: &[&dyn Display]) -> String {
    format!(
        "({})",
        fields
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// Renders a float the way the original host language prints numbers:
/// shortest digits, exponent form outside `[1e-6, 1e21)`.
pub fn format_float(float: f64) -> String {
    let absolute = float.abs();

    if float.is_infinite() {
        if float.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .into()
    } else if float == 0.0 {
        "0".into()
    } else if absolute >= 1e21 || absolute < 1e-6 {
        let exponential = format!("{:e}", float);

        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponential,
        }
    } else {
        float.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::Construct, tagged, tagged_sum};

    #[test]
    fn format_primitives() {
        insta::assert_snapshot!(format_value(&true.into()), @"true");
        insta::assert_snapshot!(format_value(&(-42).into()), @"-42");
        insta::assert_snapshot!(format_value(&"foo".into()), @"foo");
    }

    #[test]
    fn format_floats() {
        insta::assert_snapshot!(format_value(&1.5.into()), @"1.5");
        insta::assert_snapshot!(format_value(&2.0.into()), @"2");
        insta::assert_snapshot!(format_value(&(-0.0).into()), @"0");
        insta::assert_snapshot!(format_value(&f64::INFINITY.into()), @"Infinity");
        insta::assert_snapshot!(format_value(&f64::NEG_INFINITY.into()), @"-Infinity");
        insta::assert_snapshot!(format_value(&f64::NAN.into()), @"NaN");
    }

    #[test]
    fn format_floats_in_exponent_form() {
        insta::assert_snapshot!(format_float(1e21), @"1e+21");
        insta::assert_snapshot!(format_float(-1.5e22), @"-1.5e+22");
        insta::assert_snapshot!(format_float(1e-7), @"1e-7");
        insta::assert_snapshot!(format_float(2.5e-8), @"2.5e-8");
        insta::assert_snapshot!(format_float(1e20), @"100000000000000000000");
        insta::assert_snapshot!(format_float(0.000001), @"0.000001");
        insta::assert_snapshot!(format_float(0.1), @"0.1");
    }

    #[test]
    fn format_product() {
        let pair = tagged(["x", "y"]).unwrap();

        insta::assert_snapshot!(
            format_value(&pair.construct(vec![1.into(), 2.into()]).unwrap().into()),
            @"(1, 2)"
        );
    }

    #[test]
    fn format_empty_product() {
        let unit = tagged(Vec::<String>::new()).unwrap();

        insta::assert_snapshot!(format_value(&unit.construct(vec![]).unwrap().into()), @"()");
    }

    #[test]
    fn format_nested_values() {
        let list = tagged_sum([("Cons", vec!["head", "tail"]), ("Nil", vec![])]).unwrap();
        let cons = list.constructor("Cons").unwrap();
        let nil = list.singleton("Nil").unwrap();

        let value = cons
            .construct(vec![
                "a".into(),
                cons.construct(vec![1.5.into(), nil.clone().into()])
                    .unwrap()
                    .into(),
            ])
            .unwrap();

        insta::assert_snapshot!(format_value(&value.into()), @"(a, (1.5, ()))");
    }

    #[test]
    fn format_display_fields() {
        insta::assert_snapshot!(format_fields(&[&1, &"two", &3.5]), @"(1, two, 3.5)");
        insta::assert_snapshot!(format_fields(&[]), @"()");
    }
}
