/// Declares an enum of tagged products.
///
/// `match` on the enum is checked for exhaustiveness at compile time. The
/// enum converts into a [`Value`](crate::Value) of a sum type declared once
/// per enum and renders exactly as that value does. Field types must
/// implement `Clone`, and `Value` must implement `From` for them.
///
/// ```rust
/// use tagged::{tagged_sum, Value};
///
/// tagged_sum! {
///     #[derive(Clone, Debug)]
///     pub enum Shape {
///         Circle { radius: f64 },
///         Rectangle { width: f64, height: f64 },
///         Empty {},
///     }
/// }
///
/// let shape = Shape::Rectangle { width: 2.0, height: 3.0 };
///
/// let area = match &shape {
///     Shape::Circle { radius } => 3.0 * radius * radius,
///     Shape::Rectangle { width, height } => width * height,
///     Shape::Empty {} => 0.0,
/// };
///
/// assert_eq!(area, 6.0);
/// assert_eq!(shape.to_string(), "(2, 3)");
/// assert!(Shape::declaration().is_instance(&Value::from(shape)));
/// ```
#[macro_export]
macro_rules! tagged_sum {
    (
        $(#[$attribute:meta])*
        $visibility:vis enum $name:ident {
            $(
                $variant:ident { $($field:ident : $type:ty),* $(,)? }
            ),+ $(,)?
        }
    ) => {
        $(#[$attribute])*
        $visibility enum $name {
            $($variant { $($field: $type),* }),+
        }

        impl $name {
            /// Returns the sum type shared by all values converted from this enum.
            pub fn declaration() -> &'static $crate::SumDescriptor {
                static DECLARATION: $crate::__private::Lazy<$crate::SumDescriptor> =
                    $crate::__private::Lazy::new(|| {
                        let variants: &[(&str, &[&str])] =
                            &[$((stringify!($variant), &[$(stringify!($field)),*])),+];

                        $crate::tagged_sum(variants.iter().copied())
                            .unwrap_or_else(|error| unreachable!("{}", error))
                    });

                &DECLARATION
            }

            pub fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(
                        Self::$variant { $($field),* } => formatter.write_str(
                            &$crate::analysis::format_values(&[$(
                                $crate::Value::from(::core::clone::Clone::clone($field))
                            ),*]),
                        ),
                    )+
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::Value {
            fn from(value: $name) -> Self {
                let tag = value.tag();
                let arguments: ::std::vec::Vec<$crate::Value> = match value {
                    $($name::$variant { $($field),* } => vec![$($crate::Value::from($field)),*]),+
                };

                $name::declaration()
                    .construct_variant(tag, arguments)
                    .unwrap_or_else(|error| unreachable!("{}", error))
                    .into()
            }
        }
    };
}
