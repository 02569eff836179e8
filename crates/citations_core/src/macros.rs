/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros shared by the citation crates.

/// Generates a string-backed enum with `as_str`, `ALL` and `from_name`.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            #[doc = "Every variant, in declaration order."]
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }

            #[doc = "Looks up the variant whose string value is `name`."]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

/// Builds a `RawFields` value from `key => [values]` pairs.
///
/// # Examples
/// ```
/// let fields = citations_core::raw_fields! {
///     "title" => ["The Thing"],
///     "author" => ["Smith, John", "Doe, Jane"],
/// };
/// assert_eq!(fields.first("author"), "Smith, John");
/// ```
#[macro_export]
macro_rules! raw_fields {
    ($($key:expr => [$($val:expr),* $(,)?]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut fields = $crate::fields::RawFields::default();
        $(
            fields.insert($key, vec![$($val.to_string()),*]);
        )*
        fields
    }};
}
