//! Macro for implementing Display and FromStr for label-backed enums
//!
//! Carrier settings are stored as the human-readable labels shown to
//! operators (e.g. `"Production Environment"`). This macro maps those labels
//! to enum variants and back. Matching is exact: a label that is not listed
//! fails to parse.
//!
//! # Example
//!
//! ```rust
//! use upsbridge_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Environment {
//!     Sandbox,
//!     Live,
//! }
//!
//! impl_label_conversions!(Environment {
//!     Sandbox => "Sandbox Environment",
//!     Live => "Live Environment",
//! });
//!
//! assert_eq!(Environment::Live.to_string(), "Live Environment");
//! assert_eq!("Sandbox Environment".parse::<Environment>(), Ok(Environment::Sandbox));
//! ```

/// Implements Display and FromStr traits for label-backed enums
///
/// This macro generates:
/// - Display trait: writes the variant's label
/// - FromStr trait: parses an exact label into the variant
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $enum_name {
            /// All labels accepted by `FromStr`, in declaration order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// The label written by `Display`.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
