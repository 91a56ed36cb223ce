//! Lesser declaration layer
//!
//! Typed intermediate representation for single stylesheet declarations
//! ("properties") in the Lesser LESS compiler.
//!
//! # Features
//!
//! - One [`Property`] type for every declaration kind (assignments, comments,
//!   mixin calls, blocks, ...), selected from a closed [`PropertyKind`] set
//! - A read-only [`PropertyRegistry`] that resolves parser kind names such as
//!   `import_mixin` to the matching kind and constructs it
//! - A positional view (`get`/`set`/`has`/`unset` by index) for code that
//!   still addresses declarations as tuples
//! - Conversion from and to the legacy tuple layout
//!
//! # Basic Usage
//!
//! ```rust
//! use lesser::{construct, from_legacy_tuple, ParserContext, Result, Value};
//!
//! fn main() -> Result<()> {
//!     let ctx = ParserContext::new("main.less");
//!
//!     let comment = construct(&ctx, "comment", None, Value::from("/* hi */"), None, None)?;
//!     assert_eq!(comment.kind_name(), "comment");
//!
//!     let tuple = vec![Value::from("background_color"), Value::from("#fff")];
//!     let color = from_legacy_tuple(&ctx, &tuple, Some(42))?;
//!     assert_eq!(color.position(), Some(42));
//!     Ok(())
//! }
//! ```
//!
//! # Legacy Layout
//!
//! | index | slot     |
//! |-------|----------|
//! | -1    | position |
//! | 0     | kind     |
//! | 1     | value1   |
//! | 2     | value2 (the only writable slot) |
//! | 3     | value3   |

pub mod types;
pub mod error;
pub mod context;
pub mod core;
pub mod property;
pub mod legacy;
pub mod cli;

// Re-export commonly used types and functions
pub use error::{CompilerError, Result};
pub use types::{Position, Value};
pub use context::ParserContext;
pub use crate::core::{construct, normalize_kind_name, PropertyKind, PropertyRegistry};
pub use property::{LegacySlot, Property};
pub use legacy::{
    convert_document, from_legacy_tuple, from_legacy_tuple_with, parse_legacy_document,
    to_legacy_tuple, ConversionReport, LegacyEntry,
};
pub use cli::LesserCli;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_kind_matches_the_tuple_path() {
        let ctx = ParserContext::new("lib.less");
        for kind in PropertyRegistry::global().kinds() {
            let direct = construct(&ctx, kind.wire_name(), Some(5), Value::from("v1"), None, None).unwrap();
            let tuple = vec![Value::from(kind.wire_name()), Value::from("v1")];
            let adapted = from_legacy_tuple(&ctx, &tuple, Some(5)).unwrap();

            assert_eq!(direct, adapted);
            assert_eq!(adapted.get(0).unwrap(), Value::from(kind.name()));
            assert_eq!(adapted.get(-1).unwrap(), Value::Integer(5));
        }
    }

    #[test]
    fn test_sub_property_refinement() {
        let ctx = ParserContext::new("lib.less");
        let tuple = vec![Value::from("block"), Value::from("@media screen")];
        let mut block = from_legacy_tuple(&ctx, &tuple, None).unwrap();

        block.set(2, Value::List(vec![Value::from("nested")])).unwrap();
        assert_eq!(block.value2(), Some(&Value::List(vec![Value::from("nested")])));
        assert_eq!(
            to_legacy_tuple(&block),
            vec![
                Value::from("block"),
                Value::from("@media screen"),
                Value::List(vec![Value::from("nested")]),
            ]
        );
    }

    #[test]
    fn test_build_info() {
        assert_eq!(NAME, "lesser");
        assert!(!VERSION.is_empty());
    }
}
