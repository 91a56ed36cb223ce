// FILE: src/core/mod.rs

pub mod properties;
pub mod registry;

pub use properties::{normalize_kind_name, PropertyKind, KIND_SEPARATOR, PROPERTY_SUFFIX};
pub use registry::{construct, Constructor, PropertyRegistry};
