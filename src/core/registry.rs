//! Kind registry and property factory

use crate::context::ParserContext;
use crate::core::properties::{normalize_kind_name, PropertyKind};
use crate::error::{CompilerError, Result};
use crate::property::Property;
use crate::types::{Position, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Builds the concrete property for one kind from `(context, position, value1)`
pub type Constructor = Box<dyn Fn(&ParserContext, Option<Position>, Value) -> Property + Send + Sync>;

struct RegistryEntry {
    kind: PropertyKind,
    constructor: Constructor,
}

static GLOBAL_REGISTRY: Lazy<PropertyRegistry> = Lazy::new(PropertyRegistry::with_defaults);

/// Maps declared type names onto property constructors
pub struct PropertyRegistry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with every known kind wired to the plain constructor
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in PropertyKind::ALL {
            registry.register(kind, move |_ctx, position, value1| Property::new(kind, position, value1));
        }
        log::debug!("Property registry initialized with {} kinds", registry.entries.len());
        registry
    }

    /// Shared read-only registry, built on first use
    pub fn global() -> &'static PropertyRegistry {
        &GLOBAL_REGISTRY
    }

    /// Wire `kind` to `constructor`, replacing any earlier entry
    pub fn register<F>(&mut self, kind: PropertyKind, constructor: F)
    where
        F: Fn(&ParserContext, Option<Position>, Value) -> Property + Send + Sync + 'static,
    {
        self.entries.insert(
            kind.type_name(),
            RegistryEntry {
                kind,
                constructor: Box::new(constructor),
            },
        );
    }

    pub fn is_registered(&self, raw_kind: &str) -> bool {
        self.entries.contains_key(normalize_kind_name(raw_kind).as_str())
    }

    /// Registered kinds in declaration order
    pub fn kinds(&self) -> Vec<PropertyKind> {
        let mut kinds: Vec<PropertyKind> = self.entries.values().map(|entry| entry.kind).collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Construct a property from a raw kind name.
    ///
    /// `value2` and `value3` are always applied, so an absent value leaves
    /// the slot in a defined empty state.
    pub fn construct(
        &self,
        ctx: &ParserContext,
        raw_kind: &str,
        position: Option<Position>,
        value1: Value,
        value2: Option<Value>,
        value3: Option<Value>,
    ) -> Result<Property> {
        let type_name = normalize_kind_name(raw_kind);
        let entry = self.entries.get(type_name.as_str()).ok_or_else(|| {
            log::debug!("No property registered as {} ({})", type_name, ctx.location(position));
            CompilerError::unknown_kind(raw_kind, ctx.location(position))
        })?;

        let mut property = (entry.constructor)(ctx, position, value1);
        if property.kind() != entry.kind {
            log::debug!(
                "{} constructor produced a {} property",
                entry.kind.type_name(),
                property.kind().type_name()
            );
            return Err(CompilerError::invalid_kind(entry.kind.type_name()));
        }

        property.set_value2(value2);
        property.set_value3(value3);

        log::trace!("Constructed {} property at {}", property.kind(), ctx.location(position));
        Ok(property)
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry").field("kinds", &self.kinds()).finish()
    }
}

/// Construct a property through the global registry
pub fn construct(
    ctx: &ParserContext,
    raw_kind: &str,
    position: Option<Position>,
    value1: Value,
    value2: Option<Value>,
    value3: Option<Value>,
) -> Result<Property> {
    PropertyRegistry::global().construct(ctx, raw_kind, position, value1, value2, value3)
}
