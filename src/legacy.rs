//! Conversion between legacy property tuples and typed properties
//!
//! A legacy tuple is the positional array the parser used to emit:
//!
//! ```text
//! [0] kind name   (always present)
//! [1] value       (always present)
//! [2] optional more information
//! [3] optional more information
//! ```
//!
//! The position never lives inside the tuple; it travels alongside it.

use crate::context::ParserContext;
use crate::core::registry::PropertyRegistry;
use crate::error::{CompilerError, Result};
use crate::property::Property;
use crate::types::{Position, Value};
use serde::{Deserialize, Serialize};

/// Convert a legacy tuple through the global registry
pub fn from_legacy_tuple(ctx: &ParserContext, tuple: &[Value], position: Option<Position>) -> Result<Property> {
    from_legacy_tuple_with(PropertyRegistry::global(), ctx, tuple, position)
}

pub fn from_legacy_tuple_with(
    registry: &PropertyRegistry,
    ctx: &ParserContext,
    tuple: &[Value],
    position: Option<Position>,
) -> Result<Property> {
    let (kind, value1) = match (present(tuple, 0), present(tuple, 1)) {
        (Some(kind), Some(value1)) => (kind, value1),
        _ => {
            return Err(CompilerError::malformed(format!(
                "too few property slots at {} (got {})",
                ctx.location(position),
                tuple.len()
            )))
        }
    };
    let kind = kind.as_str().ok_or_else(|| {
        CompilerError::malformed(format!("property kind must be a string, got '{}'", kind))
    })?;

    registry.construct(
        ctx,
        kind,
        position,
        value1.clone(),
        present(tuple, 2).cloned(),
        present(tuple, 3).cloned(),
    )
}

/// Slot value unless it is missing or `Null`
fn present(tuple: &[Value], index: usize) -> Option<&Value> {
    tuple.get(index).filter(|value| !value.is_null())
}

/// Tuple shape for consumers that have not moved to [`Property`] yet
pub fn to_legacy_tuple(property: &Property) -> Vec<Value> {
    let mut tuple = vec![Value::from(property.kind().wire_name()), property.value1().clone()];
    match (property.value2(), property.value3()) {
        (value2, Some(value3)) => {
            tuple.push(Value::from_option(value2.cloned()));
            tuple.push(value3.clone());
        }
        (Some(value2), None) => tuple.push(value2.clone()),
        (None, None) => {}
    }
    tuple
}

/// One entry of a legacy JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyEntry {
    Bare(Vec<Value>),
    Positioned {
        #[serde(default)]
        position: Option<Position>,
        tuple: Vec<Value>,
    },
}

impl LegacyEntry {
    pub fn tuple(&self) -> &[Value] {
        match self {
            LegacyEntry::Bare(tuple) => tuple,
            LegacyEntry::Positioned { tuple, .. } => tuple,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            LegacyEntry::Bare(_) => None,
            LegacyEntry::Positioned { position, .. } => *position,
        }
    }
}

/// Parse a JSON array of legacy entries
pub fn parse_legacy_document(text: &str) -> Result<Vec<LegacyEntry>> {
    serde_json::from_str(text).map_err(|e| CompilerError::InvalidFormat {
        message: format!("Invalid legacy property document: {}", e),
    })
}

/// Outcome of converting a whole document
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Converted properties with the index of the entry they came from
    pub properties: Vec<(usize, Property)>,
    pub failures: Vec<(usize, CompilerError)>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert every entry, or stop at the first failure when `fail_fast` is set
pub fn convert_document(ctx: &ParserContext, entries: &[LegacyEntry], fail_fast: bool) -> ConversionReport {
    let mut report = ConversionReport::default();
    for (index, entry) in entries.iter().enumerate() {
        match from_legacy_tuple(ctx, entry.tuple(), entry.position()) {
            Ok(property) => report.properties.push((index, property)),
            Err(e) => {
                log::warn!("Entry {}: {}", index, e);
                report.failures.push((index, e));
                if fail_fast {
                    break;
                }
            }
        }
    }
    log::info!(
        "Converted {} of {} legacy entries",
        report.properties.len(),
        entries.len()
    );
    report
}
