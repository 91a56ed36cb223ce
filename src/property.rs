//! Typed declaration node and its legacy positional view
//!
//! A [`Property`] is one declaration inside a rule body: a comment, an
//! assignment, a mixin call and so on. The fields are named; the positional
//! accessors (`get`/`set`/`has`/`unset`) only exist so that call sites still
//! written against the tuple layout keep working.

use crate::core::properties::PropertyKind;
use crate::error::{CompilerError, Result};
use crate::types::{Position, Value};

/// Slot of the legacy tuple layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacySlot {
    Position,
    Kind,
    Value1,
    Value2,
    Value3,
}

impl LegacySlot {
    pub const fn index(self) -> i64 {
        match self {
            LegacySlot::Position => -1,
            LegacySlot::Kind => 0,
            LegacySlot::Value1 => 1,
            LegacySlot::Value2 => 2,
            LegacySlot::Value3 => 3,
        }
    }
}

impl TryFrom<i64> for LegacySlot {
    type Error = CompilerError;

    fn try_from(index: i64) -> Result<Self> {
        match index {
            -1 => Ok(LegacySlot::Position),
            0 => Ok(LegacySlot::Kind),
            1 => Ok(LegacySlot::Value1),
            2 => Ok(LegacySlot::Value2),
            3 => Ok(LegacySlot::Value3),
            _ => Err(CompilerError::invalid_index(index)),
        }
    }
}

/// A single declaration in the intermediate representation
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    kind: PropertyKind,
    position: Option<Position>,
    value1: Value,
    value2: Option<Value>,
    value3: Option<Value>,
}

impl Property {
    /// Plain constructor; secondary values start absent
    pub fn new(kind: PropertyKind, position: Option<Position>, value1: Value) -> Self {
        Self {
            kind,
            position,
            value1,
            value2: None,
            value3: None,
        }
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Lower-cased kind identifier (`comment`, `importmixin`, ...)
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    pub fn value1(&self) -> &Value {
        &self.value1
    }

    pub fn value2(&self) -> Option<&Value> {
        self.value2.as_ref()
    }

    pub fn value3(&self) -> Option<&Value> {
        self.value3.as_ref()
    }

    pub(crate) fn set_value2(&mut self, value: Option<Value>) {
        self.value2 = value;
    }

    pub(crate) fn set_value3(&mut self, value: Option<Value>) {
        self.value3 = value;
    }

    /// Rewrite the second slot of a sub-property after construction.
    ///
    /// This is the only mutation allowed once a property exists. `Null`
    /// clears the slot.
    pub fn refine_sub_property(&mut self, value: Value) {
        log::trace!("Refining {} sub-property: {}", self.kind, value);
        self.value2 = value.into_option();
    }

    // Legacy positional view

    /// True for every index the tuple layout defines, whether or not the
    /// slot currently holds a value
    pub fn has(&self, index: i64) -> bool {
        LegacySlot::try_from(index).is_ok()
    }

    /// Read a slot by its legacy index; absent values come back as `Null`
    pub fn get(&self, index: i64) -> Result<Value> {
        Ok(self.slot(LegacySlot::try_from(index)?))
    }

    pub fn slot(&self, slot: LegacySlot) -> Value {
        match slot {
            LegacySlot::Position => Value::from_position(self.position),
            LegacySlot::Kind => Value::from(self.kind.name()),
            LegacySlot::Value1 => self.value1.clone(),
            LegacySlot::Value2 => Value::from_option(self.value2.clone()),
            LegacySlot::Value3 => Value::from_option(self.value3.clone()),
        }
    }

    /// Write a slot by its legacy index. Only index 2 is writable.
    pub fn set(&mut self, index: i64, value: Value) -> Result<()> {
        match LegacySlot::try_from(index) {
            Ok(LegacySlot::Value2) => {
                self.refine_sub_property(value);
                Ok(())
            }
            _ => Err(CompilerError::invalid_index(index)),
        }
    }

    /// Clearing a slot is accepted for any index and never changes anything.
    /// Older callers clear slots unconditionally.
    pub fn unset(&mut self, _index: i64) {}
}
