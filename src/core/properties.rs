// FILE: src/core/properties.rs

use crate::error::{CompilerError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Suffix every declared property type name carries
pub const PROPERTY_SUFFIX: &str = "Property";

/// Separator between words in a kind name as the parser emits it
pub const KIND_SEPARATOR: char = '_';

// Property kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    Assign,
    BackgroundColor,
    Block,
    Charset,
    Comment,
    Directive,
    Import,
    ImportMixin,
    Mixin,
    Raw,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 10] = [
        PropertyKind::Assign,
        PropertyKind::BackgroundColor,
        PropertyKind::Block,
        PropertyKind::Charset,
        PropertyKind::Comment,
        PropertyKind::Directive,
        PropertyKind::Import,
        PropertyKind::ImportMixin,
        PropertyKind::Mixin,
        PropertyKind::Raw,
    ];

    /// Declared type name, the key the registry stores entries under
    pub const fn type_name(self) -> &'static str {
        match self {
            PropertyKind::Assign => "AssignProperty",
            PropertyKind::BackgroundColor => "BackgroundColorProperty",
            PropertyKind::Block => "BlockProperty",
            PropertyKind::Charset => "CharsetProperty",
            PropertyKind::Comment => "CommentProperty",
            PropertyKind::Directive => "DirectiveProperty",
            PropertyKind::Import => "ImportProperty",
            PropertyKind::ImportMixin => "ImportMixinProperty",
            PropertyKind::Mixin => "MixinProperty",
            PropertyKind::Raw => "RawProperty",
        }
    }

    /// Kind identifier: the type name without its suffix, lower-cased
    pub const fn name(self) -> &'static str {
        match self {
            PropertyKind::Assign => "assign",
            PropertyKind::BackgroundColor => "backgroundcolor",
            PropertyKind::Block => "block",
            PropertyKind::Charset => "charset",
            PropertyKind::Comment => "comment",
            PropertyKind::Directive => "directive",
            PropertyKind::Import => "import",
            PropertyKind::ImportMixin => "importmixin",
            PropertyKind::Mixin => "mixin",
            PropertyKind::Raw => "raw",
        }
    }

    /// Kind name as the parser and legacy tuples spell it
    pub const fn wire_name(self) -> &'static str {
        match self {
            PropertyKind::Assign => "assign",
            PropertyKind::BackgroundColor => "background_color",
            PropertyKind::Block => "block",
            PropertyKind::Charset => "charset",
            PropertyKind::Comment => "comment",
            PropertyKind::Directive => "directive",
            PropertyKind::Import => "import",
            PropertyKind::ImportMixin => "import_mixin",
            PropertyKind::Mixin => "mixin",
            PropertyKind::Raw => "raw",
        }
    }

    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == type_name)
    }

    /// Resolve a raw kind name (`import_mixin`, `comment`, ...) to its kind
    pub fn from_name(raw: &str) -> Option<Self> {
        Self::from_type_name(&normalize_kind_name(raw))
    }
}

/// Map a raw kind name onto a declared type name.
///
/// Every `_`-separated segment gets its first character upper-cased, the
/// segments are joined and the `Property` suffix appended:
/// `background_color` becomes `BackgroundColorProperty`. The rest of each
/// segment is left untouched, so the lookup stays case-sensitive.
pub fn normalize_kind_name(raw: &str) -> String {
    let mut type_name = String::with_capacity(raw.len() + PROPERTY_SUFFIX.len());
    for segment in raw.split(KIND_SEPARATOR) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            type_name.extend(first.to_uppercase());
            type_name.push_str(chars.as_str());
        }
    }
    type_name.push_str(PROPERTY_SUFFIX);
    type_name
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyKind {
    type Err = CompilerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CompilerError::unknown_kind(s, "<unknown>"))
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
