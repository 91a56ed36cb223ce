//! Parser context handed to property construction for diagnostics

use crate::types::Position;

/// Opaque handle describing where declarations come from.
///
/// Properties never keep a reference to it; the factory only consults it to
/// render locations in errors and log output.
#[derive(Debug, Clone, Default)]
pub struct ParserContext {
    file: String,
    /// Byte offsets where each line begins, if the source text is known
    line_starts: Vec<usize>,
}

impl ParserContext {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line_starts: Vec::new(),
        }
    }

    /// Build a context that can translate byte offsets into line/column
    pub fn with_source(file: impl Into<String>, source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            file: file.into(),
            line_starts,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based (line, column) for a byte offset
    pub fn line_column(&self, position: Position) -> Option<(usize, usize)> {
        if self.line_starts.is_empty() {
            return None;
        }
        let line = match self.line_starts.binary_search(&position) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        Some((line + 1, position - self.line_starts[line] + 1))
    }

    /// Render a location for diagnostics
    pub fn location(&self, position: Option<Position>) -> String {
        match position {
            None => self.file.clone(),
            Some(pos) => match self.line_column(pos) {
                Some((line, column)) => format!("{}:{}:{}", self.file, line, column),
                None => format!("{}@{}", self.file, pos),
            },
        }
    }
}
