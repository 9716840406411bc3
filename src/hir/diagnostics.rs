//! Diagnostics — Semantic error reporting.
//!
//! This module provides diagnostic types for the lint passes. Every
//! diagnostic carries a byte range, a stable code and zero or more fixes.

use text_size::{TextRange, TextSize};

use super::fix::Fix;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Byte range the diagnostic points at.
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: Option<&'static str>,
    /// The diagnostic message.
    pub message: String,
    /// Fixes offered, in display order.
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            code: None,
            message: message.into(),
            fixes: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            fixes: Vec::new(),
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    pub fn with_fixes(mut self, fixes: impl IntoIterator<Item = Fix>) -> Self {
        self.fixes.extend(fixes);
        self
    }

    pub fn from(&self) -> TextSize {
        self.range.start()
    }

    pub fn to(&self) -> TextSize {
        self.range.end()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// ## Error Code Ranges
///
/// - **E0001-E0099**: Errors (labels, links, line prefixes)
/// - **W0001-W0099**: Warnings (indentation, redundancy, syntax)
pub mod codes {
    // ========================================================================
    // ERRORS (E0001-E0099)
    // ========================================================================

    /// A label with the same name was declared earlier.
    pub const DUPLICATE_LABEL: &str = "E0001";
    /// Label line without a colon after the name.
    pub const MISSING_COLON: &str = "E0002";
    /// Text after the colon of a label line.
    pub const TRAILING_CONTENT: &str = "E0003";
    /// Whitespace before a label name.
    pub const LEADING_WHITESPACE: &str = "E0004";
    /// Label link to a name no label declares.
    pub const UNDEFINED_LABEL: &str = "E0005";
    /// Statement or reply not starting with its prefix.
    pub const INVALID_PREFIX: &str = "E0006";

    // ========================================================================
    // WARNINGS (W0001-W0099)
    // ========================================================================

    /// Leading whitespace differs from the document's unit times depth.
    pub const INCONSISTENT_INDENTATION: &str = "W0001";
    /// First statement indented with both spaces and tabs.
    pub const MIXED_INDENTATION: &str = "W0002";
    /// Label link followed by lines that can never be reached.
    pub const REDUNDANT_LINK: &str = "W0003";
    /// Text the parser could not place.
    pub const SYNTAX_ERROR: &str = "W0004";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics across lint passes.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Get all collected diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Whether any error was collected.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
