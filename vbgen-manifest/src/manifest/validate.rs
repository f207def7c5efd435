//! Validation utilities for vbgen.toml values

use miette::{NamedSource, SourceSpan};
use vbgen_codegen::MIN_ARITY;

use super::IndentSetting;
use crate::{Error, Result};

/// Validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "vbgen.toml");
/// ctx.push("names").validate_name("ViewBuilder", "builder")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
    /// Table path for nested keys (e.g., ["names"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Push a table segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Dotted key for error messages, e.g. `names.builder`.
    pub fn key_path(&self, key: &str) -> String {
        let mut segments = self.path.clone();
        segments.push(key);
        segments.join(".")
    }

    /// Find the span of the value assigned to `key`.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_value_span(self.src, key)
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Check that the maximum arity is supported.
    pub fn validate_max_arity(&self, value: usize) -> Result<()> {
        if value < MIN_ARITY {
            return Err(Box::new(Error::ArityTooSmall {
                src: self.named_source(),
                span: self.find_span("max_arity"),
                value,
                min: MIN_ARITY,
            }));
        }
        Ok(())
    }

    /// Check that the indent setting maps to a supported indentation.
    pub fn validate_indent(&self, indent: &IndentSetting) -> Result<()> {
        if indent.to_indent().is_none() {
            return Err(Box::new(Error::InvalidIndent {
                src: self.named_source(),
                span: self.find_span("indent"),
                value: indent.to_string(),
            }));
        }
        Ok(())
    }

    /// Check that the header fits on a single, non-blank doc-comment line.
    pub fn validate_header(&self, header: &str) -> Result<()> {
        let problem = if header.contains('\n') || header.contains('\r') {
            "must be a single line"
        } else if header.trim().is_empty() {
            "must not be empty"
        } else {
            return Ok(());
        };

        Err(Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span("header"),
            message: format!("{} {}", self.key_path("header"), problem),
        }))
    }

    /// Validate that a name is a usable Swift identifier.
    pub fn validate_name(&self, name: &str, key: &str) -> Result<()> {
        if is_swift_keyword(name) {
            return Err(Box::new(Error::ReservedKeyword {
                src: self.named_source(),
                span: self.find_span(key),
                name: name.to_string(),
                context: self.key_path(key),
            }));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Box::new(Error::InvalidIdentifier {
                src: self.named_source(),
                span: self.find_span(key),
                name: name.to_string(),
                context: self.key_path(key),
                reason: reason.to_string(),
            }));
        }

        Ok(())
    }
}

/// Swift reserved keywords that cannot be used as bare identifiers
/// Source: https://docs.swift.org/swift-book/documentation/the-swift-programming-language/lexicalstructure/#Keywords-and-Punctuation
pub(crate) const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "precedencegroup",
    "protocol", "public", "rethrows", "static", "struct", "subscript", "typealias", "var",
    // Statements
    "break", "case", "catch", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "throw", "switch", "where", "while",
    // Expressions and types
    "Any", "as", "await", "false", "is", "nil", "self", "Self", "super", "throws", "true", "try",
];

/// Check if a name is a Swift reserved keyword
pub(crate) fn is_swift_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name)
}

/// Find the span of the value in a `key = value` line
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let value = trimmed
            .strip_prefix(key)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::trim_start);

        if let Some(value) = value {
            let start = offset + (line.len() - value.len());
            let len = value
                .split('#')
                .next()
                .map(str::trim_end)
                .map_or(0, str::len);
            return Some(SourceSpan::from((start, len)));
        }

        offset += line.len();
    }

    None
}

/// Validate that a name is a plain ASCII Swift identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
