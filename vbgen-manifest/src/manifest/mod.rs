//! Manifest types and parsing for vbgen.toml files.

mod defaults;
mod file;
mod parse;
mod validate;

use std::fmt;

use serde::Deserialize;
use vbgen_codegen::{DEFAULT_HEADER, DEFAULT_MAX_ARITY, Names, builder::Indent};

pub use defaults::template;
pub use file::VbgenToml;
pub use validate::ParseContext;

/// Root manifest for vbgen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Arity range and output layout
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Swift names referenced by the generated declarations
    #[serde(default)]
    pub names: NamesSection,
}

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    /// Upper bound (inclusive) of generated arities
    pub max_arity: usize,

    /// Text of the doc line above each extension
    pub header: String,

    /// Indentation of generated members
    pub indent: IndentSetting,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            max_arity: DEFAULT_MAX_ARITY,
            header: DEFAULT_HEADER.to_string(),
            indent: IndentSetting::default(),
        }
    }
}

/// The `[names]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamesSection {
    pub builder: String,
    pub capability: String,
    pub aggregate: String,
    pub output_fn: String,
}

impl NamesSection {
    /// Each name paired with its key, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("builder", self.builder.as_str()),
            ("capability", self.capability.as_str()),
            ("aggregate", self.aggregate.as_str()),
            ("output_fn", self.output_fn.as_str()),
        ]
    }
}

impl Default for NamesSection {
    fn default() -> Self {
        Names::default().into()
    }
}

impl From<Names> for NamesSection {
    fn from(names: Names) -> Self {
        Self {
            builder: names.builder,
            capability: names.capability,
            aggregate: names.aggregate,
            output_fn: names.output_fn,
        }
    }
}

impl From<NamesSection> for Names {
    fn from(section: NamesSection) -> Self {
        Self {
            builder: section.builder,
            capability: section.capability,
            aggregate: section.aggregate,
            output_fn: section.output_fn,
        }
    }
}

/// Raw `indent` value: a width in spaces or `"tab"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Width(i64),
    Named(String),
}

impl IndentSetting {
    /// The indentation this setting stands for, if supported.
    pub fn to_indent(&self) -> Option<Indent> {
        match self {
            Self::Width(2) => Some(Indent::Spaces(2)),
            Self::Width(4) => Some(Indent::Spaces(4)),
            Self::Width(8) => Some(Indent::Spaces(8)),
            Self::Named(name) if name.eq_ignore_ascii_case("tab") => Some(Indent::Tab),
            _ => None,
        }
    }
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Width(4)
    }
}

impl fmt::Display for IndentSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width(width) => write!(f, "{}", width),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_setting_to_indent() {
        assert_eq!(IndentSetting::Width(2).to_indent(), Some(Indent::Spaces(2)));
        assert_eq!(IndentSetting::Width(4).to_indent(), Some(Indent::Spaces(4)));
        assert_eq!(
            IndentSetting::Named("tab".to_string()).to_indent(),
            Some(Indent::Tab)
        );
        assert_eq!(IndentSetting::Width(3).to_indent(), None);
        assert_eq!(IndentSetting::Named("spaces".to_string()).to_indent(), None);
    }

    #[test]
    fn test_names_round_trip_through_codegen() {
        let section = NamesSection::default();
        let names: Names = section.clone().into();
        assert_eq!(names, Names::default());
        assert_eq!(NamesSection::from(names), section);
    }

    #[test]
    fn test_names_entries_order() {
        let keys: Vec<&str> = NamesSection::default()
            .entries()
            .iter()
            .map(|(key, _)| *key)
            .collect();
        assert_eq!(keys, ["builder", "capability", "aggregate", "output_fn"]);
    }
}
