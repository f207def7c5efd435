//! Generator configuration.

use eyre::{Result, ensure};

use crate::builder::Indent;

/// Smallest arity a block is generated for.
pub const MIN_ARITY: usize = 2;

/// Default upper bound (inclusive) of generated arities.
pub const DEFAULT_MAX_ARITY: usize = 10;

/// Default text of the doc line above each extension.
pub const DEFAULT_HEADER: &str = "Generated by vbgen.";

/// Names of the declarations the generated code refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    /// Result builder extended with `buildBlock` overloads.
    pub builder: String,
    /// Protocol every child type must conform to.
    pub capability: String,
    /// Generic tuple aggregate extended with constructors.
    pub aggregate: String,
    /// Static function producing the output of one child.
    pub output_fn: String,
}

impl Default for Names {
    fn default() -> Self {
        Self {
            builder: "ViewBuilder".to_string(),
            capability: "View".to_string(),
            aggregate: "TupleView".to_string(),
            output_fn: "makeOutput".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    max_arity: usize,
    pub header: String,
    pub indent: Indent,
    pub names: Names,
}

impl GeneratorConfig {
    /// Set the maximum arity, which must be at least [`MIN_ARITY`].
    pub fn with_max_arity(mut self, max_arity: usize) -> Result<Self> {
        ensure!(
            max_arity >= MIN_ARITY,
            "max arity must be at least {}, got {}",
            MIN_ARITY,
            max_arity
        );
        self.max_arity = max_arity;
        Ok(self)
    }

    pub fn max_arity(&self) -> usize {
        self.max_arity
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_arity: DEFAULT_MAX_ARITY,
            header: DEFAULT_HEADER.to_string(),
            indent: Indent::default(),
            names: Names::default(),
        }
    }
}
