//! Default vbgen.toml written by `vbgen init`.

use vbgen_codegen::{DEFAULT_HEADER, DEFAULT_MAX_ARITY, Names};

/// A commented vbgen.toml spelling out every default.
pub fn template() -> String {
    let names = Names::default();
    format!(
        r#"# vbgen configuration. Every key is optional.

[generator]
# Largest number of children a builder block accepts (at least 2).
max_arity = {max_arity}
# Doc line above each generated extension.
header = "{header}"
# 2, 4, 8 or "tab".
indent = 4

[names]
builder = "{builder}"
capability = "{capability}"
aggregate = "{aggregate}"
output_fn = "{output_fn}"
"#,
        max_arity = DEFAULT_MAX_ARITY,
        header = DEFAULT_HEADER,
        builder = names.builder,
        capability = names.capability,
        aggregate = names.aggregate,
        output_fn = names.output_fn,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Manifest;

    #[test]
    fn test_template_parses_to_defaults() {
        let manifest: Manifest = template().parse().unwrap();
        assert_eq!(manifest, Manifest::default());
    }
}
