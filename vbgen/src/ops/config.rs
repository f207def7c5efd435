//! Configuration resolution - vbgen.toml plus command-line overrides.

use std::path::Path;

use eyre::{Context, Result};
use vbgen_codegen::GeneratorConfig;
use vbgen_manifest::{Manifest, VbgenToml};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "vbgen.toml";

/// Load the manifest from `path`, or from `./vbgen.toml` when no path is given.
///
/// A missing default file is not an error; the canonical defaults apply.
pub fn load_manifest(path: Option<&Path>) -> vbgen_manifest::Result<Manifest> {
    load_manifest_or_default(Path::new(DEFAULT_CONFIG), path)
}

fn load_manifest_or_default(
    default_path: &Path,
    explicit: Option<&Path>,
) -> vbgen_manifest::Result<Manifest> {
    let path = match explicit {
        Some(path) => path,
        None if default_path.exists() => default_path,
        None => {
            log::debug!(
                "{} not found, using default configuration",
                default_path.display()
            );
            return Ok(Manifest::default());
        }
    };

    let toml = VbgenToml::open(path)?;
    log::debug!(
        "loaded configuration from {} ({} bytes)",
        toml.path().display(),
        toml.content().len()
    );
    Ok(toml.into_manifest())
}

/// Build the generator configuration, letting `max_arity` override the manifest.
pub fn generator_config(manifest: &Manifest, max_arity: Option<usize>) -> Result<GeneratorConfig> {
    let max_arity = max_arity.unwrap_or(manifest.generator.max_arity);
    let mut config = GeneratorConfig::default()
        .with_max_arity(max_arity)
        .wrap_err("Invalid --max-arity")?;

    config.header = manifest.generator.header.clone();
    config.indent = manifest.generator.indent.to_indent().unwrap_or_default();
    config.names = manifest.names.clone().into();

    log::debug!(
        "generating arities 2..={} for {}",
        config.max_arity(),
        config.names.aggregate
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use vbgen_codegen::builder::Indent;

    use super::*;

    #[test]
    fn test_missing_default_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let manifest = load_manifest_or_default(&temp.path().join("vbgen.toml"), None).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_default_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vbgen.toml");
        fs::write(&path, "[generator]\nmax_arity = 5\n").unwrap();

        let manifest = load_manifest_or_default(&path, None).unwrap();
        assert_eq!(manifest.generator.max_arity, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.toml");
        let result = load_manifest_or_default(&temp.path().join("vbgen.toml"), Some(&missing));
        assert!(result.is_err());
    }

    #[test]
    fn test_generator_config_from_manifest() {
        let manifest: Manifest = r#"
            [generator]
            max_arity = 3
            header = "Do not edit."
            indent = 2

            [names]
            capability = "Widget"
        "#
        .parse()
        .unwrap();

        let config = generator_config(&manifest, None).unwrap();
        assert_eq!(config.max_arity(), 3);
        assert_eq!(config.header, "Do not edit.");
        assert_eq!(config.indent, Indent::Spaces(2));
        assert_eq!(config.names.capability, "Widget");
        assert_eq!(config.names.builder, "ViewBuilder");
    }

    #[test]
    fn test_max_arity_override() {
        let config = generator_config(&Manifest::default(), Some(4)).unwrap();
        assert_eq!(config.max_arity(), 4);
    }

    #[test]
    fn test_max_arity_override_is_validated() {
        let err = generator_config(&Manifest::default(), Some(1)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid --max-arity");
    }
}
