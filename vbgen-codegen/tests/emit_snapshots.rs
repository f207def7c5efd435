//! Snapshot tests for the emitted Swift declarations.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use vbgen_codegen::{Emitter, GeneratorConfig, builder::Indent};

/// The canonical output for the default configuration.
const DEFAULT_OUTPUT: &str = include_str!("fixtures/default.swift");

fn render(max_arity: usize) -> String {
    let config = GeneratorConfig::default()
        .with_max_arity(max_arity)
        .expect("valid arity");
    Emitter::new(config).render()
}

/// Split one extension group into its per-arity blocks.
fn blocks_of(group: &str) -> Vec<&str> {
    let body = group
        .split_once("{\n")
        .and_then(|(_, rest)| rest.strip_suffix("}\n"))
        .expect("group body");
    body.split("\n\n").collect()
}

/// Split the full output into its two groups.
fn groups_of(output: &str) -> (&str, &str) {
    let (first, second) = output.split_once("}\n\n///").expect("two groups");
    // Re-attach the pieces consumed by the separator.
    let first = &output[..first.len() + 2];
    let second = &output[output.len() - second.len() - 3..];
    (first, second)
}

#[test]
fn test_default_output_is_canonical() {
    assert_eq!(Emitter::default().render(), DEFAULT_OUTPUT);
}

#[test]
fn test_emit_to_writes_default_output() {
    let mut sink = Vec::new();
    Emitter::default().emit_to(&mut sink).unwrap();
    assert_eq!(sink, DEFAULT_OUTPUT.as_bytes());
}

#[test]
fn test_max_arity_two() {
    insta::assert_snapshot!(render(2), @r"
/// Generated by vbgen.
extension ViewBuilder {
    /// buildBlock for 2 child view(s).
    public static func buildBlock<V0, V1>(_ v0: V0, _ v1: V1) -> TupleView<(V0, V1)> where V0: View, V1: View {
        return TupleView(v0, v1)
    }
}

/// Generated by vbgen.
extension TupleView {
    /// Constructor for 2 child view(s).
    init<V0: View, V1: View>(_ v0: V0, _ v1: V1) where T == (V0, V1) {
        self.content = (v0, v1)
        self.output = { return V0.makeOutput(of: v0) + V1.makeOutput(of: v1) }
    }
}
");
}

#[test]
fn test_max_arity_three() {
    let expected = "\
/// Generated by vbgen.
extension ViewBuilder {
    /// buildBlock for 2 child view(s).
    public static func buildBlock<V0, V1>(_ v0: V0, _ v1: V1) -> TupleView<(V0, V1)> where V0: View, V1: View {
        return TupleView(v0, v1)
    }

    /// buildBlock for 3 child view(s).
    public static func buildBlock<V0, V1, V2>(_ v0: V0, _ v1: V1, _ v2: V2) -> TupleView<(V0, V1, V2)> where V0: View, V1: View, V2: View {
        return TupleView(v0, v1, v2)
    }
}

/// Generated by vbgen.
extension TupleView {
    /// Constructor for 2 child view(s).
    init<V0: View, V1: View>(_ v0: V0, _ v1: V1) where T == (V0, V1) {
        self.content = (v0, v1)
        self.output = { return V0.makeOutput(of: v0) + V1.makeOutput(of: v1) }
    }

    /// Constructor for 3 child view(s).
    init<V0: View, V1: View, V2: View>(_ v0: V0, _ v1: V1, _ v2: V2) where T == (V0, V1, V2) {
        self.content = (v0, v1, v2)
        self.output = { return V0.makeOutput(of: v0) + V1.makeOutput(of: v1) + V2.makeOutput(of: v2) }
    }
}
";
    assert_eq!(render(3), expected);
}

#[test]
fn test_block_count_per_group() {
    for max_arity in 2..=16 {
        let output = render(max_arity);
        let (combine, constructors) = groups_of(&output);

        assert_eq!(blocks_of(combine).len(), max_arity - 1);
        assert_eq!(blocks_of(constructors).len(), max_arity - 1);
    }
}

#[test]
fn test_blocks_use_positional_identifiers() {
    let output = render(10);
    let (combine, constructors) = groups_of(&output);

    for (group, prefix) in [(combine, "buildBlock for"), (constructors, "Constructor for")] {
        for (i, block) in blocks_of(group).into_iter().enumerate() {
            let arity = i + 2;
            assert!(block.contains(&format!("/// {} {} child view(s).", prefix, arity)));

            let types: Vec<String> = (0..arity).map(|n| format!("V{}", n)).collect();
            let values: Vec<String> = (0..arity).map(|n| format!("v{}", n)).collect();
            assert!(block.contains(&format!("({})", types.join(", "))));
            assert!(block.contains(&values.join(", ")));
            assert!(!block.contains(&format!("v{}", arity)));
            assert!(!block.contains(&format!("V{}", arity)));
        }
    }
}

#[test]
fn test_blank_line_placement() {
    let output = render(5);

    // One blank line between groups, none before a closing brace.
    assert_eq!(output.matches("}\n\n/// Generated by vbgen.\n").count(), 1);
    assert!(!output.contains("\n\n}"));
    assert!(!output.contains("\n\n\n"));

    // Each group has (blocks - 1) separators, plus the one between groups.
    assert_eq!(output.matches("\n\n").count(), 2 * (5 - 2) + 1);
    assert!(output.ends_with("    }\n}\n"));
}

#[test]
fn test_arity_ten_block() {
    let output = render(10);
    let last_combine = output
        .lines()
        .find(|l| l.contains("buildBlock<") && l.contains("V9"))
        .unwrap();
    assert!(last_combine.contains("<V0, V1, V2, V3, V4, V5, V6, V7, V8, V9>"));

    let last_output = output
        .lines()
        .rfind(|l| l.trim_start().starts_with("self.output"))
        .unwrap();
    assert_eq!(last_output.matches(".makeOutput(of: ").count(), 10);
    assert_eq!(last_output.matches(" + ").count(), 9);
}

#[test]
fn test_tab_indentation() {
    let mut config = GeneratorConfig::default().with_max_arity(2).unwrap();
    config.indent = Indent::Tab;
    let output = Emitter::new(config).render();

    assert!(output.contains("\n\t/// buildBlock for 2 child view(s).\n"));
    assert!(output.contains("\n\t\treturn TupleView(v0, v1)\n"));
    assert!(!output.contains("    "));
}
