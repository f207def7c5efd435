//! The declaration emitter.

use std::{
    io::{self, BufWriter, Write},
    ops::RangeInclusive,
};

use crate::{
    GeneratorConfig, MIN_ARITY, Placeholders,
    builder::CodeBuilder,
    swift::{Extension, Func, GenericParam, Init, Param},
};

/// Emits `buildBlock` overloads and tuple constructors for every arity from
/// [`MIN_ARITY`] to the configured maximum.
///
/// Output is a pure function of the configuration, so emitting twice yields
/// byte-identical text.
///
/// # Example
///
/// ```
/// use vbgen_codegen::{Emitter, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_max_arity(2).unwrap();
/// let output = Emitter::new(config).render();
///
/// assert!(output.starts_with("/// Generated by vbgen.\nextension ViewBuilder {\n"));
/// assert!(output.ends_with("    }\n}\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    config: GeneratorConfig,
}

impl Emitter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Every generated arity, in increasing order.
    pub fn arities(&self) -> RangeInclusive<usize> {
        MIN_ARITY..=self.config.max_arity()
    }

    /// The `buildBlock` overload combining `arity` children into the aggregate.
    pub fn combine_block(&self, arity: usize) -> Func {
        let names = &self.config.names;
        let placeholders = Placeholders::new(arity);

        let mut func = Func::new("buildBlock")
            .doc(format!("buildBlock for {} child view(s).", arity))
            .public()
            .static_()
            .returns(format!(
                "{}<{}>",
                names.aggregate,
                placeholders.tuple_type()
            ));

        for pair in placeholders.pairs() {
            func = func
                .generic(GenericParam::new(pair.ty()))
                .param(Param::unlabeled(pair.value(), pair.ty()))
                .requirement(format!("{}: {}", pair.ty(), names.capability));
        }

        func.body_line(format!(
            "return {}({})",
            names.aggregate,
            placeholders.values().join(", ")
        ))
    }

    /// The aggregate constructor for `arity` children.
    ///
    /// The body stores the children in `content` and defers the combined
    /// output of all children, concatenated left to right, into `output`.
    pub fn constructor_block(&self, arity: usize) -> Init {
        let names = &self.config.names;
        let placeholders = Placeholders::new(arity);

        let mut init = Init::new().doc(format!("Constructor for {} child view(s).", arity));

        for pair in placeholders.pairs() {
            init = init
                .generic(GenericParam::constrained(pair.ty(), &names.capability))
                .param(Param::unlabeled(pair.value(), pair.ty()));
        }

        let outputs: Vec<String> = placeholders
            .pairs()
            .map(|pair| format!("{}.{}(of: {})", pair.ty(), names.output_fn, pair.value()))
            .collect();

        init.requirement(format!("T == {}", placeholders.tuple_type()))
            .body_line(format!("self.content = {}", placeholders.tuple_value()))
            .body_line(format!("self.output = {{ return {} }}", outputs.join(" + ")))
    }

    /// Group of every `buildBlock` overload, in arity order.
    pub fn combine_group(&self) -> Extension {
        self.arities().fold(
            Extension::new(&self.config.names.builder).doc(&self.config.header),
            |ext, arity| ext.member(&self.combine_block(arity)),
        )
    }

    /// Group of every aggregate constructor, in arity order.
    pub fn constructor_group(&self) -> Extension {
        self.arities().fold(
            Extension::new(&self.config.names.aggregate).doc(&self.config.header),
            |ext, arity| ext.member(&self.constructor_block(arity)),
        )
    }

    /// Render both groups, separated by one blank line.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(self.config.indent);
        builder
            .emit(&self.combine_group())
            .push_blank()
            .emit(&self.constructor_group());
        builder.build()
    }

    /// Write the rendered declarations into `sink`.
    pub fn emit_to<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.render().as_bytes())?;
        sink.flush()
    }

    /// Write the rendered declarations to standard output.
    pub fn emit(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut sink = BufWriter::new(stdout.lock());
        self.emit_to(&mut sink)
    }
}
