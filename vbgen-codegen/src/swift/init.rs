//! Swift initializer builder.

use super::{GenericParam, Param, generic_clause, param_clause, where_clause};
use crate::builder::{CodeFragment, Renderable};

/// Builder for Swift initializers.
#[derive(Debug, Clone, Default)]
pub struct Init {
    doc: Option<String>,
    generics: Vec<GenericParam>,
    params: Vec<Param>,
    requirements: Vec<String>,
    body: Vec<String>,
}

impl Init {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn generic(mut self, param: GenericParam) -> Self {
        self.generics.push(param);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a generic requirement to the `where` clause.
    pub fn requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
        self
    }

    /// Add a line to the initializer body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// The signature line, including the opening brace.
    pub fn signature(&self) -> String {
        format!(
            "init{}{}{} {{",
            generic_clause(&self.generics),
            param_clause(&self.params),
            where_clause(&self.requirements)
        )
    }
}

impl Renderable for Init {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::braced(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    #[test]
    fn test_empty_init() {
        assert_eq!(Init::new().signature(), "init() {");
    }

    #[test]
    fn test_constrained_init() {
        let init = Init::new()
            .generic(GenericParam::constrained("V0", "View"))
            .param(Param::unlabeled("v0", "V0"))
            .requirement("T == (V0)");
        assert_eq!(init.signature(), "init<V0: View>(_ v0: V0) where T == (V0) {");
    }

    #[test]
    fn test_init_renders_body() {
        let init = Init::new()
            .doc("Empty constructor.")
            .body_line("self.content = ()");

        let mut builder = CodeBuilder::swift();
        builder.emit(&init);
        assert_eq!(
            builder.build(),
            "/// Empty constructor.\ninit() {\n    self.content = ()\n}\n"
        );
    }
}
