//! Swift function builder.

use super::{GenericParam, Param, generic_clause, param_clause, where_clause};
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for Swift functions.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    doc: Option<String>,
    is_public: bool,
    is_static: bool,
    generics: Vec<GenericParam>,
    params: Vec<Param>,
    return_type: Option<String>,
    requirements: Vec<String>,
    body: Vec<String>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_public: false,
            is_static: false,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
            requirements: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
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

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a generic requirement to the `where` clause.
    pub fn requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// The signature line, including the opening brace.
    pub fn signature(&self) -> String {
        let vis = if self.is_public { "public " } else { "" };
        let static_kw = if self.is_static { "static " } else { "" };
        let returns = match &self.return_type {
            Some(ret) => format!(" -> {}", ret),
            None => String::new(),
        };

        format!(
            "{}{}func {}{}{}{}{} {{",
            vis,
            static_kw,
            self.name,
            generic_clause(&self.generics),
            param_clause(&self.params),
            returns,
            where_clause(&self.requirements)
        )
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
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
