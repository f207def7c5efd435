//! Swift extension block builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for Swift `extension` blocks.
///
/// Members are separated by exactly one blank line; the last member is
/// followed directly by the closing brace.
#[derive(Debug, Clone)]
pub struct Extension {
    type_name: String,
    doc: Option<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl Extension {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn member(mut self, member: &impl Renderable) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    /// Number of members added so far.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Build the extension as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(self);
        builder.build()
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        self.members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(member.iter().cloned());
                fragments
            })
            .collect()
    }
}

impl Renderable for Extension {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::braced(
            format!("extension {} {{", self.type_name),
            self.members_to_fragments(),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swift::Func;

    #[test]
    fn test_empty_extension() {
        let ext = Extension::new("ViewBuilder");
        assert!(ext.is_empty());
        assert_eq!(ext.build(), "extension ViewBuilder {\n}\n");
    }

    #[test]
    fn test_members_separated_by_one_blank_line() {
        let ext = Extension::new("Foo")
            .doc("Helpers.")
            .member(&Func::new("a"))
            .member(&Func::new("b"));

        assert_eq!(ext.len(), 2);
        assert_eq!(
            ext.build(),
            "/// Helpers.\nextension Foo {\n    func a() {\n    }\n\n    func b() {\n    }\n}\n"
        );
    }
}
