//! Swift declaration nodes.
//!
//! Each node renders through [`Renderable`](crate::builder::Renderable), so
//! it can be emitted into any [`CodeBuilder`](crate::builder::CodeBuilder).

mod extension;
mod fns;
mod init;

pub use extension::Extension;
pub use fns::Func;
pub use init::Init;

/// A generic parameter, optionally constrained (`V0` or `V0: View`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParam {
    pub name: String,
    pub constraint: Option<String>,
}

impl GenericParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    pub fn constrained(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: Some(constraint.into()),
        }
    }

    fn render(&self) -> String {
        match &self.constraint {
            Some(constraint) => format!("{}: {}", self.name, constraint),
            None => self.name.clone(),
        }
    }
}

/// A positional function or initializer parameter, `_ v0: V0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn unlabeled(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        format!("_ {}: {}", self.name, self.ty)
    }
}

/// `<A, B: View>`, or nothing when there are no generics.
pub(crate) fn generic_clause(generics: &[GenericParam]) -> String {
    if generics.is_empty() {
        return String::new();
    }
    let params: Vec<String> = generics.iter().map(GenericParam::render).collect();
    format!("<{}>", params.join(", "))
}

/// `(_ a: A, _ b: B)`.
pub(crate) fn param_clause(params: &[Param]) -> String {
    let params: Vec<String> = params.iter().map(Param::render).collect();
    format!("({})", params.join(", "))
}

/// ` where A: View, B: View`, or nothing when there are no requirements.
pub(crate) fn where_clause(requirements: &[String]) -> String {
    if requirements.is_empty() {
        String::new()
    } else {
        format!(" where {}", requirements.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_clause() {
        assert_eq!(generic_clause(&[]), "");
        assert_eq!(
            generic_clause(&[GenericParam::new("V0"), GenericParam::constrained("V1", "View")]),
            "<V0, V1: View>"
        );
    }

    #[test]
    fn test_param_clause() {
        assert_eq!(param_clause(&[]), "()");
        assert_eq!(
            param_clause(&[
                Param::unlabeled("v0", "V0"),
                Param::unlabeled("v1", "V1")
            ]),
            "(_ v0: V0, _ v1: V1)"
        );
    }

    #[test]
    fn test_where_clause() {
        assert_eq!(where_clause(&[]), "");
        assert_eq!(
            where_clause(&["V0: View".to_string(), "V1: View".to_string()]),
            " where V0: View, V1: View"
        );
    }
}
