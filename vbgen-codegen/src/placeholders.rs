//! Positional placeholder identifiers for a single arity.

/// One `(value, type)` identifier pair, e.g. `(v2, V2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    index: usize,
}

impl Placeholder {
    pub const VALUE_PREFIX: char = 'v';
    pub const TYPE_PREFIX: char = 'V';

    /// The value identifier, `v{index}`.
    pub fn value(&self) -> String {
        format!("{}{}", Self::VALUE_PREFIX, self.index)
    }

    /// The type identifier, `V{index}`.
    pub fn ty(&self) -> String {
        format!("{}{}", Self::TYPE_PREFIX, self.index)
    }
}

/// The ordered placeholder pairs for one arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    arity: usize,
}

impl Placeholders {
    pub fn new(arity: usize) -> Self {
        Self { arity }
    }

    pub fn pairs(&self) -> impl Iterator<Item = Placeholder> + use<> {
        (0..self.arity).map(|index| Placeholder { index })
    }

    /// `v0, v1, ...` in index order.
    pub fn values(&self) -> Vec<String> {
        self.pairs().map(|p| p.value()).collect()
    }

    /// `V0, V1, ...` in index order.
    pub fn types(&self) -> Vec<String> {
        self.pairs().map(|p| p.ty()).collect()
    }

    /// `(V0, V1, ...)`
    pub fn tuple_type(&self) -> String {
        format!("({})", self.types().join(", "))
    }

    /// `(v0, v1, ...)`
    pub fn tuple_value(&self) -> String {
        format!("({})", self.values().join(", "))
    }
}
