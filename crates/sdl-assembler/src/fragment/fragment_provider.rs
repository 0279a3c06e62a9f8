/// Something that can supply a fragment's SDL text.
///
/// Each accessor returns `None` when the fragment does not define that kind
/// of text. A fragment may, for example, only contribute types.
pub trait FragmentProvider: std::fmt::Debug {
    /// Fields to be placed inside the root `type Query { ... }` block.
    fn queries(&self) -> Option<&str>;

    /// Fields to be placed inside the root `type Mutation { ... }` block.
    fn mutations(&self) -> Option<&str>;

    /// Standalone `type`/`input`/etc declarations placed after the root
    /// operation types.
    fn types(&self) -> Option<&str>;
}

/// A [`FragmentProvider`] whose text is registered directly in code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StaticFragment {
    queries: Option<String>,
    mutations: Option<String>,
    types: Option<String>,
}

impl StaticFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_queries(mut self, queries: impl Into<String>) -> Self {
        self.queries = Some(queries.into());
        self
    }

    pub fn with_mutations(mut self, mutations: impl Into<String>) -> Self {
        self.mutations = Some(mutations.into());
        self
    }

    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }
}

impl FragmentProvider for StaticFragment {
    fn queries(&self) -> Option<&str> {
        self.queries.as_deref()
    }

    fn mutations(&self) -> Option<&str> {
        self.mutations.as_deref()
    }

    fn types(&self) -> Option<&str> {
        self.types.as_deref()
    }
}
