use crate::fragment::FragmentId;
use crate::fragment::FragmentProvider;

/// The three SDL text segments one fragment contributes to a generation run.
///
/// Any segment the fragment does not define is the empty string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FragmentSource {
    pub(crate) id: FragmentId,
    pub(crate) query_text: String,
    pub(crate) mutation_text: String,
    pub(crate) type_text: String,
}

impl FragmentSource {
    pub fn new(
        id: FragmentId,
        query_text: impl Into<String>,
        mutation_text: impl Into<String>,
        type_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            query_text: query_text.into(),
            mutation_text: mutation_text.into(),
            type_text: type_text.into(),
        }
    }

    /// Snapshots a provider's three text accessors, defaulting each absent
    /// value to `""`.
    pub fn from_provider(id: FragmentId, provider: &dyn FragmentProvider) -> Self {
        Self::new(
            id,
            provider.queries().unwrap_or_default(),
            provider.mutations().unwrap_or_default(),
            provider.types().unwrap_or_default(),
        )
    }

    pub fn id(&self) -> &FragmentId {
        &self.id
    }

    pub fn query_text(&self) -> &str {
        self.query_text.as_str()
    }

    pub fn mutation_text(&self) -> &str {
        self.mutation_text.as_str()
    }

    pub fn type_text(&self) -> &str {
        self.type_text.as_str()
    }
}
