use crate::fragment::FragmentId;
use crate::fragment::FragmentLoader;
use crate::fragment::FragmentSource;
use crate::fragment::LoadError;

/// The ordered result of loading every fragment of a generation run,
/// split into three parallel sequences of text segments.
///
/// The i-th entry of each sequence belongs to the i-th fragment that was
/// pushed. Empty segments are kept so the sequences stay aligned.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FragmentSet {
    fragment_ids: Vec<FragmentId>,
    query_segments: Vec<String>,
    mutation_segments: Vec<String>,
    type_segments: Vec<String>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads each fragment in `fragment_ids` (in order) through `loader` and
    /// collects their segments.
    ///
    /// Loading stops at the first failure. Duplicate type names across
    /// fragments are neither detected nor reconciled.
    pub fn aggregate<'a, L: FragmentLoader + ?Sized>(
        fragment_ids: impl IntoIterator<Item = &'a FragmentId>,
        loader: &L,
    ) -> Result<Self, LoadError> {
        let mut fragment_set = Self::new();
        for fragment_id in fragment_ids {
            let fragment = loader.load(fragment_id)?;
            log::debug!(
                "Loaded fragment `{fragment_id}` ({} query bytes, {} mutation \
                bytes, {} type bytes).",
                fragment.query_text.len(),
                fragment.mutation_text.len(),
                fragment.type_text.len(),
            );
            fragment_set.push(fragment);
        }
        Ok(fragment_set)
    }

    pub fn push(&mut self, fragment: FragmentSource) {
        let FragmentSource {
            id,
            query_text,
            mutation_text,
            type_text,
        } = fragment;
        self.fragment_ids.push(id);
        self.query_segments.push(query_text);
        self.mutation_segments.push(mutation_text);
        self.type_segments.push(type_text);
    }

    pub fn fragment_ids(&self) -> &[FragmentId] {
        self.fragment_ids.as_slice()
    }

    pub fn query_segments(&self) -> &[String] {
        self.query_segments.as_slice()
    }

    pub fn mutation_segments(&self) -> &[String] {
        self.mutation_segments.as_slice()
    }

    pub fn type_segments(&self) -> &[String] {
        self.type_segments.as_slice()
    }

    pub fn len(&self) -> usize {
        self.fragment_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragment_ids.is_empty()
    }
}

impl std::iter::Extend<FragmentSource> for FragmentSet {
    fn extend<T: IntoIterator<Item = FragmentSource>>(&mut self, iter: T) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}

impl std::iter::FromIterator<FragmentSource> for FragmentSet {
    fn from_iter<T: IntoIterator<Item = FragmentSource>>(iter: T) -> Self {
        let mut fragment_set = Self::new();
        fragment_set.extend(iter);
        fragment_set
    }
}
