use crate::fragment::FragmentProvider;
use serde::Deserialize;

/// The on-disk form of a fragment: a TOML document with up to three string
/// keys.
///
/// ```toml
/// queries = '''
///     # A post object.
///     post(id: String!): Post!
/// '''
///
/// types = '''
/// type Post {
///     id: String!
/// }
/// '''
/// ```
///
/// Keys other than `queries`, `mutations` and `types` are rejected so that a
/// misspelled key doesn't silently drop its text from the schema.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FragmentFile {
    queries: Option<String>,
    mutations: Option<String>,
    types: Option<String>,
}

impl FragmentFile {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl FragmentProvider for FragmentFile {
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
