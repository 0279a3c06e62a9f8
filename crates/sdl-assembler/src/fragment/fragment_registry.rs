use crate::fragment::discover_fragments;
use crate::fragment::DirectoryFragmentLoader;
use crate::fragment::DiscoveryError;
use crate::fragment::DiscoveryOptions;
use crate::fragment::FragmentId;
use crate::fragment::FragmentLoader;
use crate::fragment::FragmentProvider;
use crate::fragment::FragmentSource;
use crate::fragment::LoadError;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, RegistryError>;

/// A mapping from [`FragmentId`] to the [`FragmentProvider`] that supplies
/// its text.
///
/// Providers are registered either statically via
/// [`FragmentRegistry::register`] or by scanning a directory of fragment
/// files with [`FragmentRegistry::scan_dir`]. Each id resolves to exactly one
/// provider; registering an id twice is an error rather than a merge.
///
/// ```
/// use sdl_assembler::fragment::FragmentId;
/// use sdl_assembler::fragment::FragmentLoader;
/// use sdl_assembler::fragment::FragmentRegistry;
/// use sdl_assembler::fragment::StaticFragment;
///
/// let mut registry = FragmentRegistry::new();
/// registry.register(
///     FragmentId::new("user"),
///     StaticFragment::new().with_queries("profile: User!"),
/// ).unwrap();
///
/// let user = registry.load(&FragmentId::new("user")).unwrap();
/// assert_eq!(user.query_text(), "profile: User!");
/// assert_eq!(user.mutation_text(), "");
/// ```
#[derive(Debug, Default)]
pub struct FragmentRegistry {
    providers: BTreeMap<FragmentId, Box<dyn FragmentProvider>>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from every fragment file found directly inside
    /// `dir`. All files are loaded eagerly; the first failure aborts the scan.
    pub fn scan_dir(dir: impl AsRef<Path>, options: &DiscoveryOptions) -> Result<Self> {
        let dir = dir.as_ref();
        let loader = DirectoryFragmentLoader::new(dir, options);
        let mut registry = Self::new();
        for fragment_id in discover_fragments(dir, options)? {
            let fragment_file = loader.load_file(&fragment_id)?;
            registry.register(fragment_id, fragment_file)?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        fragment_id: FragmentId,
        provider: impl FragmentProvider + 'static,
    ) -> Result<()> {
        if self.providers.contains_key(&fragment_id) {
            return Err(RegistryError::DuplicateFragment(fragment_id));
        }

        log::trace!("Registered fragment `{fragment_id}`.");
        self.providers.insert(fragment_id, Box::new(provider));
        Ok(())
    }

    pub fn with_fragment(
        mut self,
        fragment_id: FragmentId,
        provider: impl FragmentProvider + 'static,
    ) -> Result<Self> {
        self.register(fragment_id, provider)?;
        Ok(self)
    }

    pub fn get(&self, fragment_id: &FragmentId) -> Option<&dyn FragmentProvider> {
        self.providers.get(fragment_id).map(|provider| provider.as_ref())
    }

    /// Registered ids in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = &FragmentId> {
        self.providers.keys()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FragmentLoader for FragmentRegistry {
    fn load(&self, fragment_id: &FragmentId) -> std::result::Result<FragmentSource, LoadError> {
        let provider = self.get(fragment_id).ok_or_else(|| LoadError::NotFound {
            fragment_id: fragment_id.clone(),
            file_path: None,
        })?;

        Ok(FragmentSource::from_provider(fragment_id.clone(), provider))
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Fragment `{0}` was registered more than once")]
    DuplicateFragment(FragmentId),

    #[error(transparent)]
    Load(#[from] LoadError),
}
