mod directory_fragment_loader;
mod fragment_discovery;
mod fragment_file;
mod fragment_id;
mod fragment_loader;
mod fragment_provider;
mod fragment_registry;
mod fragment_set;
mod fragment_source;

pub use directory_fragment_loader::DirectoryFragmentLoader;
pub use fragment_discovery::discover_fragments;
pub use fragment_discovery::DEFAULT_FRAGMENT_EXT;
pub use fragment_discovery::DEFAULT_RESERVED_STEM;
pub use fragment_discovery::DiscoveryError;
pub use fragment_discovery::DiscoveryOptions;
pub use fragment_file::FragmentFile;
pub use fragment_id::FragmentId;
pub use fragment_loader::FragmentLoader;
pub use fragment_loader::LoadError;
pub use fragment_provider::FragmentProvider;
pub use fragment_provider::StaticFragment;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry::RegistryError;
pub use fragment_set::FragmentSet;
pub use fragment_source::FragmentSource;

#[cfg(test)]
mod tests;
