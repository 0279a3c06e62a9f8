use crate::assembly::GoSchemaTarget;
use crate::fragment::DiscoveryOptions;
use std::path::PathBuf;

pub const DEFAULT_SCHEMA_DIR: &str = "schema";
pub const DEFAULT_OUTPUT_PATH: &str = "schema.go";

/// Everything a [`Generator`](crate::Generator) run needs to know. Relative
/// paths resolve against the process's working directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    pub schema_dir: PathBuf,
    pub output_path: PathBuf,
    pub discovery: DiscoveryOptions,
    pub target: GoSchemaTarget,
}

impl GeneratorConfig {
    pub fn new(schema_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            output_path: output_path.into(),
            discovery: DiscoveryOptions::default(),
            target: GoSchemaTarget::default(),
        }
    }

    pub fn with_discovery(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn with_target(mut self, target: GoSchemaTarget) -> Self {
        self.target = target;
        self
    }
}

impl std::default::Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_DIR, DEFAULT_OUTPUT_PATH)
    }
}
