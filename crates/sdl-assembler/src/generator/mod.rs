mod generate_error;
#[allow(clippy::module_inception)]
mod generator;
mod generator_config;

pub use generate_error::GenerateError;
pub use generator::Generation;
pub use generator::GenerationReport;
pub use generator::GenerationState;
pub use generator::Generator;
pub use generator_config::DEFAULT_OUTPUT_PATH;
pub use generator_config::DEFAULT_SCHEMA_DIR;
pub use generator_config::GeneratorConfig;
