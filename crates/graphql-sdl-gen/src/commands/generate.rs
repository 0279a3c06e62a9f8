use crate::output_utils;
use crate::CommandResult;
use crate::RunnableCommand;
use sdl_assembler::assembly;
use sdl_assembler::assembly::GoSchemaTarget;
use sdl_assembler::fragment;
use sdl_assembler::fragment::DiscoveryOptions;
use sdl_assembler::generator;
use sdl_assembler::Generator;
use sdl_assembler::GeneratorConfig;
use std::path::PathBuf;

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value=generator::DEFAULT_SCHEMA_DIR,
        help="Directory containing the schema fragment files.",
        long,
    )]
    pub(crate) schema_dir: PathBuf,

    #[arg(
        default_value=generator::DEFAULT_OUTPUT_PATH,
        help="Path of the Go source file to generate.",
        long,
        short='o',
    )]
    pub(crate) output: PathBuf,

    #[arg(
        default_value=assembly::DEFAULT_PACKAGE_NAME,
        help="Go package name declared by the generated file.",
        long,
    )]
    pub(crate) package: String,

    #[arg(
        default_value=assembly::DEFAULT_CONST_NAME,
        help="Name of the generated string constant holding the SDL.",
        long,
    )]
    pub(crate) const_name: String,

    #[arg(
        default_value=fragment::DEFAULT_FRAGMENT_EXT,
        help="File extension that marks a file in the schema directory as a \
             fragment.",
        long,
    )]
    pub(crate) fragment_ext: String,

    #[arg(
        help="Print the generated source to stdout instead of writing it to \
             the output path.",
        long,
    )]
    pub(crate) stdout: bool,
}

impl GenerateCmd {
    pub(crate) fn to_config(&self) -> GeneratorConfig {
        let target = GoSchemaTarget {
            package_name: self.package.clone(),
            const_name: self.const_name.clone(),
            ..GoSchemaTarget::default()
        };

        GeneratorConfig::new(&self.schema_dir, &self.output)
            .with_discovery(DiscoveryOptions::new(self.fragment_ext.as_str()))
            .with_target(target)
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self) -> CommandResult {
        let generator = Generator::new(self.to_config());
        log::debug!("Generating with {:#?}", generator.config());

        if self.stdout {
            return match generator.assemble() {
                Ok(generation) => CommandResult::stdout(format_args!(
                    "{}",
                    generation.schema.source().trim_end_matches('\n'),
                )),
                Err(err) => failure(err),
            };
        }

        match generator.run() {
            Ok(report) => CommandResult::stdout(format_args!(
                "{} Assembled {} schema fragments into {:?} ({} bytes).",
                output_utils::GREEN_CHECK,
                report.fragment_ids.len(),
                report.output_path,
                report.bytes_written,
            )),
            Err(err) => failure(err),
        }
    }
}

fn failure(err: sdl_assembler::GenerateError) -> CommandResult {
    let failed_during = err.failed_during();
    let err = anyhow::Error::new(err)
        .context(format!("Schema generation failed while {failed_during}"));
    CommandResult::stderr(format_args!("{} {err:#}", output_utils::RED_X))
}
