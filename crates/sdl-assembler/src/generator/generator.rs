use crate::assembly::write_schema;
use crate::assembly::AssembledSchema;
use crate::assembly::Assembler;
use crate::fragment::discover_fragments;
use crate::fragment::DirectoryFragmentLoader;
use crate::fragment::FragmentId;
use crate::fragment::FragmentLoader;
use crate::fragment::FragmentSet;
use crate::generator::GenerateError;
use crate::generator::GeneratorConfig;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, GenerateError>;

/// The stages of a generation run. Each stage either hands off to the next
/// or ends the run in [`GenerationState::Failed`]; nothing is retried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerationState {
    Discovering,
    Loading,
    Assembling,
    Writing,
    Done,
    Failed,
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Discovering => "discovering",
            Self::Loading => "loading",
            Self::Assembling => "assembling",
            Self::Writing => "writing",
            Self::Done => "done",
            Self::Failed => "failed",
        })
    }
}

/// An assembled schema along with the fragments it was built from, not yet
/// written anywhere.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generation {
    pub fragment_ids: Vec<FragmentId>,
    pub schema: AssembledSchema,
}

/// Summary of a completed run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationReport {
    pub fragment_ids: Vec<FragmentId>,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

/// Runs the fragment pipeline: discover → load → assemble → write.
///
/// The run is strictly sequential and all-or-nothing: the output file is only
/// touched once every fragment has loaded and the document is assembled.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Discovers and loads every fragment in the configured schema directory
    /// and assembles them, without writing anything.
    pub fn assemble(&self) -> Result<Generation> {
        let fragment_ids = Self::stage(GenerationState::Discovering, || {
            discover_fragments(&self.config.schema_dir, &self.config.discovery)
                .map_err(GenerateError::from)
        })?;

        let loader = DirectoryFragmentLoader::new(
            &self.config.schema_dir,
            &self.config.discovery,
        );
        let schema = self.assemble_from(&fragment_ids, &loader)?;

        Ok(Generation { fragment_ids, schema })
    }

    /// Loads `fragment_ids` (in the given order) through `loader` and
    /// assembles them.
    pub fn assemble_from<L: FragmentLoader + ?Sized>(
        &self,
        fragment_ids: &[FragmentId],
        loader: &L,
    ) -> Result<AssembledSchema> {
        let fragment_set = Self::stage(GenerationState::Loading, || {
            FragmentSet::aggregate(fragment_ids, loader).map_err(GenerateError::from)
        })?;

        Self::stage(GenerationState::Assembling, || {
            Ok(Assembler::new(self.config.target.clone()).assemble(&fragment_set))
        })
    }

    /// Runs the full pipeline, writing the generated source to the
    /// configured output path.
    pub fn run(&self) -> Result<GenerationReport> {
        let Generation { fragment_ids, schema } = self.assemble()?;
        self.write(fragment_ids, &schema)
    }

    /// Like [`Generator::run`] but takes fragments from `loader` instead of
    /// the schema directory.
    pub fn run_from<L: FragmentLoader + ?Sized>(
        &self,
        fragment_ids: &[FragmentId],
        loader: &L,
    ) -> Result<GenerationReport> {
        let schema = self.assemble_from(fragment_ids, loader)?;
        self.write(fragment_ids.to_vec(), &schema)
    }

    fn write(
        &self,
        fragment_ids: Vec<FragmentId>,
        schema: &AssembledSchema,
    ) -> Result<GenerationReport> {
        let output_path = self.config.output_path.clone();
        Self::stage(GenerationState::Writing, || {
            write_schema(&output_path, schema).map_err(GenerateError::from)
        })?;

        log::debug!("Generation state: {}.", GenerationState::Done);
        Ok(GenerationReport {
            fragment_ids,
            output_path,
            bytes_written: schema.source().len(),
        })
    }

    fn stage<T>(
        state: GenerationState,
        run_stage: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        log::debug!("Generation state: {state}.");
        run_stage().inspect_err(|err| {
            log::debug!(
                "Generation state: {} (while {state}: {err}).",
                GenerationState::Failed,
            );
        })
    }
}
