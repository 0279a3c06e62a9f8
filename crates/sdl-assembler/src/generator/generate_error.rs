use crate::assembly::WriteError;
use crate::fragment::DiscoveryError;
use crate::fragment::LoadError;
use crate::generator::GenerationState;
use thiserror::Error;

/// Why a generation run ended in [`GenerationState::Failed`].
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to discover schema fragments")]
    Discovery(#[from] DiscoveryError),

    #[error("Failed to load schema fragments")]
    Load(#[from] LoadError),

    #[error("Failed to write the generated schema")]
    Write(#[from] WriteError),
}
impl GenerateError {
    /// The state the run was in when it failed.
    pub fn failed_during(&self) -> GenerationState {
        match self {
            Self::Discovery(_) => GenerationState::Discovering,
            Self::Load(_) => GenerationState::Loading,
            Self::Write(_) => GenerationState::Writing,
        }
    }
}
