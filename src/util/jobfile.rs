use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Error as SerdeError, Map, Value};

use crate::domain::catalog::ConfigError;
use crate::domain::entities::{PresetConfig, RoomInput};

/// A job description as read from disk: the rooms to price, optional named
/// add-on costs, and an optional preset override. A file without a `config`
/// section prices against the default preset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(default)]
    pub config: PresetConfig,
    pub rooms: Vec<RoomInput>,
    /// Values may be any JSON; aggregation ignores non-numeric entries.
    #[serde(default)]
    pub add_ons: Map<String, Value>,
}

pub fn load_job_file(path: &Path) -> Result<JobFile, JobFileError> {
    let data = fs::read_to_string(path)?;
    let job: JobFile = serde_json::from_str(&data)?;
    job.config.validate()?;
    Ok(job)
}

#[derive(Debug, thiserror::Error)]
pub enum JobFileError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] SerdeError),
    #[error("invalid preset in job file: {0}")]
    Config(#[from] ConfigError),
}
