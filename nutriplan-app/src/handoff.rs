use std::{
    fs, io,
    path::PathBuf,
};

use log::debug;
use nutriplan_model::profile::UserProfile;
use serde_json::{Map, Value};

/// Key the submitted profile is kept under.
pub const USER_FORM_DATA_KEY: &str = "userFormData";

#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("handoff storage unavailable: {0}")]
    Io(#[from] io::Error),
    #[error("stored profile is unreadable: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Carries the submitted profile from the form step to the results step.
#[mockall::automock]
pub trait HandoffSlot: Send + Sync {
    fn store(&mut self, profile: &UserProfile) -> Result<(), HandoffError>;
    fn load(&self) -> Result<Option<UserProfile>, HandoffError>;
}

/// Handoff within one process: the profile is held as plain data.
#[derive(Default)]
pub struct MemorySlot {
    profile: Option<UserProfile>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandoffSlot for MemorySlot {
    fn store(&mut self, profile: &UserProfile) -> Result<(), HandoffError> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<UserProfile>, HandoffError> {
        Ok(self.profile.clone())
    }
}

/// Handoff between separate runs: a JSON object on disk, profile stored under
/// [`USER_FORM_DATA_KEY`]. Other keys in the file are preserved.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<Option<Map<String, Value>>, HandoffError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl HandoffSlot for FileSlot {
    fn store(&mut self, profile: &UserProfile) -> Result<(), HandoffError> {
        let mut entries = self.read_entries().ok().flatten().unwrap_or_default();
        entries.insert(USER_FORM_DATA_KEY.to_owned(), serde_json::to_value(profile)?);

        debug!("Writing handoff to {}", self.path.display());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<UserProfile>, HandoffError> {
        let Some(mut entries) = self.read_entries()? else {
            debug!("No handoff file at {}", self.path.display());
            return Ok(None);
        };

        entries
            .remove(USER_FORM_DATA_KEY)
            .map(serde_json::from_value)
            .transpose()
            .map_err(HandoffError::from)
    }
}
