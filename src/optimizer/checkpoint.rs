use super::stats::{HallOfFame, Logbook};
use crate::consts::CHECKPOINT_FILE;
use crate::core_types::Individual;
use crate::error::HtResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Everything needed to continue a search exactly where it stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub population: Vec<Individual>,
    pub generation: usize,
    pub hall_of_fame: HallOfFame,
    pub logbook: Logbook,
    /// Internal state of the search's random generator.
    pub rng_state: u64,
}

impl Checkpoint {
    /// Generation a run resumed from this checkpoint starts at.
    pub fn resume_generation(&self) -> usize {
        self.logbook.next_generation().unwrap_or(self.generation)
    }
}

/// A checkpoint file at a fixed path.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/latest_checkpoint.json`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(CHECKPOINT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the checkpoint if there is a usable one. Missing, unreadable or
    /// corrupt files all come back as `None`.
    pub fn load(&self) -> Option<Checkpoint> {
        if !self.path.is_file() {
            debug!("No checkpoint at {}", self.path.display());
            return None;
        }

        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                warn!("⚠️  Could not open checkpoint {}: {}. Starting fresh.", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(cp) => Some(cp),
            Err(e) => {
                warn!("⚠️  Ignoring corrupt checkpoint {}: {}. Starting fresh.", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrites the checkpoint. The new contents go to a sibling temp file
    /// first and are renamed into place.
    pub fn save(&self, checkpoint: &Checkpoint) -> HtResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(fs::File::create(&tmp)?);
            serde_json::to_writer(&mut writer, checkpoint)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        debug!("Checkpoint written for generation {}", checkpoint.generation);
        Ok(())
    }
}
