use async_trait::async_trait;
use domain::recommendation::missing_advisory_text;
use domain::{AdvisorySource, SectorKind};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Reads advisory text from `recommendation_*.txt` files in a directory.
///
/// Files are read on every call so edits take effect without a restart.
#[derive(Debug, Clone)]
pub struct FileAdvisorySource {
    templates_dir: PathBuf,
}

impl FileAdvisorySource {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn file_name(kind: SectorKind) -> &'static str {
        match kind {
            SectorKind::BusinessTravel => "recommendation_business.txt",
            SectorKind::EnergyUsage => "recommendation_energy_usage.txt",
            SectorKind::WasteSector => "recommendation_waste.txt",
        }
    }

    pub fn path_for(&self, kind: SectorKind) -> PathBuf {
        self.templates_dir.join(Self::file_name(kind))
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}

#[async_trait]
impl AdvisorySource for FileAdvisorySource {
    async fn load(&self, kind: SectorKind) -> String {
        let path = self.path_for(kind);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!(sector = %kind, path = %path.display(), "Advisory text loaded");
                text
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(sector = %kind, path = %path.display(), "Recommendation file not found: {}", e);
                missing_advisory_text(kind)
            }
            Err(e) => {
                error!(sector = %kind, path = %path.display(), "Failed to read recommendation file: {}", e);
                format!(
                    "An error occurred while reading the file for {}: {}\n\n",
                    kind, e
                )
            }
        }
    }
}
