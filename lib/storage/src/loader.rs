use crate::artifacts::ArtifactSet;
use crate::error::Result;
use kuliner_core::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Reads the artifact set from a models directory at startup.
pub struct ArtifactLoader {
    models_dir: PathBuf,
}

impl ArtifactLoader {
    pub fn new<P: AsRef<Path>>(models_dir: P) -> Self {
        Self {
            models_dir: models_dir.as_ref().to_path_buf(),
        }
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Load and validate every artifact.
    pub fn load(&self) -> Result<Catalog> {
        let catalog = ArtifactSet::read(&self.models_dir)?.into_catalog()?;
        info!(
            "All models and data successfully loaded from '{}' ({} items)",
            self.models_dir.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Load for serving: a missing file degrades to [`Availability::Unavailable`],
    /// any other failure is returned to the caller.
    pub fn load_availability(&self) -> Result<Availability> {
        Availability::from_load(self.load(), &self.models_dir)
    }
}

/// Whether the recommendation artifacts can be served.
///
/// All artifacts are available together or not at all.
#[derive(Debug, Clone)]
pub enum Availability {
    Ready(Arc<Catalog>),
    Unavailable(String),
}

impl Availability {
    /// Fold a load result into an availability state. Only a missing file is
    /// absorbed; corrupt or inconsistent artifacts stay errors.
    pub fn from_load(result: Result<Catalog>, models_dir: &Path) -> Result<Self> {
        match result {
            Ok(catalog) => Ok(Availability::Ready(Arc::new(catalog))),
            Err(e) if e.is_missing() => {
                error!(
                    "One or more model files not found in '{}': {}",
                    models_dir.display(),
                    e
                );
                warn!("Failed to load models. Recommendation endpoint will not work properly.");
                Ok(Availability::Unavailable(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Availability::Ready(_))
    }

    /// The catalog, or the reason it is unavailable.
    pub fn catalog(&self) -> std::result::Result<&Arc<Catalog>, &str> {
        match self {
            Availability::Ready(catalog) => Ok(catalog),
            Availability::Unavailable(reason) => Err(reason),
        }
    }
}

impl From<Catalog> for Availability {
    fn from(catalog: Catalog) -> Self {
        Availability::Ready(Arc::new(catalog))
    }
}
