//! Artifact loading for the kuliner recommendation service.
//!
//! The artifact set is read once at startup from a models directory. A
//! missing file leaves the service running in a degraded
//! [`Availability::Unavailable`] state; corrupt or inconsistent artifacts are
//! startup errors.

pub mod artifacts;
pub mod error;
pub mod loader;

pub use artifacts::{ArtifactSet, ARTIFACT_FILES};
pub use error::{LoadError, Result};
pub use loader::{ArtifactLoader, Availability};
