// On-disk layout of the precomputed artifact set
use crate::error::{LoadError, Result};
use kuliner_core::{Catalog, ItemIndex, KulinerRecord, SimilarityMatrix, TfidfMatrix, TfidfVectorizer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const TFIDF_MATRIX_FILE: &str = "tfidf_matrix.bin";
pub const SIMILARITY_FILE: &str = "cosine_sim.bin";
pub const DATA_FILE: &str = "data.json";
pub const INDICES_FILE: &str = "indices.json";

/// Every file the loader expects, in load order.
pub const ARTIFACT_FILES: [&str; 5] = [
    VECTORIZER_FILE,
    TFIDF_MATRIX_FILE,
    SIMILARITY_FILE,
    DATA_FILE,
    INDICES_FILE,
];

/// The five artifacts as decoded from disk, before consistency checks.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    pub vectorizer: TfidfVectorizer,
    pub tfidf: TfidfMatrix,
    pub similarity: SimilarityMatrix,
    pub records: Vec<KulinerRecord>,
    pub index: ItemIndex,
}

impl ArtifactSet {
    /// Decode all five files from `dir`. The first missing or unreadable
    /// file aborts the load.
    pub fn read(dir: &Path) -> Result<Self> {
        Ok(Self {
            vectorizer: read_json(&dir.join(VECTORIZER_FILE))?,
            tfidf: read_bincode(&dir.join(TFIDF_MATRIX_FILE))?,
            similarity: read_bincode(&dir.join(SIMILARITY_FILE))?,
            records: read_json(&dir.join(DATA_FILE))?,
            index: read_json(&dir.join(INDICES_FILE))?,
        })
    }

    /// Write all five files into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| LoadError::io(dir.to_path_buf(), e))?;
        write_json(&dir.join(VECTORIZER_FILE), &self.vectorizer)?;
        write_bincode(&dir.join(TFIDF_MATRIX_FILE), &self.tfidf)?;
        write_bincode(&dir.join(SIMILARITY_FILE), &self.similarity)?;
        write_json(&dir.join(DATA_FILE), &self.records)?;
        write_json(&dir.join(INDICES_FILE), &self.index)?;
        Ok(())
    }

    /// Check cardinalities and assemble the serving catalog.
    pub fn into_catalog(self) -> Result<Catalog> {
        Ok(Catalog::new(
            self.vectorizer,
            self.tfidf,
            self.similarity,
            self.records,
            self.index,
        )?)
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::io(path.to_path_buf(), e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    serde_json::from_reader(open(path)?).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_bincode<T: DeserializeOwned>(path: &Path) -> Result<T> {
    bincode::deserialize_from(open(path)?).map_err(|source| LoadError::Bincode {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| LoadError::io(path.to_path_buf(), e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| LoadError::io(path.to_path_buf(), e))
}

fn write_bincode<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = create(path)?;
    bincode::serialize_into(&mut writer, value).map_err(|source| LoadError::Bincode {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| LoadError::io(path.to_path_buf(), e))
}
