// Dataset persistence: bincode files, written atomically

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use lugat_core::RootSet;

use crate::index::Index;

/// Error type for dataset loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset could not be decoded: {0}")]
    Decode(#[source] bincode::Error),

    #[error("dataset could not be encoded: {0}")]
    Encode(#[source] bincode::Error),
}

/// Load a root set from a bincode dataset file.
pub fn load(path: &Path) -> Result<RootSet, DatasetError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let roots: RootSet = bincode::deserialize_from(reader).map_err(DatasetError::Decode)?;
    info!(path = %path.display(), roots = roots.len(), "loaded dataset");
    Ok(roots)
}

/// Save a root set to a bincode dataset file.
///
/// The data is written to a temp file in the target directory and renamed
/// into place, so readers never observe a half-written dataset.
pub fn save(path: &Path, roots: &RootSet) -> Result<(), DatasetError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let temp = match dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            tempfile::NamedTempFile::new_in(dir)?
        }
        None => tempfile::NamedTempFile::new_in(".")?,
    };

    let mut writer = BufWriter::new(temp.as_file());
    bincode::serialize_into(&mut writer, roots).map_err(DatasetError::Encode)?;
    writer.flush()?;
    drop(writer);
    temp.persist(path).map_err(|e| DatasetError::Io(e.error))?;
    info!(path = %path.display(), roots = roots.len(), "saved dataset");
    Ok(())
}

/// Load a dataset and build the search index over it: the one startup-time
/// entry point transports call. Failure here is fatal to a service, since
/// there is nothing to serve without a dataset.
pub fn init_search(path: &Path) -> Result<Index, DatasetError> {
    let roots = load(path)?;
    Ok(Index::build(roots))
}
