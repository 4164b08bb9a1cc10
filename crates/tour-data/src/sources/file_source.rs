use std::path::PathBuf;

use async_trait::async_trait;

use super::ManifestSource;
use crate::ManifestError;

/// Manifest read from the local filesystem.
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl ManifestSource for FileSource {
    async fn fetch(&self) -> Result<String, ManifestError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
