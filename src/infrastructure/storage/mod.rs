use rand::Rng;
use std::path::{Path, PathBuf};

/// Writes synthesized audio to scratch storage.
///
/// Filenames carry a 4-byte random suffix from the thread-local CSPRNG;
/// uniqueness between concurrent requests relies on that randomness alone,
/// there is no locking on the directory.
pub struct ArtifactStore {
    dir: PathBuf,
    keep_artifacts: bool,
}

impl ArtifactStore {
    pub fn new(dir: PathBuf, keep_artifacts: bool) -> Self {
        Self {
            dir,
            keep_artifacts,
        }
    }

    /// Write the audio bytes to a freshly named file in the artifact
    /// directory. No fsync - this is scratch storage, not a store of record.
    pub async fn write(&self, audio: &[u8]) -> Result<ScratchArtifact, std::io::Error> {
        let file_name = random_artifact_name();
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, audio).await?;

        tracing::debug!(
            path = %path.display(),
            size = audio.len(),
            "Audio artifact written"
        );

        Ok(ScratchArtifact {
            path,
            file_name,
            keep: self.keep_artifacts,
        })
    }
}

fn random_artifact_name() -> String {
    let suffix: [u8; 4] = rand::thread_rng().gen();
    format!("output_{}.mp3", hex::encode(suffix))
}

/// A scratch audio file that lives for the scope of one request.
///
/// Unless the store is configured to keep artifacts, the file is removed
/// when this guard drops, after the response body has been produced.
#[derive(Debug)]
pub struct ScratchArtifact {
    path: PathBuf,
    file_name: String,
    keep: bool,
}

impl ScratchArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for ScratchArtifact {
    fn drop(&mut self) {
        if !self.keep {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove audio artifact"
                );
            }
        }
    }
}
