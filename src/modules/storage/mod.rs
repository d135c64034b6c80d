use crate::types::StorageContext;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ulid::Ulid;

pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

const DOCUMENT_DIR: &str = "applications";
const STAGED_SUFFIX: &str = ".deleting";

#[derive(Debug, PartialEq)]
pub enum Error {
    UnsupportedFileType,
    TooLarge,
    WriteFailed,
    RemoveFailed,
}

/// A document kept on local disk. `path` is relative to the storage root.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoredDocument {
    pub kind: String,
    pub path: String,
    pub original_name: String,
    pub size: u64,
}

fn extension_of(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

fn absolute(cfg: &StorageContext, document: &StoredDocument) -> PathBuf {
    cfg.root.join(&document.path)
}

pub async fn save(
    cfg: &StorageContext,
    kind: &str,
    original_name: &str,
    contents: Vec<u8>,
) -> Result<StoredDocument, Error> {
    let extension = extension_of(original_name).ok_or(Error::UnsupportedFileType)?;

    if contents.len() > MAX_DOCUMENT_SIZE {
        return Err(Error::TooLarge);
    }

    let directory = cfg.root.join(DOCUMENT_DIR);
    tokio::fs::create_dir_all(&directory).await.map_err(|err| {
        tracing::error!("Failed to create upload directory {:?}: {}", directory, err);
        Error::WriteFailed
    })?;

    let relative_path = format!("{}/{}.{}", DOCUMENT_DIR, Ulid::new(), extension);
    let document = StoredDocument {
        kind: kind.to_string(),
        path: relative_path,
        original_name: original_name.to_string(),
        size: contents.len() as u64,
    };

    tokio::fs::write(absolute(cfg, &document), contents)
        .await
        .map_err(|err| {
            tracing::error!("Failed to write document {}: {}", document.path, err);
            Error::WriteFailed
        })?;

    Ok(document)
}

/// Best-effort removal; failures are logged and skipped.
pub async fn remove(cfg: &StorageContext, documents: &[StoredDocument]) {
    for document in documents {
        if let Err(err) = tokio::fs::remove_file(absolute(cfg, document)).await {
            tracing::warn!("Failed to remove document {}: {}", document.path, err);
        }
    }
}

/// Documents moved aside until the owning row is gone for good.
#[derive(Debug)]
pub struct StagedRemoval {
    moves: Vec<(PathBuf, PathBuf)>,
}

impl StagedRemoval {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Puts every staged document back where it was.
    pub async fn restore(self) {
        for (original, staged) in self.moves.into_iter().rev() {
            if let Err(err) = tokio::fs::rename(&staged, &original).await {
                tracing::error!(
                    "Failed to restore staged document {:?} to {:?}: {}",
                    staged,
                    original,
                    err
                );
            }
        }
    }

    pub async fn purge(self) {
        for (_, staged) in self.moves {
            if let Err(err) = tokio::fs::remove_file(&staged).await {
                tracing::warn!("Failed to purge staged document {:?}: {}", staged, err);
            }
        }
    }
}

/// Renames every document aside. Documents already missing from disk are
/// skipped; any other failure restores what was moved and returns an error.
pub async fn stage_removal(
    cfg: &StorageContext,
    documents: &[StoredDocument],
) -> Result<StagedRemoval, Error> {
    let mut staged = StagedRemoval { moves: vec![] };

    for document in documents {
        let original = absolute(cfg, document);
        let mut staged_path = original.clone().into_os_string();
        staged_path.push(STAGED_SUFFIX);
        let staged_path = PathBuf::from(staged_path);

        match tokio::fs::rename(&original, &staged_path).await {
            Ok(()) => staged.moves.push((original, staged_path)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Document {} is already missing from disk", document.path);
            }
            Err(err) => {
                tracing::error!("Failed to stage document {} for removal: {}", document.path, err);
                staged.restore().await;
                return Err(Error::RemoveFailed);
            }
        }
    }

    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> StorageContext {
        StorageContext {
            root: dir.path().to_path_buf(),
        }
    }

    #[tokio::test]
    async fn saves_documents_under_random_names() {
        let dir = TempDir::new().unwrap();
        let cfg = storage(&dir);

        let document = save(&cfg, "business_permit", "Permit.PDF", b"%PDF-1.4".to_vec())
            .await
            .unwrap();

        assert_eq!(document.kind, "business_permit");
        assert_eq!(document.original_name, "Permit.PDF");
        assert!(document.path.starts_with("applications/"));
        assert!(document.path.ends_with(".pdf"));
        assert_eq!(document.size, 8);
        assert_eq!(
            tokio::fs::read(dir.path().join(&document.path)).await.unwrap(),
            b"%PDF-1.4"
        );
    }

    #[tokio::test]
    async fn rejects_unsupported_and_oversized_files() {
        let dir = TempDir::new().unwrap();
        let cfg = storage(&dir);

        assert_eq!(
            save(&cfg, "business_permit", "permit.exe", vec![0]).await,
            Err(Error::UnsupportedFileType)
        );
        assert_eq!(
            save(&cfg, "business_permit", "permit", vec![0]).await,
            Err(Error::UnsupportedFileType)
        );
        assert_eq!(
            save(&cfg, "business_permit", "permit.png", vec![0; MAX_DOCUMENT_SIZE + 1]).await,
            Err(Error::TooLarge)
        );
    }

    #[tokio::test]
    async fn restore_puts_staged_documents_back() {
        let dir = TempDir::new().unwrap();
        let cfg = storage(&dir);
        let document = save(&cfg, "sanitary_permit", "sanitary.jpg", vec![1, 2, 3])
            .await
            .unwrap();

        let staged = stage_removal(&cfg, &[document.clone()]).await.unwrap();
        assert_eq!(staged.len(), 1);
        assert!(!dir.path().join(&document.path).exists());

        staged.restore().await;
        assert!(dir.path().join(&document.path).exists());
    }

    #[tokio::test]
    async fn purge_deletes_staged_documents() {
        let dir = TempDir::new().unwrap();
        let cfg = storage(&dir);
        let document = save(&cfg, "dti_certificate", "dti.png", vec![9])
            .await
            .unwrap();

        let staged = stage_removal(&cfg, &[document.clone()]).await.unwrap();
        staged.purge().await;

        assert!(!dir.path().join(&document.path).exists());
        let leftovers = std::fs::read_dir(dir.path().join("applications"))
            .unwrap()
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn missing_documents_do_not_block_staging() {
        let dir = TempDir::new().unwrap();
        let cfg = storage(&dir);
        let ghost = StoredDocument {
            kind: String::from("business_permit"),
            path: String::from("applications/gone.pdf"),
            original_name: String::from("gone.pdf"),
            size: 0,
        };

        let staged = stage_removal(&cfg, &[ghost]).await.unwrap();
        assert!(staged.is_empty());
    }
}
