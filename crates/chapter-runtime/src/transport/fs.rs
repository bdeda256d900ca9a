use chapter_types::Resource;
use futures::future::BoxFuture;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Fetched, Transport, TransportError};

/// Serves `<root>/<name>.json` from a local directory
#[derive(Debug, Clone)]
pub struct FsTransport {
    root: PathBuf,
}

impl FsTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, resource: Resource) -> PathBuf {
        self.root.join(resource.file_name())
    }
}

impl Transport for FsTransport {
    fn fetch(&self, resource: Resource) -> BoxFuture<'_, Result<Fetched, TransportError>> {
        Box::pin(async move {
            let path = self.path_for(resource);
            match tokio::fs::read(&path).await {
                Ok(body) => Ok(Fetched::ok(body)),
                Err(err) => match err.kind() {
                    ErrorKind::NotFound => Ok(Fetched::status(404)),
                    ErrorKind::PermissionDenied => Ok(Fetched::status(403)),
                    _ => Err(TransportError(format!("{}: {}", path.display(), err))),
                },
            }
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("faq.json"), "[]").unwrap();

        let transport = FsTransport::new(dir.path());
        let fetched = transport.fetch(Resource::Faq).await.unwrap();
        assert!(fetched.is_success());
        assert_eq!(fetched.body, b"[]");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = TempDir::new().unwrap();
        let transport = FsTransport::new(dir.path());
        let fetched = transport.fetch(Resource::Events).await.unwrap();
        assert_eq!(fetched.status, 404);
        assert!(!fetched.is_success());
    }
}
