use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::image_store::{ImageStore, ImageUpload},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes featured images beneath a public uploads directory. Each file is
/// prefixed with a generated id, so two uploads sharing a name never
/// overwrite each other.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, upload: &ImageUpload) -> ApplicationResult<String> {
        let file_name = format!("{}_{}", Uuid::new_v4(), base_name(&upload.file_name));

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| store_error("create uploads directory", &err))?;
        tokio::fs::write(self.root.join(&file_name), &upload.bytes)
            .await
            .map_err(|err| store_error("write image", &err))?;

        Ok(format!("/uploads/{file_name}"))
    }
}

// Client file names may carry directory components; only the final
// segment is kept.
fn base_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned())
}

fn store_error(action: &str, err: &std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("image store: {action}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("holiday.png"), "holiday.png");
        assert_eq!(base_name("../../etc/passwd"), "passwd");
        assert_eq!(base_name("photos/cat.jpg"), "cat.jpg");
    }

    #[test]
    fn base_name_falls_back_for_degenerate_input() {
        assert_eq!(base_name(".."), "image");
        assert_eq!(base_name(""), "image");
    }

    #[tokio::test]
    async fn stores_under_a_unique_public_path() {
        let root = std::env::temp_dir().join(format!("uploads-test-{}", Uuid::new_v4()));
        let store = FsImageStore::new(&root);

        let upload = ImageUpload {
            file_name: "banner.png".into(),
            bytes: vec![1, 2, 3],
        };
        let first = store.store(&upload).await.unwrap();
        let second = store.store(&upload).await.unwrap();

        assert!(first.starts_with("/uploads/"));
        assert!(first.ends_with("_banner.png"));
        assert_ne!(first, second);

        let on_disk = root.join(first.trim_start_matches("/uploads/"));
        assert_eq!(tokio::fs::read(on_disk).await.unwrap(), vec![1, 2, 3]);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
