use crate::Result;
use crate::transport::FileUpload;
use std::path::{Path, PathBuf};

/// Files attached to an application, sent alongside the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFiles {
    pub profile_picture: Option<FileUpload>,
    pub attachments: Vec<FileUpload>,
}

impl ApplicationFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile_picture(mut self, file: FileUpload) -> Self {
        self.profile_picture = Some(file);
        self
    }

    pub fn with_attachment(mut self, file: FileUpload) -> Self {
        self.attachments.push(file);
        self
    }

    pub fn has_profile_picture(&self) -> bool {
        self.profile_picture.is_some()
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_profile_picture() && !self.has_attachments()
    }

    pub async fn from_paths(
        profile_picture: Option<&Path>,
        attachments: &[PathBuf],
    ) -> Result<Self> {
        let mut files = Self::new();
        if let Some(path) = profile_picture {
            files.profile_picture = Some(FileUpload::from_path(path).await?);
        }
        for path in attachments {
            files.attachments.push(FileUpload::from_path(path).await?);
        }
        Ok(files)
    }
}

impl FileUpload {
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, mime_for(path), bytes))
    }
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
