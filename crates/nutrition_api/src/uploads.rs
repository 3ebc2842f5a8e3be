//! Contact-form attachment handling.
//!
//! # Responsibility
//! - Enforce the attachment policy (count, size, file type).
//! - Write accepted files under unique names and return their paths.
//!
//! # Invariants
//! - Policy is checked for every file before any file is written.
//! - A failed request leaves no files from that request on disk.

use log::{info, warn};
use nutrition_core::{Clock, SystemClock};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const MAX_ATTACHMENTS: usize = 5;
pub const MAX_ATTACHMENT_BYTES: usize = 10 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

const STORED_NAME_PREFIX: &str = "documents";

/// One uploaded file as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Client-side file name; only its extension is kept.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

#[derive(Debug)]
pub enum UploadError {
    TooManyFiles { count: usize },
    FileTooLarge { file_name: String },
    UnsupportedType { file_name: String },
    Io { path: PathBuf, source: std::io::Error },
}

impl UploadError {
    /// Policy violations are the client's to fix; I/O failures are not.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

impl Display for UploadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyFiles { .. } => write!(
                f,
                "Too many files. At most {MAX_ATTACHMENTS} documents can be attached."
            ),
            Self::FileTooLarge { .. } => f.write_str("File too large. Maximum size is 10 MB."),
            Self::UnsupportedType { .. } => {
                f.write_str("Invalid file type. Only PDF, JPG, and PNG files are allowed.")
            }
            Self::Io { path, source } => {
                write!(f, "failed to write upload `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for UploadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Directory-backed attachment store.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Checks every attachment against the policy without writing anything.
    pub fn check(&self, attachments: &[Attachment]) -> Result<(), UploadError> {
        if attachments.len() > MAX_ATTACHMENTS {
            return Err(UploadError::TooManyFiles {
                count: attachments.len(),
            });
        }
        for attachment in attachments {
            let allowed = attachment
                .extension()
                .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
            if !allowed {
                return Err(UploadError::UnsupportedType {
                    file_name: attachment.file_name.clone(),
                });
            }
            if attachment.bytes.len() > MAX_ATTACHMENT_BYTES {
                return Err(UploadError::FileTooLarge {
                    file_name: attachment.file_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Writes all attachments and returns their stored paths in input order.
    pub fn store(&self, attachments: &[Attachment]) -> Result<Vec<String>, UploadError> {
        self.check(attachments)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| UploadError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(attachments.len());
        for attachment in attachments {
            let path = self.dir.join(stored_name(attachment));
            if let Err(source) = std::fs::write(&path, &attachment.bytes) {
                remove_partial(&written);
                return Err(UploadError::Io { path, source });
            }
            written.push(path);
        }

        info!(
            "event=attachments_stored module=uploads status=ok count={}",
            written.len()
        );
        Ok(written
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect())
    }
}

fn stored_name(attachment: &Attachment) -> String {
    let extension = attachment.extension().unwrap_or_default();
    format!(
        "{STORED_NAME_PREFIX}-{}-{}.{extension}",
        SystemClock.now_ms(),
        Uuid::new_v4().simple()
    )
}

fn remove_partial(written: &[PathBuf]) {
    for path in written {
        if let Err(err) = std::fs::remove_file(path) {
            warn!(
                "event=attachment_cleanup module=uploads status=error path={} error={}",
                path.display(),
                err
            );
        }
    }
}
