use std::path::Path;

use bytes::Bytes;

/// Admission limit for a single audio file: 25 MiB, inclusive.
pub const MAX_FILE_BYTES: u64 = 25 * 1024 * 1024;

/// One attached audio file. `size_bytes` is recorded at selection time and is
/// always `contents.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub contents: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        let contents = contents.into();
        Self {
            name: name.into(),
            size_bytes: contents.len() as u64,
            contents,
        }
    }

    pub async fn load(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let contents = tokio::fs::read(path).await?;
        Ok(Self::new(name, contents))
    }

    /// Size label shown next to the file: whole kilobytes below one MiB,
    /// two-decimal megabytes from there up.
    pub fn human_size(&self) -> String {
        if self.size_bytes < 1024 * 1024 {
            format!("{:.0} KB", self.size_bytes as f64 / 1024.0)
        } else {
            format!("{:.2} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

/// Ordered set of files attached to the next submission. Insertion order is
/// selection order and is preserved by removal.
#[derive(Debug, Default)]
pub struct AttachmentList {
    files: Vec<SelectedFile>,
}

impl AttachmentList {
    /// Admits every candidate within the size limit, in offer order, and
    /// returns the names of the rejected ones. The returned list covers this
    /// call only; admitted files accumulate across calls.
    pub fn add_files(&mut self, candidates: impl IntoIterator<Item = SelectedFile>) -> Vec<String> {
        let mut rejected = Vec::new();

        for candidate in candidates {
            if candidate.size_bytes <= MAX_FILE_BYTES {
                self.files.push(candidate);
            } else {
                rejected.push(candidate.name);
            }
        }

        rejected
    }

    /// Out-of-bounds indices are a silent no-op.
    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }
}
