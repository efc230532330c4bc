use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::extraction::DocumentKind;

/// An uploaded document written to a uniquely named temp file.
///
/// The on-disk name is random (`resume-XXXXXX.<ext>`), never the client-supplied
/// filename. The file is deleted when this value is dropped.
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    pub fn write(dir: &Path, kind: DocumentKind, bytes: &[u8]) -> std::io::Result<Self> {
        let suffix = format!(".{}", kind.extension());
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
