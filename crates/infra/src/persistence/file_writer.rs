// crates/infra/src/persistence/file_writer.rs
use std::{fs::File, io::BufWriter, path::Path};

use confdiff_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> InfraResult<BufWriter<File>> {
        let path = path.as_ref();
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn create_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "old contents").unwrap();
        let mut w = FileWriter::create(&path).unwrap();
        w.write_all(b"{}\n").unwrap();
        w.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn create_reports_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(matches!(FileWriter::create(&path), Err(InfrastructureError::FileWrite { .. })));
    }
}
