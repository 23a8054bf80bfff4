use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use confdiff_shared_kernel::{InfraResult, InfrastructureError};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(buf)
    }

    /// Read a configuration dump as text. A leading BOM is dropped; NUL bytes
    /// or invalid UTF-8 make the file [`InfrastructureError::NotText`].
    pub fn read_text(path: &Path) -> InfraResult<String> {
        let mut bytes = Self::read_to_end(path)?;
        if memchr::memchr(0, &bytes).is_some() {
            return Err(InfrastructureError::NotText { path: path.to_path_buf() });
        }
        if bytes.starts_with(UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }
        String::from_utf8(bytes).map_err(|_| InfrastructureError::NotText { path: path.to_path_buf() })
    }

    /// Non-empty lines of a list file, CR stripped, BOM dropped from the first line.
    pub fn read_lines(path: &Path) -> InfraResult<Vec<String>> {
        let reader = Self::open_buffered(path)?;
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
            let line = if idx == 0 { line.trim_start_matches('\u{feff}') } else { line.as_str() };
            let line = line.trim_end_matches('\r');
            if !line.trim().is_empty() {
                lines.push(line.to_owned());
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn read_text_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r1.cfg");
        fs::write(&path, b"\xEF\xBB\xBFhostname r1\n").unwrap();
        assert_eq!(FileReader::read_text(&path).unwrap(), "hostname r1\n");
    }

    #[test]
    fn read_text_rejects_binary_and_invalid_utf8() {
        let dir = tempdir().unwrap();
        let nul = dir.path().join("image.bin");
        fs::write(&nul, b"ab\0cd").unwrap();
        assert!(matches!(FileReader::read_text(&nul), Err(InfrastructureError::NotText { .. })));

        let latin1 = dir.path().join("latin1.cfg");
        fs::write(&latin1, b"description caf\xE9\n").unwrap();
        assert!(matches!(FileReader::read_text(&latin1), Err(InfrastructureError::NotText { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = FileReader::read_text(&dir.path().join("absent.cfg")).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileRead { .. }));
    }

    #[test]
    fn read_lines_skips_blanks_and_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "\u{feff}a.cfg\r\n\r\n  \nb.cfg\n").unwrap();
        assert_eq!(FileReader::read_lines(&path).unwrap(), ["a.cfg", "b.cfg"]);
    }
}
