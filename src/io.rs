//! File I/O boundary
//!
//! Input files are read whole into memory; output goes through a buffered
//! writer that tracks what it has written and flushes on drop. All failures
//! surface as typed errors carrying the path they occurred on.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::RefineError;

/// Write buffer size (4MB).
const WRITE_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Read a file's entire contents.
pub fn read_whole_file(path: &Path) -> Result<Vec<u8>, RefineError> {
    fs::read(path).map_err(|e| RefineError::read(path, e))
}

/// Buffered output file writer.
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create (truncating) the output file.
    pub fn create(path: &Path) -> Result<Self, RefineError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| RefineError::write(path, e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(WRITE_BUFFER_SIZE, file),
            path: path.to_path_buf(),
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write one word followed by a newline.
    pub fn write_word(&mut self, word: &[u8]) -> Result<(), RefineError> {
        self.writer
            .write_all(word)
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| RefineError::write(&self.path, e))?;

        self.lines_written += 1;
        self.bytes_written += word.len() as u64 + 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RefineError> {
        self.writer
            .flush()
            .map_err(|e| RefineError::write(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Write every word, newline-terminated, in collection order.
///
/// Returns the number of lines written.
pub fn write_lines(path: &Path, words: &[Vec<u8>]) -> Result<u64, RefineError> {
    let mut writer = OutputWriter::create(path)?;
    for word in words {
        writer.write_word(word)?;
    }
    writer.flush()?;
    Ok(writer.lines_written())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"alpha\nbeta\n").unwrap();

        assert_eq!(read_whole_file(&path).unwrap(), b"alpha\nbeta\n");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_whole_file(Path::new("/nonexistent/wordlist.txt")).unwrap_err();
        assert!(matches!(err, RefineError::Read { .. }));
    }

    #[test]
    fn test_output_writer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut writer = OutputWriter::create(&path).unwrap();
        writer.write_word(b"hello").unwrap();
        writer.write_word(b"world").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.bytes_written(), 12);
        assert_eq!(fs::read(&path).unwrap(), b"hello\nworld\n");
    }

    #[test]
    fn test_write_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let words = vec![b"one".to_vec(), b"two".to_vec()];
        let written = write_lines(&path, &words).unwrap();

        assert_eq!(written, 2);
        assert_eq!(fs::read(&path).unwrap(), b"one\ntwo\n");
    }

    #[test]
    fn test_write_to_bad_path() {
        let err = write_lines(Path::new("/nonexistent/dir/out.txt"), &[]).unwrap_err();
        assert!(matches!(err, RefineError::Write { .. }));
    }
}
