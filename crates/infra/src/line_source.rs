// crates/infra/src/line_source.rs
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::{Path, PathBuf},
};

use line_ratio_ports::{LineSource, Lines};
use line_ratio_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Line source backed by a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh stream over the file.
    pub fn open(&self) -> Result<FileLines> {
        let reader = FileReader::open_buffered(&self.path)?;
        log::debug!("opened {}", self.path.display());
        Ok(FileLines { reader, path: self.path.clone(), line: 0, buf: Vec::new(), after_cr: false, done: false })
    }
}

impl LineSource for FileLineSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> Result<String> {
        Ok(FileReader::read_to_string(&self.path)?)
    }

    fn lines(&self) -> Result<Lines<'_>> {
        Ok(Box::new(self.open()?))
    }
}

/// Streaming iterator over the lines of one open file.
///
/// `\n`, `\r\n` and a lone `\r` each end a line and are removed. The iterator
/// is fused after the first error, and the file handle is closed when the
/// iterator is dropped.
#[derive(Debug)]
pub struct FileLines {
    reader: BufReader<File>,
    path: PathBuf,
    line: usize,
    buf: Vec<u8>,
    /// The previous line ended in `\r`; a `\n` at the start of the next read belongs to it.
    after_cr: bool,
    done: bool,
}

impl FileLines {
    fn read_next(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let mut seen_any = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(source) => return Err(InfrastructureError::FileRead { path: self.path.clone(), source }.into()),
            };
            if available.is_empty() {
                break;
            }
            if std::mem::take(&mut self.after_cr) && available[0] == b'\n' {
                self.reader.consume(1);
                continue;
            }

            seen_any = true;
            let (used, terminated) = match memchr::memchr2(b'\n', b'\r', available) {
                Some(end) => {
                    self.buf.extend_from_slice(&available[..end]);
                    self.after_cr = available[end] == b'\r';
                    (end + 1, true)
                }
                None => {
                    self.buf.extend_from_slice(available);
                    (available.len(), false)
                }
            };
            self.reader.consume(used);
            if terminated {
                break;
            }
        }

        if !seen_any {
            return Ok(None);
        }
        self.line += 1;

        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| InfrastructureError::Decode { path: self.path.clone(), line: self.line })?;
        Ok(Some(text.to_owned()))
    }
}

impl Iterator for FileLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_next() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for FileLines {}

impl Drop for FileLines {
    fn drop(&mut self) {
        log::debug!("closed {} after {} lines", self.path.display(), self.line);
    }
}
