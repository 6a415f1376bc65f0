// ============================================================
// Layer 4 - Line Reader
// ============================================================
// Streams a UTF-8 text file one line at a time.
//
// The reader itself only remembers the path. Each call to
// read_lines() opens the file again and hands back a fresh
// iterator, so a second pass always starts at line one:
//
//   let reader = LineReader::open("corpus.txt")?;
//   for line in reader.read_lines()? { ... }   // pass 1
//   for line in reader.read_lines()? { ... }   // pass 2, same lines
//
// The open file handle belongs to the Lines iterator. It is
// closed as soon as the pass reaches end of file or hits a read
// error, or earlier if the iterator is dropped.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    iter::FusedIterator,
    path::{Path, PathBuf},
};

use crate::domain::traits::LineSource;
use crate::error::{PipelineError, Result};

/// A restartable source of lines backed by a file on disk.
#[derive(Debug, Clone)]
pub struct LineReader {
    path: PathBuf,
}

impl LineReader {
    /// Check that `path` is a readable file and remember it.
    ///
    /// Fails with `PipelineError::FileAccess` if the file is missing,
    /// unreadable or a directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        open_file(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a new pass over the file from its first line.
    pub fn read_lines(&self) -> Result<Lines> {
        let file = open_file(&self.path)?;
        Ok(Lines {
            inner: Some(BufReader::new(file).lines()),
            path:  self.path.clone(),
            line:  0,
        })
    }
}

impl LineSource for LineReader {
    fn lines(&self) -> Result<Box<dyn Iterator<Item = Result<String>> + '_>> {
        Ok(Box::new(self.read_lines()?))
    }
}

fn open_file(path: &Path) -> Result<File> {
    if path.is_dir() {
        return Err(PipelineError::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        ));
    }
    File::open(path).map_err(|e| PipelineError::file_access(path, e))
}

// ─── Lines ────────────────────────────────────────────────────────────────────
/// One pass over a file. Yields lines without their `\n` / `\r\n`
/// terminator, then `None` forever once the end is reached.
///
/// A read error is yielded once and ends the pass. Either way the
/// file is closed before `next` returns.
#[derive(Debug)]
pub struct Lines {
    /// `None` once the pass is over and the file has been closed
    inner: Option<io::Lines<BufReader<File>>>,
    path:  PathBuf,
    line:  usize,
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;

        match inner.next() {
            Some(Ok(text)) => {
                self.line += 1;
                Some(Ok(text))
            }
            Some(Err(source)) => {
                self.line += 1;
                self.inner = None;
                Some(Err(PipelineError::Read {
                    path: self.path.clone(),
                    line: self.line,
                    source,
                }))
            }
            None => {
                self.inner = None;
                None
            }
        }
    }
}

impl FusedIterator for Lines {}
