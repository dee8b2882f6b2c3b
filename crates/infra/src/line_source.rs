// crates/infra/src/line_source.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use word_tally_ports::LineSource;
use word_tally_shared_kernel::{InfraResult, InfrastructureError};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Line source over any buffered reader.
///
/// Bytes are decoded lossily, so a stray non-UTF-8 byte turns into U+FFFD
/// instead of failing the run. Trailing `\n` and `\r\n` are stripped.
pub struct ReaderLineSource<R> {
    reader: R,
    origin: String,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R, origin: impl Into<String>) -> Self {
        Self {
            reader,
            origin: origin.into(),
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// Lines handed out so far.
    pub const fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn next_line(&mut self) -> InfraResult<Option<String>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_no += 1;
                let mut end = self.buf.len();
                if self.buf[..end].ends_with(b"\n") {
                    end -= 1;
                    if self.buf[..end].ends_with(b"\r") {
                        end -= 1;
                    }
                }
                Ok(Some(String::from_utf8_lossy(&self.buf[..end]).into_owned()))
            }
            Err(source) => Err(InfrastructureError::SourceRead {
                origin: self.origin.clone(),
                line: self.line_no + 1,
                source,
            }),
        }
    }
}

/// File-backed source.
pub type FileLineSource = ReaderLineSource<BufReader<File>>;

impl FileLineSource {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::SourceOpen`] when the file cannot be
    /// opened; nothing has been read at that point.
    pub fn open(path: &Path) -> InfraResult<Self> {
        let file = File::open(path).map_err(|source| InfrastructureError::SourceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened line source {}", path.display());
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

/// Standard-input source.
pub type StdinLineSource = ReaderLineSource<io::StdinLock<'static>>;

impl StdinLineSource {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), "<stdin>")
    }
}

/// Open the source named by `path`, treating `-` as standard input.
///
/// # Errors
///
/// Fails only if a file path cannot be opened.
pub fn open_source(path: &Path) -> InfraResult<Box<dyn LineSource>> {
    if path.as_os_str() == STDIN_PATH {
        Ok(Box::new(StdinLineSource::stdin()))
    } else {
        Ok(Box::new(FileLineSource::open(path)?))
    }
}
