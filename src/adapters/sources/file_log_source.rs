use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::errors::LatchscanError;
use crate::core::models::log_read::LogRead;
use crate::core::traits::log_source::LogSource;

/// Reads a Latchburg log from disk, once, in full.
///
/// Bytes are decoded per line with `from_utf8_lossy`, so a stray invalid
/// byte only garbles its own line instead of ending the scan.
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn open(&self) -> Result<File, LatchscanError> {
        File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LatchscanError::LogNotFound {
                path: self.path.clone(),
            },
            _ => LatchscanError::LogUnreadable {
                path: self.path.clone(),
                source: e,
            },
        })
    }
}

/// Split a byte stream into lines, keeping everything read before an
/// I/O failure.
fn read_all_lines<R: Read>(reader: R) -> (Vec<String>, Option<io::Error>) {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return (lines, None),
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                lines.push(String::from_utf8_lossy(&buf).into_owned());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return (lines, Some(e)),
        }
    }
}

impl LogSource for FileLogSource {
    fn read_lines(&self) -> LogRead {
        let file = match self.open() {
            Ok(f) => f,
            Err(error) => {
                return LogRead::Partial {
                    lines: Vec::new(),
                    error,
                };
            }
        };

        match read_all_lines(file) {
            (lines, None) => LogRead::Complete(lines),
            (lines, Some(source)) => LogRead::Partial {
                lines,
                error: LatchscanError::LogUnreadable {
                    path: self.path.clone(),
                    source,
                },
            },
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
