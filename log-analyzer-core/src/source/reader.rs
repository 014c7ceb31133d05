use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// True when `path` names a gzip-compressed log (`.gz` suffix).
pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a log for a single forward pass, decompressing `.gz` files on the fly.
pub fn open_log(path: &Path) -> io::Result<LogLines> {
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = if is_gzip(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    tracing::info!(path = %path.display(), gzip = is_gzip(path), "log opened for analysis");

    Ok(LogLines {
        inner,
        buf: Vec::new(),
    })
}

/// Lines of an open log, without their terminators.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the read,
/// so such a line reaches the parser and is counted as malformed. The file
/// handle is released when the iterator is dropped.
pub struct LogLines {
    inner: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl LogLines {
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            inner: Box::new(reader),
            buf: Vec::new(),
        }
    }
}

impl Iterator for LogLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();

        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
