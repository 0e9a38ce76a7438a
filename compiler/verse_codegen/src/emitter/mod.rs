//! Output Emitter
//!
//! Sink for printed Java source. Printing itself never fails: a
//! [`StringEmitter`] cannot, and a [`FileEmitter`] holds its first I/O error
//! until [`FileEmitter::finish`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Indentation is written from this run, in chunks when deeper.
const SPACES: &str = "                                ";

/// Destination for printed source.
///
/// Only [`emit`](Self::emit) is required; line breaks and indentation are
/// written through it.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    /// Emit `\n`. Generated files always use Unix line endings.
    fn emit_newline(&mut self) {
        self.emit("\n");
    }

    /// Emit `spaces` columns of indentation.
    fn emit_indent(&mut self, spaces: usize) {
        let mut remaining = spaces;
        while remaining > 0 {
            let chunk = remaining.min(SPACES.len());
            self.emit(&SPACES[..chunk]);
            remaining -= chunk;
        }
    }
}

/// Collects printed source into a `String`.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with room for `capacity` bytes of source.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Streams printed source into a `.java` file.
///
/// The first write error is kept and every later write is skipped.
pub struct FileEmitter {
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl FileEmitter {
    /// Create (or truncate) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
            error: None,
        })
    }

    /// Flush and report the first error encountered, if any.
    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => self.writer.flush(),
        }
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}
