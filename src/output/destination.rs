use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where rendered output goes. A file is created when the destination is built and closed on drop.
pub enum Destination {
    Stdout,
    File { path: PathBuf, writer: BufWriter<File> },
}

impl Destination {
    /// Creates or truncates `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Destination::File { path: path.to_path_buf(), writer: BufWriter::new(file) })
    }

    pub fn describe(&self) -> String {
        match self {
            Destination::Stdout => "standard output".to_string(),
            Destination::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `text` in full and flushes.
    pub fn write_all(&mut self, text: &str) -> Result<()> {
        match self {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Destination::File { writer, .. } => {
                writer.write_all(text.as_bytes())?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => f.write_str("Stdout"),
            Destination::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
        }
    }
}
