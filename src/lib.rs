use std::fs;
use std::path::{Path, PathBuf};

pub mod campus;
pub mod client;
pub mod count;
pub mod error;
pub mod fetch;
pub mod list_campuses;
pub mod query;
pub mod random;
pub mod record;
#[cfg(test)]
mod test_support;

pub use campus::Campus;
pub use client::{Client, Endpoint, Transport};
pub use error::{Error, Result};
pub use query::{Overrides, Payload, SortOrder};
pub use record::{Record, Salaries, HEADER};

/// Directory that CSV output is written into. It is only created once
/// something is written.
#[derive(Debug, Clone)]
pub struct Data {
    dir: PathBuf,
}

impl Data {
    pub fn from<P: AsRef<Path>>(path: P) -> Self {
        Self {
            dir: path.as_ref().to_owned(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn create<P: AsRef<Path>>(&self, dst: P) -> Result<fs::File> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(fs::File::create(self.dir.join(dst))?)
    }
}
