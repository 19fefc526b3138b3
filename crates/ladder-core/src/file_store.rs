//! YAML-file-backed sheet store: one file per worksheet under a data
//! directory. The dev/test backend and the CLI default.

use crate::error::Result;
use crate::io;
use crate::record::ProgressRecord;
use crate::store::SheetStore;
use std::path::PathBuf;

pub struct FileSheetStore {
    dir: PathBuf,
}

impl FileSheetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn sheet_path(&self, worksheet: &str) -> PathBuf {
        self.dir.join(format!("{worksheet}.yaml"))
    }
}

impl SheetStore for FileSheetStore {
    fn read(&self, worksheet: &str) -> Result<Vec<ProgressRecord>> {
        let path = self.sheet_path(worksheet);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn write(&self, worksheet: &str, rows: &[ProgressRecord]) -> Result<()> {
        let content = serde_yaml::to_string(rows)?;
        io::atomic_write(&self.sheet_path(worksheet), content.as_bytes())
    }
}
