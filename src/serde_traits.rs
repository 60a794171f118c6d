//! Traits for writing and reading the crate's JSON documents to/from strings and files.
//!
//! Anything implementing serde's traits gets them for free, so run configurations and histories
//! share one way of touching the disk.

use crate::FileError;
use std::{fs, path::Path};

/// Types that can be written out as JSON.
pub trait ToJson {
    fn to_json(&self) -> Result<String, FileError>;

    fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FileError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Types that can be read back from JSON.
pub trait FromJson: Sized {
    fn from_json(s: &str) -> Result<Self, FileError>;

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FileError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&s)
    }
}

impl<T: serde::Serialize> ToJson for T {
    fn to_json(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: for<'de> serde::Deserialize<'de>> FromJson for T {
    fn from_json(s: &str) -> Result<Self, FileError> {
        Ok(serde_json::from_str(s)?)
    }
}
