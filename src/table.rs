// src/table.rs
// The language table: loaded once at start, handed out record by record,
// written back in full once at the end.

pub mod record;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, Permissions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub use record::{LanguageRecord, ScriptMap};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read language table `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed language table `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write language table `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Word lists never introduce languages; the table is the canonical list.
    #[error("language `{0}` is not in the language table")]
    UnknownLanguage(String),
}

/// Language identifier -> record, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable(IndexMap<String, LanguageRecord>);

impl LanguageTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|source| TableError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Pretty JSON with four-space indentation.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)
    }

    /// Write the whole table to `path`.
    ///
    /// The table goes to a temporary file next to `path` first and is then
    /// renamed over it, so a failed run never leaves a truncated table. The
    /// result keeps the permissions of the file it replaces; a new file gets
    /// `0644` on unix.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let write_err = |source: io::Error| TableError::Write {
            path: path.to_owned(),
            source,
        };
        let parent_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            self.to_writer(&mut writer)
                .map_err(|e| write_err(io::Error::from(e)))?;
            writer.flush().map_err(write_err)?;
        }
        // temp files are created 0600
        if let Some(permissions) = target_permissions(path) {
            temp_file
                .as_file()
                .set_permissions(permissions)
                .map_err(write_err)?;
        }
        temp_file.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    #[inline]
    pub fn get(&self, language: &str) -> Option<&LanguageRecord> {
        self.0.get(language)
    }

    /// Mutable access to an existing record. Missing languages are an error,
    /// never created on the fly.
    pub fn record_mut(&mut self, language: &str) -> Result<&mut LanguageRecord, TableError> {
        self.0
            .get_mut(language)
            .ok_or_else(|| TableError::UnknownLanguage(language.to_owned()))
    }
}

/// Permissions for a table written to `path`: those of the existing file,
/// otherwise the usual `0644` for a fresh one.
fn target_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
