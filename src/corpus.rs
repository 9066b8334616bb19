//! Word-list discovery and reading.
//!
//! A word-list directory holds one or more `<lang>_<anything>.tsv` files per
//! language. Each line's first tab-separated field is a word; the remaining
//! fields (pronunciations etc.) are ignored.

use memchr::memchr;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list `{0}` has no language prefix (expected `<lang>_<name>.tsv`)")]
    MalformedFileName(PathBuf),
}

/// All words of one word-list file, tagged with their language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBatch {
    pub language: String,
    pub source: PathBuf,
    pub words: Vec<String>,
}

impl WordBatch {
    pub fn new(language: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            language: language.into(),
            source: PathBuf::new(),
            words,
        }
    }

    pub fn read(path: &Path) -> Result<Self, CorpusError> {
        let language = language_of(path)?.to_owned();
        let io_err = |source| CorpusError::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let words = read_words(BufReader::new(file)).map_err(io_err)?;
        Ok(Self {
            language,
            source: path.to_owned(),
            words,
        })
    }
}

/// `.tsv` files directly inside `dir`, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let io_err = |source| CorpusError::Io {
        path: dir.to_owned(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "tsv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Every word list in `dir`, read lazily one file at a time.
pub fn batches(
    dir: &Path,
) -> Result<impl Iterator<Item = Result<WordBatch, CorpusError>>, CorpusError> {
    Ok(discover(dir)?.into_iter().map(|path| WordBatch::read(&path)))
}

/// Language identifier of a word list: the file name up to the first `_`.
///
/// `aze_latn_phonemic.tsv` -> `aze`.
pub fn language_of(path: &Path) -> Result<&str, CorpusError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split_once('_'))
        .map(|(language, _)| language)
        .filter(|language| !language.is_empty())
        .ok_or_else(|| CorpusError::MalformedFileName(path.to_owned()))
}

/// First tab-separated field of a line.
#[inline]
pub fn first_field(line: &str) -> &str {
    match memchr(b'\t', line.as_bytes()) {
        Some(tab) => &line[..tab],
        None => line,
    }
}

/// Words of a TSV stream, one per line. Empty words are dropped.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = first_field(&line);
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}
