pub mod data;

use std::borrow::Cow;
use thiserror::Error;

use crate::registry::data::SCRIPT_ALIASES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The character table produced a label the alias registry does not know.
    /// Means the two data sources were built from different Unicode versions.
    #[error("unknown script label `{label}`: not present in the alias registry")]
    UnknownLabel { label: String },
}

/// Script value name -> ISO 15924 alias list.
pub trait AliasRegistry: Send + Sync {
    /// Aliases registered for `label`, looked up with underscores
    /// (`Old_Italic`, never `Old Italic`).
    fn aliases(&self, label: &str) -> Option<&[&'static str]>;

    /// Canonical storage code for `label`: every alias concatenated, then
    /// lowercased (`Arabic` -> `arab`, `Coptic` -> `coptqaac`).
    ///
    /// `label` may use either separator; spaces are turned into underscores
    /// before the lookup.
    fn canonical_code(&self, label: &str) -> Result<String, ScriptError> {
        let key = lookup_key(label);
        let aliases = self
            .aliases(&key)
            .ok_or_else(|| ScriptError::UnknownLabel {
                label: label.to_owned(),
            })?;
        Ok(aliases.concat().to_lowercase())
    }
}

/// ISO 15924 aliases as published in the UCD's `PropertyValueAliases.txt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iso15924;

impl AliasRegistry for Iso15924 {
    #[inline]
    fn aliases(&self, label: &str) -> Option<&[&'static str]> {
        SCRIPT_ALIASES.get(label).copied()
    }
}

/// Registry key form of a label: spaces become underscores.
#[inline]
pub fn lookup_key(label: &str) -> Cow<'_, str> {
    if label.contains(' ') {
        Cow::Owned(label.replace(' ', "_"))
    } else {
        Cow::Borrowed(label)
    }
}

/// Storage form of a label: underscores become spaces.
#[inline]
pub fn display_label(label: &str) -> Cow<'_, str> {
    if label.contains('_') {
        Cow::Owned(label.replace('_', " "))
    } else {
        Cow::Borrowed(label)
    }
}
