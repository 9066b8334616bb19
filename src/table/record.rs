use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SCRIPT_KEY: &str = "script";

/// ISO 15924 code -> script label (`"arab" -> "Arabic"`), insertion ordered.
///
/// Labels are stored in display form, with spaces (`"Old Italic"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptMap(IndexMap<String, String>);

impl ScriptMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Insert `code -> label` unless `code` is already present.
    /// Returns whether the pair was inserted.
    pub fn insert_if_absent(&mut self, code: String, label: String) -> bool {
        match self.0.entry(code) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(label);
                true
            }
        }
    }

    /// Remove `code`, keeping the order of the remaining entries.
    pub fn remove(&mut self, code: &str) -> Option<String> {
        self.0.shift_remove(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(code, label)| (code.as_str(), label.as_str()))
    }
}

impl<C: Into<String>, L: Into<String>> FromIterator<(C, L)> for ScriptMap {
    fn from_iter<I: IntoIterator<Item = (C, L)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(code, label)| (code.into(), label.into()))
                .collect(),
        )
    }
}

/// One language's metadata.
///
/// Only `script` is interpreted; every other field is carried through
/// untouched, in its original order. `script` is written back where it was
/// read, or after the other fields when the record had none.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct LanguageRecord {
    pub fields: Map<String, Value>,
    pub script: Option<ScriptMap>,
    script_position: Option<usize>,
}

impl LanguageRecord {
    /// The script map, created empty on first use.
    #[inline]
    pub fn script_map_mut(&mut self) -> &mut ScriptMap {
        self.script.get_or_insert_with(ScriptMap::new)
    }
}

impl TryFrom<Map<String, Value>> for LanguageRecord {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut record = LanguageRecord::default();
        for (index, (key, value)) in object.into_iter().enumerate() {
            if key == SCRIPT_KEY {
                record.script = serde_json::from_value(value)?;
                record.script_position = Some(index);
            } else {
                record.fields.insert(key, value);
            }
        }
        Ok(record)
    }
}

impl Serialize for LanguageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = self.fields.len();
        let position = self
            .script_position
            .map_or(field_count, |position| position.min(field_count));
        let mut map =
            serializer.serialize_map(Some(field_count + usize::from(self.script.is_some())))?;
        for (index, (key, value)) in self.fields.iter().enumerate() {
            if index == position {
                self.serialize_script(&mut map)?;
            }
            map.serialize_entry(key, value)?;
        }
        if position == field_count {
            self.serialize_script(&mut map)?;
        }
        map.end()
    }
}

impl LanguageRecord {
    fn serialize_script<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match &self.script {
            Some(script) => map.serialize_entry(SCRIPT_KEY, script),
            None => Ok(()),
        }
    }
}
