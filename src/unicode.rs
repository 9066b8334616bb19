// src/unicode.rs
// Per-character Unicode data used by the classifier: the Script property and
// optional canonical composition. Everything here is backed by ICU4X compiled
// data, so there is no runtime loading and no I/O.

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use icu_properties::{
    CodePointMapData, CodePointMapDataBorrowed, PropertyNamesLong, PropertyNamesLongBorrowed,
    props::Script,
};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static SCRIPT_DATA: LazyLock<CodePointMapDataBorrowed<'static, Script>> =
    LazyLock::new(CodePointMapData::<Script>::new);
static SCRIPT_NAMES: LazyLock<PropertyNamesLongBorrowed<'static, Script>> =
    LazyLock::new(PropertyNamesLong::<Script>::new);
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Value name of `Script=Zzzz`, returned for code points without a name.
pub const UNKNOWN_SCRIPT: &str = "Unknown";

/// Source of the per-character Script property.
///
/// Labels are Unicode long value names exactly as they appear in
/// `PropertyValueAliases.txt`, i.e. multi-word names use `_` (`Old_Italic`).
pub trait ScriptTable: Send + Sync {
    fn script(&self, c: char) -> &str;
}

/// The Script property from the Unicode Character Database, via ICU4X.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeScripts;

impl ScriptTable for UnicodeScripts {
    #[inline(always)]
    fn script(&self, c: char) -> &str {
        script_name(c)
    }
}

/// Long Script value name of `c`.
#[inline(always)]
pub fn script_name(c: char) -> &'static str {
    let script = SCRIPT_DATA.get(c);
    SCRIPT_NAMES.get(script).unwrap_or(UNKNOWN_SCRIPT)
}

/// NFC-compose `text`. Borrows when the input is already in NFC.
#[inline]
pub fn compose(text: &str) -> Cow<'_, str> {
    ICU4X_NFC.normalize(text)
}
