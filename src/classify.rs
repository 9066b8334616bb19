//! Word-level script classification.
//!
//! A word is a sample of characters; each character votes for its Script
//! property value and the share of each label is `count / char_count`. The
//! share is a maximum-likelihood estimate of "which script is this word
//! written in", but under the default [`Strictness::Strict`] policy it is
//! informative only: a word gets a label iff every character carries the
//! same one. Digits, punctuation and combining marks are `Common` /
//! `Inherited`, so a word containing them is rejected rather than guessed.

use smallvec::SmallVec;
use std::borrow::Cow;

use crate::unicode::{ScriptTable, UnicodeScripts, compose};

/// How a word with more than one script label is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Every character must share one label, otherwise [`Classification::NoDecision`].
    #[default]
    Strict,
    /// Take the label with the highest share; ties go to the label seen first.
    Lenient,
}

/// A script label with its share of the word's characters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptEstimate<'t> {
    pub label: &'t str,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'t> {
    Label(ScriptEstimate<'t>),
    NoDecision,
}

impl<'t> Classification<'t> {
    #[inline]
    pub fn label(&self) -> Option<&'t str> {
        match self {
            Classification::Label(estimate) => Some(estimate.label),
            Classification::NoDecision => None,
        }
    }

    #[inline]
    pub fn is_decided(&self) -> bool {
        matches!(self, Classification::Label(_))
    }
}

/// Per-label character counts in first-seen order.
///
/// Almost every word has one or two labels, so counts live inline.
#[derive(Debug, Clone, Default)]
pub struct ScriptCounts<'t> {
    counts: SmallVec<[(&'t str, usize); 4]>,
    total: usize,
}

impl<'t> ScriptCounts<'t> {
    pub fn tally<T: ScriptTable + ?Sized>(table: &'t T, word: &str) -> Self {
        let mut tally = Self::default();
        for c in word.chars() {
            tally.push(table.script(c));
        }
        tally
    }

    #[inline]
    fn push(&mut self, label: &'t str) {
        self.total += 1;
        match self.counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label, 1)),
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Labels with their shares, highest share first. Equal shares keep
    /// first-seen order.
    pub fn shares(&self) -> Vec<ScriptEstimate<'t>> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        let mut shares: Vec<_> = self
            .counts
            .iter()
            .map(|&(label, count)| ScriptEstimate {
                label,
                share: count as f64 / total,
            })
            .collect();
        // stable: ties stay in first-seen order
        shares.sort_by(|a, b| b.share.total_cmp(&a.share));
        shares
    }
}

/// Classifies words against a [`ScriptTable`].
#[derive(Debug, Clone, Default)]
pub struct Classifier<T = UnicodeScripts> {
    table: T,
    strictness: Strictness,
    compose: bool,
}

impl Classifier<UnicodeScripts> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: ScriptTable> Classifier<T> {
    pub fn with_table(table: T) -> Self {
        Self {
            table,
            strictness: Strictness::default(),
            compose: false,
        }
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// NFC-compose words before classification.
    pub fn compose(mut self, compose: bool) -> Self {
        self.compose = compose;
        self
    }

    /// Dominant script of `word`, or `NoDecision`.
    ///
    /// The empty word is `NoDecision`: it has no characters to vote.
    pub fn classify(&self, word: &str) -> Classification<'_> {
        let word: Cow<'_, str> = if self.compose {
            compose(word)
        } else {
            Cow::Borrowed(word)
        };
        let counts = ScriptCounts::tally(&self.table, &word);
        if counts.total() == 0 {
            return Classification::NoDecision;
        }
        if self.strictness == Strictness::Strict && counts.distinct() != 1 {
            return Classification::NoDecision;
        }
        match counts.shares().into_iter().next() {
            Some(best) => Classification::Label(best),
            None => Classification::NoDecision,
        }
    }
}
