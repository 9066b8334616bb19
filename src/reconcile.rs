//! Merging classified words into a language's script map.
//!
//! The map must end every batch satisfying one invariant: for each
//! `code -> label` pair, `canonical_code(label) == code`. The consistency
//! sweep enforces it regardless of how a pair got there, including pairs
//! that were already in the table before the run.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    classify::Classifier,
    registry::{AliasRegistry, Iso15924, ScriptError, display_label},
    table::{LanguageRecord, ScriptMap},
    unicode::{ScriptTable, UnicodeScripts},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("word `{word}` classified as unknown script label `{label}`")]
    UnknownScript {
        label: String,
        word: String,
        #[source]
        source: ScriptError,
    },
}

/// What to do when a word's script label has no canonical code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Skip the word, record it in [`BatchReport::failures`], keep going.
    #[default]
    SkipWord,
    /// Stop the batch and restore the script map to its pre-batch state.
    AbortBatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFailure {
    pub word: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeReason {
    /// The registry assigns `expected` to the label, not the stored code.
    CodeMismatch { expected: String },
    /// The registry does not know the label at all.
    UnknownLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgedPair {
    pub code: String,
    pub label: String,
    pub reason: PurgeReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub words: usize,
    pub accepted: usize,
    pub undecided: usize,
    /// Codes added to the map, in insertion order.
    pub inserted: Vec<String>,
    pub purged: Vec<PurgedPair>,
    pub failures: Vec<WordFailure>,
}

/// Remove every pair whose code is not the registry's code for its label.
///
/// Stale pairs are collected in a read-only pass and removed afterwards.
pub fn sweep<R: AliasRegistry + ?Sized>(registry: &R, map: &mut ScriptMap) -> Vec<PurgedPair> {
    let stale: Vec<PurgedPair> = map
        .iter()
        .filter_map(|(code, label)| {
            let reason = match registry.canonical_code(label) {
                Ok(expected) if expected == code => return None,
                Ok(expected) => PurgeReason::CodeMismatch { expected },
                Err(ScriptError::UnknownLabel { .. }) => PurgeReason::UnknownLabel,
            };
            Some(PurgedPair {
                code: code.to_owned(),
                label: label.to_owned(),
                reason,
            })
        })
        .collect();

    for pair in &stale {
        warn!(code = %pair.code, label = %pair.label, reason = ?pair.reason, "purging script pair");
        map.remove(&pair.code);
    }
    stale
}

pub struct Reconciler<'a, T = UnicodeScripts, R = Iso15924> {
    classifier: &'a Classifier<T>,
    registry: &'a R,
    policy: FailurePolicy,
}

impl<'a, T: ScriptTable, R: AliasRegistry> Reconciler<'a, T, R> {
    pub fn new(classifier: &'a Classifier<T>, registry: &'a R) -> Self {
        Self {
            classifier,
            registry,
            policy: FailurePolicy::default(),
        }
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Merge `words` into `record.script`, in order.
    ///
    /// * undecided words are skipped;
    /// * a code already in the map keeps its first label;
    /// * the map is swept when the batch starts and after every accepted word.
    pub fn reconcile<I, S>(
        &self,
        record: &mut LanguageRecord,
        words: I,
    ) -> Result<BatchReport, ReconcileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let snapshot = match self.policy {
            FailurePolicy::AbortBatch => Some(record.script.clone()),
            FailurePolicy::SkipWord => None,
        };
        let mut report = BatchReport::default();

        if let Some(map) = record.script.as_mut() {
            report.purged.extend(sweep(self.registry, map));
        }

        for word in words {
            let word = word.as_ref();
            report.words += 1;

            let Some(label) = self.classifier.classify(word).label() else {
                debug!(word, "no single script, skipped");
                report.undecided += 1;
                continue;
            };

            let map = record.script_map_mut();
            let code = match self.registry.canonical_code(label) {
                Ok(code) => code,
                Err(source) => match self.policy {
                    FailurePolicy::SkipWord => {
                        warn!(word, label, "script label missing from registry, word skipped");
                        report.failures.push(WordFailure {
                            word: word.to_owned(),
                            label: label.to_owned(),
                        });
                        continue;
                    }
                    FailurePolicy::AbortBatch => {
                        if let Some(previous) = snapshot {
                            record.script = previous;
                        }
                        return Err(ReconcileError::UnknownScript {
                            label: label.to_owned(),
                            word: word.to_owned(),
                            source,
                        });
                    }
                },
            };

            report.accepted += 1;
            if map.insert_if_absent(code.clone(), display_label(label).into_owned()) {
                debug!(word, code = %code, label, "new script");
                report.inserted.push(code);
            }
            report.purged.extend(sweep(self.registry, map));
        }

        Ok(report)
    }
}

/// Reconcile with the default [`FailurePolicy`].
pub fn reconcile<T, R, I, S>(
    classifier: &Classifier<T>,
    registry: &R,
    record: &mut LanguageRecord,
    words: I,
) -> Result<BatchReport, ReconcileError>
where
    T: ScriptTable,
    R: AliasRegistry,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Reconciler::new(classifier, registry).reconcile(record, words)
}
