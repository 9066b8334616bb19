use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    classify::{Classifier, Strictness},
    corpus::{CorpusError, WordBatch},
    reconcile::{BatchReport, FailurePolicy, ReconcileError, Reconciler},
    registry::{AliasRegistry, Iso15924},
    table::{LanguageTable, TableError},
    unicode::{ScriptTable, UnicodeScripts},
};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),
    /// The run had failing batches and the output was left alone.
    #[error("{0} word list(s) failed, output not written")]
    FailedBatches(usize),
}

/// Knobs for a table update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateConfig {
    pub strictness: Strictness,
    pub failure_policy: FailurePolicy,
    /// NFC-compose words before classification.
    pub compose: bool,
}

impl UpdateConfig {
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn compose(mut self, compose: bool) -> Self {
        self.compose = compose;
        self
    }
}

/// The result of one word list.
#[derive(Debug)]
pub struct BatchOutcome {
    pub source: PathBuf,
    pub language: Option<String>,
    pub result: Result<BatchReport, UpdateError>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<BatchOutcome>,
}

impl RunSummary {
    pub fn failed(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    pub fn reports(&self) -> impl Iterator<Item = &BatchReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Save `table` to `output` unless a batch failed. With `keep_going` the
    /// table is written regardless, carrying every batch that succeeded.
    pub fn write(
        &self,
        table: &LanguageTable,
        output: &Path,
        keep_going: bool,
    ) -> Result<(), UpdateError> {
        let failed = self.failed().count();
        if failed > 0 && !keep_going {
            return Err(UpdateError::FailedBatches(failed));
        }
        table.save(output)?;
        Ok(())
    }
}

/// Runs word batches through the classifier and reconciler into a table.
pub struct Updater<T = UnicodeScripts, R = Iso15924> {
    classifier: Classifier<T>,
    registry: R,
    policy: FailurePolicy,
}

impl Updater {
    pub fn new(config: UpdateConfig) -> Self {
        let classifier = Classifier::new()
            .strictness(config.strictness)
            .compose(config.compose);
        Self::with_parts(classifier, Iso15924, config.failure_policy)
    }
}

impl<T: ScriptTable, R: AliasRegistry> Updater<T, R> {
    pub fn with_parts(classifier: Classifier<T>, registry: R, policy: FailurePolicy) -> Self {
        Self {
            classifier,
            registry,
            policy,
        }
    }

    /// Merge one batch into its language's record.
    pub fn apply(
        &self,
        table: &mut LanguageTable,
        batch: &WordBatch,
    ) -> Result<BatchReport, UpdateError> {
        let record = table.record_mut(&batch.language)?;
        let report = Reconciler::new(&self.classifier, &self.registry)
            .policy(self.policy)
            .reconcile(record, &batch.words)?;
        info!(
            language = %batch.language,
            source = %batch.source.display(),
            words = report.words,
            accepted = report.accepted,
            undecided = report.undecided,
            inserted = ?report.inserted,
            purged = report.purged.len(),
            failures = report.failures.len(),
            "batch reconciled"
        );
        Ok(report)
    }

    /// Apply every batch. A failing batch never stops the others; the caller
    /// decides what failures mean for the run.
    pub fn run<I>(&self, table: &mut LanguageTable, batches: I) -> RunSummary
    where
        I: IntoIterator<Item = Result<WordBatch, CorpusError>>,
    {
        let mut summary = RunSummary::default();
        for batch in batches {
            let outcome = match batch {
                Ok(batch) => BatchOutcome {
                    result: self.apply(table, &batch),
                    source: batch.source,
                    language: Some(batch.language),
                },
                Err(err) => BatchOutcome {
                    source: corpus_error_path(&err),
                    language: None,
                    result: Err(err.into()),
                },
            };
            if let Err(err) = &outcome.result {
                warn!(source = %outcome.source.display(), error = %err, "batch failed");
            }
            summary.outcomes.push(outcome);
        }
        summary
    }
}

fn corpus_error_path(err: &CorpusError) -> PathBuf {
    match err {
        CorpusError::Io { path, .. } | CorpusError::MalformedFileName(path) => path.clone(),
    }
}
