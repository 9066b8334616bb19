pub mod classify;
pub mod corpus;
pub mod reconcile;
pub mod registry;
pub mod table;
pub mod unicode;
pub mod update;

pub use classify::{Classification, Classifier, ScriptEstimate, Strictness};
pub use corpus::{CorpusError, WordBatch};
pub use reconcile::{BatchReport, FailurePolicy, ReconcileError, Reconciler, reconcile};
pub use registry::{AliasRegistry, Iso15924, ScriptError};
pub use table::{LanguageRecord, LanguageTable, ScriptMap, TableError};
pub use unicode::{ScriptTable, UnicodeScripts};
pub use update::{RunSummary, UpdateConfig, UpdateError, Updater};
