use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use scriptmap::{
    FailurePolicy, LanguageTable, Strictness, UpdateConfig, UpdateError, Updater, corpus,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Infer each language's scripts from its word lists", long_about = None)]
struct Args {
    /// Where to write the updated language table.
    output: PathBuf,

    /// Base language table (JSON object keyed by language code).
    #[arg(long, env = "SCRIPTMAP_LANGUAGES", value_name = "PATH")]
    languages: PathBuf,

    /// Directory of `<lang>_<name>.tsv` word lists.
    #[arg(long, env = "SCRIPTMAP_TSV_DIR", value_name = "DIR")]
    tsv_dir: PathBuf,

    /// Accept the majority script of mixed-script words instead of rejecting them.
    #[arg(long)]
    lenient: bool,

    /// NFC-compose words before classification.
    #[arg(long)]
    nfc: bool,

    /// Abort a word list on the first script label missing from the registry.
    #[arg(long)]
    abort_batch: bool,

    /// Write the table even when some word lists failed.
    #[arg(long)]
    keep_going: bool,

    /// Log every skipped word.
    #[arg(long, short)]
    verbose: bool,
}

fn install_subscriber(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    install_subscriber(args.verbose);

    let config = UpdateConfig::default()
        .strictness(if args.lenient {
            Strictness::Lenient
        } else {
            Strictness::Strict
        })
        .failure_policy(if args.abort_batch {
            FailurePolicy::AbortBatch
        } else {
            FailurePolicy::SkipWord
        })
        .compose(args.nfc);

    let mut table = match LanguageTable::load(&args.languages) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "cannot load language table");
            return ExitCode::FAILURE;
        }
    };

    let batches = match corpus::batches(&args.tsv_dir) {
        Ok(batches) => batches,
        Err(err) => {
            error!(error = %err, "cannot list word lists");
            return ExitCode::FAILURE;
        }
    };

    let summary = Updater::new(config).run(&mut table, batches);
    let failed = summary.failed().count();
    match summary.write(&table, &args.output, args.keep_going) {
        Ok(()) => {}
        Err(UpdateError::FailedBatches(failed)) => {
            error!(failed, "word lists failed, output not written (use --keep-going to write anyway)");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            error!(error = %err, "cannot write language table");
            return ExitCode::FAILURE;
        }
    }
    info!(
        output = %args.output.display(),
        batches = summary.outcomes.len(),
        failed,
        "language table written"
    );
    ExitCode::SUCCESS
}
