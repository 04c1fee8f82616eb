use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scanindex::{
    dispatch::factory::create_collaborator,
    models::{IndexingAction, IndexingRequest},
    Config, IndexingRunService,
};

#[derive(Parser)]
#[command(name = "scanindex")]
#[command(about = "Make a PDF searchable if needed and index or deindex a file on a search core")]
struct Args {
    /// Absolute path of the file to index or deindex
    #[arg(allow_hyphen_values = true)]
    absolute_path: String,

    /// Name of the search-engine core (passed through unvalidated)
    #[arg(allow_hyphen_values = true)]
    core: String,

    /// What to do with the file
    #[arg(value_enum)]
    indexing_action: IndexingAction,

    /// Anything after the action is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the relayed indexer output and the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    info!("Using indexer script {}", config.script_path);

    let request = IndexingRequest::new(args.absolute_path, args.core, args.indexing_action);
    let service = IndexingRunService::new(create_collaborator(&config));

    let mut out = std::io::stdout();
    let summary = service.run(request, &mut out).await?;

    info!(
        "Run complete: {} classified as {}, isScanned={}",
        summary.request.file_path, summary.category, summary.is_scanned
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_arguments_is_an_error() {
        assert!(Args::try_parse_from(["scanindex", "/tmp/scan.pdf", "docs"]).is_err());
        assert!(Args::try_parse_from(["scanindex"]).is_err());
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        assert!(Args::try_parse_from(["scanindex", "/tmp/scan.pdf", "docs", "reindex"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = Args::try_parse_from(["scanindex", "/tmp/scan.pdf", "docs", "index", "Font", "--verbose"])
            .expect("Extra arguments should be accepted");

        assert_eq!(args.absolute_path, "/tmp/scan.pdf");
        assert_eq!(args.core, "docs");
        assert_eq!(args.indexing_action, IndexingAction::Index);
    }

    #[test]
    fn test_hyphenated_core_and_path_are_values() {
        let args = Args::try_parse_from(["scanindex", "/tmp/scan.pdf", "-docs", "deindex"])
            .expect("Core starting with '-' should be accepted");
        assert_eq!(args.core, "-docs");
        assert_eq!(args.indexing_action, IndexingAction::Deindex);

        let args = Args::try_parse_from(["scanindex", "-scan.pdf", "docs", "index"])
            .expect("Path starting with '-' should be accepted");
        assert_eq!(args.absolute_path, "-scan.pdf");
    }
}
