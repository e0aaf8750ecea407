use tracing::info;
use tracing_subscriber::EnvFilter;

use issue2post::core::params::{non_empty_path, parse_repo};
use issue2post::{SiteParams, generate_posts};

use super::args::CliArgs;
use super::errors::AppError;

/// Turn raw flags into run parameters. `undefined` or empty values count as
/// unset.
pub fn resolve_params(args: &CliArgs) -> Result<SiteParams, AppError> {
    let (owner, repo) = args
        .repo
        .as_deref()
        .map(parse_repo)
        .unwrap_or((None, None));

    SiteParams::from_options(
        owner,
        repo,
        non_empty_path(args.file.clone()),
        non_empty_path(args.dir.clone()),
    )
    .map_err(AppError::Config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    info!("Comments repo: {}", params.repo_slug());
    info!("Input file: {:?}", params.input_file);
    info!("Output directory: {:?}", params.output_dir);

    let report = generate_posts(&params)?;
    info!("Conversion complete: {} posts written", report.written);
    Ok(())
}
