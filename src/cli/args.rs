use clap::Parser;

/// Command-line flags as typed by the user. Values are kept raw here;
/// `runner` turns them into `SiteParams`.
#[derive(Debug, Parser)]
#[command(
    name = "issue2post",
    version,
    about = "Convert a GitHub issue export into Hugo posts with utterances comments"
)]
pub struct CliArgs {
    /// Repo to load comments from via utteranc.es (owner/repo_name)
    #[arg(short, long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Issue JSON file, as generated by jrdeng/query-issues-action
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Hugo post dir to store *.md files (recreated on every run)
    #[arg(short, long, value_name = "POST_DIR")]
    pub dir: Option<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
