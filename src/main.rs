use clap::{CommandFactory, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zipdiff::areas::session::{CompareConfig, Session};
use zipdiff::areas::workspace::InputKind;

const LOG_ENV: &str = "ZIPDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "zipdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare the contents of ZIP archives",
    long_about = "Compares two ZIP archives entry by entry, or every pair of matching \
    archives found in two directories. Entry and archive names are matched after \
    stripping build codes such as commit hashes, so artifacts of two builds pair up.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "First archive or directory of archives")]
    first: PathBuf,
    #[arg(index = 2, help = "Second archive or directory of archives")]
    second: PathBuf,
    #[arg(
        index = 3,
        help = "Report file (two archives) or report directory (two directories)"
    )]
    output: Option<PathBuf>,
    #[arg(short = 'd', long, help = "Print the delta of every differing entry")]
    show_diff: bool,
    #[arg(
        short,
        long,
        default_value = "1",
        help = "Number of archive pairs compared at once in directory mode"
    )]
    jobs: NonZeroUsize,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let kind = match InputKind::detect(&cli.first, &cli.second) {
        Ok(kind) => kind,
        Err(error) => Cli::command()
            .error(clap::error::ErrorKind::ValueValidation, error)
            .exit(),
    };

    let session = Session::new(
        CompareConfig::new(cli.show_diff, cli.jobs),
        Box::new(std::io::stdout()),
    );

    match kind {
        InputKind::Files => session.compare_files(&cli.first, &cli.second, cli.output.as_deref()),
        InputKind::Directories => {
            session
                .compare_directories(&cli.first, &cli.second, cli.output.as_deref())
                .await
        }
    }
}
