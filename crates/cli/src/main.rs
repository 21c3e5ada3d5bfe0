//! dirview CLI - list a directory, show a unit

mod render;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dirview_core::application::{unit, ListingRequest, ListingService, SortOrder};
use dirview_core::application::DEFAULT_LISTING_PATH;
use dirview_core::AppError;
use dirview_infra_fs::FsDirectoryReader;

#[derive(Parser)]
#[command(name = "dirview")]
#[command(about = "List directory contents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of a directory
    List {
        /// Directory to list
        #[arg(env = "DIRVIEW_PATH", default_value = DEFAULT_LISTING_PATH)]
        path: PathBuf,

        /// Include `.` and `..`
        #[arg(short, long)]
        all: bool,

        /// Sort entries by name
        #[arg(short, long)]
        sort: bool,

        /// Output format
        #[arg(short, long, env = "DIRVIEW_FORMAT", value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// Print a unit's name
    Unit {
        /// Unit name (default: Mile)
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
    Table,
}

fn init_logging() {
    // Logs go to stderr so listings on stdout stay pipeable
    let log_format = std::env::var("DIRVIEW_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let ansi = std::io::stderr().is_terminal();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirview=warn"));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_ansi(ansi)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}

/// Reader went away (`| head`); not a failure
fn is_broken_pipe(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
}

async fn run_list(req: ListingRequest, format: OutputFormat) -> dirview_core::Result<()> {
    let service = ListingService::new(Arc::new(FsDirectoryReader::new()));
    let mut out = io::stdout().lock();

    match format {
        OutputFormat::Plain => {
            writeln!(out, "{}", render::LISTING_HEADER)?;
            service
                .stream(&req, |entry| Ok(writeln!(out, "{}", render::plain_line(entry))?))
                .await?;
        }
        OutputFormat::Table => {
            let listing = service.list(&req).await?;
            writeln!(out, "{}", render::table(&listing))?;
        }
        OutputFormat::Json => {
            let listing = service.list(&req).await?;
            let json = render::json(&listing).map_err(io::Error::from)?;
            writeln!(out, "{}", json)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            path,
            all,
            sort,
            format,
        } => {
            let req = ListingRequest {
                path,
                include_dot_entries: all,
                sort: if sort { SortOrder::Name } else { SortOrder::Platform },
            };
            debug!(path = %req.path.display(), ?format, "Listing directory");

            match run_list(req, format).await {
                Ok(()) => {}
                Err(e) if is_broken_pipe(&e) => {
                    debug!("stdout closed, stopping");
                }
                Err(e) if e.is_unreadable_directory() => {
                    debug!(error = %e, "Directory open failed");
                    eprintln!("{}", render::unreadable_message(std::io::stderr().is_terminal()));
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e).context("Failed to list directory"),
            }
        }

        Commands::Unit { name } => match unit::resolve(name.as_deref()) {
            Ok(unit) => println!("{}", unit),
            Err(e) => {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
