use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use jobtrack_client::config::ClientConfig;
use jobtrack_client::view::{filter_chips, FormView, ListView, EMPTY_LIST_MESSAGE};
use jobtrack_client::{Draft, HttpJobsApi, JobStore, Outcome, StatusFilter, SyncState, TerminalPrompt};
use shared_types::JobStatus;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track job applications against a jobs service", long_about = None)]
struct Args {
    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Jobs service base URL, overrides the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, global = true)]
    log_file_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show tracked jobs
    List {
        /// ALL or one of APPLIED, INTERVIEW, OFFER, REJECTED, ACCEPTED
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
    },
    /// Add a new job application
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "APPLIED")]
        status: JobStatus,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Move a job to another status
    SetStatus { id: i64, status: JobStatus },
    /// Delete a job
    Delete {
        id: i64,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let (mut config, config_path) = match &args.config {
        Some(path) => (ClientConfig::load_from(path)?, path.clone()),
        None => ClientConfig::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }

    init_tracing(&config.logging.level, args.log_file_path.as_deref());
    tracing::debug!("Using config at {:?}", config_path);
    tracing::debug!("Jobs service at {}", config.server.base_url);

    let assume_yes = matches!(args.command, Command::Delete { yes: true, .. });
    let store = JobStore::new(
        Arc::new(HttpJobsApi::new(config.server.base_url.clone())),
        Arc::new(TerminalPrompt::new(assume_yes)),
    );

    store
        .spawn_initial_refresh()
        .await
        .context("Initial job load did not finish")?;

    let (outcome, filter) = match args.command {
        Command::List { filter } => {
            let state = store.snapshot().await;
            let outcome = if state.list_error.is_some() {
                Outcome::Failed
            } else {
                Outcome::Completed
            };
            (outcome, filter)
        }
        Command::Add {
            company,
            title,
            status,
            notes,
        } => {
            let mut draft = Draft {
                company,
                title,
                status,
                notes,
            };
            let outcome = store.create(&mut draft).await;
            if let Some(error) = FormView::new(&store.snapshot().await).error {
                eprintln!("Error: {}", error);
            }
            (outcome, StatusFilter::All)
        }
        Command::SetStatus { id, status } => {
            let outcome = store.update_status(id, status).await;
            if outcome == Outcome::Skipped {
                eprintln!("Job {} not found", id);
            }
            (outcome, StatusFilter::All)
        }
        Command::Delete { id, .. } => (store.remove(id).await, StatusFilter::All),
    };

    print_jobs(&store.snapshot().await, filter);

    Ok(match outcome {
        Outcome::Failed => ExitCode::FAILURE,
        Outcome::Completed | Outcome::Skipped => ExitCode::SUCCESS,
    })
}

fn print_jobs(state: &SyncState, filter: StatusFilter) {
    let chips: Vec<String> = filter_chips(state, filter)
        .into_iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label)
            } else {
                chip.label
            }
        })
        .collect();
    println!("Filter: {}", chips.join("  "));

    match ListView::new(state, filter) {
        ListView::Loading => println!("Loading jobs..."),
        ListView::Error(error) => println!("Error: {}", error),
        ListView::Empty => println!("{}", EMPTY_LIST_MESSAGE),
        ListView::Jobs(jobs) => {
            for job in jobs {
                println!("{:>5}  {:<10}  {} @ {}", job.id, job.status, job.title, job.company);
                if !job.notes.is_empty() {
                    println!("       {}", job.notes);
                }
            }
        }
    }
}

fn init_tracing(level: &str, log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the job list, logs go to stderr
    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("jobtrack.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
