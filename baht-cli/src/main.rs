use anyhow::{Context, Result, bail};
use baht_core::BankFormat;
use baht_finance::{ClassifyOptions, classify_statement_with};
use baht_ingest::{detect_format, normalize_text};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod extract;
mod render;
mod state;

use config::{Config, OutputFormat, load_config};
use extract::extract_text;
use render::{ParsedFile, render_csv, render_json, render_table};

#[derive(Parser, Debug)]
#[command(
    name = "baht",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BAHT_BUILD_SHA"), ")"),
    about = "Extract and classify transactions from Thai bank statements"
)]
struct Cli {
    /// Config file (default: ~/.baht/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statements and print classified transactions
    Parse {
        /// Statement files (.txt, or .pdf with the `pdf` feature)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Password for encrypted statements
        #[arg(long)]
        password: Option<String>,

        /// Skip detection and use this layout (kasikorn | krungthai)
        #[arg(long)]
        bank: Option<BankFormat>,

        /// Output format (default from config)
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,

        /// Give up extracting a document after this many seconds (default from config)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Print which bank layout a statement is detected as
    Detect {
        file: PathBuf,

        #[arg(long)]
        password: Option<String>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    run_to_completion(run())?
}

/// Drive `fut` on a fresh runtime. Blocking extraction that outlived its
/// timeout is abandoned at shutdown instead of holding the process open.
fn run_to_completion<F: Future>(fut: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;
    let output = runtime.block_on(fut);
    runtime.shutdown_background();
    Ok(output)
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;
    init_tracing(&cfg);

    match cli.command {
        Command::Parse {
            files,
            password,
            bank,
            output,
            timeout_secs,
        } => {
            let options = ClassifyOptions {
                bank,
                extra_income_keywords: cfg.parse.extra_income_keywords.clone(),
            };
            let timeout = Duration::from_secs(timeout_secs.unwrap_or(cfg.parse.timeout_secs));
            let parsed = parse_files(files, password, options, timeout).await?;

            match output.unwrap_or(cfg.output.format) {
                OutputFormat::Table => {
                    for p in &parsed {
                        println!("{}", render_table(p, cfg.output.summary));
                    }
                }
                OutputFormat::Json => println!("{}", render_json(&parsed)?),
                OutputFormat::Csv => print!("{}", render_csv(&parsed)?),
            }
        }

        Command::Detect { file, password } => {
            let timeout = Duration::from_secs(cfg.parse.timeout_secs);
            let text = extract_text(file.clone(), password, Some(timeout)).await?;
            let bank = detect_format(&normalize_text(&text))?;
            println!("{}: {}", file.display(), bank);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config(cli.config.as_deref())?;
            }
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("{s}");
            }
        },
    }

    Ok(())
}

/// Logs go to stderr so JSON/CSV on stdout stays clean.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Extract and classify every file concurrently; output keeps the input order.
async fn parse_files(
    files: Vec<PathBuf>,
    password: Option<String>,
    options: ClassifyOptions,
    timeout: Duration,
) -> Result<Vec<ParsedFile>> {
    let handles: Vec<_> = files
        .into_iter()
        .map(|file| {
            let password = password.clone();
            let options = options.clone();
            tokio::spawn(async move { parse_file(file, password, &options, timeout).await })
        })
        .collect();

    let mut parsed = Vec::with_capacity(handles.len());
    for handle in handles {
        parsed.push(handle.await.context("parse task failed")??);
    }
    Ok(parsed)
}

async fn parse_file(
    file: PathBuf,
    password: Option<String>,
    options: &ClassifyOptions,
    timeout: Duration,
) -> Result<ParsedFile> {
    check_exists(&file)?;
    let text = extract_text(file.clone(), password, Some(timeout)).await?;
    let result = classify_statement_with(&text, options)
        .with_context(|| format!("classifying {}", file.display()))?;

    if result.is_empty() {
        tracing::warn!(file = %file.display(), "no transactions found");
    }
    Ok(ParsedFile::new(file, result))
}

fn check_exists(file: &Path) -> Result<()> {
    if !file.exists() {
        bail!("statement not found: {}", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "baht", "parse", "a.txt", "b.txt", "--bank", "ktb", "--output", "csv",
        ])
        .unwrap();
        match cli.command {
            Command::Parse {
                files, bank, output, ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(bank, Some(BankFormat::Krungthai));
                assert_eq!(output, Some(OutputFormat::Csv));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_requires_files() {
        assert!(Cli::try_parse_from(["baht", "parse"]).is_err());
        assert!(Cli::try_parse_from(["baht", "parse", "a.txt", "--bank", "scb"]).is_err());
    }

    #[tokio::test]
    async fn test_parse_files_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "Krungthai 01/07/68 ฝากเงิน 1,000.00 1,000.00").unwrap();
        std::fs::write(&second, "KASIKORNBANK 01-07-25 08:53 K PLUS 1,255.41 ชำระเงิน 16.00").unwrap();

        let parsed = parse_files(
            vec![first.clone(), second.clone()],
            None,
            ClassifyOptions::default(),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(parsed[0].file, first);
        assert_eq!(parsed[0].result.header.bank, BankFormat::Krungthai);
        assert_eq!(parsed[1].file, second);
        assert_eq!(parsed[1].result.header.bank, BankFormat::Kasikorn);
    }

    #[tokio::test]
    async fn test_missing_statement_is_error() {
        let err = parse_file(
            PathBuf::from("/nonexistent/statement.txt"),
            None,
            &ClassifyOptions::default(),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("statement not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_timed_out_extraction_does_not_block_exit() {
        let dir = tempfile::tempdir().unwrap();
        // opening a FIFO for reading blocks until a writer shows up
        let fifo = dir.path().join("stuck.txt");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status().unwrap();
        assert!(status.success());

        let started = std::time::Instant::now();
        let result = run_to_completion(extract_text(
            fifo,
            None,
            Some(Duration::from_millis(200)),
        ))
        .unwrap();
        let elapsed = started.elapsed();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("took longer than"), "{err}");
        assert!(elapsed < Duration::from_secs(3), "shutdown waited {elapsed:?}");
    }
}
