mod entry;
mod error;
mod fetch;
mod parser;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "dex_parser", about = "Romanian dictionary lookup via dexonline.ro")]
struct Cli {
    /// Word to look up, e.g. "cățel"
    words: Vec<String>,
    /// Read the entry page from a saved HTML file instead of fetching it
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,
    /// Print the entry as JSON
    #[arg(long)]
    json: bool,
    /// Max definitions shown in the text report
    #[arg(short = 'n', long, default_value = "4")]
    definitions: usize,
    /// Dictionary base URL; the word is appended as a path segment
    #[arg(long, default_value = fetch::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            // --help / --version
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
    };

    let word = match single_word(&cli.words) {
        Ok(word) => word,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, word).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exactly one word per lookup.
fn single_word(words: &[String]) -> Result<&str, &'static str> {
    match words {
        [] => Err("Please provide a word."),
        [word] => Ok(word.as_str()),
        _ => Err("Please provide only one word."),
    }
}

async fn run(cli: &Cli, word: &str) -> anyhow::Result<()> {
    let html = match &cli.html {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => fetch::fetch_entry_page(&cli.base_url, word).await?,
    };

    let entry = parser::extract_entry(word, &html)?;
    info!(
        "{}: {} definitions, {} warnings",
        entry.lemma,
        entry.definitions.len(),
        entry.warnings.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print!("{}", report::Report::new(&entry, cli.definitions));
    }
    Ok(())
}
