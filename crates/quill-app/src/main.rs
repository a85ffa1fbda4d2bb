use anyhow::Context;
use clap::{Parser, Subcommand};
use quill_core::language::LanguageProcessor;
use quill_lang_english::EnglishProcessor;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod report;

#[cfg(test)]
mod tests;

use self::config::ConfigArgs;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "English spelling and auxiliary-grammar checker", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a sentence for spelling and grammar errors
    Check {
        text: String,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look a single word up in the corpus
    Lookup { word: String },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = config::resolve(&cli.config)?;
    let processor = EnglishProcessor::from_config(&config).context("failed to load corpus")?;

    match cli.command {
        Command::Check { text, json } => check(&processor, &text, json),
        Command::Lookup { word } => {
            let word = processor.normalize(&word);
            println!("{}", report::render_lookup(&word, processor.corpus()));
            Ok(())
        }
    }
}

fn check(processor: &EnglishProcessor, text: &str, json: bool) -> anyhow::Result<()> {
    if processor.normalize(text).is_empty() {
        tracing::warn!("Nothing to check: input is empty");
        return Ok(());
    }

    let analysis = processor.analyze(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", report::render(&analysis));
    }

    Ok(())
}
