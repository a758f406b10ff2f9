use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use combistudio::catalog::samples;
use combistudio::credits::MemoryCreditLedger;
use combistudio::elaboration::OpenAiElaborator;
use combistudio::secrets::{KeyStore, MemoryKeyStore, Secret, OPENAI_KEY_NAME};
use combistudio::{App, Config, Session};

#[derive(Parser)]
#[command(name = "combistudio", version, about = "Build combinations from categories of options")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SourceArgs {
    /// Category file, or `-` for stdin.
    input: Option<PathBuf>,
    /// Load a built-in sample catalog (1-3) instead of a file.
    #[arg(long, conflicts_with = "input")]
    sample: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a category file and print what was recognized.
    Parse {
        #[command(flatten)]
        source: SourceArgs,
        /// Print the parsed categories as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the combination for a set of selections.
    Combine {
        #[command(flatten)]
        source: SourceArgs,
        /// Selection as `CATEGORY:OPTION[,OPTION]`, repeatable,
        /// zero-based indices (e.g. `--select 0:0,1 --select 1:0`).
        #[arg(long = "select")]
        select: Vec<String>,
    },
    /// Generate the combination and ask the configured API to elaborate
    /// on it. Needs API_URL, MODEL and API_KEY in the environment.
    Elaborate {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long = "select")]
        select: Vec<String>,
        /// User the key and credits are booked under.
        #[arg(long, default_value = "local")]
        user: String,
        /// Credit balance granted for this run.
        #[arg(long, default_value_t = 5)]
        credits: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Parse { source, json } => {
            let session = Session::with_text(read_source(&source)?);
            if json {
                println!("{}", serde_json::to_string_pretty(session.categories())?);
            } else {
                print_categories(&session);
            }
        }
        Command::Combine { source, select } => {
            let mut session = Session::with_text(read_source(&source)?);
            apply_selections(&mut session, &select)?;
            println!("{}", placeholder_or(&session.combination()));
        }
        Command::Elaborate {
            source,
            select,
            user,
            credits,
        } => {
            let mut session = Session::with_text(read_source(&source)?);
            apply_selections(&mut session, &select)?;

            combistudio::config::validate_environment()?;
            let config = Config::from_env()?;
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| anyhow!("API_KEY is not set"))?;

            let key_store = Arc::new(MemoryKeyStore::new());
            key_store
                .set(&user, OPENAI_KEY_NAME, Secret::new(api_key.clone()))
                .await;
            let ledger = Arc::new(MemoryCreditLedger::new());
            ledger.grant(&user, credits).await;
            let elaborator = Arc::new(OpenAiElaborator::new(&config, Secret::new(api_key))?);

            let app = App::new(key_store, ledger, elaborator);
            let result = app.elaborate(&user, &session).await?;

            println!("{}", result.combination);
            println!();
            println!("{}", result.elaboration);
            if result.credits_remaining == 0 {
                eprintln!("You have run out of credits.");
            } else if result.low_balance {
                eprintln!("{} credits remaining.", result.credits_remaining);
            }
        }
    }

    Ok(())
}

fn read_source(source: &SourceArgs) -> Result<String> {
    if let Some(number) = source.sample {
        return samples::sample(number)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no sample {number}, available samples are 1-3"));
    }
    match &source.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => bail!("pass a file, `-` for stdin, or --sample N"),
    }
}

/// Parse `CATEGORY:OPTION[,OPTION]` selection specs and toggle each pair.
fn apply_selections(session: &mut Session, specs: &[String]) -> Result<()> {
    for spec in specs {
        let (category, options) = spec
            .split_once(':')
            .ok_or_else(|| anyhow!("invalid selection {spec:?}, expected CATEGORY:OPTION[,OPTION]"))?;
        let category: usize = category
            .trim()
            .parse()
            .with_context(|| format!("invalid category index in {spec:?}"))?;
        for option in options.split(',') {
            let option: usize = option
                .trim()
                .parse()
                .with_context(|| format!("invalid option index in {spec:?}"))?;
            session.toggle(category, option);
        }
    }
    Ok(())
}

fn print_categories(session: &Session) {
    if session.categories().is_empty() {
        println!("no categories recognized");
        return;
    }
    for (index, category) in session.categories().iter().enumerate() {
        println!("[{index}] {}", category.name);
        for (opt_index, option) in category.options.iter().enumerate() {
            println!("    [{opt_index}] {option}");
        }
    }
}

fn placeholder_or(combination: &str) -> &str {
    if combination.is_empty() {
        "(nothing selected)"
    } else {
        combination
    }
}
