use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordloc::output::{self, OutputOptions};
use wordloc::query::{Indexer, QueryService};
use wordloc::repl;
use wordloc::utils::{get_config_path, read_vocabulary, AppConfig, Corpus};

#[derive(Parser)]
#[command(name = "wordloc")]
#[command(about = "Index a word list against a text and look up where each word occurs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list (whitespace-separated words)
    #[arg(short, long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Text to search
    #[arg(short, long, global = true, default_value = "text.txt")]
    text: PathBuf,

    /// Number of hash buckets (overrides the config file)
    #[arg(short, long, global = true)]
    buckets: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Show this many bytes of text around each match
    #[arg(short = 'C', long, global = true, value_name = "BYTES")]
    context: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file to use instead of the one in the app data directory
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer queries interactively (default)
    Repl,
    /// Look up the given words and exit
    Lookup {
        /// Words to look up
        #[arg(required = true, value_name = "WORD")]
        queries: Vec<OsString>,
    },
    /// Print every indexed word with its offsets
    Dump,
    /// Show hash index statistics
    Stats,
    /// Show the effective configuration
    Config {
        /// Write the effective configuration back to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(buckets) = cli.buckets {
        config.bucket_count = buckets;
    }
    if cli.no_color {
        config.color = false;
    }

    let options = OutputOptions {
        json: cli.json,
        context: cli.context,
    };
    let command = cli.command.unwrap_or(Commands::Repl);

    if let Commands::Config { save } = command {
        return handle_config_command(&config, cli.config, save);
    }

    let words = read_vocabulary(&cli.words)?;
    let corpus = Corpus::open(&cli.text)?;
    let service = build_service(&config, &words, &corpus, cli.json);

    let mut stdout = output::stdout(config.color);
    match command {
        Commands::Repl => {
            let stdin = io::stdin();
            let prompt = !cli.json && stdin.is_terminal();
            repl::run(&service, &corpus, stdin.lock(), &mut stdout, &options, prompt)?;
        }
        Commands::Lookup { queries } => {
            for word in &queries {
                let word = word.as_encoded_bytes();
                output::write_result(&mut stdout, &service.occurrences(word), &corpus, &options)?;
            }
        }
        Commands::Dump => {
            output::write_dump(&mut stdout, &service.entries(), &options)?;
        }
        Commands::Stats => {
            output::write_index_stats(&mut stdout, &service.stats(), &options)?;
        }
        // handled before the index is built
        Commands::Config { .. } => {}
    }

    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn build_service(config: &AppConfig, words: &[Vec<u8>], corpus: &Corpus, json: bool) -> QueryService {
    let mut indexer = Indexer::new(config.effective_bucket_count());
    indexer.load(words);

    // progress goes to stderr; keep it out of pipes and JSON runs
    let show_progress = !json && io::stderr().is_terminal();
    indexer.index_with_progress(corpus, show_progress)
}

fn handle_config_command(config: &AppConfig, path: Option<PathBuf>, save: bool) -> Result<()> {
    if save {
        match &path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create config directory {}", parent.display())
                    })?;
                }
                config.save_to(path)?;
            }
            None => config.save()?,
        }
    }

    match path.or_else(get_config_path) {
        Some(path) if save => println!("Saved config to {}", path.display()),
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none)"),
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
