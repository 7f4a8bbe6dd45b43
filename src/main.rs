use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use pokeinfo::config::Config;
use pokeinfo::fetch::FetchController;
use pokeinfo::logging::init_tracing;
use pokeinfo::pokemon::PokemonClient;
use pokeinfo::storage::FileStore;
use pokeinfo::ui::pokemon::render_presentable;
use pokeinfo::ui::{run_greeting, run_pokemon, BoundaryView, ErrorBoundary, Greeting};

#[derive(Debug, Parser)]
#[command(name = "pokeinfo", version, about = "Greet trainers and look up pokemon")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Greet by the remembered name; each input line updates it
    Greet {
        /// Set the name and exit
        name: Option<String>,
    },
    /// Look up one pokemon and exit
    Lookup {
        name: String,
    },
    /// Interactive pokemon lookup (":reset" after an error, ":quit" to exit)
    Pokemon,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Greet { name } => {
            let store = FileStore::open(config.storage.resolved_path());
            let mut greeting = Greeting::new(store, &config.greeting);
            match name {
                Some(name) => {
                    greeting.handle_change(&name);
                    println!("{}", greeting.render());
                }
                None => {
                    let stdin = BufReader::new(tokio::io::stdin());
                    run_greeting(&mut greeting, stdin, &mut io::stdout())
                        .await
                        .context("Greeting session failed")?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Lookup { name } => {
            let client = PokemonClient::new(&config.lookup)?;
            let mut controller = FetchController::new(client);
            controller.on_query_change(name.trim());
            while controller.next_completion().await.is_some() {}

            match ErrorBoundary::render(controller.lifecycle(), render_presentable) {
                BoundaryView::Content(text) => {
                    println!("{}", text);
                    Ok(ExitCode::SUCCESS)
                }
                BoundaryView::Fallback { message } => {
                    eprintln!("{}", message);
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Pokemon => {
            let client = PokemonClient::new(&config.lookup)?;
            let mut controller = FetchController::new(client);
            let stdin = BufReader::new(tokio::io::stdin());
            run_pokemon(&mut controller, stdin, &mut io::stdout())
                .await
                .context("Pokemon session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
