// Lane draft recommender entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout carries JSON)
// 2. Load config, copying defaults on first run
// 3. Load the fact sources
// 4. Run the requested command and print its JSON output

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use lanedraft_app::catalog::HeroCatalog;
use lanedraft_app::command::{Cli, Command};
use lanedraft_app::config;
use lanedraft_app::request;
use lanedraft_core::FactStore;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let config = config::load_config().context("failed to load configuration")?;
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let sources = config.source_paths(&base_dir);
    info!(
        "Config loaded: {} fact source(s) under {}, top_n={}",
        sources.len(),
        config.facts.dir,
        config.recommend.top_n
    );

    let facts = FactStore::load(&sources).context("failed to load hero facts")?;
    info!("Fact store ready with {} heroes", facts.hero_count());

    let output = match cli.command {
        Command::Heroes { lane } => {
            let mut catalog = HeroCatalog::build(&facts);
            if let Some(lane) = lane {
                catalog.retain_lane(lane);
            }
            serde_json::to_string_pretty(&catalog).context("failed to encode hero catalog")?
        }
        Command::Recommend { input } => {
            let text = match &input {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read request {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read request from stdin")?;
                    buf
                }
            };
            request::answer(&facts, config.recommend.top_n, &text)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Initialize tracing to stderr so stdout stays machine-readable.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lanedraft_app=info,lanedraft_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
