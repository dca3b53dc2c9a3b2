// SPDX-License-Identifier: MIT OR ISC
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use namedraw::{logging_introspector, Draw, Locale, NameStore, SaveMode, StoreConfig};

#[derive(Parser)]
#[command(name = "namedraw")]
#[command(about = "Remove a random name from a file and show who appears most often")]
struct Cli {
    /// File holding one name per line
    #[arg(env = "NAMEDRAW_FILE", default_value = namedraw::DEFAULT_NAMES_FILE)]
    file: PathBuf,
    /// Derive the random draw from this phrase, so it can be repeated
    #[arg(long)]
    seed: Option<String>,
    /// Language of the printed messages
    #[arg(long, value_enum, default_value_t = Locale::English)]
    lang: Locale,
    /// Write to a temporary file and rename it over the names file
    #[arg(long)]
    atomic: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the results, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = NameStore::with_config(StoreConfig {
        path: cli.file,
        save_mode: if cli.atomic { SaveMode::AtomicRename } else { SaveMode::Overwrite },
    });
    let mut rng = match &cli.seed {
        Some(phrase) => namedraw::seeded_rng(phrase),
        None => namedraw::os_rng(),
    };

    let mut draw = Draw::new(store, cli.lang, logging_introspector::new());
    let mut stdout = io::stdout().lock();
    draw.run(&mut rng, &mut stdout).context("name draw failed")?;
    Ok(())
}
