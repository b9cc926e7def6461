use std::{env, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use blackjack_table::{
    config::{TableConfig, DEFAULT_PLAYER_NAME},
    play_session, Deck, TerminalTable,
};

fn load_config() -> Result<TableConfig> {
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("BLACKJACK_CONFIG").ok())
        .map(PathBuf::from);
    let config = match path {
        Some(path) => TableConfig::load(&path).map_err(|err| anyhow!(err))?,
        None => TableConfig::default(),
    };
    config
        .with_seed_override(env::var("BLACKJACK_SEED").ok().as_deref())
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config().context("loading table config")?;
    let mut table = TerminalTable::stdio();

    let player_name = match config.player_name() {
        Some(name) => name.to_string(),
        None => {
            let name = table.ask_text("What is your name?")?;
            if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name
            }
        }
    };

    let deck = Deck::new(config.seed);
    play_session(&mut table, &player_name, deck)?;
    Ok(())
}
