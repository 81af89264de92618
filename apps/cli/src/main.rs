mod config;
mod main_lib;

use config::Config;
use main_lib::{build_state, init_tracing, run, Command};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config.log_format);

    let command = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Command>()?,
        None => Command::Dashboard,
    };

    let state = build_state(&config)?;
    tracing::info!(
        "Running {:?} for user {} as of {}",
        command,
        config.user_id,
        config.as_of
    );
    println!("{}", run(&state, &config, command)?);
    Ok(())
}
