use clap::Parser;

use pethotel::AppState;
use pethotel::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};
use pethotel::db::establish_async_connection_pool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    tracing::debug!(
        name = %settings.application.name,
        version = %settings.application.version,
        "Starting"
    );

    let pool = establish_async_connection_pool(&settings.database).await?;
    let state = AppState::new(pool, &settings);

    let output = execute_command(cli.command, &state.services).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
