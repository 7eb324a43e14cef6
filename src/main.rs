//! # Portaline Main Entry Point

use anyhow::Result;
use portaline::config::LOG_LEVEL_ENV_VAR;
use portaline::{AppController, CommandLineArgs};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    let default_level = if cmd_args.verbose() { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();

    let mut app = AppController::new(cmd_args)?;
    app.run().await
}
