use restaurant_management_rs::{
    app::{self, App},
    types::{Config, ToContext},
};
use std::{process::ExitCode, sync::Arc};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let ctx = match config.to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to initialise the application context: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
