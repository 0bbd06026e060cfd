use payout_server::{
    app::{self, App},
    types::Config,
};
use std::process::ExitCode;

async fn run() -> Result<(), app::Error> {
    let config = Config::from_env()?;
    App::new(config)?.serve().await
}

#[tokio::main]
async fn main() -> ExitCode {
    app::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
