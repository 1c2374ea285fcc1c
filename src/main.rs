// src/main.rs
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::error;
use std::process::ExitCode;

use pacifices_cloud::cli::{Cli, Command};
use pacifices_cloud::handlers::servers::{dispatch, render};
use pacifices_cloud::{ClientError, Config, ServerClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        // Nothing to do without an action
        if let Err(e) = Cli::command().print_help() {
            error!("Failed to print help: {}", e);
        }
        return ExitCode::SUCCESS;
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), ClientError> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    let client = ServerClient::new(config);

    let result = dispatch(&client, command).await?;
    println!("{}", render(&result)?);
    Ok(())
}
