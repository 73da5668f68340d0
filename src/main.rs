use std::process::ExitCode;

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use calls::demo_batch;
use config::{Config, LogFormat};
use error::InvokeError;
use wallet::BatchWallet;

mod bindings;
mod calls;
mod chain;
mod config;
mod error;
mod invoke;
mod wallet;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(err) = init_tracing(config.log_format) {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            let code = exit_code(&report);
            tracing::error!(error = ?report, exit_code = code, "batch invocation failed");
            ExitCode::from(code)
        }
    }
}

async fn run(config: Config) -> eyre::Result<()> {
    let signer = config.signer().wrap_err("could not load account key")?;
    let client = wallet::connect_http(signer, config.chain());
    tracing::info!(
        account = %client.address(),
        chain = client.chain().name,
        chain_id = client.chain().id,
        "wallet client ready"
    );

    let calls = demo_batch().wrap_err("invalid call value")?;

    let mut stdout = std::io::stdout().lock();
    invoke::run(&client, config.contract, &calls, &mut stdout)
        .await
        .wrap_err_with(|| format!("delegating to {}", config.contract))?;

    Ok(())
}

// Logs go to stderr; stdout only carries the transaction line.
fn init_tracing(format: LogFormat) -> eyre::Result<()> {
    let subscriber = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "batch7702=info".into()),
    );

    match format {
        LogFormat::Json => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Pretty => subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

fn exit_code(report: &eyre::Report) -> u8 {
    report
        .downcast_ref::<InvokeError>()
        .map_or(1, InvokeError::exit_code)
}
