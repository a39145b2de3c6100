/*
[INPUT]:  CLI arguments, optional YAML settings file, YUNBI_* environment variables
[OUTPUT]: Pretty-printed JSON response of one API call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yunbi_cli::{CliSettings, Command, run};

#[derive(Parser, Debug)]
#[command(name = "yunbi", version, about = "Command-line client for the Yunbi exchange API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let settings = CliSettings::load(args.config_path.as_deref()).context("load settings")?;
    let client = settings.build_client()?;
    info!(
        base_url = %client.base_url(),
        authenticated = client.is_authenticated(),
        "yunbi client ready"
    );

    let value = run(&client, args.command).await?;
    let rendered = serde_json::to_string_pretty(&value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
