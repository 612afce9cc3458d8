//! Tianqi CLI
//!
//! Interactive console for the conversational weather assistant.

#![allow(clippy::print_stdout)]

use std::io::Write;
use std::sync::Arc;

use application::ports::{ForecastPort, InferencePort};
use application::services::WeatherAgentService;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, ErnieInferenceAdapter, WeatherAdapter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tianqi CLI
#[derive(Parser)]
#[command(name = "tianqi-cli")]
#[command(author, version, about = "Conversational weather assistant", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive chat loop (default)
    Chat,

    /// Check connectivity to the inference and weather backends
    Doctor,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether a line ends the chat loop
fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "退出" | "quit" | "exit")
}

fn build_agent(config: &AppConfig) -> anyhow::Result<WeatherAgentService> {
    let inference: Arc<dyn InferencePort> =
        Arc::new(ErnieInferenceAdapter::new(config.inference.clone())?);
    let forecast: Arc<dyn ForecastPort> =
        Arc::new(WeatherAdapter::with_config(config.weather.clone())?);
    Ok(WeatherAgentService::with_cities(
        inference,
        forecast,
        config.city_directory(),
    ))
}

async fn run_chat(config: AppConfig) -> anyhow::Result<()> {
    if !config.inference.has_access_token() {
        warn!("No ERNIE access token configured, model calls will fail");
    }
    if !config.weather.has_api_key() {
        warn!("No weather API key configured, forecast calls will fail");
    }

    let agent = build_agent(&config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("欢迎使用智能天气助手！输入'退出'结束对话。");

    loop {
        println!();
        print!("请输入您的天气查询：");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if is_exit_command(&line) {
            break;
        }

        let reply = agent.process(&line).await;
        println!("\n助手回复： {reply}");
    }

    Ok(())
}

async fn run_doctor(config: AppConfig) -> anyhow::Result<()> {
    let inference = ErnieInferenceAdapter::new(config.inference.clone())?;
    let forecast = WeatherAdapter::with_config(config.weather.clone())?;

    let inference_ok = inference.is_healthy().await;
    if inference_ok {
        println!("✅ Inference ({}): reachable", inference.current_model());
    } else {
        println!("❌ Inference ({}): unreachable", inference.current_model());
    }

    let weather_ok = forecast.is_available().await;
    if weather_ok {
        println!("✅ Weather provider: reachable");
    } else {
        println!("❌ Weather provider: unreachable");
    }

    if !inference_ok || !weather_ok {
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up logging based on verbosity, RUST_LOG takes precedence when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(config).await,
        Commands::Doctor => run_doctor(config).await,
    }
}
