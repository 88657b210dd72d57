//! MCP Server Entry Point
//!
//! Loads configuration, parses the command line, initializes logging and
//! starts the server with the selected transport.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use naver_encyclopedia_mcp::core::transport::{DEFAULT_HOST, DEFAULT_PORT};
use naver_encyclopedia_mcp::core::{
    Config, McpServer, TransportConfig, TransportMode, TransportService,
};

/// Naver encyclopedia search MCP server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Serving mode.
    #[arg(long, value_enum, env = "MCP_TRANSPORT", default_value_t = TransportMode::Stdin, ignore_case = true)]
    mode: TransportMode,

    /// Bind host for HTTP mode.
    #[arg(long, env = "MCP_SERVER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Bind port for HTTP mode.
    #[arg(long, env = "MCP_SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    let mut config = Config::from_env();
    let cli = Cli::parse();

    init_logging(&config.logging.level, config.logging.with_timestamps);

    config.transport = TransportConfig::for_mode(cli.mode, cli.host, cli.port)?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Transport: {}", config.transport.description());

    if !config.naver.has_credentials() {
        warn!(
            "NAVER_CLIENT_ID / NAVER_CLIENT_SECRET not set; searches will return CONFIG_ERROR"
        );
    }

    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so they never interleave with the STDIO protocol stream.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
