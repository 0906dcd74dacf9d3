//! Dataportal MCP server entry point.

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use dataportal_mcp::config::{Config, ConfigOverrides, Service};
use dataportal_mcp::protocol::ProtocolHandler;
use dataportal_mcp::resources::ResourceRegistry;
use dataportal_mcp::tools::ToolRegistry;
use dataportal_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "dataportal-mcp",
    about = "MCP server for Swedish open data: Riksdagen documents and Skatteverket property datasets",
    version
)]
struct Cli {
    #[command(flatten)]
    upstream: UpstreamArgs,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct UpstreamArgs {
    /// Tool group to mount.
    #[arg(long, value_enum, global = true)]
    service: Option<Service>,

    /// Riksdagen origin serving /dokumentlista/ and /dokument/.
    /// Also reads DATAPORTAL_RIKSDAGEN_URL.
    #[arg(long, global = true)]
    riksdagen_url: Option<String>,

    /// Skatteverket typkod rowstore dataset URL.
    /// Also reads DATAPORTAL_TYPKOD_URL.
    #[arg(long, global = true)]
    typkod_url: Option<String>,

    /// Skatteverket fastighetsskatt rowstore dataset URL.
    /// Also reads DATAPORTAL_FASTIGHETSSKATT_URL.
    #[arg(long, global = true)]
    fastighetsskatt_url: Option<String>,

    /// Per-request timeout in seconds. Also reads DATAPORTAL_TIMEOUT_SECS.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

impl UpstreamArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            riksdagen_url: self.riksdagen_url.clone(),
            typkod_url: self.typkod_url.clone(),
            fastighetsskatt_url: self.fastighetsskatt_url.clone(),
            timeout_secs: self.timeout_secs,
            service: self.service,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "sse")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = "127.0.0.1:3100")]
        addr: String,
    },

    /// Print server capabilities, tools and resolved configuration as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   dataportal-mcp completions bash > ~/.local/share/bash-completion/completions/dataportal-mcp
    ///   dataportal-mcp completions zsh > ~/.zfunc/_dataportal-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(&cli.upstream.overrides())?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!("Dataportal MCP server (service: {})", config.service.as_str());
            let handler = ProtocolHandler::from_config(&config);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        #[cfg(feature = "sse")]
        Commands::ServeHttp { addr } => {
            use dataportal_mcp::transport::SseTransport;

            tracing::info!("Dataportal MCP server (service: {})", config.service.as_str());
            let handler = ProtocolHandler::from_config(&config);
            let transport = SseTransport::new(handler);
            transport.run(&addr).await?;
        }

        Commands::Info => {
            let capabilities = dataportal_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools(config.service);
            let resources = ResourceRegistry::list_resources(config.service);
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "service": config.service.as_str(),
                "endpoints": {
                    "riksdagen": config.endpoints.riksdagen,
                    "typkod": config.endpoints.typkod,
                    "fastighetsskatt": config.endpoints.fastighetsskatt,
                },
                "timeout_secs": config.timeout.as_secs(),
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
                "resources": resources.iter().map(|r| &r.uri).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "dataportal-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            tokio::task::spawn_blocking(move || dataportal_mcp::repl::run(config)).await??;
        }
    }

    Ok(())
}
