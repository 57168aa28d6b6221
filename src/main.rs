//! WeChat Pay v3 endpoint CLI.
//!
//! Lists the endpoint catalog and resolves entries against a gateway, for
//! operators checking which URL a request kind will hit.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use wechatpay_endpoints::catalog::{lookup, Endpoint, EndpointGroup};
use wechatpay_endpoints::config::{load_config, ClientConfig};
use wechatpay_endpoints::observability::init_logging;
use wechatpay_endpoints::resolver::{resolve, PathParams};
use wechatpay_endpoints::server::{ServerContext, WeChatServer};

#[derive(Parser)]
#[command(name = "wechatpay-endpoints")]
#[command(about = "Inspect and resolve WeChat Pay v3 endpoints", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gateway to target (china, china2, us, hk).
    #[arg(short, long)]
    server: Option<WeChatServer>,

    /// Custom API root; overrides --server and the config file.
    #[arg(short, long)]
    domain: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    List {
        /// Only entries of this group
        #[arg(short, long)]
        group: Option<EndpointGroup>,
    },
    /// List the known gateways
    Servers,
    /// Show one catalog entry
    Show { name: String },
    /// Bind the server domain, leaving path parameters templated
    Resolve { name: String },
    /// Bind the server domain and every path parameter
    Expand {
        name: String,

        /// Path parameter as key=value; repeat for each placeholder
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

#[derive(Serialize)]
struct ServerView {
    name: &'static str,
    domain: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(server) = cli.server {
        config.server.region = server;
        config.server.domain = None;
    }
    if let Some(domain) = cli.domain {
        config.server.domain = Some(domain);
    }

    init_logging(&config.observability)?;
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "Configuration loaded");
    }
    let server = config.server.selection()?;
    tracing::debug!(domain = server.domain(), "Server selected");

    match cli.command {
        Commands::List { group } => {
            let entries: Vec<_> = match group {
                Some(group) => Endpoint::in_group(group).map(|e| e.summary()).collect(),
                None => Endpoint::ALL.iter().map(|e| e.summary()).collect(),
            };
            print_json(&entries)?;
        }
        Commands::Servers => {
            let servers: Vec<_> = WeChatServer::ALL
                .iter()
                .map(|s| ServerView {
                    name: s.as_str(),
                    domain: s.domain(),
                })
                .collect();
            print_json(&servers)?;
        }
        Commands::Show { name } => {
            let endpoint = find(&name)?;
            print_json(&endpoint.summary())?;
        }
        Commands::Resolve { name } => {
            let endpoint = find(&name)?;
            print_json(&resolve(endpoint, &server)?)?;
        }
        Commands::Expand { name, params } => {
            let endpoint = find(&name)?;
            let params: PathParams = params.into_iter().collect();
            let target = resolve(endpoint, &server)?.expand(&params)?;
            print_json(&target)?;
        }
    }

    Ok(())
}

/// Names are matched case-insensitively on the command line.
fn find(name: &str) -> Result<Endpoint, Box<dyn std::error::Error>> {
    Ok(lookup(&name.trim().to_ascii_uppercase().replace('-', "_"))?)
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
