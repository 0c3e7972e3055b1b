//! `regtree` command line.
//!
//! Loads a route table file and answers questions about it: which routes
//! exist, which named templates exist, what a request matches, and what URL
//! a named route renders to.

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use regtree::config::load_config;
use regtree::observability::logging::{init_logging, log_config_loaded};
use regtree::Router;

#[derive(Parser)]
#[command(name = "regtree")]
#[command(about = "Inspect and query a route table", long_about = None)]
struct Cli {
    /// Route table file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered patterns per method
    Routes,
    /// List named routes with their templates
    Named,
    /// Match a request against the table
    Match {
        /// HTTP method, e.g. GET
        method: String,
        /// Request path, e.g. /users/7
        path: String,
    },
    /// Render the URL of a named route
    Url {
        name: String,
        /// Positional arguments, one per placeholder
        args: Vec<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability)?;
    tracing::debug!("regtree v0.1.0 starting");
    log_config_loaded(&cli.config, &config);

    let router = Router::from_config(&config)?;

    match cli.command {
        Commands::Routes => {
            println!("{}", serde_json::to_string_pretty(&router.routes())?);
        }
        Commands::Named => {
            println!("{}", serde_json::to_string_pretty(&router.named_routes())?);
        }
        Commands::Match { method, path } => {
            let mut params: Vec<(String, String)> = Vec::new();
            let Some(found) = router.match_route(&method, &path, &mut params) else {
                eprintln!("No route matched {} {}", method, path);
                return Ok(ExitCode::FAILURE);
            };
            let output = json!({
                "handlers": &found.handlers[..],
                "name": found.name,
                "params": params,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Url { name, args } => {
            let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
            println!("{}", router.url_for(&name, &args)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
