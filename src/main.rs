//! Route table inspector.
//!
//! Loads a TOML route table, validates it and answers lookups from the
//! command line.
//!
//! ```text
//! path-router --config routes.toml check
//! path-router --config routes.toml routes
//! path-router --config routes.toml match GET /TDD-for-dummies/comments/page-2
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use path_router::config::load_config;
use path_router::observability::logging::init_logging;
use path_router::{Method, Router};

#[derive(Parser)]
#[command(name = "path-router")]
#[command(about = "Validate route tables and resolve paths against them", long_about = None)]
struct Cli {
    /// Route table file.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route table
    Check,
    /// List routes in match order, per method
    Routes,
    /// Resolve a method and path
    Match {
        /// HTTP method (case-insensitive)
        method: Method,
        /// Requested path
        path: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability);

    tracing::debug!(path = ?cli.config, routes = config.routes.len(), "Route table loaded");
    let router = Router::from_config(config.routes)?;

    match cli.command {
        Commands::Check => {
            println!("{}: {} routes OK", cli.config.display(), router.len());
            for method in Method::ALL {
                let count = router.routes(method).count();
                if count > 0 {
                    println!("  {:<8}{}", method, count);
                }
            }
        }
        Commands::Routes => {
            for method in Method::ALL {
                for (route, handler) in router.routes(method) {
                    println!("{:<8}{:<40}{:<24}{}", method, route.schema(), route.name(), handler);
                }
            }
        }
        Commands::Match { method, path } => match router.match_route(method, &path) {
            Some(matched) => println!("{}", serde_json::to_string_pretty(&matched)?),
            None => {
                eprintln!("no match for {} {}", method, path);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
