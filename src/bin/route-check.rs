use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use trellis::config::load_config;
use trellis::dispatch::{CallContext, Handler, ParameterStore};
use trellis::routing::{decl, RouteTable, Verb};

#[derive(Parser)]
#[command(name = "route-check")]
#[command(about = "Offline inspection for declarative route trees", long_about = None)]
struct Cli {
    /// Path to the route declarations file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the declarations file
    Check,
    /// List declared routes
    Routes,
    /// Resolve a verb and path against the declared routes
    Match { verb: String, path: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    trellis::observability::init_logging(&format!("trellis={}", config.observability.log_level));

    match cli.command {
        Commands::Check => {
            println!("{}: {} route(s) OK", cli.config.display(), config.routes.len());
        }
        Commands::Routes => {
            for route in &config.routes {
                let (marker, template) = decl::compile(route)?;
                println!(
                    "{:<14} {:<8} {:<30} -> {}",
                    format!("{}", marker.rule),
                    format!("{}", marker.tier),
                    template.to_string(),
                    route.handler
                );
            }
        }
        Commands::Match { verb, path } => {
            let verb = Verb::parse(&verb).ok_or_else(|| format!("unknown verb `{}`", verb))?;
            let table = RouteTable::new();
            // Handlers never run here; a no-op placeholder stands in for each.
            let noop: Arc<dyn Handler> = Arc::new(
                |ctx: &mut CallContext, _store: &mut ParameterStore| ctx.respond_ok(),
            );
            decl::register_declared(&table, &config.routes, |_name| Some(noop.clone()))?;

            let segments = trellis::routing::split_path(&path);
            match table.lookup(verb, &segments) {
                Some((entry, captures)) => {
                    let decl = &config.routes[entry.id.0 as usize];
                    let report = serde_json::json!({
                        "route": entry.template.to_string(),
                        "verb": entry.rule.to_string(),
                        "tier": entry.tier.to_string(),
                        "handler": decl.handler,
                        "captures": captures
                            .iter()
                            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                            .collect::<serde_json::Map<String, serde_json::Value>>(),
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                None => {
                    eprintln!("No route matched {} /{}", verb, segments.join("/"));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
