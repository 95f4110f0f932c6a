mod cli_args;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{event, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use star_trade_router::domain::{
    profitability_indicator, summarize_routes, FuelCatalog, OptimizationRequest, OptimizerConfig,
    PricedRoute, RouteOptimizer,
};
use star_trade_router::infra::cache::{default_archive_path, ARCHIVE_TTL};
use star_trade_router::infra::{load_archive, load_scenario, save_archive, to_records, RouteArchive};
use star_trade_router::util::format_credits;
use star_trade_router::util::persistence::{load_config, save_config};
use star_trade_router::util::version::{version_label, APP_NAME};

use crate::cli_args::{Cli, Commands};

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Optimize {
            scenario,
            source,
            destination,
            fuel,
            max_waypoints,
            capacity,
            limit,
            json,
            output,
            no_archive,
        } => {
            let config = OptimizerConfig {
                capacity: capacity.unwrap_or(config.capacity),
                candidate_limit: limit.or(config.candidate_limit),
                ..config
            };
            let max_waypoints = max_waypoints.unwrap_or(config.max_waypoints);
            let scenario = load_scenario(&scenario)?;

            let mut catalog = scenario.fuel_catalog();
            if let Some(name) = fuel.as_deref() {
                catalog.select(name)?;
            }
            let fuel = catalog.selected().clone();

            let source = scenario.resolve(&source)?;
            let destination = scenario.resolve(&destination)?;

            let request = OptimizationRequest {
                source: &source.id,
                destination: &destination.id,
                universe: &scenario.systems,
                fuel: &fuel,
                max_waypoints,
            };
            let routes = RouteOptimizer::new(config).optimize(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&to_records(&routes))?);
            } else {
                print_routes(&routes);
            }

            if !no_archive {
                let archive = RouteArchive::new(
                    source.name.clone(),
                    destination.name.clone(),
                    fuel,
                    to_records(&routes),
                );
                let path = archive_path(output)?;
                save_archive(&path, &archive)
                    .with_context(|| format!("archiving routes to {}", path.display()))?;
            }
            Ok(())
        }
        Commands::Systems { scenario } => {
            let scenario = load_scenario(&scenario)?;
            println!(
                "{:<24} {:>10} {:>14} {:>9} {:>5}",
                "SYSTEM", "RESOURCES", "TRADE VALUE", "GROWTH", "HUB"
            );
            for system in &scenario.systems {
                println!(
                    "{:<24} {:>10} {:>14} {:>8.1}% {:>5}",
                    system.name,
                    system.resources.len(),
                    format_credits(system.trade_value()),
                    system.economic_growth,
                    if system.is_trade_hub { "yes" } else { "" }
                );
            }
            Ok(())
        }
        Commands::Fuels { scenario } => {
            let catalog = match scenario {
                Some(path) => load_scenario(&path)?.fuel_catalog(),
                None => FuelCatalog::default(),
            };
            for fuel in catalog.fuels() {
                println!(
                    "{:<16} cost {:>8.2}  efficiency {:>5.1}%",
                    fuel.name, fuel.cost, fuel.efficiency
                );
            }
            Ok(())
        }
        Commands::Last { archive } => {
            let path = archive_path(archive)?;
            let Some(archive) = load_archive(&path) else {
                bail!("no archived routes at {}", path.display());
            };
            let stale = if archive.is_expired(ARCHIVE_TTL) { ", stale" } else { "" };
            println!(
                "{} → {} with {} ({} ago{stale})",
                archive.source_name,
                archive.destination_name,
                archive.fuel.name,
                archive.age_string()
            );
            let stats = summarize_routes(&[], &archive.routes);
            println!(
                "{} routes, {} profitable, average profit {}",
                stats.total_routes,
                stats.profitable_routes,
                format_credits(stats.average_profit)
            );
            if let Some(best) = archive.optimal() {
                println!("optimal: {} ({})", best.name, format_credits(best.profit));
            }
            Ok(())
        }
        Commands::Config { write } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if write {
                let path = save_config(args.config.as_deref(), &config)?;
                event!(Level::INFO, "Wrote configuration to {}", path.display());
            }
            Ok(())
        }
    }
}

fn archive_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_archive_path().context("no data directory for the route archive"),
    }
}

fn print_routes(routes: &[PricedRoute]) {
    println!("{APP_NAME} {}", version_label());
    if routes.is_empty() {
        println!("No routes found.");
        return;
    }
    println!(
        "{:<2} {:<40} {:<10} {:>10} {:>12} {:>12} {:>12} {:>6}",
        "", "ROUTE", "TYPE", "DISTANCE", "FUEL", "CARGO", "PROFIT", ""
    );
    for route in routes {
        let indicator = profitability_indicator(route);
        println!(
            "{:<2} {:<40} {:<10} {:>10.2} {:>12} {:>12} {:>12} {:>6}",
            if route.is_optimal { "*" } else { "" },
            route.name,
            route.route_type,
            route.total_distance,
            format_credits(route.total_fuel_cost),
            format_credits(route.total_trade_value),
            format_credits(route.profit),
            indicator.status.label()
        );
    }
    if let Some(best) = routes.first() {
        let cargo = best
            .cargo
            .iter()
            .map(|c| format!("{} x{} @ {:.2}", c.resource_name, c.amount, c.price))
            .collect::<Vec<_>>()
            .join(", ");
        let cargo = if cargo.is_empty() { "none" } else { cargo.as_str() };
        println!("cargo on optimal route: {cargo}");
    }
}
