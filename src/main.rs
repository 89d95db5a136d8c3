#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{logging, Portfolio};

/// Personal portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Print the content tables as JSON and exit
    #[arg(long)]
    print_content: bool,
}

fn main() {
    logging::init();

    let args = Args::parse();
    let portfolio = Portfolio::authored();

    for violation in portfolio.violations() {
        tracing::warn!("Content check failed: {}", violation);
    }

    if args.print_content {
        match portfolio.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to export content: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    tracing::info!(
        "Starting portfolio ({} groups, {} projects)",
        portfolio.tech_stack.len(),
        portfolio.projects.len()
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(portfolio.profile.name)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
