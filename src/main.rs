#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use propertyhub_core::Catalog;

/// Catalog resolved at startup, before the UI launches
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get the listing catalog (override file or the built-in sample)
pub fn get_catalog() -> Catalog {
    CATALOG.get().cloned().unwrap_or_else(|| Catalog {
        properties: Vec::new(),
        filter_options: Vec::new(),
    })
}

/// PropertyHub - property listing browser
#[derive(Parser, Debug)]
#[command(name = "propertyhub-desktop")]
#[command(about = "PropertyHub - browse and filter sample property listings")]
struct Args {
    /// Listings catalog JSON file (defaults to the built-in sample)
    #[arg(short, long)]
    listings: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Resolve the catalog: an override file falls back to the sample with a
    // logged error; a broken built-in seed is fatal.
    let catalog = match args.listings {
        Some(ref path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load listings file, using built-in sample"
                );
                load_sample()
            }
        },
        None => load_sample(),
    };

    tracing::info!(
        properties = catalog.len(),
        filters = catalog.filter_options.len(),
        "Starting PropertyHub"
    );

    let _ = CATALOG.set(catalog);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("PropertyHub")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

fn load_sample() -> Catalog {
    match Catalog::sample() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Built-in sample catalog is invalid");
            std::process::exit(1);
        }
    }
}
