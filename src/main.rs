use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gps_mixin::{
    console::Console,
    demo::{Demo, Stage},
    profile::ProfileLoader,
    GpsSettings,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Only {
    Car,
    Drone,
}

impl From<Only> for Stage {
    fn from(value: Only) -> Self {
        match value {
            Only::Car => Stage::Car,
            Only::Drone => Stage::Drone,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "GPS tracking attached to a car and a drone")]
struct Cli {
    /// YAML location profile replacing the default coordinates
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Run a single composite instead of both
    #[arg(long, value_enum)]
    only: Option<Only>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gps_mixin=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = match &cli.profile {
        Some(path) => ProfileLoader::new(".").load(path)?.gps_settings()?,
        None => GpsSettings::default(),
    };

    let mut demo = Demo::new(Console::stdout(), settings);
    if let Some(only) = cli.only {
        demo = demo.only(only.into());
    }
    tracing::info!(stages = ?demo.stages(), "starting demonstration");
    demo.run()?;
    Ok(())
}
