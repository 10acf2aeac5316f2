use nbody2d::{ParametersConfig, Scenario};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Newtonian gravity among point masses in two dimensions")]
struct Args {
    /// Total simulated time in seconds
    total_time: Option<f64>,
    /// Fixed time step in seconds
    dt: Option<f64>,
    /// Body list (plain text, or a .yaml/.yml scenario)
    #[arg(default_value = "data/planets.txt")]
    input_file: PathBuf,
}

fn init_logging() {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // logs go to stderr, stdout is reserved for the report
    let _ = TermLogger::init(LevelFilter::Info, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let overrides = ParametersConfig {
        t_end: args.total_time,
        h0: args.dt,
        degenerate: None,
    };
    let scenario = Scenario::load(&args.input_file, &overrides)
        .with_context(|| format!("failed to load {}", args.input_file.display()))?;

    #[cfg(feature = "vis")]
    {
        if let bevy::app::AppExit::Error(code) = nbody2d::run_2d(scenario) {
            anyhow::bail!("simulation aborted (viewer exit code {})", code);
        }
    }

    #[cfg(not(feature = "vis"))]
    {
        let mut scenario = scenario;
        scenario.run(&mut nbody2d::NullRenderer).context("simulation aborted")?;
        print!("{}", scenario.report());
    }

    Ok(())
}
