use anyhow::Result;
use bikeshare::analyzer::BikeshareAnalyzer;
use bikeshare::config::{init_config, Config};
use bikeshare::display::ReportDisplayManager;
use bikeshare::error::InputClosed;
use bikeshare::filters::{City, DayFilter, FilterParams, MonthFilter};
use bikeshare::loader::DatasetLoader;
use bikeshare::logging::init_logging;
use bikeshare::prompt::Prompter;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip statistics")]
#[command(version)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default locations
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a single non-interactive report for this city
    #[arg(long)]
    city: Option<City>,

    /// Month filter for --city (january..june or all)
    #[arg(long, requires = "city")]
    month: Option<MonthFilter>,

    /// Day filter for --city (monday..sunday or all)
    #[arg(long, requires = "city")]
    day: Option<DayFilter>,

    /// Don't print how long each section took
    #[arg(long)]
    no_timing: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is::<InputClosed>() {
            return;
        }
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_file = Config::locate(cli.config.as_deref());
    let mut config = Config::load_from(config_file.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.paths.data_dir = dir;
    }
    if cli.no_timing {
        config.display.show_timing = false;
    }
    if cli.no_color {
        config.display.color = false;
    }
    config.validate()?;

    let config = init_config(config);
    let _log_guard = init_logging();

    if let Some(path) = &config_file {
        info!(config_file = %path.display(), "Loaded configuration from file");
    }
    config.check_data_dir();

    if !config.display.color {
        colored::control::set_override(false);
    }

    let loader = DatasetLoader::new(&config.paths.data_dir);
    let display = ReportDisplayManager::new(config.display.show_timing);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let mut analyzer = BikeshareAnalyzer::new(loader, display, prompter);

    match cli.city {
        Some(city) => {
            let params = FilterParams::new(city)
                .with_month(cli.month.unwrap_or_default())
                .with_day(cli.day.unwrap_or_default());
            analyzer.run_once(&params)
        }
        None => analyzer.run_interactive(),
    }
}
