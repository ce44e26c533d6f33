use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::units::UnitSystem;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Unit system of the input file; results are written in internal units (mm)
    #[arg(short, long, value_enum, default_value_t = UnitSystem::Metric)]
    pub units: UnitSystem,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
