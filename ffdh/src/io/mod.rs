use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log};
use shelfpack::io::ext_repr::ExtCutInstance;
use svg::Document;

use crate::EPOCH;
use crate::io::json_output::JsonOutput;

pub mod cli;
pub mod json_output;
pub mod layout_to_svg;
pub mod svg_util;

pub fn read_json_instance(path: &Path) -> Result<ExtCutInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn write_json_output(json_output: &JsonOutput, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json_output)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;
    info!(
        "[IO] solution written to {:?}",
        fs::canonicalize(path).context("could not canonicalize path")?
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).context("failed to write svg file")?;
    info!(
        "[IO] svg written to {:?}",
        fs::canonicalize(path).context("could not canonicalize path")?
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    log!(
        Level::Info,
        "time: {}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now())
    );
    Ok(())
}
