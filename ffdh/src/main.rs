use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffdh::config::FFDHConfig;
use ffdh::io::cli::Cli;
use ffdh::io::json_output::JsonOutput;
use ffdh::io::layout_to_svg::layout_to_svg;
use ffdh::{EPOCH, io, units};
use log::{info, warn};
use shelfpack::io::{export, import};
use shelfpack::pack::ShelfPacker;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDHConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FFDHConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no usable name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_json_instance(args.input_file.as_path())?;
    let ext_instance = units::instance_to_internal(ext_instance, args.units);
    let instance = import(&ext_instance)?;

    let result = ShelfPacker::new(instance.clone()).solve();

    if !result.unplaced.is_empty() {
        warn!(
            "[MAIN] {} part(s) could not be placed on any sheet",
            result.unplaced.len()
        );
    }
    // summary in the input's units, waste clamped for display
    let summary = &result.summary;
    info!(
        "[MAIN] {} sheet(s), used: {} {}, waste: {} {} ({:.2}%)",
        summary.sheets_needed,
        (args.units.area_from_internal(summary.total_area_used).round() as i64)
            .separate_with_commas(),
        args.units.area_unit(),
        (args
            .units
            .area_from_internal(f32::max(summary.total_waste_area, 0.0))
            .round() as i64)
            .separate_with_commas(),
        args.units.area_unit(),
        summary.waste_percent
    );

    {
        let output = JsonOutput {
            instance: ext_instance,
            solution: export(&instance, &result, *EPOCH),
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json_output(&output, solution_path.as_path())?;
    }

    for layout in &result.layouts {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{}_{}.svg", input_file_stem, layout.id));
        let svg = layout_to_svg(layout, instance.stock, config.svg_draw_options);
        io::write_svg(&svg, svg_path.as_path())?;
    }

    Ok(())
}
