use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use dbf::config::DBFConfig;
use dbf::io::cli::Cli;
use dbf::io::output::DBFOutput;
use dbf::io::sheet_to_svg::sheet_to_svg;
use dbf::opt::{DBFOptimizer, log_batch_stats};
use dbf::{EPOCH, io};
use log::{info, warn};
use sheetpack::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            DBFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed DBFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file, config.pack_config.margin)?;
    let optimizer = DBFOptimizer::new(import::import(&ext_instance)?, config)?;
    let solutions = optimizer.solve()?;
    let batches = &optimizer.batches;

    let ext_solution = export::export(batches, &solutions, &config.pack_config)?;

    for ext_batch in &ext_solution.batches {
        log_batch_stats(ext_batch.label.as_deref(), &ext_batch.stats);
    }

    {
        let csv_path = args.solution_folder.join(format!("sol_{input_file_stem}.csv"));
        io::write_rows_csv(&ext_solution, &csv_path, config.csv_cumulative_weight)?;
    }

    if config.svg_export {
        for (i, (batch, solution)) in batches.iter().zip(&solutions).enumerate() {
            let batch_name = batch
                .label
                .as_deref()
                .map(|l| l.replace([' ', ':'], "_"))
                .unwrap_or_else(|| i.to_string());
            for sheet in &solution.sheets {
                let svg_path = args.solution_folder.join(format!(
                    "sol_{input_file_stem}_{batch_name}_{}.svg",
                    sheet.index
                ));
                let svg = sheet_to_svg(
                    sheet,
                    batch,
                    config.pack_config.margin,
                    config.svg_draw_options,
                    &batch_name,
                );
                io::write_svg(&svg, Path::new(&svg_path))?;
            }
        }
    }

    {
        let output = DBFOutput {
            instance: ext_instance,
            solution: ext_solution,
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    info!(
        "[MAIN] finished in {:.3}s",
        EPOCH.elapsed().as_secs_f64()
    );

    Ok(())
}
