use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{Level, LevelFilter, info, log};
use serde::Serialize;
use sheetpack::io::ext_repr::{ExtInstance, ExtPlacementRow, ExtSolution};
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod dataset;
pub mod output;
pub mod sheet_to_svg;
pub mod svg_util;

/// Reads an instance from either an external instance (`.json`)
/// or a raw component dataset (`.csv`).
/// Datasets are inflated with `margin`, external instances are expected to be inflated already.
pub fn read_instance(path: &Path, margin: f32) -> Result<ExtInstance> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json_instance(path),
        Some("csv") => read_dataset(path, margin),
        _ => bail!(
            "unsupported input file: {}, expected .json or .csv",
            path.display()
        ),
    }
}

pub fn read_json_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn read_dataset(path: &Path, margin: f32) -> Result<ExtInstance> {
    let file =
        File::open(path).with_context(|| format!("could not open dataset: {}", path.display()))?;
    let records = dataset::read_records(BufReader::new(file))
        .with_context(|| format!("could not parse dataset: {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    Ok(dataset::prepare(name, &records, margin))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution json written to file://{}",
        fs::canonicalize(path)?.display()
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

/// One line of the CSV solution: `sheet,id,timestamp,x,y[,cumulative_weight]`
pub fn csv_line(row: &ExtPlacementRow, cumulative_weight: bool) -> String {
    let timestamp = row.timestamp.strftime("%Y-%m-%d %H:%M:%S");
    match cumulative_weight {
        true => format!(
            "{},{},{},{},{},{}",
            row.sheet, row.id, timestamp, row.x, row.y, row.cumulative_weight
        ),
        false => format!("{},{},{},{},{}", row.sheet, row.id, timestamp, row.x, row.y),
    }
}

/// Writes the rows of all batches to a headerless CSV file, batch after batch.
pub fn write_rows_csv(
    solution: &ExtSolution,
    path: &Path,
    cumulative_weight: bool,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open csv file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for row in solution.batches.iter().flat_map(|b| b.rows.iter()) {
        writeln!(writer, "{}", csv_line(row, cumulative_weight))?;
    }
    writer.flush()?;

    info!(
        "[IO] solution csv written to file://{}",
        fs::canonicalize(path)?.display()
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
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Zoned::now());
    Ok(())
}
