use std::io::BufRead;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use jiff::civil::{Date, DateTime, Time};
use log::{debug, warn};
use sheetpack::io::ext_repr::{ExtBatch, ExtInstance, ExtItem};

/// A single line of a raw component dataset: `sn,dims,weight,count,timestamp`
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub sn: String,
    /// The two largest dimensions in descending order, margin excluded
    pub dims: (f32, f32),
    pub weight: f64,
    /// Number of identical components this line stands for
    pub count: usize,
    pub timestamp: DateTime,
}

/// Parses a dimension field such as `120x50x40`.
/// Only numeric tokens are kept; the two largest are returned in descending order.
pub fn parse_dims(field: &str) -> Result<(f32, f32)> {
    let dims = field
        .split(['x', 'X'])
        .filter_map(|t| t.trim().parse::<f32>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
        .sorted_by(|a, b| b.total_cmp(a))
        .collect_vec();

    match dims.as_slice() {
        [w, h, ..] => Ok((*w, *h)),
        _ => bail!("expected at least two positive dimensions in {field:?}"),
    }
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and plain dates (midnight).
pub fn parse_timestamp(field: &str) -> Option<DateTime> {
    let field = field.trim();
    field
        .parse::<DateTime>()
        .or_else(|_| field.parse::<Date>().map(|d| d.to_datetime(Time::midnight())))
        .ok()
}

/// Parses a single dataset line. Lines with an unparsable timestamp yield `None`.
pub fn parse_record(line: &str) -> Result<Option<RawRecord>> {
    let Some((sn, dims, weight, count, timestamp)) =
        line.split(',').map(str::trim).collect_tuple()
    else {
        bail!("expected 5 fields (sn,dims,weight,count,timestamp), got: {line:?}");
    };

    let dims = parse_dims(dims)?;
    let weight = weight
        .parse::<f64>()
        .with_context(|| format!("invalid weight for {sn}: {weight:?}"))?;
    let count = count
        .parse::<usize>()
        .with_context(|| format!("invalid count for {sn}: {count:?}"))?;

    let Some(timestamp) = parse_timestamp(timestamp) else {
        warn!("[DATA] dropping {sn}: invalid timestamp {timestamp:?}");
        return Ok(None);
    };

    Ok(Some(RawRecord {
        sn: sn.to_string(),
        dims,
        weight,
        count,
        timestamp,
    }))
}

/// Reads all records of a dataset, skipping blank lines and `#` comments.
pub fn read_records(reader: impl BufRead) -> Result<Vec<RawRecord>> {
    let mut records = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let record = parse_record(&line).with_context(|| format!("line {}", i + 1))?;
        if let Some(record) = record {
            records.push(record);
        }
    }
    Ok(records)
}

/// Turns raw records into an instance ready for packing.
///
/// Records are expanded into one item per component,
/// dimensions are inflated by the margin on every side,
/// and the items are split into one batch per half day (AM: before noon, PM: from noon onwards),
/// ordered by timestamp. Half days without items do not produce a batch.
pub fn prepare(name: &str, records: &[RawRecord], margin: f32) -> ExtInstance {
    let items = records
        .iter()
        .flat_map(|r| std::iter::repeat_n(r, r.count))
        .map(|r| {
            let width = r.dims.0 + 2.0 * margin;
            let height = r.dims.1 + 2.0 * margin;
            let area = width * height;
            ExtItem {
                id: r.sn.clone(),
                width,
                height,
                weight: r.weight,
                timestamp: r.timestamp,
                area,
                density: (r.weight / area as f64) as f32,
            }
        })
        //stable: items with equal timestamps keep their order in the dataset
        .sorted_by_key(|item| item.timestamp)
        .collect_vec();

    let batches = items
        .into_iter()
        .chunk_by(|item| (item.timestamp.date(), item.timestamp.hour() >= 12))
        .into_iter()
        .map(|((date, pm), items)| ExtBatch {
            label: Some(format!("{date} {}", if pm { "PM" } else { "AM" })),
            items: items.collect(),
        })
        .collect_vec();

    debug!(
        "[DATA] prepared {} batches from {} records",
        batches.len(),
        records.len()
    );

    ExtInstance {
        name: name.to_string(),
        batches,
    }
}
