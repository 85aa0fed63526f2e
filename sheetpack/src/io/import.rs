use crate::entities::{Batch, Item};
use crate::io::ext_repr::{ExtBatch, ExtInstance, ExtItem};
use anyhow::{Context, Result, ensure};
use float_cmp::approx_eq;
use log::warn;
use rayon::prelude::*;

/// Relative tolerance when checking the derived attributes of an item against its dimensions
const REL_TOLERANCE: f32 = 1e-4;

/// Converts an external item into an internal one, checking that its attributes are consistent.
pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    let ExtItem {
        id,
        width,
        height,
        weight,
        timestamp,
        area,
        density,
    } = ext_item;

    ensure!(
        width.is_finite() && height.is_finite() && *width > 0.0 && *height > 0.0,
        "item {id} has invalid dimensions: {width}x{height}"
    );
    ensure!(
        weight.is_finite() && *weight >= 0.0,
        "item {id} has an invalid weight: {weight}"
    );

    let item = Item::new(id.clone(), *width, *height, *weight, *timestamp);

    ensure!(
        approx_eq!(f32, *area, item.area, epsilon = REL_TOLERANCE * item.area),
        "item {id} has an area of {area}, expected {}",
        item.area
    );
    ensure!(
        approx_eq!(
            f32,
            *density,
            item.density,
            epsilon = REL_TOLERANCE * item.density
        ),
        "item {id} has a density of {density}, expected {}",
        item.density
    );
    if width < height {
        warn!("item {id} has its dimensions in ascending order ({width}x{height})");
    }

    Ok(item)
}

pub fn import_batch(ext_batch: &ExtBatch) -> Result<Batch> {
    let items = ext_batch
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<Item>>>()?;

    Ok(Batch {
        label: ext_batch.label.clone(),
        items,
    })
}

/// Imports all batches of an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Vec<Batch>> {
    ext_instance
        .batches
        .par_iter()
        .enumerate()
        .map(|(i, ext_batch)| {
            import_batch(ext_batch).with_context(|| {
                format!(
                    "could not import batch {i} ({})",
                    ext_batch.label.as_deref().unwrap_or("unlabeled")
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn ext_item(width: f32, height: f32, weight: f64) -> ExtItem {
        ExtItem {
            id: "SN-1".into(),
            width,
            height,
            weight,
            timestamp: date(2024, 5, 2).at(13, 15, 0, 0),
            area: width * height,
            density: (weight / (width * height) as f64) as f32,
        }
    }

    #[test]
    fn imports_consistent_items() {
        let item = import_item(&ext_item(60.0, 60.0, 10.0)).unwrap();
        assert_eq!(item.id, "SN-1");
        assert_eq!(item.area, 3600.0);
        assert_eq!(item.density, 10.0 / 3600.0);
    }

    #[test]
    fn rejects_inconsistent_area() {
        let mut ext = ext_item(60.0, 60.0, 10.0);
        ext.area = 2500.0;
        assert!(import_item(&ext).is_err());
    }

    #[test]
    fn rejects_inconsistent_density() {
        let mut ext = ext_item(60.0, 60.0, 10.0);
        ext.density = 1.0;
        assert!(import_item(&ext).is_err());
    }

    #[test]
    fn rejects_degenerate_items() {
        assert!(import_item(&ext_item(0.0, 60.0, 10.0)).is_err());
        assert!(import_item(&ext_item(60.0, 60.0, -1.0)).is_err());
    }

    #[test]
    fn keeps_batch_order_and_labels() {
        let instance = ExtInstance {
            name: "two-batches".into(),
            batches: vec![
                ExtBatch {
                    label: Some("AM".into()),
                    items: vec![ext_item(60.0, 60.0, 10.0), ext_item(70.0, 60.0, 5.0)],
                },
                ExtBatch {
                    label: None,
                    items: vec![],
                },
            ],
        };
        let batches = import(&instance).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].label.as_deref(), Some("AM"));
        assert_eq!(batches[0].item(1).width, 70.0);
        assert!(batches[1].is_empty());
    }

    #[test]
    fn timestamps_survive_json() {
        let json = r#"{
            "id": "R-17", "width": 60.0, "height": 60.0, "weight": 10.0,
            "timestamp": "2024-05-02T13:15:00", "area": 3600.0, "density": 0.0027777778
        }"#;
        let ext: ExtItem = serde_json::from_str(json).unwrap();
        assert_eq!(ext.timestamp, date(2024, 5, 2).at(13, 15, 0, 0));
        assert!(import_item(&ext).is_ok());
    }
}
