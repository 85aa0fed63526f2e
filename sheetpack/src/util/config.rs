use serde::{Deserialize, Serialize};

use crate::PackError;
use crate::geometry::primitives::Rect;

/// Configuration of the packing engine: the sheet every item is placed on
/// and the clearance around each item.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackConfig {
    /// Width of a sheet
    pub sheet_width: f32,
    /// Height of a sheet
    pub sheet_height: f32,
    /// Clearance added on every side of an item. Item dimensions are inflated by twice this value.
    pub margin: f32,
    /// Maximum total weight of the items placed on a single sheet
    pub weight_capacity: f64,
    /// Maximum number of selections performed on a single sheet before it is sealed
    #[serde(default = "PackConfig::default_selection_limit")]
    pub selection_limit: usize,
}

impl PackConfig {
    pub const DEFAULT_SHEET_SIZE: f32 = 500.0;
    pub const DEFAULT_MARGIN: f32 = 5.0;
    pub const DEFAULT_WEIGHT_CAPACITY: f64 = 200.0;
    pub const DEFAULT_SELECTION_LIMIT: usize = 100_000;

    fn default_selection_limit() -> usize {
        Self::DEFAULT_SELECTION_LIMIT
    }

    pub fn sheet_area(&self) -> f32 {
        self.sheet_width * self.sheet_height
    }

    /// Checks whether the configuration describes a usable sheet.
    pub fn validate(&self) -> Result<(), PackError> {
        let invalid = |msg: String| Err(PackError::InvalidConfig(msg));
        let bbox = Rect::try_new(0.0, 0.0, self.sheet_width, self.sheet_height)
            .map_err(|e| PackError::InvalidConfig(format!("sheet: {e}")))?;
        if bbox.w == 0.0 || bbox.h == 0.0 {
            return invalid(format!(
                "sheet dimensions must be positive, got {}x{}",
                self.sheet_width, self.sheet_height
            ));
        }
        if !(self.weight_capacity.is_finite() && self.weight_capacity > 0.0) {
            return invalid(format!(
                "weight capacity must be positive, got {}",
                self.weight_capacity
            ));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return invalid(format!("margin must be non-negative, got {}", self.margin));
        }
        if self.selection_limit == 0 {
            return invalid("selection limit must be at least 1".into());
        }
        Ok(())
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            sheet_width: Self::DEFAULT_SHEET_SIZE,
            sheet_height: Self::DEFAULT_SHEET_SIZE,
            margin: Self::DEFAULT_MARGIN,
            weight_capacity: Self::DEFAULT_WEIGHT_CAPACITY,
            selection_limit: Self::DEFAULT_SELECTION_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(PackConfig::default().validate().is_ok());
        assert_eq!(PackConfig::default().sheet_area(), 250_000.0);
    }

    #[test]
    fn rejects_degenerate_sheets() {
        let config = PackConfig {
            sheet_width: 0.0,
            ..PackConfig::default()
        };
        assert!(matches!(config.validate(), Err(PackError::InvalidConfig(_))));

        let config = PackConfig {
            sheet_height: -10.0,
            ..PackConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PackError::InvalidConfig(
                "sheet: invalid rectangle extents: 500x-10".into()
            ))
        );

        let config = PackConfig {
            weight_capacity: f64::NAN,
            ..PackConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PackConfig {
            selection_limit: 0,
            ..PackConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn selection_limit_defaults_when_missing() {
        let json = r#"{
            "sheet_width": 300.0,
            "sheet_height": 200.0,
            "margin": 2.5,
            "weight_capacity": 50.0
        }"#;
        let config: PackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.selection_limit, PackConfig::DEFAULT_SELECTION_LIMIT);
        assert_eq!(config.sheet_width, 300.0);
    }
}
