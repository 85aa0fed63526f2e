//!
//! A packer for electronic components onto weight-limited rectangular sheets.
//!
//! Items are placed one sheet at a time: a MaxRects free-space tracker proposes a position
//! for every candidate (Best-Area-Fit) and a density heuristic decides which candidate to place,
//! so that the remaining weight budget and the remaining free area run out together.
//!

/// Entities to model batches, sheets and their placements
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Importing batches into and exporting solutions out of this library
pub mod io;

/// Selection heuristic and packing engine
pub mod opt;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

pub use error::PackError;
