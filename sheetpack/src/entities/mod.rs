mod batch;
mod free_space;
mod item;
mod placement;
mod sheet;
mod solution;

#[doc(inline)]
pub use batch::Batch;

#[doc(inline)]
pub use free_space::FreeSpaceTracker;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use solution::BatchSolution;
