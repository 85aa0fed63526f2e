/// The greedy engine driving sheet creation and placement
pub mod engine;
/// The density heuristic deciding which item to place next
pub mod selector;

#[doc(inline)]
pub use engine::PackingEngine;
#[doc(inline)]
pub use selector::Candidate;
