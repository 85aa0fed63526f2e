/// Conversion of internal solutions into their external representation
pub mod export;
/// External (serializable) representations of instances and solutions
pub mod ext_repr;
/// Conversion of external instances into internal batches
pub mod import;
