// Interviewer routing engine.
// Feature calculators → comprehensive scorer → historical adjustment → ranker.
// Pure, synchronous and stateless per request; handlers are the only async code.

pub mod adjustment;
pub mod features;
pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod weights;
