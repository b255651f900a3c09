/// Pure derivation functions: no I/O, no clocks, no shared state.
/// Everything in here maps request-local numeric/text inputs to scores
/// and verdicts.

pub mod advice;
pub mod bands;
pub mod emoji;
pub mod heat_index;
