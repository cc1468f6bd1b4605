//! Constrained unique sampling.
//!
//! - `ClaimedSet`: names already committed to an output
//! - `QuotaSampler`: ordered/random drains and `fill_to` over prioritized pools
//! - `CandidatePool`, `Quota`, `FillReport`: inputs and outcomes

pub mod claimed;
pub mod quota;

pub use claimed::ClaimedSet;
pub use quota::{CandidatePool, DrainMode, FillReport, Quota, QuotaSampler};
