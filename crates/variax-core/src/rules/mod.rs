pub mod compatibility;
pub mod disambiguation;

pub use crate::schema::Compatibility;
pub use compatibility::{
    filter_compatible, AttributeMismatch, CandidateRejection, CompatibilityOutcome,
};
pub use disambiguation::{disambiguate, DisambiguationOutcome, DisambiguationStep};
