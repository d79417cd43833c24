pub mod attribute;
pub mod container;
pub mod variant;

pub use attribute::{Attribute, AttributeValue, AttributeValueKind};
pub use container::AttributeContainer;
pub use variant::CandidateVariant;
