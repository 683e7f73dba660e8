pub mod classifier;
pub mod descriptor;
pub mod display;
pub mod extract;
pub mod facets;

pub use classifier::{classify, classify_all, StreamCard};
pub use descriptor::StreamDescriptor;
pub use facets::{QualityTier, StreamFacets};
