pub mod content_repository;

pub use content_repository::{
    ContentRepository, ContentSnapshot, LoadPhase, PortfolioView, SliceSource, SliceSources,
};
