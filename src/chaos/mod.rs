//! The chaos transform chain: a fixed transform catalog with a geometric
//! cost model, consumed by a budget-bounded random selection engine

pub mod cost;
pub mod engine;
pub mod offcrop;
pub mod registry;

pub use cost::CostTier;
pub use engine::{ChainConfig, ChainResult, ChaosEngine};
pub use registry::{Transform, TransformKind, TransformRegistry};
