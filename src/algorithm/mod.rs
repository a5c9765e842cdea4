//! Layout planning
//!
//! Quota calculation, image pool handling, 2x2 block placement, small-cell
//! filling and the planners that combine them.

/// Row-major filling of empty cells
pub mod filler;
/// Random 2x2 block placement
pub mod placer;
/// Layout plans and warnings
pub mod plan;
/// Uniform and mixed grid planners
pub mod planner;
/// Ordered image pool
pub mod pool;
/// Image quota calculation
pub mod quota;

pub use plan::{LayoutPlan, PlanWarning};
pub use planner::{MixedGridPlanner, UniformGridPlanner};
pub use pool::ImagePool;
