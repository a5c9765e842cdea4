//! Logging of recoverable planning and rendering conditions

use crate::algorithm::plan::{LayoutPlan, PlanWarning};
use crate::render::canvas::RenderOutcome;
use crate::render::loader::ImageLoader;
use crate::spatial::Span;

/// Human-readable line for a planning warning
pub fn describe_plan_warning<T, L>(warning: &PlanWarning<T>, loader: &L) -> String
where
    L: ImageLoader<T> + ?Sized,
{
    match warning {
        PlanWarning::LargeBlockDropped { source, attempts } => format!(
            "No free 2x2 slot for '{}' after {attempts} attempts; image skipped",
            loader.describe(source)
        ),
        PlanWarning::CellUnfilled { cell } => {
            format!("Not enough small images to fill cell {cell}; left blank")
        }
        PlanWarning::PoolPadded { available, cells } => format!(
            "Only {available} images for {cells} cells; {} cells will be blank",
            cells.saturating_sub(*available)
        ),
        PlanWarning::PoolTruncated { available, cells } => {
            format!("{available} images found; using the first {cells}")
        }
    }
}

/// Log the outcome of planning
///
/// Truncation is expected when a directory holds more images than the grid
/// needs, so it is logged at info level; everything else is a warning.
pub fn report_plan<T, L>(plan: &LayoutPlan<T>, loader: &L)
where
    L: ImageLoader<T> + ?Sized,
{
    log::info!(
        "Planned {} placements ({} large, {} small) on a {}x{} grid",
        plan.placements().len(),
        plan.count_span(Span::LARGE),
        plan.count_span(Span::SINGLE),
        plan.rows(),
        plan.cols()
    );

    for warning in plan.warnings() {
        let line = describe_plan_warning(warning, loader);
        if matches!(warning, PlanWarning::PoolTruncated { .. }) {
            log::info!("{line}");
        } else {
            log::warn!("{line}");
        }
    }
}

/// Log images that rendered as blank cells
pub fn report_render<T, L>(outcome: &RenderOutcome<T>, loader: &L)
where
    L: ImageLoader<T> + ?Sized,
{
    for warning in &outcome.warnings {
        log::warn!(
            "Could not process '{}' at cell {}; left blank: {}",
            loader.describe(&warning.source),
            warning.anchor,
            warning.error
        );
    }
    log::info!(
        "Rendered {}x{} collage: {} drawn, {} blank",
        outcome.image.width(),
        outcome.image.height(),
        outcome.drawn,
        outcome.warnings.len()
    );
}
