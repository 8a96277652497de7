//! Force integration and moment accumulation

mod integrate;
mod moment;

pub use integrate::integrate;
pub use moment::{
    mudline_moment_breakdown, mudline_overturning_moment, sweep_elevations, MomentBreakdown,
    AIRBORNE_STEP, SUBMERGED_STEP,
};
