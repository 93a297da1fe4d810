/// Nominal simulation rate. Animation timing assumes this rate regardless of
/// how often the shell actually calls `update`.
pub const TICK_RATE_HZ: f32 = 60.0;

/// Seconds added to every animation timer per update tick.
pub const ANIMATION_STEP: f32 = 1.0 / TICK_RATE_HZ;
