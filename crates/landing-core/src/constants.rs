// Particle network tuning shared by the simulation and the web renderer.

// Surface area (px²) covered by each particle when sizing a batch
pub const AREA_PER_PARTICLE: u64 = 10_000;

// Pairs closer than this are joined by a line
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_WIDTH: f64 = 0.5;

// Particle body
pub const PARTICLE_RADIUS: f32 = 1.5;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per axis, units per step

// Simulation clock
pub const STEPS_PER_SEC: u32 = 60;
pub const MAX_STEPS_PER_FRAME: u32 = 4; // backlog beyond this is dropped

// Palette (purple-400 dots, purple-500 links)
pub const PARTICLE_RGB: [u8; 3] = [192, 132, 252];
pub const PARTICLE_ALPHA: f32 = 0.5;
pub const LINK_RGB: [u8; 3] = [168, 85, 247];

/// CSS fill style for particle bodies.
pub fn particle_fill_style() -> String {
    rgba(PARTICLE_RGB, PARTICLE_ALPHA)
}

/// CSS stroke style for a link of the given opacity, or `None` when the
/// alpha would print as zero and the link is invisible.
pub fn link_stroke_style(opacity: f32) -> Option<String> {
    (opacity >= MIN_VISIBLE_ALPHA).then(|| rgba(LINK_RGB, opacity))
}

// Smallest alpha that survives three-decimal formatting
const MIN_VISIBLE_ALPHA: f32 = 0.0005;

#[inline]
fn rgba([r, g, b]: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
}
