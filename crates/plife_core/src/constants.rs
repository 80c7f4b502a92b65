// Simulation constants (simulation units, one tick = one time step)
// Distances are in the same units as the domain width/height.

/// Number of particle groups (colors). Fixed at compile time so the
/// count vector and interaction matrix can never drift out of lockstep.
pub const GROUP_COUNT: usize = 4;

/// Hard cutoff radius: pairs at or beyond this distance exert no force
pub const DISTANCE_LIMIT: f64 = 80.0;

/// Reference distance anchoring the falloff power law.
/// With exponent 0 the rescaled distance equals the real distance.
pub const DISTANCE_SCALE: f64 = 15.0;

/// Matrix cells are in UI units; the force rule divides by this
pub const STRENGTH_DIVISOR: f64 = 200.0;

/// Bounds of a matrix cell in UI units
pub const MATRIX_MIN: f64 = -100.0;
pub const MATRIX_MAX: f64 = 100.0;

/// Bounds of the falloff exponent
pub const EXPONENT_MIN: f64 = -1.0;
pub const EXPONENT_MAX: f64 = 2.0;

/// Largest population a single group may be asked for
pub const MAX_COUNT: u32 = 2000;

/// Default domain size
pub const DEFAULT_WIDTH: f64 = 500.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;

/// Inset from the domain edge used when spawning new particles
pub const SPAWN_MARGIN: f64 = 50.0;
