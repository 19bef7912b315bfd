/// Default per-element delay for the paced generator (milliseconds)
pub const DEFAULT_STEP_DELAY_MS: u64 = 100;
/// Default element count when a generator stage does not configure one
pub const DEFAULT_GENERATOR_COUNT: i64 = 5;
/// Multiplier applied to each generated index
pub const STEP_MULTIPLIER: i64 = 2;
/// Exclusive upper bound of the dispatcher's default sample of even integers
pub const DEFAULT_SAMPLE_BOUND: i64 = 10;
