// Single source of truth for all default values.

// --- Distribution ---
pub const DEFAULT_MEAN_MIN: f64 = 1.5;
pub const DEFAULT_MEAN_MAX: f64 = 4.0;
pub const DEFAULT_EXTREME_SHARE_MAX: f64 = 0.6;
pub const DEFAULT_HIGH_SCORE_FLOOR: u8 = 3;

// --- Evidence ---
pub const DEFAULT_COVERAGE_MIN_PERCENT: f64 = 60.0;
pub const DEFAULT_WEAK_EVIDENCE_MIN_CHARS: usize = 50;
pub const DEFAULT_DUPLICATION_SHARE_NOTE: f64 = 0.5;

// --- Narrative ---
pub const DEFAULT_RATIONALE_MIN_WORDS: usize = 200;
pub const DEFAULT_RATIONALE_MAX_WORDS: usize = 400;

// --- Limits ---
pub const DEFAULT_MAX_SUBMITTED_MEASURES: usize = 256;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
