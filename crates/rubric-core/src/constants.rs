/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest score a measure can receive.
pub const MIN_MEASURE_SCORE: i64 = 0;

/// Highest score a measure can receive.
pub const MAX_MEASURE_SCORE: i64 = 5;

/// Number of measures in the built-in ProcessPrompt v2.2 registry.
pub const BUILTIN_MEASURE_COUNT: usize = 44;

/// Number of categories in the built-in ProcessPrompt v2.2 registry.
pub const BUILTIN_CATEGORY_COUNT: usize = 9;

/// Label of the built-in registry.
pub const BUILTIN_SCHEMA_LABEL: &str = "process-prompt-v2.2";

/// Upper end of the rescaled physical risk score.
pub const PHYSICAL_RISK_SCALE: f64 = 10.0;

/// Average score at or above which the overall risk rating is `Low`.
pub const LOW_RISK_AVERAGE: f64 = 3.0;

/// Average score at or above which the overall risk rating is `Medium`.
pub const MEDIUM_RISK_AVERAGE: f64 = 1.5;
