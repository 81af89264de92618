/// Decimal precision for display (currency minor units)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Length of the flat month used by savings goal pacing
pub const DAYS_PER_PACING_MONTH: i64 = 30;

/// Days without a sync after which an account balance is reported as stale
pub const ACCOUNT_STALENESS_THRESHOLD_DAYS: i64 = 7;

/// Default base currency when none is configured
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
