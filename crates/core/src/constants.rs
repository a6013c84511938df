/// Timezone used to resolve "today" when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Canonical transaction date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";
