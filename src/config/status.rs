/// Status page configuration constants.
/// 
/// This module defines presentation parameters for the `/status` page,
/// such as how much history the dashboard shows and the placeholders used.
pub const RECENT_HISTORY_LEN: usize = 5; // Entries shown by the dashboard layout.

/// Marker rendered instead of an absent lobby id.
pub const ABSENT_PLACEHOLDER: &str = "—";

/// Text rendered when no report has been recorded yet.
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No entries yet";

/// Format of history timestamps (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
