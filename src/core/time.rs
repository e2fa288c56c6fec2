//! Shared timestamp helpers for record creation and display.

use chrono::{DateTime, Utc};

/// Returns the current UTC time. Record construction routes through here so
/// timestamps are taken in exactly one place.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Compact display form for tables and detail views (`2026-03-14 09:26:53`).
pub fn display_stamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
