//! Fixed-width text formatting for the details table.
//!
//! Every cell in a data row is rendered to exactly its column width: long
//! values are truncated with an ellipsis, short values are padded with spaces.

use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};

const ELLIPSIS: &str = "...";

/// Horizontal alignment of a value inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Truncate or left-align `content` so it occupies exactly `width` characters.
///
/// Content longer than `width` keeps its first `width - 3` characters followed
/// by `"..."`. For widths of 3 or less there is no room for an ellipsis, so the
/// content is cut to `width` characters instead.
pub fn format_cell(content: &str, width: usize) -> String {
    format_cell_aligned(content, width, Align::Left)
}

/// Like [`format_cell`], but padding goes on the left for [`Align::Right`].
pub fn format_cell_aligned(content: &str, width: usize, align: Align) -> String {
    let len = content.chars().count();

    if len > width {
        if width <= ELLIPSIS.len() {
            return content.chars().take(width).collect();
        }
        let mut truncated: String = content.chars().take(width - ELLIPSIS.len()).collect();
        truncated.push_str(ELLIPSIS);
        return truncated;
    }

    let padding = " ".repeat(width - len);
    match align {
        Align::Left => format!("{}{}", content, padding),
        Align::Right => format!("{}{}", padding, content),
    }
}

/// Render a timestamp as an RFC 1123 style date without the zone suffix.
///
/// Example: `Tue, 05 Mar 2024 12:34:56`
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%a, %d %b %Y %H:%M:%S").to_string()
}

/// Render a file modification time in `tz`, or `-` when unknown.
///
/// Times chrono cannot represent render as `-` too.
pub fn format_modified<Tz: TimeZone>(time: Option<SystemTime>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    time.and_then(to_utc)
        .map(|datetime| format_timestamp(&datetime.with_timezone(tz)))
        .unwrap_or_else(|| "-".to_string())
}

/// Checked `SystemTime` conversion; filesystems can store mtimes far outside
/// chrono's range.
fn to_utc(time: SystemTime) -> Option<DateTime<Utc>> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => {
            let secs = i64::try_from(since.as_secs()).ok()?;
            DateTime::from_timestamp(secs, since.subsec_nanos())
        }
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?.checked_neg()?;
            match before.subsec_nanos() {
                0 => DateTime::from_timestamp(secs, 0),
                nanos => DateTime::from_timestamp(secs.checked_sub(1)?, 1_000_000_000 - nanos),
            }
        }
    }
}

/// Render a byte count as `"<N> bytes"`; entries without a size render as `-`.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("{} bytes", bytes),
        None => "-".to_string(),
    }
}

/// Kind column text.
pub fn format_kind(is_dir: bool) -> &'static str {
    if is_dir {
        "Directory"
    } else {
        "File"
    }
}
