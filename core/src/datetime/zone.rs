// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Conversions between the reference zone (UTC, what the store holds) and the
//! viewer's zone. Only the UI boundary crosses zones; everything else works on
//! wall-clock values.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves the viewer's timezone from the runtime's IANA identifier,
/// falling back to UTC when it cannot be resolved.
pub fn viewer_zone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tzid) => match tzid.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!(tzid, "unknown local timezone, falling back to UTC");
                Tz::UTC
            }
        },
        Err(e) => {
            tracing::warn!("failed to resolve local timezone, falling back to UTC: {e}");
            Tz::UTC
        }
    }
}

/// Maps a stored instant into the viewer's zone. Never fails for valid input.
pub fn to_viewer_zone(instant: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// Maps a viewer-zone value back to the reference zone. Inverse of
/// [`to_viewer_zone`] whenever no DST transition is crossed in between.
pub fn to_reference_zone(dt: DateTime<Tz>) -> DateTime<Utc> {
    dt.with_timezone(&Utc)
}

/// Interprets a wall-clock value in `tz`, handling local time ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g., due to DST transition): falls
///   back to the UTC interpretation and then converts.
pub fn resolve_wall_clock(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(a, b) => {
            tracing::warn!(?naive, "ambiguous local time, picking earliest");
            if a <= b { a } else { b }
        }
        LocalResult::None => {
            tracing::warn!(?naive, "invalid local time, interpreting as UTC");
            Utc.from_utc_datetime(&naive).with_timezone(&tz)
        }
    }
}
