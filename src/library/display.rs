use crate::config::{DisplaySettings, DurationStyle, TrackField};

use super::model::Track;

/// Format seconds as `MM:SS`, rounding to the nearest second.
fn format_clock(seconds: f64) -> String {
    let secs = seconds.round() as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn format_duration(seconds: f64, style: DurationStyle) -> String {
    match style {
        DurationStyle::Seconds => format!("{seconds}s"),
        DurationStyle::Clock => format_clock(seconds),
    }
}

/// Build the one-line listing for `track` according to `settings`.
///
/// The line always starts with `Track <id>: `; the configured fields follow in
/// order, joined by the separator. Falls back to the title when the field list
/// produces nothing.
pub fn track_line(track: &Track, settings: &DisplaySettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in &settings.track_fields {
        match field {
            TrackField::Title => {
                if !track.title().trim().is_empty() {
                    parts.push(track.title().trim().to_string());
                }
            }
            TrackField::Duration => {
                parts.push(format_duration(track.duration(), settings.duration_style));
            }
        }
    }

    let body = if parts.is_empty() {
        track.title().to_string()
    } else {
        parts.join(&settings.separator)
    };
    format!("Track {}: {}", track.id(), body)
}
