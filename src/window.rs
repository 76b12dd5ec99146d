//! # Window Module
//!
//! Locates the clock inside the fixed daily usage windows and tracks
//! progress toward the next renewal.

pub const MINUTES_PER_DAY: u32 = 1440;

/// Half-open daily interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u32,
    pub end: u32,
}

impl Window {
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// The recurring usage windows: 08:00-13:00, 13:00-18:00, 18:00-23:00.
/// Ordered, contiguous, and not covering the full day.
pub const WINDOWS: [Window; 3] = [
    Window { start: 480, end: 780 },
    Window { start: 780, end: 1080 },
    Window { start: 1080, end: 1380 },
];

/// Where the clock sits relative to the window set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    Inside {
        window: Window,
        elapsed: u32,
        remaining: u32,
    },
    Outside {
        until_open: u32,
        tomorrow: bool,
    },
}

/// Progress through the active window. Early progress is the urgent end:
/// the countdown runs toward renewal, so a window that just opened has the
/// longest wait ahead and a nearly-finished one is about to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Early,
    Mid,
    Late,
}

/// Locate `minute` (minutes since local midnight) against the window set.
pub fn locate(minute: u32) -> WindowStatus {
    for w in WINDOWS {
        if minute >= w.start && minute < w.end {
            return WindowStatus::Inside {
                window: w,
                elapsed: minute - w.start,
                remaining: w.end - minute,
            };
        }
    }

    // Before the first window, or in a gap between windows. The current
    // table is contiguous so only the pre-08:00 case is reachable, but a
    // gap would land here too and `until_open` handles it the same way.
    for w in WINDOWS {
        if minute < w.start {
            return WindowStatus::Outside {
                until_open: w.start - minute,
                tomorrow: false,
            };
        }
    }

    // At or past the last close: next opening is tomorrow's first window.
    WindowStatus::Outside {
        until_open: (MINUTES_PER_DAY - minute) + WINDOWS[0].start,
        tomorrow: true,
    }
}

/// Integer percentage of the window already consumed, truncating.
pub fn progress_percent(window: &Window, elapsed: u32) -> u32 {
    let duration = window.duration();
    if duration == 0 {
        // Zero-width windows cannot occur in the fixed table; guard anyway.
        return 0;
    }
    elapsed * 100 / duration
}

pub fn phase_of(progress: u32) -> WindowPhase {
    if progress <= 33 {
        WindowPhase::Early
    } else if progress <= 66 {
        WindowPhase::Mid
    } else {
        WindowPhase::Late
    }
}

/// Render a minute count as `"3h"`, `"8h30m"`, or `"45m"`. Hours appear
/// from 61 minutes up; zero is the degenerate "opens now" case.
pub fn format_minutes(total: u32) -> String {
    if total == 0 {
        return "now".to_string();
    }
    if total >= 61 {
        let h = total / 60;
        let m = total % 60;
        if m == 0 {
            format!("{h}h")
        } else {
            format!("{h}h{m}m")
        }
    } else {
        format!("{total}m")
    }
}
