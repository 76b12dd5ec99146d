//! # Budget Module
//!
//! Token and context budget estimation. Neither estimator counts real
//! tokens; both project from byte and elapsed-time proxies onto a fixed
//! budget and clamp to a displayable percentage.

use crate::window::WindowStatus;

/// Token budget for one usage window.
pub const TOKEN_BUDGET: u64 = 200_000;

/// Context budget (model context length).
pub const CONTEXT_BUDGET: u64 = 200_000;

/// Heuristic: one byte of recent file activity costs about two tokens of
/// window budget. Calibration unknown; kept as configured.
pub const ACTIVITY_TOKEN_MULTIPLIER: u64 = 2;

/// Heuristic linear burn rate used when no activity data is available.
pub const FALLBACK_TOKENS_PER_HOUR: u64 = 15_000;

/// Ceiling for the time-simulated estimate. Without activity data the
/// fallback must not claim near-exhaustion.
pub const FALLBACK_DISPLAY_CAP: u8 = 45;

/// Shown when inside a window with no elapsed time and no activity data.
pub const FALLBACK_FLOOR_PERCENT: u8 = 5;

/// Rough transcript bytes per token.
pub const BYTES_PER_TOKEN: u64 = 4;

/// Budget severity. `Low` is the safe end here, unlike the window phase
/// scale where early progress is the urgent end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

pub fn budget_tier(percent: u8) -> BudgetTier {
    if percent <= 60 {
        BudgetTier::Low
    } else if percent <= 80 {
        BudgetTier::Medium
    } else {
        BudgetTier::High
    }
}

fn clamp_percent(value: u64) -> u8 {
    value.min(100) as u8
}

/// Estimate window token consumption as a percentage of [`TOKEN_BUDGET`].
///
/// Activity bytes, when present, drive the estimate directly. Otherwise a
/// linear time model stands in, capped at [`FALLBACK_DISPLAY_CAP`] before
/// the general clamp. Outside a window there is nothing to estimate.
pub fn estimate_token_percent(status: &WindowStatus, activity_bytes: u64) -> Option<u8> {
    let elapsed = match status {
        WindowStatus::Inside { elapsed, .. } => *elapsed,
        WindowStatus::Outside { .. } => return None,
    };

    if activity_bytes > 0 {
        let estimated = activity_bytes.saturating_mul(ACTIVITY_TOKEN_MULTIPLIER);
        return Some(clamp_percent(estimated.saturating_mul(100) / TOKEN_BUDGET));
    }

    if elapsed > 0 {
        let estimated = u64::from(elapsed) * FALLBACK_TOKENS_PER_HOUR / 60;
        let percent = clamp_percent(estimated.saturating_mul(100) / TOKEN_BUDGET);
        return Some(percent.min(FALLBACK_DISPLAY_CAP));
    }

    Some(FALLBACK_FLOOR_PERCENT)
}

/// Estimate context consumption from the transcript byte length. Always
/// produces a value; no transcript reads as an empty context.
pub fn estimate_context_percent(transcript_bytes: u64) -> u8 {
    let tokens = transcript_bytes / BYTES_PER_TOKEN;
    clamp_percent(tokens.saturating_mul(100) / CONTEXT_BUDGET)
}
