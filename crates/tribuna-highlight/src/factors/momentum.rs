use tribuna_core::models::InteractionWindow;

/// Divisor mapping cold-start weekly activity onto [0, 1].
pub const COLD_START_DIVISOR: f64 = 10.0;

/// Momentum factor: week-over-week change in interaction volume.
///
/// Four distinct states, in order:
/// - no window at all → `neutral` (0.25 by default) — a neutral prior,
///   deliberately distinct from a recorded fortnight of silence;
/// - both weeks zero → 0.0 (no signal, not "flat positive");
/// - prior week zero, current week active →
///   `clamp(current / 10, floor, 1.0)` — any new activity where none
///   existed counts, floored so a cold start is not misread as declining;
/// - otherwise → percent change mapped from [-1, 1] to [0, 1] and clamped,
///   so a >100% rise or drop saturates the bounds.
pub fn calculate(window: Option<&InteractionWindow>, neutral: f64, floor: f64) -> f64 {
    let Some(window) = window else {
        return neutral;
    };

    let current = window.current_week_total() as f64;
    let previous = window.previous_week_total() as f64;

    if current == 0.0 && previous == 0.0 {
        return 0.0;
    }

    if previous == 0.0 {
        return (current / COLD_START_DIVISOR).clamp(floor, 1.0);
    }

    let delta = (current - previous) / previous;
    ((delta + 1.0) / 2.0).clamp(0.0, 1.0)
}
