use tribuna_core::constants::{PRIORITY_THEMES, STATUS_PRIORITY_KEYWORDS};

/// Bonus for an exact (trimmed) priority-theme match.
pub const THEME_MATCH_BONUS: f64 = 0.6;
/// Bonus when the status situation mentions a procedural urgency keyword.
pub const STATUS_KEYWORD_BONUS: f64 = 0.4;

/// Theme factor: thematic priority plus procedural urgency.
///
/// +0.6 when the trimmed theme exactly matches a priority theme, +0.4 when
/// the status situation contains (case-insensitive) any urgency keyword.
/// Clamped to [0.0, 1.0], so both bonuses together cap at 1.0.
pub fn calculate(theme: Option<&str>, status_situation: Option<&str>) -> f64 {
    let mut bonus = 0.0;

    if let Some(theme) = theme {
        if PRIORITY_THEMES.contains(&theme.trim()) {
            bonus += THEME_MATCH_BONUS;
        }
    }

    if let Some(situation) = status_situation {
        let situation = situation.to_lowercase();
        if STATUS_PRIORITY_KEYWORDS
            .iter()
            .any(|keyword| situation.contains(keyword))
        {
            bonus += STATUS_KEYWORD_BONUS;
        }
    }

    bonus.clamp(0.0, 1.0)
}
