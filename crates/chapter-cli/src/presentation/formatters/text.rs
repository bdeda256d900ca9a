const MAX_RULE_WIDTH: usize = 72;

/// Truncate to `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Horizontal separator sized to the terminal, capped for wide screens.
pub fn rule() -> String {
    let width = terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(MAX_RULE_WIDTH)
        .min(MAX_RULE_WIDTH);
    "-".repeat(width)
}
