// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Whitespace-normalized text cut to `max` chars, for log lines.
pub fn preview(s: &str, max: usize) -> String {
    let norm = normalize_ws(s);
    if norm.chars().count() <= max {
        return norm;
    }
    let mut out: String = norm.chars().take(max).collect();
    out.push('…');
    out
}
