// src/core/sanitize.rs

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

/// "Next Hearing Date :" → "Next Hearing Date"
pub fn clean_label(s: &str) -> String {
    s.trim().trim_end_matches(':').trim_end().to_string()
}

/// Make a case identifier safe to use as a file stem.
/// Runs of anything outside `[A-Za-z0-9_-]` collapse to a single '_'.
pub fn sanitize_file_stem(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut last_us = false;
    for ch in id.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("unknown") } else { out }
}
