//! Display formatting shared by the web and terminal front ends.

/// Axis labels longer than this are shortened.
pub const MAX_LABEL_CHARS: usize = 32;
/// Characters kept when a label is shortened (an ellipsis is appended).
pub const TRUNCATED_LABEL_CHARS: usize = 30;

/// Format an integer with `,` thousands separators (`6484` → `6,484`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an average SERP position with one decimal.
pub fn format_position(p: f64) -> String {
    format!("{:.1}", p)
}

/// Shorten long chart labels to 30 characters plus `…`.
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let mut short: String = label.chars().take(TRUNCATED_LABEL_CHARS).collect();
        short.push('…');
        short
    } else {
        label.to_string()
    }
}
