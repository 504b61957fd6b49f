//! Sentence templates and final text tidy-up.

/// Number of fixed sentence templates.
pub const TEMPLATE_COUNT: usize = 8;

/// Trailing clauses used only by the corpus padding phase.
pub const PADDING_CLAUSES: [&str; 4] = [
    "for immediate attention",
    "during VHC inspection",
    "during health check",
    "workshop follow-up advised",
];

/// Render one suggestion sentence.
///
/// `prefix` may be empty (location-less components); `tidy` cleans up the
/// resulting double spaces and capitalizes the first letter.
pub fn render(
    template_index: usize,
    prefix: &str,
    name: &str,
    symptom: &str,
    action: &str,
) -> String {
    let raw = match template_index % TEMPLATE_COUNT {
        0 => format!("{prefix} {name} {symptom} - {action}"),
        1 => format!("{prefix} {name} showing signs of {symptom}; {action}"),
        2 => format!("{prefix} {name} found {symptom} on inspection - {action}"),
        3 => format!("Attention: {prefix} {name} {symptom}, {action}"),
        4 => format!("{prefix} {name} {symptom}, {action} recommended"),
        5 => format!("Customer advised: {prefix} {name} {symptom} - {action}"),
        6 => format!("{prefix} {name} noted as {symptom} - {action} at earliest opportunity"),
        _ => format!("{prefix} {name} {symptom} - advise {action}"),
    };
    tidy(&raw)
}

/// Collapse whitespace, drop space before punctuation, capitalize the first
/// letter.
pub fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() && !word.starts_with([',', ';', ':', '.']) {
            out.push(' ');
        }
        out.push_str(word);
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => out,
    }
}
