//! HTML rendering of hidden form fields

/// Render one hidden input line
pub(crate) fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}" />"#,
        escape(name),
        escape(value)
    )
}

/// Escape text for use inside a double-quoted HTML attribute
///
/// Quotes must be neutralized so a field value can never break out of the
/// attribute and inject markup.
pub(crate) fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
