//! Human readable labels derived from field names.

/// Turn a camelCase field name into a display label.
///
/// A space is inserted before every uppercase letter, the first character is
/// uppercased and surrounding whitespace is trimmed:
/// `firstName` becomes `First Name`, `username` becomes `Username`.
pub fn format_field_name(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    label.trim().to_string()
}
