// ==================== FIELD VALIDATION ====================
// Mirrors the rules the web client applies before submitting:
// names are alphabetic words separated by single spaces, emails
// follow the basic local@domain shape with a dot in the domain.

/// True when `name` is one or more alphabetic words separated by single spaces.
///
/// Rejects empty input, leading/trailing spaces, double spaces and any
/// non-letter character ("john3", "john  smith").
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.split(' ')
        .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Normalizes an already-validated name to title case:
/// first letter of each word uppercased, the rest lowercased.
pub fn to_title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `email` looks like `local@domain`: both parts non-empty,
/// no whitespace anywhere, exactly one '@', and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
