//! Display helpers

/// Mask a guest name for non-admin views, e.g. `高成志` → `高*志`.
///
/// Two-character names keep only the first character; longer names keep
/// the first and last. Counts characters, not bytes.
pub fn mask_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.len() {
        0 | 1 => name.to_string(),
        2 => format!("{}*", chars[0]),
        n => format!("{}*{}", chars[0], chars[n - 1]),
    }
}

/// Mask the verification window of a phone number (digits 3..7).
///
/// Those four digits are the seat-mutation verification code, so they
/// never appear in views served to unauthenticated callers. Numbers too
/// short to carry the window are masked entirely.
pub fn mask_phone(phone: &str) -> String {
    if phone.len() >= 7 && phone.is_char_boundary(3) && phone.is_char_boundary(7) {
        format!("{}****{}", &phone[..3], &phone[7..])
    } else {
        "*".repeat(phone.chars().count())
    }
}
