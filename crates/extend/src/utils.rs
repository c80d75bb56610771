pub(crate) fn is_name(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

pub(crate) fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c as u32 >= 0x0080
}

/// Whether `s` can be written as a bare CSS identifier
pub(crate) fn is_ident(s: &str) -> bool {
    let s = s.strip_prefix("--").or_else(|| s.strip_prefix('-')).unwrap_or(s);
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_name_start(c) => {}
        Some(..) | None => return false,
    }
    chars.all(is_name)
}
