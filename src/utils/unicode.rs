use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index == 0 {
        return 0;
    }
    s.char_indices()
        .rev()
        .find(|(i, _)| *i < byte_index)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    s.char_indices()
        .find(|(i, _)| *i > byte_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn first_char_as_str(s: &str) -> &str {
    &s[..next_char_boundary(s, 0)]
}

pub fn after_first_char(s: &str) -> &str {
    &s[next_char_boundary(s, 0)..]
}

/// Cut `s` to at most `max_width` terminal columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_char_boundary() {
        let s = "aöb";
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 4), 3);
    }

    #[test]
    fn test_next_char_boundary() {
        let s = "aöb";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 4);
        assert_eq!(next_char_boundary(s, 4), 4);
    }

    #[test]
    fn test_first_and_after_first_char() {
        assert_eq!(first_char_as_str("ödó"), "ö");
        assert_eq!(after_first_char("ödó"), "dó");
        assert_eq!(first_char_as_str(""), "");
        assert_eq!(after_first_char("a"), "");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("a@x.com", 20), "a@x.com");
        assert_eq!(truncate_to_width("averylongname@x.com", 8), "averylo…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
