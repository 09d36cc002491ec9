use alloc::borrow::Cow;

use crate::SerialError;

/// Whether XML 1.0 can hold `ch` at all, even as a character reference.
#[inline]
pub(crate) fn is_restricted(ch: char) -> bool {
    match ch {
        '\t' | '\n' | '\r' => false,
        '\u{FFFE}' | '\u{FFFF}' => true,
        ch => ch < ' ',
    }
}

/// Whether `text` must be encoded before it is written.
pub(crate) fn needs_encoding(text: &str) -> bool {
    text.chars().any(is_restricted)
}

/// Encodes `text` so that it holds no restricted character.
///
/// `\` becomes `\\`, a restricted character becomes `\u{HEX}`.
pub(crate) fn encode(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| ch == '\\' || is_restricted(ch)) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ch if is_restricted(ch) => {
                out.push_str("\\u{");
                out.push_str(&format!("{:X}", ch as u32));
                out.push('}');
            }
            ch => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Reverses [`encode`].
pub(crate) fn decode(text: &str) -> Result<Cow<'_, str>, SerialError> {
    if !text.contains('\\') {
        return Ok(Cow::Borrowed(text));
    }
    let invalid = || SerialError::malformed(format!("invalid escape in `{text}`"));

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('u') => {
                if chars.next() != Some('{') {
                    return Err(invalid());
                }
                let rest = chars.as_str();
                let end = rest.find('}').ok_or_else(invalid)?;
                let ch = u32::from_str_radix(&rest[..end], 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(invalid)?;
                out.push(ch);
                chars = rest[end + 1..].chars();
            }
            _ => return Err(invalid()),
        }
    }
    Ok(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, needs_encoding};

    #[test]
    fn restricted_characters() {
        assert!(needs_encoding("\0"));
        assert!(needs_encoding("bell\u{7}"));
        assert!(needs_encoding("\u{FFFF}"));
        assert!(!needs_encoding("tab\tline\r\n"));
        assert!(!needs_encoding("back\\slash"));
    }

    #[test]
    fn encoding_is_reversible() {
        assert_eq!(encode("bell\u{7}"), "bell\\u{7}");
        assert_eq!(encode("\0\\"), "\\u{0}\\\\");
        for text in ["\0", "a\\u{7}\u{1F}", "\\\\", "\u{FFFE}x"] {
            assert_eq!(decode(&encode(text)).unwrap(), text);
        }
    }

    #[test]
    fn rejects_bad_escapes() {
        for text in ["\\", "\\n", "\\u7", "\\u{7", "\\u{zz}", "\\u{D800}"] {
            assert!(decode(text).is_err(), "accepted: {text}");
        }
    }
}
