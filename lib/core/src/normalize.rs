//! Pure value normalization for multi-valued text fields.
//!
//! Both normalizers are total: any input, however malformed, produces a
//! usable display value. Failures degrade to a safe fallback instead of
//! propagating, so one bad cell can never suppress a recommendation.

/// Split a comma-separated tag string into trimmed, non-empty tokens.
///
/// Token order follows the source text. Blank input yields an empty vec.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a text-encoded list literal such as `['Drake', 'Rihanna']`.
///
/// The grammar is deliberately small: optional surrounding whitespace,
/// `[`, zero or more quoted strings separated by commas, `]`. Strings
/// may use single or double quotes and escape the quote character (and
/// backslash) with a backslash. Anything outside this grammar returns
/// `None`; the caller decides the fallback.
pub fn decode_string_list(raw: &str) -> Option<Vec<String>> {
    let mut chars = raw.trim().chars().peekable();

    if chars.next()? != '[' {
        return None;
    }

    let mut items = Vec::new();
    loop {
        skip_spaces(&mut chars);
        match *chars.peek()? {
            ']' => {
                chars.next();
                break;
            }
            '\'' | '"' => {
                let quote = chars.next()?;
                items.push(read_quoted(&mut chars, quote)?);
                skip_spaces(&mut chars);
                match chars.next()? {
                    ',' => continue,
                    ']' => break,
                    _ => return None,
                }
            }
            _ => return None,
        }
    }

    skip_spaces(&mut chars);
    if chars.next().is_some() {
        return None;
    }
    Some(items)
}

/// Decode an encoded artist list and join it with ", " for display.
/// Falls back to the raw text verbatim when decoding fails.
pub fn format_artist_list(raw: &str) -> String {
    match decode_string_list(raw) {
        Some(items) => items.join(", "),
        None => raw.to_string(),
    }
}

fn skip_spaces(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn read_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char) -> Option<String> {
    let mut out = String::new();
    loop {
        match chars.next()? {
            '\\' => match chars.next()? {
                c if c == quote || c == '\\' => out.push(c),
                _ => return None,
            },
            c if c == quote => return Some(out),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags("a, b,c"), ["a", "b", "c"]);
        assert_eq!(split_tags("Action, Sci-Fi , "), ["Action", "Sci-Fi"]);
        assert_eq!(split_tags(""), Vec::<String>::new());
        assert_eq!(split_tags("  ,  ,"), Vec::<String>::new());
    }

    #[test]
    fn test_split_tags_preserves_order() {
        assert_eq!(split_tags("z, a, m"), ["z", "a", "m"]);
    }

    #[test]
    fn test_decode_single_quoted_list() {
        assert_eq!(
            decode_string_list("['Drake', 'Rihanna']"),
            Some(vec!["Drake".to_string(), "Rihanna".to_string()])
        );
    }

    #[test]
    fn test_decode_double_quoted_and_mixed() {
        assert_eq!(
            decode_string_list(r#"["Daft Punk", 'Pharrell Williams']"#),
            Some(vec![
                "Daft Punk".to_string(),
                "Pharrell Williams".to_string()
            ])
        );
    }

    #[test]
    fn test_decode_empty_list() {
        assert_eq!(decode_string_list("[]"), Some(vec![]));
        assert_eq!(decode_string_list("  [ ]  "), Some(vec![]));
    }

    #[test]
    fn test_decode_escaped_quote() {
        assert_eq!(
            decode_string_list(r"['Guns N\' Roses']"),
            Some(vec!["Guns N' Roses".to_string()])
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(decode_string_list("not-a-list"), None);
        assert_eq!(decode_string_list("['unterminated]"), None);
        assert_eq!(decode_string_list("['a' 'b']"), None);
        assert_eq!(decode_string_list("['a'], trailing"), None);
        assert_eq!(decode_string_list("[1, 2]"), None);
        assert_eq!(decode_string_list(""), None);
    }

    #[test]
    fn test_format_artist_list_joins() {
        assert_eq!(format_artist_list("['Drake', 'Rihanna']"), "Drake, Rihanna");
    }

    #[test]
    fn test_format_artist_list_falls_back_verbatim() {
        assert_eq!(format_artist_list("not-a-list"), "not-a-list");
        assert_eq!(format_artist_list("Beyoncé"), "Beyoncé");
    }
}
