//! HTML escaping for text content and attribute values.

/// Escapes text content: `&`, `<`, `>`.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value: text escapes plus `"` and `'`.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_escapes_markup() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_text_keeps_quotes() {
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(
            escape_attr(r#"x" onload="evil"#),
            "x&quot; onload=&quot;evil"
        );
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_text(""), "");
        assert_eq!(escape_attr(""), "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn escaped_text_has_no_raw_markup(input in ".*") {
            let out = escape_text(&input);
            prop_assert!(!out.contains('<'));
            prop_assert!(!out.contains('>'));
        }

        #[test]
        fn escaped_attr_is_quote_safe(input in ".*") {
            let out = escape_attr(&input);
            prop_assert!(!out.contains('"'));
            prop_assert!(!out.contains('\''));
        }

        #[test]
        fn escaping_is_reversible(input in "[a-zA-Z<>&\"' ]{0,40}") {
            let out = escape_attr(&input);
            let back = out
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&#39;", "'")
                .replace("&amp;", "&");
            prop_assert_eq!(back, input);
        }
    }
}
