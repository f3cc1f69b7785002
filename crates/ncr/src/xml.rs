// `'` has no HTML 4 name, so it is written numerically.
pub fn markup_reference(character: char) -> Option<&'static str> {
    match character {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn test_markup_reference() {
        assert_eq!(markup_reference('&'), Some("&amp;"));
        assert_eq!(markup_reference('<'), Some("&lt;"));
        assert_eq!(markup_reference('\''), Some("&#39;"));
        assert_eq!(markup_reference('a'), None);
    }

    #[test]
    fn test_markup_references_decode_back() {
        for character in ['&', '<', '>', '"', '\''] {
            let reference = markup_reference(character).unwrap();
            assert_eq!(decode(reference), character.to_string());
        }
    }
}
