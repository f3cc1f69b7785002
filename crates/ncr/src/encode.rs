use crate::entities;
use crate::surrogate::{self, is_lead, is_trail};
use crate::types::{EncodeOptions, Radix};
use crate::xml;

const ESCAPE_THRESHOLD: u16 = 0x007F;

pub fn encode(input: &str, hexadecimal: bool) -> String {
    encode_with(input, &EncodeOptions::hexadecimal(hexadecimal))
}

pub fn encode_with(input: &str, options: &EncodeOptions) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    encode_units(&units, options)
}

pub fn encode_units(units: &[u16], options: &EncodeOptions) -> String {
    let mut output = String::with_capacity(units.len());
    let mut index = 0;

    while index < units.len() {
        let unit = units[index];

        if let Some(&trail) = units.get(index + 1) {
            if is_lead(unit) && is_trail(trail) {
                output.push_str(&surrogate::pair_to_reference(unit, trail, options.radix));
                index += 2;
                continue;
            }
        }

        push_unit(&mut output, unit, options);
        index += 1;
    }

    output
}

fn push_unit(output: &mut String, unit: u16, options: &EncodeOptions) {
    if unit >= ESCAPE_THRESHOLD {
        match entities::name_of(unit).filter(|_| options.named) {
            Some(name) => {
                output.push('&');
                output.push_str(name);
                output.push(';');
            }
            None => {
                output.push_str(&surrogate::format_reference(u32::from(unit), Radix::Decimal))
            }
        }
        return;
    }

    let character = char::from(unit as u8);
    match xml::markup_reference(character).filter(|_| options.markup) {
        Some(reference) => output.push_str(reference),
        None => output.push(character),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use proptest::prelude::*;

    #[test]
    fn test_encode_ascii_unchanged() {
        assert_eq!(encode("Hello, <world> & ~", false), "Hello, <world> & ~");
        assert_eq!(encode("", false), "");
        assert_eq!(encode("", true), "");
    }

    #[test]
    fn test_encode_cjk() {
        assert_eq!(encode("你好", false), "&#20320;&#22909;");
        assert_eq!(encode("你好", true), "&#20320;&#22909;");
    }

    #[test]
    fn test_encode_supplementary_decimal() {
        assert_eq!(encode("\u{1F000}", false), "&#126976;");
        assert_eq!(encode("a\u{1F000}b", false), "a&#126976;b");
    }

    #[test]
    fn test_encode_supplementary_hexadecimal() {
        assert_eq!(encode("\u{10000}", true), "&#x10000;");
        assert_eq!(encode("\u{1F000}", true), "&#x1f000;");
    }

    #[test]
    fn test_encode_escape_threshold() {
        assert_eq!(encode("\u{7E}", false), "~");
        assert_eq!(encode("\u{7F}", false), "&#127;");
        assert_eq!(encode("é", false), "&#233;");
    }

    #[test]
    fn test_encode_preserves_order() {
        assert_eq!(
            encode("caf\u{E9} \u{1F600}!", false),
            "caf&#233; &#128512;!"
        );
    }

    #[test]
    fn test_encode_units_lone_lead_surrogate() {
        let options = EncodeOptions::default();
        assert_eq!(encode_units(&[0xD83C], &options), "&#55356;");
        assert_eq!(encode_units(&[0xD83C, 0x0041], &options), "&#55356;A");
        assert_eq!(encode_units(&[0xD83C, 0xD83C, 0xDC00], &options), "&#55356;&#126976;");
    }

    #[test]
    fn test_encode_units_lone_trail_surrogate() {
        let options = EncodeOptions::default();
        assert_eq!(encode_units(&[0xDC00], &options), "&#56320;");
        assert_eq!(encode_units(&[0xDC00, 0xD83C], &options), "&#56320;&#55356;");
    }

    #[test]
    fn test_encode_units_non_surrogates_above_lead_range() {
        let options = EncodeOptions::default();
        assert_eq!(encode_units(&[0xE000, 0xE000], &options), "&#57344;&#57344;");
        assert_eq!(encode_units(&[0xF900, 0xDC00], &options), "&#63744;&#56320;");
    }

    #[test]
    fn test_encode_named() {
        let options = EncodeOptions {
            named: true,
            ..EncodeOptions::default()
        };
        assert_eq!(encode_with("caf\u{E9}\u{A0}", &options), "caf&eacute;&nbsp;");
        assert_eq!(encode_with("你", &options), "&#20320;");
        assert_eq!(encode_with("a & b", &options), "a & b");
    }

    #[test]
    fn test_encode_markup() {
        let options = EncodeOptions {
            markup: true,
            ..EncodeOptions::default()
        };
        assert_eq!(
            encode_with("<p class=\"x\">it's &</p>", &options),
            "&lt;p class=&quot;x&quot;&gt;it&#39;s &amp;&lt;/p&gt;"
        );
    }

    #[test]
    fn test_markup_apostrophe_round_trips() {
        let options = EncodeOptions {
            markup: true,
            ..EncodeOptions::default()
        };
        let encoded = encode_with("it's", &options);
        assert_eq!(encoded, "it&#39;s");
        assert_eq!(decode(&encoded), "it's");
    }

    #[test]
    fn test_ascii_references_are_resolved_on_decode() {
        assert_eq!(encode("&lt;", false), "&lt;");
        assert_eq!(decode(&encode("&lt;", false)), "<");
    }

    #[test]
    fn test_encode_twice_is_identity_by_default() {
        let once = encode("你好 \u{1F000}", false);
        assert_eq!(encode(&once, false), once);
    }

    #[test]
    fn test_encode_twice_with_markup_escapes_ampersands() {
        let options = EncodeOptions {
            markup: true,
            ..EncodeOptions::default()
        };
        let once = encode_with("é", &options);
        let twice = encode_with(&once, &options);
        assert_eq!(once, "&#233;");
        assert_eq!(twice, "&amp;#233;");
        assert_ne!(once, twice);
    }

    proptest! {
        #[test]
        fn ascii_round_trips(input in "[\\x00-\\x25\\x27-\\x7E]*") {
            prop_assert_eq!(encode(&input, false), input.clone());
            prop_assert_eq!(decode(&encode(&input, false)), input);
        }

        #[test]
        fn markup_encoding_round_trips(input in any::<String>(), hexadecimal in any::<bool>()) {
            let options = EncodeOptions {
                markup: true,
                ..EncodeOptions::hexadecimal(hexadecimal)
            };
            let encoded = encode_with(&input, &options);
            prop_assert!(encoded.is_ascii());
            prop_assert_eq!(decode(&encoded), input);
        }
    }
}
