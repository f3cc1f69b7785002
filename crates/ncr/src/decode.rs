use crate::entities;
use crate::error::{NcrError, Result};
use crate::surrogate::{self, SUPPLEMENTARY_BASE};
use std::convert::Infallible;

const MAX_CODE_POINT: u32 = 0x10FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference<'a> {
    Hexadecimal(&'a str),
    Decimal(&'a str),
    Named(&'a str),
}

impl Reference<'_> {
    fn radix(&self) -> u32 {
        match self {
            Reference::Hexadecimal(_) => 16,
            _ => 10,
        }
    }
}

struct Token<'a> {
    reference: Reference<'a>,
    text: &'a str,
    offset: usize,
}

/// Unknown names are left as they are, and a numeric reference whose digits
/// do not parse stands for U+0000.
pub fn decode(input: &str) -> String {
    String::from_utf16_lossy(&decode_units(input))
}

pub fn decode_units(input: &str) -> Vec<u16> {
    let Ok(units) = scan::<Infallible>(input, |token, units| {
        resolve_lenient(token, units);
        Ok(())
    });
    units
}

pub fn decode_strict(input: &str) -> Result<String> {
    let units = scan(input, resolve_strict)?;
    Ok(String::from_utf16_lossy(&units))
}

fn scan<E>(
    input: &str,
    mut resolve: impl FnMut(Token<'_>, &mut Vec<u16>) -> std::result::Result<(), E>,
) -> std::result::Result<Vec<u16>, E> {
    let mut units = Vec::with_capacity(input.len());
    let mut remaining = input;

    while let Some(position) = remaining.find('&') {
        units.extend(remaining[..position].encode_utf16());
        remaining = &remaining[position..];

        match scan_reference(remaining) {
            Some((reference, length)) => {
                let token = Token {
                    reference,
                    text: &remaining[..length],
                    offset: input.len() - remaining.len(),
                };
                resolve(token, &mut units)?;
                remaining = &remaining[length..];
            }
            None => {
                units.push(u16::from(b'&'));
                remaining = &remaining[1..];
            }
        }
    }

    units.extend(remaining.encode_utf16());
    Ok(units)
}

// Length includes the `&` and `;`.
fn scan_reference(text: &str) -> Option<(Reference<'_>, usize)> {
    if let Some(body) = text.strip_prefix("&#x").and_then(|rest| terminated(rest, is_word_byte)) {
        return Some((Reference::Hexadecimal(body), body.len() + 4));
    }

    if let Some(body) = text
        .strip_prefix("&#")
        .and_then(|rest| terminated(rest, |byte| byte.is_ascii_digit()))
    {
        return Some((Reference::Decimal(body), body.len() + 3));
    }

    let body = text
        .strip_prefix('&')
        .and_then(|rest| terminated(rest, is_word_byte))
        .filter(|body| !body.is_empty())?;
    Some((Reference::Named(body), body.len() + 2))
}

fn terminated(text: &str, accept: impl Fn(u8) -> bool) -> Option<&str> {
    let end = text
        .bytes()
        .position(|byte| !accept(byte))
        .unwrap_or(text.len());

    (text.as_bytes().get(end) == Some(&b';')).then(|| &text[..end])
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn resolve_lenient(token: Token<'_>, units: &mut Vec<u16>) {
    match token.reference {
        Reference::Hexadecimal(body) => {
            push_code_point(units, parse_prefix(strip_hex_prefix(body), 16))
        }
        Reference::Decimal(body) => push_code_point(units, parse_prefix(body, 10)),
        Reference::Named(name) => push_named(units, name, &token),
    }
}

fn resolve_strict(token: Token<'_>, units: &mut Vec<u16>) -> Result<()> {
    let body = match token.reference {
        Reference::Hexadecimal(body) | Reference::Decimal(body) => body,
        Reference::Named(name) => {
            push_named(units, name, &token);
            return Ok(());
        }
    };

    let radix = token.reference.radix();
    if body.is_empty() || !body.chars().all(|character| character.is_digit(radix)) {
        tracing::debug!(reference = token.text, offset = token.offset, "malformed reference");
        return Err(NcrError::MalformedReference {
            offset: token.offset,
            reference: token.text.to_string(),
        });
    }

    let value = parse_prefix(body, radix);
    if value > MAX_CODE_POINT || (0xD800..=0xDFFF).contains(&value) {
        tracing::debug!(value, offset = token.offset, "reference to invalid code point");
        return Err(NcrError::InvalidCodePoint {
            offset: token.offset,
            value,
        });
    }

    push_code_point(units, value);
    Ok(())
}

fn push_named(units: &mut Vec<u16>, name: &str, token: &Token<'_>) {
    match entities::lookup(name) {
        Some(unit) => units.push(unit),
        None => {
            tracing::debug!(entity = name, offset = token.offset, "unknown entity left as is");
            units.extend(token.text.encode_utf16());
        }
    }
}

fn push_code_point(units: &mut Vec<u16>, value: u32) {
    if value < SUPPLEMENTARY_BASE {
        units.push(value as u16);
    } else {
        units.extend(surrogate::code_point_to_pair(value));
    }
}

fn strip_hex_prefix(body: &str) -> &str {
    body.strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .unwrap_or(body)
}

fn parse_prefix(body: &str, radix: u32) -> u32 {
    body.chars()
        .map_while(|character| character.to_digit(radix))
        .fold(0u32, |value, digit| {
            value.saturating_mul(radix).saturating_add(digit)
        })
}
