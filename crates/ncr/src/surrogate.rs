use crate::types::Radix;

pub const LEAD_MIN: u16 = 0xD800;
pub const LEAD_MAX: u16 = 0xDBFF;
pub const TRAIL_MIN: u16 = 0xDC00;
pub const TRAIL_MAX: u16 = 0xDFFF;

pub const SUPPLEMENTARY_BASE: u32 = 0x10000;

pub fn is_lead(unit: u16) -> bool {
    (LEAD_MIN..=LEAD_MAX).contains(&unit)
}

pub fn is_trail(unit: u16) -> bool {
    (TRAIL_MIN..=TRAIL_MAX).contains(&unit)
}

pub fn pair_to_code_point(lead: u16, trail: u16) -> Option<u32> {
    if !is_lead(lead) || !is_trail(trail) {
        return None;
    }

    let high = u32::from(lead - LEAD_MIN);
    let low = u32::from(trail - TRAIL_MIN);
    Some(high * 1024 + low + SUPPLEMENTARY_BASE)
}

// An invalid pair comes back as the two literal characters, with U+FFFD
// standing in for an unpaired surrogate.
pub fn pair_to_reference(lead: u16, trail: u16, radix: Radix) -> String {
    match pair_to_code_point(lead, trail) {
        Some(code_point) => format_reference(code_point, radix),
        None => String::from_utf16_lossy(&[lead, trail]),
    }
}

/// The caller guarantees `code_point >= 0x10000`. Nothing is validated:
/// anything else yields well-defined but meaningless units.
pub fn code_point_to_pair(code_point: u32) -> [u16; 2] {
    let offset = code_point.wrapping_sub(SUPPLEMENTARY_BASE);
    let lead = (offset / 1024).wrapping_add(u32::from(LEAD_MIN));
    let trail = (offset % 1024) + u32::from(TRAIL_MIN);
    [lead as u16, trail as u16]
}

pub(crate) fn format_reference(code_point: u32, radix: Radix) -> String {
    match radix {
        Radix::Decimal => format!("&#{code_point};"),
        Radix::Hexadecimal => format!("&#x{code_point:x};"),
    }
}
