//! As-you-type phone mask.
//!
//! Produces `+CC (AA) NNNNN-NNNN` progressively: punctuation appears only
//! once the digits it separates exist. Presentation only, never validation.

const COUNTRY_CODE: &str = "55";
const MAX_DIGITS: usize = 13;

// Digit offsets where the mask places its separators.
const AREA_START: usize = 2;
const LOCAL_START: usize = 4;
const SUFFIX_START: usize = 9;

/// Formats raw phone input.
///
/// Non-digits are discarded, the country code is forced when the input does
/// not start with it, and anything past 13 digits is dropped.
pub fn format_phone(input: &str) -> String {
    let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if !digits.is_empty() && !digits.starts_with(COUNTRY_CODE) {
        digits.insert_str(0, COUNTRY_CODE);
    }
    digits.truncate(MAX_DIGITS);

    let len = digits.len();
    if len <= AREA_START {
        return digits;
    }

    let mut out = format!(
        "+{} ({}",
        &digits[..AREA_START],
        &digits[AREA_START..len.min(LOCAL_START)]
    );
    if len > LOCAL_START {
        out.push_str(") ");
        out.push_str(&digits[LOCAL_START..len.min(SUFFIX_START)]);
    }
    if len > SUFFIX_START {
        out.push('-');
        out.push_str(&digits[SUFFIX_START..]);
    }
    out
}

/// Digits of a formatted phone, as used in `wa.me` links.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
