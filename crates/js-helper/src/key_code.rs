//! Keyboard key-code translation.
//!
//! Key codes for letters (65..=90), top-row digits (48..=57) and space (32)
//! already coincide with their ASCII codes; everything else that produces a
//! printable character is mapped through the tables below.

/// Number pad operators: `*`, `+`, `-`, `.`, `/`.
const NUMPAD_OPERATORS: [(u16, u16); 5] = [(106, 42), (107, 43), (109, 45), (110, 46), (111, 47)];

/// Punctuation keys without shift.
const PUNCTUATION: [(u16, u16); 11] = [
    (186, 59),  // ;
    (187, 61),  // =
    (188, 44),  // ,
    (189, 45),  // -
    (190, 46),  // .
    (191, 47),  // /
    (192, 96),  // `
    (219, 91),  // [
    (220, 92),  // \
    (221, 93),  // ]
    (222, 39),  // '
];

/// Punctuation keys with shift held.
const SHIFTED_PUNCTUATION: [(u16, u16); 11] = [
    (186, 58),  // :
    (187, 43),  // +
    (188, 60),  // <
    (189, 95),  // _
    (190, 62),  // >
    (191, 63),  // ?
    (192, 126), // ~
    (219, 123), // {
    (220, 124), // |
    (221, 125), // }
    (222, 34),  // "
];

const NUMPAD_DIGITS: std::ops::RangeInclusive<u16> = 96..=105;
const UPPERCASE_LETTERS: std::ops::RangeInclusive<u16> = 65..=90;

fn lookup(table: &[(u16, u16)], key_code: u16) -> Option<u16> {
    table
        .iter()
        .find(|(code, _)| *code == key_code)
        .map(|(_, ascii)| *ascii)
}

/// Converts a keyboard event key code to the ASCII code of the character it
/// types. Codes without a rule are returned unchanged.
///
/// Rules apply in order: number pad digits, number pad operators, shifted
/// punctuation (shift held), plain punctuation (shift not held), then letters
/// lowercased when shift is not held.
///
/// # Examples
///
/// ```
/// use js_helper::convert_key_code_to_ascii_code;
///
/// assert_eq!(convert_key_code_to_ascii_code(65, false), 97); // a
/// assert_eq!(convert_key_code_to_ascii_code(65, true), 65);  // A
/// assert_eq!(convert_key_code_to_ascii_code(187, true), 43); // +
/// assert_eq!(convert_key_code_to_ascii_code(99, false), 51); // 3 on the number pad
/// ```
pub fn convert_key_code_to_ascii_code(key_code: u16, shift_key: bool) -> u16 {
    if NUMPAD_DIGITS.contains(&key_code) {
        return key_code - 48;
    }
    if let Some(ascii) = lookup(&NUMPAD_OPERATORS, key_code) {
        return ascii;
    }
    if shift_key {
        if let Some(ascii) = lookup(&SHIFTED_PUNCTUATION, key_code) {
            return ascii;
        }
    } else {
        if let Some(ascii) = lookup(&PUNCTUATION, key_code) {
            return ascii;
        }
        if UPPERCASE_LETTERS.contains(&key_code) {
            return key_code + 32;
        }
    }
    key_code
}

/// Like [`convert_key_code_to_ascii_code`], but yields the character when the
/// result is printable ASCII.
pub fn convert_key_code_to_char(key_code: u16, shift_key: bool) -> Option<char> {
    let code = convert_key_code_to_ascii_code(key_code, shift_key);
    match u8::try_from(code) {
        Ok(byte @ 32..=126) => Some(char::from(byte)),
        _ => None,
    }
}
