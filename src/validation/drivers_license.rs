use super::classes::{all_digits, all_letters};
use crate::models::ProvinceRegistry;

// Letters banned at position 5 of the new UCO schema; printed, they are too
// easy to mistake for the digits 4, 0, 0 and 1.
const FORBIDDEN: &[u8] = b"AOQI";

// New UCO drivers' license: "U1", 3 digits, one unambiguous letter, 3 digits,
// one trailing letter.
pub fn is_valid_new_uco_license(code: &str) -> bool {
    let code = code.as_bytes();
    code.len() == 10
        && code.starts_with(b"U1")
        && all_digits(&code[2..5])
        && code[5].is_ascii_alphabetic()
        && !FORBIDDEN.contains(&code[5])
        && all_digits(&code[6..9])
        && code[9].is_ascii_alphabetic()
}

// Old UCO drivers' license: "U1", fully numeric middle segment, one trailing
// letter.
pub fn is_valid_old_uco_license(code: &str) -> bool {
    let code = code.as_bytes();
    code.len() == 10
        && code.starts_with(b"U1")
        && all_digits(&code[2..9])
        && code[9].is_ascii_alphabetic()
}

// Province drivers' license: a registered 2-letter province code, 7 digits,
// one trailing letter. The province lookup goes through the registry so new
// provinces can be added without touching this rule.
pub fn is_valid_province_license(code: &str, provinces: &ProvinceRegistry) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 10
        && all_letters(&bytes[..2])
        && all_digits(&bytes[2..9])
        && bytes[9].is_ascii_alphabetic()
        && provinces.contains(&code[..2])
}
