use super::classes::{all_digits, all_letters};

// Passport: 2 letters, 9 digits.
pub fn is_valid_passport(code: &str) -> bool {
    let code = code.as_bytes();
    code.len() == 11 && all_letters(&code[..2]) && all_digits(&code[2..])
}
