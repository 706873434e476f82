use super::classes::{all_digits, all_letters};

// Electronic ID card: 2 letters, 5 digits, 2 letters.
pub fn is_valid_electronic_id_card(code: &str) -> bool {
    let code = code.as_bytes();
    code.len() == 9 && all_letters(&code[..2]) && all_digits(&code[2..7]) && all_letters(&code[7..])
}

// Paper ID card: 2 letters, 7 digits.
pub fn is_valid_paper_id_card(code: &str) -> bool {
    let code = code.as_bytes();
    code.len() == 9 && all_letters(&code[..2]) && all_digits(&code[2..])
}
