// ASCII character classes used by every format rule.
//
// Rules work on the byte representation of the code. A multi-byte character
// contributes bytes outside both classes, so non-ASCII input fails the
// positional checks instead of panicking on a char-boundary slice.

pub fn all_letters(segment: &[u8]) -> bool {
    segment.iter().all(u8::is_ascii_alphabetic)
}

pub fn all_digits(segment: &[u8]) -> bool {
    segment.iter().all(u8::is_ascii_digit)
}
