//! Character classification tables.
//!
//! One 256-entry lookup table per multi-range class, built at compile
//! time; a table lookup replaces the multi-range `matches!` with a single
//! indexed read in the scanner's hot loops. Two-element classes (sign,
//! exponent marker, hex marker, parenthesis) stay as plain `matches!`.
//!
//! The sentinel byte (`0x00`) maps to `false` in every class, so
//! `Cursor::eat_while` over any classifier terminates at end of input.

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static WHITESPACE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b' ' | b'\t' | b'\r' | b'\n');
        i += 1;
    }
    table
};

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static DIGIT: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'0'..=b'9');
        i += 1;
    }
    table
};

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IDENT_START: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IDENT_CONTINUE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static HEX_DIGIT: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F');
        i += 1;
    }
    table
};

/// Space, tab, carriage return, or line feed.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    WHITESPACE[b as usize]
}

/// Decimal digit.
#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    DIGIT[b as usize]
}

/// `[A-Za-z_]`.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    IDENT_START[b as usize]
}

/// `[A-Za-z0-9_]`.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    IDENT_CONTINUE[b as usize]
}

/// Hexadecimal digit.
#[inline]
pub(crate) fn is_hex_digit(b: u8) -> bool {
    HEX_DIGIT[b as usize]
}

/// `+` or `-`.
#[inline]
pub(crate) fn is_sign(b: u8) -> bool {
    matches!(b, b'+' | b'-')
}

/// `e` or `E`.
#[inline]
pub(crate) fn is_exponent_marker(b: u8) -> bool {
    matches!(b, b'e' | b'E')
}

/// `x` or `X`.
#[inline]
pub(crate) fn is_hex_marker(b: u8) -> bool {
    matches!(b, b'x' | b'X')
}

/// `(` or `)`.
#[inline]
pub(crate) fn is_paren(b: u8) -> bool {
    matches!(b, b'(' | b')')
}

/// A digit, or a `.` immediately followed by a digit.
///
/// The lookahead admits leading-dot floats (`.5`) while a bare `.` falls
/// through to the invalid-character path.
#[inline]
pub(crate) fn is_number_start(current: u8, peek: u8) -> bool {
    is_digit(current) || (current == b'.' && is_digit(peek))
}

#[cfg(test)]
mod tests;
