//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::CharClasses;

/// Sentinel byte shown past the last character while editing a string;
/// confirming it leaves edit mode. Rendered through its Latin-1 glyph, which
/// extended fonts carry.
pub const CHAR_ENTER: u8 = 0xB6;

/// Sentinel byte selectable while editing a character; confirming it removes
/// the character from the string. Always part of the edit cycle.
pub const CHAR_DELETE: u8 = 0xD7;

/// Returns `true` for the single-character editor's value set: space,
/// `A`-`Z`, `a`-`z` and `0`-`9`.
pub fn is_plain_char(c: u8) -> bool { c == b' ' || c.is_ascii_alphanumeric() }

/// Returns `true` if `c` belongs to the configured string-editor character
/// classes. Space and [`CHAR_DELETE`] are always valid.
pub fn is_edit_char(c: u8, classes: CharClasses) -> bool {
    if c == CHAR_DELETE || c == b' ' {
        return true;
    }
    if classes.intersects(CharClasses::DIGITS) && c.is_ascii_digit() {
        return true;
    }
    if classes.intersects(CharClasses::LOWER) && c.is_ascii_lowercase() {
        return true;
    }
    if classes.intersects(CharClasses::UPPER) && c.is_ascii_uppercase() {
        return true;
    }
    if classes.intersects(CharClasses::RESTRICTED_SPECIAL) && (b'!'..=b'/').contains(&c) {
        return true;
    }
    if classes.intersects(CharClasses::EXTENDED_SPECIAL) && ((b':'..=b'@').contains(&c) || (b'['..=b'`').contains(&c) || (b'{'..=b'~').contains(&c)) {
        return true;
    }
    false
}

/// Renders a buffer byte through its Latin-1 code point, which is how the
/// sentinel glyphs reach the extended font area.
pub(crate) fn glyph_str(byte: u8) -> String { char::from(byte).to_string() }

/// Byte buffer edited in place by the string editor.
///
/// `cap` is the size of the application's character array. Outside an edit
/// session the content stays at most `cap - 1` bytes, leaving headroom for
/// the temporary insert slot appended while editing; no operation ever grows
/// the buffer past `cap`.
#[derive(Clone, Debug)]
pub struct EditBuffer {
    bytes: Vec<u8>,
    cap: usize,
}

impl EditBuffer {
    /// Creates a buffer from `initial`, truncated to `cap - 1` bytes.
    /// Characters outside Latin-1 are replaced by `?`.
    pub fn new(initial: &str, cap: usize) -> Self {
        let mut bytes: Vec<u8> = initial.chars().map(|c| if (c as u32) < 256 { c as u32 as u8 } else { b'?' }).collect();
        bytes.truncate(cap.saturating_sub(1));
        Self { bytes, cap }
    }

    /// Current content length in bytes.
    pub fn len(&self) -> usize { self.bytes.len() }

    /// Returns `true` when the buffer holds no content.
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// Capacity of the backing character array.
    pub fn cap(&self) -> usize { self.cap }

    /// Raw content bytes.
    pub fn bytes(&self) -> &[u8] { &self.bytes }

    /// Byte at `index`, or a space when out of range.
    pub fn byte(&self, index: usize) -> u8 { self.bytes.get(index).copied().unwrap_or(b' ') }

    /// Overwrites the byte at `index`; out-of-range writes are dropped.
    pub fn set_byte(&mut self, index: usize, value: u8) {
        if let Some(b) = self.bytes.get_mut(index) {
            *b = value;
        }
    }

    /// Appends the insert-slot space if the backing array has room.
    /// Returns `true` on success.
    pub fn push_space(&mut self) -> bool {
        if self.bytes.len() < self.cap {
            self.bytes.push(b' ');
            true
        } else {
            false
        }
    }

    /// Drops the final byte (the insert slot, on edit exit).
    pub fn pop(&mut self) { self.bytes.pop(); }

    /// Removes the byte at `index`, shifting the remainder left.
    pub fn remove(&mut self, index: usize) {
        if index < self.bytes.len() {
            self.bytes.remove(index);
        }
    }

    /// Content as displayable text, bytes mapped through Latin-1.
    pub fn display(&self) -> String { self.bytes.iter().map(|&b| char::from(b)).collect() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_chars_are_space_and_alnum() {
        assert!(is_plain_char(b' '));
        assert!(is_plain_char(b'A'));
        assert!(is_plain_char(b'z'));
        assert!(is_plain_char(b'0'));
        assert!(!is_plain_char(b'!'));
        assert!(!is_plain_char(0x1f));
        assert!(!is_plain_char(CHAR_DELETE));
    }

    #[test]
    fn delete_and_space_are_always_editable() {
        assert!(is_edit_char(CHAR_DELETE, CharClasses::NONE));
        assert!(is_edit_char(b' ', CharClasses::NONE));
        assert!(!is_edit_char(b'a', CharClasses::NONE));
    }

    #[test]
    fn classes_gate_their_ranges() {
        assert!(is_edit_char(b'5', CharClasses::DIGITS));
        assert!(!is_edit_char(b'5', CharClasses::LOWER));
        assert!(is_edit_char(b'q', CharClasses::LOWER));
        assert!(is_edit_char(b'Q', CharClasses::UPPER));
        assert!(is_edit_char(b'!', CharClasses::RESTRICTED_SPECIAL));
        assert!(is_edit_char(b'/', CharClasses::RESTRICTED_SPECIAL));
        assert!(!is_edit_char(b':', CharClasses::RESTRICTED_SPECIAL));
        assert!(is_edit_char(b':', CharClasses::EXTENDED_SPECIAL));
        assert!(is_edit_char(b'`', CharClasses::EXTENDED_SPECIAL));
        assert!(is_edit_char(b'~', CharClasses::EXTENDED_SPECIAL));
        assert!(!is_edit_char(0x7f, CharClasses::all()));
    }

    #[test]
    fn buffer_truncates_to_capacity_headroom() {
        let buf = EditBuffer::new("abcdefgh", 5);
        assert_eq!(buf.bytes(), b"abcd");
        assert_eq!(buf.cap(), 5);
    }

    #[test]
    fn push_space_stops_at_capacity() {
        let mut buf = EditBuffer::new("abcd", 5);
        assert!(buf.push_space());
        assert_eq!(buf.len(), 5);
        assert!(!buf.push_space());
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn remove_shifts_left() {
        let mut buf = EditBuffer::new("abc", 8);
        buf.remove(1);
        assert_eq!(buf.bytes(), b"ac");
        buf.remove(7);
        assert_eq!(buf.bytes(), b"ac");
    }

    #[test]
    fn out_of_range_reads_are_spaces() {
        let buf = EditBuffer::new("x", 4);
        assert_eq!(buf.byte(0), b'x');
        assert_eq!(buf.byte(3), b' ');
    }
}
