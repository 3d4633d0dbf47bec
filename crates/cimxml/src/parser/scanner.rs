//! Cursor-based tag scanner over one response buffer.
//!
//! The scanner never copies: every slice it hands out borrows directly from
//! the buffer it was created over, and the borrow checker ties those slices
//! to the buffer's lifetime. Extracted text therefore cannot outlive a parse
//! call. The original scratch state of the C scanner (pending end-tag flag
//! and id) survives as [`XmlScanner::pending_end`]; its null-terminate and
//! restore-slot trick does not, because length-delimited slices need no
//! terminator writes.

use memchr::{memchr, memmem};

use super::elements::ElemEnd;
use super::error::ScanError;

pub(crate) struct XmlScanner<'b> {
    text: &'b str,
    cur: usize,
    /// Implicit end tag produced by `/>` or `?>`; the lexer returns it
    /// before scanning any further text.
    pub(crate) pending_end: Option<ElemEnd>,
}

impl<'b> XmlScanner<'b> {
    pub(crate) fn new(text: &'b str) -> Self {
        XmlScanner { text, cur: 0, pending_end: None }
    }

    fn bytes(&self) -> &'b [u8] {
        self.text.as_bytes()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes().get(self.cur).copied()
    }

    /// Advances past characters `<= ' '` (space and all ASCII control
    /// characters).
    pub(crate) fn skip_ws(&mut self) {
        let b = self.bytes();
        while self.cur < b.len() && b[self.cur] <= b' ' {
            self.cur += 1;
        }
    }

    /// Consumes `c` if present at the cursor; no side effect on mismatch.
    pub(crate) fn eat_char(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.cur += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the exact text `s` if present at the cursor.
    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.text[self.cur..].starts_with(s) {
            self.cur += s.len();
            true
        } else {
            false
        }
    }

    /// Word match with the boundary rule: `w` matches only if the character
    /// after it is not alphanumeric, so `CLASS` never matches inside
    /// `CLASSNAME`.
    pub(crate) fn eat_word(&mut self, w: &str, case_sensitive: bool) -> bool {
        let rest = self.text[self.cur..].as_bytes();
        let l = w.len();
        if rest.len() < l {
            return false;
        }
        let head = &rest[..l];
        let matched = if case_sensitive {
            head == w.as_bytes()
        } else {
            head.eq_ignore_ascii_case(w.as_bytes())
        };
        if !matched || rest.get(l).is_some_and(u8::is_ascii_alphanumeric) {
            return false;
        }
        self.cur += l;
        true
    }

    /// Consumes up to the next `<`. Returns `false` if the next non-space
    /// character is anything else (including end of input); the token stream
    /// ends there.
    pub(crate) fn next_tag(&mut self) -> bool {
        self.skip_ws();
        self.eat_char(b'<')
    }

    /// Advances past the remainder of the current tag, consuming `>`.
    pub(crate) fn skip_to_close(&mut self) {
        match memchr(b'>', &self.bytes()[self.cur..]) {
            Some(off) => self.cur += off + 1,
            None => self.cur = self.text.len(),
        }
    }

    /// Reads a single- or double-quoted attribute value. The returned slice
    /// excludes the quotes.
    pub(crate) fn read_value(&mut self, element: &'static str) -> Result<&'b str, ScanError> {
        self.skip_ws();
        let quote = if self.eat_char(b'"') {
            b'"'
        } else if self.eat_char(b'\'') {
            b'\''
        } else {
            return Err(ScanError::ExpectedQuote { element });
        };
        let start = self.cur;
        match memchr(quote, &self.bytes()[start..]) {
            Some(off) => {
                self.cur = start + off + 1;
                Ok(&self.text[start..start + off])
            }
            None => Err(ScanError::UnterminatedValue { element }),
        }
    }

    /// Reads element text content up to the next `<`, trimmed of
    /// surrounding whitespace.
    ///
    /// `None` means an implicit end tag is pending: a self-closing element
    /// has no content. `Some("")` is genuinely empty content.
    pub(crate) fn read_content(&mut self) -> Option<&'b str> {
        if self.pending_end.is_some() {
            return None;
        }
        let start = self.cur;
        let end = match memchr(b'<', &self.bytes()[start..]) {
            Some(off) => start + off,
            None => self.text.len(),
        };
        self.cur = end;
        Some(self.text[start..end].trim_matches(|c: char| c <= ' '))
    }

    /// Skips a comment body; the cursor must be just past `<!--`.
    pub(crate) fn skip_comment(&mut self) -> Result<(), ScanError> {
        match memmem::find(&self.bytes()[self.cur..], b"-->") {
            Some(off) => {
                self.cur += off + 3;
                Ok(())
            }
            None => Err(ScanError::UnterminatedComment),
        }
    }

    /// A short excerpt of the unconsumed input, for diagnostics.
    pub(crate) fn snippet(&self, max: usize) -> String {
        self.text[self.cur..].chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eat_word_enforces_the_boundary_rule() {
        let mut xb = XmlScanner::new("CLASSNAME x");
        assert!(!xb.eat_word("CLASS", true));
        assert!(xb.eat_word("CLASSNAME", true));
    }

    #[test]
    fn eat_word_case_insensitive_matches_attribute_names() {
        let mut xb = XmlScanner::new("name=\"x\"");
        assert!(xb.eat_word("NAME", false));
        assert!(xb.eat_char(b'='));
    }

    #[test]
    fn eat_char_has_no_side_effect_on_mismatch() {
        let mut xb = XmlScanner::new("abc");
        assert!(!xb.eat_char(b'x'));
        assert!(xb.eat_char(b'a'));
    }

    #[test]
    fn read_value_accepts_both_quote_styles() {
        let mut xb = XmlScanner::new("\"double\" 'single'");
        assert_eq!(xb.read_value("T"), Ok("double"));
        assert_eq!(xb.read_value("T"), Ok("single"));
    }

    #[test]
    fn read_value_requires_a_quote() {
        let mut xb = XmlScanner::new("bare");
        assert_eq!(xb.read_value("T"), Err(ScanError::ExpectedQuote { element: "T" }));
    }

    #[test]
    fn read_value_detects_unterminated_values() {
        let mut xb = XmlScanner::new("\"never closed");
        assert_eq!(xb.read_value("T"), Err(ScanError::UnterminatedValue { element: "T" }));
    }

    #[test]
    fn read_content_trims_and_stops_at_tag() {
        let mut xb = XmlScanner::new("  some text\n</VALUE>");
        assert_eq!(xb.read_content(), Some("some text"));
        assert!(xb.next_tag());
    }

    #[test]
    fn read_content_empty_versus_no_content() {
        let mut xb = XmlScanner::new("</VALUE>");
        assert_eq!(xb.read_content(), Some(""));

        let mut xb = XmlScanner::new("");
        xb.pending_end = Some(ElemEnd::Value);
        assert_eq!(xb.read_content(), None);
    }

    #[test]
    fn content_aliases_the_buffer() {
        let text = String::from("<VALUE>abc</VALUE>");
        let mut xb = XmlScanner::new(&text);
        assert!(xb.next_tag());
        assert!(xb.eat_word("VALUE", true));
        assert!(xb.eat_char(b'>'));
        let content = xb.read_content().unwrap();
        assert_eq!(content, "abc");
        // Zero-copy: the slice points into the original allocation.
        let range = text.as_ptr() as usize..text.as_ptr() as usize + text.len();
        assert!(range.contains(&(content.as_ptr() as usize)));
    }

    #[test]
    fn slices_cannot_outlive_the_buffer() {
        // The borrow checker ties extracted slices to the buffer: this test
        // exists to keep that shape; moving `content` out of this scope does
        // not compile.
        let content;
        let text = String::from("<VALUE>abc</VALUE>");
        {
            let mut xb = XmlScanner::new(&text);
            assert!(xb.next_tag());
            assert!(xb.eat_word("VALUE", true));
            assert!(xb.eat_char(b'>'));
            content = xb.read_content().unwrap();
        }
        assert_eq!(content, "abc");
    }
}
