//! Cursor buffer over immutable source text
//!
//! The buffer keeps two byte offsets into the text: `mark`, where the scan
//! of the current token began, and `position`, how far the scan has read.
//! Every movement is by whole characters. Reading past the end yields the
//! `'\0'` sentinel; moving past the end clamps.

/// End-of-input sentinel returned by `peek` and `read_char`
pub const EOF_CHAR: char = '\0';

#[derive(Debug, Clone)]
pub struct Buffer<'a> {
    text: &'a str,
    position: usize,
    mark: usize,
}

impl<'a> Buffer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: 0,
            mark: 0,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the read position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset where the current scan started
    pub fn mark(&self) -> usize {
        self.mark
    }

    /// Bytes read since the mark
    pub fn scanned(&self) -> usize {
        self.position - self.mark
    }

    /// Text read since the mark
    pub fn scanned_text(&self) -> &'a str {
        &self.text[self.mark..self.position]
    }

    /// Text not read yet
    pub fn remaining(&self) -> &'a str {
        &self.text[self.position..]
    }

    /// Character `offset` places ahead of the read position, or `'\0'`
    pub fn peek(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Reads one character, or returns `'\0'` at the end
    pub fn read_char(&mut self) -> char {
        match self.remaining().chars().next() {
            Some(c) => {
                self.position += c.len_utf8();
                c
            }
            None => EOF_CHAR,
        }
    }

    /// Reads up to `count` characters
    pub fn read(&mut self, count: usize) -> &'a str {
        let start = self.position;
        self.skip(count);
        &self.text[start..self.position]
    }

    /// Advances `count` characters, stopping at the end
    pub fn skip(&mut self, count: usize) {
        let advance: usize = self
            .remaining()
            .chars()
            .take(count)
            .map(char::len_utf8)
            .sum();
        self.position += advance;
    }

    /// Consumes `expected` if it is the next character
    pub fn expect(&mut self, expected: char) -> bool {
        if expected != EOF_CHAR && self.peek(0) == expected {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the remaining text starts with it
    pub fn expect_str(&mut self, expected: &str) -> bool {
        if !expected.is_empty() && self.remaining().starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// True if the next character is one of `chars`
    pub fn is_one_of(&self, chars: &str) -> bool {
        let c = self.peek(0);
        c != EOF_CHAR && chars.contains(c)
    }

    /// Consumes and returns the next character if it is one of `chars`
    pub fn one_of(&mut self, chars: &str) -> Option<char> {
        if self.is_one_of(chars) {
            Some(self.read_char())
        } else {
            None
        }
    }

    /// Moves the read position back to the mark
    pub fn rewind(&mut self) {
        self.position = self.mark;
    }

    /// Commits everything read so far: the mark catches up with the position
    pub fn reset(&mut self) {
        self.mark = self.position;
    }

    /// Moves the read position back `count` characters, never before the mark
    pub fn partial_rewind(&mut self, count: usize) {
        let back: usize = self
            .scanned_text()
            .chars()
            .rev()
            .take(count)
            .map(char::len_utf8)
            .sum();
        self.position -= back;
    }

    /// True before anything has been read or committed
    pub fn at_top(&self) -> bool {
        self.position == 0
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_read() {
        let mut buffer = Buffer::new("ab");
        assert_eq!(buffer.peek(0), 'a');
        assert_eq!(buffer.peek(1), 'b');
        assert_eq!(buffer.peek(2), EOF_CHAR);
        assert_eq!(buffer.read_char(), 'a');
        assert_eq!(buffer.read_char(), 'b');
        assert_eq!(buffer.read_char(), EOF_CHAR);
        assert!(buffer.at_end());
    }

    #[test]
    fn test_skip_clamps_to_end() {
        let mut buffer = Buffer::new("abc");
        buffer.skip(10);
        assert_eq!(buffer.position(), 3);
        assert_eq!(buffer.scanned_text(), "abc");
    }

    #[test]
    fn test_rewind_and_reset() {
        let mut buffer = Buffer::new("hello world");
        buffer.skip(5);
        assert_eq!(buffer.scanned(), 5);
        buffer.rewind();
        assert_eq!(buffer.position(), 0);
        buffer.skip(6);
        buffer.reset();
        assert_eq!(buffer.mark(), 6);
        assert_eq!(buffer.scanned_text(), "");
        assert_eq!(buffer.read(5), "world");
    }

    #[test]
    fn test_partial_rewind_stops_at_mark() {
        let mut buffer = Buffer::new("abcdef");
        buffer.skip(2);
        buffer.reset();
        buffer.skip(3);
        buffer.partial_rewind(1);
        assert_eq!(buffer.scanned_text(), "cd");
        buffer.partial_rewind(10);
        assert_eq!(buffer.position(), 2);
    }

    #[test]
    fn test_multibyte_movement() {
        let mut buffer = Buffer::new("é中x");
        assert_eq!(buffer.peek(1), '中');
        buffer.skip(2);
        assert_eq!(buffer.scanned_text(), "é中");
        buffer.partial_rewind(1);
        assert_eq!(buffer.scanned_text(), "é");
    }

    #[test]
    fn test_expect_and_one_of() {
        let mut buffer = Buffer::new("=>x");
        assert!(!buffer.expect('>'));
        assert!(buffer.expect('='));
        assert!(buffer.is_one_of("<>"));
        assert_eq!(buffer.one_of("<>"), Some('>'));
        assert_eq!(buffer.one_of("<>"), None);
        assert!(!buffer.expect_str("xy"));
        assert!(buffer.expect_str("x"));
        assert!(buffer.at_end());
        assert!(!buffer.is_one_of("\0"));
    }

    #[test]
    fn test_at_top() {
        let mut buffer = Buffer::new("#!");
        assert!(buffer.at_top());
        buffer.skip(1);
        assert!(!buffer.at_top());
        buffer.rewind();
        assert!(buffer.at_top());
    }
}
