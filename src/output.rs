//! The value produced by a test run.

use std::borrow::Cow;

/// Output under test, either text or raw bytes.
///
/// Both forms are written to a baseline byte-for-byte and are decoded to text
/// before escaping, so a byte slice equal to the UTF-8 encoding of a string
/// compares exactly like that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Output<'a> {
    /// The raw bytes as they are stored in a baseline.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Output::Text(text) => text.as_bytes(),
            Output::Bytes(bytes) => bytes,
        }
    }

    /// Textual interpretation. Invalid UTF-8 sequences become U+FFFD rather
    /// than being dropped.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Output::Text(text) => Cow::Borrowed(text),
            Output::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl<'a> From<&'a str> for Output<'a> {
    fn from(text: &'a str) -> Self {
        Output::Text(text)
    }
}

impl<'a> From<&'a String> for Output<'a> {
    fn from(text: &'a String) -> Self {
        Output::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Output<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Output::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Output<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Output::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Output<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Output::Bytes(bytes.as_slice())
    }
}
