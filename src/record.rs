use crate::util::trim_bounds;

/// A data line, kept as raw bytes with the read name located up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamRecord {
    text: Vec<u8>,
    name_len: usize,
}

impl SamRecord {
    /// Read name is everything before the first tab, or the whole line without one.
    pub fn new(text: Vec<u8>) -> Self {
        let name_len = text.iter().position(|&b| b == b'\t').unwrap_or(text.len());
        Self { text, name_len }
    }

    #[inline]
    pub fn read_name(&self) -> &[u8] {
        &self.text[..self.name_len]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.text
    }

    #[inline]
    pub fn same_read(&self, other: &SamRecord) -> bool {
        self.read_name() == other.read_name()
    }
}

/// One input line with surrounding whitespace stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamLine {
    Header(Vec<u8>),
    Record(SamRecord),
}

impl SamLine {
    /// Strip leading and trailing whitespace, then classify on a leading `@`.
    pub fn from_bytes(mut text: Vec<u8>) -> Self {
        let (start, end) = trim_bounds(&text);
        text.truncate(end);
        text.drain(..start);
        if text.first() == Some(&b'@') {
            SamLine::Header(text)
        } else {
            SamLine::Record(SamRecord::new(text))
        }
    }

    #[inline]
    pub fn is_header(&self) -> bool {
        matches!(self, SamLine::Header(_))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            SamLine::Header(h) => h,
            SamLine::Record(r) => r.as_bytes(),
        }
    }
}
