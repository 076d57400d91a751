use crate::error::{IoContext, PairFilterError};
use crate::options::FilterOptions;
use crate::record::SamLine;
use crate::util::open_file;

use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Line-by-line SAM source (plain text), streaming.
///
/// Lines end at `\n`, `\r` or `\r\n`.
pub struct SamLineReader {
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
    // Previous line ended in '\r'; a '\n' right after it belongs to that terminator.
    skip_lf: bool,
}

impl SamLineReader {
    /// Open from a file path.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        opts: &FilterOptions,
    ) -> Result<Self, PairFilterError> {
        let path = path.as_ref();
        let f = open_file(path).map_err(|source| PairFilterError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("reading SAM from {}", path.display());

        Ok(Self::from_bufread(BufReader::with_capacity(opts.read_buffer, f)))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory buffers, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
            skip_lf: false,
        }
    }

    /// Next classified line; `None` at end of input.
    pub fn next_line(&mut self) -> Option<Result<SamLine, PairFilterError>> {
        let mut buf = Vec::with_capacity(256);
        match self.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(SamLine::from_bytes(buf))),
            Err(e) => Some(Err(PairFilterError::read_err(e, self.ctx()))),
        }
    }

    // Returns raw bytes consumed for this line; `buf` gets the line without its terminator.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        if self.skip_lf {
            self.skip_lf = false;
            if self.rdr.fill_buf()?.first() == Some(&b'\n') {
                self.rdr.consume(1);
                self.byte_pos += 1;
            }
        }

        let mut n = 0usize;
        loop {
            let avail = match self.rdr.fill_buf() {
                Ok(avail) => avail,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if avail.is_empty() {
                break;
            }
            match avail.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let cr = avail[i] == b'\r';
                    buf.extend_from_slice(&avail[..i]);
                    self.rdr.consume(i + 1);
                    n += i + 1;
                    self.skip_lf = cr;
                    break;
                }
                None => {
                    let len = avail.len();
                    buf.extend_from_slice(avail);
                    self.rdr.consume(len);
                    n += len;
                }
            }
        }

        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
        }
        Ok(n)
    }

    /// Lines consumed so far.
    #[inline]
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    /// Bytes consumed so far, line terminators included.
    #[inline]
    pub fn byte_pos(&self) -> u64 {
        self.byte_pos
    }

    #[inline]
    pub(crate) fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for SamLineReader {
    type Item = Result<SamLine, PairFilterError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SamRecord;
    use std::io::Cursor;

    fn lines(input: &[u8]) -> Vec<Vec<u8>> {
        SamLineReader::from_bufread(Cursor::new(input.to_vec()))
            .map(|l| l.unwrap().as_bytes().to_vec())
            .collect()
    }

    #[test]
    fn strips_crlf_and_trailing_blanks() {
        let input = b"@HD\tVN:1.6\r\nr1\tA \t\r\n".to_vec();
        let mut r = SamLineReader::from_bufread(Cursor::new(input));
        assert_eq!(
            r.next_line().unwrap().unwrap(),
            SamLine::Header(b"@HD\tVN:1.6".to_vec())
        );
        assert_eq!(
            r.next_line().unwrap().unwrap(),
            SamLine::Record(SamRecord::new(b"r1\tA".to_vec()))
        );
        assert!(r.next_line().is_none());
        assert_eq!(r.line_num(), 2);
        assert_eq!(r.byte_pos(), 20);
    }

    #[test]
    fn bare_cr_ends_a_line() {
        assert_eq!(lines(b"R1\tX\rR1\tY\r"), vec![b"R1\tX".to_vec(), b"R1\tY".to_vec()]);
    }

    #[test]
    fn mixed_terminators() {
        assert_eq!(
            lines(b"a\r\nb\rc\nd"),
            vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec(), b"d".to_vec()]
        );
        // '\r\r' is two terminators, so the second line is empty
        assert_eq!(lines(b"a\r\rb"), vec![b"a".to_vec(), Vec::new(), b"b".to_vec()]);
    }

    #[test]
    fn crlf_split_across_buffer_fill() {
        let rdr = BufReader::with_capacity(3, Cursor::new(b"ab\r\ncd\r\n".to_vec()));
        let got: Vec<Vec<u8>> = SamLineReader::from_bufread(rdr)
            .map(|l| l.unwrap().as_bytes().to_vec())
            .collect();
        assert_eq!(got, vec![b"ab".to_vec(), b"cd".to_vec()]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let got = lines(b"a\tx\nb\ty");
        assert_eq!(got.len(), 2);
        assert_eq!(got[1], b"b\ty");
    }

    #[test]
    fn leading_whitespace_is_stripped() {
        let mut r = SamLineReader::from_bufread(Cursor::new(b"  @HD\tVN:1.6\n".to_vec()));
        let line = r.next_line().unwrap().unwrap();
        assert!(line.is_header());
        assert_eq!(line.as_bytes(), b"@HD\tVN:1.6");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let mut r =
            SamLineReader::from_bufread(Cursor::new(vec![b'r', 0xFF, b'\t', 0xFE, b'\n']));
        match r.next_line().unwrap().unwrap() {
            SamLine::Record(rec) => {
                assert_eq!(rec.read_name(), &[b'r', 0xFF]);
                assert_eq!(rec.as_bytes(), &[b'r', 0xFF, b'\t', 0xFE]);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn missing_path_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.sam");
        let err = match SamLineReader::from_path(&missing, &FilterOptions::default()) {
            Ok(_) => panic!("opened a missing file"),
            Err(e) => e,
        };
        assert!(matches!(err, PairFilterError::OpenInput { .. }));
    }
}
