//! Delimited scalar reader over borrowed text.
//!
//! `TextReader` behaves like a formatted input stream: every read first
//! checks the stream state, and once a read fails all later reads in the
//! chain are no-ops. Callers inspect `is_ok()`/`check()` after a parse.
//!
//! Whitespace is skipped only by `sentry()`; literal and scalar reads are
//! strict, so `(3; 4)` is rejected while `  (3;4)` is accepted by the point
//! codec (which opens with a sentry).

use super::ReadText;
use crate::error::{ParseError, ParseResult};

#[derive(Clone, Debug)]
pub struct TextReader<'a> {
    src: &'a str,
    pos: usize,
    eof: bool,
    failed: bool,
    error: Option<ParseError>,
}

impl<'a> TextReader<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            eof: false,
            failed: false,
            error: None,
        }
    }

    /// Neither end-of-input nor failure has been observed.
    #[inline]
    pub fn good(&self) -> bool {
        !self.eof && !self.failed
    }

    /// No read has failed (end-of-input alone is not a failure).
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.failed
    }

    #[inline]
    pub fn failed(&self) -> bool {
        self.failed
    }

    #[inline]
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// First failure recorded since construction or the last `clear()`.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Reset state bits and the recorded error; the cursor stays put.
    pub fn clear(&mut self) {
        self.eof = false;
        self.failed = false;
        self.error = None;
    }

    /// Discard input through the next `'\n'` (or to the end).
    pub fn skip_line(&mut self) {
        match self.rest().find('\n') {
            Some(i) => self.pos += i + 1,
            None => {
                self.pos = self.src.len();
                self.eof = true;
            }
        }
    }

    /// Readiness check performed before composite reads.
    ///
    /// Fails a stream that is not good; otherwise skips whitespace and fails
    /// if nothing is left.
    pub fn sentry(&mut self) -> bool {
        if !self.good() {
            self.fail_not_ready("input");
            return false;
        }
        let skipped = self.rest().len() - self.rest().trim_start_matches(is_space).len();
        self.pos += skipped;
        if self.at_end() {
            self.eof = true;
            self.fail(ParseError::UnexpectedEnd {
                offset: self.pos,
                expected: "input",
            });
            return false;
        }
        true
    }

    /// Consume exactly `expected`, or fail without consuming.
    pub fn expect(&mut self, expected: char) -> &mut Self {
        if !self.good() {
            self.fail_not_ready("delimiter");
            return self;
        }
        match self.rest().chars().next() {
            Some(c) if c == expected => self.pos += c.len_utf8(),
            Some(found) => self.fail(ParseError::Delimiter {
                offset: self.pos,
                expected,
                found,
            }),
            None => {
                self.eof = true;
                self.fail(ParseError::UnexpectedEnd {
                    offset: self.pos,
                    expected: "delimiter",
                });
            }
        }
        self
    }

    /// Read a signed decimal integer into `target`.
    pub fn int(&mut self, target: &mut i32) -> &mut Self {
        self.scalar(target, "integer")
    }

    /// Read an unsigned decimal size into `target` (`+` allowed, `-` rejected).
    pub fn size(&mut self, target: &mut usize) -> &mut Self {
        self.scalar(target, "size")
    }

    /// Read a composite value through its `ReadText` implementation.
    pub fn read<T: ReadText>(&mut self, target: &mut T) -> &mut Self {
        T::read_text(self, target);
        self
    }

    /// Recorded failure as a `Result`.
    pub fn check(&self) -> ParseResult<()> {
        if !self.failed {
            return Ok(());
        }
        Err(self.error.clone().unwrap_or(ParseError::UnexpectedEnd {
            offset: self.pos,
            expected: "input",
        }))
    }

    /// `check()`, then require that only whitespace remains.
    pub fn finish(&mut self) -> ParseResult<()> {
        self.check()?;
        let trimmed = self.rest().trim_start_matches(is_space);
        self.pos = self.src.len() - trimmed.len();
        if !trimmed.is_empty() {
            let err = ParseError::Trailing { offset: self.pos };
            self.fail(err.clone());
            return Err(err);
        }
        Ok(())
    }

    fn scalar<T>(&mut self, target: &mut T, kind: &'static str) -> &mut Self
    where
        T: std::str::FromStr + Default,
    {
        if !self.good() {
            self.fail_not_ready(kind);
            return self;
        }
        let rest = self.rest();
        if rest.is_empty() {
            self.eof = true;
            *target = T::default();
            self.fail(ParseError::UnexpectedEnd {
                offset: self.pos,
                expected: kind,
            });
            return self;
        }
        let len = token_len(rest);
        match rest[..len].parse::<T>() {
            Ok(v) if len > 0 => {
                *target = v;
                self.pos += len;
                if self.at_end() {
                    self.eof = true;
                }
            }
            _ => {
                *target = T::default();
                self.fail(ParseError::Scalar {
                    offset: self.pos,
                    kind,
                });
            }
        }
        self
    }

    fn fail_not_ready(&mut self, expected: &'static str) {
        let offset = self.pos;
        self.fail(ParseError::UnexpectedEnd { offset, expected });
    }

    /// Set the failed bit; only the first error is kept.
    fn fail(&mut self, err: ParseError) {
        self.failed = true;
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

#[inline]
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Length of an optionally signed run of ASCII digits at the start of `s`.
fn token_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_consumes_matching_delimiter() {
        let mut r = TextReader::new("(;");
        r.expect('(').expect(';');
        assert!(r.good());
        assert_eq!(r.position(), 2);
    }

    #[test]
    fn expect_mismatch_fails_without_consuming() {
        let mut r = TextReader::new("x3");
        r.expect('(');
        assert!(r.failed());
        assert_eq!(r.position(), 0);
        assert_eq!(
            r.error(),
            Some(&ParseError::Delimiter {
                offset: 0,
                expected: '(',
                found: 'x'
            })
        );
    }

    #[test]
    fn expect_does_not_skip_whitespace() {
        let mut r = TextReader::new(" (");
        r.expect('(');
        assert!(r.failed());
    }

    #[test]
    fn expect_on_exhausted_input_sets_eof_and_fail() {
        let mut r = TextReader::new("");
        r.expect(')');
        assert!(r.failed() && r.eof());
    }

    #[test]
    fn int_reads_signed_tokens() {
        let mut r = TextReader::new("-12;+7");
        let (mut a, mut b) = (0, 0);
        r.int(&mut a).expect(';').int(&mut b);
        assert!(r.is_ok());
        assert_eq!((a, b), (-12, 7));
        // token ran to the end of input
        assert!(r.eof());
    }

    #[test]
    fn int_rejects_missing_digits_and_zeroes_target() {
        let mut r = TextReader::new("-;");
        let mut v = 99;
        r.int(&mut v);
        assert!(r.failed());
        assert_eq!(v, 0);
        assert_eq!(r.position(), 0);
        assert!(matches!(r.error(), Some(ParseError::Scalar { kind: "integer", .. })));
    }

    #[test]
    fn int_overflow_fails() {
        let mut r = TextReader::new("2147483648)");
        let mut v = 1;
        r.int(&mut v);
        assert!(r.failed());
        assert_eq!(v, 0);
    }

    #[test]
    fn size_rejects_negative() {
        let mut r = TextReader::new("-3 ");
        let mut n = 5usize;
        r.size(&mut n);
        assert!(r.failed());
        assert_eq!(n, 0);

        let mut r = TextReader::new("+3 ");
        r.size(&mut n);
        assert!(r.good());
        assert_eq!(n, 3);
    }

    #[test]
    fn failed_stream_makes_reads_no_ops() {
        let mut r = TextReader::new("x12");
        let mut v = 41;
        r.expect('(').int(&mut v);
        assert_eq!(v, 41);
        assert_eq!(r.position(), 0);
        // the first failure is the one reported
        assert!(matches!(r.error(), Some(ParseError::Delimiter { .. })));
    }

    #[test]
    fn sentry_skips_whitespace_and_detects_end() {
        let mut r = TextReader::new("  \t7");
        assert!(r.sentry());
        assert_eq!(r.rest(), "7");

        let mut r = TextReader::new("   ");
        assert!(!r.sentry());
        assert!(r.eof() && r.failed());
    }

    #[test]
    fn clear_and_skip_line_recover_from_bad_record() {
        let mut r = TextReader::new("bad\n5");
        let mut n = 0usize;
        r.size(&mut n);
        assert!(r.failed());
        r.clear();
        r.skip_line();
        r.size(&mut n);
        assert!(r.is_ok());
        assert_eq!(n, 5);
    }

    #[test]
    fn finish_rejects_trailing_input() {
        let mut r = TextReader::new("1 2");
        let mut n = 0usize;
        r.size(&mut n);
        assert_eq!(r.finish(), Err(ParseError::Trailing { offset: 2 }));

        let mut r = TextReader::new("1  \n");
        r.size(&mut n);
        assert_eq!(r.finish(), Ok(()));
    }
}
