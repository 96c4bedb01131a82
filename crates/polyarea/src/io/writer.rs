//! Flag-aware text writer and its scoped flag guard.
//!
//! Flags are sticky on the writer, like stream format state. Codecs that
//! need canonical output take a `FmtGuard`, reset the flags, write, and let
//! the guard put the caller's flags back, on the error path too.

use std::fmt::{self, Write};
use std::ops::{Deref, DerefMut};

/// Sticky formatting state applied to scalar writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FmtFlags {
    /// Prefix non-negative integers with `+`.
    pub show_pos: bool,
    /// Minimum field width; scalars are right-aligned with spaces.
    pub width: usize,
}

#[derive(Debug)]
pub struct TextWriter<W> {
    inner: W,
    flags: FmtFlags,
}

impl<W: Write> TextWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            flags: FmtFlags::default(),
        }
    }

    #[inline]
    pub fn flags(&self) -> FmtFlags {
        self.flags
    }

    #[inline]
    pub fn set_flags(&mut self, flags: FmtFlags) {
        self.flags = flags;
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Snapshot the current flags; they are restored when the guard drops.
    pub fn guard(&mut self) -> FmtGuard<'_, W> {
        let saved = self.flags;
        FmtGuard {
            writer: self,
            saved,
        }
    }

    #[inline]
    pub fn char(&mut self, c: char) -> fmt::Result {
        self.inner.write_char(c)
    }

    pub fn int(&mut self, v: i32) -> fmt::Result {
        let FmtFlags { show_pos, width } = self.flags;
        if show_pos {
            write!(self.inner, "{v:>+width$}")
        } else {
            write!(self.inner, "{v:>width$}")
        }
    }

    pub fn size(&mut self, v: usize) -> fmt::Result {
        let width = self.flags.width;
        write!(self.inner, "{v:>width$}")
    }

    /// Write a composite value through its `WriteText` implementation.
    pub fn write<T: super::WriteText + ?Sized>(&mut self, value: &T) -> fmt::Result {
        value.write_text(self)
    }
}

/// Scoped flag snapshot; derefs to the guarded writer.
pub struct FmtGuard<'a, W: Write> {
    writer: &'a mut TextWriter<W>,
    saved: FmtFlags,
}

impl<W: Write> Deref for FmtGuard<'_, W> {
    type Target = TextWriter<W>;
    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<W: Write> DerefMut for FmtGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl<W: Write> Drop for FmtGuard<'_, W> {
    fn drop(&mut self) {
        self.writer.flags = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `budget` chars, then errors.
    struct Limited {
        buf: String,
        budget: usize,
    }

    impl Write for Limited {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if s.len() > self.budget {
                return Err(fmt::Error);
            }
            self.budget -= s.len();
            self.buf.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn flags_apply_to_scalars() {
        let mut w = TextWriter::new(String::new());
        w.set_flags(FmtFlags {
            show_pos: true,
            width: 4,
        });
        w.int(7).unwrap();
        w.char('|').unwrap();
        w.int(-7).unwrap();
        w.char('|').unwrap();
        w.size(12).unwrap();
        assert_eq!(w.into_inner(), "  +7|  -7|  12");
    }

    #[test]
    fn guard_restores_flags_on_drop() {
        let caller = FmtFlags {
            show_pos: true,
            width: 3,
        };
        let mut w = TextWriter::new(String::new());
        w.set_flags(caller);
        {
            let mut g = w.guard();
            g.set_flags(FmtFlags::default());
            g.int(5).unwrap();
            assert_eq!(g.flags(), FmtFlags::default());
        }
        assert_eq!(w.flags(), caller);
        assert_eq!(w.get_ref(), "5");
    }

    #[test]
    fn guard_restores_flags_after_interrupted_write() {
        fn emit<W: Write>(w: &mut TextWriter<W>) -> fmt::Result {
            let mut g = w.guard();
            g.set_flags(FmtFlags::default());
            g.int(1)?;
            g.int(22)?;
            g.int(333)?;
            Ok(())
        }
        let caller = FmtFlags {
            show_pos: false,
            width: 9,
        };
        let mut w = TextWriter::new(Limited {
            buf: String::new(),
            budget: 3,
        });
        w.set_flags(caller);
        assert!(emit(&mut w).is_err());
        assert_eq!(w.flags(), caller);
        assert_eq!(w.get_ref().buf, "122");
    }
}
