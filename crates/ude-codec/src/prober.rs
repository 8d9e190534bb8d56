use ude_core::{Charset, ProbingState};

/// One encoding hypothesis tested against a byte stream.
///
/// ## Mechanical Sympathy: Byte-at-a-Time Core
/// Implementors only define `feed_byte`. Group probers drive their members
/// byte by byte in one pass, so a verdict is always tied to an exact byte
/// and never to a chunk boundary.
pub trait Prober {
    fn feed_byte(&mut self, byte: u8) -> ProbingState;

    /// Feeds a chunk, stopping at the first terminal verdict.
    fn feed(&mut self, buf: &[u8]) -> ProbingState {
        for &byte in buf {
            if self.feed_byte(byte).is_terminal() {
                break;
            }
        }
        self.state()
    }

    fn state(&self) -> ProbingState;
    fn confidence(&self) -> f32;
    fn charset(&self) -> Option<Charset>;
    fn reset(&mut self);
}

/// Feeds `buf` and returns the index of the byte on which `prober` reached
/// `FoundIt`. Stops early on `NotMe`.
pub fn feed_until_found<P: Prober + ?Sized>(prober: &mut P, buf: &[u8]) -> Option<usize> {
    for (i, &byte) in buf.iter().enumerate() {
        match prober.feed_byte(byte) {
            ProbingState::FoundIt => return Some(i),
            ProbingState::NotMe => return None,
            ProbingState::Detecting => {}
        }
    }
    None
}

/// Separator emitted by the stream filters.
pub const SPACE: u8 = b' ';

/// Passes high bytes and collapses each run of ASCII bytes to one space.
///
/// Non-Latin language models only score high bytes; embedded ASCII words
/// (markup, loanwords, digits) become a single word break.
#[derive(Debug, Clone, Default)]
pub struct HighByteFilter {
    in_ascii_run: bool,
}

impl HighByteFilter {
    #[inline(always)]
    pub fn push(&mut self, byte: u8) -> Option<u8> {
        if byte >= 0x80 {
            self.in_ascii_run = false;
            Some(byte)
        } else if self.in_ascii_run {
            None
        } else {
            self.in_ascii_run = true;
            Some(SPACE)
        }
    }

    pub fn reset(&mut self) {
        self.in_ascii_run = false;
    }
}

/// Keeps high bytes and ASCII letters, collapses other ASCII runs to one
/// space and drops everything between `<` and `>`.
#[derive(Debug, Clone, Default)]
pub struct LatinFilter {
    in_tag: bool,
    in_break: bool,
}

impl LatinFilter {
    #[inline(always)]
    pub fn push(&mut self, byte: u8) -> Option<u8> {
        if self.in_tag {
            if byte == b'>' {
                self.in_tag = false;
            }
            return None;
        }
        if byte == b'<' {
            self.in_tag = true;
            return None;
        }
        if byte >= 0x80 || byte.is_ascii_alphabetic() {
            self.in_break = false;
            Some(byte)
        } else if self.in_break {
            None
        } else {
            self.in_break = true;
            Some(SPACE)
        }
    }

    pub fn reset(&mut self) {
        self.in_tag = false;
        self.in_break = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn high(buf: &[u8]) -> Vec<u8> {
        let mut f = HighByteFilter::default();
        buf.iter().filter_map(|&b| f.push(b)).collect()
    }

    fn latin(buf: &[u8]) -> Vec<u8> {
        let mut f = LatinFilter::default();
        buf.iter().filter_map(|&b| f.push(b)).collect()
    }

    #[test]
    fn high_byte_filter_drops_ascii_words() {
        assert_eq!(high(&[0xEE, 0x21, 0x6C, 0x21, 0xEE, 0x6C, 0x6C]), vec![0xEE, SPACE, 0xEE, SPACE]);
        assert_eq!(high(b"plain text"), vec![SPACE]);
    }

    #[test]
    fn latin_filter_keeps_letters() {
        assert_eq!(
            latin(&[0xBF, 0x68, 0x21, 0x21, 0x65, 0x6C, 0x6F, 0x21, 0x21]),
            vec![0xBF, b'h', SPACE, b'e', b'l', b'o', SPACE]
        );
    }

    #[test]
    fn latin_filter_skips_markup() {
        assert_eq!(latin(b"<p class=\"x\">caf\xE9</p>"), b"caf\xE9".to_vec());
    }

    #[test]
    fn filters_are_chunk_independent() {
        let input = b"ab \xE9\xE8 <b>x</b> 12\xC0";
        let whole = latin(input);
        let mut f = LatinFilter::default();
        let mut split = Vec::new();
        for chunk in input.chunks(3) {
            split.extend(chunk.iter().filter_map(|&b| f.push(b)));
        }
        assert_eq!(whole, split);
    }
}
