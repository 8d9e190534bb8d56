use ude_core::{Charset, ProbingState, SURE_CONFIDENCE};

use crate::prober::Prober;

/// Byte-order marks, longest first so a longer mark shadows its prefix.
const BOMS: [(&[u8], Charset); 7] = [
    (&[0x00, 0x00, 0xFE, 0xFF], Charset::Utf32Be),
    (&[0x00, 0x00, 0xFF, 0xFE], Charset::Ucs4_2143),
    (&[0xFE, 0xFF, 0x00, 0x00], Charset::Ucs4_3412),
    (&[0xFF, 0xFE, 0x00, 0x00], Charset::Utf32Le),
    (&[0xEF, 0xBB, 0xBF], Charset::Utf8),
    (&[0xFE, 0xFF], Charset::Utf16Be),
    (&[0xFF, 0xFE], Charset::Utf16Le),
];

const MAX_BOM: usize = 4;

/// Matches the stream prefix against the known byte-order marks.
///
/// Leading bytes are held until no longer mark can still match, so the
/// verdict does not depend on how the prefix was split across chunks.
/// The held bytes are kept for the caller to replay after `NotMe`.
#[derive(Debug, Clone)]
pub struct BomProber {
    held: [u8; MAX_BOM],
    len: usize,
    found: Option<Charset>,
    state: ProbingState,
}

impl Default for BomProber {
    fn default() -> Self {
        Self::new()
    }
}

impl BomProber {
    pub fn new() -> Self {
        Self {
            held: [0; MAX_BOM],
            len: 0,
            found: None,
            state: ProbingState::Detecting,
        }
    }

    /// Prefix bytes consumed so far.
    pub fn held(&self) -> &[u8] {
        &self.held[..self.len]
    }

    fn longest_match(&self) -> Option<Charset> {
        let held = self.held();
        BOMS.iter().find(|(mark, _)| held.starts_with(mark)).map(|(_, c)| *c)
    }

    fn may_grow(&self) -> bool {
        let held = self.held();
        BOMS.iter().any(|(mark, _)| mark.len() > held.len() && mark.starts_with(held))
    }

    /// End of stream while still undecided: settles on the longest mark
    /// the held bytes complete, if any.
    pub fn conclude(&mut self) -> Option<Charset> {
        if self.state == ProbingState::Detecting {
            self.settle();
        }
        self.found
    }

    fn settle(&mut self) {
        match self.longest_match() {
            Some(charset) => {
                self.found = Some(charset);
                self.state = ProbingState::FoundIt;
                tracing::debug!("byte-order mark: {}", charset);
            }
            None => self.state = ProbingState::NotMe,
        }
    }
}

impl Prober for BomProber {
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        self.held[self.len] = byte;
        self.len += 1;
        if self.len == MAX_BOM || !self.may_grow() {
            self.settle();
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        if self.found.is_some() {
            SURE_CONFIDENCE
        } else {
            0.0
        }
    }

    fn charset(&self) -> Option<Charset> {
        self.found
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(bytes: &[u8]) -> BomProber {
        let mut p = BomProber::new();
        p.feed(bytes);
        p
    }

    #[test]
    fn utf8_mark_decides_on_third_byte() {
        let mut p = BomProber::new();
        assert_eq!(p.feed_byte(0xEF), ProbingState::Detecting);
        assert_eq!(p.feed_byte(0xBB), ProbingState::Detecting);
        assert_eq!(p.feed_byte(0xBF), ProbingState::FoundIt);
        assert_eq!(p.charset(), Some(Charset::Utf8));
    }

    #[test]
    fn utf16_waits_for_utf32_candidates() {
        let p = probe(&[0xFF, 0xFE, 0x00]);
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(probe(&[0xFF, 0xFE, 0x00, 0x00]).charset(), Some(Charset::Utf32Le));
        assert_eq!(probe(&[0xFF, 0xFE, 0x00, 0x41]).charset(), Some(Charset::Utf16Le));
        assert_eq!(probe(&[0xFF, 0xFE, 0x68]).charset(), Some(Charset::Utf16Le));
        assert_eq!(probe(&[0xFE, 0xFF, 0x00, 0x68]).charset(), Some(Charset::Utf16Be));
    }

    #[test]
    fn permuted_ucs4_orders() {
        assert_eq!(probe(&[0xFE, 0xFF, 0x00, 0x00]).charset(), Some(Charset::Ucs4_3412));
        assert_eq!(probe(&[0x00, 0x00, 0xFF, 0xFE]).charset(), Some(Charset::Ucs4_2143));
        assert_eq!(probe(&[0x00, 0x00, 0xFE, 0xFF]).charset(), Some(Charset::Utf32Be));
    }

    #[test]
    fn short_stream_concludes_at_end() {
        let mut p = probe(&[0xFF, 0xFE]);
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(p.conclude(), Some(Charset::Utf16Le));

        let mut p = probe(&[0x00, 0x00]);
        assert_eq!(p.conclude(), None);
        assert_eq!(p.state(), ProbingState::NotMe);
    }

    #[test]
    fn plain_text_is_rejected_and_held() {
        let p = probe(b"hello");
        assert_eq!(p.state(), ProbingState::NotMe);
        assert_eq!(p.held(), b"h");
        let p = probe(&[0xEF, 0xBB, 0x41]);
        assert_eq!(p.state(), ProbingState::NotMe);
        assert_eq!(p.held(), &[0xEF, 0xBB, 0x41]);
    }
}
