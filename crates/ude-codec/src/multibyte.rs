use ude_core::{Charset, MultiByteConfig, ProbingState, LOW_CONFIDENCE, SURE_CONFIDENCE};

use crate::models::freq::{chinese, japanese, korean};
use crate::models::mbcs_sm::{
    BIG5_MODEL, EUCJP_MODEL, EUCKR_MODEL, EUCTW_MODEL, GB18030_MODEL, SJIS_MODEL, UTF8_MODEL,
};
use crate::prober::Prober;
use crate::state_machine::{CodingModel, CodingStateMachine, Step};

/// The multi-byte hypotheses, in group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiByteKind {
    Utf8,
    ShiftJis,
    EucJp,
    Gb18030,
    EucKr,
    Big5,
    EucTw,
}

impl MultiByteKind {
    pub const ALL: [MultiByteKind; 7] = [
        MultiByteKind::Utf8,
        MultiByteKind::ShiftJis,
        MultiByteKind::EucJp,
        MultiByteKind::Gb18030,
        MultiByteKind::EucKr,
        MultiByteKind::Big5,
        MultiByteKind::EucTw,
    ];

    pub fn model(self) -> &'static CodingModel {
        match self {
            MultiByteKind::Utf8 => &UTF8_MODEL,
            MultiByteKind::ShiftJis => &SJIS_MODEL,
            MultiByteKind::EucJp => &EUCJP_MODEL,
            MultiByteKind::Gb18030 => &GB18030_MODEL,
            MultiByteKind::EucKr => &EUCKR_MODEL,
            MultiByteKind::Big5 => &BIG5_MODEL,
            MultiByteKind::EucTw => &EUCTW_MODEL,
        }
    }

    /// Sorted `lead << 8 | trail` codes of the most frequent characters.
    pub fn frequent(self) -> &'static [u16] {
        match self {
            MultiByteKind::Utf8 => &[],
            MultiByteKind::ShiftJis => japanese::SHIFT_JIS_FREQUENT,
            MultiByteKind::EucJp => japanese::EUC_JP_FREQUENT,
            MultiByteKind::Gb18030 => chinese::GB18030_FREQUENT,
            MultiByteKind::EucKr => korean::EUC_KR_FREQUENT,
            MultiByteKind::Big5 => chinese::BIG5_FREQUENT,
            MultiByteKind::EucTw => chinese::EUC_TW_FREQUENT,
        }
    }

    /// Whether a completed two-byte character falls in the plane the
    /// frequency table was built from.
    #[inline(always)]
    pub fn tracks(self, lead: u8, trail: u8) -> bool {
        match self {
            MultiByteKind::Utf8 => false,
            MultiByteKind::ShiftJis => true,
            MultiByteKind::EucJp => lead >= 0xA4,
            MultiByteKind::Gb18030 => lead >= 0xB0 && trail >= 0xA1,
            MultiByteKind::EucKr => lead >= 0xB0,
            MultiByteKind::Big5 => lead >= 0xA4,
            MultiByteKind::EucTw => lead >= 0xC4,
        }
    }
}

#[derive(Debug, Clone)]
enum Scoring {
    /// Count of completed characters longer than one byte.
    Utf8 { multi_byte_chars: u32 },
    Frequency { total_chars: u32, frequent_chars: u32 },
}

/// One coding state machine plus its character statistics.
#[derive(Debug, Clone)]
pub struct MultiByteProber {
    kind: MultiByteKind,
    sm: CodingStateMachine,
    scoring: Scoring,
    state: ProbingState,
    config: MultiByteConfig,
}

impl MultiByteProber {
    pub fn new(kind: MultiByteKind, config: MultiByteConfig) -> Self {
        Self {
            kind,
            sm: CodingStateMachine::new(kind.model()),
            scoring: Self::fresh_scoring(kind),
            state: ProbingState::Detecting,
            config,
        }
    }

    fn fresh_scoring(kind: MultiByteKind) -> Scoring {
        match kind {
            MultiByteKind::Utf8 => Scoring::Utf8 { multi_byte_chars: 0 },
            _ => Scoring::Frequency { total_chars: 0, frequent_chars: 0 },
        }
    }

    fn record(&mut self, lead: u8, trail: u8, len: u8) {
        match &mut self.scoring {
            Scoring::Utf8 { multi_byte_chars } => {
                if len > 1 {
                    *multi_byte_chars += 1;
                }
            }
            Scoring::Frequency { total_chars, frequent_chars } => {
                if len == 2 && self.kind.tracks(lead, trail) {
                    *total_chars += 1;
                    let code = u16::from(lead) << 8 | u16::from(trail);
                    if self.kind.frequent().binary_search(&code).is_ok() {
                        *frequent_chars += 1;
                    }
                }
            }
        }
    }

    fn statistical_confidence(&self) -> f32 {
        match self.scoring {
            Scoring::Utf8 { multi_byte_chars } => {
                if multi_byte_chars < 6 {
                    1.0 - 0.99 * 0.5f32.powi(multi_byte_chars as i32)
                } else {
                    0.99
                }
            }
            Scoring::Frequency { total_chars, frequent_chars } => {
                if total_chars < self.config.min_chars {
                    return LOW_CONFIDENCE;
                }
                let total = total_chars as f32;
                let unrecognized = (total_chars - frequent_chars) as f32 / total;
                if unrecognized > self.config.unrecognized_cutoff {
                    LOW_CONFIDENCE
                } else {
                    frequent_chars as f32 / total
                }
            }
        }
    }

    fn is_sure(&self) -> bool {
        match self.scoring {
            Scoring::Utf8 { .. } => self.statistical_confidence() > self.config.utf8_shortcut,
            Scoring::Frequency { total_chars, .. } => {
                total_chars >= self.config.enough_chars
                    && self.statistical_confidence() > self.config.sure_threshold
            }
        }
    }
}

impl Prober for MultiByteProber {
    #[inline(always)]
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        match self.sm.next(byte) {
            Step::Reject => {
                self.state = ProbingState::NotMe;
                tracing::trace!("{} retired: byte {:#04x} breaks the grammar", self.kind.model().name, byte);
            }
            Step::Complete { lead, len } => {
                self.record(lead, byte, len);
                if self.is_sure() {
                    self.state = ProbingState::FoundIt;
                }
            }
            Step::Pending => {}
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => SURE_CONFIDENCE,
            ProbingState::NotMe => 0.0,
            ProbingState::Detecting => self.statistical_confidence(),
        }
    }

    fn charset(&self) -> Option<Charset> {
        Some(self.kind.model().charset)
    }

    fn reset(&mut self) {
        self.sm.reset();
        self.scoring = Self::fresh_scoring(self.kind);
        self.state = ProbingState::Detecting;
    }
}

/// All multi-byte sub-probers driven in lockstep.
///
/// ## Mechanical Sympathy: One Pass
/// The outer loop walks the bytes once; the inner loop visits only the
/// members still detecting. Retired members cost one state compare.
#[derive(Debug, Clone)]
pub struct MultiByteGroup {
    members: [MultiByteProber; 7],
    active: usize,
    state: ProbingState,
    winner: Option<usize>,
}

impl MultiByteGroup {
    pub fn new(config: MultiByteConfig) -> Self {
        Self {
            members: MultiByteKind::ALL.map(|kind| MultiByteProber::new(kind, config)),
            active: MultiByteKind::ALL.len(),
            state: ProbingState::Detecting,
            winner: None,
        }
    }

    /// Best active member and its confidence; the first member wins ties.
    pub fn best(&self) -> Option<(Charset, f32)> {
        if let Some(i) = self.winner {
            return Some((self.members[i].kind.model().charset, SURE_CONFIDENCE));
        }
        let mut best: Option<(Charset, f32)> = None;
        for m in self.members.iter().filter(|m| m.state == ProbingState::Detecting) {
            let conf = m.confidence();
            if best.map_or(true, |(_, b)| conf > b) {
                best = Some((m.kind.model().charset, conf));
            }
        }
        best
    }
}

impl Prober for MultiByteGroup {
    #[inline(always)]
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        for (i, m) in self.members.iter_mut().enumerate() {
            if m.state != ProbingState::Detecting {
                continue;
            }
            match m.feed_byte(byte) {
                ProbingState::FoundIt => {
                    self.state = ProbingState::FoundIt;
                    self.winner = Some(i);
                    tracing::debug!("multi-byte group: {} found", m.kind.model().name);
                    return self.state;
                }
                ProbingState::NotMe => {
                    self.active -= 1;
                    if self.active == 0 {
                        self.state = ProbingState::NotMe;
                        tracing::debug!("multi-byte group: every member retired");
                        return self.state;
                    }
                }
                ProbingState::Detecting => {}
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        self.best().map_or(0.0, |(_, c)| c)
    }

    fn charset(&self) -> Option<Charset> {
        self.best().map(|(c, _)| c)
    }

    fn reset(&mut self) {
        for m in self.members.iter_mut() {
            m.reset();
        }
        self.active = self.members.len();
        self.state = ProbingState::Detecting;
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prober(kind: MultiByteKind) -> MultiByteProber {
        MultiByteProber::new(kind, MultiByteConfig::default())
    }

    #[test]
    fn frequent_sets_are_sorted_and_tracked() {
        for kind in MultiByteKind::ALL {
            let set = kind.frequent();
            assert!(set.windows(2).all(|w| w[0] < w[1]), "{:?} not sorted", kind);
            for &code in set {
                assert!(kind.tracks((code >> 8) as u8, code as u8), "{:?} {:#06x}", kind, code);
            }
        }
    }

    #[test]
    fn utf8_confidence_climbs_to_found() {
        let mut p = prober(MultiByteKind::Utf8);
        p.feed("абвг".as_bytes());
        assert_eq!(p.state(), ProbingState::Detecting);
        assert!((p.confidence() - (1.0 - 0.99 / 16.0)).abs() < 1e-6);
        p.feed("д".as_bytes());
        assert_eq!(p.state(), ProbingState::FoundIt);
        assert_eq!(p.confidence(), 1.0);
    }

    #[test]
    fn too_few_chars_is_low_confidence() {
        let mut p = prober(MultiByteKind::EucKr);
        // Two hangul syllables.
        p.feed(&[0xC7, 0xD1, 0xB1, 0xDB]);
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(p.confidence(), LOW_CONFIDENCE);
    }

    #[test]
    fn unfamiliar_chars_collapse_confidence() {
        let mut p = prober(MultiByteKind::EucKr);
        // A rarely used hanja row repeated: valid grammar, no frequent hits.
        for _ in 0..32 {
            p.feed(&[0xFD, 0xFE]);
        }
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(p.confidence(), LOW_CONFIDENCE);
    }

    #[test]
    fn grammar_error_retires_member() {
        let mut group = MultiByteGroup::new(MultiByteConfig::default());
        // 0xFF is invalid lead byte in every grammar.
        assert_eq!(group.feed(&[0xFF]), ProbingState::NotMe);
        assert_eq!(group.confidence(), 0.0);
        assert_eq!(group.charset(), None);
    }

    #[test]
    fn reset_restores_every_member() {
        let mut group = MultiByteGroup::new(MultiByteConfig::default());
        group.feed(&[0xFF]);
        group.reset();
        assert_eq!(group.state(), ProbingState::Detecting);
        assert!(group.members.iter().all(|m| m.state() == ProbingState::Detecting));
    }
}
