use ude_core::{Charset, ProbingState, SingleByteConfig};

use crate::models::lang::WIN1255_HEBREW;
use crate::prober::{Prober, SPACE};
use crate::single_byte::SingleByteProber;

/// Letters with a dedicated word-final form (kaf, mem, nun, pe, tsadi).
const FINAL_KAF: u8 = 0xEA;
const FINAL_MEM: u8 = 0xED;
const FINAL_NUN: u8 = 0xEF;
const FINAL_PE: u8 = 0xF3;
const FINAL_TSADI: u8 = 0xF5;
const NORMAL_KAF: u8 = 0xEB;
const NORMAL_MEM: u8 = 0xEE;
const NORMAL_NUN: u8 = 0xF0;
const NORMAL_PE: u8 = 0xF4;

/// Final-letter score lead considered conclusive.
const MIN_FINAL_CHAR_DISTANCE: i32 = 5;
/// Model confidence gap considered conclusive.
const MIN_MODEL_DISTANCE: f32 = 0.01;

#[inline(always)]
fn is_final(b: u8) -> bool {
    matches!(b, FINAL_KAF | FINAL_MEM | FINAL_NUN | FINAL_PE | FINAL_TSADI)
}

/// Tsadi is left out: its normal form legitimately ends some words.
#[inline(always)]
fn is_non_final(b: u8) -> bool {
    matches!(b, NORMAL_KAF | NORMAL_MEM | NORMAL_NUN | NORMAL_PE)
}

/// Chooses between logical (windows-1255) and visual (ISO-8859-8) Hebrew.
///
/// Both orders share one letter repertoire, so the decision rests on where
/// final-form letters fall relative to spaces, with the two sequence
/// models as a tie-breaker.
#[derive(Debug, Clone)]
pub struct HebrewProber {
    logical: SingleByteProber,
    visual: SingleByteProber,
    final_char_logical_score: i32,
    final_char_visual_score: i32,
    prev: u8,
    before_prev: u8,
    state: ProbingState,
}

impl HebrewProber {
    pub fn new(config: SingleByteConfig) -> Self {
        Self {
            logical: SingleByteProber::new(&WIN1255_HEBREW, config),
            visual: SingleByteProber::reversed(&WIN1255_HEBREW, Charset::Iso8859_8, config),
            final_char_logical_score: 0,
            final_char_visual_score: 0,
            prev: SPACE,
            before_prev: SPACE,
            state: ProbingState::Detecting,
        }
    }

    /// Logical minus visual final-letter evidence.
    pub fn final_char_distance(&self) -> i32 {
        self.final_char_logical_score - self.final_char_visual_score
    }

    fn score_final_letters(&mut self, byte: u8) {
        if byte == SPACE {
            // End of a word: logical text ends it with a final form.
            if self.before_prev != SPACE {
                if is_final(self.prev) {
                    self.final_char_logical_score += 1;
                } else if is_non_final(self.prev) {
                    self.final_char_visual_score += 1;
                }
            }
        } else if self.before_prev == SPACE && is_final(self.prev) {
            // Start of a word in visual text begins with a final form.
            self.final_char_visual_score += 1;
        }
        self.before_prev = self.prev;
        self.prev = byte;
    }
}

impl Prober for HebrewProber {
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        self.score_final_letters(byte);
        self.logical.feed_byte(byte);
        self.visual.feed_byte(byte);
        if self.logical.state() == ProbingState::NotMe && self.visual.state() == ProbingState::NotMe {
            self.state = ProbingState::NotMe;
            tracing::trace!("hebrew retired: both orders rejected");
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        [&self.logical, &self.visual]
            .iter()
            .filter(|p| p.state() != ProbingState::NotMe)
            .map(|p| p.confidence())
            .fold(0.0, f32::max)
    }

    fn charset(&self) -> Option<Charset> {
        let distance = self.final_char_distance();
        if distance >= MIN_FINAL_CHAR_DISTANCE {
            return Some(Charset::Windows1255);
        }
        if distance <= -MIN_FINAL_CHAR_DISTANCE {
            return Some(Charset::Iso8859_8);
        }
        let model_distance = self.logical.confidence() - self.visual.confidence();
        if model_distance > MIN_MODEL_DISTANCE {
            return Some(Charset::Windows1255);
        }
        if model_distance < -MIN_MODEL_DISTANCE {
            return Some(Charset::Iso8859_8);
        }
        if distance < 0 {
            Some(Charset::Iso8859_8)
        } else {
            Some(Charset::Windows1255)
        }
    }

    fn reset(&mut self) {
        self.logical.reset();
        self.visual.reset();
        self.final_char_logical_score = 0;
        self.final_char_visual_score = 0;
        self.prev = SPACE;
        self.before_prev = SPACE;
        self.state = ProbingState::Detecting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(bytes: &[u8]) -> HebrewProber {
        let mut p = HebrewProber::new(SingleByteConfig::default());
        p.feed(bytes);
        p
    }

    #[test]
    fn word_final_forms_mean_logical() {
        // "shalom" twice per line: shin lamed vav final-mem.
        let line: &[u8] = &[0xF9, 0xEC, 0xE5, 0xED, SPACE];
        let p = feed(&line.repeat(6));
        assert_eq!(p.final_char_distance(), 6);
        assert_eq!(p.charset(), Some(Charset::Windows1255));
    }

    #[test]
    fn word_initial_finals_mean_visual() {
        // The same word stored right to left.
        let line: &[u8] = &[0xED, 0xE5, 0xEC, 0xF9, SPACE];
        let p = feed(&line.repeat(6));
        assert!(p.final_char_distance() <= -MIN_FINAL_CHAR_DISTANCE);
        assert_eq!(p.charset(), Some(Charset::Iso8859_8));
    }

    #[test]
    fn no_evidence_defaults_to_logical() {
        let p = feed(&[]);
        assert_eq!(p.charset(), Some(Charset::Windows1255));
        assert_eq!(p.confidence(), ude_core::LOW_CONFIDENCE);
    }
}
