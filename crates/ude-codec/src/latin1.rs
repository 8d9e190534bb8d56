use ude_core::{Charset, ProbingState, LOW_CONFIDENCE};
use ude_dsa::{pack2_digits, pack3_values, tri_slots, BitTable, TriBitTable, TWO_BITS};

use crate::prober::Prober;

const UDF: u8 = 0; // undefined
const OTH: u8 = 1; // other
const ASC: u8 = 2; // ascii capital letter
const ASS: u8 = 3; // ascii small letter
const ACV: u8 = 4; // accent capital vowel
const ACO: u8 = 5; // accent capital other
const ASV: u8 = 6; // accent small vowel
const ASO: u8 = 7; // accent small other

pub const LATIN1_CLASS_COUNT: usize = 8;

#[rustfmt::skip]
const CLASSES: [u8; 256] = [
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 00 - 07
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 08 - 0F
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 10 - 17
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 18 - 1F
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 20 - 27
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 28 - 2F
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 30 - 37
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 38 - 3F
    OTH, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 40 - 47
    ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 48 - 4F
    ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 50 - 57
    ASC, ASC, ASC, OTH, OTH, OTH, OTH, OTH, // 58 - 5F
    OTH, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 60 - 67
    ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 68 - 6F
    ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 70 - 77
    ASS, ASS, ASS, OTH, OTH, OTH, OTH, OTH, // 78 - 7F
    OTH, UDF, OTH, ASO, OTH, OTH, OTH, OTH, // 80 - 87
    OTH, OTH, ACO, OTH, ACO, UDF, ACO, UDF, // 88 - 8F
    UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 90 - 97
    OTH, OTH, ASO, OTH, ASO, UDF, ASO, ACO, // 98 - 9F
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // A0 - A7
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // A8 - AF
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // B0 - B7
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // B8 - BF
    ACV, ACV, ACV, ACV, ACV, ACV, ACO, ACO, // C0 - C7
    ACV, ACV, ACV, ACV, ACV, ACV, ACV, ACV, // C8 - CF
    ACO, ACO, ACV, ACV, ACV, ACV, ACV, OTH, // D0 - D7
    ACV, ACV, ACV, ACV, ACV, ACO, ACO, ACO, // D8 - DF
    ASV, ASV, ASV, ASV, ASV, ASV, ASO, ASO, // E0 - E7
    ASV, ASV, ASV, ASV, ASV, ASV, ASV, ASV, // E8 - EF
    ASO, ASO, ASV, ASV, ASV, ASV, ASV, OTH, // F0 - F7
    ASV, ASV, ASV, ASV, ASV, ASO, ASO, ASO, // F8 - FF
];

static CLASS_WORDS: [i32; 26] = pack3_values(&CLASSES);
static CLASS_SLOTS: [(u16, u8); 256] = tri_slots();

/// windows-1252 byte to Latin-1 class, three bits per byte.
pub static LATIN1_CLASSES: TriBitTable = TriBitTable::new(&CLASS_WORDS, &CLASS_SLOTS);

/// Class-pair scores, row = previous class:
/// UDF OTH ASC ASS ACV ACO ASV ASO.
static PAIR_WORDS: [i32; 4] = pack2_digits(concat!(
    "00000000", // UDF
    "03333333", // OTH
    "03333333", // ASC
    "03331133", // ASS
    "03331212", // ACV
    "03333333", // ACO
    "03131113", // ASV
    "03131133", // ASO
).as_bytes());

pub static LATIN1_PAIRS: BitTable =
    BitTable::new(&PAIR_WORDS, TWO_BITS, LATIN1_CLASS_COUNT * LATIN1_CLASS_COUNT);

/// Penalty weight of an unlikely pair against a frequent one.
const UNLIKELY_WEIGHT: f32 = 20.0;

/// Western European text in windows-1252.
///
/// Scores transitions between coarse letter classes: accented letters
/// next to each other are rare in Latin-1 text and common in mis-decoded
/// multi-byte text. Any undefined byte retires the prober.
#[derive(Debug, Clone)]
pub struct Latin1Prober {
    last_class: u8,
    freq: [u32; 4],
    state: ProbingState,
    scale: f32,
}

impl Latin1Prober {
    pub fn new(scale: f32) -> Self {
        Self {
            last_class: OTH,
            freq: [0; 4],
            state: ProbingState::Detecting,
            scale,
        }
    }
}

impl Prober for Latin1Prober {
    #[inline(always)]
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        let class = LATIN1_CLASSES.unpack(byte as usize);
        let score = LATIN1_PAIRS.unpack(self.last_class as usize * LATIN1_CLASS_COUNT + class as usize);
        if score == 0 {
            self.state = ProbingState::NotMe;
            tracing::trace!("windows-1252 retired on {:#04x}", byte);
            return self.state;
        }
        self.freq[score as usize] += 1;
        self.last_class = class;
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        if self.state == ProbingState::NotMe {
            return LOW_CONFIDENCE;
        }
        let total: u32 = self.freq.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let score = (self.freq[3] as f32 - self.freq[1] as f32 * UNLIKELY_WEIGHT) / total as f32;
        score.max(0.0) * self.scale
    }

    fn charset(&self) -> Option<Charset> {
        Some(Charset::Windows1252)
    }

    fn reset(&mut self) {
        *self = Self::new(self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prober::LatinFilter;

    fn probe(text: &[u8]) -> Latin1Prober {
        let mut filter = LatinFilter::default();
        let mut p = Latin1Prober::new(0.5);
        for &b in text {
            if let Some(b) = filter.push(b) {
                p.feed_byte(b);
            }
        }
        p
    }

    #[test]
    fn packed_tables_match_source() {
        for (i, &c) in CLASSES.iter().enumerate() {
            assert_eq!(LATIN1_CLASSES.unpack(i), c, "byte {:#04x}", i);
        }
        assert_eq!(LATIN1_PAIRS.unpack(ASS as usize * 8 + ACV as usize), 1);
        assert_eq!(LATIN1_PAIRS.unpack(ASV as usize * 8 + ASO as usize), 3);
    }

    #[test]
    fn french_text_scores() {
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(
            "Le café est très agréable à côté de la forêt, où l'été dure longtemps.",
        );
        let p = probe(&bytes);
        assert_eq!(p.state(), ProbingState::Detecting);
        assert!(p.confidence() > 0.3, "confidence {}", p.confidence());
    }

    #[test]
    fn utf8_accents_are_penalised() {
        let p = probe("Le café est très agréable à côté de la forêt.".as_bytes());
        assert_eq!(p.confidence(), 0.0);
    }

    #[test]
    fn undefined_byte_retires() {
        let p = probe(b"abc\x81def");
        assert_eq!(p.state(), ProbingState::NotMe);
        assert_eq!(p.confidence(), LOW_CONFIDENCE);
    }

    #[test]
    fn no_data_is_zero() {
        assert_eq!(Latin1Prober::new(0.5).confidence(), 0.0);
    }
}
