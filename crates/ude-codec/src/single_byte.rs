use ude_core::{
    Charset, DetectorConfig, ProbingState, SingleByteConfig, UdeError, LOW_CONFIDENCE,
    SURE_CONFIDENCE,
};
use ude_dsa::{BitTable, TableError, TWO_BITS};

use crate::hebrew::HebrewProber;
use crate::latin1::Latin1Prober;
use crate::models::lang::{
    IBM855_RUSSIAN, IBM866_RUSSIAN, KOI8R_RUSSIAN, LATIN5_BULGARIAN, LATIN5_RUSSIAN,
    LATIN7_GREEK, MAC_CYRILLIC_RUSSIAN, THAI_TIS620, WIN1251_BULGARIAN, WIN1251_RUSSIAN,
    WIN1253_GREEK,
};
use crate::prober::{HighByteFilter, LatinFilter, Prober};

/// Ranks below this take part in bigram scoring.
pub const RANKED: u8 = 64;
/// A defined letter or symbol outside the ranked set.
pub const OTH: u8 = 64;
/// ASCII; acts as a word boundary.
pub const SEP: u8 = 254;
/// Undefined in the charset or a control code.
pub const UDF: u8 = 255;

/// Number of cells in a bigram matrix.
pub const BIGRAM_CELLS: usize = RANKED as usize * RANKED as usize;

/// Bigram classes. 3 is a frequent pair, 0 a pair the language never
/// produces.
pub const POSITIVE: u8 = 3;
pub const NEGATIVE: u8 = 0;

/// One charset's view of one language: a byte to rank map plus the
/// language's bigram matrix, shared between every charset of the language.
#[derive(Debug)]
pub struct SequenceModel {
    pub charset: Charset,
    pub language: &'static str,
    pub ranks: &'static [u8; 256],
    pub bigrams: BitTable,
}

impl SequenceModel {
    pub const fn new(
        charset: Charset,
        language: &'static str,
        ranks: &'static [u8; 256],
        bigrams: &'static [i32; 256],
    ) -> Self {
        Self {
            charset,
            language,
            ranks,
            bigrams: BitTable::new(bigrams, TWO_BITS, BIGRAM_CELLS),
        }
    }

    /// Checks the bigram classes and that every rank is a ranked letter or
    /// one of the sentinels.
    pub fn validate(&self) -> Result<(), UdeError> {
        self.bigrams
            .validate(POSITIVE)
            .map_err(|e| UdeError::table(self.language, e))?;
        for (index, &rank) in self.ranks.iter().enumerate() {
            if rank > OTH && rank != SEP && rank != UDF {
                return Err(UdeError::table(
                    self.language,
                    TableError::ValueOutOfRange { index, value: rank, max: OTH },
                ));
            }
        }
        Ok(())
    }

    #[inline(always)]
    fn class(&self, prev: u8, cur: u8) -> u8 {
        self.bigrams.unpack(prev as usize * RANKED as usize + cur as usize)
    }
}

/// Scores a filtered byte stream against a `SequenceModel`.
///
/// ## Performance
/// Per byte: one rank lookup, and for ranked pairs one 2-bit unpack.
#[derive(Debug, Clone)]
pub struct SingleByteProber {
    model: &'static SequenceModel,
    charset: Charset,
    /// Visual order: pairs are looked up with the operands swapped.
    reversed: bool,
    last_rank: u8,
    total_seqs: u32,
    positive_seqs: u32,
    negative_seqs: u32,
    undefined: u32,
    total_chars: u32,
    freq_chars: u32,
    state: ProbingState,
    config: SingleByteConfig,
}

impl SingleByteProber {
    pub fn new(model: &'static SequenceModel, config: SingleByteConfig) -> Self {
        Self::with_order(model, model.charset, false, config)
    }

    /// A prober reading the model right to left and reporting `charset`.
    pub fn reversed(model: &'static SequenceModel, charset: Charset, config: SingleByteConfig) -> Self {
        Self::with_order(model, charset, true, config)
    }

    fn with_order(
        model: &'static SequenceModel,
        charset: Charset,
        reversed: bool,
        config: SingleByteConfig,
    ) -> Self {
        Self {
            model,
            charset,
            reversed,
            last_rank: SEP,
            total_seqs: 0,
            positive_seqs: 0,
            negative_seqs: 0,
            undefined: 0,
            total_chars: 0,
            freq_chars: 0,
            state: ProbingState::Detecting,
            config,
        }
    }

    fn statistical_confidence(&self) -> f32 {
        if self.total_seqs < self.config.min_sequences || self.total_chars == 0 {
            return LOW_CONFIDENCE;
        }
        let positive = self.positive_seqs as f32 / self.total_seqs as f32;
        let coverage = self.freq_chars as f32 / self.total_chars as f32;
        positive * coverage
    }

    fn check_verdict(&mut self) {
        let observed = self.total_seqs + self.undefined;
        if observed >= self.config.negative_min_sample
            && self.negative_seqs as f32 / observed as f32 > self.config.negative_cutoff
        {
            self.state = ProbingState::NotMe;
            tracing::trace!(
                "{}/{} retired: {} negative of {} observed",
                self.charset,
                self.model.language,
                self.negative_seqs,
                observed
            );
            return;
        }
        if self.total_seqs > self.config.enough_sequences {
            let conf = self.statistical_confidence();
            if conf > self.config.positive_shortcut {
                self.state = ProbingState::FoundIt;
            } else if conf < self.config.negative_shortcut {
                self.state = ProbingState::NotMe;
            }
        }
    }
}

impl Prober for SingleByteProber {
    #[inline(always)]
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        let rank = self.model.ranks[byte as usize];
        match rank {
            UDF => {
                self.undefined += 1;
                self.negative_seqs += 1;
            }
            SEP => {}
            _ => {
                self.total_chars += 1;
                if rank < RANKED {
                    self.freq_chars += 1;
                    if self.last_rank < RANKED {
                        let class = if self.reversed {
                            self.model.class(rank, self.last_rank)
                        } else {
                            self.model.class(self.last_rank, rank)
                        };
                        self.total_seqs += 1;
                        match class {
                            POSITIVE => self.positive_seqs += 1,
                            NEGATIVE => self.negative_seqs += 1,
                            _ => {}
                        }
                    }
                }
            }
        }
        self.last_rank = rank;
        self.check_verdict();
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
        Some(self.charset)
    }

    fn reset(&mut self) {
        *self = Self::with_order(self.model, self.charset, self.reversed, self.config);
    }
}

/// A member of the single-byte group.
#[derive(Debug, Clone)]
pub enum SingleByteMember {
    Sequence(SingleByteProber),
    Hebrew(HebrewProber),
    Latin1(Latin1Prober),
}

impl SingleByteMember {
    /// Latin-script members see ASCII letters; the rest see only high bytes.
    fn is_latin(&self) -> bool {
        matches!(self, SingleByteMember::Latin1(_))
    }

    fn as_prober(&self) -> &dyn Prober {
        match self {
            SingleByteMember::Sequence(p) => p,
            SingleByteMember::Hebrew(p) => p,
            SingleByteMember::Latin1(p) => p,
        }
    }
}

impl Prober for SingleByteMember {
    #[inline(always)]
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        match self {
            SingleByteMember::Sequence(p) => p.feed_byte(byte),
            SingleByteMember::Hebrew(p) => p.feed_byte(byte),
            SingleByteMember::Latin1(p) => p.feed_byte(byte),
        }
    }

    fn state(&self) -> ProbingState {
        self.as_prober().state()
    }

    fn confidence(&self) -> f32 {
        self.as_prober().confidence()
    }

    fn charset(&self) -> Option<Charset> {
        self.as_prober().charset()
    }

    fn reset(&mut self) {
        match self {
            SingleByteMember::Sequence(p) => p.reset(),
            SingleByteMember::Hebrew(p) => p.reset(),
            SingleByteMember::Latin1(p) => p.reset(),
        }
    }
}

/// Sequence models in group order; Hebrew, Thai and Latin-1 follow.
static SEQUENCE_MEMBERS: [&SequenceModel; 10] = [
    &WIN1251_RUSSIAN,
    &KOI8R_RUSSIAN,
    &LATIN5_RUSSIAN,
    &MAC_CYRILLIC_RUSSIAN,
    &IBM866_RUSSIAN,
    &IBM855_RUSSIAN,
    &LATIN7_GREEK,
    &WIN1253_GREEK,
    &LATIN5_BULGARIAN,
    &WIN1251_BULGARIAN,
];

/// Every single-byte hypothesis over one shared pass of the stream.
///
/// ## Mechanical Sympathy: Filter Once
/// Each byte goes through the two stream filters once; the filtered byte
/// then fans out to the members still detecting.
#[derive(Debug, Clone)]
pub struct SingleByteGroup {
    members: Vec<SingleByteMember>,
    high: HighByteFilter,
    latin: LatinFilter,
    active: usize,
    state: ProbingState,
    winner: Option<usize>,
}

impl SingleByteGroup {
    pub fn new(config: &DetectorConfig) -> Self {
        let sb = config.single_byte;
        let mut members: Vec<SingleByteMember> = SEQUENCE_MEMBERS
            .iter()
            .map(|m| SingleByteMember::Sequence(SingleByteProber::new(m, sb)))
            .collect();
        members.push(SingleByteMember::Hebrew(HebrewProber::new(sb)));
        members.push(SingleByteMember::Sequence(SingleByteProber::new(&THAI_TIS620, sb)));
        members.push(SingleByteMember::Latin1(Latin1Prober::new(config.latin1_scale)));
        let active = members.len();
        Self {
            members,
            high: HighByteFilter::default(),
            latin: LatinFilter::default(),
            active,
            state: ProbingState::Detecting,
            winner: None,
        }
    }

    /// Best active member and its confidence; the first member wins ties.
    pub fn best(&self) -> Option<(Charset, f32)> {
        if let Some(i) = self.winner {
            return self.members[i].charset().map(|c| (c, SURE_CONFIDENCE));
        }
        let mut best: Option<(Charset, f32)> = None;
        for m in self.members.iter().filter(|m| m.state() == ProbingState::Detecting) {
            let conf = m.confidence();
            if best.map_or(true, |(_, b)| conf > b) {
                if let Some(charset) = m.charset() {
                    best = Some((charset, conf));
                }
            }
        }
        best
    }
}

impl Prober for SingleByteGroup {
    #[inline(always)]
    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        let high = self.high.push(byte);
        let latin = self.latin.push(byte);
        for (i, m) in self.members.iter_mut().enumerate() {
            if m.state() != ProbingState::Detecting {
                continue;
            }
            let filtered = if m.is_latin() { latin } else { high };
            let Some(b) = filtered else { continue };
            match m.feed_byte(b) {
                ProbingState::FoundIt => {
                    self.state = ProbingState::FoundIt;
                    self.winner = Some(i);
                    tracing::debug!("single-byte group: {:?} found", m.charset());
                    return self.state;
                }
                ProbingState::NotMe => {
                    self.active -= 1;
                    if self.active == 0 {
                        self.state = ProbingState::NotMe;
                        tracing::debug!("single-byte group: every member retired");
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
        self.high.reset();
        self.latin.reset();
        self.active = self.members.len();
        self.state = ProbingState::Detecting;
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lang::{THAI_TIS620, WIN1251_RUSSIAN};

    fn feed(p: &mut SingleByteProber, bytes: &[u8]) {
        for &b in bytes {
            p.feed_byte(b);
        }
    }

    #[test]
    fn ascii_is_a_separator() {
        let mut p = SingleByteProber::new(&WIN1251_RUSSIAN, SingleByteConfig::default());
        feed(&mut p, b"hello world, nothing ranked here");
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(p.total_chars, 0);
        assert_eq!(p.confidence(), LOW_CONFIDENCE);
    }

    #[test]
    fn undefined_bytes_retire_the_model() {
        // 0x98 is unassigned in windows-1251.
        assert_eq!(WIN1251_RUSSIAN.ranks[0x98], UDF);
        let mut p = SingleByteProber::new(&WIN1251_RUSSIAN, SingleByteConfig::default());
        feed(&mut p, &[0x98; 64]);
        assert_eq!(p.state(), ProbingState::NotMe);
        assert_eq!(p.confidence(), 0.0);
    }

    #[test]
    fn native_text_scores_positive() {
        // "приветствую вас в городе" in windows-1251, repeated.
        let word: &[u8] = &[
            0xEF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2, 0xF1, 0xF2, 0xE2, 0xF3, 0xFE, 0x20, 0xE2, 0xE0,
            0xF1, 0x20, 0xE2, 0x20, 0xE3, 0xEE, 0xF0, 0xEE, 0xE4, 0xE5, 0x20,
        ];
        let mut p = SingleByteProber::new(&WIN1251_RUSSIAN, SingleByteConfig::default());
        for _ in 0..4 {
            feed(&mut p, word);
        }
        assert_eq!(p.state(), ProbingState::Detecting);
        assert!(p.confidence() > 0.5, "confidence {}", p.confidence());
        assert!(p.negative_seqs * 10 < p.total_seqs);
    }

    const MOSCOW: &str = "Москва является столицей России, город федерального значения, \
        административный центр Центрального федерального округа и центр Московской области, \
        в состав которой не входит. Крупнейший по численности населения город России и её \
        субъект, самый населённый из городов, полностью расположенных в Европе.";

    fn group_verdict(encoding: &'static encoding_rs::Encoding, text: &str) -> Option<Charset> {
        let (bytes, _, unmappable) = encoding.encode(text);
        assert!(!unmappable);
        let mut group = SingleByteGroup::new(&DetectorConfig::default());
        group.feed(&bytes);
        group.charset()
    }

    #[test]
    fn group_picks_the_russian_code_page() {
        assert_eq!(group_verdict(encoding_rs::WINDOWS_1251, MOSCOW), Some(Charset::Windows1251));
        assert_eq!(group_verdict(encoding_rs::KOI8_R, MOSCOW), Some(Charset::Koi8R));
        assert_eq!(group_verdict(encoding_rs::IBM866, MOSCOW), Some(Charset::Ibm866));
        assert_eq!(group_verdict(encoding_rs::ISO_8859_5, MOSCOW), Some(Charset::Iso8859_5));
        assert_eq!(group_verdict(encoding_rs::X_MAC_CYRILLIC, MOSCOW), Some(Charset::MacCyrillic));
    }

    #[test]
    fn alpha_tonos_splits_the_greek_code_pages() {
        let text = "Άρτα, Ήπειρος: Ώρα για ένα ταξίδι στην Ελλάδα. Η πόλη είναι όμορφη και οι άνθρωποι φιλόξενοι.";
        assert_eq!(WIN1253_GREEK.class(50, 6), POSITIVE);
        assert_eq!(group_verdict(encoding_rs::ISO_8859_7, text), Some(Charset::Iso8859_7));
        assert_eq!(group_verdict(encoding_rs::WINDOWS_1253, text), Some(Charset::Windows1253));
    }

    #[test]
    fn group_reset_forgets_members() {
        let mut group = SingleByteGroup::new(&DetectorConfig::default());
        group.feed(&[0x98; 200]);
        assert!(group.members.iter().any(|m| m.state() == ProbingState::NotMe));
        group.reset();
        assert!(group.members.iter().all(|m| m.state() == ProbingState::Detecting));
        assert_eq!(group.state(), ProbingState::Detecting);
    }

    #[test]
    fn every_sequence_model_is_valid() {
        for model in crate::models::lang::ALL_MODELS {
            model.validate().unwrap();
        }
    }

    #[test]
    fn reset_clears_counters() {
        let mut p = SingleByteProber::new(&THAI_TIS620, SingleByteConfig::default());
        feed(&mut p, &[0xFF; 80]);
        p.reset();
        assert_eq!(p.state(), ProbingState::Detecting);
        assert_eq!(p.total_seqs, 0);
        assert_eq!(p.charset(), Some(Charset::Tis620));
    }
}
