use std::io::{ErrorKind, Read};

use ude_codec::{
    feed_until_found, validate_tables, BomProber, EscapeProber, MultiByteGroup, Prober,
    SingleByteGroup,
};
use ude_core::{Charset, DetectionResult, DetectorConfig, ProbingState, UdeError, SURE_CONFIDENCE};

const ESC: u8 = 0x1B;
const TILDE: u8 = b'~';
const OPEN_BRACE: u8 = b'{';

/// Chunk size used by `feed_reader`.
const READ_CHUNK: usize = 8 * 1024;

/// What the bytes after the byte-order-mark check have shown so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Every byte below 0x80 and no escape trigger.
    PureAscii,
    /// An ESC byte or a `~{` pair was seen; only the escape prober runs.
    Escape,
    /// A byte >= 0x80 was seen; both prober groups run.
    HighByte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Leading bytes are still being matched against byte-order marks.
    AwaitingFirstBytes,
    Active(InputMode),
    /// The result is fixed; further input is ignored.
    Done,
}

/// The detection session: owns every prober and decides termination.
///
/// ## Mechanical Sympathy: Route, Don't Broadcast
/// Pure ASCII costs one compare per byte. The statistical groups only run
/// once a high byte proves there is something to tell apart.
#[derive(Debug, Clone)]
pub struct CharsetDetector {
    config: DetectorConfig,
    phase: Phase,
    bom: BomProber,
    escape: EscapeProber,
    multi_byte: MultiByteGroup,
    single_byte: SingleByteGroup,
    /// The last byte seen in `PureAscii` was `~`.
    pending_tilde: bool,
    result: DetectionResult,
}

impl Default for CharsetDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetDetector {
    /// A detector with the default calibration.
    ///
    /// # Panics
    /// If an embedded table fails its construction-time check.
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default()).expect("embedded detection tables are invalid")
    }

    /// A detector with a custom calibration. Fails on out-of-range values
    /// or an invalid embedded table.
    pub fn with_config(config: DetectorConfig) -> Result<Self, UdeError> {
        config.validate()?;
        validate_tables()?;
        Ok(Self {
            config,
            phase: Phase::AwaitingFirstBytes,
            bom: BomProber::new(),
            escape: EscapeProber::new(),
            multi_byte: MultiByteGroup::new(config.multi_byte),
            single_byte: SingleByteGroup::new(&config),
            pending_tilde: false,
            result: DetectionResult::unresolved(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Consumes the next chunk of the stream. The verdict does not depend
    /// on how the stream is split into chunks.
    pub fn feed(&mut self, buf: &[u8]) {
        if buf.is_empty() || self.phase == Phase::Done {
            return;
        }
        match self.phase {
            Phase::AwaitingFirstBytes => self.check_bom(buf),
            Phase::Active(_) => self.route(buf),
            Phase::Done => {}
        }
    }

    /// Streams `reader` into the detector until end of input or a
    /// conclusive verdict. Returns the number of bytes read.
    pub fn feed_reader<R: Read>(&mut self, mut reader: R) -> Result<u64, UdeError> {
        let mut buf = vec![0u8; READ_CHUNK];
        let mut total = 0u64;
        while !self.is_done() {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            total += n as u64;
            self.feed(&buf[..n]);
        }
        Ok(total)
    }

    fn check_bom(&mut self, buf: &[u8]) {
        for (i, &byte) in buf.iter().enumerate() {
            match self.bom.feed_byte(byte) {
                ProbingState::Detecting => {}
                ProbingState::FoundIt => {
                    self.finish_with_bom();
                    return;
                }
                ProbingState::NotMe => {
                    self.replay_prefix();
                    self.route(&buf[i + 1..]);
                    return;
                }
            }
        }
    }

    fn finish_with_bom(&mut self) {
        if let Some(charset) = self.bom.charset() {
            self.result = DetectionResult::from_bom(charset);
            self.phase = Phase::Done;
        }
    }

    /// Routes the bytes the byte-order-mark check held back.
    fn replay_prefix(&mut self) {
        let mut prefix = [0u8; 4];
        let held = self.bom.held();
        let n = held.len();
        prefix[..n].copy_from_slice(held);
        self.enter(InputMode::PureAscii);
        self.route(&prefix[..n]);
    }

    fn enter(&mut self, mode: InputMode) {
        tracing::debug!("input mode: {:?}", mode);
        self.phase = Phase::Active(mode);
    }

    fn found(&mut self, charset: Option<Charset>) {
        if let Some(charset) = charset {
            tracing::debug!("conclusive match: {}", charset);
            self.result = DetectionResult::resolved(charset, SURE_CONFIDENCE);
            self.phase = Phase::Done;
        }
    }

    fn route(&mut self, buf: &[u8]) {
        let mut i = 0;
        while i < buf.len() {
            match self.phase {
                Phase::Active(InputMode::PureAscii) => {
                    let byte = buf[i];
                    if byte >= 0x80 {
                        self.enter(InputMode::HighByte);
                    } else if byte == ESC {
                        self.enter(InputMode::Escape);
                    } else if self.pending_tilde && byte == OPEN_BRACE {
                        self.enter(InputMode::Escape);
                        self.pending_tilde = false;
                        if self.escape.feed_byte(TILDE) == ProbingState::FoundIt {
                            self.found(self.escape.charset());
                            return;
                        }
                    } else {
                        self.pending_tilde = byte == TILDE;
                        i += 1;
                    }
                }
                Phase::Active(InputMode::Escape) => {
                    let rest = &buf[i..];
                    let end = rest.iter().position(|&b| b >= 0x80).unwrap_or(rest.len());
                    if let Some(_at) = feed_until_found(&mut self.escape, &rest[..end]) {
                        self.found(self.escape.charset());
                        return;
                    }
                    if end == rest.len() {
                        return;
                    }
                    // High bytes rule out the 7-bit encodings.
                    self.enter(InputMode::HighByte);
                    i += end;
                }
                Phase::Active(InputMode::HighByte) => {
                    self.feed_groups(&buf[i..]);
                    return;
                }
                Phase::AwaitingFirstBytes | Phase::Done => return,
            }
        }
    }

    /// Both groups read the same bytes; the earliest conclusive byte wins
    /// and the multi-byte group wins a tie on the same byte.
    fn feed_groups(&mut self, buf: &[u8]) {
        let mb_at = feed_until_found(&mut self.multi_byte, buf);
        let sb_at = feed_until_found(&mut self.single_byte, buf);
        match (mb_at, sb_at) {
            (Some(m), Some(s)) if s < m => self.found(self.single_byte.charset()),
            (Some(_), _) => self.found(self.multi_byte.charset()),
            (None, Some(_)) => self.found(self.single_byte.charset()),
            (None, None) => {}
        }
    }

    /// Marks the end of input and fixes the result. Repeated calls keep
    /// the first result.
    pub fn finalize(&mut self) {
        match self.phase {
            Phase::Done => return,
            Phase::AwaitingFirstBytes => {
                if self.bom.conclude().is_some() {
                    self.finish_with_bom();
                    return;
                }
                if !self.bom.held().is_empty() {
                    self.replay_prefix();
                }
            }
            Phase::Active(_) => {}
        }
        if self.phase != Phase::Done {
            self.result = self.settle();
            self.phase = Phase::Done;
        }
        match self.result.charset {
            Some(charset) => tracing::debug!("finalized: {} at {:.2}", charset, self.result.confidence),
            None => tracing::debug!("finalized: unresolved"),
        }
    }

    fn settle(&self) -> DetectionResult {
        match self.phase {
            Phase::Active(InputMode::PureAscii) => {
                DetectionResult::resolved(Charset::Ascii, SURE_CONFIDENCE)
            }
            Phase::Active(InputMode::HighByte) => {
                let best = match (self.multi_byte.best(), self.single_byte.best()) {
                    (Some(mb), Some(sb)) => Some(if sb.1 > mb.1 { sb } else { mb }),
                    (mb, sb) => mb.or(sb),
                };
                match best {
                    Some((charset, confidence)) if confidence > self.config.publish_threshold => {
                        DetectionResult::resolved(charset, confidence)
                    }
                    _ => DetectionResult::unresolved(),
                }
            }
            // An escape trigger without a completed designator names nothing.
            Phase::Active(InputMode::Escape) | Phase::AwaitingFirstBytes | Phase::Done => {
                DetectionResult::unresolved()
            }
        }
    }

    /// Valid after `finalize`.
    pub fn result(&self) -> DetectionResult {
        self.result
    }

    pub fn charset(&self) -> Option<Charset> {
        self.result.charset
    }

    pub fn charset_name(&self) -> Option<&'static str> {
        self.result.charset_name()
    }

    pub fn confidence(&self) -> f32 {
        self.result.confidence
    }

    pub fn bom_detected(&self) -> bool {
        self.result.bom_detected
    }

    /// Returns the detector to its initial state for a new stream.
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingFirstBytes;
        self.bom.reset();
        self.escape.reset();
        self.multi_byte.reset();
        self.single_byte.reset();
        self.pending_tilde = false;
        self.result = DetectionResult::unresolved();
    }
}

/// Detects `buf` as one complete stream with the default calibration.
pub fn detect(buf: &[u8]) -> DetectionResult {
    let mut detector = CharsetDetector::new();
    detector.feed(buf);
    detector.finalize();
    detector.result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stream_is_unresolved() {
        let mut d = CharsetDetector::new();
        d.feed(&[]);
        d.finalize();
        assert_eq!(d.charset(), None);
        assert_eq!(d.phase(), Phase::Done);
    }

    #[test]
    fn bom_prefix_split_across_chunks() {
        let mut d = CharsetDetector::new();
        d.feed(&[0xFF]);
        assert_eq!(d.phase(), Phase::AwaitingFirstBytes);
        d.feed(&[0xFE]);
        d.feed(&[0x00]);
        d.feed(&[0x00, 0x68]);
        d.finalize();
        assert_eq!(d.charset(), Some(Charset::Utf32Le));
        assert!(d.bom_detected());
    }

    #[test]
    fn held_prefix_is_replayed() {
        let mut d = CharsetDetector::new();
        d.feed(&[0xEF, 0xBB]);
        d.feed(b"x plain");
        assert_eq!(d.phase(), Phase::Active(InputMode::HighByte));
        let mut d = CharsetDetector::new();
        d.feed(b"ok");
        assert_eq!(d.phase(), Phase::Active(InputMode::PureAscii));
    }

    #[test]
    fn short_stream_settles_bom_at_end() {
        let mut d = CharsetDetector::new();
        d.feed(&[0xFE, 0xFF]);
        d.finalize();
        assert_eq!(d.charset(), Some(Charset::Utf16Be));
        assert!(d.bom_detected());
    }

    #[test]
    fn tilde_brace_enters_escape_mode_across_chunks() {
        let mut d = CharsetDetector::new();
        d.feed(b"abc ~");
        assert_eq!(d.phase(), Phase::Active(InputMode::PureAscii));
        d.feed(b"{<:Ky2;S{#,~}");
        d.finalize();
        assert_eq!(d.charset(), Some(Charset::HzGb2312));
        assert_eq!(d.confidence(), 1.0);
    }

    #[test]
    fn escape_without_designator_is_unresolved() {
        let mut d = CharsetDetector::new();
        d.feed(b"colour \x1b[1mbold\x1b[0m");
        assert_eq!(d.phase(), Phase::Active(InputMode::Escape));
        d.finalize();
        assert_eq!(d.charset(), None);
        assert_eq!(d.confidence(), 0.0);

        // Every escape machine retired.
        assert_eq!(detect(b"\x1bx ~x plain").charset, None);
        // `~{` with no closing `~}`.
        assert_eq!(detect(b"see~{x} here").charset, None);
    }

    #[test]
    fn high_byte_leaves_escape_mode() {
        let mut d = CharsetDetector::new();
        d.feed(b"\x1b[0m ");
        d.feed("Ж".as_bytes());
        assert_eq!(d.phase(), Phase::Active(InputMode::HighByte));
    }

    #[test]
    fn too_little_evidence_is_unresolved() {
        let result = detect(&[0x81, 0x81, 0x81]);
        assert_eq!(result.charset, None);
        assert!(!result.is_resolved());
    }

    #[test]
    fn multi_byte_verdict_survives_small_chunks() {
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(
            "ウィキペディアはオープンコンテントの百科事典です。基本方針に賛同していただけるなら、\
             誰でも記事を編集したり新しく作成したりできます。",
        );
        let mut d = CharsetDetector::new();
        for chunk in bytes.chunks(7) {
            d.feed(chunk);
        }
        assert_eq!(d.phase(), Phase::Active(InputMode::HighByte));
        d.finalize();
        assert_eq!(d.charset(), Some(Charset::ShiftJis));
        assert_eq!(d.result(), detect(&bytes));
    }

    #[test]
    fn invalid_config_fails_construction() {
        let mut config = DetectorConfig::default();
        config.publish_threshold = 2.0;
        assert!(matches!(CharsetDetector::with_config(config), Err(UdeError::Config(_))));
    }

    #[test]
    fn feed_reader_counts_bytes() {
        let text = "Съешь же ещё этих мягких французских булок, да выпей чаю. ".repeat(200);
        let mut d = CharsetDetector::new();
        let n = d.feed_reader(text.as_bytes()).unwrap();
        d.finalize();
        assert_eq!(d.charset(), Some(Charset::Utf8));
        assert!(n > 0);
        assert!(n <= text.len() as u64);
    }
}
