//! # Detector Tests: Session Lifecycle
//!
//! Validates the orchestrator contract: ASCII and UTF-8 verdicts,
//! byte-order marks, finalize semantics and reset.

use std::time::Instant;
use ude::{detect, Charset, CharsetDetector, DetectorConfig, Phase, UdeError};

const JAPANESE: &str = "ウィキペディアはオープンコンテントの百科事典です。基本方針に賛同していただけるなら、誰でも記事を編集したり新しく作成したりできます。";

/// Verifies that pure ASCII of any nonzero length is ASCII at full confidence.
#[test]
fn test_pure_ascii() {
    let t = Instant::now();

    for sample in [&b"The Documentation of the libraries is not complete"[..], b"3"] {
        let result = detect(sample);
        assert_eq!(result.charset, Some(Charset::Ascii));
        assert_eq!(result.confidence, 1.0);
        assert!(!result.bom_detected);
    }

    let overhead = t.elapsed();
    println!("test_pure_ascii: Testing Overhead = {:?}", overhead);
}

/// Verifies that non-Latin UTF-8 without a BOM is UTF-8 at full confidence.
#[test]
fn test_utf8_without_bom() {
    let t = Instant::now();

    let result = detect(JAPANESE.as_bytes());
    assert_eq!(result.charset, Some(Charset::Utf8));
    assert_eq!(result.confidence, 1.0);
    assert!(!result.bom_detected);

    let overhead = t.elapsed();
    println!("test_utf8_without_bom: Testing Overhead = {:?}", overhead);
}

/// Verifies that every byte-order mark short-circuits detection.
#[test]
fn test_byte_order_marks() {
    let t = Instant::now();

    let cases: [(&[u8], Charset); 7] = [
        (&[0xEF, 0xBB, 0xBF, b'h', b'i'], Charset::Utf8),
        (&[0xFF, 0xFE, b'h', 0x00], Charset::Utf16Le),
        (&[0xFE, 0xFF, 0x00, b'h'], Charset::Utf16Be),
        (&[0xFF, 0xFE, 0x00, 0x00, b'h', 0x00, 0x00, 0x00], Charset::Utf32Le),
        (&[0x00, 0x00, 0xFE, 0xFF, 0x00, 0x00, 0x00, b'h'], Charset::Utf32Be),
        (&[0xFE, 0xFF, 0x00, 0x00], Charset::Ucs4_3412),
        (&[0x00, 0x00, 0xFF, 0xFE], Charset::Ucs4_2143),
    ];
    for (bytes, expected) in cases {
        let result = detect(bytes);
        assert_eq!(result.charset, Some(expected), "input {:02x?}", bytes);
        assert_eq!(result.confidence, 1.0);
        assert!(result.bom_detected);
    }

    let overhead = t.elapsed();
    println!("test_byte_order_marks: Testing Overhead = {:?}", overhead);
}

/// Verifies that a conclusive verdict ends the session and later input is ignored.
#[test]
fn test_feed_after_done_is_ignored() {
    let t = Instant::now();

    let mut d = CharsetDetector::new();
    d.feed(&[0xEF, 0xBB, 0xBF]);
    assert!(d.is_done());
    d.feed(&[0x82, 0xA0, 0x82, 0xA2]);
    d.finalize();
    assert_eq!(d.charset(), Some(Charset::Utf8));
    assert!(d.bom_detected());

    let overhead = t.elapsed();
    println!("test_feed_after_done_is_ignored: Testing Overhead = {:?}", overhead);
}

/// Verifies that repeated finalize calls keep the first result.
#[test]
fn test_finalize_is_idempotent() {
    let t = Instant::now();

    let mut d = CharsetDetector::new();
    d.feed(b"hello ");
    d.finalize();
    let first = d.result();
    d.feed("Москва".as_bytes());
    d.finalize();
    assert_eq!(d.result(), first);
    assert_eq!(d.charset_name(), Some("ASCII"));
    assert_eq!(d.phase(), Phase::Done);

    let overhead = t.elapsed();
    println!("test_finalize_is_idempotent: Testing Overhead = {:?}", overhead);
}

/// Verifies that reset removes every trace of the previous stream.
#[test]
fn test_reset_forgets_prior_input() {
    let t = Instant::now();

    let mut d = CharsetDetector::new();
    d.feed(&[0xFF, 0xFE]);
    d.feed("половина".as_bytes());
    d.finalize();
    assert_eq!(d.charset(), Some(Charset::Utf16Le));

    d.reset();
    assert_eq!(d.phase(), Phase::AwaitingFirstBytes);
    assert_eq!(d.charset(), None);
    d.feed(b"3");
    d.finalize();
    assert_eq!(d.result(), detect(b"3"));

    let overhead = t.elapsed();
    println!("test_reset_forgets_prior_input: Testing Overhead = {:?}", overhead);
}

/// Verifies the unresolved outcomes: no data and too little evidence.
#[test]
fn test_unresolved_outcomes() {
    let t = Instant::now();

    let mut d = CharsetDetector::new();
    d.finalize();
    assert_eq!(d.charset(), None);
    assert_eq!(d.charset_name(), None);
    assert_eq!(d.result().to_string(), "Detection failed.");

    assert_eq!(detect(&[0x81, 0x81, 0x81]).charset, None);

    let overhead = t.elapsed();
    println!("test_unresolved_outcomes: Testing Overhead = {:?}", overhead);
}

/// Verifies the display form used by the command-line tool.
#[test]
fn test_result_display() {
    let t = Instant::now();

    assert_eq!(detect(b"plain").to_string(), "Charset: ASCII, confidence: 1.00");
    assert_eq!(
        detect(&[0xEF, 0xBB, 0xBF, b'x']).to_string(),
        "Charset: UTF-8, confidence: 1.00, BOM"
    );

    let overhead = t.elapsed();
    println!("test_result_display: Testing Overhead = {:?}", overhead);
}

/// Verifies that the publish threshold is a calibration parameter.
#[test]
fn test_publish_threshold_is_configurable() {
    let t = Instant::now();

    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(
        "Le café est très agréable à côté de la forêt, où l'été dure longtemps.",
    );
    let mut config = DetectorConfig::default();
    config.publish_threshold = 0.9;
    let mut d = CharsetDetector::with_config(config).unwrap();
    d.feed(&bytes);
    d.finalize();
    assert_eq!(d.charset(), None);

    config.publish_threshold = 1.5;
    assert!(matches!(CharsetDetector::with_config(config), Err(UdeError::Config(_))));

    let overhead = t.elapsed();
    println!("test_publish_threshold_is_configurable: Testing Overhead = {:?}", overhead);
}

/// Verifies that a calibration file parses into the detector configuration.
#[test]
fn test_config_from_toml() {
    let t = Instant::now();

    let config: DetectorConfig = toml::from_str(
        "publish_threshold = 0.25\nlatin1_scale = 0.4\n[multi_byte]\nenough_chars = 512\n",
    )
    .unwrap();
    assert_eq!(config.publish_threshold, 0.25);
    assert_eq!(config.latin1_scale, 0.4);
    assert_eq!(config.multi_byte.enough_chars, 512);
    assert_eq!(config.single_byte, DetectorConfig::default().single_byte);
    assert!(CharsetDetector::with_config(config).is_ok());

    let overhead = t.elapsed();
    println!("test_config_from_toml: Testing Overhead = {:?}", overhead);
}

/// Verifies that an escape trigger alone names no charset.
#[test]
fn test_escape_trigger_without_designator() {
    let t = Instant::now();

    for sample in [
        &b"colour \x1b[1mbold\x1b[0m"[..],
        b"\x1bx ~x plain",
        b"see~{x} here",
    ] {
        let result = detect(sample);
        assert_eq!(result.charset, None, "input {:?}", sample);
        assert!(!result.is_resolved());
    }

    let overhead = t.elapsed();
    println!("test_escape_trigger_without_designator: Testing Overhead = {:?}", overhead);
}
