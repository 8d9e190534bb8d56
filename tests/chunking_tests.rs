//! # Chunking Tests: Split Invariance
//!
//! The verdict must not depend on how a stream is cut into chunks.

use proptest::prelude::*;
use std::time::Instant;
use ude::{detect, CharsetDetector, DetectionResult};

fn samples() -> Vec<Vec<u8>> {
    let japanese = "ウィキペディアはオープンコンテントの百科事典です。誰でも記事を編集できます。";
    let russian = "Москва является столицей России, город федерального значения.";
    let mut with_bom = vec![0xFF, 0xFE, 0x00, 0x00];
    with_bom.extend_from_slice(b"h\x00\x00\x00");
    vec![
        japanese.as_bytes().to_vec(),
        encoding_rs::SHIFT_JIS.encode(japanese).0.into_owned(),
        encoding_rs::ISO_2022_JP.encode(japanese).0.into_owned(),
        encoding_rs::WINDOWS_1251.encode(russian).0.into_owned(),
        encoding_rs::KOI8_R.encode(russian).0.into_owned(),
        b"plain ~{VP;*HKCq92:M9z~} text".to_vec(),
        b"colour \x1b[1mbold\x1b[0m".to_vec(),
        vec![0xEF, 0xBB, 0xBF, b'o', b'k'],
        with_bom,
        vec![0xEF, 0xBB, b'x', b'y'],
    ]
}

fn detect_in_chunks(bytes: &[u8], mut cuts: Vec<usize>) -> DetectionResult {
    cuts.retain(|&c| c <= bytes.len());
    cuts.sort_unstable();
    cuts.dedup();
    let mut d = CharsetDetector::new();
    let mut start = 0;
    for cut in cuts {
        d.feed(&bytes[start..cut]);
        start = cut;
    }
    d.feed(&bytes[start..]);
    d.finalize();
    d.result()
}

/// Verifies byte-at-a-time feeding against a single chunk.
#[test]
fn test_single_byte_chunks() {
    let t = Instant::now();

    for sample in samples() {
        let mut d = CharsetDetector::new();
        for byte in &sample {
            d.feed(std::slice::from_ref(byte));
        }
        d.finalize();
        assert_eq!(d.result(), detect(&sample), "sample {:02x?}", &sample[..8.min(sample.len())]);
    }

    let overhead = t.elapsed();
    println!("test_single_byte_chunks: Testing Overhead = {:?}", overhead);
}

proptest! {
    #[test]
    fn prop_any_partition_gives_the_same_verdict(
        index in 0usize..10,
        cuts in prop::collection::vec(0usize..256, 0..12),
    ) {
        let sample = &samples()[index];
        prop_assert_eq!(detect_in_chunks(sample, cuts), detect(sample));
    }
}
