//! # Corpus Tests: Reference Sentences
//!
//! Encodes reference sentences with `encoding_rs` and checks that every
//! prober family names the encoding back.

use encoding_rs::Encoding;
use std::time::Instant;
use ude::{detect, Charset, DetectionResult};

const JAPANESE: &str = "ウィキペディアはオープンコンテントの百科事典です。基本方針に賛同していただけるなら、誰でも記事を編集したり新しく作成したりできます。ガイドブックを読んでから、サンドボックスで練習してみましょう。質問は利用案内でどうぞ。";
const KOREAN: &str = "위키백과는 전 세계 여러 언어로 만들어 나가는 자유 백과사전으로, 누구나 참여하실 수 있습니다. 대한민국의 수도는 서울특별시이며, 한국어를 사용하는 사람들이 함께 만들어 가고 있습니다.";
const SIMPLIFIED: &str = "维基百科是一个自由内容、公开编辑且多语言的网络百科全书协作计划，通过维基技术使得所有人都可以简单地使用网页浏览器修改其中的内容。中华人民共和国是世界上人口最多的国家之一，首都是北京。";
const TRADITIONAL: &str = "維基百科是一個自由內容、公開編輯且多語言的網路百科全書協作計畫，透過維基技術使得所有人都可以簡單地使用網頁瀏覽器修改其中的內容。台灣位於東亞，首都是台北。";
const RUSSIAN: &str = "Москва является столицей России, город федерального значения, административный центр Центрального федерального округа и центр Московской области, в состав которой не входит. Крупнейший по численности населения город России и её субъект, самый населённый из городов, полностью расположенных в Европе.";
const BULGARIAN: &str = "София е столицата и най-големият град на България. Градът е разположен в Софийската котловина в подножието на планината Витоша и е административен, културен и икономически център на страната.";
const GREEK: &str = "Η Ελλάδα είναι χώρα της νοτιοανατολικής Ευρώπης, στο νοτιότερο άκρο της Βαλκανικής χερσονήσου, στην Ανατολική Μεσόγειο. Συνορεύει στην ξηρά με την Αλβανία, τη Βόρεια Μακεδονία και τη Βουλγαρία.";
const HEBREW: &str = "ישראל היא מדינה במזרח התיכון השוכנת על החוף הדרומי מזרחי של הים התיכון. מדינת ישראל הוכרזה בשנת אלף תשע מאות ארבעים ושמונה והיא מדינה יהודית ודמוקרטית.";
const THAI: &str = "ประเทศไทย มีชื่ออย่างเป็นทางการว่า ราชอาณาจักรไทย เป็นรัฐชาติอันตั้งอยู่ในภูมิภาคเอเชียตะวันออกเฉียงใต้ มีพรมแดนทางทิศตะวันออกติดลาวและกัมพูชา";
const GREEK_PLACES: &str = "Άρτα, Ήπειρος: Ώρα για ένα ταξίδι στην Ελλάδα. Η πόλη είναι όμορφη και οι άνθρωποι φιλόξενοι.";
const FRENCH: &str = "Le café est très agréable à côté de la forêt, où l'été dure longtemps. Les élèves étudient à l'école près de la rivière.";

/// "維基百科是一個自由內容、公開編輯且多語言的網路百科全書協作計畫，透過維基技術使得所有人都可以簡單地使用網頁瀏覽器修改其中的內容。台灣位於東亞，首都是台北。"
/// in EUC-TW (CNS 11643 plane 1).
const EUC_TW_SAMPLE: &[u8] = b"\
    \xea\xc4\xd9\xd7\xc8\xcb\xd2\xef\xd1\xd2\xc4\xa1\xd4\xb6\xc8\xdc\xc6\xf1\xc4\xf9\xd5\xa9\xa1\xa3\
    \xc4\xfc\xe2\xe4\xee\xbe\xf2\xd2\xc5\xe2\xc7\xe9\xeb\xa3\xcb\xc6\xce\xfb\xea\xbd\xe6\xfb\xc8\xcb\
    \xd2\xef\xc7\xc0\xd5\xf3\xcc\xb6\xc9\xa2\xd3\xd3\xe0\xeb\xa1\xa2\xdd\xe0\xe7\xb4\xea\xc4\xd9\xd7\
    \xca\xc0\xdd\xb4\xcb\xf0\xda\xb5\xcd\xd4\xc8\xb4\xc4\xa9\xdd\xe7\xc6\xab\xc5\xe8\xf6\xfc\xde\xcc\
    \xc7\xe2\xcb\xf0\xc6\xee\xea\xbd\xd3\xf7\xf6\xdf\xfb\xaa\xf0\xc2\xd4\xba\xca\xd1\xcc\xa7\xc4\xe3\
    \xce\xfb\xc4\xf9\xd5\xa9\xa1\xa4\xc6\xba\xfd\xa4\xc8\xed\xcd\xf5\xce\xa9\xcb\xe9\xa1\xa2\xd3\xfb\
    \xdd\xe7\xd1\xd2\xc6\xba\xc6\xa1\xa1\xa4";

const CYRILLIC_UPPER: &str = "АБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯЁ";
const CYRILLIC_LOWER: &str = "абвгдежзийклмнопрстуфхцчшщъыьэюяё";
#[rustfmt::skip]
const IBM855_UPPER: [u8; 33] = [
    0xA1, 0xA3, 0xEC, 0xAD, 0xA7, 0xA9, 0xEA, 0xF4, 0xB8, 0xBE, 0xC7, 0xD1, 0xD3, 0xD5, 0xD7, 0xDD,
    0xE2, 0xE4, 0xE6, 0xE8, 0xAB, 0xB6, 0xA5, 0xFC, 0xF6, 0xFA, 0x9F, 0xF2, 0xEE, 0xF8, 0x9D, 0xE0,
    0x85,
];
#[rustfmt::skip]
const IBM855_LOWER: [u8; 33] = [
    0xA0, 0xA2, 0xEB, 0xAC, 0xA6, 0xA8, 0xE9, 0xF3, 0xB7, 0xBD, 0xC6, 0xD0, 0xD2, 0xD4, 0xD6, 0xD8,
    0xE1, 0xE3, 0xE5, 0xE7, 0xAA, 0xB5, 0xA4, 0xFB, 0xF5, 0xF9, 0x9E, 0xF1, 0xED, 0xF7, 0x9C, 0xDE,
    0x84,
];

/// IBM855 for ASCII plus the Russian alphabet; `encoding_rs` has no codec
/// for it.
fn ibm855(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                return c as u8;
            }
            let (letters, bytes) = if c.is_uppercase() {
                (CYRILLIC_UPPER, &IBM855_UPPER)
            } else {
                (CYRILLIC_LOWER, &IBM855_LOWER)
            };
            let index = letters
                .chars()
                .position(|l| l == c)
                .unwrap_or_else(|| panic!("{c} is not in the IBM855 letter map"));
            bytes[index]
        })
        .collect()
}

fn encoded(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, unmappable) = encoding.encode(text);
    assert!(!unmappable, "{} cannot encode the sample", encoding.name());
    bytes.into_owned()
}

fn assert_detects(bytes: &[u8], expected: Charset, min_confidence: f32) -> DetectionResult {
    let result = detect(bytes);
    assert_eq!(result.charset, Some(expected), "got {}", result);
    assert!(
        result.confidence >= min_confidence,
        "{} confidence {} below {}",
        expected,
        result.confidence,
        min_confidence
    );
    assert!(!result.bom_detected);
    result
}

/// Verifies the multi-byte family on Japanese, Korean and Chinese text.
#[test]
fn test_cjk_multi_byte() {
    let t = Instant::now();

    assert_detects(&encoded(JAPANESE, encoding_rs::SHIFT_JIS), Charset::ShiftJis, 0.9);
    assert_detects(&encoded(JAPANESE, encoding_rs::EUC_JP), Charset::EucJp, 0.9);
    assert_detects(&encoded(KOREAN, encoding_rs::EUC_KR), Charset::EucKr, 0.9);
    assert_detects(&encoded(SIMPLIFIED, encoding_rs::GB18030), Charset::Gb18030, 0.9);
    assert_detects(&encoded(TRADITIONAL, encoding_rs::BIG5), Charset::Big5, 0.9);
    assert_detects(EUC_TW_SAMPLE, Charset::EucTw, 0.7);

    let overhead = t.elapsed();
    println!("test_cjk_multi_byte: Testing Overhead = {:?}", overhead);
}

/// Verifies that escape designators are conclusive.
#[test]
fn test_escape_encodings() {
    let t = Instant::now();

    let result = assert_detects(&encoded(JAPANESE, encoding_rs::ISO_2022_JP), Charset::Iso2022Jp, 1.0);
    assert_eq!(result.confidence, 1.0);
    assert_detects(b"\x1b$)C\x0e4kGQ9N19\x0f", Charset::Iso2022Kr, 1.0);
    assert_detects(b"Capital: ~{VP;*HKCq92:M9z~}.", Charset::HzGb2312, 1.0);

    let overhead = t.elapsed();
    println!("test_escape_encodings: Testing Overhead = {:?}", overhead);
}

/// Verifies that the Cyrillic models pick the right code page.
#[test]
fn test_cyrillic_code_pages() {
    let t = Instant::now();

    let cases = [
        (encoding_rs::WINDOWS_1251, Charset::Windows1251),
        (encoding_rs::KOI8_R, Charset::Koi8R),
        (encoding_rs::ISO_8859_5, Charset::Iso8859_5),
        (encoding_rs::X_MAC_CYRILLIC, Charset::MacCyrillic),
        (encoding_rs::IBM866, Charset::Ibm866),
    ];
    for (encoding, expected) in cases {
        assert_detects(&encoded(RUSSIAN, encoding), expected, 0.5);
    }
    assert_detects(&ibm855(RUSSIAN), Charset::Ibm855, 0.5);
    assert_detects(&encoded(BULGARIAN, encoding_rs::WINDOWS_1251), Charset::Windows1251, 0.5);

    let overhead = t.elapsed();
    println!("test_cyrillic_code_pages: Testing Overhead = {:?}", overhead);
}

/// Verifies the Greek and Thai single-byte models.
#[test]
fn test_greek_and_thai() {
    let t = Instant::now();

    assert_detects(&encoded(GREEK, encoding_rs::ISO_8859_7), Charset::Iso8859_7, 0.5);
    // encoding_rs maps TIS-620 onto its windows-874 superset.
    assert_detects(&encoded(THAI, encoding_rs::WINDOWS_874), Charset::Tis620, 0.5);

    let overhead = t.elapsed();
    println!("test_greek_and_thai: Testing Overhead = {:?}", overhead);
}

/// Verifies that the byte for Ά separates the two Greek code pages.
#[test]
fn test_greek_code_pages_with_alpha_tonos() {
    let t = Instant::now();

    let iso = encoded(GREEK_PLACES, encoding_rs::ISO_8859_7);
    let windows = encoded(GREEK_PLACES, encoding_rs::WINDOWS_1253);
    assert!(iso.contains(&0xB6));
    assert!(windows.contains(&0xA2));
    assert_detects(&iso, Charset::Iso8859_7, 0.5);
    assert_detects(&windows, Charset::Windows1253, 0.5);

    let overhead = t.elapsed();
    println!("test_greek_code_pages_with_alpha_tonos: Testing Overhead = {:?}", overhead);
}

/// Verifies logical and visual Hebrew.
#[test]
fn test_hebrew_logical_and_visual() {
    let t = Instant::now();

    assert_detects(&encoded(HEBREW, encoding_rs::WINDOWS_1255), Charset::Windows1255, 0.5);
    let visual: String = HEBREW.chars().rev().collect();
    assert_detects(&encoded(&visual, encoding_rs::ISO_8859_8), Charset::Iso8859_8, 0.5);

    let overhead = t.elapsed();
    println!("test_hebrew_logical_and_visual: Testing Overhead = {:?}", overhead);
}

/// Verifies that Western European text lands on windows-1252, and the
/// same text in UTF-8 on UTF-8.
#[test]
fn test_latin1() {
    let t = Instant::now();

    let result = assert_detects(&encoded(FRENCH, encoding_rs::WINDOWS_1252), Charset::Windows1252, 0.3);
    assert!(result.confidence <= 0.5);
    assert_detects(FRENCH.as_bytes(), Charset::Utf8, 1.0);

    let overhead = t.elapsed();
    println!("test_latin1: Testing Overhead = {:?}", overhead);
}

/// Verifies that registry names round-trip through `encoding_rs` labels.
#[test]
fn test_registry_labels() {
    let t = Instant::now();

    for charset in Charset::ALL {
        assert_eq!(Charset::from_label(charset.name()), Some(charset), "{}", charset.name());
    }
    assert_eq!(Charset::from_label("cp1251"), Some(Charset::Windows1251));
    assert_eq!(Charset::from_label("SHIFT_JIS"), Some(Charset::ShiftJis));
    assert_eq!(Charset::Koi8R.encoding(), Some(encoding_rs::KOI8_R));
    assert_eq!(Charset::from_label("no-such-charset"), None);

    let overhead = t.elapsed();
    println!("test_registry_labels: Testing Overhead = {:?}", overhead);
}
