use ude_core::Charset;

use crate::single_byte::SequenceModel;

pub mod bulgarian;
pub mod cyrillic;
pub mod greek;
pub mod hebrew;
pub mod thai;

pub static WIN1251_RUSSIAN: SequenceModel =
    SequenceModel::new(Charset::Windows1251, "Russian", &cyrillic::WIN1251_RANKS, &cyrillic::RUSSIAN_BIGRAMS);
pub static KOI8R_RUSSIAN: SequenceModel =
    SequenceModel::new(Charset::Koi8R, "Russian", &cyrillic::KOI8R_RANKS, &cyrillic::RUSSIAN_BIGRAMS);
pub static LATIN5_RUSSIAN: SequenceModel =
    SequenceModel::new(Charset::Iso8859_5, "Russian", &cyrillic::ISO_8859_5_RANKS, &cyrillic::RUSSIAN_BIGRAMS);
pub static MAC_CYRILLIC_RUSSIAN: SequenceModel = SequenceModel::new(
    Charset::MacCyrillic,
    "Russian",
    &cyrillic::MAC_CYRILLIC_RANKS,
    &cyrillic::RUSSIAN_BIGRAMS,
);
pub static IBM866_RUSSIAN: SequenceModel =
    SequenceModel::new(Charset::Ibm866, "Russian", &cyrillic::IBM866_RANKS, &cyrillic::RUSSIAN_BIGRAMS);
pub static IBM855_RUSSIAN: SequenceModel =
    SequenceModel::new(Charset::Ibm855, "Russian", &cyrillic::IBM855_RANKS, &cyrillic::RUSSIAN_BIGRAMS);

pub static LATIN7_GREEK: SequenceModel =
    SequenceModel::new(Charset::Iso8859_7, "Greek", &greek::ISO_8859_7_RANKS, &greek::GREEK_BIGRAMS);
pub static WIN1253_GREEK: SequenceModel =
    SequenceModel::new(Charset::Windows1253, "Greek", &greek::WIN1253_RANKS, &greek::GREEK_BIGRAMS);

pub static LATIN5_BULGARIAN: SequenceModel = SequenceModel::new(
    Charset::Iso8859_5,
    "Bulgarian",
    &bulgarian::ISO_8859_5_RANKS,
    &bulgarian::BULGARIAN_BIGRAMS,
);
pub static WIN1251_BULGARIAN: SequenceModel = SequenceModel::new(
    Charset::Windows1251,
    "Bulgarian",
    &bulgarian::WIN1251_RANKS,
    &bulgarian::BULGARIAN_BIGRAMS,
);

/// Logical-order Hebrew. The visual prober reuses it with swapped pairs.
pub static WIN1255_HEBREW: SequenceModel =
    SequenceModel::new(Charset::Windows1255, "Hebrew", &hebrew::WIN1255_RANKS, &hebrew::HEBREW_BIGRAMS);

pub static THAI_TIS620: SequenceModel =
    SequenceModel::new(Charset::Tis620, "Thai", &thai::TIS620_RANKS, &thai::THAI_BIGRAMS);

/// Every sequence model, for table validation.
pub static ALL_MODELS: [&SequenceModel; 12] = [
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
    &WIN1255_HEBREW,
    &THAI_TIS620,
];
