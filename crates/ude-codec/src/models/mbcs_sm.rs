//! Coding state machines for the multi-byte encodings.
//!
//! Transition rows are indexed by byte class. `ITS_ME` marks one complete
//! character and its row repeats `START`.

use ude_core::Charset;
use ude_dsa::{pack4, pack4_values, BitTable, FOUR_BITS};

use crate::state_machine::{CodingModel, ERROR, ITS_ME};

// UTF-8

static UTF8_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 80 - 87
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 88 - 8F
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 90 - 97
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 98 - 9F
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // A0 - A7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // A8 - AF
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // B0 - B7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // B8 - BF
    pack4(4, 4, 5, 5, 5, 5, 5, 5), // C0 - C7
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // C8 - CF
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // D0 - D7
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // D8 - DF
    pack4(6, 7, 7, 7, 7, 7, 7, 7), // E0 - E7
    pack4(7, 7, 7, 7, 7, 8, 7, 7), // E8 - EF
    pack4(9, 10, 10, 10, 11, 4, 4, 4), // F0 - F7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // F8 - FF
];

const UTF8_NEED1: u8 = 3;
const UTF8_NEED2: u8 = 4;
const UTF8_AFTER_E0: u8 = 5;
const UTF8_AFTER_ED: u8 = 6;
const UTF8_NEED3: u8 = 7;
const UTF8_AFTER_F0: u8 = 8;
const UTF8_AFTER_F4: u8 = 9;

#[rustfmt::skip]
const UTF8_TRANSITIONS: [u8; 120] = [
    ITS_ME, ERROR, ERROR, ERROR, ERROR, UTF8_NEED1, UTF8_AFTER_E0, UTF8_NEED2, UTF8_AFTER_ED, UTF8_AFTER_F0, UTF8_NEED3, UTF8_AFTER_F4, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ERROR, ERROR, ERROR, ERROR, UTF8_NEED1, UTF8_AFTER_E0, UTF8_NEED2, UTF8_AFTER_ED, UTF8_AFTER_F0, UTF8_NEED3, UTF8_AFTER_F4, // ITS_ME
    ERROR, ITS_ME, ITS_ME, ITS_ME, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // NEED1
    ERROR, UTF8_NEED1, UTF8_NEED1, UTF8_NEED1, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // NEED2
    ERROR, ERROR, ERROR, UTF8_NEED1, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // AFTER_E0
    ERROR, UTF8_NEED1, UTF8_NEED1, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // AFTER_ED
    ERROR, UTF8_NEED2, UTF8_NEED2, UTF8_NEED2, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // NEED3
    ERROR, ERROR, UTF8_NEED2, UTF8_NEED2, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // AFTER_F0
    ERROR, UTF8_NEED2, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // AFTER_F4
];

static UTF8_STATES: [i32; 15] = pack4_values(&UTF8_TRANSITIONS);

/// Strict RFC 3629 UTF-8: no overlong forms, no surrogates, nothing above U+10FFFF.
pub static UTF8_MODEL: CodingModel = CodingModel {
    name: "UTF-8",
    charset: Charset::Utf8,
    class_table: BitTable::new(&UTF8_CLASSES, FOUR_BITS, 256),
    class_count: 12,
    state_table: BitTable::new(&UTF8_STATES, FOUR_BITS, 120),
    state_count: 10,
};

// Shift_JIS

static SJIS_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 40 - 47
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 48 - 4F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 50 - 57
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 58 - 5F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 60 - 67
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 68 - 6F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 70 - 77
    pack4(1, 1, 1, 1, 1, 1, 1, 0), // 78 - 7F
    pack4(2, 3, 3, 3, 3, 3, 3, 3), // 80 - 87
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 88 - 8F
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 90 - 97
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 98 - 9F
    pack4(2, 4, 4, 4, 4, 4, 4, 4), // A0 - A7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // A8 - AF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B0 - B7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B8 - BF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C0 - C7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C8 - CF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D0 - D7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D8 - DF
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // E0 - E7
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // E8 - EF
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // F0 - F7
    pack4(5, 5, 5, 5, 5, 6, 6, 6), // F8 - FF
];

const SJIS_TRAIL: u8 = 3;

#[rustfmt::skip]
const SJIS_TRANSITIONS: [u8; 28] = [
    ITS_ME, ITS_ME, ERROR, SJIS_TRAIL, ITS_ME, SJIS_TRAIL, ERROR, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ITS_ME, ERROR, SJIS_TRAIL, ITS_ME, SJIS_TRAIL, ERROR, // ITS_ME
    ERROR, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ITS_ME, ERROR, // TRAIL
];

static SJIS_STATES: [i32; 4] = pack4_values(&SJIS_TRANSITIONS);

/// Shift_JIS: single bytes 00-7F and A1-DF, lead 81-9F or E0-FC, trail 40-7E or 80-FC.
pub static SJIS_MODEL: CodingModel = CodingModel {
    name: "Shift_JIS",
    charset: Charset::ShiftJis,
    class_table: BitTable::new(&SJIS_CLASSES, FOUR_BITS, 256),
    class_count: 7,
    state_table: BitTable::new(&SJIS_STATES, FOUR_BITS, 28),
    state_count: 4,
};

// EUC-JP

static EUCJP_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 80 - 87
    pack4(1, 1, 1, 1, 1, 1, 2, 3), // 88 - 8F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 90 - 97
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 98 - 9F
    pack4(1, 4, 4, 4, 4, 4, 4, 4), // A0 - A7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // A8 - AF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B0 - B7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B8 - BF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C0 - C7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C8 - CF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D0 - D7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D8 - DF
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // E0 - E7
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // E8 - EF
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // F0 - F7
    pack4(5, 5, 5, 5, 5, 5, 5, 1), // F8 - FF
];

const EUCJP_TRAIL: u8 = 3;
const EUCJP_KANA: u8 = 4;
const EUCJP_X0212: u8 = 5;

#[rustfmt::skip]
const EUCJP_TRANSITIONS: [u8; 36] = [
    ITS_ME, ERROR, EUCJP_KANA, EUCJP_X0212, EUCJP_TRAIL, EUCJP_TRAIL, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ERROR, EUCJP_KANA, EUCJP_X0212, EUCJP_TRAIL, EUCJP_TRAIL, // ITS_ME
    ERROR, ERROR, ERROR, ERROR, ITS_ME, ITS_ME, // TRAIL
    ERROR, ERROR, ERROR, ERROR, ITS_ME, ERROR, // KANA
    ERROR, ERROR, ERROR, ERROR, EUCJP_TRAIL, EUCJP_TRAIL, // X0212
];

static EUCJP_STATES: [i32; 5] = pack4_values(&EUCJP_TRANSITIONS);

/// EUC-JP: JIS X 0208 pairs, SS2 half-width kana, SS3 JIS X 0212 triples.
pub static EUCJP_MODEL: CodingModel = CodingModel {
    name: "EUC-JP",
    charset: Charset::EucJp,
    class_table: BitTable::new(&EUCJP_CLASSES, FOUR_BITS, 256),
    class_count: 6,
    state_table: BitTable::new(&EUCJP_STATES, FOUR_BITS, 36),
    state_count: 6,
};

// EUC-KR

static EUCKR_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 80 - 87
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 88 - 8F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 90 - 97
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 98 - 9F
    pack4(1, 2, 2, 2, 2, 2, 2, 2), // A0 - A7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // A8 - AF
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // B0 - B7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // B8 - BF
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // C0 - C7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // C8 - CF
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // D0 - D7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // D8 - DF
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // E0 - E7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // E8 - EF
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // F0 - F7
    pack4(2, 2, 2, 2, 2, 2, 2, 1), // F8 - FF
];

const EUCKR_TRAIL: u8 = 3;

#[rustfmt::skip]
const EUCKR_TRANSITIONS: [u8; 12] = [
    ITS_ME, ERROR, EUCKR_TRAIL, // START
    ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ERROR, EUCKR_TRAIL, // ITS_ME
    ERROR, ERROR, ITS_ME, // TRAIL
];

static EUCKR_STATES: [i32; 2] = pack4_values(&EUCKR_TRANSITIONS);

/// EUC-KR: KS X 1001 pairs in A1-FE.
pub static EUCKR_MODEL: CodingModel = CodingModel {
    name: "EUC-KR",
    charset: Charset::EucKr,
    class_table: BitTable::new(&EUCKR_CLASSES, FOUR_BITS, 256),
    class_count: 3,
    state_table: BitTable::new(&EUCKR_STATES, FOUR_BITS, 12),
    state_count: 4,
};

// EUC-TW

static EUCTW_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 80 - 87
    pack4(1, 1, 1, 1, 1, 1, 2, 1), // 88 - 8F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 90 - 97
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 98 - 9F
    pack4(1, 3, 3, 3, 3, 3, 3, 3), // A0 - A7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // A8 - AF
    pack4(3, 4, 4, 4, 4, 4, 4, 4), // B0 - B7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B8 - BF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C0 - C7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C8 - CF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D0 - D7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D8 - DF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // E0 - E7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // E8 - EF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // F0 - F7
    pack4(4, 4, 4, 4, 4, 4, 4, 1), // F8 - FF
];

const EUCTW_TRAIL: u8 = 3;
const EUCTW_PLANE: u8 = 4;
const EUCTW_SS2_LEAD: u8 = 5;

#[rustfmt::skip]
const EUCTW_TRANSITIONS: [u8; 30] = [
    ITS_ME, ERROR, EUCTW_PLANE, EUCTW_TRAIL, EUCTW_TRAIL, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ERROR, EUCTW_PLANE, EUCTW_TRAIL, EUCTW_TRAIL, // ITS_ME
    ERROR, ERROR, ERROR, ITS_ME, ITS_ME, // TRAIL
    ERROR, ERROR, ERROR, EUCTW_SS2_LEAD, ERROR, // PLANE
    ERROR, ERROR, ERROR, EUCTW_TRAIL, EUCTW_TRAIL, // SS2_LEAD
];

static EUCTW_STATES: [i32; 4] = pack4_values(&EUCTW_TRANSITIONS);

/// EUC-TW: CNS 11643 plane 1 pairs, SS2 plane-selected four-byte forms.
pub static EUCTW_MODEL: CodingModel = CodingModel {
    name: "EUC-TW",
    charset: Charset::EucTw,
    class_table: BitTable::new(&EUCTW_CLASSES, FOUR_BITS, 256),
    class_count: 5,
    state_table: BitTable::new(&EUCTW_STATES, FOUR_BITS, 30),
    state_count: 6,
};

// GB18030

static GB18030_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 30 - 37
    pack4(1, 1, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 40 - 47
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 48 - 4F
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 50 - 57
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 58 - 5F
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 60 - 67
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 68 - 6F
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 70 - 77
    pack4(2, 2, 2, 2, 2, 2, 2, 0), // 78 - 7F
    pack4(3, 4, 4, 4, 4, 4, 4, 4), // 80 - 87
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 88 - 8F
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 90 - 97
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 98 - 9F
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // A0 - A7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // A8 - AF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B0 - B7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B8 - BF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C0 - C7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C8 - CF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D0 - D7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D8 - DF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // E0 - E7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // E8 - EF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // F0 - F7
    pack4(4, 4, 4, 4, 4, 4, 4, 5), // F8 - FF
];

const GB18030_TRAIL: u8 = 3;
const GB18030_FOUR_THIRD: u8 = 4;
const GB18030_FOUR_LAST: u8 = 5;

#[rustfmt::skip]
const GB18030_TRANSITIONS: [u8; 36] = [
    ITS_ME, ITS_ME, ITS_ME, ERROR, GB18030_TRAIL, ERROR, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ITS_ME, ITS_ME, ERROR, GB18030_TRAIL, ERROR, // ITS_ME
    ERROR, GB18030_FOUR_THIRD, ITS_ME, ITS_ME, ITS_ME, ERROR, // TRAIL
    ERROR, ERROR, ERROR, ERROR, GB18030_FOUR_LAST, ERROR, // FOUR_THIRD
    ERROR, ITS_ME, ERROR, ERROR, ERROR, ERROR, // FOUR_LAST
];

static GB18030_STATES: [i32; 5] = pack4_values(&GB18030_TRANSITIONS);

/// GB18030: two-byte lead 81-FE with trail 40-7E or 80-FE, four-byte 81-FE 30-39 81-FE 30-39.
pub static GB18030_MODEL: CodingModel = CodingModel {
    name: "GB18030",
    charset: Charset::Gb18030,
    class_table: BitTable::new(&GB18030_CLASSES, FOUR_BITS, 256),
    class_count: 6,
    state_table: BitTable::new(&GB18030_STATES, FOUR_BITS, 36),
    state_count: 6,
};

// Big5

static BIG5_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 40 - 47
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 48 - 4F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 50 - 57
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 58 - 5F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 60 - 67
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 68 - 6F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 70 - 77
    pack4(1, 1, 1, 1, 1, 1, 1, 0), // 78 - 7F
    pack4(2, 3, 3, 3, 3, 3, 3, 3), // 80 - 87
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 88 - 8F
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 90 - 97
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 98 - 9F
    pack4(3, 4, 4, 4, 4, 4, 4, 4), // A0 - A7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // A8 - AF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B0 - B7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // B8 - BF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C0 - C7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // C8 - CF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D0 - D7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // D8 - DF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // E0 - E7
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // E8 - EF
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // F0 - F7
    pack4(4, 4, 4, 4, 4, 4, 4, 2), // F8 - FF
];

const BIG5_TRAIL: u8 = 3;

#[rustfmt::skip]
const BIG5_TRANSITIONS: [u8; 20] = [
    ITS_ME, ITS_ME, ERROR, BIG5_TRAIL, BIG5_TRAIL, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    ITS_ME, ITS_ME, ERROR, BIG5_TRAIL, BIG5_TRAIL, // ITS_ME
    ERROR, ITS_ME, ERROR, ERROR, ITS_ME, // TRAIL
];

static BIG5_STATES: [i32; 3] = pack4_values(&BIG5_TRANSITIONS);

/// Big5: lead 81-FE, trail 40-7E or A1-FE.
pub static BIG5_MODEL: CodingModel = CodingModel {
    name: "Big5",
    charset: Charset::Big5,
    class_table: BitTable::new(&BIG5_CLASSES, FOUR_BITS, 256),
    class_count: 5,
    state_table: BitTable::new(&BIG5_STATES, FOUR_BITS, 20),
    state_count: 4,
};
