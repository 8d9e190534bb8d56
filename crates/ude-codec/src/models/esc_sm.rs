//! Designator state machines for the code-switching encodings.
//!
//! Ordinary bytes keep a machine at `START`; `ITS_ME` means a complete
//! designator was seen.

use ude_core::Charset;
use ude_dsa::{pack4, pack4_values, BitTable, FOUR_BITS};

use crate::state_machine::{CodingModel, ERROR, ITS_ME, START};

// HZ-GB-2312

static HZ_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 5, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 1, 1, 1, 1, 1, 1, 1), // 20 - 27
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 28 - 2F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 30 - 37
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 38 - 3F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 40 - 47
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 48 - 4F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 50 - 57
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 58 - 5F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 60 - 67
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 68 - 6F
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 70 - 77
    pack4(1, 1, 1, 2, 1, 3, 4, 0), // 78 - 7F
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 80 - 87
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 88 - 8F
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 90 - 97
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 98 - 9F
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // A0 - A7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // A8 - AF
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // B0 - B7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // B8 - BF
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // C0 - C7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // C8 - CF
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // D0 - D7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // D8 - DF
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // E0 - E7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // E8 - EF
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // F0 - F7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // F8 - FF
];

const HZ_TILDE: u8 = 3;
const HZ_GB_EMPTY: u8 = 4;
const HZ_GB_ODD: u8 = 5;
const HZ_GB_EVEN: u8 = 6;
const HZ_GB_TILDE: u8 = 7;
const HZ_EMPTY_TILDE: u8 = 8;

#[rustfmt::skip]
const HZ_TRANSITIONS: [u8; 63] = [
    START, START, START, START, HZ_TILDE, START, ERROR, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    START, START, START, START, HZ_TILDE, START, ERROR, // ITS_ME
    ERROR, ERROR, HZ_GB_EMPTY, ERROR, START, START, ERROR, // TILDE
    ERROR, HZ_GB_ODD, HZ_GB_ODD, HZ_GB_ODD, HZ_EMPTY_TILDE, ERROR, ERROR, // GB_EMPTY
    ERROR, HZ_GB_EVEN, HZ_GB_EVEN, HZ_GB_EVEN, HZ_GB_EVEN, ERROR, ERROR, // GB_ODD
    ERROR, HZ_GB_ODD, HZ_GB_ODD, HZ_GB_ODD, HZ_GB_TILDE, ERROR, ERROR, // GB_EVEN
    ERROR, ERROR, ERROR, ITS_ME, ERROR, ERROR, ERROR, // GB_TILDE
    ERROR, ERROR, ERROR, START, ERROR, ERROR, ERROR, // EMPTY_TILDE
];

static HZ_STATES: [i32; 8] = pack4_values(&HZ_TRANSITIONS);

/// HZ: `~{` opens a GB run of byte pairs, `~}` closes it; `~~` and `~` + LF are literal in ASCII mode.
pub static HZ_MODEL: CodingModel = CodingModel {
    name: "HZ-GB-2312",
    charset: Charset::HzGb2312,
    class_table: BitTable::new(&HZ_CLASSES, FOUR_BITS, 256),
    class_count: 7,
    state_table: BitTable::new(&HZ_STATES, FOUR_BITS, 63),
    state_count: 9,
};

// ISO-2022-CN

static ISO2022CN_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 2, 0, 0, 0), // 20 - 27
    pack4(0, 3, 4, 5, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(0, 6, 0, 0, 0, 8, 0, 7), // 40 - 47
    pack4(9, 10, 10, 10, 10, 10, 0, 0), // 48 - 4F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 80 - 87
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 88 - 8F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 90 - 97
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 98 - 9F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // A0 - A7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // A8 - AF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // B0 - B7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // B8 - BF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // C0 - C7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // C8 - CF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // D0 - D7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // D8 - DF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // E0 - E7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // E8 - EF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // F0 - F7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // F8 - FF
];

const ISO2022CN_ESC: u8 = 3;
const ISO2022CN_ESC_DOLLAR: u8 = 4;
const ISO2022CN_SO_DESIGNATE: u8 = 5;
const ISO2022CN_SS2_DESIGNATE: u8 = 6;
const ISO2022CN_SS3_DESIGNATE: u8 = 7;

#[rustfmt::skip]
const ISO2022CN_TRANSITIONS: [u8; 88] = [
    START, ISO2022CN_ESC, START, START, START, START, START, START, START, START, START, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    START, ISO2022CN_ESC, START, START, START, START, START, START, START, START, START, // ITS_ME
    ERROR, ERROR, ISO2022CN_ESC_DOLLAR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ESC
    ERROR, ERROR, ERROR, ISO2022CN_SO_DESIGNATE, ISO2022CN_SS2_DESIGNATE, ISO2022CN_SS3_DESIGNATE, ERROR, ERROR, ERROR, ERROR, ERROR, // ESC_DOLLAR
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITS_ME, ITS_ME, ITS_ME, ERROR, ERROR, // SO_DESIGNATE
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITS_ME, ERROR, // SS2_DESIGNATE
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITS_ME, // SS3_DESIGNATE
];

static ISO2022CN_STATES: [i32; 11] = pack4_values(&ISO2022CN_TRANSITIONS);

/// ISO-2022-CN: `ESC $ ) A|G|E`, `ESC $ * H`, `ESC $ + I..M`.
pub static ISO2022CN_MODEL: CodingModel = CodingModel {
    name: "ISO-2022-CN",
    charset: Charset::Iso2022Cn,
    class_table: BitTable::new(&ISO2022CN_CLASSES, FOUR_BITS, 256),
    class_count: 11,
    state_table: BitTable::new(&ISO2022CN_STATES, FOUR_BITS, 88),
    state_count: 8,
};

// ISO-2022-JP

static ISO2022JP_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 3, 0, 0, 0), // 20 - 27
    pack4(2, 0, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(6, 7, 4, 9, 10, 0, 0, 0), // 40 - 47
    pack4(0, 8, 5, 0, 0, 0, 0, 0), // 48 - 4F
    pack4(0, 11, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 80 - 87
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 88 - 8F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 90 - 97
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 98 - 9F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // A0 - A7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // A8 - AF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // B0 - B7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // B8 - BF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // C0 - C7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // C8 - CF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // D0 - D7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // D8 - DF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // E0 - E7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // E8 - EF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // F0 - F7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // F8 - FF
];

const ISO2022JP_ESC: u8 = 3;
const ISO2022JP_ESC_PAREN: u8 = 4;
const ISO2022JP_ESC_DOLLAR: u8 = 5;
const ISO2022JP_ESC_DOLLAR_PAREN: u8 = 6;

#[rustfmt::skip]
const ISO2022JP_TRANSITIONS: [u8; 84] = [
    START, ISO2022JP_ESC, START, START, START, START, START, START, START, START, START, START, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    START, ISO2022JP_ESC, START, START, START, START, START, START, START, START, START, START, // ITS_ME
    ERROR, ERROR, ISO2022JP_ESC_PAREN, ISO2022JP_ESC_DOLLAR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, // ESC
    ERROR, ERROR, ERROR, ERROR, ITS_ME, ITS_ME, ERROR, ERROR, ITS_ME, ERROR, ERROR, ERROR, // ESC_PAREN
    ERROR, ERROR, ISO2022JP_ESC_DOLLAR_PAREN, ERROR, ITS_ME, ERROR, ITS_ME, ITS_ME, ERROR, ERROR, ERROR, ERROR, // ESC_DOLLAR
    ERROR, ERROR, ERROR, ERROR, ITS_ME, ERROR, ITS_ME, ITS_ME, ERROR, ITS_ME, ITS_ME, ITS_ME, // ESC_DOLLAR_PAREN
];

static ISO2022JP_STATES: [i32; 11] = pack4_values(&ISO2022JP_TRANSITIONS);

/// ISO-2022-JP: `ESC ( B|J|I`, `ESC $ @|A|B`, `ESC $ ( @|A|B|C|D|Q`.
pub static ISO2022JP_MODEL: CodingModel = CodingModel {
    name: "ISO-2022-JP",
    charset: Charset::Iso2022Jp,
    class_table: BitTable::new(&ISO2022JP_CLASSES, FOUR_BITS, 256),
    class_count: 12,
    state_table: BitTable::new(&ISO2022JP_STATES, FOUR_BITS, 84),
    state_count: 7,
};

// ISO-2022-KR

static ISO2022KR_CLASSES: [i32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1F
    pack4(0, 0, 0, 0, 2, 0, 0, 0), // 20 - 27
    pack4(0, 3, 0, 0, 0, 0, 0, 0), // 28 - 2F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3F
    pack4(0, 0, 0, 4, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 80 - 87
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 88 - 8F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 90 - 97
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 98 - 9F
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // A0 - A7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // A8 - AF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // B0 - B7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // B8 - BF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // C0 - C7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // C8 - CF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // D0 - D7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // D8 - DF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // E0 - E7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // E8 - EF
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // F0 - F7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // F8 - FF
];

const ISO2022KR_ESC: u8 = 3;
const ISO2022KR_ESC_DOLLAR: u8 = 4;
const ISO2022KR_ESC_DOLLAR_PAREN: u8 = 5;

#[rustfmt::skip]
const ISO2022KR_TRANSITIONS: [u8; 30] = [
    START, ISO2022KR_ESC, START, START, START, // START
    ERROR, ERROR, ERROR, ERROR, ERROR, // ERROR
    START, ISO2022KR_ESC, START, START, START, // ITS_ME
    ERROR, ERROR, ISO2022KR_ESC_DOLLAR, ERROR, ERROR, // ESC
    ERROR, ERROR, ERROR, ISO2022KR_ESC_DOLLAR_PAREN, ERROR, // ESC_DOLLAR
    ERROR, ERROR, ERROR, ERROR, ITS_ME, // ESC_DOLLAR_PAREN
];

static ISO2022KR_STATES: [i32; 4] = pack4_values(&ISO2022KR_TRANSITIONS);

/// ISO-2022-KR: `ESC $ ) C`.
pub static ISO2022KR_MODEL: CodingModel = CodingModel {
    name: "ISO-2022-KR",
    charset: Charset::Iso2022Kr,
    class_table: BitTable::new(&ISO2022KR_CLASSES, FOUR_BITS, 256),
    class_count: 5,
    state_table: BitTable::new(&ISO2022KR_STATES, FOUR_BITS, 30),
    state_count: 6,
};
