//! Hebrew sequence model.
//!
//! Rank order (most frequent first): יוהלארתנמבקשפסדגטןחעכםזצץךףַּ

use ude_dsa::pack2_digits;

use crate::single_byte::{OTH, SEP, UDF};

/// windows-1255 byte to Hebrew rank.
pub static WIN1255_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
    OTH, UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, UDF, UDF, UDF, UDF,  // 80
    UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, UDF, UDF, UDF, UDF,  // 90
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // B0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH,  28, OTH, OTH, UDF, OTH,  27, OTH, OTH, OTH,  // C0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, UDF, UDF, UDF, UDF, UDF, UDF,  // D0
      4,   9,  15,  14,   2,   1,  22,  18,  16,   0,  25,  20,   3,  21,   8,  17,  // E0
      7,  13,  19,  26,  12,  24,  23,  10,   5,  11,   6, UDF, UDF, UDF, UDF, UDF,  // F0
];

/// Hebrew bigram classes, 64x64, row = previous rank.
pub static HEBREW_BIGRAMS: [i32; 256] = pack2_digits(concat!(
    "3333333333333333332133221110000000000000000000000000000000000000",
    "3323333333333333333222221221000000000000000000000000000000000000",
    "3322333233333322113220220000000000000000000000000000000000000000",
    "3331312333332222312221121210000000000000000000000000000000000000",
    "3333133332222322332112211110000000000000000000000000000000000000",
    "3332313223333233312230221200000000000000000000000000000000000000",
    "3322221232312111123120110100000000000000000000000000000000000000",
    "3332313222212333311231210100000000000000000000000000000000000000",
    "3333333333332331222320220200000000000000000000000000000000000000",
    "3333333321321222212210123000000000000000000000000000000000000000",
    "3332232323122211221000120020000000000000000000000000000000000000",
    "3333223222202013111112010100000000000000000000000000000000000000",
    "3322233211221222111210010000100000000000000000000000000000000000",
    "3323321332203211321111010110000000000000000000000000000000000000",
    "3332231121221112011221100010000000000000000000000000000000000000",
    "3322231211021221110112110000000000000000000000000000000000000000",
    "3332331222211101122200110000000000000000000000000000000000000000",
    "2210001011101100000110000000000000000000000000000000000000000000",
    "3322222123110131111001101000000000000000000000000000000000000000",
    "3222132222111121110012110000000000000000000000000000000000000000",
    "2322123311131120121001200010000000000000000000000000000000000000",
    "3101010100010010000100000000000000000000000000000000000000000000",
    "3220221221100111011011000010000000000000000000000000000000000000",
    "3322221012102001001100001000000000000000000000000000000000000000",
    "1100000002000000000000000000000000000000000000000000000000000000",
    "1100110010010000000000000000000000000000000000000000000000000000",
    "1100101000000100000000000000000000000000000000000000000000000000",
    "0000000000000010000000000000000000000000000000000000000000000000",
    "0000000000100000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
).as_bytes());
