//! Russian sequence model.
//!
//! Rank order (most frequent first): оеаинтрслвкпдмуьязыйбчгжфхшюцщНПСАОИРВэКМТёЛЕДФБУЗГъЧЙЭШЯЦХЫЬЖЮЩ

use ude_dsa::pack2_digits;

use crate::single_byte::{OTH, SEP, UDF};

/// windows-1251 byte to Russian rank.
pub static WIN1251_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // 80
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // 90
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  42, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // B0
     33,  47,  37,  50,  45,  44,  61,  49,  35,  53,  39,  43,  40,  30,  34,  31,  // C0
     36,  32,  41,  48,  46,  58,  57,  52,  55,  63, OTH,  59,  60,  54,  62,  56,  // D0
      2,  20,   9,  22,  12,   1,  23,  17,   3,  19,  10,   8,  13,   4,   0,  11,  // E0
      6,   7,   5,  14,  24,  25,  28,  21,  26,  29,  51,  18,  15,  38,  27,  16,  // F0
];

/// KOI8-R byte to Russian rank.
pub static KOI8R_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // 80
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // 90
    OTH, OTH, OTH,  42, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // B0
     27,   2,  20,  28,  12,   1,  24,  22,  25,   3,  19,  10,   8,  13,   4,   0,  // C0
     11,  16,   6,   7,   5,  14,  23,   9,  15,  18,  17,  26,  38,  29,  21,  51,  // D0
     62,  33,  47,  57,  45,  44,  46,  50,  58,  35,  53,  39,  43,  40,  30,  34,  // E0
     31,  56,  36,  32,  41,  48,  61,  37,  60,  59,  49,  55,  54,  63,  52, OTH,  // F0
];

/// ISO-8859-5 byte to Russian rank.
pub static ISO_8859_5_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
    UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF,  // 80
    UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF, UDF,  // 90
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, OTH,  // A0
     33,  47,  37,  50,  45,  44,  61,  49,  35,  53,  39,  43,  40,  30,  34,  31,  // B0
     36,  32,  41,  48,  46,  58,  57,  52,  55,  63, OTH,  59,  60,  54,  62,  56,  // C0
      2,  20,   9,  22,  12,   1,  23,  17,   3,  19,  10,   8,  13,   4,   0,  11,  // D0
      6,   7,   5,  14,  24,  25,  28,  21,  26,  29,  51,  18,  15,  38,  27,  16,  // E0
    OTH,  42, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // F0
];

/// x-mac-cyrillic byte to Russian rank.
pub static MAC_CYRILLIC_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
     33,  47,  37,  50,  45,  44,  61,  49,  35,  53,  39,  43,  40,  30,  34,  31,  // 80
     36,  32,  41,  48,  46,  58,  57,  52,  55,  63, OTH,  59,  60,  54,  62,  56,  // 90
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // B0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // C0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  42,  16,  // D0
      2,  20,   9,  22,  12,   1,  23,  17,   3,  19,  10,   8,  13,   4,   0,  11,  // E0
      6,   7,   5,  14,  24,  25,  28,  21,  26,  29,  51,  18,  15,  38,  27, OTH,  // F0
];

/// IBM866 byte to Russian rank.
pub static IBM866_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
     33,  47,  37,  50,  45,  44,  61,  49,  35,  53,  39,  43,  40,  30,  34,  31,  // 80
     36,  32,  41,  48,  46,  58,  57,  52,  55,  63, OTH,  59,  60,  54,  62,  56,  // 90
      2,  20,   9,  22,  12,   1,  23,  17,   3,  19,  10,   8,  13,   4,   0,  11,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // B0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // C0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // D0
      6,   7,   5,  14,  24,  25,  28,  21,  26,  29,  51,  18,  15,  38,  27,  16,  // E0
    OTH,  42, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // F0
];

/// IBM855 byte to Russian rank.
pub static IBM855_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
    OTH, OTH, OTH, OTH,  42, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // 80
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  27,  62,  51, OTH,  // 90
      2,  33,  20,  47,  28,  57,  12,  45,   1,  44,  24,  46,  22,  50, OTH, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH,  25,  58,   3,  35, OTH, OTH, OTH, OTH,  19,  53, OTH,  // B0
    OTH, OTH, OTH, OTH, OTH, OTH,  10,  39, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // C0
      8,  43,  13,  40,   4,  30,   0,  34,  11, OTH, OTH, OTH, OTH,  31,  16, OTH,  // D0
     56,   6,  36,   7,  32,   5,  41,  14,  48,  23,  61,   9,  37,  15,  60, OTH,  // E0
    UDF,  18,  59,  17,  49,  26,  55,  38,  54,  29,  63,  21,  52, OTH, OTH, OTH,  // F0
];

/// Russian bigram classes, 64x64, row = previous rank.
pub static RUSSIAN_BIGRAMS: [i32; 256] = pack2_digits(concat!(
    "2312333333333310230332331131210000000010001000000000000000000000",
    "2212333333323310120322221121220000000010001000000000000000000000",
    "1311333333333320330333221222210000000010001000000000000000000000",
    "2323333333322310330332212222210000000000001000000000000000000000",
    "3333331211213122213011212111100000000010001000000000000000000000",
    "3333313313311123112011101111000000000010001000000000000000000000",
    "3333222212211231213011221221110000000010001000000000000000000000",
    "3323231232331223302021111211100000000010001000000001000000000000",
    "3333210111211123312012121102010000000010001000000000000000000000",
    "3333222232211221113001100211010000000010001000000000000000000000",
    "3333223231111131111011111111200000000010001000000000000000000000",
    "3333113121121131101011001111100000000010000000000000000000000000",
    "3333212232212121112011121111100000000010001000000000000000000000",
    "3333211112121221202011101111100000000010001000000000000000000000",
    "1211222321223210120222221112120000000010000000000000000000000000",
    "1101321201211100130011101021100000000000001000000000000000000000",
    "1210221112111110120111111111110000000010000000000000000000000000",
    "3232312112113321112011110000100000000000001000000001000000000000",
    "0300122122221200110311110310110000000010000000000000000000000000",
    "1111121231112110111011101111100000000000000000000000000000000000",
    "3232213131211121112011111111120000000010001000000002000000000000",
    "1333221111211111000001010110000000000000001000000000000000000000",
    "3222212121111120101011101101100000000010001000000000000000000000",
    "1323301111112111000010100010000000000010001000000000000000000000",
    "2132111110110111001100101100000000000000000000000000000000000000",
    "2112112111101111101010001110000000000010000000000000000000000000",
    "1223111111210111101011000000000000000000001000000000000000000000",
    "1011121110111100010112111001120000000010000000000000000000000000",
    "1223110111111010012010100101100000000000000000000000000000000000",
    "0322100000000011000000000000000000000000001000000000000000000000",
    "3333331211213122213011212111103123331112131133212120101121132110",
    "3333113121121131101011001111101213333111110231113000101111111010",
    "3323231232331223302021111211102322331213231331122011101131223110",
    "1311333333333320330333221222213331113313331333132320331232200221",
    "2312333333333310230332331131213331223313331333131330231322100311",
    "2323333333322310330332212222213232233303331332231320230232200121",
    "3333222212211231213011221221112123332212221131113120101221231211",
    "3333222232211221113001100211012123332212221331002110101110231011",
    "0001121121111110010110101110100000000000000000000000000000000000",
    "3333223231111131111011111111202123333111121331113110101112111110",
    "3333211112121221202011101111102213331211211131112010101121121010",
    "3333313313311123112011101111003133333313111131112110101110123010",
    "0000211111101100010100010100000000000000000000000000000000000000",
    "3333210111211123312012121102012113330112111131112110201030123221",
    "2212333333323310120322221121223231223313331323121220231212100212",
    "3333212232212121112011121111102123332212111332112110101111121210",
    "2132111110110111001100101100001113221001110110101010010000111000",
    "3232213131211121112011111111122113323112111321112112101111121112",
    "1211222321223210120222221112122231112112220223121220221111100222",
    "3232312112113321112011110000103113322201311123012111100011021100",
    "3222212121111120101011101101102112322111111221112010101011110010",
    "0200000000000000100000000000000000000000001000000000000000000000",
    "1333221111211111000001010110002113131102121131001000100100101100",
    "1111121231112110111011101111101121111101120312111110100111110010",
    "0001121121111110010110101110101110011101120201111110010101100000",
    "1223111111210111101011000000001112131102111120011000100010011000",
    "1210221112111110120111111111112111101211120121111210111111100111",
    "1223110111111010012010100101101112130101010121011110000001120010",
    "2112112111101111101010001110001011222111110111111000001110111000",
    "0300122122221200110311110310111210002212220231010110131111300101",
    "1101321201211100130011101021103120111102121011110310100211000010",
    "1323301111112111000010100010003112131111101132011010001100001000",
    "1011121110111100010112111001121111111011120101110110211001000112",
    "0322100000000011000000000000001002020000001030001000000000001000",
).as_bytes());
