//! Thai sequence model.
//!
//! Rank order (most frequent first): ารอกม่นเ้ดงัลีติยบสแวไขทจคหป์พูะืชโใำซุฟถ็ณผภษธึฐญฮศฉฤฝๆฏ๊ฑฬฎ๋ฒฆ

use ude_dsa::pack2_digits;

use crate::single_byte::{OTH, SEP, UDF};

/// TIS-620 byte to Thai rank.
pub static TIS620_RANKS: [u8; 256] = [
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
    UDF,   3,  22, OTH,  25, OTH,  63,  10,  24,  52,  33,  37, OTH,  49,  60,  56,  // A0
     48,  58,  62,  42,   9,  14,  40,  23,  46,   6,  17,  27,  43,  54,  29,  39,  // B0
     44,   4,  16,   1,  53,  12, OTH,  20,  51,  45,  18,  26,  59,   2,  50, OTH,  // C0
     31,  11,   0,  36,  15,  13,  47,  32,  38,  30, OTH, UDF, UDF, UDF, UDF, OTH,  // D0
      7,  19,  34,  35,  21, OTH,  55,  41,   5,   8,  57,  61,  28, OTH, OTH, OTH,  // E0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, UDF, UDF, UDF,  // F0
];

/// Thai bigram classes, 64x64, row = previous rank.
pub static THAI_BIGRAMS: [i32; 256] = pack2_digits(concat!(
    "0323303303303030323232223322030303220201103113301121001000110000",
    "3333322332232323233332132222313331221130333011112011000000000000",
    "3333333323333333333323222322012222221222120300110111001110000000",
    "3322232322133333113332333222212102223221121312111011121111001001",
    "3332233313032333223222332322133232220111111221111010100000100000",
    "3333303302302030323233223222030002131101300110000011001100000000",
    "3333232333122333323333332332221233322221110110221111100100000000",
    "0333303003103030233030333333030003000302100110100122202000000000",
    "3232303302301020112233222222010001122100100100000001100100000000",
    "3332212332332332312322332222232111132111200120010000000100000000",
    "3333312302102131223323332332020112330211200110001011101200000000",
    "0003233033302030233030012101020002000102001000103301000001000010",
    "3232132332333323232222322111213331212121020210010110000010000000",
    "0333233332102020322212221212010002220201100100101010000000000100",
    "3333232331131223212212220111302311222121120100000001000001000000",
    "0313333323303030233231122112210002210101100011200111100000110000",
    "3223233222332122122222221222313222220121101110110001100000000000",
    "3333113311132323132322222312112112220131110200110010200100000000",
    "3322332213132332212121211221202211213121300110100001100000000000",
    "0233202002003030233020132222030001000203100200100010000000000000",
    "3232233331233223322212212211111111110111011110100001000000000000",
    "0121301003002020020030221113010001000101100000000010000000000000",
    "2331112131021321201121111010000001110010013110021000100000000000",
    "3331122121131313211111101100201111113120120000220002010000000000",
    "3222112221231322122112132111111311123120120100010000000000000000",
    "2332232220232222112131110200212122213131001000101000010000000000",
    "3301313030033121101020000000211100000010010010000100000000000000",
    "2322112211133223201312111012211111110120030030001100000010000000",
    "0223202302002020122312222121010001220202100200100111000000000000",
    "3323101100123123231111111110211132010011100100200000010000000000",
    "0213132232203020121121111113010001210101000000000010000010000100",
    "0123202302102020232232232122020002220101200110001010100000000000",
    "0030132021000000010000000000000000000000000000000000000000000000",
    "2121133131021212111121111101101131210121010000100010000000000000",
    "0233202003102020231020121323020001000202100010000020000000100000",
    "0000003002000020011010102030000003000000000000000000000000000000",
    "0212102302203010113212111231010000120100100000000000000000000000",
    "3131212221121313112010010101202100100111020000020000000000000000",
    "0212232213102020221111111311110002110100003000100200000000000000",
    "1221100231012112101111010001111010110111000000000010000000000000",
    "3131111321012121112210111112113110120011100000020000000000000001",
    "0032203101101020020011003101000000010100000000000000000000000000",
    "2311100100000211112101011110210300000010001010000000000000100000",
    "0000020000012003102000000000002000000000000000000000000000000000",
    "3100000000010000000000010000001001000000000000000000000000000000",
    "3210101000002011100101010010000000100000002010001010000000001000",
    "3111100100010212101101111011200001000010000000000000000000000000",
    "0002131020201000010000000000000000000000000000000000000000000000",
    "2121101200001110111111011112110001100101000000000010001000000000",
    "2001010100001100001100101021000000100000000000000200000000000000",
    "2111111100021212111010001000001001100111000000000000000000000000",
    "1200101100010111012101011000002000000010000001000000000000000000",
    "1000000000001101120010000000010100000000000000000000000000000000",
    "0000001000000010000000000010000000000000000002000001000000000000",
    "1200010020010000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "1001000000000111001010000010000000010000000000000000000000000000",
    "1001000000000000000000000000000100000000000000000000000000000000",
    "0101000000001100000000000100100100000000000000000000000000000000",
    "0000000000010000001000000000000000100000000000000000000000000000",
    "1100000100000100000000000000000000000000000000000000000000000000",
    "0000000000000000100000000000000000000000000000000000000000000000",
    "0000001000000000000000000000000000000000000010000000000000000000",
    "0000010000000000000000000000000000000000000000000000000000000000",
).as_bytes());
