//! Bulgarian sequence model.
//!
//! Rank order (most frequent first): аениотрсвдкзлпмъябучгжйфцИшНАхПщСДРОКЕМВЗТГЛюБФУЙШЦЧХЯЮЪЖЩь

use ude_dsa::pack2_digits;

use crate::single_byte::{OTH, SEP, UDF};

/// ISO-8859-5 byte to Bulgarian rank.
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
     28,  45,  39,  42,  33,  37,  56,  40,  25,  48,  36,  43,  38,  27,  35,  30,  // B0
     34,  32,  41,  47,  46,  52,  50,  51,  49,  57,  55, OTH, OTH, OTH,  54,  53,  // C0
      0,  17,   8,  20,   9,   1,  21,  11,   3,  22,  10,  12,  14,   2,   4,  13,  // D0
      6,   7,   5,  18,  23,  29,  24,  19,  26,  31,  15, OTH,  58, OTH,  44,  16,  // E0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // F0
];

/// windows-1251 byte to Bulgarian rank.
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
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  // B0
     28,  45,  39,  42,  33,  37,  56,  40,  25,  48,  36,  43,  38,  27,  35,  30,  // C0
     34,  32,  41,  47,  46,  52,  50,  51,  49,  57,  55, OTH, OTH, OTH,  54,  53,  // D0
      0,  17,   8,  20,   9,   1,  21,  11,   3,  22,  10,  12,  14,   2,   4,  13,  // E0
      6,   7,   5,  18,  23,  29,  24,  19,  26,  31,  15, OTH,  58, OTH,  44,  16,  // F0
];

/// Bulgarian bigram classes, 64x64, row = previous rank.
pub static BULGARIAN_BIGRAMS: [i32; 256] = pack2_digits(concat!(
    "1131133333333330121222313020020200000000000000000000000000000000",
    "1132233323323331122223212030020100000000000010000000000000000000",
    "3323331313212011212110021010010100000000000010000000000000100000",
    "2332233333333231321321122020010100000000000000000000000000000000",
    "1132133333333331231333312010010100000000000000000000000000000000",
    "3323323231201112112110010000010000000000000000000000000000000000",
    "3323320222121122212022011020020000000000000000000000000000100000",
    "3323232130313313211110011000010000000000000000000000000000000000",
    "3323322211212113201111000000020000000000000000000000000000000000",
    "3323312222111113212111010010010000000000000000000000000000000000",
    "3213332221003112002000002010010000000000000010000000000000000000",
    "3133222132201321121210001010020000000000000000000000000000000000",
    "3333320211220012212111011010010000000000000020000000000000100000",
    "3313313210101002102000002010000000000000000010000000000000000000",
    "3312311110101101211000001000010000000000000000000000000000000000",
    "0110233222223120010111111010010200000000000010000000000000000000",
    "0130031231111120020111100000010100000000000000000000000000000000",
    "2312213120113012102110000000020200000000000000000000000000000000",
    "1121122322212220020221111010010200000000000000000000000000000000",
    "3323111020211011001000000000000000000000000000000000000000000000",
    "2122213111102111002000000000000000000000000000000000000000000000",
    "2322110013101001001000000000000000000000000000000000000000000000",
    "0120121211113010010110001010000000000000000000000000000000000000",
    "3202211101001011002010000000000000000000000000000000000000000000",
    "2213100020100001111000000000000000000000000010000000000000000000",
    "2332233333333231321321122223212133323333332302211223130111000000",
    "2222101010301001001100000000000000000000000000000000000000000000",
    "3323331313212011212110021312310133132311131211220111121101100000",
    "1131133333333330121222313123123233313133332302113232210022000000",
    "1112311110000011001000000000000000000000000000000000000000000000",
    "3313313210101002102000002311300020331301010110020120011200000000",
    "2212211000000000001000000000000000000000000000000000000000000000",
    "3323232130313313211110011302313010223313131301110011120300000000",
    "3323312222111113212111010312311022231312111101120101120310000000",
    "3323320222121122212022011322321022031322222101120210220220100000",
    "1132133333333331231333312213113133313133333303113123120131000000",
    "3213332221003112002000002311311021230212030310020120101200000000",
    "1132233323323331122223212233123133323132232312122322211131000000",
    "3312311110101101211000001201311010131301010101010010120100000000",
    "3323322211212113201111000302321021232311121200010001220310000000",
    "3133222132201321121210001313323012222123021102010112210100000000",
    "3323323231201112112110010302311021332313021101120001110200000000",
    "2122213111102111002000000202201011321111010200020000000100000000",
    "3333320211220012212111011313310021032311221021120111122210100000",
    "1010011101111000000211011000000000000000000000000000000000000000",
    "2312213120113012102110000201220210321312111300020001210202000000",
    "3202211101001011002010000200300011120210011100020000000100000000",
    "1121122322212220020221111112112232212122122202101112100012000000",
    "0120121211113010010110001012000021111111121301000111000000000000",
    "2222101010301001001100000202200000113201000100010001000100000000",
    "2213100020100001111000000301200000011202000011010000011100000000",
    "3323111020211011001000000302300000112312110100010000000100000000",
    "1112311110000011001000000201100010130111010000010000000100000000",
    "0130031231111120020111100003011121101123131102001001100011000000",
    "1010011101111000000211011001100011101000111100100012000010000000",
    "0110233222223120010111111011011222322122231311101111101012000000",
    "2322110013101001001000000202200003011301010100010000000100000000",
    "2212211000000000001000000201200000120200010000010000000000000000",
    "0000100000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
).as_bytes());
