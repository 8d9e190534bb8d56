//! Greek sequence model.
//!
//! Rank order (most frequent first): αοετινρσμηκπυςλίγδήέάόχωθφύΑβώξΕΠΜΤΔζΣΟΚΗΝΙψΓΛΧΒΡΈΆΦΥϊΌΖΘΉΞΊΩϋΨΏ

use ude_dsa::pack2_digits;

use crate::single_byte::{OTH, SEP, UDF};

/// ISO-8859-7 byte to Greek rank.
pub static ISO_8859_7_RANKS: [u8; 256] = [
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
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, UDF, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH,  50, OTH,  49,  57,  59, OTH,  54, OTH, OTH,  63,  // B0
    OTH,  27,  47,  44,  35,  31,  55,  40,  56,  42,  39,  45,  33,  41,  58,  38,  // C0
     32,  48, UDF,  37,  34,  52,  51,  46,  62,  60, OTH, OTH,  20,  19,  18,  15,  // D0
    OTH,   0,  28,  16,  17,   2,  36,   9,  24,   4,  10,  14,   8,   5,  30,   1,  // E0
     11,   6,  13,   7,   3,  12,  25,  22,  43,  23,  53,  61,  21,  26,  29, UDF,  // F0
];

/// windows-1253 byte to Greek rank.
pub static WIN1253_RANKS: [u8; 256] = [
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 00
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 10
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 20
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 30
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 40
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 50
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 60
    SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP, SEP,  // 70
    OTH, UDF, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, UDF, OTH, UDF, UDF, UDF, UDF,  // 80
    UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, UDF, OTH, UDF, UDF, UDF, UDF,  // 90
    OTH, OTH,  50, OTH, OTH, OTH, OTH, OTH, OTH, OTH, UDF, OTH, OTH, UDF, OTH, OTH,  // A0
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH,  49,  57,  59, OTH,  54, OTH, OTH,  63,  // B0
    OTH,  27,  47,  44,  35,  31,  55,  40,  56,  42,  39,  45,  33,  41,  58,  38,  // C0
     32,  48, UDF,  37,  34,  52,  51,  46,  62,  60, OTH, OTH,  20,  19,  18,  15,  // D0
    OTH,   0,  28,  16,  17,   2,  36,   9,  24,   4,  10,  14,   8,   5,  30,   1,  // E0
     11,   6,  13,   7,   3,  12,  25,  22,  43,  23,  53,  61,  21,  26,  29, UDF,  // F0
];

/// Greek bigram classes, 64x64, row = previous rank.
pub static GREEK_BIGRAMS: [i32; 256] = pack2_digits(concat!(
    "1113333330332332331011202310202000002000000100000000020000000100",
    "1123333332333332322111212230201000001000000100000000010000000100",
    "1103333320333333330011222220112000001000000100000000010000000100",
    "3331313113103113103233131120110000001000000000000000000000000000",
    "3333032332320231232222212100221000001000000100000000000000000000",
    "3333310213102112222232132110010000001000000000000000000000000000",
    "3332311123102013312333321210121000001000000000000000000000000000",
    "3233311233223013011112222320110000000000000000000000000000000000",
    "3330321133031013103323111200210000000000000100000000000000000000",
    "1003033331310320210000102110001000000000000100000000000000000000",
    "3333213112212132023333121110120000000000000000000000000000000000",
    "3332313012011032102223120010010000000000000000000000000000000000",
    "2113133331130221211111202100111000001000000100000000010000000000",
    "0000000010000000000000000000100000000000000000000000000000000000",
    "3331310133112032113232021120120000000000000000000000000000000000",
    "3322032322120220220000121100101000002000000100000000000000000000",
    "3320323021301022213211220010011000000000000000000000000000000000",
    "2330302003003002001211010020010000000000000000000000000000000000",
    "0002022320210310110000102100001000000000000200000000000000000000",
    "2213132220221331310000312100102000001000000100000000000000000000",
    "1112132321210230220000102200101000002000000100000000000000000000",
    "1112132231120320220000211100100000001000000100000000000000000000",
    "2231213001001002002111121010020000000000000000000000000000000000",
    "1002032320110210221000101100100000000000000000000000000000000000",
    "2230111033002001002211010010010000000000000000000000000000000000",
    "3311201001101011102231021010010000000000000000000000000000000000",
    "1211132221120110110000112100101000000000000100000000000000000000",
    "1113333330332332331011202311202133332313033133223013221221220110",
    "2220202001000021111121010010110000000000000000000000000000000000",
    "0101132220110110110000001000100000000000000000000000000000000000",
    "2221200002001001001111010010000000000000000000000000000000000000",
    "1103333320333333330011222221112032331313033133213012311120232111",
    "3332313012011032102223120013010311200030213013103220103002022001",
    "3330321133031013103323111203210333000130323111121322103013031011",
    "3331313113103113103233131123110301101131313011113231303113033001",
    "2330302003003002001211010022010300000030303000002210301001021001",
    "1220210011001011001111010000010000000000000000000000000000000000",
    "3233311233223013011112222323110323310222313001211113302021032001",
    "1123333332333332322111212231201233321313233133223112311122121110",
    "3333213112212132023333121113120311320132212003113331203013022002",
    "1003033331310320210000102111001013310303130122103001000020100010",
    "3333310213102112222232132113010301321231313021100231202122023001",
    "3333032332320231232222212103221323331333230123222221002122111012",
    "1111100002001000001011000000000000000000000000000000000000000000",
    "3320323021301022213211220013011202010033123022203210101003122001",
    "3331310133112032113232021123120313110131313013010231202013022002",
    "2231213001001002002111121012020300100020112000103110101012022002",
    "2220202001000021111121010012110200010020102012012120001001011001",
    "3332311123102013312333321213121302211131313031311332203112132002",
    "2213132220221331310000312102102122311222031133312001100120211010",
    "1112133321210230320000103201101112222312131123112002000220100010", // Ά: Άρ Άγ Άθ are word-initial staples
    "3311201001101011102231021013010100100031102011001230101012012001",
    "2113133331130221211111202102111133311311131122213111011121110011",
    "1001011100100110000011000100100000001000000000000000000000000000",
    "1112132231120320220000211101100123221211131122212001000110001010",
    "1220210011001011001111010001010201000020112001000110101001011001",
    "2230111033002001002211010012010303000020311000001210201002011001",
    "0002022320210310110000102100001012210302020211102001000020100020",
    "2221200002001001001111010012000200100020202000000110101001011000",
    "3322032322120220220000121103101222222331230122112001000210102010",
    "1002032320110210221000101101100012220301030021112001000011000000",
    "0000010000010010000000100000000000000000000000000000000000000000",
    "1111100002001000001011000001000100100010201000000010101001000000",
    "0101132220110110110000001000100012110211031011012000000010000000",
).as_bytes());
