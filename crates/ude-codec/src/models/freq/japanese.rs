//! Frequent character sets for Japanese encodings.
//!
//! Each entry is `lead << 8 | trail`.

/// Most frequent Shift_JIS double-byte characters, sorted.
pub static SHIFT_JIS_FREQUENT: &[u16] = &[
    0x8140, 0x8141, 0x8142, 0x8145, 0x8146, 0x8148, 0x8158, 0x815B, 0x8160, 0x8163, 0x8164, 0x8165,
    0x8166, 0x8167, 0x8168, 0x8169, 0x816A, 0x8175, 0x8176, 0x817C, 0x8196, 0x81A8, 0x8250, 0x8251,
    0x829F, 0x82A0, 0x82A2, 0x82A4, 0x82A6, 0x82A8, 0x82A9, 0x82AA, 0x82AB, 0x82AC, 0x82AD, 0x82AE,
    0x82AF, 0x82B0, 0x82B1, 0x82B2, 0x82B3, 0x82B5, 0x82B6, 0x82B7, 0x82B8, 0x82B9, 0x82BB, 0x82BC,
    0x82BD, 0x82BE, 0x82BF, 0x82C1, 0x82C2, 0x82C3, 0x82C4, 0x82C5, 0x82C6, 0x82C7, 0x82C8, 0x82C9,
    0x82CA, 0x82CB, 0x82CC, 0x82CD, 0x82CE, 0x82CF, 0x82D0, 0x82D1, 0x82D3, 0x82D4, 0x82D6, 0x82D7,
    0x82D9, 0x82DA, 0x82DC, 0x82DD, 0x82DE, 0x82DF, 0x82E0, 0x82E2, 0x82E5, 0x82E6, 0x82E7, 0x82E8,
    0x82E9, 0x82EA, 0x82EB, 0x82ED, 0x82F0, 0x82F1, 0x8340, 0x8341, 0x8342, 0x8343, 0x8344, 0x8345,
    0x8346, 0x8347, 0x8348, 0x8349, 0x834A, 0x834B, 0x834C, 0x834D, 0x834E, 0x834F, 0x8350, 0x8351,
    0x8352, 0x8353, 0x8354, 0x8355, 0x8356, 0x8357, 0x8358, 0x8359, 0x835A, 0x835B, 0x835C, 0x835D,
    0x835E, 0x835F, 0x8360, 0x8362, 0x8363, 0x8365, 0x8366, 0x8367, 0x8368, 0x8369, 0x836A, 0x836B,
    0x836C, 0x836D, 0x836E, 0x836F, 0x8370, 0x8371, 0x8372, 0x8373, 0x8374, 0x8375, 0x8376, 0x8377,
    0x8378, 0x8379, 0x837A, 0x837B, 0x837C, 0x837D, 0x837E, 0x8380, 0x8381, 0x8382, 0x8383, 0x8384,
    0x8385, 0x8386, 0x8387, 0x8388, 0x8389, 0x838A, 0x838B, 0x838C, 0x838D, 0x838F, 0x8393, 0x8394,
    0x88A4, 0x88AB, 0x88B3, 0x88B5, 0x88B6, 0x88C0, 0x88C3, 0x88C4, 0x88C8, 0x88CA, 0x88CB, 0x88CD,
    0x88D3, 0x88D5, 0x88D7, 0x88D9, 0x88DA, 0x88E1, 0x88E4, 0x88E6, 0x88EA, 0x88EC, 0x88EF, 0x88F3,
    0x88F6, 0x88F8, 0x8942, 0x8945, 0x895E, 0x895F, 0x8965, 0x8969, 0x8970, 0x897A, 0x897E, 0x8980,
    0x8984, 0x8987, 0x8989, 0x898F, 0x8993, 0x899B, 0x899E, 0x899F, 0x89A1, 0x89A2, 0x89A4, 0x89A9,
    0x89AA, 0x89AB, 0x89AF, 0x89B9, 0x89BA, 0x89BB, 0x89BC, 0x89BD, 0x89BF, 0x89C1, 0x89C2, 0x89C3,
    0x89CA, 0x89CC, 0x89CE, 0x89D2, 0x89D3, 0x89D4, 0x89D7, 0x89DD, 0x89DF, 0x89E6, 0x89EA, 0x89EE,
    0x89EF, 0x89F0, 0x89F1, 0x89F2, 0x89F3, 0x89FC, 0x8A42, 0x8A43, 0x8A45, 0x8A4A, 0x8A4B, 0x8A4F,
    0x8A51, 0x8A54, 0x8A59, 0x8A65, 0x8A67, 0x8A69, 0x8A6C, 0x8A6D, 0x8A6F, 0x8A70, 0x8A72, 0x8A75,
    0x8A79, 0x8A83, 0x8A84, 0x8A87, 0x8A88, 0x8A89, 0x8AA8, 0x8AAA, 0x8AAE, 0x8AAF, 0x8AB4, 0x8AB5,
    0x8AB7, 0x8AC2, 0x8AC4, 0x8AC7, 0x8AC8, 0x8AC9, 0x8ACF, 0x8AD1, 0x8AD4, 0x8AD6, 0x8AD7, 0x8AD8,
    0x8ADB, 0x8ADC, 0x8ADD, 0x8AE2, 0x8AEB, 0x8AED, 0x8AEE, 0x8AEF, 0x8AF1, 0x8AF2, 0x8AF3, 0x8AF9,
    0x8AFA, 0x8AFC, 0x8B40, 0x8B41, 0x8B43, 0x8B49, 0x8B4B, 0x8B4C, 0x8B4E, 0x8B55, 0x8B5A, 0x8B5B,
    0x8B5D, 0x8B5E, 0x8B60, 0x8B6C, 0x8B70, 0x8B74, 0x8B76, 0x8B78, 0x8B79, 0x8B7B, 0x8B7D, 0x8B81,
    0x8B86, 0x8B8B, 0x8B8C, 0x8B8E, 0x8B91, 0x8B92, 0x8B93, 0x8B96, 0x8B97, 0x8B9E, 0x8B9F, 0x8BA3,
    0x8BA4, 0x8BA6, 0x8BAB, 0x8BAD, 0x8BB0, 0x8BB3, 0x8BB5, 0x8BB7, 0x8BBE, 0x8BBF, 0x8BC6, 0x8BC7,
    0x8BC8, 0x8BC9, 0x8BCA, 0x8BCF, 0x8BD6, 0x8BD9, 0x8BDF, 0x8BE0, 0x8BE3, 0x8BE5, 0x8BE6, 0x8BE9,
    0x8BEF, 0x8BF3, 0x8BF4, 0x8BF6, 0x8BF7, 0x8C46, 0x8C49, 0x8C4A, 0x8C51, 0x8C57, 0x8C58, 0x8C5E,
    0x8C5F, 0x8C60, 0x8C67, 0x8C68, 0x8C69, 0x8C6E, 0x8C6F, 0x8C70, 0x8C72, 0x8C76, 0x8C78, 0x8C79,
    0x8C84, 0x8C85, 0x8C87, 0x8C88, 0x8C8A, 0x8C8B, 0x8C8E, 0x8C8F, 0x8C92, 0x8C94, 0x8C97, 0x8C9B,
    0x8C9F, 0x8CA0, 0x8CA7, 0x8CA9, 0x8CAD, 0x8CAE, 0x8CAF, 0x8CB1, 0x8CB3, 0x8CB4, 0x8CB5, 0x8CB8,
    0x8CB9, 0x8CBB, 0x8CBE, 0x8CC0, 0x8CC2, 0x8CC3, 0x8CC4, 0x8CC5, 0x8CC7, 0x8CC8, 0x8CC9, 0x8CCA,
    0x8CCD, 0x8CCE, 0x8CD0, 0x8CDD, 0x8CDF, 0x8CE3, 0x8CE4, 0x8CEA, 0x8CEB, 0x8CEC, 0x8CF0, 0x8CF3,
    0x8CF6, 0x8CF7, 0x8CF8, 0x8CFB, 0x8CFC, 0x8D44, 0x8D48, 0x8D4C, 0x8D58, 0x8D5C, 0x8D5D, 0x8D60,
    0x8D67, 0x8D6C, 0x8D73, 0x8D77, 0x8D7E, 0x8D80, 0x8D81, 0x8D82, 0x8D86, 0x8D87, 0x8D8F, 0x8D90,
    0x8D91, 0x8D9E, 0x8DA1, 0x8DAA, 0x8DAC, 0x8DB2, 0x8DB6, 0x8DB7, 0x8DB8, 0x8DC0, 0x8DC2, 0x8DC4,
    0x8DC5, 0x8DCF, 0x8DD7, 0x8DDA, 0x8DDB, 0x8DDD, 0x8DE3, 0x8DE8, 0x8DE9, 0x8DEC, 0x8DED, 0x8DF5,
    0x8DFC, 0x8E4F, 0x8E51, 0x8E52, 0x8E5A, 0x8E63, 0x8E64, 0x8E67, 0x8E6C, 0x8E6D, 0x8E6E, 0x8E71,
    0x8E73, 0x8E76, 0x8E77, 0x8E78, 0x8E7B, 0x8E7E, 0x8E80, 0x8E86, 0x8E88, 0x8E8B, 0x8E8E, 0x8E91,
    0x8E96, 0x8E97, 0x8E99, 0x8E9A, 0x8E9C, 0x8E9D, 0x8E9E, 0x8E9F, 0x8EA0, 0x8EA1, 0x8EA6, 0x8EA9,
    0x8EAB, 0x8EAD, 0x8EAE, 0x8EAF, 0x8EB2, 0x8EB8, 0x8EBF, 0x8EC0, 0x8ECA, 0x8ECC, 0x8ECE, 0x8ED0,
    0x8ED2, 0x8EDF, 0x8EE3, 0x8EE5, 0x8EE6, 0x8EE7, 0x8EE8, 0x8EEA, 0x8EED, 0x8EF1, 0x8EF3, 0x8EF5,
    0x8EFB, 0x8EFC, 0x8F42, 0x8F43, 0x8F48, 0x8F49, 0x8F4B, 0x8F4F, 0x8F54, 0x8F57, 0x8F5B, 0x8F5C,
    0x8F5D, 0x8F63, 0x8F64, 0x8F6B, 0x8F6F, 0x8F70, 0x8F71, 0x8F7A, 0x8F80, 0x8F82, 0x8F83, 0x8F87,
    0x8F88, 0x8F89, 0x8F8A, 0x8F8F, 0x8F90, 0x8F91, 0x8F94, 0x8F95, 0x8F98, 0x8F9C, 0x8FA7, 0x8FAB,
    0x8FAC, 0x8FAD, 0x8FB2, 0x8FB3, 0x8FB8, 0x8FC1, 0x8FC6, 0x8FC8, 0x8FCA, 0x8FCC, 0x8FD5, 0x8FD8,
    0x8FDA, 0x8FDB, 0x8FE1, 0x8FE3, 0x8FE6, 0x8FE7, 0x8FE8, 0x8FE9, 0x8FEA, 0x8FED, 0x8FEE, 0x8FF0,
    0x8FF3, 0x8FF4, 0x8FFC, 0x9041, 0x9046, 0x904C, 0x904D, 0x9055, 0x9056, 0x9058, 0x905B, 0x905E,
    0x905F, 0x9065, 0x9066, 0x9067, 0x9069, 0x906C, 0x9071, 0x907B, 0x907D, 0x9082, 0x9084, 0x9085,
    0x9094, 0x90A2, 0x90A7, 0x90AB, 0x90AC, 0x90AD, 0x90AE, 0x90B3, 0x90B5, 0x90B6, 0x90B8, 0x90BB,
    0x90BC, 0x90C2, 0x90C3, 0x90CC, 0x90CD, 0x90CE, 0x90CF, 0x90D4, 0x90D5, 0x90D8, 0x90DA, 0x90DC,
    0x90DD, 0x90E0, 0x90E2, 0x90E6, 0x90E7, 0x90E8, 0x90E9, 0x90EA, 0x90EC, 0x90ED, 0x90F6, 0x90FC,
    0x9149, 0x914A, 0x914E, 0x914F, 0x9150, 0x9152, 0x9153, 0x9166, 0x9167, 0x916A, 0x9174, 0x9177,
    0x917A, 0x917C, 0x917D, 0x9180, 0x9181, 0x918A, 0x918D, 0x9195, 0x9196, 0x9197, 0x9198, 0x919C,
    0x919D, 0x91A2, 0x91A3, 0x91A4, 0x91A5, 0x91A6, 0x91AA, 0x91AB, 0x91AC, 0x91AE, 0x91B0, 0x91B1,
    0x91B5, 0x91B6, 0x91B9, 0x91BC, 0x91BD, 0x91BE, 0x91C3, 0x91C5, 0x91C8, 0x91CC, 0x91CE, 0x91D1,
    0x91D2, 0x91D4, 0x91D6, 0x91DE, 0x91E3, 0x91E4, 0x91E5, 0x91E6, 0x91E8, 0x91F0, 0x9241, 0x9242,
    0x9248, 0x924E, 0x9250, 0x9253, 0x9254, 0x925A, 0x925B, 0x9266, 0x9269, 0x926C, 0x926D, 0x926E,
    0x9275, 0x9276, 0x9278, 0x927A, 0x927C, 0x9285, 0x9286, 0x928A, 0x928D, 0x9298, 0x929B, 0x92A3,
    0x92A9, 0x92B2, 0x92B4, 0x92B7, 0x92B9, 0x92BB, 0x92BC, 0x92C7, 0x92CA, 0x92E1, 0x92E2, 0x92E8,
    0x92E9, 0x92EA, 0x92F1, 0x92F6, 0x92F9, 0x9349, 0x934B, 0x9354, 0x9355, 0x9357, 0x9359, 0x935C,
    0x935D, 0x935F, 0x9360, 0x9363, 0x9364, 0x9368, 0x936E, 0x936F, 0x9372, 0x9373, 0x9378, 0x9379,
    0x9380, 0x9387, 0x938A, 0x938C, 0x938D, 0x9394, 0x9396, 0x9399, 0x939A, 0x939B, 0x939D, 0x939E,
    0x93A2, 0x93A7, 0x93AA, 0x93AD, 0x93AE, 0x93AF, 0x93B1, 0x93B9, 0x93BD, 0x93BE, 0x93BF, 0x93C1,
    0x93C6, 0x93C7, 0x93C8, 0x93CB, 0x93CD, 0x93DE, 0x93E0, 0x93EA, 0x93EC, 0x93EF, 0x93F1, 0x93FA,
    0x93FC, 0x9440, 0x9443, 0x9446, 0x944E, 0x944F, 0x945B, 0x945C, 0x9468, 0x946A, 0x946E, 0x9470,
    0x9472, 0x9473, 0x9474, 0x9477, 0x947A, 0x947B, 0x947D, 0x9492, 0x9496, 0x94A0, 0x94AD, 0x94B2,
    0x94BA, 0x94BB, 0x94BC, 0x94BD, 0x94C0, 0x94C4, 0x94C5, 0x94CA, 0x94CD, 0x94D4, 0x94DB, 0x94E4,
    0x94E9, 0x94ED, 0x94EF, 0x94F0, 0x94F1, 0x94F2, 0x94F5, 0x94F6, 0x954B, 0x9551, 0x9553, 0x9557,
    0x955C, 0x955D, 0x9560, 0x9562, 0x9563, 0x9569, 0x9570, 0x9573, 0x9574, 0x9578, 0x957A, 0x9581,
    0x9582, 0x9584, 0x9589, 0x958C, 0x9591, 0x9594, 0x9595, 0x9597, 0x959B, 0x959C, 0x959D, 0x959F,
    0x95A1, 0x95A7, 0x95A8, 0x95AA, 0x95B4, 0x95B6, 0x95B9, 0x95BA, 0x95BD, 0x95C0, 0x95C1, 0x95C2,
    0x95C4, 0x95CA, 0x95CF, 0x95D0, 0x95D2, 0x95D3, 0x95D4, 0x95DB, 0x95E2, 0x95EF, 0x95F1, 0x95FA,
    0x95FB, 0x9640, 0x964B, 0x964D, 0x9659, 0x965D, 0x9668, 0x966B, 0x967B, 0x967C, 0x9684, 0x9686,
    0x9688, 0x968B, 0x9696, 0x969E, 0x96A1, 0x96A2, 0x96A7, 0x96AC, 0x96AF, 0x96B3, 0x96B5, 0x96BC,
    0x96BD, 0x96BE, 0x96C2, 0x96C5, 0x96CA, 0x96CD, 0x96D6, 0x96D8, 0x96D9, 0x96DA, 0x96DF, 0x96E2,
    0x96E4, 0x96EC, 0x96EE, 0x96F0, 0x96F1, 0x96F3, 0x9744, 0x974C, 0x9752, 0x9759, 0x975C, 0x975D,
    0x975E, 0x9765, 0x976A, 0x976C, 0x976D, 0x9770, 0x9774, 0x9776, 0x977D, 0x9788, 0x978A, 0x978D,
    0x978E, 0x9790, 0x9793, 0x9797, 0x9798, 0x979A, 0x979C, 0x979D, 0x97A3, 0x97A5, 0x97A6, 0x97A7,
    0x97AA, 0x97AF, 0x97B6, 0x97B9, 0x97BC, 0x97C7, 0x97CA, 0x97CC, 0x97CD, 0x97CE, 0x97D1, 0x97D6,
    0x97D7, 0x97DD, 0x97DE, 0x97DF, 0x97E1, 0x97EF, 0x97F0, 0x97F1, 0x9840, 0x9841, 0x9848, 0x985A,
    0x985E, 0x985F, 0x9861, 0x9862, 0x9863, 0x9867, 0x9870, 0x995B, 0x9BA0, 0x9C62, 0x9E42, 0x9E90,
    0xE04F, 0xE773, 0xE774, 0xE887,
];

/// Most frequent EUC-JP double-byte characters, sorted.
pub static EUC_JP_FREQUENT: &[u16] = &[
    0xA4A1, 0xA4A2, 0xA4A4, 0xA4A6, 0xA4A8, 0xA4AA, 0xA4AB, 0xA4AC, 0xA4AD, 0xA4AE, 0xA4AF, 0xA4B0,
    0xA4B1, 0xA4B2, 0xA4B3, 0xA4B4, 0xA4B5, 0xA4B6, 0xA4B7, 0xA4B8, 0xA4B9, 0xA4BA, 0xA4BB, 0xA4BD,
    0xA4BE, 0xA4BF, 0xA4C0, 0xA4C1, 0xA4C3, 0xA4C4, 0xA4C5, 0xA4C6, 0xA4C7, 0xA4C8, 0xA4C9, 0xA4CA,
    0xA4CB, 0xA4CC, 0xA4CD, 0xA4CE, 0xA4CF, 0xA4D0, 0xA4D1, 0xA4D2, 0xA4D3, 0xA4D5, 0xA4D6, 0xA4D8,
    0xA4D9, 0xA4DB, 0xA4DC, 0xA4DE, 0xA4DF, 0xA4E0, 0xA4E1, 0xA4E2, 0xA4E4, 0xA4E6, 0xA4E7, 0xA4E8,
    0xA4E9, 0xA4EA, 0xA4EB, 0xA4EC, 0xA4ED, 0xA4EF, 0xA4F2, 0xA4F3, 0xA5A1, 0xA5A2, 0xA5A3, 0xA5A4,
    0xA5A5, 0xA5A6, 0xA5A7, 0xA5A8, 0xA5A9, 0xA5AA, 0xA5AB, 0xA5AC, 0xA5AD, 0xA5AE, 0xA5AF, 0xA5B0,
    0xA5B1, 0xA5B2, 0xA5B3, 0xA5B4, 0xA5B5, 0xA5B6, 0xA5B7, 0xA5B8, 0xA5B9, 0xA5BA, 0xA5BB, 0xA5BC,
    0xA5BD, 0xA5BE, 0xA5BF, 0xA5C0, 0xA5C1, 0xA5C3, 0xA5C4, 0xA5C6, 0xA5C7, 0xA5C8, 0xA5C9, 0xA5CA,
    0xA5CB, 0xA5CC, 0xA5CD, 0xA5CE, 0xA5CF, 0xA5D0, 0xA5D1, 0xA5D2, 0xA5D3, 0xA5D4, 0xA5D5, 0xA5D6,
    0xA5D7, 0xA5D8, 0xA5D9, 0xA5DA, 0xA5DB, 0xA5DC, 0xA5DD, 0xA5DE, 0xA5DF, 0xA5E0, 0xA5E1, 0xA5E2,
    0xA5E3, 0xA5E4, 0xA5E5, 0xA5E6, 0xA5E7, 0xA5E8, 0xA5E9, 0xA5EA, 0xA5EB, 0xA5EC, 0xA5ED, 0xA5EF,
    0xA5F3, 0xA5F4, 0xB0A6, 0xB0AD, 0xB0B5, 0xB0B7, 0xB0B8, 0xB0C2, 0xB0C5, 0xB0C6, 0xB0CA, 0xB0CC,
    0xB0CD, 0xB0CF, 0xB0D5, 0xB0D7, 0xB0D9, 0xB0DB, 0xB0DC, 0xB0E3, 0xB0E4, 0xB0E6, 0xB0E8, 0xB0EC,
    0xB0EE, 0xB0F1, 0xB0F5, 0xB0F8, 0xB0FA, 0xB1A3, 0xB1A6, 0xB1BF, 0xB1C0, 0xB1C6, 0xB1C7, 0xB1CA,
    0xB1D1, 0xB1D5, 0xB1DB, 0xB1DF, 0xB1E0, 0xB1E4, 0xB1E7, 0xB1E9, 0xB1EF, 0xB1F3, 0xB1FB, 0xB1FE,
    0xB2A1, 0xB2A3, 0xB2A4, 0xB2A6, 0xB2AB, 0xB2AC, 0xB2AD, 0xB2B1, 0xB2BB, 0xB2BC, 0xB2BD, 0xB2BE,
    0xB2BF, 0xB2C1, 0xB2C3, 0xB2C4, 0xB2C5, 0xB2CC, 0xB2CE, 0xB2D0, 0xB2D4, 0xB2D5, 0xB2D6, 0xB2D9,
    0xB2DF, 0xB2E1, 0xB2E8, 0xB2EC, 0xB2F0, 0xB2F1, 0xB2F2, 0xB2F3, 0xB2F4, 0xB2F5, 0xB2FE, 0xB3A3,
    0xB3A4, 0xB3A6, 0xB3AB, 0xB3AC, 0xB3B0, 0xB3B2, 0xB3B5, 0xB3BA, 0xB3C6, 0xB3C8, 0xB3CA, 0xB3CD,
    0xB3CE, 0xB3D0, 0xB3D1, 0xB3D3, 0xB3D6, 0xB3DA, 0xB3DD, 0xB3E3, 0xB3E4, 0xB3E7, 0xB3E8, 0xB3E9,
    0xB4AA, 0xB4AC, 0xB4B0, 0xB4B1, 0xB4B6, 0xB4B7, 0xB4B9, 0xB4C4, 0xB4C6, 0xB4C9, 0xB4CA, 0xB4CB,
    0xB4D1, 0xB4D3, 0xB4D6, 0xB4D8, 0xB4D9, 0xB4DA, 0xB4DD, 0xB4DE, 0xB4DF, 0xB4E4, 0xB4ED, 0xB4EF,
    0xB4F0, 0xB4F1, 0xB4F3, 0xB4F4, 0xB4F5, 0xB4FB, 0xB4FC, 0xB4FE, 0xB5A1, 0xB5A2, 0xB5A4, 0xB5AA,
    0xB5AC, 0xB5AD, 0xB5AF, 0xB5B6, 0xB5BB, 0xB5BC, 0xB5BE, 0xB5BF, 0xB5C1, 0xB5CD, 0xB5D1, 0xB5D5,
    0xB5D7, 0xB5D9, 0xB5DA, 0xB5DC, 0xB5DE, 0xB5E1, 0xB5E6, 0xB5EB, 0xB5EC, 0xB5EE, 0xB5F0, 0xB5F1,
    0xB5F2, 0xB5F3, 0xB5F6, 0xB5F7, 0xB5FE, 0xB6A1, 0xB6A5, 0xB6A6, 0xB6A8, 0xB6AD, 0xB6AF, 0xB6B2,
    0xB6B5, 0xB6B7, 0xB6B9, 0xB6C0, 0xB6C1, 0xB6C8, 0xB6C9, 0xB6CA, 0xB6CB, 0xB6CC, 0xB6D1, 0xB6D8,
    0xB6DB, 0xB6E1, 0xB6E2, 0xB6E5, 0xB6E7, 0xB6E8, 0xB6EB, 0xB6F1, 0xB6F5, 0xB6F6, 0xB6F8, 0xB6F9,
    0xB7A7, 0xB7AA, 0xB7AB, 0xB7B2, 0xB7B8, 0xB7B9, 0xB7BF, 0xB7C0, 0xB7C1, 0xB7C2, 0xB7C8, 0xB7C9,
    0xB7CA, 0xB7CF, 0xB7D0, 0xB7D1, 0xB7D3, 0xB7D7, 0xB7D9, 0xB7DA, 0xB7E4, 0xB7E5, 0xB7E7, 0xB7E8,
    0xB7EA, 0xB7EB, 0xB7EE, 0xB7EF, 0xB7F2, 0xB7F4, 0xB7F7, 0xB7FB, 0xB8A1, 0xB8A2, 0xB8A9, 0xB8AB,
    0xB8AF, 0xB8B0, 0xB8B1, 0xB8B3, 0xB8B5, 0xB8B6, 0xB8B7, 0xB8BA, 0xB8BB, 0xB8BD, 0xB8C0, 0xB8C2,
    0xB8C4, 0xB8C5, 0xB8C6, 0xB8C7, 0xB8C9, 0xB8CA, 0xB8CB, 0xB8CC, 0xB8CF, 0xB8D0, 0xB8D2, 0xB8DF,
    0xB8E1, 0xB8E5, 0xB8E6, 0xB8EC, 0xB8ED, 0xB8EE, 0xB8F2, 0xB8F5, 0xB8F8, 0xB8F9, 0xB8FA, 0xB8FD,
    0xB8FE, 0xB9A5, 0xB9A9, 0xB9AD, 0xB9B9, 0xB9BD, 0xB9BE, 0xB9C1, 0xB9C8, 0xB9CD, 0xB9D4, 0xB9D8,
    0xB9DF, 0xB9E0, 0xB9E1, 0xB9E2, 0xB9E6, 0xB9E7, 0xB9EF, 0xB9F0, 0xB9F1, 0xB9FE, 0xBAA3, 0xBAAC,
    0xBAAE, 0xBAB3, 0xBAB4, 0xBAB6, 0xBAB8, 0xBAB9, 0xBABA, 0xBAC2, 0xBAC4, 0xBAC6, 0xBAC7, 0xBAD1,
    0xBAD9, 0xBADC, 0xBADD, 0xBADF, 0xBAE5, 0xBAEA, 0xBAEB, 0xBAEE, 0xBAEF, 0xBAF7, 0xBAFE, 0xBBB0,
    0xBBB2, 0xBBB3, 0xBBBB, 0xBBC4, 0xBBC5, 0xBBC8, 0xBBCD, 0xBBCE, 0xBBCF, 0xBBD2, 0xBBD4, 0xBBD7,
    0xBBD8, 0xBBD9, 0xBBDC, 0xBBDF, 0xBBE0, 0xBBE6, 0xBBE8, 0xBBEB, 0xBBEE, 0xBBF1, 0xBBF6, 0xBBF7,
    0xBBF9, 0xBBFA, 0xBBFC, 0xBBFD, 0xBBFE, 0xBCA1, 0xBCA2, 0xBCA3, 0xBCA8, 0xBCAB, 0xBCAD, 0xBCAF,
    0xBCB0, 0xBCB1, 0xBCB4, 0xBCBA, 0xBCC1, 0xBCC2, 0xBCCC, 0xBCCE, 0xBCD0, 0xBCD2, 0xBCD4, 0xBCE1,
    0xBCE5, 0xBCE7, 0xBCE8, 0xBCE9, 0xBCEA, 0xBCEC, 0xBCEF, 0xBCF3, 0xBCF5, 0xBCF7, 0xBCFD, 0xBCFE,
    0xBDA3, 0xBDA4, 0xBDA9, 0xBDAA, 0xBDAC, 0xBDB0, 0xBDB5, 0xBDB8, 0xBDBC, 0xBDBD, 0xBDBE, 0xBDC4,
    0xBDC5, 0xBDCC, 0xBDD0, 0xBDD1, 0xBDD2, 0xBDDB, 0xBDE0, 0xBDE2, 0xBDE3, 0xBDE7, 0xBDE8, 0xBDE9,
    0xBDEA, 0xBDEF, 0xBDF0, 0xBDF1, 0xBDF4, 0xBDF5, 0xBDF8, 0xBDFC, 0xBEA9, 0xBEAD, 0xBEAE, 0xBEAF,
    0xBEB4, 0xBEB5, 0xBEBA, 0xBEBD, 0xBEC3, 0xBEC8, 0xBECA, 0xBECC, 0xBECE, 0xBED7, 0xBEDA, 0xBEDC,
    0xBEDD, 0xBEE3, 0xBEE5, 0xBEE8, 0xBEE9, 0xBEEA, 0xBEEB, 0xBEEC, 0xBEEF, 0xBEF0, 0xBEF2, 0xBEF5,
    0xBEF6, 0xBEFE, 0xBFA2, 0xBFA7, 0xBFA8, 0xBFAD, 0xBFAE, 0xBFB3, 0xBFB6, 0xBFB7, 0xBFB9, 0xBFBC,
    0xBFBF, 0xBFC0, 0xBFC6, 0xBFC7, 0xBFC8, 0xBFCA, 0xBFCD, 0xBFD2, 0xBFDC, 0xBFDE, 0xBFE2, 0xBFE4,
    0xBFE5, 0xBFE8, 0xBFF4, 0xC0A4, 0xC0A9, 0xC0AD, 0xC0AE, 0xC0AF, 0xC0B0, 0xC0B5, 0xC0B7, 0xC0B8,
    0xC0BA, 0xC0BD, 0xC0BE, 0xC0C4, 0xC0C5, 0xC0CE, 0xC0CF, 0xC0D0, 0xC0D1, 0xC0D2, 0xC0D6, 0xC0D7,
    0xC0DA, 0xC0DC, 0xC0DE, 0xC0DF, 0xC0E1, 0xC0E2, 0xC0E4, 0xC0E8, 0xC0E9, 0xC0EA, 0xC0EB, 0xC0EC,
    0xC0EE, 0xC0EF, 0xC0F8, 0xC0FE, 0xC1AA, 0xC1AB, 0xC1AF, 0xC1B0, 0xC1B1, 0xC1B3, 0xC1B4, 0xC1C3,
    0xC1C7, 0xC1C8, 0xC1CB, 0xC1D5, 0xC1D8, 0xC1DB, 0xC1DD, 0xC1DE, 0xC1E0, 0xC1E1, 0xC1EA, 0xC1ED,
    0xC1F5, 0xC1F6, 0xC1F7, 0xC1F8, 0xC1FC, 0xC1FD, 0xC2A4, 0xC2A5, 0xC2A6, 0xC2A7, 0xC2A8, 0xC2AC,
    0xC2AD, 0xC2AE, 0xC2B0, 0xC2B2, 0xC2B3, 0xC2B7, 0xC2B8, 0xC2BB, 0xC2BE, 0xC2BF, 0xC2C0, 0xC2C5,
    0xC2C7, 0xC2CA, 0xC2CE, 0xC2D0, 0xC2D3, 0xC2D4, 0xC2D6, 0xC2D8, 0xC2E0, 0xC2E5, 0xC2E6, 0xC2E7,
    0xC2E8, 0xC2EA, 0xC2F2, 0xC3A2, 0xC3A3, 0xC3A9, 0xC3AF, 0xC3B1, 0xC3B3, 0xC3B4, 0xC3B5, 0xC3BB,
    0xC3BC, 0xC3C7, 0xC3CA, 0xC3CD, 0xC3CE, 0xC3CF, 0xC3D6, 0xC3D7, 0xC3D9, 0xC3DB, 0xC3DD, 0xC3E5,
    0xC3E6, 0xC3EA, 0xC3ED, 0xC3F8, 0xC3FB, 0xC4A5, 0xC4AB, 0xC4B4, 0xC4B6, 0xC4B9, 0xC4BB, 0xC4BD,
    0xC4BE, 0xC4C9, 0xC4CC, 0xC4E3, 0xC4E4, 0xC4EA, 0xC4EB, 0xC4EC, 0xC4F3, 0xC4F8, 0xC4FB, 0xC5AA,
    0xC5AC, 0xC5B5, 0xC5B6, 0xC5B8, 0xC5BA, 0xC5BD, 0xC5BE, 0xC5C0, 0xC5C1, 0xC5C4, 0xC5C5, 0xC5C9,
    0xC5CF, 0xC5D0, 0xC5D3, 0xC5D4, 0xC5D9, 0xC5DA, 0xC5E0, 0xC5E7, 0xC5EA, 0xC5EC, 0xC5ED, 0xC5F4,
    0xC5F6, 0xC5F9, 0xC5FA, 0xC5FB, 0xC5FD, 0xC5FE, 0xC6A4, 0xC6A9, 0xC6AC, 0xC6AF, 0xC6B0, 0xC6B1,
    0xC6B3, 0xC6BB, 0xC6BF, 0xC6C0, 0xC6C1, 0xC6C3, 0xC6C8, 0xC6C9, 0xC6CA, 0xC6CD, 0xC6CF, 0xC6E0,
    0xC6E2, 0xC6EC, 0xC6EE, 0xC6F1, 0xC6F3, 0xC6FC, 0xC6FE, 0xC7A1, 0xC7A4, 0xC7A7, 0xC7AF, 0xC7B0,
    0xC7BC, 0xC7BD, 0xC7C5, 0xC7C9, 0xC7CB, 0xC7CF, 0xC7D1, 0xC7D3, 0xC7D4, 0xC7D5, 0xC7D8, 0xC7DB,
    0xC7DC, 0xC7DE, 0xC7F2, 0xC7F6, 0xC8A2, 0xC8AC, 0xC8AF, 0xC8B4, 0xC8BC, 0xC8BD, 0xC8BE, 0xC8BF,
    0xC8C2, 0xC8C6, 0xC8C7, 0xC8CB, 0xC8CC, 0xC8CF, 0xC8D6, 0xC8DD, 0xC8E6, 0xC8EB, 0xC8EF, 0xC8F1,
    0xC8F2, 0xC8F3, 0xC8F4, 0xC8F7, 0xC8F8, 0xC8F9, 0xC9AC, 0xC9B2, 0xC9B4, 0xC9B8, 0xC9BD, 0xC9BE,
    0xC9C1, 0xC9C3, 0xC9C4, 0xC9CA, 0xC9D1, 0xC9D4, 0xC9D5, 0xC9D9, 0xC9DB, 0xC9E1, 0xC9E2, 0xC9E4,
    0xC9E9, 0xC9EC, 0xC9F1, 0xC9F4, 0xC9F5, 0xC9F7, 0xC9FB, 0xC9FC, 0xC9FD, 0xCAA1, 0xCAA3, 0xCAA9,
    0xCAAA, 0xCAAC, 0xCAB6, 0xCAB8, 0xCABB, 0xCABC, 0xCABF, 0xCAC2, 0xCAC3, 0xCAC4, 0xCAC6, 0xCACC,
    0xCAD1, 0xCAD2, 0xCAD4, 0xCAD5, 0xCAD6, 0xCADD, 0xCAE4, 0xCAF1, 0xCAF3, 0xCAFC, 0xCAFD, 0xCBA1,
    0xCBAC, 0xCBAE, 0xCBBA, 0xCBBE, 0xCBC9, 0xCBCC, 0xCBDC, 0xCBDD, 0xCBE4, 0xCBE6, 0xCBE8, 0xCBEB,
    0xCBF4, 0xCBF6, 0xCBFE, 0xCCA3, 0xCCA4, 0xCCA9, 0xCCAE, 0xCCB1, 0xCCB5, 0xCCB7, 0xCCBE, 0xCCBF,
    0xCCC0, 0xCCC4, 0xCCC7, 0xCCCC, 0xCCCF, 0xCCD8, 0xCCDA, 0xCCDB, 0xCCDC, 0xCCE1, 0xCCE4, 0xCCE6,
    0xCCEE, 0xCCF0, 0xCCF2, 0xCCF3, 0xCCF5, 0xCDA5, 0xCDAD, 0xCDB3, 0xCDB7, 0xCDBA, 0xCDBD, 0xCDBE,
    0xCDBF, 0xCDC6, 0xCDCB, 0xCDCD, 0xCDCE, 0xCDD1, 0xCDD5, 0xCDD7, 0xCDDE, 0xCDE8, 0xCDEA, 0xCDED,
    0xCDEE, 0xCDF0, 0xCDF3, 0xCDF7, 0xCDF8, 0xCDFA, 0xCDFC, 0xCDFD, 0xCEA5, 0xCEA7, 0xCEA8, 0xCEA9,
    0xCEAC, 0xCEB1, 0xCEB8, 0xCEBB, 0xCEBE, 0xCEC9, 0xCECC, 0xCECE, 0xCECF, 0xCED0, 0xCED3, 0xCED8,
    0xCED9, 0xCEDF, 0xCEE0, 0xCEE1, 0xCEE3, 0xCEF1, 0xCEF2, 0xCEF3, 0xCFA1, 0xCFA2, 0xCFA9, 0xCFBB,
    0xCFBF, 0xCFC0, 0xCFC2, 0xCFC3, 0xCFC4, 0xCFC8, 0xCFD1, 0xD1BC, 0xD6A2, 0xD7C3, 0xDBA3, 0xDBF0,
    0xDFB0, 0xEDD4, 0xEDD5, 0xEFE7,
];
