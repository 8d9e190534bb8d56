//! Frequent character sets for Chinese encodings.
//!
//! Each entry is `lead << 8 | trail`.

/// Most frequent GB2312-area characters of GB18030, sorted.
pub static GB18030_FREQUENT: &[u16] = &[
    0xB0A2, 0xB0A3, 0xB0AC, 0xB0AE, 0xB0B2, 0xB0B4, 0xB0B8, 0xB0C2, 0xB0C4, 0xB0CB, 0xB0CD, 0xB0D1,
    0xB0D7, 0xB0D8, 0xB0D9, 0xB0DC, 0xB0DD, 0xB0E0, 0xB0E3, 0xB0E5, 0xB0E6, 0xB0EE, 0xB0EF, 0xB0F3,
    0xB0FC, 0xB1A3, 0xB1A4, 0xB1A8, 0xB1B1, 0xB1B3, 0xB1B4, 0xB1B6, 0xB1B8, 0xB1BB, 0xB1BE, 0xB1C8,
    0xB1CA, 0xB1D5, 0xB1D8, 0xB1DC, 0xB1DF, 0xB1E0, 0xB1E3, 0xB1E4, 0xB1E9, 0xB1EA, 0xB1ED, 0xB1F0,
    0xB1F5, 0xB1F6, 0xB1FA, 0xB2A2, 0xB2A3, 0xB2A5, 0xB2A8, 0xB2A9, 0xB2AE, 0xB2B9, 0xB2BB, 0xB2BC,
    0xB2BD, 0xB2BF, 0xB2C5, 0xB2C9, 0xB2CB, 0xB2CE, 0xB2D6, 0xB2D8, 0xB2D9, 0xB2DF, 0xB2E0, 0xB2E1,
    0xB2E2, 0xB2E3, 0xB2E5, 0xB2E9, 0xB2EC, 0xB2EE, 0xB2F0, 0xB2FA, 0xB3A2, 0xB3A3, 0xB3A4, 0xB3AC,
    0xB3B5, 0xB3C6, 0xB3C7, 0xB3C9, 0xB3CC, 0xB3D0, 0xB3D6, 0xB3D7, 0xB3D9, 0xB3DF, 0xB3E2, 0xB3E4,
    0xB3E5, 0xB3F5, 0xB3F6, 0xB3FD, 0xB3FE, 0xB4A2, 0xB4A5, 0xB4A6, 0xB4AB, 0xB4AE, 0xB4B0, 0xB4B4,
    0xB4BF, 0xB4C1, 0xB4C4, 0xB4C5, 0xB4CA, 0xB4CB, 0xB4CE, 0xB4D3, 0xB4D8, 0xB4E6, 0xB4E7, 0xB4ED,
    0xB4EF, 0xB4F0, 0xB4F2, 0xB4F3, 0xB4F8, 0xB4FA, 0xB4FD, 0xB5A4, 0xB5A5, 0xB5AB, 0xB5AF, 0xB5B1,
    0xB5B5, 0xB5BA, 0xB5BC, 0xB5BD, 0xB5C0, 0xB5C2, 0xB5C3, 0xB5C4, 0xB5C7, 0xB5C8, 0xB5CD, 0xB5CF,
    0xB5D7, 0xB5D8, 0xB5D9, 0xB5DA, 0xB5DD, 0xB5E3, 0xB5E4, 0xB5E7, 0xB5F5, 0xB5F7, 0xB5FE, 0xB6A1,
    0xB6A5, 0xB6A8, 0xB6A9, 0xB6AA, 0xB6AB, 0xB6AF, 0xB6BA, 0xB6BC, 0xB6C0, 0xB6C1, 0xB6C5, 0xB6C8,
    0xB6CB, 0xB6CC, 0xB6CE, 0xB6CF, 0xB6D4, 0xB6D8, 0xB6D9, 0xB6E0, 0xB6ED, 0xB6EE, 0xB6F2, 0xB6F7,
    0xB6F8, 0xB6FA, 0xB6FB, 0xB6FE, 0xB7A2, 0xB7A5, 0xB7A8, 0xB7AD, 0xB7B4, 0xB7B5, 0xB7B6, 0xB7BD,
    0xB7C2, 0xB7C3, 0xB7C5, 0xB7C6, 0xB7C7, 0xB7CF, 0xB7D1, 0xB7D2, 0xB7D6, 0xB7DD, 0xB7E2, 0xB7E4,
    0xB7E7, 0xB7F0, 0xB7F1, 0xB7F2, 0xB7FB, 0xB7FE, 0xB8A1, 0xB8A3, 0xB8A5, 0xB8A8, 0xB8AE, 0xB8B1,
    0xB8B2, 0xB8B4, 0xB8B8, 0xB8BA, 0xB8BB, 0xB8BD, 0xB8C3, 0xB8C4, 0xB8C7, 0xB8C9, 0xB8CA, 0xB8D0,
    0xB8D4, 0xB8D5, 0xB8DB, 0xB8DC, 0xB8DF, 0xB8E6, 0xB8E7, 0xB8EA, 0xB8EE, 0xB8F1, 0xB8F4, 0xB8F6,
    0xB8F7, 0xB8F8, 0xB8F9, 0xB8FA, 0xB8FC, 0xB9A4, 0xB9A6, 0xB9A9, 0xB9AB, 0xB9B1, 0xB9B2, 0xB9B3,
    0xB9B9, 0xB9BB, 0xB9C5, 0xB9CA, 0xB9CC, 0xB9CF, 0xB9D2, 0xB9D6, 0xB9D8, 0xB9DC, 0xB9E2, 0xB9E3,
    0xB9E6, 0xB9E7, 0xB9E9, 0xB9F6, 0xB9FA, 0xB9FB, 0xB9FD, 0xB9FE, 0xBAA3, 0xBAAC, 0xBAAF, 0xBABA,
    0xBAC1, 0xBAC3, 0xBAC4, 0xBAC5, 0xBAC9, 0xBACB, 0xBACD, 0xBACE, 0xBACF, 0xBAD3, 0xBAD5, 0xBADA,
    0xBADC, 0xBAE1, 0xBAEA, 0xBAEC, 0xBAF2, 0xBAF3, 0xBAF5, 0xBAF6, 0xBAFA, 0xBBA4, 0xBBA5, 0xBBA7,
    0xBBAA, 0xBBAC, 0xBBAD, 0xBBAE, 0xBBAF, 0xBBB0, 0xBBB5, 0xBBB7, 0xBBB9, 0xBBBA, 0xBBBB, 0xBBD6,
    0xBBD8, 0xBBD9, 0xBBE1, 0xBBE3, 0xBBE6, 0xBBEC, 0xBBEE, 0xBBF1, 0xBBF2, 0xBBF4, 0xBBF7, 0xBBF9,
    0xBBFA, 0xBCA4, 0xBCAA, 0xBCAD, 0xBCAF, 0xBCB0, 0xBCB1, 0xBCB4, 0xBCB6, 0xBCB8, 0xBCBA, 0xBCBC,
    0xBCC3, 0xBCC4, 0xBCC6, 0xBCC7, 0xBCCA, 0xBCCC, 0xBCCE, 0xBCD0, 0xBCD2, 0xBCD3, 0xBCD6, 0xBCD9,
    0xBCDB, 0xBCDC, 0xBCE0, 0xBCE4, 0xBCE6, 0xBCEC, 0xBCF0, 0xBCF2, 0xBCF5, 0xBCF6, 0xBCF8, 0xBCFB,
    0xBCFC, 0xBCFD, 0xBCFE, 0xBDA8, 0xBDAB, 0xBDAD, 0xBDB5, 0xBDB9, 0xBDBB, 0xBDC5, 0xBDC7, 0xBDCF,
    0xBDD3, 0xBDD8, 0xBDDA, 0xBDDC, 0xBDDD, 0xBDE1, 0xBDE2, 0xBDE7, 0xBDE9, 0xBDF0, 0xBDF4, 0xBDF6,
    0xBDF8, 0xBDFB, 0xBDFC, 0xBEA1, 0xBEA9, 0xBEAB, 0xBEAD, 0xBEAF, 0xBEB0, 0xBEB2, 0xBEB3, 0xBEB5,
    0xBEB6, 0xBEC3, 0xBEC9, 0xBECD, 0xBED3, 0xBED6, 0xBED9, 0xBEDB, 0xBEDC, 0xBEDD, 0xBEDF, 0xBEE0,
    0xBEE4, 0xBEED, 0xBEF6, 0xBEF8, 0xBEF9, 0xBFA4, 0xBFA6, 0xBFA8, 0xBFAA, 0xBFAD, 0xBFB2, 0xBFB4,
    0xBFB5, 0xBFBC, 0xBFBD, 0xBFC6, 0xBFC9, 0xBFCB, 0xBFCD, 0xBFCF, 0xBFD5, 0xBFD7, 0xBFD8, 0xBFDA,
    0xBFE2, 0xBFE7, 0xBFE9, 0xBFEC, 0xBFED, 0xBFF2, 0xBFF6, 0xBFFC, 0xC0A5, 0xC0A8, 0xC0A9, 0xC0AD,
    0xC0B0, 0xC0B3, 0xC0B4, 0xC0B5, 0xC0B8, 0xC0BC, 0xC0C0, 0xC0CA, 0xC0CD, 0xC0CF, 0xC0D5, 0xC0D7,
    0xC0E0, 0xC0E8, 0xC0EB, 0xC0ED, 0xC0EF, 0xC0FA, 0xC0FB, 0xC0FD, 0xC1A2, 0xC1A6, 0xC1AA, 0xC1AC,
    0xC1B4, 0xC1BD, 0xC1BF, 0xC1C1, 0xC1CB, 0xC1CF, 0xC1D0, 0xC1D6, 0xC1D9, 0xC1E3, 0xC1E9, 0xC1EC,
    0xC1ED, 0xC1EE, 0xC1F4, 0xC1F7, 0xC1F9, 0xC1FA, 0xC2A1, 0xC2AC, 0xC2B3, 0xC2B7, 0xC2BC, 0xC2C7,
    0xC2C9, 0xC2CA, 0xC2CB, 0xC2D4, 0xC2D6, 0xC2D7, 0xC2DB, 0xC2DE, 0xC2E4, 0xC2E5, 0xC2E7, 0xC2EA,
    0xC2EB, 0xC2ED, 0xC2F0, 0xC2F3, 0xC2FA, 0xC2FC, 0xC3AB, 0xC3B4, 0xC3B6, 0xC3B7, 0xC3BB, 0xC3BD,
    0xC3BF, 0xC3C0, 0xC3C5, 0xC3C7, 0xC3C9, 0xC3CF, 0xC3D7, 0xC3DC, 0xC3E2, 0xC3E6, 0xC3E8, 0xC3EB,
    0xC3F1, 0xC3F4, 0xC3F7, 0xC3F9, 0xC3FB, 0xC3FC, 0xC3FE, 0xC4A3, 0xC4A6, 0xC4A9, 0xC4AA, 0xC4AC,
    0xC4B3, 0xC4B7, 0xC4B8, 0xC4BB, 0xC4BF, 0xC4C2, 0xC4C3, 0xC4C4, 0xC4C7, 0xC4C9, 0xC4CF, 0xC4D4,
    0xC4DA, 0xC4DC, 0xC4E1, 0xC4E2, 0xC4E3, 0xC4E4, 0xC4EA, 0xC4F9, 0xC4FA, 0xC4FE, 0xC5A5, 0xC5A6,
    0xC5AC, 0xC5B2, 0xC5B5, 0xC5B7, 0xC5C1, 0xC5C5, 0xC5C6, 0xC5C9, 0xC5CC, 0xC5CF, 0xC5D4, 0xC5E4,
    0xC5E5, 0xC5FA, 0xC6A4, 0xC6A5, 0xC6AB, 0xC6AC, 0xC6B5, 0xC6BD, 0xC6C1, 0xC6C6, 0xC6CF, 0xC6D5,
    0xC6DA, 0xC6E4, 0xC6E6, 0xC6E7, 0xC6EB, 0xC6F0, 0xC6F4, 0xC6F7, 0xC6FA, 0xC7A1, 0xC7A9, 0xC7B0,
    0xC7B3, 0xC7B6, 0xC7BF, 0xC7C7, 0xC7D0, 0xC7D2, 0xC7D5, 0xC7E5, 0xC7E9, 0xC7EB, 0xC7F0, 0xC7F3,
    0xC7F8, 0xC7FA, 0xC7FD, 0xC8A1, 0xC8A5, 0xC8A8, 0xC8AB, 0xC8B1, 0xC8B4, 0xC8B7, 0xC8BA, 0xC8BB,
    0xC8BE, 0xC8C3, 0xC8C6, 0xC8C8, 0xC8CB, 0xC8CE, 0xC8CF, 0xC8D4, 0xC8D5, 0xC8DD, 0xC8E7, 0xC8EB,
    0xC8ED, 0xC8F0, 0xC8F4, 0xC8F8, 0xC8FB, 0xC8FD, 0xC9A2, 0xC9A3, 0xC9AB, 0xC9AD, 0xC9B1, 0xC9B3,
    0xC9BD, 0xC9BE, 0xC9C1, 0xC9CF, 0xC9D0, 0xC9D9, 0xC9DC, 0xC9E4, 0xC9E8, 0xC9EA, 0xC9ED, 0xC9EE,
    0xC9F9, 0xC9FA, 0xC9FD, 0xCAA1, 0xCAA3, 0xCAA5, 0xCAA7, 0xCAAE, 0xCAB1, 0xCAB2, 0xCAB5, 0xCAB6,
    0xCAB7, 0xCAB9, 0xCABC, 0xCABD, 0xCABE, 0xCABF, 0xCAC0, 0xCAC2, 0xCAC7, 0xCACA, 0xCACD, 0xCACE,
    0xCAD0, 0xCAD3, 0xCAD4, 0xCAD5, 0xCAD6, 0xCAD7, 0xCAD8, 0xCADA, 0xCADC, 0xCAE2, 0xCAE4, 0xCAE8,
    0xCAE9, 0xCAF3, 0xCAF4, 0xCAF5, 0xCAF6, 0xCAF7, 0xCAF8, 0xCAFA, 0xCAFD, 0xCBA2, 0xCBAB, 0xCBAE,
    0xCBB3, 0xCBB5, 0xCBB8, 0xCBB9, 0xCBBD, 0xCBC0, 0xCBC4, 0xCBC6, 0xCBC9, 0xCBCD, 0xCBD1, 0xCBD5,
    0xCBD8, 0xCBD9, 0xCBE3, 0xCBE6, 0xCBF0, 0xCBF5, 0xCBF7, 0xCBF8, 0xCBF9, 0xCBFB, 0xCBFC, 0xCBFE,
    0xCCA8, 0xCCA9, 0xCCAB, 0xCCAC, 0xCCB9, 0xCCBD, 0xCCC0, 0xCCD1, 0xCCD5, 0xCCD7, 0xCCD8, 0xCCE1,
    0xCCE2, 0xCCE5, 0xCCE6, 0xCCEC, 0xCCED, 0xCCEE, 0xCCF5, 0xCCF8, 0xCDA3, 0xCDA8, 0xCDAC, 0xCDB3,
    0xCDB7, 0xCDB8, 0xCDBB, 0xCDBC, 0xCDC1, 0xCDC6, 0xCDCB, 0xCDCF, 0xCDD0, 0xCDD1, 0xCDDF, 0xCDE2,
    0xCDE5, 0xCDEA, 0xCDF2, 0xCDF5, 0xCDF8, 0xCDFA, 0xCDFB, 0xCDFE, 0xCEA2, 0xCEA4, 0xCEA7, 0xCEA8,
    0xCEAA, 0xCEAC, 0xCEB2, 0xCEB4, 0xCEBB, 0xCEC2, 0xCEC4, 0xCEC6, 0xCECA, 0xCECC, 0xCED2, 0xCED6,
    0xCEDA, 0xCEDE, 0xCEE4, 0xCEE5, 0xCEF1, 0xCEF3, 0xCEF6, 0xCEF7, 0xCEFD, 0xCFA1, 0xCFA2, 0xCFA3,
    0xCFB5, 0xCFB8, 0xCFC2, 0xCFC4, 0xCFC8, 0xCFD0, 0xCFD4, 0xCFD6, 0xCFD8, 0xCFDE, 0xCFDF, 0xCFE0,
    0xCFE4, 0xCFEA, 0xCFEB, 0xCFEC, 0xCFED, 0xCFEE, 0xCFF1, 0xCFF2, 0xCFF3, 0xCFFA, 0xCFFB, 0xD0A1,
    0xD0A3, 0xD0A7, 0xD0A9, 0xD0AD, 0xD0B1, 0xD0B4, 0xD0B6, 0xD0BB, 0xD0C2, 0xD0C4, 0xD0C5, 0xD0C7,
    0xD0CD, 0xD0CE, 0xD0D0, 0xD0D4, 0xD0D5, 0xD0D9, 0xD0DE, 0xD0E8, 0xD0E9, 0xD0EB, 0xD0ED, 0xD0F0,
    0xD0F2, 0xD0F8, 0xD0FC, 0xD1A1, 0xD1AD, 0xD1AF, 0xD1B0, 0xD1B9, 0xD1C0, 0xD1C5, 0xD1C7, 0xD1CF,
    0xD1D3, 0xD1D4, 0xD1D5, 0xD1DD, 0xD1E9, 0xD1EF, 0xD1F9, 0xD2AA, 0xD2AE, 0xD2B2, 0xD2B3, 0xD2BB,
    0xD2C0, 0xD2C1, 0xD2C6, 0xD2D1, 0xD2D4, 0xD2D7, 0xD2E2, 0xD2E5, 0xD2E7, 0xD2E9, 0xD2EB, 0xD2EC,
    0xD2F2, 0xD2F4, 0xD2F5, 0xD2FD, 0xD2FE, 0xD3A1, 0xD3A2, 0xD3A6, 0xD3B0, 0xD3B2, 0xD3B3, 0xD3B5,
    0xD3C0, 0xD3C3, 0xD3C5, 0xD3C8, 0xD3C9, 0xD3CA, 0xD3CE, 0xD3D0, 0xD3D2, 0xD3DA, 0xD3E0, 0xD3E8,
    0xD3EB, 0xD3EF, 0xD3F2, 0xD3F6, 0xD4A4, 0xD4AA, 0xD4AD, 0xD4B1, 0xD4B4, 0xD4B5, 0xD4B6, 0xD4BC,
    0xD4BD, 0xD4BF, 0xD4C2, 0xD4C4, 0xD4CA, 0xD4CB, 0xD4D8, 0xD4D9, 0xD4DA, 0xD4DD, 0xD4DE, 0xD4E7,
    0xD4EC, 0xD4F1, 0xD4F2, 0xD4F3, 0xD4F6, 0xD4FA, 0xD5AA, 0xD5B3, 0xD5B9, 0xD5BB, 0xD5BC, 0xD5BE,
    0xD5C5, 0xD5CA, 0xD5CB, 0xD5D2, 0xD5D5, 0xD5DA, 0xD5DF, 0xD5E2, 0xD5E6, 0xD5EB, 0xD5EF, 0xD5FB,
    0xD5FD, 0xD6A4, 0xD6A7, 0xD6AA, 0xD6AE, 0xD6B1, 0xD6B4, 0xD6B5, 0xD6B7, 0xD6B8, 0xD6B9, 0xD6BB,
    0xD6BD, 0xD6BE, 0xD6C1, 0xD6C2, 0xD6C3, 0xD6C6, 0xD6CA, 0xD6CE, 0xD6D0, 0xD6D3, 0xD6D5, 0xD6D6,
    0xD6D8, 0xD6DC, 0xD6DD, 0xD6DE, 0xD6EE, 0xD6F7, 0xD6FA, 0xD6FC, 0xD7A1, 0xD7A2, 0xD7AA, 0xD7B0,
    0xD7B4, 0xD7B7, 0xD7BA, 0xD7BC, 0xD7C0, 0xD7C5, 0xD7C8, 0xD7CA, 0xD7D3, 0xD7D4, 0xD7D6, 0xD7D9,
    0xD7DA, 0xD7DC, 0xD7E3, 0xD7E5, 0xD7E6, 0xD7E8, 0xD7E9, 0xD7EE, 0xD7F3, 0xD7F4, 0xD7F6, 0xD7F7,
    0xE4AF, 0xE4D6, 0xE8A7, 0xEBF8,
];

/// Most frequent Big5 characters (lead >= 0xA4), sorted.
pub static BIG5_FREQUENT: &[u16] = &[
    0xA440, 0xA442, 0xA446, 0xA447, 0xA448, 0xA44A, 0xA44B, 0xA44F, 0xA451, 0xA454, 0xA455, 0xA457,
    0xA45B, 0xA45D, 0xA467, 0xA468, 0xA46A, 0xA46C, 0xA46F, 0xA470, 0xA473, 0xA475, 0xA476, 0xA477,
    0xA47A, 0xA47E, 0xA4A3, 0xA4A4, 0xA4A6, 0xA4A7, 0xA4A9, 0xA4AC, 0xA4AD, 0xA4B0, 0xA4B4, 0xA4B6,
    0xA4B8, 0xA4B9, 0xA4BA, 0xA4BB, 0xA4BD, 0xA4C0, 0xA4C1, 0xA4C6, 0xA4C9, 0xA4CC, 0xA4CE, 0xA4CF,
    0xA4D1, 0xA4D2, 0xA4D3, 0xA4D6, 0xA4D7, 0xA4D8, 0xA4DA, 0xA4DE, 0xA4DF, 0xA4E1, 0xA4E2, 0xA4E4,
    0xA4E5, 0xA4E8, 0xA4E9, 0xA4EB, 0xA4EE, 0xA4F1, 0xA4F4, 0xA4F7, 0xA4F9, 0xA4FA, 0xA4FD, 0xA540,
    0xA542, 0xA544, 0xA547, 0xA548, 0xA54C, 0xA54E, 0xA54F, 0xA552, 0xA555, 0xA558, 0xA55B, 0xA55C,
    0xA55D, 0xA55F, 0xA562, 0xA564, 0xA565, 0xA568, 0xA569, 0xA56A, 0xA56B, 0xA573, 0xA574, 0xA575,
    0xA576, 0xA578, 0xA579, 0xA57C, 0xA57E, 0xA5A1, 0xA5A2, 0xA5A6, 0xA5A7, 0xA5AA, 0xA5AB, 0xA5AC,
    0xA5AD, 0xA5B2, 0xA5B4, 0xA5B8, 0xA5BB, 0xA5BC, 0xA5BD, 0xA5BE, 0xA5BF, 0xA5C0, 0xA5C1, 0xA5C3,
    0xA5CA, 0xA5CB, 0xA5CD, 0xA5CE, 0xA5D1, 0xA5D5, 0xA5D6, 0xA5D8, 0xA5DC, 0xA5DF, 0xA5E6, 0xA5E7,
    0xA5EC, 0xA5EF, 0xA5F3, 0xA5F4, 0xA5F7, 0xA5FA, 0xA5FD, 0xA5FE, 0xA640, 0xA641, 0xA642, 0xA643,
    0xA649, 0xA64C, 0xA64E, 0xA650, 0xA655, 0xA656, 0xA657, 0xA658, 0xA65D, 0xA65E, 0xA661, 0xA662,
    0xA663, 0xA668, 0xA66E, 0xA670, 0xA672, 0xA673, 0xA675, 0xA677, 0xA67E, 0xA6A1, 0xA6A8, 0xA6AB,
    0xA6AC, 0xA6AD, 0xA6B1, 0xA6B3, 0xA6B8, 0xA6B9, 0xA6BD, 0xA6CC, 0xA6D1, 0xA6D2, 0xA6D3, 0xA6D5,
    0xA6DB, 0xA6DC, 0xA6E2, 0xA6E6, 0xA6E8, 0xA6EA, 0xA6EC, 0xA6ED, 0xA6F3, 0xA6F8, 0xA6F9, 0xA6FB,
    0xA6FC, 0xA6FD, 0xA740, 0xA741, 0xA742, 0xA743, 0xA747, 0xA74A, 0xA74B, 0xA74F, 0xA750, 0xA751,
    0xA752, 0xA755, 0xA756, 0xA759, 0xA75F, 0xA769, 0xA76B, 0xA774, 0xA77D, 0xA7A1, 0xA7A2, 0xA7A3,
    0xA7A8, 0xA7B9, 0xA7BB, 0xA7C0, 0xA7C6, 0xA7C7, 0xA7CA, 0xA7CE, 0xA7D1, 0xA7D6, 0xA7DA, 0xA7DE,
    0xA7E2, 0xA7E4, 0xA7E5, 0xA7E9, 0xA7EC, 0xA7ED, 0xA7EF, 0xA7F3, 0xA7F4, 0xA7F9, 0xA842, 0xA843,
    0xA844, 0xA846, 0xA84D, 0xA853, 0xA855, 0xA86C, 0xA870, 0xA874, 0xA87D, 0xA8A3, 0xA8A4, 0xA8A5,
    0xA8A9, 0xA8AC, 0xA8AD, 0xA8AF, 0xA8B9, 0xA8BA, 0xA8BD, 0xA8BE, 0xA8C0, 0xA8C3, 0xA8C6, 0xA8C7,
    0xA8C8, 0xA8C9, 0xA8CA, 0xA8CC, 0xA8CE, 0xA8CF, 0xA8D1, 0xA8D2, 0xA8D3, 0xA8D6, 0xA8D8, 0xA8E2,
    0xA8E3, 0xA8E4, 0xA8E5, 0xA8E7, 0xA8E8, 0xA8EC, 0xA8EE, 0xA8F3, 0xA8F7, 0xA8F8, 0xA8FA, 0xA8FC,
    0xA8FD, 0xA949, 0xA94D, 0xA952, 0xA954, 0xA955, 0xA95A, 0xA95F, 0xA960, 0xA969, 0xA96C, 0xA973,
    0xA977, 0xA97B, 0xA97C, 0xA9AC, 0xA9B3, 0xA9B5, 0xA9BF, 0xA9C7, 0xA9CA, 0xA9CE, 0xA9D2, 0xA9D3,
    0xA9D4, 0xA9DA, 0xA9EC, 0xA9EF, 0xA9F1, 0xA9F3, 0xA9F6, 0xA9FA, 0xAA40, 0xAA41, 0xAA46, 0xAA47,
    0xAA4C, 0xAA4F, 0xAA52, 0xAA5B, 0xAA60, 0xAA69, 0xAA6B, 0xAA70, 0xAA76, 0xAAA9, 0xAAAB, 0xAAAC,
    0xAABA, 0xAABD, 0xAABE, 0xAAC0, 0xAAC5, 0xAACC, 0xAAD6, 0xAAE1, 0xAAE2, 0xAAEC, 0xAAED, 0xAAF0,
    0xAAF1, 0xAAF7, 0xAAF8, 0xAAF9, 0xAAFC, 0xAAFD, 0xAAFE, 0xAB44, 0xAB47, 0xAB48, 0xAB4B, 0xAB4F,
    0xAB58, 0xAB59, 0xAB5F, 0xAB65, 0xAB68, 0xAB6E, 0xAB6F, 0xAB7E, 0xABA2, 0xABAB, 0xABAC, 0xABB0,
    0xABC2, 0xABC5, 0xABC8, 0xABCA, 0xABD2, 0xABD7, 0xABD8, 0xABDC, 0xABDD, 0xABDF, 0xABE1, 0xABF4,
    0xABF6, 0xABF9, 0xABFC, 0xAC41, 0xAC4A, 0xAC4D, 0xAC4F, 0xAC50, 0xAC59, 0xAC5B, 0xAC64, 0xAC66,
    0xAC71, 0xAC77, 0xAC79, 0xACA1, 0xACA3, 0xACA5, 0xACB0, 0xACC1, 0xACC9, 0xACD2, 0xACD9, 0xACDB,
    0xACDD, 0xACE5, 0xACEC, 0xACED, 0xACF0, 0xACF6, 0xACF9, 0xACFC, 0xAD46, 0xAD49, 0xAD50, 0xAD59,
    0xAD5E, 0xAD6E, 0xAD70, 0xAD71, 0xAD74, 0xAD79, 0xAD7A, 0xAD7B, 0xAD7D, 0xADAB, 0xADAD, 0xADB0,
    0xADB1, 0xADB5, 0xADB6, 0xADB7, 0xADBA, 0xADBF, 0xADC8, 0xADCB, 0xADCC, 0xADD3, 0xADD4, 0xADD7,
    0xADDB, 0xADE8, 0xADEC, 0xADF4, 0xADFB, 0xADFE, 0xAE4A, 0xAE4C, 0xAE4D, 0xAE61, 0xAE65, 0xAE67,
    0xAE69, 0xAE71, 0xAE74, 0xAE77, 0xAE7C, 0xAEA6, 0xAEA7, 0xAEB3, 0xAEBF, 0xAEC4, 0xAEC6, 0xAEC9,
    0xAED1, 0xAED4, 0xAED5, 0xAED6, 0xAED7, 0xAED8, 0xAEDA, 0xAEE0, 0xAEE1, 0xAEE6, 0xAEED, 0xAEF5,
    0xAEF8, 0xAEFC, 0xAF41, 0xAF42, 0xAF51, 0xAF53, 0xAF5A, 0xAF64, 0xAF71, 0xAF75, 0xAF7D, 0xAFAA,
    0xAFC0, 0xAFC1, 0xAFC2, 0xAFC3, 0xAFC5, 0xAFC7, 0xAFC8, 0xAFCA, 0xAFD3, 0xAFE0, 0xAFE4, 0xAFEB,
    0xAFF7, 0xB04F, 0xB054, 0xB05E, 0xB05F, 0xB065, 0xB068, 0xB06A, 0xB06C, 0xB074, 0xB077, 0xB07B,
    0xB07D, 0xB0A3, 0xB0A8, 0xB0AA, 0xB0B0, 0xB0B1, 0xB0B2, 0xB0B5, 0xB0BB, 0xB0BC, 0xB0BE, 0xB0C5,
    0xB0C6, 0xB0C7, 0xB0C8, 0xB0CA, 0xB0CF, 0xB0D1, 0xB0D2, 0xB0D3, 0xB0DD, 0xB0DF, 0xB0E9, 0xB0EA,
    0xB0EC, 0xB0EF, 0xB0F0, 0xB0F2, 0xB0F5, 0xB0F7, 0xB14B, 0xB14D, 0xB14E, 0xB160, 0xB161, 0xB162,
    0xB164, 0xB169, 0xB16A, 0xB16D, 0xB16F, 0xB171, 0xB17A, 0xB1A1, 0xB1B1, 0xB1B2, 0xB1B5, 0xB1B6,
    0xB1BC, 0xB1BD, 0xB1BE, 0xB1C0, 0xB1C2, 0xB1C4, 0xB1C6, 0xB1CB, 0xB1D0, 0xB1D1, 0xB1D2, 0xB1D4,
    0xB1D7, 0xB1DA, 0xB1E6, 0xB1ED, 0xB1F3, 0xB1F6, 0xB1F8, 0xB240, 0xB24C, 0xB24D, 0xB256, 0xB260,
    0xB276, 0xB27A, 0xB27B, 0xB2A3, 0xB2A4, 0xB2A7, 0xB2A8, 0xB2B0, 0xB2BE, 0xB2C4, 0xB2C5, 0xB2CE,
    0xB2D0, 0xB2D3, 0xB2D5, 0xB2D7, 0xB2E6, 0xB2F6, 0xB2FC, 0xB342, 0xB34E, 0xB351, 0xB357, 0xB35C,
    0xB35D, 0xB36E, 0xB36F, 0xB371, 0xB372, 0xB373, 0xB374, 0xB379, 0xB37A, 0xB3A1, 0xB3A3, 0xB3AC,
    0xB3B3, 0xB3B4, 0xB3B9, 0xB3BB, 0xB3C1, 0xB3C6, 0xB3CC, 0xB3CE, 0xB3D1, 0xB3D5, 0xB3D8, 0xB3E6,
    0xB3EC, 0xB3F2, 0xB3F8, 0xB3F9, 0xB443, 0xB449, 0xB44D, 0xB44E, 0xB44F, 0xB458, 0xB45F, 0xB460,
    0xB466, 0xB479, 0xB47A, 0xB4A1, 0xB4A3, 0xB4A9, 0xB4AB, 0xB4B0, 0xB4B2, 0xB4B5, 0xB4B6, 0xB4BA,
    0xB4BF, 0xB4C0, 0xB4C1, 0xB4CB, 0xB4D3, 0xB4DA, 0xB4E5, 0xB4EA, 0xB4EE, 0xB4FA, 0xB54A, 0xB54C,
    0xB54D, 0xB565, 0xB56E, 0xB56F, 0xB575, 0xB577, 0xB579, 0xB57B, 0xB57D, 0xB5A1, 0xB5A5, 0xB5A6,
    0xB5A7, 0xB5B2, 0xB5B4, 0xB5B9, 0xB5DB, 0xB5DC, 0xB5E1, 0xB5E5, 0xB5EA, 0xB5F8, 0xB5F9, 0xB5FC,
    0xB645, 0xB648, 0xB64A, 0xB656, 0xB657, 0xB667, 0xB669, 0xB66C, 0xB671, 0xB673, 0xB67D, 0xB6A1,
    0xB6A2, 0xB6A5, 0xB6A7, 0xB6A9, 0xB6AE, 0xB6B0, 0xB6B5, 0xB6B6, 0xB6B7, 0xB6C2, 0xB6C7, 0xB6C8,
    0xB6C9, 0xB6D7, 0xB6DC, 0xB6EB, 0xB6F0, 0xB6F1, 0xB6F4, 0xB6F8, 0xB74C, 0xB74E, 0xB751, 0xB752,
    0xB766, 0xB76A, 0xB76C, 0xB773, 0xB77C, 0xB77E, 0xB7B4, 0xB7B8, 0xB7BD, 0xB7C6, 0xB7C7, 0xB7D3,
    0xB7E7, 0xB7ED, 0xB854, 0xB855, 0xB860, 0xB867, 0xB86A, 0xB86D, 0xB86E, 0xB870, 0xB871, 0xB873,
    0xB874, 0xB8A3, 0xB8A8, 0xB8B2, 0xB8B9, 0xB8C9, 0xB8CB, 0xB8CC, 0xB8D1, 0xB8D3, 0xB8D4, 0xB8D5,
    0xB8DC, 0xB8DF, 0xB8EA, 0xB8F2, 0xB8F4, 0xB8F5, 0xB8FB, 0xB8FC, 0xB942, 0xB944, 0xB946, 0xB94A,
    0xB94C, 0xB94D, 0xB94F, 0xB95F, 0xB961, 0xB96A, 0xB970, 0xB971, 0xB973, 0xB977, 0xB979, 0xB9AB,
    0xB9B3, 0xB9C1, 0xB9CF, 0xB9D2, 0xB9EA, 0xB9EE, 0xB9EF, 0xB9F5, 0xBA41, 0xBA49, 0xBA4B, 0xBA58,
    0xBA63, 0xBA74, 0xBA7E, 0xBAA1, 0xBAB8, 0xBABF, 0xBAC9, 0xBACA, 0xBACF, 0xBAD0, 0xBAD6, 0xBAD8,
    0xBAD9, 0xBADD, 0xBADE, 0xBAE2, 0xBAEB, 0xBAF1, 0xBAF3, 0xBAF4, 0xBAFB, 0xBAFC, 0xBB4F, 0xBB50,
    0xBB58, 0xBB5C, 0xBB73, 0xBB78, 0xBB79, 0xBB7B, 0xBB7E, 0xBBA1, 0xBBAB, 0xBBAE, 0xBBB2, 0xBBB4,
    0xBBB7, 0xBBBC, 0xBBD9, 0xBBDA, 0xBBDD, 0xBBDE, 0xBBE2, 0xBBF2, 0xBBF4, 0xBC57, 0xBC65, 0xBC67,
    0xBC68, 0xBC6F, 0xBC73, 0xBC76, 0xBC77, 0xBC7B, 0xBCAF, 0xBCBB, 0xBCBD, 0xBCC6, 0xBCC8, 0xBCC9,
    0xBCCB, 0xBCD0, 0xBCD2, 0xBCDA, 0xBD4C, 0xBD54, 0xBD58, 0xBD5A, 0xBD63, 0xBD64, 0xBD71, 0xBD73,
    0xBD74, 0xBD75, 0xBD77, 0xBDC4, 0xBDC6, 0xBDD0, 0xBDD1, 0xBDD5, 0xBDD7, 0xBDE8, 0xBDFC, 0xBE41,
    0xBE42, 0xBE44, 0xBE5C, 0xBE6C, 0xBE7C, 0xBEA4, 0xBEA5, 0xBEB9, 0xBEC7, 0xBEC9, 0xBECC, 0xBED0,
    0xBED6, 0xBEDA, 0xBEDC, 0xBEDE, 0xBEE3, 0xBEE4, 0xBEEE, 0xBEF0, 0xBEF7, 0xBEFA, 0xBF44, 0xBF57,
    0xBF63, 0xBF7A, 0xBFC3, 0xBFD5, 0xBFE0, 0xBFE8, 0xBFE9, 0xBFEB, 0xBFED, 0xBFEF, 0xBFF0, 0xBFF2,
    0xBFF9, 0xBFFC, 0xBFFD, 0xC048, 0xC052, 0xC057, 0xC059, 0xC071, 0xC075, 0xC078, 0xC0A3, 0xC0B3,
    0xC0BB, 0xC0C0, 0xC0C9, 0xC0CB, 0xC0F2, 0xC0F4, 0xC159, 0xC160, 0xC16E, 0xC170, 0xC17C, 0xC1D7,
    0xC1D9, 0xC1E4, 0xC1F4, 0xC1F5, 0xC1FA, 0xC249, 0xC257, 0xC258, 0xC25E, 0xC25F, 0xC26B, 0xC26F,
    0xC273, 0xC2A6, 0xC2B2, 0xC2BD, 0xC2C2, 0xC2C3, 0xC2C4, 0xC2C7, 0xC2CE, 0xC2D0, 0xC2DC, 0xC2E0,
    0xC2EA, 0xC2F7, 0xC2F8, 0xC2F9, 0xC342, 0xC343, 0xC344, 0xC350, 0xC361, 0xC3AA, 0xC3B1, 0xC3B8,
    0xC3B9, 0xC3BE, 0xC3D1, 0xC3D2, 0xC3E4, 0xC3E8, 0xC3EC, 0xC3F6, 0xC3FE, 0xC459, 0xC47E, 0xC4AC,
    0xC4B2, 0xC4B3, 0xC4B5, 0xC4B6, 0xC4C0, 0xC4C1, 0xC4CB, 0xC4DD, 0xC4E6, 0xC4F2, 0xC4F5, 0xC4FD,
    0xC540, 0xC554, 0xC576, 0xC57C, 0xC5A5, 0xC5AA, 0xC5B6, 0xC5D2, 0xC5DC, 0xC5DE, 0xC5E3, 0xC5E7,
    0xC5E9, 0xC5FD, 0xC65B, 0xC65F,
];

/// Most frequent EUC-TW CNS plane 1 characters, sorted.
pub static EUC_TW_FREQUENT: &[u16] = &[
    0xC4A1, 0xC4A3, 0xC4A7, 0xC4A8, 0xC4A9, 0xC4AB, 0xC4AC, 0xC4B0, 0xC4B2, 0xC4B5, 0xC4B6, 0xC4B8,
    0xC4BC, 0xC4BE, 0xC4C8, 0xC4C9, 0xC4CB, 0xC4CD, 0xC4D0, 0xC4D1, 0xC4D4, 0xC4D6, 0xC4D7, 0xC4D8,
    0xC4DB, 0xC4DF, 0xC4E2, 0xC4E3, 0xC4E5, 0xC4E6, 0xC4E8, 0xC4EB, 0xC4EC, 0xC4EF, 0xC4F3, 0xC4F5,
    0xC4F7, 0xC4F8, 0xC4F9, 0xC4FA, 0xC4FC, 0xC5A1, 0xC5A2, 0xC5A7, 0xC5AA, 0xC5AD, 0xC5AF, 0xC5B0,
    0xC5B2, 0xC5B3, 0xC5B4, 0xC5B7, 0xC5B8, 0xC5B9, 0xC5BB, 0xC5BF, 0xC5C0, 0xC5C2, 0xC5C3, 0xC5C5,
    0xC5C6, 0xC5C9, 0xC5CA, 0xC5CC, 0xC5CF, 0xC5D2, 0xC5D5, 0xC5D8, 0xC5DA, 0xC5DB, 0xC5DE, 0xC5E0,
    0xC5E2, 0xC5E4, 0xC5E7, 0xC5E8, 0xC5EC, 0xC5EE, 0xC5EF, 0xC5F2, 0xC5F5, 0xC5F8, 0xC5FB, 0xC5FC,
    0xC5FD, 0xC6A1, 0xC6A4, 0xC6A6, 0xC6A7, 0xC6AA, 0xC6AB, 0xC6AC, 0xC6AD, 0xC6B5, 0xC6B6, 0xC6B7,
    0xC6B8, 0xC6BA, 0xC6BB, 0xC6BE, 0xC6C0, 0xC6C1, 0xC6C2, 0xC6C6, 0xC6C7, 0xC6CA, 0xC6CB, 0xC6CC,
    0xC6CD, 0xC6D2, 0xC6D4, 0xC6D8, 0xC6DB, 0xC6DC, 0xC6DD, 0xC6DE, 0xC6DF, 0xC6E0, 0xC6E1, 0xC6E3,
    0xC6EA, 0xC6EB, 0xC6ED, 0xC6EE, 0xC6F1, 0xC6F5, 0xC6F6, 0xC6F8, 0xC6FC, 0xC7A1, 0xC7A8, 0xC7A9,
    0xC7AE, 0xC7B1, 0xC7B5, 0xC7B6, 0xC7B9, 0xC7BC, 0xC7BF, 0xC7C0, 0xC7C1, 0xC7C2, 0xC7C3, 0xC7C4,
    0xC7CA, 0xC7CD, 0xC7CF, 0xC7D1, 0xC7D6, 0xC7D7, 0xC7D8, 0xC7D9, 0xC7DE, 0xC7DF, 0xC7E2, 0xC7E3,
    0xC7E4, 0xC7E9, 0xC7EF, 0xC7F1, 0xC7F3, 0xC7F4, 0xC7F6, 0xC7F8, 0xC8A1, 0xC8A2, 0xC8A9, 0xC8AC,
    0xC8AD, 0xC8AE, 0xC8B2, 0xC8B4, 0xC8B9, 0xC8BA, 0xC8BE, 0xC8CD, 0xC8D2, 0xC8D3, 0xC8D4, 0xC8D6,
    0xC8DC, 0xC8DD, 0xC8E3, 0xC8E7, 0xC8E9, 0xC8EB, 0xC8ED, 0xC8EE, 0xC8F4, 0xC8F9, 0xC8FA, 0xC8FC,
    0xC8FD, 0xC8FE, 0xC9A2, 0xC9A3, 0xC9A4, 0xC9A5, 0xC9A9, 0xC9AC, 0xC9AD, 0xC9B1, 0xC9B2, 0xC9B3,
    0xC9B4, 0xC9B7, 0xC9B8, 0xC9BB, 0xC9C1, 0xC9CB, 0xC9CD, 0xC9D6, 0xC9DF, 0xC9E1, 0xC9E2, 0xC9E3,
    0xC9E8, 0xC9F9, 0xC9FB, 0xCAA2, 0xCAA8, 0xCAA9, 0xCAAC, 0xCAB0, 0xCAB3, 0xCAB8, 0xCABC, 0xCAC0,
    0xCAC4, 0xCAC6, 0xCAC7, 0xCACB, 0xCACE, 0xCACF, 0xCAD1, 0xCAD5, 0xCAD6, 0xCADB, 0xCAE3, 0xCAE4,
    0xCAE5, 0xCAE7, 0xCAEE, 0xCAF4, 0xCAF6, 0xCBAF, 0xCBB3, 0xCBB7, 0xCBC0, 0xCBC4, 0xCBC5, 0xCBC6,
    0xCBCA, 0xCBCD, 0xCBCE, 0xCBD0, 0xCBDA, 0xCBDB, 0xCBDE, 0xCBDF, 0xCBE1, 0xCBE4, 0xCBE7, 0xCBE8,
    0xCBE9, 0xCBEA, 0xCBEB, 0xCBED, 0xCBEF, 0xCBF0, 0xCBF2, 0xCBF3, 0xCBF4, 0xCBF7, 0xCBF9, 0xCCA5,
    0xCCA6, 0xCCA7, 0xCCA8, 0xCCAA, 0xCCAB, 0xCCAF, 0xCCB1, 0xCCB6, 0xCCBA, 0xCCBB, 0xCCBD, 0xCCBF,
    0xCCC0, 0xCCCB, 0xCCCF, 0xCCD4, 0xCCD6, 0xCCD7, 0xCCDC, 0xCCE1, 0xCCE2, 0xCCEB, 0xCCEE, 0xCCF5,
    0xCCF9, 0xCCFD, 0xCCFE, 0xCDAE, 0xCDB5, 0xCDB7, 0xCDC1, 0xCDC9, 0xCDCC, 0xCDD0, 0xCDD4, 0xCDD5,
    0xCDD6, 0xCDDC, 0xCDEE, 0xCDF1, 0xCDF3, 0xCDF5, 0xCDF8, 0xCDFC, 0xCEA3, 0xCEA4, 0xCEA9, 0xCEAA,
    0xCEAF, 0xCEB2, 0xCEB5, 0xCEBE, 0xCEC3, 0xCECC, 0xCECE, 0xCED3, 0xCED9, 0xCEEA, 0xCEEC, 0xCEED,
    0xCEFB, 0xCEFE, 0xCFA1, 0xCFA3, 0xCFA8, 0xCFAF, 0xCFB9, 0xCFC4, 0xCFC5, 0xCFCF, 0xCFD0, 0xCFD3,
    0xCFD4, 0xCFDA, 0xCFDB, 0xCFDC, 0xCFDF, 0xCFE0, 0xCFE1, 0xCFE6, 0xCFE9, 0xCFEA, 0xCFED, 0xCFF1,
    0xCFFA, 0xCFFB, 0xD0A3, 0xD0A9, 0xD0AC, 0xD0B2, 0xD0B3, 0xD0C2, 0xD0C4, 0xD0CD, 0xD0CE, 0xD0D2,
    0xD0E4, 0xD0E7, 0xD0EA, 0xD0EC, 0xD0F4, 0xD0F9, 0xD0FA, 0xD0FE, 0xD1A1, 0xD1A3, 0xD1A5, 0xD1B8,
    0xD1BA, 0xD1BD, 0xD1C0, 0xD1C4, 0xD1CD, 0xD1D0, 0xD1D2, 0xD1D3, 0xD1DC, 0xD1DE, 0xD1E7, 0xD1E9,
    0xD1F4, 0xD1FA, 0xD1FC, 0xD2A4, 0xD2A6, 0xD2A8, 0xD2B3, 0xD2C4, 0xD2CC, 0xD2D5, 0xD2DC, 0xD2DE,
    0xD2E0, 0xD2E8, 0xD2EF, 0xD2F0, 0xD2F3, 0xD2F9, 0xD2FC, 0xD3A1, 0xD3AA, 0xD3AD, 0xD3B4, 0xD3BD,
    0xD3C2, 0xD3D2, 0xD3D4, 0xD3D5, 0xD3D8, 0xD3DD, 0xD3DE, 0xD3DF, 0xD3E1, 0xD3ED, 0xD3EF, 0xD3F2,
    0xD3F3, 0xD3F7, 0xD3F8, 0xD3F9, 0xD3FC, 0xD4A3, 0xD4AC, 0xD4AF, 0xD4B0, 0xD4B7, 0xD4B8, 0xD4BB,
    0xD4BF, 0xD4CC, 0xD4D0, 0xD4D8, 0xD4DF, 0xD4E2, 0xD4ED, 0xD4EF, 0xD4F0, 0xD5A6, 0xD5AA, 0xD5AC,
    0xD5AE, 0xD5B6, 0xD5B9, 0xD5BC, 0xD5C1, 0xD5C9, 0xD5CA, 0xD5D6, 0xD5E2, 0xD5E7, 0xD5E9, 0xD5EC,
    0xD5F4, 0xD5F7, 0xD5F8, 0xD5F9, 0xD5FA, 0xD5FB, 0xD5FD, 0xD6A5, 0xD6A6, 0xD6AB, 0xD6B2, 0xD6BA,
    0xD6BD, 0xD6C1, 0xD6C5, 0xD6C6, 0xD6D5, 0xD6D7, 0xD6DE, 0xD6E8, 0xD6F5, 0xD6F9, 0xD7A3, 0xD7AE,
    0xD7C4, 0xD7C5, 0xD7C6, 0xD7C7, 0xD7C9, 0xD7CB, 0xD7CC, 0xD7CE, 0xD7D7, 0xD7E4, 0xD7E8, 0xD7EF,
    0xD7FB, 0xD8B4, 0xD8B9, 0xD8C3, 0xD8C4, 0xD8CA, 0xD8CD, 0xD8CF, 0xD8D1, 0xD8D9, 0xD8DC, 0xD8E0,
    0xD8E2, 0xD8E6, 0xD8EB, 0xD8ED, 0xD8F3, 0xD8F4, 0xD8F5, 0xD8F8, 0xD8FE, 0xD9A1, 0xD9A3, 0xD9AA,
    0xD9AB, 0xD9AC, 0xD9AD, 0xD9AF, 0xD9B4, 0xD9B6, 0xD9B7, 0xD9B8, 0xD9C2, 0xD9C4, 0xD9CE, 0xD9CF,
    0xD9D1, 0xD9D4, 0xD9D5, 0xD9D7, 0xD9DA, 0xD9DC, 0xD9EF, 0xD9F1, 0xD9F2, 0xDAA6, 0xDAA7, 0xDAA8,
    0xDAAA, 0xDAAF, 0xDAB0, 0xDAB3, 0xDAB5, 0xDAB7, 0xDAC0, 0xDAC5, 0xDAD5, 0xDAD6, 0xDAD9, 0xDADA,
    0xDAE0, 0xDAE1, 0xDAE2, 0xDAE4, 0xDAE6, 0xDAE8, 0xDAEA, 0xDAEF, 0xDAF4, 0xDAF5, 0xDAF6, 0xDAF8,
    0xDAFB, 0xDAFE, 0xDBAC, 0xDBB3, 0xDBB9, 0xDBBC, 0xDBBE, 0xDBC5, 0xDBD1, 0xDBD2, 0xDBDB, 0xDBE5,
    0xDBFB, 0xDCA1, 0xDCA2, 0xDCA8, 0xDCA9, 0xDCAC, 0xDCAD, 0xDCB5, 0xDCC3, 0xDCC9, 0xDCCA, 0xDCD3,
    0xDCD5, 0xDCD8, 0xDCDA, 0xDCDC, 0xDCEB, 0xDCFB, 0xDDA3, 0xDDA8, 0xDDB4, 0xDDB7, 0xDDBD, 0xDDC2,
    0xDDC3, 0xDDD4, 0xDDD5, 0xDDD7, 0xDDD8, 0xDDD9, 0xDDDA, 0xDDDF, 0xDDE0, 0xDDE5, 0xDDE7, 0xDDF0,
    0xDDF7, 0xDDF8, 0xDDFD, 0xDEA1, 0xDEA7, 0xDEAC, 0xDEB2, 0xDEB4, 0xDEB7, 0xDEBB, 0xDEBE, 0xDECC,
    0xDED2, 0xDED8, 0xDEDE, 0xDEDF, 0xDEE8, 0xDEEE, 0xDEF2, 0xDEF3, 0xDEF4, 0xDEFD, 0xDFA6, 0xDFA7,
    0xDFAD, 0xDFC0, 0xDFC1, 0xDFC6, 0xDFC8, 0xDFCE, 0xDFD0, 0xDFD5, 0xDFD7, 0xDFDA, 0xDFDB, 0xDFDF,
    0xDFE4, 0xDFE5, 0xDFE6, 0xDFF0, 0xDFF8, 0xE0A1, 0xE0AC, 0xE0B1, 0xE0B5, 0xE0C1, 0xE0D0, 0xE0D2,
    0xE0D3, 0xE0EB, 0xE0F4, 0xE0F5, 0xE0FB, 0xE0FD, 0xE1A1, 0xE1A3, 0xE1A5, 0xE1A7, 0xE1AB, 0xE1AC,
    0xE1AD, 0xE1B8, 0xE1BA, 0xE1BF, 0xE1E1, 0xE1E2, 0xE1E7, 0xE1EB, 0xE1F0, 0xE1FE, 0xE2A1, 0xE2A4,
    0xE2AC, 0xE2AF, 0xE2B1, 0xE2BD, 0xE2BE, 0xE2CE, 0xE2D0, 0xE2D3, 0xE2D8, 0xE2DA, 0xE2E4, 0xE2E6,
    0xE2E7, 0xE2EA, 0xE2EC, 0xE2EE, 0xE2F3, 0xE2F5, 0xE2FA, 0xE2FB, 0xE2FC, 0xE3A9, 0xE3AE, 0xE3AF,
    0xE3B0, 0xE3BE, 0xE3C3, 0xE3D2, 0xE3D7, 0xE3D8, 0xE3DB, 0xE3DF, 0xE3F2, 0xE3F4, 0xE3F7, 0xE3F8,
    0xE4AE, 0xE4B2, 0xE4B4, 0xE4BB, 0xE4C4, 0xE4C6, 0xE4DA, 0xE4DE, 0xE4E3, 0xE4EC, 0xE4ED, 0xE4F9,
    0xE5AF, 0xE5B5, 0xE5DB, 0xE5DC, 0xE5E7, 0xE5EE, 0xE5F1, 0xE5F4, 0xE5F5, 0xE5F7, 0xE5F8, 0xE5FA,
    0xE5FB, 0xE6AA, 0xE6AF, 0xE6B9, 0xE6C0, 0xE6D0, 0xE6D2, 0xE6D3, 0xE6D8, 0xE6DA, 0xE6DB, 0xE6DC,
    0xE6E3, 0xE6E6, 0xE6F1, 0xE6F9, 0xE6FB, 0xE6FC, 0xE7A4, 0xE7A5, 0xE7AA, 0xE7AC, 0xE7AE, 0xE7B2,
    0xE7B4, 0xE7B5, 0xE7B7, 0xE7C7, 0xE7C9, 0xE7D2, 0xE7D8, 0xE7D9, 0xE7DB, 0xE7DF, 0xE7E1, 0xE7F1,
    0xE7F9, 0xE8A9, 0xE8B7, 0xE8BA, 0xE8D2, 0xE8D6, 0xE8D7, 0xE8DD, 0xE8E8, 0xE8F0, 0xE8F2, 0xE9A1,
    0xE9AC, 0xE9BD, 0xE9C7, 0xE9C8, 0xE9DF, 0xE9E6, 0xE9F0, 0xE9F1, 0xE9F6, 0xE9F7, 0xE9FD, 0xEAA1,
    0xEAA2, 0xEAA6, 0xEAA7, 0xEAAB, 0xEAB4, 0xEABA, 0xEABC, 0xEABD, 0xEAC4, 0xEAC5, 0xEAD7, 0xEAD8,
    0xEAE0, 0xEAE4, 0xEAFB, 0xEBA2, 0xEBA3, 0xEBA5, 0xEBA8, 0xEBA9, 0xEBB3, 0xEBB6, 0xEBBA, 0xEBBC,
    0xEBBF, 0xEBC4, 0xEBE1, 0xEBE2, 0xEBE5, 0xEBE6, 0xEBEA, 0xEBFA, 0xEBFC, 0xECC0, 0xECCE, 0xECD0,
    0xECD1, 0xECD8, 0xECDC, 0xECDF, 0xECE0, 0xECE4, 0xECF6, 0xEDA4, 0xEDA6, 0xEDAF, 0xEDB1, 0xEDB2,
    0xEDB4, 0xEDB9, 0xEDBB, 0xEDC3, 0xEDF4, 0xEDFC, 0xEEA2, 0xEEA4, 0xEEAD, 0xEEAE, 0xEEBB, 0xEEBD,
    0xEEBE, 0xEEBF, 0xEEC1, 0xEEEC, 0xEEEE, 0xEEF8, 0xEEF9, 0xEEFD, 0xEFA1, 0xEFB2, 0xEFC6, 0xEFCA,
    0xEFCB, 0xEFCD, 0xEFE5, 0xEFF5, 0xF0A7, 0xF0AD, 0xF0AE, 0xF0C2, 0xF0D0, 0xF0D2, 0xF0D5, 0xF0D9,
    0xF0DF, 0xF0E3, 0xF0E5, 0xF0E7, 0xF0EC, 0xF0ED, 0xF0F7, 0xF0F9, 0xF1A2, 0xF1A5, 0xF1AE, 0xF1C1,
    0xF1CD, 0xF1E4, 0xF2AD, 0xF2BF, 0xF2CA, 0xF2D2, 0xF2D3, 0xF2D5, 0xF2D7, 0xF2D9, 0xF2DA, 0xF2DC,
    0xF2E3, 0xF2E6, 0xF2E7, 0xF2F1, 0xF2FB, 0xF3A2, 0xF3A4, 0xF3BC, 0xF3C0, 0xF3C3, 0xF3CC, 0xF3DC,
    0xF3E4, 0xF3E9, 0xF3F2, 0xF3F4, 0xF4BD, 0xF4BF, 0xF4E3, 0xF4EA, 0xF4F8, 0xF4FA, 0xF5A8, 0xF5E1,
    0xF5E3, 0xF5EE, 0xF5FE, 0xF6A1, 0xF6A6, 0xF6B4, 0xF6C2, 0xF6C3, 0xF6C9, 0xF6CA, 0xF6D6, 0xF6DA,
    0xF6DE, 0xF6EF, 0xF6FB, 0xF7A8, 0xF7AD, 0xF7AE, 0xF7AF, 0xF7B2, 0xF7B9, 0xF7BB, 0xF7C7, 0xF7CB,
    0xF7D5, 0xF7E2, 0xF7E3, 0xF7E4, 0xF7EC, 0xF7ED, 0xF7EE, 0xF7FA, 0xF8AD, 0xF8D4, 0xF8DB, 0xF8E2,
    0xF8E3, 0xF8E8, 0xF8FB, 0xF8FC, 0xF9B0, 0xF9B4, 0xF9B8, 0xF9C2, 0xF9CA, 0xF9E4, 0xFAAB, 0xFAB7,
    0xFABD, 0xFABE, 0xFAC0, 0xFAC1, 0xFACB, 0xFACC, 0xFAD6, 0xFAE8, 0xFAF1, 0xFAFD, 0xFBA2, 0xFBAA,
    0xFBAC, 0xFBC0, 0xFBE2, 0xFBE8, 0xFBEF, 0xFBF4, 0xFCA2, 0xFCBE, 0xFCC8, 0xFCCA, 0xFCCF, 0xFCD3,
    0xFCD5, 0xFCE9, 0xFDA8, 0xFDAC,
];
