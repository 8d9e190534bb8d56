//! Frequent character sets for Korean encodings.
//!
//! Each entry is `lead << 8 | trail`.

/// Most frequent EUC-KR characters (lead >= 0xB0), sorted.
pub static EUC_KR_FREQUENT: &[u16] = &[
    0xB0A1, 0xB0A2, 0xB0A3, 0xB0A5, 0xB0A8, 0xB0A9, 0xB0AA, 0xB0AC, 0xB0AD, 0xB0AE, 0xB0B0, 0xB0B3,
    0xB0B4, 0xB0B6, 0xB0B9, 0xB0BB, 0xB0BC, 0xB0C5, 0xB0C7, 0xB0C9, 0xB0CB, 0xB0CD, 0xB0D1, 0xB0D4,
    0xB0D9, 0xB0DA, 0xB0DC, 0xB0DD, 0xB0DF, 0xB0E1, 0xB0E3, 0xB0E5, 0xB0E6, 0xB0E8, 0xB0ED, 0xB0EE,
    0xB0EF, 0xB0F1, 0xB0F6, 0xB0F7, 0xB0F8, 0xB0FA, 0xB0FC, 0xB0FD, 0xB1A1, 0xB1AB, 0xB1B3, 0xB1B8,
    0xB1B9, 0xB1BA, 0xB1BD, 0xB1C5, 0xB1C7, 0xB1C9, 0xB1CD, 0xB1D0, 0xB1D4, 0xB1D5, 0xB1D7, 0xB1D8,
    0xB1D9, 0xB1DB, 0xB1DD, 0xB1DE, 0xB1E2, 0xB1E4, 0xB1E6, 0xB1E7, 0xB1E8, 0xB1E9, 0xB1EA, 0xB1EB,
    0xB1ED, 0xB1EE, 0xB1F1, 0xB1F2, 0xB1F4, 0xB1F9, 0xB1FA, 0xB2A8, 0xB2B0, 0xB2B2, 0xB2BF, 0xB2C0,
    0xB2C3, 0xB2CB, 0xB2CF, 0xB2D9, 0xB2DB, 0xB2DC, 0xB2DE, 0xB2DF, 0xB2E3, 0xB2E5, 0xB2EE, 0xB2EF,
    0xB2F0, 0xB2F1, 0xB2F2, 0xB2F4, 0xB2F6, 0xB2F7, 0xB2F8, 0xB2FB, 0xB2FC, 0xB2FD, 0xB3A1, 0xB3A2,
    0xB3A6, 0xB3AA, 0xB3AB, 0xB3AD, 0xB3AF, 0xB3B0, 0xB3B2, 0xB3B3, 0xB3B5, 0xB3B6, 0xB3B7, 0xB3BB,
    0xB3BD, 0xB3BE, 0xB3BF, 0xB3C0, 0xB3C2, 0xB3C3, 0xB3C4, 0xB3C9, 0xB3CA, 0xB3CD, 0xB3CE, 0xB3D0,
    0xB3D1, 0xB3D6, 0xB3D7, 0xB3D8, 0xB3DD, 0xB3E2, 0xB3E4, 0xB3E7, 0xB3EB, 0xB3EC, 0xB3ED, 0xB3EE,
    0xB3F4, 0xB3F5, 0xB4A2, 0xB4A9, 0xB4AA, 0xB4AB, 0xB4AD, 0xB4AE, 0xB4AF, 0xB4B5, 0xB4BA, 0xB4BD,
    0xB4C0, 0xB4C2, 0xB4C3, 0xB4C9, 0xB4CA, 0xB4CF, 0xB4D0, 0xB4D1, 0xB4D2, 0xB4D4, 0xB4D5, 0xB4D6,
    0xB4D9, 0xB4DA, 0xB4DC, 0xB4DD, 0xB4DE, 0xB4E3, 0xB4E4, 0xB4E7, 0xB4EB, 0xB4F5, 0xB4F8, 0xB4FA,
    0xB4FD, 0xB5A1, 0xB5A4, 0xB5A5, 0xB5A6, 0xB5A7, 0xB5A8, 0xB5A9, 0xB5B5, 0xB5B6, 0xB5B9, 0xB5BF,
    0xB5C6, 0xB5C7, 0xB5C8, 0xB5C9, 0xB5CA, 0xB5CB, 0xB5CE, 0xB5D0, 0xB5D1, 0xB5D2, 0xB5D3, 0xB5D6,
    0xB5DA, 0xB5DE, 0xB5E2, 0xB5E3, 0xB5E5, 0xB5E6, 0xB5E7, 0xB5E9, 0xB5EA, 0xB5EB, 0xB5EC, 0xB5ED,
    0xB5EE, 0xB5F0, 0xB5F1, 0xB5F2, 0xB5F4, 0xB5F9, 0xB5FB, 0xB6A7, 0xB6B0, 0xB6B2, 0xB6B3, 0xB6BB,
    0xB6BC, 0xB6C7, 0xB6C8, 0xB6D6, 0xB6D9, 0xB6DB, 0xB6DC, 0xB6DD, 0xB6DF, 0xB6E5, 0xB6E6, 0xB6E7,
    0xB6F3, 0xB6F4, 0xB6F5, 0xB6F6, 0xB6F7, 0xB6F8, 0xB6FB, 0xB7A1, 0xB7A2, 0xB7A3, 0xB7A5, 0xB7A6,
    0xB7A7, 0xB7AB, 0xB7AE, 0xB7AF, 0xB7B0, 0xB7B1, 0xB7B2, 0xB7B3, 0xB7B4, 0xB7B5, 0xB7B6, 0xB7B8,
    0xB7B9, 0xB7BA, 0xB7BB, 0xB7BD, 0xB7BF, 0xB7C1, 0xB7C2, 0xB7C3, 0xB7C4, 0xB7C6, 0xB7C8, 0xB7C9,
    0xB7CA, 0xB7CE, 0xB7CF, 0xB7D0, 0xB7D1, 0xB7D2, 0xB7D3, 0xB7D4, 0xB7D5, 0xB7DA, 0xB7E1, 0xB7E7,
    0xB7E8, 0xB7E9, 0xB7EA, 0xB7EB, 0xB7EC, 0xB7F9, 0xB7FC, 0xB7FD, 0xB8A2, 0xB8A3, 0xB8A5, 0xB8A6,
    0xB8A7, 0xB8A8, 0xB8AE, 0xB8AF, 0xB8B0, 0xB8B1, 0xB8B2, 0xB8B3, 0xB8B4, 0xB8B5, 0xB8B6, 0xB8B7,
    0xB8B8, 0xB8B9, 0xB8BB, 0xB8C1, 0xB8C2, 0xB8C5, 0xB8C6, 0xB8C7, 0xB8C9, 0xB8CA, 0xB8CB, 0xB8D3,
    0xB8D5, 0xB8D6, 0xB8D8, 0xB8DE, 0xB8DF, 0xB8E0, 0xB8E2, 0xB8E4, 0xB8E7, 0xB8E9, 0xB8ED, 0xB8EE,
    0xB8F0, 0xB8F1, 0xB8F2, 0xB8F3, 0xB8F4, 0xB8F8, 0xB8F9, 0xB9AB, 0xB9AC, 0xB9AD, 0xB9AE, 0xB9AF,
    0xB9B0, 0xB9BA, 0xB9C2, 0xB9C4, 0xB9C7, 0xB9CC, 0xB9CD, 0xB9CE, 0xB9CF, 0xB9D0, 0xB9D2, 0xB9D3,
    0xB9D4, 0xB9D6, 0xB9D7, 0xB9D8, 0xB9D9, 0xB9DA, 0xB9DB, 0xB9DD, 0xB9DE, 0xB9DF, 0xB9E0, 0xB9E3,
    0xB9E5, 0xB9E6, 0xB9E8, 0xB9E9, 0xB9EA, 0xB9EB, 0xB9F0, 0xB9F6, 0xB9F8, 0xB9FA, 0xB9FC, 0xB9FD,
    0xB9FE, 0xBAA3, 0xBAA4, 0xBAA5, 0xBAA7, 0xBAA8, 0xBAAA, 0xBAAC, 0xBAAD, 0xBAAE, 0xBAAF, 0xBAB0,
    0xBAB4, 0xBAB8, 0xBAB9, 0xBABB, 0xBABC, 0xBABD, 0xBABE, 0xBABF, 0xBAC0, 0xBACE, 0xBACF, 0xBAD0,
    0xBAD2, 0xBAD7, 0xBAD9, 0xBADF, 0xBAE4, 0xBAEA, 0xBAED, 0xBAF1, 0xBAF2, 0xBAF3, 0xBAF4, 0xBAF8,
    0xBAF9, 0xBAFB, 0xBAFC, 0xBAFD, 0xBBA1, 0xBBA9, 0xBBAB, 0xBBAC, 0xBBAE, 0xBBB0, 0xBBCC, 0xBBD3,
    0xBBDA, 0xBBDD, 0xBBDF, 0xBBE7, 0xBBE8, 0xBBEA, 0xBBEC, 0xBBEF, 0xBBF0, 0xBBF3, 0xBBF5, 0xBBF6,
    0xBBF7, 0xBBF9, 0xBBFD, 0xBBFE, 0xBCA2, 0xBCA5, 0xBCA6, 0xBCAD, 0xBCAE, 0xBCAF, 0xBCB1, 0xBCB3,
    0xBCB6, 0xBCB7, 0xBCB8, 0xBCBA, 0xBCBC, 0xBCBD, 0xBCBE, 0xBCBF, 0xBCC0, 0xBCC1, 0xBCC2, 0xBCC5,
    0xBCC7, 0xBCC8, 0xBCCC, 0xBCCE, 0xBCD0, 0xBCD2, 0xBCD3, 0xBCD5, 0xBCD6, 0xBCD8, 0xBCDB, 0xBCE2,
    0xBCEE, 0xBCF6, 0xBCF7, 0xBCF8, 0xBCFA, 0xBCFB, 0xBCFD, 0xBDA9, 0xBDAC, 0xBDB0, 0xBDB1, 0xBDB4,
    0xBDBA, 0xBDBC, 0xBDBD, 0xBDC0, 0xBDC1, 0xBDC2, 0xBDC3, 0xBDC4, 0xBDC5, 0xBDC7, 0xBDC9, 0xBDCA,
    0xBDCC, 0xBDCD, 0xBDCE, 0xBDD1, 0xBDD6, 0xBDD7, 0xBDE1, 0xBDE3, 0xBDE8, 0xBEB2, 0xBEB4, 0xBEB5,
    0xBEB8, 0xBEB9, 0xBEBA, 0xBEBE, 0xBEBF, 0xBEC6, 0xBEC7, 0xBEC8, 0xBECA, 0xBECB, 0xBECF, 0xBED0,
    0xBED2, 0xBED3, 0xBED5, 0xBED6, 0xBED7, 0xBED8, 0xBEDA, 0xBEDB, 0xBEDE, 0xBEDF, 0xBEE0, 0xBEE1,
    0xBEE2, 0xBEE3, 0xBEE6, 0xBEE7, 0xBEE8, 0xBEEE, 0xBEF0, 0xBEF2, 0xBEF3, 0xBEF6, 0xBEF7, 0xBEF8,
    0xBEF9, 0xBEFA, 0xBEFB, 0xBFA1, 0xBFA2, 0xBFA3, 0xBFA4, 0xBFA7, 0xBFA9, 0xBFAA, 0xBFAC, 0xBFAD,
    0xBFB1, 0xBFB4, 0xBFB5, 0xBFB7, 0xBFB9, 0xBFBA, 0xBFBE, 0xBFC0, 0xBFC1, 0xBFC2, 0xBFC3, 0xBFC5,
    0xBFC8, 0xBFC9, 0xBFCB, 0xBFCD, 0xBFCF, 0xBFD0, 0xBFD2, 0xBFD4, 0xBFD5, 0xBFD6, 0xBFDC, 0xBFDE,
    0xBFE4, 0xBFE5, 0xBFEB, 0xBFEC, 0xBFEE, 0xBFEF, 0xBFF2, 0xBFF3, 0xBFF4, 0xBFF6, 0xBFF8, 0xBFF9,
    0xBFFC, 0xBFFE, 0xC0A3, 0xC0A5, 0xC0A7, 0xC0A9, 0xC0AD, 0xC0AF, 0xC0B0, 0xC0B2, 0xC0B8, 0xC0B9,
    0xC0BA, 0xC0BB, 0xC0BD, 0xC0BE, 0xC0C0, 0xC0C7, 0xC0CC, 0xC0CD, 0xC0CE, 0xC0CF, 0xC0D0, 0xC0D2,
    0xC0D3, 0xC0D4, 0xC0D5, 0xC0D6, 0xC0D7, 0xC0D8, 0xC0DA, 0xC0DB, 0xC0DC, 0xC0DF, 0xC0E1, 0xC0E2,
    0xC0E5, 0xC0E7, 0xC0E8, 0xC0FA, 0xC0FB, 0xC0FC, 0xC0FD, 0xC1A1, 0xC1A2, 0xC1A4, 0xC1A6, 0xC1A7,
    0xC1A8, 0xC1A9, 0xC1AC, 0xC1AE, 0xC1AF, 0xC1B3, 0xC1B6, 0xC1B7, 0xC1B8, 0xC1BB, 0xC1BC, 0xC1BE,
    0xC1C1, 0xC1C2, 0xC1C7, 0xC1CB, 0xC1D6, 0xC1D7, 0xC1D8, 0xC1D9, 0xC1DC, 0xC1DD, 0xC1DF, 0xC1E0,
    0xC1EA, 0xC1EC, 0xC1EE, 0xC1EF, 0xC1F1, 0xC1F2, 0xC1F5, 0xC1F6, 0xC1F7, 0xC1F8, 0xC1FA, 0xC1FC,
    0xC1FD, 0xC1FE, 0xC2A1, 0xC2A5, 0xC2A6, 0xC2AA, 0xC2AD, 0xC2B0, 0xC2B7, 0xC2C9, 0xC2CA, 0xC2EE,
    0xC2EF, 0xC2F7, 0xC2F8, 0xC2F9, 0xC2FB, 0xC2FC, 0xC3A1, 0xC3A2, 0xC3A3, 0xC3A4, 0xC3A5, 0xC3B3,
    0xC3B5, 0xC3B6, 0xC3B7, 0xC3B8, 0xC3B9, 0xC3BB, 0xC3BC, 0xC3BE, 0xC3C4, 0xC3C6, 0xC3CA, 0xC3CB,
    0xC3CD, 0xC3D1, 0xC3D3, 0xC3D6, 0xC3DF, 0xC3E0, 0xC3E1, 0xC3E2, 0xC3E3, 0xC3E4, 0xC3E6, 0xC3E7,
    0xC3E8, 0xC3EB, 0xC3F2, 0xC3F7, 0xC3F8, 0xC3FE, 0xC4A1, 0xC4A2, 0xC4A3, 0xC4A5, 0xC4A7, 0xC4A8,
    0xC4AA, 0xC4AB, 0xC4AD, 0xC4AE, 0xC4AF, 0xC4B3, 0xC4B5, 0xC4B6, 0xC4B8, 0xC4BF, 0xC4C1, 0xC4C3,
    0xC4C4, 0xC4C6, 0xC4C9, 0xC4CB, 0xC4CC, 0xC4CF, 0xC4D1, 0xC4D4, 0xC4D5, 0xC4D7, 0xC4DA, 0xC4DC,
    0xC4DD, 0xC4DE, 0xC4DF, 0xC4E1, 0xC4E2, 0xC4E4, 0xC4EA, 0xC4ED, 0xC4EE, 0xC4F5, 0xC4F6, 0xC4F9,
    0xC4FB, 0xC4FC, 0xC4FD, 0xC5A5, 0xC5A9, 0xC5AB, 0xC5AC, 0xC5AD, 0xC5AE, 0xC5B0, 0xC5B2, 0xC5B3,
    0xC5B4, 0xC5B5, 0xC5B6, 0xC5B7, 0xC5B8, 0xC5B9, 0xC5BA, 0xC5BB, 0xC5BD, 0xC5BE, 0xC5C1, 0xC5C2,
    0xC5C3, 0xC5C6, 0xC5C7, 0xC5CA, 0xC5CD, 0xC5CF, 0xC5D0, 0xC5D7, 0xC5D8, 0xC5D9, 0xC5DA, 0xC5DB,
    0xC5DC, 0xC5DE, 0xC5E4, 0xC5E5, 0xC5E6, 0xC5E8, 0xC5E9, 0xC5EB, 0xC5F5, 0xC5F8, 0xC5F9, 0xC6A2,
    0xC6A5, 0xC6A9, 0xC6AE, 0xC6AF, 0xC6B0, 0xC6B2, 0xC6BC, 0xC6BD, 0xC6BE, 0xC6BF, 0xC6C1, 0xC6C3,
    0xC6C4, 0xC6C7, 0xC6C8, 0xC6CA, 0xC6CB, 0xC6CE, 0xC6D0, 0xC6D1, 0xC6D2, 0xC6D8, 0xC6DB, 0xC6DC,
    0xC6DD, 0xC6DE, 0xC6DF, 0xC6E4, 0xC6E5, 0xC6E6, 0xC6E7, 0xC6EC, 0xC6ED, 0xC6EE, 0xC6F2, 0xC6F3,
    0xC6F7, 0xC6F8, 0xC6F9, 0xC6FA, 0xC6FB, 0xC7A5, 0xC7AA, 0xC7AC, 0xC7AE, 0xC7B1, 0xC7B2, 0xC7B3,
    0xC7B6, 0xC7BB, 0xC7C1, 0xC7C2, 0xC7C3, 0xC7C7, 0xC7C8, 0xC7C9, 0xC7CA, 0xC7CD, 0xC7CE, 0xC7CF,
    0xC7D0, 0xC7D1, 0xC7D2, 0xC7D4, 0xC7D5, 0xC7D7, 0xC7D8, 0xC7D9, 0xC7DA, 0xC7DE, 0xC7DF, 0xC7E0,
    0xC7E2, 0xC7E3, 0xC7E8, 0xC7EB, 0xC7EC, 0xC7EE, 0xC7EF, 0xC7F0, 0xC7F2, 0xC7F4, 0xC7F6, 0xC7F9,
    0xC7FB, 0xC7FC, 0xC8A3, 0xC8A4, 0xC8A5, 0xC8A6, 0xC8A8, 0xC8AB, 0xC8AD, 0xC8AE, 0xC8AF, 0xC8B0,
    0xC8B2, 0xC8B8, 0xC8B9, 0xC8BD, 0xC8BF, 0xC8C4, 0xC8C5, 0xC8C7, 0xC8D6, 0xC8D9, 0xC8DE, 0xC8E4,
    0xC8E5, 0xC8E6, 0xC8F1, 0xC8F7, 0xC8F9, 0xC8FA, 0xC8FC,
];
