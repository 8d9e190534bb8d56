use core::fmt;

use encoding_rs::Encoding;

/// Every charset the engine can report.
///
/// ## Mechanical Sympathy: Closed Registry
/// Probers carry a `Charset` tag instead of a name string, so reporting a
/// result never allocates and the canonical spelling lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Ascii,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    Ucs4_3412,
    Ucs4_2143,
    ShiftJis,
    EucJp,
    EucKr,
    EucTw,
    Gb18030,
    Big5,
    Iso2022Jp,
    Iso2022Kr,
    Iso2022Cn,
    HzGb2312,
    Windows1251,
    Windows1252,
    Windows1253,
    Windows1255,
    Koi8R,
    Ibm855,
    Ibm866,
    MacCyrillic,
    Tis620,
    Iso8859_5,
    Iso8859_7,
    Iso8859_8,
}

impl Charset {
    pub const ALL: [Charset; 30] = [
        Charset::Ascii,
        Charset::Utf8,
        Charset::Utf16Le,
        Charset::Utf16Be,
        Charset::Utf32Le,
        Charset::Utf32Be,
        Charset::Ucs4_3412,
        Charset::Ucs4_2143,
        Charset::ShiftJis,
        Charset::EucJp,
        Charset::EucKr,
        Charset::EucTw,
        Charset::Gb18030,
        Charset::Big5,
        Charset::Iso2022Jp,
        Charset::Iso2022Kr,
        Charset::Iso2022Cn,
        Charset::HzGb2312,
        Charset::Windows1251,
        Charset::Windows1252,
        Charset::Windows1253,
        Charset::Windows1255,
        Charset::Koi8R,
        Charset::Ibm855,
        Charset::Ibm866,
        Charset::MacCyrillic,
        Charset::Tis620,
        Charset::Iso8859_5,
        Charset::Iso8859_7,
        Charset::Iso8859_8,
    ];

    /// Canonical name as reported by the detector.
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Ascii => "ASCII",
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf32Le => "UTF-32LE",
            Charset::Utf32Be => "UTF-32BE",
            Charset::Ucs4_3412 => "X-ISO-10646-UCS-4-3412",
            Charset::Ucs4_2143 => "X-ISO-10646-UCS-4-2143",
            Charset::ShiftJis => "Shift_JIS",
            Charset::EucJp => "EUC-JP",
            Charset::EucKr => "EUC-KR",
            Charset::EucTw => "EUC-TW",
            Charset::Gb18030 => "GB18030",
            Charset::Big5 => "Big5",
            Charset::Iso2022Jp => "ISO-2022-JP",
            Charset::Iso2022Kr => "ISO-2022-KR",
            Charset::Iso2022Cn => "ISO-2022-CN",
            Charset::HzGb2312 => "HZ-GB-2312",
            Charset::Windows1251 => "windows-1251",
            Charset::Windows1252 => "windows-1252",
            Charset::Windows1253 => "windows-1253",
            Charset::Windows1255 => "windows-1255",
            Charset::Koi8R => "KOI8-R",
            Charset::Ibm855 => "IBM855",
            Charset::Ibm866 => "IBM866",
            Charset::MacCyrillic => "x-mac-cyrillic",
            Charset::Tis620 => "TIS-620",
            Charset::Iso8859_5 => "ISO-8859-5",
            Charset::Iso8859_7 => "ISO-8859-7",
            Charset::Iso8859_8 => "ISO-8859-8",
        }
    }

    /// Resolves a canonical name or common alias, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Charset> {
        let label = label.trim();
        Charset::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(label))
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
                    .map(|(_, c)| *c)
            })
    }

    /// Decoder for callers that transcode after detection. `None` where
    /// `encoding_rs` has no decoder for the charset.
    pub fn encoding(self) -> Option<&'static Encoding> {
        match self {
            // us-ascii is a windows-1252 label in the Encoding Standard.
            Charset::Ascii | Charset::Windows1252 => Some(encoding_rs::WINDOWS_1252),
            Charset::Utf8 => Some(encoding_rs::UTF_8),
            Charset::Utf16Le => Some(encoding_rs::UTF_16LE),
            Charset::Utf16Be => Some(encoding_rs::UTF_16BE),
            Charset::ShiftJis => Some(encoding_rs::SHIFT_JIS),
            Charset::EucJp => Some(encoding_rs::EUC_JP),
            Charset::EucKr => Some(encoding_rs::EUC_KR),
            Charset::Gb18030 => Some(encoding_rs::GB18030),
            Charset::Big5 => Some(encoding_rs::BIG5),
            Charset::Iso2022Jp => Some(encoding_rs::ISO_2022_JP),
            Charset::Windows1251 => Some(encoding_rs::WINDOWS_1251),
            Charset::Windows1253 => Some(encoding_rs::WINDOWS_1253),
            Charset::Windows1255 => Some(encoding_rs::WINDOWS_1255),
            Charset::Koi8R => Some(encoding_rs::KOI8_R),
            Charset::Ibm866 => Some(encoding_rs::IBM866),
            Charset::MacCyrillic => Some(encoding_rs::X_MAC_CYRILLIC),
            Charset::Tis620 => Some(encoding_rs::WINDOWS_874),
            Charset::Iso8859_5 => Some(encoding_rs::ISO_8859_5),
            Charset::Iso8859_7 => Some(encoding_rs::ISO_8859_7),
            Charset::Iso8859_8 => Some(encoding_rs::ISO_8859_8),
            Charset::Utf32Le
            | Charset::Utf32Be
            | Charset::Ucs4_3412
            | Charset::Ucs4_2143
            | Charset::EucTw
            | Charset::Iso2022Kr
            | Charset::Iso2022Cn
            | Charset::HzGb2312
            | Charset::Ibm855 => None,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static ALIASES: &[(&str, Charset)] = &[
    ("us-ascii", Charset::Ascii),
    ("ansi_x3.4-1968", Charset::Ascii),
    ("utf8", Charset::Utf8),
    ("utf-16", Charset::Utf16Le),
    ("utf-32", Charset::Utf32Le),
    ("sjis", Charset::ShiftJis),
    ("shift-jis", Charset::ShiftJis),
    ("ms_kanji", Charset::ShiftJis),
    ("csshiftjis", Charset::ShiftJis),
    ("x-euc-jp", Charset::EucJp),
    ("cseucpkdfmtjapanese", Charset::EucJp),
    ("cseuckr", Charset::EucKr),
    ("x-euc-tw", Charset::EucTw),
    ("cns11643", Charset::EucTw),
    ("gb2312", Charset::Gb18030),
    ("gbk", Charset::Gb18030),
    ("big-5", Charset::Big5),
    ("cn-big5", Charset::Big5),
    ("csbig5", Charset::Big5),
    ("csiso2022jp", Charset::Iso2022Jp),
    ("csiso2022kr", Charset::Iso2022Kr),
    ("hz-gb2312", Charset::HzGb2312),
    ("hz", Charset::HzGb2312),
    ("cp1251", Charset::Windows1251),
    ("x-cp1251", Charset::Windows1251),
    ("cp1252", Charset::Windows1252),
    ("latin1", Charset::Windows1252),
    ("iso-8859-1", Charset::Windows1252),
    ("cp1253", Charset::Windows1253),
    ("cp1255", Charset::Windows1255),
    ("koi8r", Charset::Koi8R),
    ("cskoi8r", Charset::Koi8R),
    ("cp855", Charset::Ibm855),
    ("ibm-855", Charset::Ibm855),
    ("cp866", Charset::Ibm866),
    ("ibm-866", Charset::Ibm866),
    ("maccyrillic", Charset::MacCyrillic),
    ("x-mac-ukrainian", Charset::MacCyrillic),
    ("tis620", Charset::Tis620),
    ("iso-8859-11", Charset::Tis620),
    ("iso 8859-11", Charset::Tis620),
    ("iso8859-5", Charset::Iso8859_5),
    ("cyrillic", Charset::Iso8859_5),
    ("iso-8859-5:1988", Charset::Iso8859_5),
    ("greek", Charset::Iso8859_7),
    ("iso8859-7", Charset::Iso8859_7),
    ("hebrew", Charset::Iso8859_8),
    ("iso8859-8", Charset::Iso8859_8),
    ("visual", Charset::Iso8859_8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_labels() {
        for c in Charset::ALL {
            assert_eq!(Charset::from_label(c.name()), Some(c));
        }
    }

    #[test]
    fn aliases_ignore_case_and_padding() {
        assert_eq!(Charset::from_label(" Big-5 "), Some(Charset::Big5));
        assert_eq!(Charset::from_label("x-EUC-tw"), Some(Charset::EucTw));
        assert_eq!(Charset::from_label("csISO2022JP"), Some(Charset::Iso2022Jp));
        assert_eq!(Charset::from_label("ISO 8859-11"), Some(Charset::Tis620));
        assert_eq!(Charset::from_label("koi8-u"), None);
    }

    #[test]
    fn encoding_handles_match_names() {
        assert_eq!(Charset::ShiftJis.encoding(), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(Charset::Tis620.encoding().map(|e| e.name()), Some("windows-874"));
        assert_eq!(Charset::HzGb2312.encoding(), None);
    }
}
