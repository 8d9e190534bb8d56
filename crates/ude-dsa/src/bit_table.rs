use core::fmt;

/// Index arithmetic for a packed table of narrow codes.
///
/// A code at `index` lives in word `index >> index_shift`, at bit offset
/// `(index & shift_mask) * bit_shift`, and is `unit_mask` wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitLayout {
    pub index_shift: u32,
    pub shift_mask: u32,
    pub bit_shift: u32,
    pub unit_mask: u32,
}

impl BitLayout {
    /// Number of codes stored in one 32-bit word.
    pub const fn per_word(&self) -> usize {
        (self.shift_mask + 1) as usize
    }
}

/// Eight 4-bit codes per word.
pub const FOUR_BITS: BitLayout = BitLayout {
    index_shift: 3,
    shift_mask: 7,
    bit_shift: 4,
    unit_mask: 0xF,
};

/// Sixteen 2-bit codes per word.
pub const TWO_BITS: BitLayout = BitLayout {
    index_shift: 4,
    shift_mask: 15,
    bit_shift: 2,
    unit_mask: 0x3,
};

/// 3-bit codes do not divide the word, so ten are stored per word and the
/// top two bits stay zero.
const TRI_PER_WORD: usize = 10;

static_assertions::const_assert_eq!(FOUR_BITS.per_word() * 4, 32);
static_assertions::const_assert_eq!(TWO_BITS.per_word() * 2, 32);
static_assertions::const_assert!(TRI_PER_WORD * 3 <= 32);

/// Packs eight 4-bit values LSB-first into one signed word.
///
/// `pack4(15, 15, 15, 15, 15, 15, 15, 15)` is `-1`.
#[allow(clippy::too_many_arguments)]
pub const fn pack4(v0: u8, v1: u8, v2: u8, v3: u8, v4: u8, v5: u8, v6: u8, v7: u8) -> i32 {
    let word = (v0 as u32 & 0xF)
        | (v1 as u32 & 0xF) << 4
        | (v2 as u32 & 0xF) << 8
        | (v3 as u32 & 0xF) << 12
        | (v4 as u32 & 0xF) << 16
        | (v5 as u32 & 0xF) << 20
        | (v6 as u32 & 0xF) << 24
        | (v7 as u32 & 0xF) << 28;
    word as i32
}

/// Extracts the code at `index` from a packed word sequence.
///
/// ## Performance
/// Two shifts and a mask. Panics like slice indexing when `index` is past
/// the backing words.
#[inline(always)]
pub fn unpack(
    words: &[i32],
    index: usize,
    index_shift: u32,
    shift_mask: u32,
    bit_shift: u32,
    unit_mask: u32,
) -> u32 {
    let word = words[index >> index_shift] as u32;
    let offset = (index as u32 & shift_mask) * bit_shift;
    (word >> offset) & unit_mask
}

/// Packs 4-bit values into `W` words at compile time. Missing trailing
/// values are zero.
pub const fn pack4_values<const W: usize>(values: &[u8]) -> [i32; W] {
    if values.len() > W * 8 {
        panic!("too many 4-bit values for the word count");
    }
    let mut words = [0i32; W];
    let mut i = 0;
    while i < values.len() {
        if values[i] > 0xF {
            panic!("4-bit value out of range");
        }
        words[i >> 3] |= ((values[i] as u32) << ((i & 7) * 4)) as i32;
        i += 1;
    }
    words
}

/// Packs a string of ASCII digits `'0'..='3'` into `W` words of sixteen
/// 2-bit codes each. The digit count must fill the words exactly.
pub const fn pack2_digits<const W: usize>(digits: &[u8]) -> [i32; W] {
    if digits.len() != W * 16 {
        panic!("digit count does not match the word count");
    }
    let mut words = [0i32; W];
    let mut i = 0;
    while i < digits.len() {
        let d = digits[i];
        if d < b'0' || d > b'3' {
            panic!("2-bit digit out of range");
        }
        words[i >> 4] |= (((d - b'0') as u32) << ((i & 15) * 2)) as i32;
        i += 1;
    }
    words
}

/// Packs 3-bit values into `W` words, ten per word.
pub const fn pack3_values<const W: usize>(values: &[u8]) -> [i32; W] {
    if values.len() > W * TRI_PER_WORD {
        panic!("too many 3-bit values for the word count");
    }
    let mut words = [0i32; W];
    let mut i = 0;
    while i < values.len() {
        if values[i] > 0x7 {
            panic!("3-bit value out of range");
        }
        words[i / TRI_PER_WORD] |= ((values[i] as u32) << ((i % TRI_PER_WORD) * 3)) as i32;
        i += 1;
    }
    words
}

/// The (word, shift) slot of every index of an `N`-entry 3-bit table.
pub const fn tri_slots<const N: usize>() -> [(u16, u8); N] {
    let mut slots = [(0u16, 0u8); N];
    let mut i = 0;
    while i < N {
        slots[i] = ((i / TRI_PER_WORD) as u16, ((i % TRI_PER_WORD) * 3) as u8);
        i += 1;
    }
    slots
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Backing words cannot hold the declared number of codes.
    Truncated { len: usize, capacity: usize },
    /// A packed code is larger than the table allows.
    ValueOutOfRange { index: usize, value: u8, max: u8 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Truncated { len, capacity } => {
                write!(f, "table declares {} codes but holds {}", len, capacity)
            }
            TableError::ValueOutOfRange { index, value, max } => {
                write!(f, "code {} at index {} exceeds {}", value, index, max)
            }
        }
    }
}

/// A read-only packed table of 2- or 4-bit codes.
#[derive(Clone, Copy, Debug)]
pub struct BitTable {
    words: &'static [i32],
    layout: BitLayout,
    len: usize,
}

impl BitTable {
    pub const fn new(words: &'static [i32], layout: BitLayout, len: usize) -> Self {
        Self { words, layout, len }
    }

    /// Number of codes the table declares.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn unpack(&self, index: usize) -> u8 {
        let l = self.layout;
        unpack(self.words, index, l.index_shift, l.shift_mask, l.bit_shift, l.unit_mask) as u8
    }

    /// Checks that the words hold `len` codes and none exceeds `max`.
    pub fn validate(&self, max: u8) -> Result<(), TableError> {
        let capacity = self.words.len() * self.layout.per_word();
        if capacity < self.len {
            return Err(TableError::Truncated { len: self.len, capacity });
        }
        for index in 0..self.len {
            let value = self.unpack(index);
            if value > max {
                return Err(TableError::ValueOutOfRange { index, value, max });
            }
        }
        Ok(())
    }
}

/// A read-only packed table of 3-bit codes addressed through a slot map.
#[derive(Clone, Copy, Debug)]
pub struct TriBitTable {
    words: &'static [i32],
    slots: &'static [(u16, u8)],
}

impl TriBitTable {
    pub const fn new(words: &'static [i32], slots: &'static [(u16, u8)]) -> Self {
        Self { words, slots }
    }

    #[inline(always)]
    pub fn unpack(&self, index: usize) -> u8 {
        let (word, shift) = self.slots[index];
        ((self.words[word as usize] as u32 >> shift) & 0x7) as u8
    }

    pub fn validate(&self, max: u8) -> Result<(), TableError> {
        let capacity = self.words.len() * TRI_PER_WORD;
        if capacity < self.slots.len() {
            return Err(TableError::Truncated { len: self.slots.len(), capacity });
        }
        for index in 0..self.slots.len() {
            let value = self.unpack(index);
            if value > max {
                return Err(TableError::ValueOutOfRange { index, value, max });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SEQUENCE: [i32; 2] = [pack4(0, 1, 2, 3, 4, 5, 6, 7), pack4(8, 9, 10, 11, 12, 13, 14, 15)];

    #[test]
    fn pack4_known_words() {
        assert_eq!(pack4(0, 0, 0, 0, 0, 0, 0, 0), 0);
        assert_eq!(pack4(1, 1, 1, 1, 1, 1, 1, 1), 286331153);
        assert_eq!(pack4(2, 2, 2, 2, 2, 2, 2, 2), 572662306);
        assert_eq!(pack4(15, 15, 15, 15, 15, 15, 15, 15), -1);
    }

    #[test]
    fn unpack_walks_sixteen_nibbles() {
        let table = BitTable::new(&SEQUENCE, FOUR_BITS, 16);
        for i in 0..16 {
            assert_eq!(table.unpack(i), i as u8);
        }
    }

    #[test]
    fn two_bit_digits_pack_lsb_first() {
        static WORDS: [i32; 1] = pack2_digits(b"0123012301230123");
        let table = BitTable::new(&WORDS, TWO_BITS, 16);
        for i in 0..16 {
            assert_eq!(table.unpack(i), (i % 4) as u8);
        }
        assert_eq!(WORDS[0] as u32 & 0xFF, 0b1110_0100);
    }

    #[test]
    fn three_bit_slots_skip_word_tail() {
        const VALUES: [u8; 12] = [7, 6, 5, 4, 3, 2, 1, 0, 7, 7, 1, 2];
        static WORDS: [i32; 2] = pack3_values(&VALUES);
        static SLOTS: [(u16, u8); 12] = tri_slots();
        let table = TriBitTable::new(&WORDS, &SLOTS);
        for (i, v) in VALUES.iter().enumerate() {
            assert_eq!(table.unpack(i), *v);
        }
        assert_eq!(SLOTS[10], (1, 0));
        assert_eq!(WORDS[0] as u32 >> 30, 0);
    }

    #[test]
    fn validate_reports_range_and_truncation() {
        let table = BitTable::new(&SEQUENCE, FOUR_BITS, 16);
        assert_eq!(table.validate(15), Ok(()));
        assert_eq!(
            table.validate(9),
            Err(TableError::ValueOutOfRange { index: 10, value: 10, max: 9 })
        );
        let short = BitTable::new(&SEQUENCE, FOUR_BITS, 17);
        assert_eq!(short.validate(15), Err(TableError::Truncated { len: 17, capacity: 16 }));
    }
}

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    fn prove_pack4_unpack_round_trip() {
        let v: [u8; 8] = kani::any();
        for x in v.iter() {
            kani::assume(*x <= 0xF);
        }
        let words = [pack4(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7])];
        let i: usize = kani::any();
        kani::assume(i < 8);
        assert_eq!(unpack(&words, i, 3, 7, 4, 0xF), v[i] as u32);
    }
}
