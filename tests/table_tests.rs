//! # Table Tests: Bit Packing
//!
//! Validates the packed-table arithmetic every prober depends on.

use std::time::Instant;
use ude::dsa::{pack2_digits, pack4, pack4_values, unpack, BitTable, TableError, FOUR_BITS, TWO_BITS};

/// Verifies the reference packed words.
#[test]
fn test_pack4_reference_words() {
    let t = Instant::now();

    assert_eq!(pack4(0, 0, 0, 0, 0, 0, 0, 0), 0);
    assert_eq!(pack4(1, 1, 1, 1, 1, 1, 1, 1), 286331153);
    assert_eq!(pack4(2, 2, 2, 2, 2, 2, 2, 2), 572662306);
    assert_eq!(pack4(15, 15, 15, 15, 15, 15, 15, 15), -1);

    let overhead = t.elapsed();
    println!("test_pack4_reference_words: Testing Overhead = {:?}", overhead);
}

/// Verifies that unpack reads back every packed code, sign bit included.
#[test]
fn test_unpack_reads_back_codes() {
    let t = Instant::now();

    const CODES: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
    static WORDS: [i32; 2] = pack4_values(&CODES);
    let table = BitTable::new(&WORDS, FOUR_BITS, CODES.len());
    for (i, &code) in CODES.iter().enumerate() {
        let l = FOUR_BITS;
        assert_eq!(
            unpack(&WORDS, i, l.index_shift, l.shift_mask, l.bit_shift, l.unit_mask),
            code as u32
        );
        assert_eq!(table.unpack(i), code);
    }
    assert!(table.validate(15).is_ok());
    assert_eq!(
        table.validate(9),
        Err(TableError::ValueOutOfRange { index: 10, value: 10, max: 9 })
    );

    let overhead = t.elapsed();
    println!("test_unpack_reads_back_codes: Testing Overhead = {:?}", overhead);
}

/// Verifies two-bit digit tables and the truncation check.
#[test]
fn test_two_bit_tables() {
    let t = Instant::now();

    static WORDS: [i32; 1] = pack2_digits(b"0123321001233210");
    let table = BitTable::new(&WORDS, TWO_BITS, 16);
    assert_eq!(table.unpack(3), 3);
    assert_eq!(table.unpack(6), 1);
    assert_eq!(table.unpack(15), 0);

    let oversized = BitTable::new(&WORDS, TWO_BITS, 40);
    assert_eq!(oversized.validate(3), Err(TableError::Truncated { len: 40, capacity: 16 }));

    let overhead = t.elapsed();
    println!("test_two_bit_tables: Testing Overhead = {:?}", overhead);
}
