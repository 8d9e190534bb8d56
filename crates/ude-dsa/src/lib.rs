#![no_std]

pub mod bit_table;

pub use bit_table::{
    pack2_digits, pack3_values, pack4, pack4_values, tri_slots, unpack, BitLayout, BitTable,
    TableError, TriBitTable, FOUR_BITS, TWO_BITS,
};
