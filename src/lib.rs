//! A growable bit set written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`BitSet`] is the main struct in this library. It packs bits into 31-bit
//! words, grows on demand when a bit past the end is written and reads every
//! bit past the end as unset. Its [features](#features) are listed below.
//!
//! # Examples
//! ```
//! use growable_bitset::BitSet;
//!
//! let mut bs = BitSet::from("0b101");
//! assert_eq!(bs.cardinality(), 2);
//! bs.set(40);
//! assert!(bs.get(40));
//! assert_eq!(bs.msb(), 40);
//!
//! let mut mask = BitSet::from(10u32);
//! mask.and(12u32);
//! assert_eq!(mask.to_string_radix(10).unwrap(), "8");
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, only needs `alloc`
//! - Construction from `u32`, binary (`"101"`, `"0b101"`) and hexadecimal
//!   (`"0x1f"`) literals or another set
//! - In-place bitwise algebra, chainable:
//!   - `and`, `or`, `xor`, `nand`, `nor`, `not`
//!   - `&`, `|`, `^`, `!`, `&=`, `|=`, `^=`
//! - Bit and range access: `set`, `set_to`, `set_range`,
//!   `set_range_pattern`, `get`, `get_range`, `clear*`, `flip*`
//! - Queries: `cardinality`, `msb`, `is_empty`, `equals`
//! - Radix conversion for bases 2 to 36 via `to_string_radix`, plus
//!   `Display`, `Binary`, `Octal`, `LowerHex` and `UpperHex`
//! - Iteration over all bits (`iter`) or set bit indices (`iter_ones`)
//!
//! # Cargo features
//!
//! - `std`: enables the `std` support of `thiserror` and `tracing`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitset;
mod error;

pub use bitset::{BITS_PER_WORD, BitSet, Iter, IterOnes, word_count};
pub use error::{BitSetError, Result};
