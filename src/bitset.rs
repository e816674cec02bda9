use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::str::FromStr;

use tracing::{debug, trace};

use crate::error::{BitSetError, Result};

/// Number of usable bits stored in every word.
///
/// Each word is a `u32`, the top bit is never interpreted as part of the bit
/// sequence. It only carries what a full 32-bit complement leaves behind.
pub const BITS_PER_WORD: usize = 31;

pub(crate) const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Computes the number of words needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use growable_bitset::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(31), 1);
/// assert_eq!(word_count(32), 2);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(BITS_PER_WORD)
}

#[inline]
const fn idxs(ndx: usize) -> (usize, usize) {
    (ndx / BITS_PER_WORD, ndx % BITS_PER_WORD)
}

fn check_range(from: usize, to: usize) -> Result<()> {
    if from > to {
        debug!(from = from, to = to, "rejecting inverted bit range");
        return Err(BitSetError::InvalidRange { from, to });
    }
    Ok(())
}

/// Divides a most-significant-first bit array, read as a base 2 number, by
/// `base` in place and returns the remainder.
fn divide(bits: &mut [u8], base: u32) -> u32 {
    let mut rem = 0;
    for bit in bits.iter_mut() {
        let acc = u32::from(*bit) + rem * 2;
        // acc < 2 * base, so the quotient digit is a single bit
        *bit = (acc / base) as u8;
        rem = acc % base;
    }
    rem
}

/// A growable bit set packed into 31-bit words.
///
/// Bit `n` lives in word `n / 31` at position `n % 31`. Every bit beyond the
/// allocated words reads as unset, so two sets that only differ by trailing
/// zero words compare equal.
///
/// Binary operations accept anything convertible into a `BitSet`: another
/// set (by value or by reference), a `u32` or a string literal in binary
/// (`"101"`, `"0b101"`) or hexadecimal (`"0x1f"`) notation. They only touch
/// the words `self` already has, the operand is never grown into `self`.
#[derive(Clone, Default)]
pub struct BitSet(pub(crate) Vec<u32>);

impl BitSet {
    /// Creates an empty bit set without any allocated words.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let bs = BitSet::new();
    /// assert!(bs.is_empty());
    /// assert_eq!(bs.word_len(), 0);
    /// ```
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a bit pattern.
    ///
    /// A `0x` prefix reads the rest as hexadecimal digits (4 bits each), a
    /// `0b` prefix or no prefix reads binary digits (1 bit each). Digits are
    /// consumed from the end of the string, so the last character maps to
    /// the lowest bits. Parsing stops silently at the first character that is
    /// not a digit in the selected base.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::parse("0b101").to_string(), "101");
    /// assert_eq!(BitSet::parse("0xfF").cardinality(), 8);
    /// // stops at 'z', only "11" is read
    /// assert_eq!(BitSet::parse("1z11").to_string(), "11");
    /// ```
    pub fn parse(literal: &str) -> Self {
        let (digits, log) = if let Some(hex) = literal.strip_prefix("0x") {
            (hex, 4)
        } else if let Some(bin) = literal.strip_prefix("0b") {
            (bin, 1)
        } else {
            (literal, 1)
        };
        let radix = 1u32 << log;

        let mut words = Vec::new();
        for (pos, ch) in digits.chars().rev().enumerate() {
            let Some(n) = ch.to_digit(radix) else {
                break;
            };
            for j in 0..log {
                let (slot, bit) = idxs(pos * log + j);
                if slot >= words.len() {
                    words.resize(slot + 1, 0);
                }
                words[slot] |= (n >> j & 1) << bit;
            }
        }
        Self(words)
    }

    /// Replaces the whole content with the bit pattern parsed from
    /// `literal`, see [`parse`].
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from(7u32);
    /// bs.load("0b10");
    /// assert_eq!(bs.to_string(), "10");
    /// ```
    ///
    /// [`parse`]: BitSet::parse
    pub fn load(&mut self, literal: &str) -> &mut Self {
        *self = Self::parse(literal);
        self
    }

    /// Constructs a bit set by setting only the indices provided in the
    /// iterator.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let bs = BitSet::from_ones_iter([0, 2, 40]);
    /// assert!(bs.get(40));
    /// assert_eq!(bs.cardinality(), 3);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bs = Self::new();
        for ndx in iter {
            bs.set(ndx);
        }
        bs
    }

    /// Returns the number of allocated words.
    #[inline]
    pub fn word_len(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of bits covered by the allocated words.
    #[inline]
    pub fn bit_capacity(&self) -> usize {
        self.0.len() * BITS_PER_WORD
    }

    /// Returns the raw words, least significant first.
    ///
    /// The top bit of a word may be set after a complement operation, it is
    /// not part of the bit sequence.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.0
    }

    #[inline]
    fn word(&self, slot: usize) -> u32 {
        self.0.get(slot).copied().unwrap_or(0)
    }

    fn grow_to(&mut self, len: usize) {
        if len > self.0.len() {
            trace!(from = self.0.len(), to = len, "growing bit set storage");
            self.0.resize(len, 0);
        }
    }

    fn combine(&mut self, operand: BitSet, op: impl Fn(u32, u32) -> u32) -> &mut Self {
        for (slot, word) in self.0.iter_mut().enumerate() {
            *word = op(*word, operand.word(slot));
        }
        self
    }

    fn complement(&mut self) {
        for word in &mut self.0 {
            *word = !*word;
        }
    }

    /// Performs an in-place bitwise AND with `other`.
    ///
    /// Only the words of `self` are combined, missing words of `other` count
    /// as zero.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from(10u32);
    /// bs.and(12u32);
    /// assert_eq!(bs.to_string_radix(10).unwrap(), "8");
    /// ```
    pub fn and(&mut self, other: impl Into<BitSet>) -> &mut Self {
        self.combine(other.into(), |a, b| a & b)
    }

    /// Performs an in-place bitwise OR with `other`.
    ///
    /// Bits of `other` beyond the allocated words of `self` are dropped.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from("0b1000");
    /// bs.or("0b0011");
    /// assert_eq!(bs.to_string(), "1011");
    ///
    /// let mut empty = BitSet::new();
    /// empty.or("0b1");
    /// assert!(empty.is_empty());
    /// ```
    pub fn or(&mut self, other: impl Into<BitSet>) -> &mut Self {
        self.combine(other.into(), |a, b| a | b)
    }

    /// Performs an in-place bitwise XOR with `other`.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from("0b1100");
    /// bs.xor("0b1010");
    /// assert_eq!(bs.to_string(), "110");
    /// ```
    pub fn xor(&mut self, other: impl Into<BitSet>) -> &mut Self {
        self.combine(other.into(), |a, b| a ^ b)
    }

    /// Performs an in-place bitwise NAND with `other`.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from(5u32);
    /// bs.nand(3u32);
    /// assert!(!bs.get(0));
    /// assert!(bs.get(1));
    /// assert_eq!(bs.cardinality(), 30);
    /// ```
    pub fn nand(&mut self, other: impl Into<BitSet>) -> &mut Self {
        self.combine(other.into(), |a, b| !(a & b))
    }

    /// Performs an in-place bitwise NOR with `other`.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from(5u32);
    /// bs.nor(2u32);
    /// assert_eq!(bs.cardinality(), 28);
    /// ```
    pub fn nor(&mut self, other: impl Into<BitSet>) -> &mut Self {
        self.combine(other.into(), |a, b| !(a | b))
    }

    /// Inverts every allocated word in place (bitwise NOT).
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from(0u32);
    /// bs.not();
    /// assert_eq!(bs.cardinality(), 31);
    /// ```
    pub fn not(&mut self) -> &mut Self {
        self.complement();
        self
    }

    /// Returns `true` if both sets hold the same words, treating missing
    /// words on either side as zero.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut wide = BitSet::from(1u32);
    /// wide.set_to(100, false);
    /// assert!(wide.equals(1u32));
    /// assert!(!wide.equals("0b11"));
    /// ```
    pub fn equals(&self, other: impl Into<BitSet>) -> bool {
        *self == other.into()
    }

    /// Returns `true` if every allocated word is zero.
    ///
    /// A word that only holds a complement artifact in its top bit is not
    /// empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|word| *word == 0)
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::from(5u32).cardinality(), 2);
    /// ```
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.0
            .iter()
            .map(|word| (word & WORD_MASK).count_ones() as usize)
            .sum()
    }

    /// Returns the index of the highest set bit, or `0` if no bit is set.
    ///
    /// A result of `0` is ambiguous, check [`is_empty`] or [`get`] when the
    /// difference matters.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// assert_eq!(bs.msb(), 0);
    /// bs.set(5);
    /// assert_eq!(bs.msb(), 5);
    /// bs.set(64);
    /// assert_eq!(bs.msb(), 64);
    /// ```
    ///
    /// [`is_empty`]: BitSet::is_empty
    /// [`get`]: BitSet::get
    pub fn msb(&self) -> usize {
        for (slot, word) in self.0.iter().enumerate().rev() {
            let usable = word & WORD_MASK;
            if usable != 0 {
                let shifts = (u32::BITS - 1 - usable.leading_zeros()) as usize;
                return slot * BITS_PER_WORD + shifts;
            }
        }
        0
    }

    /// Renders the set as a number in the given base, most significant digit
    /// first, using lowercase letters for digits above 9.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidBase`] unless `2 <= base <= 36`.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::{BitSet, BitSetError};
    ///
    /// let bs = BitSet::from("0xff");
    /// assert_eq!(bs.to_string_radix(16).unwrap(), "ff");
    /// assert_eq!(bs.to_string_radix(10).unwrap(), "255");
    /// assert_eq!(BitSet::new().to_string_radix(7).unwrap(), "0");
    /// assert_eq!(bs.to_string_radix(37), Err(BitSetError::InvalidBase(37)));
    /// ```
    pub fn to_string_radix(&self, base: u32) -> Result<String> {
        if !(2..=36).contains(&base) {
            return Err(BitSetError::InvalidBase(base));
        }

        let mut bits: Vec<u8> = self
            .0
            .iter()
            .rev()
            .flat_map(|&word| (0..BITS_PER_WORD).rev().map(move |j| (word >> j & 1) as u8))
            .collect();

        let mut digits = Vec::new();
        loop {
            let rem = divide(&mut bits, base);
            digits.push(DIGITS[rem as usize]);
            if bits.iter().all(|bit| *bit == 0) {
                break;
            }
        }
        Ok(digits.iter().rev().map(|&digit| char::from(digit)).collect())
    }

    /// Sets the bit at the given index, growing the set if needed.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// bs.set(3).set(40);
    /// assert!(bs.get(3));
    /// assert!(bs.get(40));
    /// assert_eq!(bs.word_len(), 2);
    /// ```
    #[inline]
    pub fn set(&mut self, ndx: usize) -> &mut Self {
        self.set_to(ndx, true)
    }

    /// Sets the bit at the given index to `value`, growing the set with
    /// zeroed words up to the word holding `ndx` if needed.
    ///
    /// Even clearing a bit past the end grows the set.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from(3u32);
    /// bs.set_to(0, false);
    /// assert_eq!(bs.to_string(), "10");
    /// bs.set_to(62, false);
    /// assert_eq!(bs.word_len(), 3);
    /// ```
    pub fn set_to(&mut self, ndx: usize, value: bool) -> &mut Self {
        let (slot, bit) = idxs(ndx);
        self.grow_to(slot + 1);
        if value {
            self.0[slot] |= 1 << bit;
        } else {
            self.0[slot] &= !(1 << bit);
        }
        self
    }

    /// Sets every bit in `from..=to` to `value`.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from > to`, leaving the set
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// bs.set_range(2, 4, true).unwrap();
    /// assert_eq!(bs.to_string(), "11100");
    /// assert!(bs.set_range(4, 2, true).is_err());
    /// ```
    pub fn set_range(&mut self, from: usize, to: usize, value: bool) -> Result<&mut Self> {
        check_range(from, to)?;
        for ndx in from..=to {
            self.set_to(ndx, value);
        }
        Ok(self)
    }

    /// Copies a bit pattern into `from..=to`.
    ///
    /// `pattern` is parsed like [`parse`] and its bit `i` is written to index
    /// `from + i`. Pattern bits that were not supplied read as unset.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from > to`, leaving the set
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::new();
    /// bs.set_range_pattern(0, 4, "10101").unwrap();
    /// assert_eq!(bs.to_string(), "10101");
    /// ```
    ///
    /// [`parse`]: BitSet::parse
    pub fn set_range_pattern(&mut self, from: usize, to: usize, pattern: &str) -> Result<&mut Self> {
        check_range(from, to)?;
        let pattern = Self::parse(pattern);
        for ndx in from..=to {
            self.set_to(ndx, pattern.get(ndx - from));
        }
        Ok(self)
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// Indices past the allocated words read as unset.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let bs = BitSet::from("0b10");
    /// assert!(bs.get(1));
    /// assert!(!bs.get(0));
    /// assert!(!bs.get(1_000));
    /// ```
    #[inline]
    pub fn get(&self, ndx: usize) -> bool {
        let (slot, bit) = idxs(ndx);
        self.0.get(slot).is_some_and(|word| word >> bit & 1 != 0)
    }

    /// Copies the bits in `from..=to` into a new set, shifted down to start
    /// at index 0.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from > to`.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let bs = BitSet::from("0b110100");
    /// assert_eq!(bs.get_range(2, 4).unwrap().to_string(), "101");
    /// ```
    pub fn get_range(&self, from: usize, to: usize) -> Result<BitSet> {
        check_range(from, to)?;
        let mut range = BitSet::new();
        for ndx in from..=to {
            range.set_to(ndx - from, self.get(ndx));
        }
        Ok(range)
    }

    /// Unsets every bit, keeping the allocated words.
    pub fn clear(&mut self) -> &mut Self {
        self.0.fill(0);
        self
    }

    /// Unsets every bit from `from` up to and including index
    /// [`bit_capacity`].
    ///
    /// The upper bound is inclusive, so a set with allocated words grows by
    /// one word.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from` lies past
    /// [`bit_capacity`].
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from("0b1111");
    /// bs.clear_from(2).unwrap();
    /// assert_eq!(bs.to_string(), "11");
    /// ```
    ///
    /// [`bit_capacity`]: BitSet::bit_capacity
    pub fn clear_from(&mut self, from: usize) -> Result<&mut Self> {
        self.clear_range(from, self.bit_capacity())
    }

    /// Unsets every bit in `from..=to`.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from > to`.
    pub fn clear_range(&mut self, from: usize, to: usize) -> Result<&mut Self> {
        self.set_range(from, to, false)
    }

    /// Inverts every allocated word, same as [`not`].
    ///
    /// [`not`]: BitSet::not
    pub fn flip(&mut self) -> &mut Self {
        self.complement();
        self
    }

    /// Toggles every bit from `from` up to and including index
    /// [`bit_capacity`].
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from` lies past
    /// [`bit_capacity`].
    ///
    /// [`bit_capacity`]: BitSet::bit_capacity
    pub fn flip_from(&mut self, from: usize) -> Result<&mut Self> {
        self.flip_range(from, self.bit_capacity())
    }

    /// Toggles every bit in `from..=to`, growing the set if `to` lies past
    /// the allocated words.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidRange`] if `from > to`.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let mut bs = BitSet::from("0b1010");
    /// bs.flip_range(0, 3).unwrap();
    /// assert_eq!(bs.to_string(), "101");
    /// ```
    pub fn flip_range(&mut self, from: usize, to: usize) -> Result<&mut Self> {
        check_range(from, to)?;
        for ndx in from..=to {
            let bit = self.get(ndx);
            self.set_to(ndx, !bit);
        }
        Ok(self)
    }

    /// Returns an iterator over every bit covered by the allocated words, as
    /// `bool`, from least to most significant.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let bs = BitSet::from("0b101");
    /// let bits: Vec<bool> = bs.iter().take(4).collect();
    /// assert_eq!(bits, [true, false, true, false]);
    /// assert_eq!(bs.iter().count(), 31);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.0,
            ndx: 0,
        }
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// Runs in O(max(k, w)) where k is the number of set bits and w the
    /// number of words.
    ///
    /// # Examples
    /// ```
    /// use growable_bitset::BitSet;
    ///
    /// let bs = BitSet::from_ones_iter([70, 3, 31]);
    /// let ones: Vec<usize> = bs.iter_ones().collect();
    /// assert_eq!(ones, [3, 31, 70]);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            words: &self.0,
            slot: 0,
            current: self.word(0) & WORD_MASK,
        }
    }

    fn render(&self, f: &mut Formatter<'_>, base: u32, prefix: &str, upper: bool) -> fmt::Result {
        let mut digits = self.to_string_radix(base).map_err(|_| fmt::Error)?;
        if upper {
            digits.make_ascii_uppercase();
        }
        f.pad_integral(true, prefix, &digits)
    }
}

impl From<u32> for BitSet {
    /// Stores the low 31 bits of `value` in a single word.
    fn from(value: u32) -> Self {
        Self(vec![value & WORD_MASK])
    }
}

impl From<&str> for BitSet {
    fn from(literal: &str) -> Self {
        Self::parse(literal)
    }
}

impl From<&String> for BitSet {
    fn from(literal: &String) -> Self {
        Self::parse(literal)
    }
}

impl From<&BitSet> for BitSet {
    fn from(other: &BitSet) -> Self {
        other.clone()
    }
}

impl FromStr for BitSet {
    type Err = Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        let len = self.0.len().max(other.0.len());
        (0..len).all(|slot| self.word(slot) == other.word(slot))
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // trailing zero words do not take part in equality
        let end = self.0.iter().rposition(|word| *word != 0).map_or(0, |i| i + 1);
        self.0[..end].hash(state);
    }
}

impl<'bitset> IntoIterator for &'bitset BitSet {
    type Item = bool;
    type IntoIter = Iter<'bitset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constructs a bit set from an iterator over `bool`s, assigning index 0 to
/// the first item.
///
/// The result covers every yielded item, including trailing `false`s.
impl FromIterator<bool> for BitSet {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bs = Self::new();
        for (ndx, bit) in iter.into_iter().enumerate() {
            bs.set_to(ndx, bit);
        }
        bs
    }
}

impl Display for BitSet {
    /// Formats the set in base 2.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self.to_string_radix(2).map_err(|_| fmt::Error)?;
        f.pad(&digits)
    }
}

impl Binary for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 2, "0b", false)
    }
}

impl Octal for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 8, "0o", false)
    }
}

impl LowerHex for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 16, "0x", false)
    }
}

impl UpperHex for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 16, "0x", true)
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LSB ->")?;
        for (i, bit) in self.iter().enumerate() {
            if i % BITS_PER_WORD == 0 {
                write!(f, " {i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, " <- MSB")
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $inherent:ident) => {
        impl $op for BitSet {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$inherent(rhs);
                self
            }
        }

        impl $op<&BitSet> for &BitSet {
            type Output = BitSet;

            fn $method(self, rhs: &BitSet) -> Self::Output {
                let mut result = self.clone();
                result.$inherent(rhs);
                result
            }
        }

        impl $assign for BitSet {
            fn $assign_method(&mut self, rhs: Self) {
                self.$inherent(rhs);
            }
        }

        impl $assign<&BitSet> for BitSet {
            fn $assign_method(&mut self, rhs: &BitSet) {
                self.$inherent(rhs);
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

impl Not for BitSet {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.complement();
        self
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> Self::Output {
        let mut result = self.clone();
        result.complement();
        result
    }
}

/// Iterator over every bit covered by the allocated words, as `bool` values.
///
/// Returned by [`BitSet::iter()`].
#[derive(Clone, Copy)]
pub struct Iter<'bitset> {
    words: &'bitset [u32],
    ndx: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, bit) = idxs(self.ndx);
        let word = self.words.get(slot)?;
        self.ndx += 1;
        Some(word >> bit & 1 != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.words.len() * BITS_PER_WORD).saturating_sub(self.ndx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the indices of set bits.
///
/// Returned by [`BitSet::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bitset> {
    words: &'bitset [u32],
    slot: usize,
    current: u32,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            if self.slot >= self.words.len() {
                return None;
            }
            self.slot += 1;
            self.current = self.words.get(self.slot).map_or(0, |word| word & WORD_MASK);
        }
        let tz = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1; // unset LSB
        Some(self.slot * BITS_PER_WORD + tz)
    }
}

impl FusedIterator for IterOnes<'_> {}
