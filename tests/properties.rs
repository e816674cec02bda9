use growable_bitset::BitSet;
use proptest::prelude::*;

// Highest index used by the strategies, every padded set spans the same words.
const MAX_NDX: usize = 200;

fn padded(ones: &[usize]) -> BitSet {
    let mut bs = BitSet::from_ones_iter(ones.iter().copied());
    bs.set_to(MAX_NDX, false);
    bs
}

fn ones() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..MAX_NDX, 0..48)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nand_is_not_of_and(a in ones(), b in ones()) {
        let (a, b) = (padded(&a), padded(&b));

        let mut lhs = a.clone();
        lhs.and(&b).not();
        let mut rhs = a.clone();
        rhs.nand(&b);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn nor_is_and_of_complements(a in ones(), b in ones()) {
        let (a, b) = (padded(&a), padded(&b));

        let mut lhs = a.clone();
        lhs.nor(&b);
        let mut rhs = a.clone();
        rhs.not().and(!&b);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn binary_ops_match_per_bit_logic(a in ones(), b in ones()) {
        let (a, b) = (padded(&a), padded(&b));
        let and = &a & &b;
        let or = &a | &b;
        let xor = &a ^ &b;

        for ndx in 0..a.bit_capacity() {
            prop_assert_eq!(and.get(ndx), a.get(ndx) && b.get(ndx));
            prop_assert_eq!(or.get(ndx), a.get(ndx) || b.get(ndx));
            prop_assert_eq!(xor.get(ndx), a.get(ndx) != b.get(ndx));
        }
    }

    #[test]
    fn base_two_string_round_trips(a in ones()) {
        let bs = BitSet::from_ones_iter(a);
        let rendered = bs.to_string_radix(2).unwrap();
        prop_assert_eq!(BitSet::parse(&rendered), bs);
    }

    #[test]
    fn radix_matches_integer_formatting(a in prop::collection::vec(0usize..120, 0..24)) {
        let bs = BitSet::from_ones_iter(a.iter().copied());
        let value = a.iter().fold(0u128, |acc, ndx| acc | 1 << ndx);

        prop_assert_eq!(bs.to_string_radix(8).unwrap(), format!("{value:o}"));
        prop_assert_eq!(bs.to_string_radix(10).unwrap(), format!("{value}"));
        prop_assert_eq!(bs.to_string_radix(16).unwrap(), format!("{value:x}"));
    }

    #[test]
    fn cardinality_counts_set_bits(a in ones()) {
        let bs = BitSet::from_ones_iter(a);
        let counted = (0..bs.bit_capacity()).filter(|&ndx| bs.get(ndx)).count();
        prop_assert_eq!(bs.cardinality(), counted);
        prop_assert_eq!(bs.iter_ones().count(), counted);
    }

    #[test]
    fn set_then_clear_touches_one_bit(a in ones(), ndx in 0usize..MAX_NDX * 2) {
        let original = BitSet::from_ones_iter(a);
        let mut bs = original.clone();

        bs.set(ndx);
        prop_assert!(bs.get(ndx));
        bs.clear_range(ndx, ndx).unwrap();
        prop_assert!(!bs.get(ndx));

        for other in (0..bs.bit_capacity()).filter(|&other| other != ndx) {
            prop_assert_eq!(bs.get(other), original.get(other));
        }
    }

    #[test]
    fn msb_is_highest_set_index(a in prop::collection::vec(0usize..MAX_NDX, 1..48)) {
        let bs = BitSet::from_ones_iter(a.iter().copied());
        prop_assert_eq!(Some(bs.msb()), a.iter().copied().max());
    }

    #[test]
    fn get_range_shifts_bits_down(a in ones(), from in 0usize..MAX_NDX, len in 0usize..64) {
        let bs = BitSet::from_ones_iter(a);
        let to = from + len;
        let range = bs.get_range(from, to).unwrap();

        for ndx in 0..=len {
            prop_assert_eq!(range.get(ndx), bs.get(from + ndx));
        }
        prop_assert!(!range.get(len + 1));
    }

    #[test]
    fn flip_range_twice_is_identity(a in ones(), from in 0usize..MAX_NDX, len in 0usize..64) {
        let original = BitSet::from_ones_iter(a);
        let mut bs = original.clone();
        bs.flip_range(from, from + len).unwrap();
        bs.flip_range(from, from + len).unwrap();
        prop_assert_eq!(bs, original);
    }
}
