use growable_bitset::BitSet;

fn combinations(idx: usize, picks: &mut BitSet, len: usize) {
    if idx == len {
        let rendered = picks.get_range(0, len - 1).map(|range| format!("{range:?}"));
        println!("{} {:?}", picks.cardinality(), rendered);
        return;
    }
    if !picks.get(idx) {
        picks.set(idx);
        combinations(idx + 1, picks, len);
        picks.set_to(idx, false);
    }
    combinations(idx + 1, picks, len)
}

fn main() {
    let mut picks = BitSet::new();
    combinations(0, &mut picks, 4);

    let mut mask = BitSet::from("0xf0");
    mask.and("0b10110000").or(1u32);
    println!("{mask} = {}", mask.to_string_radix(10).unwrap_or_default());
}
