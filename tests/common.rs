#![allow(unused)]

use std::collections::HashSet;

use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn setup_banana_example() -> (&'static [u8; 6], usize) {
    // b = 2, a = 1, n = 14
    (&[2, 1, 14, 1, 14, 1], 26)
}

pub fn random_texts(seed: u64, count: usize, max_len: usize, max_symbol: u8) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            (0..len).map(|_| rng.random_range(1..=max_symbol)).collect()
        })
        .collect()
}

fn index<O: ToPrimitive>(value: &O) -> usize {
    value.to_usize().unwrap()
}

// slices compare shorter prefixes as smaller, which matches the sentinel convention
pub fn is_suffix_array<I: Ord, O: ToPrimitive>(text: &[I], maybe_suffix_array: &[O]) -> bool {
    if text.len() != maybe_suffix_array.len() {
        return false;
    }

    let mut seen = vec![false; text.len()];
    for position in maybe_suffix_array {
        let position = index(position);

        if position >= text.len() || seen[position] {
            return false;
        }

        seen[position] = true;
    }

    maybe_suffix_array
        .windows(2)
        .all(|indices| text[index(&indices[0])..] <= text[index(&indices[1])..])
}

pub fn naive_suffix_array<I: Ord>(text: &[I]) -> Vec<usize> {
    let mut suffix_array: Vec<_> = (0..text.len()).collect();
    suffix_array.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    suffix_array
}

pub fn longest_common_prefix<I: PartialEq>(t1: &[I], t2: &[I]) -> usize {
    std::iter::zip(t1, t2).take_while(|(c1, c2)| c1 == c2).count()
}

pub fn is_lcp_array<I: PartialEq, O: ToPrimitive>(text: &[I], suffix_array: &[O], lcp: &[O]) -> bool {
    if lcp.len() + 1 != suffix_array.len() {
        return false;
    }

    suffix_array
        .windows(2)
        .zip(lcp)
        .all(|(indices, lcp_value)| {
            longest_common_prefix(&text[index(&indices[0])..], &text[index(&indices[1])..])
                == index(lcp_value)
        })
}

pub fn brute_force_distinct_substrings<I: Eq + std::hash::Hash>(text: &[I]) -> usize {
    let mut substrings = HashSet::new();

    for start in 0..text.len() {
        for end in start + 1..=text.len() {
            substrings.insert(&text[start..end]);
        }
    }

    substrings.len()
}
