// The skew (DC3) suffix array construction of Kärkkäinen and Sanders.
//
// Suffixes are split by their start position mod 3. The suffixes starting at positions 1 and 2 mod 3
// ("class 12") are sorted by their first three symbols, renamed by rank and, if ranks collide, sorted
// recursively on the renamed string. The class 0 suffixes follow from the class 12 order with one more
// radix pass, and a merge with a constant time comparator combines both.
//
// All inputs are already validated: symbols are in [1, max_symbol].

use log::{debug, trace};

use crate::helpers::{SENTINEL, symbol_or_sentinel};

type Triple = (usize, usize, usize);

pub(crate) fn suffix_array(text: &[usize], max_symbol: usize) -> Vec<usize> {
    debug!(
        "skew construction for a text of length {} with maximum symbol {max_symbol}",
        text.len()
    );

    if text.is_empty() {
        return Vec::new();
    }

    suffix_array_level(text, max_symbol, 0)
}

fn suffix_array_level(text: &[usize], max_symbol: usize, depth: usize) -> Vec<usize> {
    let len = text.len();
    let len_0 = len.div_ceil(3);
    let len_1 = (len + 1) / 3;
    let len_2 = len / 3;
    // for len = 1 mod 3, an additional class 1 suffix at position len makes the class 0 and class 1
    // blocks equally long. It consists only of sentinels.
    let fake = len_0 - len_1;
    let len_12 = len_0 + len_2;

    let mut positions_12: Vec<usize> = (0..len + fake).filter(|i| i % 3 != 0).collect();
    let mut sorted_12 = vec![0; len_12];

    // least significant symbol first, every pass is stable
    radix_pass(&positions_12, &mut sorted_12, text, 2, max_symbol);
    radix_pass(&sorted_12, &mut positions_12, text, 1, max_symbol);
    radix_pass(&positions_12, &mut sorted_12, text, 0, max_symbol);

    // names_12 is the renamed string: class 1 suffixes in [0, len_0), class 2 suffixes after them
    let mut names_12 = vec![0; len_12];
    let mut name = 0;
    let mut last_triple: Option<Triple> = None;

    for &position in &sorted_12 {
        let triple = triple_at(text, position);

        if last_triple != Some(triple) {
            name += 1;
            last_triple = Some(triple);
        }

        names_12[class_12_index(position, len_0)] = name;
    }

    // from here on, sorted_12 holds indices into names_12 and names_12 holds ranks starting at 1
    if name < len_12 {
        debug!(
            "recursion depth {}: renamed string of length {len_12} with {name} distinct names",
            depth + 1
        );

        sorted_12 = suffix_array_level(&names_12, name, depth + 1);

        for (rank, &index) in sorted_12.iter().enumerate() {
            names_12[index] = rank + 1;
        }
    } else {
        trace!("recursion depth {depth}: all {len_12} names are unique");

        for (index, &name) in names_12.iter().enumerate() {
            sorted_12[name - 1] = index;
        }
    }

    // a class 0 suffix is its first symbol followed by a class 1 suffix, whose order is already known
    let positions_0: Vec<usize> = sorted_12
        .iter()
        .filter(|&&index| index < len_0)
        .map(|&index| 3 * index)
        .collect();
    let mut sorted_0 = vec![0; positions_0.len()];
    radix_pass(&positions_0, &mut sorted_0, text, 0, max_symbol);

    merge(text, &names_12, &sorted_0, &sorted_12, len_0, fake)
}

// Stable counting sort of `source` into `target` by the symbol at offset `shift` of every position.
fn radix_pass(
    source: &[usize],
    target: &mut [usize],
    text: &[usize],
    shift: usize,
    max_symbol: usize,
) {
    debug_assert_eq!(source.len(), target.len());

    let mut buckets = vec![0usize; max_symbol + 1];

    for &position in source {
        buckets[symbol_or_sentinel(text, position + shift)] += 1;
    }

    let mut sum = 0;
    for bucket in buckets.iter_mut() {
        let count = *bucket;
        *bucket = sum;
        sum += count;
    }

    for &position in source {
        let bucket = &mut buckets[symbol_or_sentinel(text, position + shift)];
        target[*bucket] = position;
        *bucket += 1;
    }
}

fn triple_at(text: &[usize], position: usize) -> Triple {
    (
        symbol_or_sentinel(text, position),
        symbol_or_sentinel(text, position + 1),
        symbol_or_sentinel(text, position + 2),
    )
}

fn class_12_index(position: usize, len_0: usize) -> usize {
    if position % 3 == 1 {
        position / 3
    } else {
        position / 3 + len_0
    }
}

fn class_12_position(index: usize, len_0: usize) -> usize {
    if index < len_0 {
        3 * index + 1
    } else {
        3 * (index - len_0) + 2
    }
}

fn merge(
    text: &[usize],
    ranks_12: &[usize],
    sorted_0: &[usize],
    sorted_12: &[usize],
    len_0: usize,
    fake: usize,
) -> Vec<usize> {
    let mut suffix_array = Vec::with_capacity(text.len());

    let symbol = |position| symbol_or_sentinel(text, position);
    let rank = |index| symbol_or_sentinel(ranks_12, index);

    // the fake suffix is the smallest class 12 suffix and is not part of the text
    let (mut i_0, mut i_12) = (0, fake);

    while i_0 < sorted_0.len() && i_12 < sorted_12.len() {
        let position_0 = sorted_0[i_0];
        let index_12 = sorted_12[i_12];
        let position_12 = class_12_position(index_12, len_0);

        // both sides are reduced to a symbol prefix followed by the rank of a class 12 suffix.
        // SENTINEL ranks belong to suffixes past the end of the text.
        let class_12_is_smaller = if index_12 < len_0 {
            (symbol(position_12), rank(index_12 + len_0))
                <= (symbol(position_0), rank(position_0 / 3))
        } else {
            (
                symbol(position_12),
                symbol(position_12 + 1),
                rank(index_12 - len_0 + 1),
            ) <= (
                symbol(position_0),
                symbol(position_0 + 1),
                rank(position_0 / 3 + len_0),
            )
        };

        if class_12_is_smaller {
            suffix_array.push(position_12);
            i_12 += 1;
        } else {
            suffix_array.push(position_0);
            i_0 += 1;
        }
    }

    suffix_array.extend_from_slice(&sorted_0[i_0..]);
    suffix_array.extend(
        sorted_12[i_12..]
            .iter()
            .map(|&index| class_12_position(index, len_0)),
    );

    debug_assert_eq!(suffix_array.len(), text.len());
    debug_assert!(suffix_array.iter().all(|&p| symbol(p) != SENTINEL));

    suffix_array
}
