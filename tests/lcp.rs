use skewsa::{
    AlphabetSize, SkewError, SuffixArrayConstruction, SuffixArrayWithText, build_lcp_array,
    build_suffix_array, typestate::OwnedBuffer,
};

mod common;

use common::*;

#[test]
fn banana() {
    let (text, max_symbol) = setup_banana_example();

    let suffix_array = build_suffix_array(text, max_symbol).unwrap();
    let lcp = build_lcp_array(text, &suffix_array).unwrap();

    assert_eq!(lcp, [1, 3, 0, 0, 2]);
}

#[test]
fn single_symbol() {
    assert_eq!(build_lcp_array(&[3u8], &[0]), Ok(vec![]));
}

#[test]
fn repeated_symbol() {
    let text = [5u8, 5, 5, 5];

    let suffix_array = build_suffix_array(&text, 5).unwrap();

    assert_eq!(build_lcp_array(&text, &suffix_array), Ok(vec![1, 2, 3]));
}

#[test]
fn input_errors() {
    assert_eq!(build_lcp_array::<u8>(&[], &[]), Err(SkewError::EmptyInput));

    assert_eq!(
        build_lcp_array(&[1u8, 2, 3], &[0, 1]),
        Err(SkewError::SizeMismatch {
            text_len: 3,
            suffix_array_len: 2
        })
    );
}

#[test]
fn empty_text_with_builder() {
    let res = SuffixArrayConstruction::for_text(&[] as &[u8])
        .in_owned_buffer32()
        .run()
        .unwrap();

    assert_eq!(res.lcp_construction().run().err(), Some(SkewError::EmptyInput));
}

#[test]
fn size_mismatch_from_parts() {
    let text = [1u8, 2, 1];

    let res = unsafe {
        SuffixArrayWithText::<u8, u32, OwnedBuffer>::from_parts(vec![2, 0], &text, 2)
    };

    assert_eq!(
        res.lcp_construction().run().err(),
        Some(SkewError::SizeMismatch {
            text_len: 3,
            suffix_array_len: 2
        })
    );
}

#[test]
fn builder_matches_free_functions() {
    let text = lowercase(b"abracadabra");

    let expected_suffix_array = build_suffix_array(&text, 26).unwrap();
    let expected_lcp = build_lcp_array(&text, &expected_suffix_array).unwrap();

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer64()
        .with_alphabet_size(AlphabetSize::new(26))
        .run()
        .unwrap()
        .lcp_construction()
        .run()
        .unwrap();

    assert!(res.suffix_array().iter().map(|&x| x as usize).eq(expected_suffix_array));
    assert!(res.lcp().iter().map(|&x| x as usize).eq(expected_lcp));
    assert_eq!(res.lcp(), [1, 4, 1, 1, 0, 3, 0, 0, 0, 2]);
}

#[test]
fn borrowed_buffers() {
    let text = lowercase(b"mississippi");
    let mut suffix_array_buffer = vec![0u32; text.len()];
    let mut lcp_buffer = vec![u32::MAX; text.len() + 3];

    let res = SuffixArrayConstruction::for_text(&text)
        .in_borrowed_buffer(&mut suffix_array_buffer)
        .run()
        .unwrap()
        .lcp_construction()
        .in_borrowed_buffer(&mut lcp_buffer)
        .run()
        .unwrap();

    assert_eq!(res.lcp(), [1, 1, 4, 0, 0, 1, 0, 2, 1, 3]);
    assert_eq!(res.distinct_substrings(), 53);

    let (suffix_array, lcp, returned_text) = res.into_parts();
    assert_eq!(suffix_array.len(), text.len());
    assert_eq!(lcp.len(), text.len() - 1);
    assert_eq!(returned_text, text);

    assert!(lcp_buffer[text.len() - 1..].iter().all(|&x| x == u32::MAX));
}

#[test]
#[should_panic(expected = "lcp_buffer must be at least as large as the text minus one")]
fn borrowed_lcp_buffer_too_small() {
    let text = [1u8, 2, 1, 2];
    let mut lcp_buffer = [0u32; 2];

    let _ = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .run()
        .unwrap()
        .lcp_construction()
        .in_borrowed_buffer(&mut lcp_buffer)
        .run();
}

#[test]
fn random_texts_against_naive_lcp() {
    for max_symbol in [1, 2, 4, 26] {
        for text in random_texts(u64::from(max_symbol) + 100, 200, 80, max_symbol) {
            if text.is_empty() {
                continue;
            }

            let suffix_array = build_suffix_array(&text, max_symbol.into()).unwrap();
            let lcp = build_lcp_array(&text, &suffix_array).unwrap();

            assert!(is_lcp_array(&text, &suffix_array, &lcp), "{text:?}");
        }
    }
}

#[test]
fn distinct_substrings_against_brute_force() {
    for text in random_texts(5, 100, 40, 3) {
        if text.is_empty() {
            continue;
        }

        let res = SuffixArrayConstruction::for_text(&text)
            .in_owned_buffer32()
            .run()
            .unwrap()
            .lcp_construction()
            .run()
            .unwrap();

        assert_eq!(
            res.distinct_substrings(),
            brute_force_distinct_substrings(&text),
            "{text:?}"
        );
    }
}

fn lowercase(text: &[u8]) -> Vec<u8> {
    skewsa::lowercase_symbols(text)
}
