use skewsa::{AlphabetSize, SuffixArrayConstruction, compact_alphabet};

// small for demonstration purposes, but it should work with large values (up to the realm of millions)
const TEXT_LEN: usize = 10;

fn create_random_text() -> Vec<u64> {
    std::iter::repeat_with(rand::random::<u64>)
        .filter(|&x| x > 0)
        .take(TEXT_LEN)
        .collect()
}

fn main() {
    // a text of random, positive u64 values (0 is reserved as the sentinel)
    let initial_text = create_random_text();
    println!("Initial text: {initial_text:?}");

    // Constructing a suffix array of the initial text like this is a very bad idea, because the radix sort
    // passes of the skew algorithm need one counter for every possible symbol. For a random text, the
    // largest symbol might be as large as u64::MAX.

    // To solve this issue, we create a new "dense" text. Every symbol is replaced by its rank among the
    // distinct symbols of the text, preserving their relative order. For example, the maximum of the
    // original text becomes the number of distinct symbols.
    let (dense_text, max_symbol) = compact_alphabet(&initial_text);
    println!("Dense text: {dense_text:?}\nMaximum symbol: {max_symbol}");

    let res = SuffixArrayConstruction::for_text(&dense_text)
        .in_owned_buffer64()
        .with_alphabet_size(AlphabetSize::new(max_symbol))
        .run()
        .unwrap();

    // The resulting suffix array is valid for dense_text AND initial_text!
    println!("Suffix array: {:?}", res.suffix_array());
}
