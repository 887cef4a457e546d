use skewsa::{AlphabetSize, LOWERCASE_ALPHABET_SIZE, SuffixArrayConstruction, lowercase_symbols};

fn main() {
    let text = lowercase_symbols(b"barnabasbabblesaboutbananas");

    // To obtain the longest common prefix array using this library, we first need the suffix array.
    // You can read more about these data structures and conventions of this library in the API documentation.

    // first, we create the suffix array
    let suffix_array = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .with_alphabet_size(AlphabetSize::new(LOWERCASE_ALPHABET_SIZE))
        .run()
        .unwrap();

    // then we can climb up to the lcp array
    let suffix_array_and_lcp = suffix_array.lcp_construction().run().unwrap();

    println!(
        "Distinct substrings: {}",
        suffix_array_and_lcp.distinct_substrings()
    );

    // we can destructure the returned object and drop the reference to the text
    let (suffix_array, lcp, _) = suffix_array_and_lcp.into_parts();

    println!("Suffix array: {suffix_array:?}");
    println!("Longest common prefix array: {lcp:?}");
}
