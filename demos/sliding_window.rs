//! Reads a window width and a lowercase string from stdin and prints the number of distinct substrings
//! of every cyclic window of the string, separated by spaces.
//!
//! ```text
//! $ echo "3 aab" | cargo run --example sliding_window
//! 5 5 5
//! ```

use std::io::{self, Read, Write};

use anyhow::{Context, bail};
use skewsa::{
    AlphabetSize, LOWERCASE_ALPHABET_SIZE, lowercase_symbols,
    window::distinct_substrings_per_window,
};

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut tokens = input.split_whitespace();

    let Some(width) = tokens.next() else {
        bail!("expected a window width and a string");
    };
    let width: usize = width
        .parse()
        .with_context(|| format!("invalid window width {width:?}"))?;
    let text = tokens.next().unwrap_or_default();

    let counts = distinct_substrings_per_window(
        &lowercase_symbols(text.as_bytes()),
        width,
        AlphabetSize::new(LOWERCASE_ALPHABET_SIZE),
    )?;

    let mut stdout = io::stdout().lock();
    for count in counts {
        write!(stdout, "{count} ")?;
    }
    writeln!(stdout)?;

    Ok(())
}
