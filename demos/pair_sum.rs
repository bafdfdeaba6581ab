//! Reads `n target` and then `n` integers from standard input, and prints the
//! indices of two of the integers that add up to `target`.
//!
//! ```text
//! $ echo "4 9  2 7 11 15" | cargo run --example pair_sum
//! 0 1
//! ```

use std::fmt::Debug;
use std::str::FromStr;

use anyhow::{anyhow, Context as _, Result};
use copse::example::pair_sum_report;
use text_io::try_read;

/// Reads the next whitespace-separated token.
fn next<T>() -> Result<T>
where
    T: FromStr,
    T::Err: Debug,
{
    let value: std::result::Result<T, _> = try_read!();
    value.map_err(|e| anyhow!("malformed input: {:?}", e))
}

fn main() -> Result<()> {
    let n: usize = next().context("reading the count")?;
    let target: i64 = next().context("reading the target")?;
    let nums = (0..n)
        .map(|i| next().with_context(|| format!("reading number {}", i)))
        .collect::<Result<Vec<i32>>>()?;

    println!("{}", pair_sum_report(&nums, target));
    Ok(())
}
