//! Alphabets that a [`PrefixTree`](super::PrefixTree) can be built over.

/// A small, fixed set of symbols that are mapped to the indices `0..SIZE`.
///
/// Every node of the prefix tree keeps one child slot per symbol, so the alphabet
/// should be small.
/// The order of the indices should agree with the order of the symbols, since
/// listing functions return words in index order.
pub trait Alphabet {
    /// The number of symbols
    const SIZE: usize;

    /// Returns the index of `symbol`, or `None` if it isn't part of the alphabet.
    fn index(symbol: char) -> Option<usize>;

    /// Returns the symbol at `index`. `index` must be smaller than `SIZE`.
    fn symbol(index: usize) -> char;
}

/// Defines an alphabet made of a contiguous range of ASCII characters.
macro_rules! ascii_range_alphabet {
    ($(#[$meta:meta])* $name:ident, $first:literal ..= $last:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
        pub struct $name;

        impl Alphabet for $name {
            const SIZE: usize = ($last as usize) - ($first as usize) + 1;

            fn index(symbol: char) -> Option<usize> {
                if ($first..=$last).contains(&symbol) {
                    Some(symbol as usize - $first as usize)
                } else {
                    None
                }
            }

            fn symbol(index: usize) -> char {
                assert!(index < Self::SIZE, "symbol index {index} out of bounds");
                (($first as u8) + index as u8) as char
            }
        }
    };
}

ascii_range_alphabet!(
    /// The lowercase ASCII letters `'a'..='z'`.
    Lowercase, 'a'..='z'
);

ascii_range_alphabet!(
    /// The ASCII digits `'0'..='9'`.
    Digits, '0'..='9'
);
