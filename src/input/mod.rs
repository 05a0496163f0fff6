//! Sources of fuzz values.
mod wordlist;


pub use wordlist::WordlistInput;

/// Yields fuzz values in order.
pub trait InputProvider: Send {
    /// The next value, or `None` once exhausted.
    fn next(&mut self) -> Option<Vec<u8>>;

    /// Number of values the provider yields in total.
    fn total(&self) -> usize;
}
