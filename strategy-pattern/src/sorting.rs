//! A sorting driver with interchangeable algorithms.
//!
//! The algorithms are placeholders: each announces itself and leaves the
//! slice as it found it.

use std::{
    fmt,
    io::{self, Write},
};

use tracing::debug;

/// An algorithm that orders a slice of integers in place
pub trait SortingStrategy: fmt::Debug {
    /// Algorithm name without the "Sort" suffix, e.g. "Bubble"
    fn algorithm(&self) -> &'static str;

    /// Announce the algorithm on `out`; the slice is not reordered
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    fn sort(&self, _array: &mut [i32], out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sorting using {} Sort", self.algorithm())
    }
}

/// Bubble sort placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSortStrategy;

impl SortingStrategy for BubbleSortStrategy {
    fn algorithm(&self) -> &'static str {
        "Bubble"
    }
}

/// Merge sort placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSortStrategy;

impl SortingStrategy for MergeSortStrategy {
    fn algorithm(&self) -> &'static str {
        "Merge"
    }
}

/// Quick sort placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSortStrategy;

impl SortingStrategy for QuickSortStrategy {
    fn algorithm(&self) -> &'static str {
        "Quick"
    }
}

/// Sorting driver holding the algorithm currently selected
#[derive(Debug)]
pub struct SortingContext {
    /// The algorithm `perform_sort` delegates to
    strategy: Box<dyn SortingStrategy>,
}

impl SortingContext {
    /// Start with `strategy` selected
    #[must_use]
    pub fn new(strategy: impl SortingStrategy + 'static) -> Self {
        Self { strategy: Box::new(strategy) }
    }

    /// Replace the algorithm; the next `perform_sort` uses it
    pub fn set_strategy(&mut self, strategy: impl SortingStrategy + 'static) {
        debug!(
            from = self.strategy.algorithm(),
            to = strategy.algorithm(),
            "sorting strategy replaced"
        );
        self.strategy = Box::new(strategy);
    }

    /// The algorithm currently selected
    #[must_use]
    pub fn strategy(&self) -> &dyn SortingStrategy {
        self.strategy.as_ref()
    }

    /// Hand `array` to the current algorithm
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    pub fn perform_sort(&self, array: &mut [i32], out: &mut dyn Write) -> io::Result<()> {
        debug!(algorithm = self.strategy.algorithm(), len = array.len(), "sorting");
        self.strategy.sort(array, out)
    }
}

/// Bubble, merge and quick sort over three small arrays
///
/// # Errors
///
/// Returns the error reported by the sink if a write fails.
pub fn run_client(out: &mut dyn Write) -> io::Result<()> {
    let mut context = SortingContext::new(BubbleSortStrategy);
    let mut first = [5, 2, 9, 1, 5];
    context.perform_sort(&mut first, out)?;

    context.set_strategy(MergeSortStrategy);
    let mut second = [8, 3, 7, 4, 2];
    context.perform_sort(&mut second, out)?;

    context.set_strategy(QuickSortStrategy);
    let mut third = [6, 1, 3, 9, 5];
    context.perform_sort(&mut third, out)
}

#[cfg(test)]
mod tests {
    use super::{
        BubbleSortStrategy, MergeSortStrategy, QuickSortStrategy, SortingContext, SortingStrategy,
        run_client,
    };
    use crate::test_support::capture;

    #[test]
    fn test_each_algorithm_prints_its_line() {
        let mut data = [3, 1, 2];

        assert_eq!(
            capture(|out| BubbleSortStrategy.sort(&mut data, out)),
            "Sorting using Bubble Sort\n"
        );
        assert_eq!(
            capture(|out| MergeSortStrategy.sort(&mut data, out)),
            "Sorting using Merge Sort\n"
        );
        assert_eq!(
            capture(|out| QuickSortStrategy.sort(&mut data, out)),
            "Sorting using Quick Sort\n"
        );
    }

    #[test]
    fn test_placeholder_leaves_input_untouched() {
        let context = SortingContext::new(QuickSortStrategy);
        let mut data = [5, 2, 9, 1, 5];

        let output = capture(|out| context.perform_sort(&mut data, out));

        assert_eq!(output, "Sorting using Quick Sort\n");
        assert_eq!(data, [5, 2, 9, 1, 5]);
    }

    #[test]
    fn test_empty_input_still_announces() {
        let context = SortingContext::new(MergeSortStrategy);

        assert_eq!(capture(|out| context.perform_sort(&mut [], out)), "Sorting using Merge Sort\n");
    }

    #[test]
    fn test_swap_takes_effect_on_next_call() {
        let mut context = SortingContext::new(BubbleSortStrategy);
        context.set_strategy(MergeSortStrategy);

        assert_eq!(context.strategy().algorithm(), "Merge");
        assert_eq!(
            capture(|out| context.perform_sort(&mut [1], out)),
            "Sorting using Merge Sort\n"
        );
    }

    #[test]
    fn test_client_scenario() {
        assert_eq!(
            capture(run_client),
            "Sorting using Bubble Sort\nSorting using Merge Sort\nSorting using Quick Sort\n"
        );
    }
}
