//! Three small applications of the strategy pattern.
//!
//! Each module pairs a strategy trait with a context that holds the current
//! strategy and forwards its single operation to it. The strategy can be
//! replaced at any time; the next call goes to the new one.
//!
//! - [`navigation`]: travel by bike, car or on foot
//! - [`payment`]: pay by credit card or `PayPal`
//! - [`sorting`]: bubble, merge and quick sort placeholders

pub mod navigation;
pub mod payment;
pub mod sorting;

pub use navigation::{
    BikeStrategy, CarStrategy, NavigationContext, NavigationStrategy, WalkStrategy,
};
pub use payment::{CreditCardStrategy, PayPalStrategy, PaymentContext, PaymentStrategy};
pub use sorting::{
    BubbleSortStrategy, MergeSortStrategy, QuickSortStrategy, SortingContext, SortingStrategy,
};
