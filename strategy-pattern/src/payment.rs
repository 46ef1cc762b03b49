//! Checkout with interchangeable payment methods.

use std::{
    fmt,
    io::{self, Write},
};

use tracing::debug;

/// A way of settling an amount
pub trait PaymentStrategy: fmt::Debug {
    /// Payment method shown on the receipt
    fn method(&self) -> &'static str;

    /// Pay `amount` and print a receipt line on `out`
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    fn pay(&self, amount: i64, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paid {amount} using {}", self.method())
    }
}

/// Charge a credit card
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardStrategy;

impl PaymentStrategy for CreditCardStrategy {
    fn method(&self) -> &'static str {
        "Credit Card"
    }
}

/// Charge a `PayPal` wallet
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalStrategy;

impl PaymentStrategy for PayPalStrategy {
    fn method(&self) -> &'static str {
        "Paypal"
    }
}

/// Checkout holding the payment method currently selected
#[derive(Debug)]
pub struct PaymentContext {
    /// The method `pay` delegates to
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    /// Start with `strategy` selected
    #[must_use]
    pub fn new(strategy: impl PaymentStrategy + 'static) -> Self {
        Self { strategy: Box::new(strategy) }
    }

    /// Replace the payment method; the next `pay` uses it
    pub fn set_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        debug!(from = self.strategy.method(), to = strategy.method(), "payment strategy replaced");
        self.strategy = Box::new(strategy);
    }

    /// The payment method currently selected
    #[must_use]
    pub fn strategy(&self) -> &dyn PaymentStrategy {
        self.strategy.as_ref()
    }

    /// Pay `amount` with the current method
    ///
    /// Amounts are passed through as given.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    pub fn pay(&self, amount: i64, out: &mut dyn Write) -> io::Result<()> {
        self.strategy.pay(amount, out)
    }
}

/// 100 by card, then 200 by `PayPal`
///
/// # Errors
///
/// Returns the error reported by the sink if a write fails.
pub fn run_client(out: &mut dyn Write) -> io::Result<()> {
    let mut context = PaymentContext::new(CreditCardStrategy);
    context.pay(100, out)?;

    context.set_strategy(PayPalStrategy);
    context.pay(200, out)
}

#[cfg(test)]
mod tests {
    use super::{CreditCardStrategy, PayPalStrategy, PaymentContext, PaymentStrategy, run_client};
    use crate::test_support::capture;

    #[test]
    fn test_methods_print_amount_and_name() {
        assert_eq!(capture(|out| CreditCardStrategy.pay(42, out)), "Paid 42 using Credit Card\n");
        assert_eq!(capture(|out| PayPalStrategy.pay(7, out)), "Paid 7 using Paypal\n");
    }

    #[test]
    fn test_amount_is_not_validated() {
        let context = PaymentContext::new(CreditCardStrategy);

        assert_eq!(capture(|out| context.pay(-5, out)), "Paid -5 using Credit Card\n");
        assert_eq!(capture(|out| context.pay(0, out)), "Paid 0 using Credit Card\n");
    }

    #[test]
    fn test_swap_takes_effect_on_next_call() {
        let mut context = PaymentContext::new(CreditCardStrategy);
        assert_eq!(context.strategy().method(), "Credit Card");

        context.set_strategy(PayPalStrategy);

        assert_eq!(context.strategy().method(), "Paypal");
        assert_eq!(capture(|out| context.pay(300, out)), "Paid 300 using Paypal\n");
    }

    #[test]
    fn test_client_scenario() {
        assert_eq!(capture(run_client), "Paid 100 using Credit Card\nPaid 200 using Paypal\n");
    }
}
