//! Route planning with interchangeable travel modes.

use std::{
    fmt,
    io::{self, Write},
};

use tracing::debug;

/// A way of getting from A to B
pub trait NavigationStrategy: fmt::Debug {
    /// Travel mode shown to the user, e.g. "Bike"
    fn mode(&self) -> &'static str;

    /// Plan the route and announce the travel mode on `out`
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    fn navigate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Navigating using {}", self.mode())
    }
}

/// Cycle there
#[derive(Debug, Clone, Copy, Default)]
pub struct BikeStrategy;

impl NavigationStrategy for BikeStrategy {
    fn mode(&self) -> &'static str {
        "Bike"
    }
}

/// Drive there
#[derive(Debug, Clone, Copy, Default)]
pub struct CarStrategy;

impl NavigationStrategy for CarStrategy {
    fn mode(&self) -> &'static str {
        "Car"
    }
}

/// Walk there
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkStrategy;

impl NavigationStrategy for WalkStrategy {
    fn mode(&self) -> &'static str {
        "Walk"
    }
}

/// Navigation app holding the travel mode currently selected
#[derive(Debug)]
pub struct NavigationContext {
    /// The mode `navigate` delegates to
    strategy: Box<dyn NavigationStrategy>,
}

impl NavigationContext {
    /// Start with `strategy` selected
    #[must_use]
    pub fn new(strategy: impl NavigationStrategy + 'static) -> Self {
        Self { strategy: Box::new(strategy) }
    }

    /// Replace the travel mode; the next `navigate` uses it
    pub fn set_strategy(&mut self, strategy: impl NavigationStrategy + 'static) {
        debug!(from = self.strategy.mode(), to = strategy.mode(), "navigation strategy replaced");
        self.strategy = Box::new(strategy);
    }

    /// The travel mode currently selected
    #[must_use]
    pub fn strategy(&self) -> &dyn NavigationStrategy {
        self.strategy.as_ref()
    }

    /// Navigate with the current travel mode
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    pub fn navigate(&self, out: &mut dyn Write) -> io::Result<()> {
        self.strategy.navigate(out)
    }
}

/// Bike, then car, then walking
///
/// # Errors
///
/// Returns the error reported by the sink if a write fails.
pub fn run_client(out: &mut dyn Write) -> io::Result<()> {
    let mut context = NavigationContext::new(BikeStrategy);
    context.navigate(out)?;

    context.set_strategy(CarStrategy);
    context.navigate(out)?;

    context.set_strategy(WalkStrategy);
    context.navigate(out)
}
