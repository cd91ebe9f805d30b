//! Application layer orchestrating the pricing and enrollment use cases.
//!
//! `QuoteService` resolves the chosen course ids against a catalog, hands the
//! resulting selection to the discount rules, and shapes the output for display.

pub mod enrollment;
