use crate::domain::course::Selection;
use crate::domain::plan::PaymentPlan;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// The pricing breakdown for one selection and payment plan.
///
/// A quote carries no state of its own; it is recomputed from scratch on
/// every change to the selection or plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub subtotal: Decimal,
    pub discount_percent: u32,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// The most any selection can be discounted: the top quantity rate plus upfront.
pub const MAX_DISCOUNT_PERCENT: u32 = 25;

/// Percentage off for buying several courses at once.
pub fn quantity_discount_percent(course_count: usize) -> u32 {
    match course_count {
        0 | 1 => 0,
        2 => 5,
        3 => 10,
        _ => 15,
    }
}

pub fn payment_discount_percent(plan: PaymentPlan) -> u32 {
    match plan {
        PaymentPlan::Standard => 0,
        PaymentPlan::Upfront => 10,
    }
}

/// Prices a selection. Discounts stack additively and are not capped.
///
/// `Selection` guarantees its subtotal times [`MAX_DISCOUNT_PERCENT`] fits in a
/// `Decimal`, so none of the arithmetic below can overflow.
pub fn compute_quote(selection: &Selection, plan: PaymentPlan) -> Quote {
    let subtotal: Decimal = selection
        .courses()
        .iter()
        .map(|course| course.price.value())
        .sum();

    let discount_percent =
        quantity_discount_percent(selection.len()) + payment_discount_percent(plan);
    let discount_amount = subtotal * Decimal::from(discount_percent) / dec!(100);

    Quote {
        subtotal,
        discount_percent,
        discount_amount,
        total: subtotal - discount_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::{Course, Price};

    fn selection(prices: &[Decimal]) -> Selection {
        let courses = prices
            .iter()
            .enumerate()
            .map(|(i, price)| Course::new(format!("C{i}"), Price::new(*price).unwrap()).unwrap())
            .collect();
        Selection::new(courses).unwrap()
    }

    #[test]
    fn test_quantity_breakpoints() {
        let expected = [(0, 0), (1, 0), (2, 5), (3, 10), (4, 15), (10, 15)];
        for (count, percent) in expected {
            assert_eq!(quantity_discount_percent(count), percent, "count {count}");
        }
    }

    #[test]
    fn test_max_discount_matches_rules() {
        assert_eq!(
            quantity_discount_percent(usize::MAX) + payment_discount_percent(PaymentPlan::Upfront),
            MAX_DISCOUNT_PERCENT
        );
    }

    #[test]
    fn test_upfront_adds_ten_points() {
        for count in 0..6 {
            let prices = vec![dec!(100); count];
            let standard = compute_quote(&selection(&prices), PaymentPlan::Standard);
            let upfront = compute_quote(&selection(&prices), PaymentPlan::Upfront);
            assert_eq!(upfront.discount_percent, standard.discount_percent + 10);
        }
    }

    #[test]
    fn test_two_courses_standard() {
        let quote = compute_quote(&selection(&[dec!(100), dec!(200)]), PaymentPlan::Standard);
        assert_eq!(quote.subtotal, dec!(300));
        assert_eq!(quote.discount_percent, 5);
        assert_eq!(quote.discount_amount, dec!(15));
        assert_eq!(quote.total, dec!(285));
    }

    #[test]
    fn test_three_courses_upfront() {
        let quote = compute_quote(
            &selection(&[dec!(100), dec!(200), dec!(300)]),
            PaymentPlan::Upfront,
        );
        assert_eq!(quote.subtotal, dec!(600));
        assert_eq!(quote.discount_percent, 20);
        assert_eq!(quote.discount_amount, dec!(120));
        assert_eq!(quote.total, dec!(480));
    }

    #[test]
    fn test_four_courses_upfront_stacks_to_twenty_five() {
        let quote = compute_quote(&selection(&[dec!(1000); 4]), PaymentPlan::Upfront);
        assert_eq!(quote.discount_percent, 25);
        assert_eq!(quote.discount_amount, dec!(1000));
        assert_eq!(quote.total, dec!(3000));
    }

    #[test]
    fn test_empty_selection() {
        for plan in [PaymentPlan::Standard, PaymentPlan::Upfront] {
            let quote = compute_quote(&Selection::default(), plan);
            assert_eq!(quote.subtotal, Decimal::ZERO);
            assert_eq!(quote.discount_amount, Decimal::ZERO);
            assert_eq!(quote.total, Decimal::ZERO);
        }
    }

    #[test]
    fn test_fractional_prices_stay_exact() {
        let quote = compute_quote(&selection(&[dec!(0.10), dec!(0.20)]), PaymentPlan::Standard);
        assert_eq!(quote.subtotal, dec!(0.30));
        assert_eq!(quote.discount_amount, dec!(0.015));
        assert_eq!(quote.total, dec!(0.285));
        assert_eq!(quote.total, quote.subtotal - quote.discount_amount);
    }

    #[test]
    fn test_largest_priceable_selection() {
        // Just inside the range a selection accepts
        let quote = compute_quote(
            &selection(&[dec!(1000000000000000000000000000); 3]),
            PaymentPlan::Upfront,
        );
        assert_eq!(quote.discount_percent, 20);
        assert_eq!(quote.total, quote.subtotal - quote.discount_amount);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let chosen = selection(&[dec!(1500), dec!(750.25), dec!(99.99)]);
        assert_eq!(
            compute_quote(&chosen, PaymentPlan::Upfront),
            compute_quote(&chosen, PaymentPlan::Upfront)
        );
    }
}
