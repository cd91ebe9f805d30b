use course_fees::domain::course::{Course, Price, Selection};
use course_fees::domain::discount::compute_quote;
use course_fees::domain::plan::PaymentPlan;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn random_courses(rng: &mut impl Rng, count: usize) -> Vec<Course> {
    (0..count)
        .map(|i| {
            // Whole cents up to R20 000
            let price = Decimal::new(rng.gen_range(0..2_000_000), 2);
            Course::new(format!("Course {i}"), Price::new(price).unwrap()).unwrap()
        })
        .collect()
}

#[test]
fn test_quote_invariants_hold_for_random_selections() {
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let count = rng.gen_range(0..8);
        let courses = random_courses(&mut rng, count);
        let expected_subtotal: Decimal = courses.iter().map(|c| c.price.value()).sum();
        let plan = if rng.gen_bool(0.5) {
            PaymentPlan::Upfront
        } else {
            PaymentPlan::Standard
        };

        let quote = compute_quote(&Selection::new(courses).unwrap(), plan);

        assert_eq!(quote.subtotal, expected_subtotal);
        assert_eq!(quote.total, quote.subtotal - quote.discount_amount);
        assert_eq!(
            quote.discount_amount,
            quote.subtotal * Decimal::from(quote.discount_percent) / dec!(100)
        );
        assert!(quote.total >= Decimal::ZERO);
        assert!(quote.discount_percent <= 25);
    }
}

#[test]
fn test_subtotal_is_order_independent() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let count = rng.gen_range(1..8);
        let mut courses = random_courses(&mut rng, count);
        let before = compute_quote(&Selection::new(courses.clone()).unwrap(), PaymentPlan::Upfront);

        courses.shuffle(&mut rng);
        let after = compute_quote(&Selection::new(courses).unwrap(), PaymentPlan::Upfront);

        assert_eq!(before, after);
    }
}
