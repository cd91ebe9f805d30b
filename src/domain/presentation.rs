use crate::domain::course::Selection;
use rust_decimal::{Decimal, RoundingStrategy};

pub const EMPTY_SELECTION: &str = "No courses selected";

/// Formats an amount in Rand with two decimal places.
pub fn format_rand(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("R{:.2}", rounded)
}

/// One display line per selected course.
pub fn selection_lines(selection: &Selection) -> Vec<String> {
    if selection.is_empty() {
        return vec![EMPTY_SELECTION.to_string()];
    }
    selection
        .courses()
        .iter()
        .map(|course| format!("{}  {}", course.id, format_rand(course.price.value())))
        .collect()
}
