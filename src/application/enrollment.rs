use crate::domain::course::Selection;
use crate::domain::discount::{Quote, compute_quote};
use crate::domain::plan::PaymentPlan;
use crate::domain::ports::CourseCatalog;
use crate::domain::presentation::{format_rand, selection_lines};
use crate::domain::validation::EnrollmentForm;
use crate::error::{FeeError, Result};
use serde::Serialize;
use tracing::{debug, info};

/// What the presentation layer renders after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub lines: Vec<String>,
    pub quote: Quote,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confirmation {
    pub courses: Vec<String>,
    pub quote: Quote,
    pub message: String,
}

/// Entry point for pricing and enrollment.
///
/// `QuoteService` borrows a catalog and holds no other state: every call
/// rebuilds the selection from the chosen ids and prices it from scratch.
pub struct QuoteService<'a, C: CourseCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CourseCatalog + ?Sized> QuoteService<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Prices the chosen courses under the given plan.
    pub fn quote<S: AsRef<str>>(&self, ids: &[S], plan: PaymentPlan) -> Result<QuoteView> {
        let selection = Selection::resolve(self.catalog, ids)?;
        let quote = compute_quote(&selection, plan);
        debug!(
            courses = selection.len(),
            %plan,
            subtotal = %quote.subtotal,
            discount_percent = quote.discount_percent,
            total = %quote.total,
            "Computed quote"
        );
        Ok(QuoteView {
            lines: selection_lines(&selection),
            quote,
        })
    }

    /// Validates an enrollment and produces the confirmation shown to the student.
    ///
    /// Enrollment is only offered once at least one course is selected.
    pub fn enroll<S: AsRef<str>>(
        &self,
        form: &EnrollmentForm,
        ids: &[S],
        plan: PaymentPlan,
    ) -> Result<Confirmation> {
        let selection = Selection::resolve(self.catalog, ids)?;
        if selection.is_empty() {
            return Err(FeeError::InvalidInput("no courses selected".to_string()));
        }
        form.validate()?;

        let quote = compute_quote(&selection, plan);
        let courses: Vec<String> = selection.ids().map(str::to_string).collect();
        let message = format!(
            "Thank you {}!\nYou enrolled for: {}. Total payable: {}. We will contact you at {} / {}.",
            form.name,
            courses.join(", "),
            format_rand(quote.total),
            form.email,
            form.phone,
        );

        info!(
            name = %form.name,
            email = %form.email,
            phone = %form.phone,
            courses = ?courses,
            subtotal = %quote.subtotal,
            discount = %quote.discount_amount,
            total = %quote.total,
            "Enrollment submitted"
        );

        Ok(Confirmation {
            courses,
            quote,
            message,
        })
    }
}
