use crate::domain::discount::MAX_DISCOUNT_PERCENT;
use crate::domain::ports::CourseCatalog;
use crate::error::{FeeError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A non-negative course price in Rand.
///
/// Wraps `rust_decimal::Decimal` so that fee arithmetic stays exact and a
/// negative price can never reach the discount rules. Deserializes from the
/// textual form so no digits pass through a float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(FeeError::InvalidInput(format!(
                "price must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = FeeError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Price {
    type Error = FeeError;

    fn try_from(value: String) -> Result<Self> {
        let parsed = Decimal::from_str_exact(value.trim()).map_err(|e| {
            FeeError::InvalidInput(format!("invalid price '{value}': {e}"))
        })?;
        Self::new(parsed)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// A purchasable training offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub price: Price,
}

impl Course {
    pub fn new(id: impl Into<String>, price: Price) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(FeeError::InvalidInput(
                "course id must not be empty".to_string(),
            ));
        }
        Ok(Self { id, price })
    }
}

/// The courses currently chosen, in catalog declaration order.
///
/// A selection is only built when its subtotal, and the largest discount on
/// it, fit in a `Decimal`. Pricing it can therefore never overflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    courses: Vec<Course>,
}

impl Selection {
    /// Builds a selection from already-resolved courses, rejecting repeated ids.
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.as_str()) {
                return Err(FeeError::InvalidInput(format!(
                    "course '{}' selected more than once",
                    course.id
                )));
            }
        }
        ensure_priceable(&courses)?;
        Ok(Self { courses })
    }

    /// Resolves chosen ids against a catalog.
    ///
    /// The result follows the catalog's order regardless of the order of `ids`,
    /// and an id chosen twice is selected once. Unknown ids are rejected.
    pub fn resolve<C, S>(catalog: &C, ids: &[S]) -> Result<Self>
    where
        C: CourseCatalog + ?Sized,
        S: AsRef<str>,
    {
        let mut chosen = HashSet::new();
        for id in ids.iter().map(|id| id.as_ref().trim()) {
            if catalog.get(id).is_none() {
                return Err(FeeError::InvalidInput(format!("unknown course '{id}'")));
            }
            chosen.insert(id);
        }

        let courses: Vec<Course> = catalog
            .courses()
            .iter()
            .filter(|course| chosen.contains(course.id.as_str()))
            .cloned()
            .collect();
        ensure_priceable(&courses)?;
        Ok(Self { courses })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|course| course.id.as_str())
    }
}

fn ensure_priceable(courses: &[Course]) -> Result<()> {
    let out_of_range = || FeeError::InvalidInput("fee total out of range".to_string());
    let subtotal = courses.iter().try_fold(Decimal::ZERO, |sum, course| {
        sum.checked_add(course.price.value())
    });
    subtotal
        .and_then(|subtotal| subtotal.checked_mul(Decimal::from(MAX_DISCOUNT_PERCENT)))
        .map(|_| ())
        .ok_or_else(out_of_range)
}
