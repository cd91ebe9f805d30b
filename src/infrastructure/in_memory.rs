use crate::domain::course::Course;
use crate::domain::ports::CourseCatalog;
use crate::error::{FeeError, Result};
use std::collections::HashMap;

/// An in-memory course catalog.
///
/// Keeps courses in the order they were added, with an index for lookups by id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Result<Self> {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert(course)?;
        }
        Ok(catalog)
    }

    /// Adds a course. Each id may appear only once.
    pub fn insert(&mut self, course: Course) -> Result<()> {
        if self.index.contains_key(&course.id) {
            return Err(FeeError::InvalidInput(format!(
                "duplicate course '{}' in catalog",
                course.id
            )));
        }
        self.index.insert(course.id.clone(), self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseCatalog for InMemoryCatalog {
    fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn get(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&i| &self.courses[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Price;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = InMemoryCatalog::new();
        catalog
            .insert(Course::new("Cooking", Price::new(dec!(1500)).unwrap()).unwrap())
            .unwrap();

        let found = catalog.get("Cooking");
        assert!(found.is_some(), "Course should be found");
        assert_eq!(found.unwrap().price.value(), dec!(1500));
        assert!(
            catalog.get("Welding").is_none(),
            "Unknown course should return None"
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let course = Course::new("Cooking", Price::ZERO).unwrap();
        let result = InMemoryCatalog::from_courses(vec![course.clone(), course]);
        assert!(matches!(result, Err(FeeError::InvalidInput(_))));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let catalog = InMemoryCatalog::from_courses(
            ["Sewing", "Cooking", "Childminding"]
                .into_iter()
                .map(|id| Course::new(id, Price::ZERO).unwrap()),
        )
        .unwrap();
        let ids: Vec<&str> = catalog.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Sewing", "Cooking", "Childminding"]);
        assert_eq!(catalog.len(), 3);
    }
}
