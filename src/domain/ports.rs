use super::course::Course;

/// Source of the courses a student can choose from.
pub trait CourseCatalog {
    /// All courses, in declaration order.
    fn courses(&self) -> &[Course];
    fn get(&self, id: &str) -> Option<&Course>;
}
