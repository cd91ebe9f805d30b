use crate::domain::course::Course;
use crate::error::{FeeError, Result};
use std::io::Read;

/// Reads a course catalog from a CSV source with an `id,price` header.
///
/// Fields are trimmed and prices are validated while deserializing, so a
/// negative price surfaces as an error for that row only.
pub struct CourseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CourseReader<R> {
    /// Creates a new `CourseReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes courses.
    pub fn courses(self) -> impl Iterator<Item = Result<Course>> {
        self.reader.into_deserialize().map(|result| {
            let course: Course = result.map_err(FeeError::from)?;
            Course::new(course.id, course.price)
        })
    }
}
