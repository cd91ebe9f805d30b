//! CSV adapters: the course catalog comes in, quotes go out.

pub mod course_reader;
pub mod quote_writer;
