use crate::domain::discount::Quote;
use crate::error::Result;
use std::io::Write;

/// Writes quotes as CSV with a `subtotal,discount_percent,discount_amount,total` header.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quote(&mut self, quote: &Quote) -> Result<()> {
        self.writer.serialize(quote)?;
        self.writer.flush()?;
        Ok(())
    }
}
