use std::io::Error;
use std::path::Path;

/// Writes a catalog CSV with one course per price, named `Course 1`, `Course 2`, ...
pub fn generate_catalog(path: &Path, prices: &[&str]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["id", "price"])?;

    for (i, price) in prices.iter().enumerate() {
        wtr.write_record([format!("Course {}", i + 1).as_str(), price])?;
    }

    wtr.flush()?;
    Ok(())
}
