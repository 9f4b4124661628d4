use crate::domain::*;
use crate::harness::HarnessError;
use crate::util::*;
use std::io::prelude::*;

/// One line per grid row, values with three decimals.
pub fn write_csv<F: GridFloat, P: AsRef<std::path::Path>>(
    grid: &Grid<F>,
    path: &P,
) -> Result<(), HarnessError> {
    profiling::scope!("write_csv");
    let path = path.as_ref();
    tracing::info!("Writing: {:?}", path);
    let file =
        std::fs::File::create(path).map_err(|e| HarnessError::io(path, e))?;
    let mut output = std::io::BufWriter::new(file);
    write_rows(grid, &mut output)
        .and_then(|_| output.flush())
        .map_err(|e| HarnessError::io(path, e))
}

fn write_rows<F: GridFloat, W: Write>(
    grid: &Grid<F>,
    output: &mut W,
) -> std::io::Result<()> {
    for r in 0..grid.size() {
        let row = grid.row(r);
        let mut values = row.iter();
        if let Some(first) = values.next() {
            write!(output, "{first:.3}")?;
        }
        for v in values {
            write!(output, ",{v:.3}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}
