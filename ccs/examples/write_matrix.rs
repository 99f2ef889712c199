//! Build a sparse octet matrix and write it to disk

use ccs::CcsMatrix;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

fn main() -> ccs::Result<()> {
    let rows = 2_000;
    let columns = 1_500;
    println!("Building a {rows} x {columns} matrix...");

    // fill a band around the diagonal column by column so no shifting happens
    let start = Instant::now();
    let mut matrix: CcsMatrix = CcsMatrix::new(rows, columns)?;
    for column in 0..columns {
        for row in column.saturating_sub(2)..(column + 3).min(rows) {
            let value = ((row * 31 + column * 17) % 255 + 1) as u8;
            matrix.set(row, column, value)?;
        }
    }
    println!(
        "Stored {} entries (capacity {}) in {:?}",
        matrix.cardinality(),
        matrix.capacity(),
        start.elapsed()
    );
    println!("Largest symbol: {}", matrix.max());

    let start = Instant::now();
    let mut writer = BufWriter::new(File::create("example_matrix.ccs")?);
    matrix.write_to(&mut writer)?;
    println!("Matrix written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}
