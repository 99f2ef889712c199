//! Read a matrix written by the write_matrix example and inspect it

use ccs::{CcsMatrix, CodecConfig, DenseVectorFactory};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

fn main() -> ccs::Result<()> {
    let path = "example_matrix.ccs";
    println!("Reading {path}...");

    let start = Instant::now();
    let mut reader = BufReader::new(File::open(path)?);
    let matrix: CcsMatrix = CcsMatrix::read_from_with(&mut reader, &CodecConfig::strict())?;
    println!("Loaded in {:?}", start.elapsed());
    println!(
        "Dimensions: {} x {}, {} entries",
        matrix.rows(),
        matrix.columns(),
        matrix.cardinality()
    );

    for column in [0, 10, 100] {
        let entries = matrix.column(column)?;
        println!("Column {column}: {:?}", entries.iter().collect::<Vec<_>>());
    }

    let row = matrix.row_with(10, &DenseVectorFactory)?;
    let stored: Vec<_> = row
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, &value)| value != 0)
        .collect();
    println!("Row 10 non-zeros: {stored:?}");

    let corner = matrix.select(&[0, 1, 2], &[0, 1, 2])?;
    println!("Top-left corner: {corner:?}");
    Ok(())
}
