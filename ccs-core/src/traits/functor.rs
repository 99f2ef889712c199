//! Callback abstractions for traversal and bulk update

/// Visitor invoked with `(row, column, value)` for each visited cell
pub trait MatrixProcedure {
    fn apply(&mut self, row: usize, column: usize, value: u8);
}

impl<P> MatrixProcedure for P
where
    P: FnMut(usize, usize, u8),
{
    #[inline]
    fn apply(&mut self, row: usize, column: usize, value: u8) {
        self(row, column, value)
    }
}

/// Updater mapping `(row, column, value)` to the replacement value
///
/// Returning the field zero removes the entry.
pub trait MatrixFunction {
    fn evaluate(&mut self, row: usize, column: usize, value: u8) -> u8;
}

impl<G> MatrixFunction for G
where
    G: FnMut(usize, usize, u8) -> u8,
{
    #[inline]
    fn evaluate(&mut self, row: usize, column: usize, value: u8) -> u8 {
        self(row, column, value)
    }
}
