//! Miscellaneous project utilities.

use std::fmt::{self, Display, Write};

/// Format `size * size` cells into a grid with 0-based column and row indices.
/// `cells` must yield exactly `size * size` items in row-major order.
pub fn format_grid<W, I, T>(size: usize, mut cells: I, f: &mut W) -> fmt::Result
where
    W: Write,
    I: Iterator<Item = T>,
    T: Display,
{
    write!(f, " ")?;
    for col in 0..size {
        write!(f, " {}", col)?;
    }

    for row in 0..size {
        write!(f, "\n{}", row)?;
        for _ in 0..size {
            write!(f, " {}", cells.next().ok_or(fmt::Error)?)?;
        }
    }

    match cells.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
