// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use nalgebra::{DMatrix, DVector};
use std::fmt;

/// The shape of the numbers a quantity carries: a single `f64`, a vector, or a matrix.
///
/// Everything dimensional lives on `Quantity`; this only knows how to walk the numbers.
pub trait Magnitude: Clone + fmt::Debug + PartialEq {
    /// (rows, columns); a scalar is (1, 1) and a vector of n is (n, 1).
    fn shape(&self) -> (usize, usize);

    fn map_values<F: FnMut(f64) -> f64>(&self, f: F) -> Self;

    /// Combine two magnitudes of identical shape, element by element.
    fn zip_values<F: FnMut(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self;

    fn any_value<F: FnMut(f64) -> bool>(&self, f: F) -> bool;

    /// The single value of a scalar magnitude; `None` for arrays.
    fn as_scalar(&self) -> Option<f64> {
        None
    }

    /// Write the numbers. The formatter's precision applies to each one; width and fill
    /// are ignored.
    fn fmt_values(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

impl Magnitude for f64 {
    fn shape(&self) -> (usize, usize) {
        (1, 1)
    }

    fn map_values<F: FnMut(f64) -> f64>(&self, mut f: F) -> Self {
        f(*self)
    }

    fn zip_values<F: FnMut(f64, f64) -> f64>(&self, other: &Self, mut f: F) -> Self {
        f(*self, *other)
    }

    fn any_value<F: FnMut(f64) -> bool>(&self, mut f: F) -> bool {
        f(*self)
    }

    fn as_scalar(&self) -> Option<f64> {
        Some(*self)
    }

    fn fmt_values(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_value(*self, f)
    }
}

impl Magnitude for DVector<f64> {
    fn shape(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    fn map_values<F: FnMut(f64) -> f64>(&self, f: F) -> Self {
        self.map(f)
    }

    fn zip_values<F: FnMut(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
        self.zip_map(other, f)
    }

    fn any_value<F: FnMut(f64) -> bool>(&self, mut f: F) -> bool {
        self.iter().any(|v| f(*v))
    }

    fn fmt_values(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_row(self.iter(), f)
    }
}

impl Magnitude for DMatrix<f64> {
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn map_values<F: FnMut(f64) -> f64>(&self, f: F) -> Self {
        self.map(f)
    }

    fn zip_values<F: FnMut(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
        self.zip_map(other, f)
    }

    fn any_value<F: FnMut(f64) -> bool>(&self, mut f: F) -> bool {
        self.iter().any(|v| f(*v))
    }

    fn fmt_values(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt_row(row.iter(), f)?;
        }
        write!(f, "]")
    }
}

/// Adapts any magnitude to `Display`.
pub(crate) struct Values<'a, M: Magnitude>(pub(crate) &'a M);

impl<M: Magnitude> fmt::Display for Values<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt_values(f)
    }
}

fn fmt_row<'a, I>(values: I, f: &mut fmt::Formatter) -> fmt::Result
where
    I: Iterator<Item = &'a f64>,
{
    write!(f, "[")?;
    for (i, v) in values.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_value(*v, f)?;
    }
    write!(f, "]")
}

pub(crate) fn fmt_value(v: f64, f: &mut fmt::Formatter) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, v),
        None => write!(f, "{}", v),
    }
}
