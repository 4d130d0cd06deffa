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
use crate::Dimension;
use thiserror::Error;

/// Failures raised by quantity arithmetic, conversion and formatting.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("inconsistent dimensions [{left}] and [{right}]")]
    DimensionMismatch { left: Dimension, right: Dimension },

    #[error("division by a zero magnitude")]
    DivideByZero,

    #[error("incompatible shapes {left:?} and {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

impl QuantityError {
    pub(crate) fn mismatch(left: Dimension, right: Dimension) -> Self {
        Self::DimensionMismatch { left, right }
    }
}

pub type Result<T, E = QuantityError> = std::result::Result<T, E>;
