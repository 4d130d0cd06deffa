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

//! Quantities with SI dimensions.
//!
//! A `Quantity` stores its magnitude in SI base units next to a `Dimension`, the exponents
//! over the seven base dimensions. Products and quotients combine dimensions freely; sums,
//! differences and comparisons require equal dimensions and report a `QuantityError`
//! otherwise. Magnitudes may be single values or nalgebra vectors and matrices.
//!
//! ```
//! use absolute_unit::{QuantityArray1, CELSIUS, KELVIN, LITER, MEGA, MOL, PASCAL};
//!
//! let t = 300. * KELVIN;
//! let v = 5. * LITER;
//! let n = 10. * MOL;
//! let per_volume = (n * t / v).unwrap();
//! assert_eq!(per_volume.format(None).unwrap(), "600000 m^-3 K mol");
//!
//! let temperatures = vec![25., 45.] * CELSIUS;
//! assert_eq!(temperatures.format(Some("°C")).unwrap(), "[25, 45] °C");
//! assert_eq!((2. * MEGA * PASCAL).format(Some("MPa")).unwrap(), "2 MPa");
//! # let _ = QuantityArray1::linspace(n, 2. * n, 3).unwrap();
//! ```
pub(crate) mod array;
pub(crate) mod dimension;
pub(crate) mod error;
pub(crate) mod fmt;
pub(crate) mod magnitude;
pub(crate) mod quantity;
pub(crate) mod registry;
pub(crate) mod units;

pub use crate::{
    array::{QuantityArray1, QuantityArray2},
    dimension::Dimension,
    error::{QuantityError, Result},
    magnitude::Magnitude,
    quantity::Quantity,
    registry::{registry, UnitDefinition, UnitRegistry},
    units::*,
};

pub use approx;
pub use nalgebra::{DMatrix, DVector};
pub use num::rational::Rational32;
