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
//! The exact SI defining constants, and the gas constant built from them.
use absolute_unit::{Dimension, Quantity};
use once_cell::sync::Lazy;

/// Hyperfine transition frequency of Cs-133.
pub const DVCS: Quantity = Quantity::new(9_192_631_770., Dimension::FREQUENCY);
/// Speed of light in vacuum.
pub const CLIGHT: Quantity = Quantity::new(299_792_458., Dimension::VELOCITY);
/// Planck constant, in J s.
pub const PLANCK: Quantity =
    Quantity::new(6.626_070_15e-34, Dimension::new([2, 1, -1, 0, 0, 0, 0]));
/// Elementary charge.
pub const QE: Quantity = Quantity::new(1.602_176_634e-19, Dimension::CHARGE);
/// Boltzmann constant, in J/K.
pub const KB: Quantity =
    Quantity::new(1.380_649e-23, Dimension::new([2, 1, -2, 0, -1, 0, 0]));
/// Avogadro constant, in 1/mol.
pub const NAV: Quantity =
    Quantity::new(6.022_140_76e23, Dimension::new([0, 0, 0, 0, 0, -1, 0]));
/// Luminous efficacy of 540 THz radiation, in lm/W.
pub const KCD: Quantity = Quantity::new(683., Dimension::new([-2, -1, 3, 0, 0, 0, 1]));

/// Molar gas constant, NAV * KB.
pub static RGAS: Lazy<Quantity> = Lazy::new(|| NAV * KB);
/// Faraday constant, NAV * QE.
pub static FARADAY: Lazy<Quantity> = Lazy::new(|| NAV * QE);
