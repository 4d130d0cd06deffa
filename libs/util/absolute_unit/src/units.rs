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
use crate::{Dimension, Quantity, QuantityArray1, QuantityArray2};
use nalgebra::{DMatrix, DVector};
use std::ops::Mul;

// Prefixes
pub const YOTTA: f64 = 1e24;
pub const ZETTA: f64 = 1e21;
pub const EXA: f64 = 1e18;
pub const PETA: f64 = 1e15;
pub const TERA: f64 = 1e12;
pub const GIGA: f64 = 1e9;
pub const MEGA: f64 = 1e6;
pub const KILO: f64 = 1e3;
pub const HECTO: f64 = 1e2;
pub const DECA: f64 = 1e1;
pub const DECI: f64 = 1e-1;
pub const CENTI: f64 = 1e-2;
pub const MILLI: f64 = 1e-3;
pub const MICRO: f64 = 1e-6;
pub const NANO: f64 = 1e-9;
pub const PICO: f64 = 1e-12;
pub const FEMTO: f64 = 1e-15;
pub const ATTO: f64 = 1e-18;
pub const ZEPTO: f64 = 1e-21;
pub const YOCTO: f64 = 1e-24;

// Base
pub const METER: Quantity = Quantity::new(1., Dimension::LENGTH);
pub const KILOGRAM: Quantity = Quantity::new(1., Dimension::MASS);
pub const SECOND: Quantity = Quantity::new(1., Dimension::TIME);
pub const AMPERE: Quantity = Quantity::new(1., Dimension::CURRENT);
pub const KELVIN: Quantity = Quantity::new(1., Dimension::TEMPERATURE);
pub const MOL: Quantity = Quantity::new(1., Dimension::AMOUNT);
pub const CANDELA: Quantity = Quantity::new(1., Dimension::LUMINOUS_INTENSITY);

// Derived
pub const SQUARE_METER: Quantity = Quantity::new(1., Dimension::AREA);
pub const CUBIC_METER: Quantity = Quantity::new(1., Dimension::VOLUME);
pub const HERTZ: Quantity = Quantity::new(1., Dimension::FREQUENCY);
pub const NEWTON: Quantity = Quantity::new(1., Dimension::FORCE);
pub const PASCAL: Quantity = Quantity::new(1., Dimension::PRESSURE);
pub const JOULE: Quantity = Quantity::new(1., Dimension::ENERGY);
pub const WATT: Quantity = Quantity::new(1., Dimension::POWER);
pub const COULOMB: Quantity = Quantity::new(1., Dimension::CHARGE);
pub const VOLT: Quantity = Quantity::new(1., Dimension::VOLTAGE);
pub const FARAD: Quantity = Quantity::new(1., Dimension::CAPACITANCE);
pub const OHM: Quantity = Quantity::new(1., Dimension::RESISTANCE);
pub const SIEMENS: Quantity = Quantity::new(1., Dimension::CONDUCTANCE);
pub const WEBER: Quantity = Quantity::new(1., Dimension::MAGNETIC_FLUX);
pub const TESLA: Quantity = Quantity::new(1., Dimension::MAGNETIC_FLUX_DENSITY);
pub const HENRY: Quantity = Quantity::new(1., Dimension::INDUCTANCE);

// Non-SI, scaled to base units
pub const GRAM: Quantity = Quantity::new(1e-3, Dimension::MASS);
pub const LITER: Quantity = Quantity::new(1e-3, Dimension::VOLUME);
pub const BAR: Quantity = Quantity::new(1e5, Dimension::PRESSURE);
pub const ATMOSPHERE: Quantity = Quantity::new(101_325., Dimension::PRESSURE);
pub const CALORIE: Quantity = Quantity::new(4.184, Dimension::ENERGY);
pub const MINUTE: Quantity = Quantity::new(60., Dimension::TIME);
pub const HOUR: Quantity = Quantity::new(3_600., Dimension::TIME);
pub const DAY: Quantity = Quantity::new(86_400., Dimension::TIME);
pub const ANGSTROM: Quantity = Quantity::new(1e-10, Dimension::LENGTH);

/// Degrees celsius. Not a scale factor, so it is a marker rather than a quantity: multiplying
/// numbers by it shifts them onto the kelvin scale.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Celsius;

pub const CELSIUS: Celsius = Celsius;

impl Celsius {
    const KELVIN_AT_ZERO: f64 = 273.15;

    pub fn convert_to_kelvin(degrees_in: f64) -> f64 {
        degrees_in + Self::KELVIN_AT_ZERO
    }

    pub fn convert_from_kelvin(degrees_k: f64) -> f64 {
        degrees_k - Self::KELVIN_AT_ZERO
    }
}

impl Mul<Celsius> for f64 {
    type Output = Quantity;

    fn mul(self, _: Celsius) -> Self::Output {
        Quantity::new(Celsius::convert_to_kelvin(self), Dimension::TEMPERATURE)
    }
}

impl Mul<Celsius> for Vec<f64> {
    type Output = QuantityArray1;

    fn mul(self, rhs: Celsius) -> Self::Output {
        DVector::from_vec(self) * rhs
    }
}

impl Mul<Celsius> for DVector<f64> {
    type Output = QuantityArray1;

    fn mul(self, _: Celsius) -> Self::Output {
        Quantity::new(
            self.map(Celsius::convert_to_kelvin),
            Dimension::TEMPERATURE,
        )
    }
}

impl Mul<Celsius> for DMatrix<f64> {
    type Output = QuantityArray2;

    fn mul(self, _: Celsius) -> Self::Output {
        Quantity::new(
            self.map(Celsius::convert_to_kelvin),
            Dimension::TEMPERATURE,
        )
    }
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        ($num as f64) * $crate::METER
    };
}

#[macro_export]
macro_rules! meters3 {
    ($num:expr) => {
        ($num as f64) * $crate::CUBIC_METER
    };
}

#[macro_export]
macro_rules! liters {
    ($num:expr) => {
        ($num as f64) * $crate::LITER
    };
}

#[macro_export]
macro_rules! seconds {
    ($num:expr) => {
        ($num as f64) * $crate::SECOND
    };
}

#[macro_export]
macro_rules! kilograms {
    ($num:expr) => {
        ($num as f64) * $crate::KILOGRAM
    };
}

#[macro_export]
macro_rules! kelvin {
    ($num:expr) => {
        ($num as f64) * $crate::KELVIN
    };
}

#[macro_export]
macro_rules! celsius {
    ($num:expr) => {
        ($num as f64) * $crate::CELSIUS
    };
}

#[macro_export]
macro_rules! moles {
    ($num:expr) => {
        ($num as f64) * $crate::MOL
    };
}

#[macro_export]
macro_rules! pascals {
    ($num:expr) => {
        ($num as f64) * $crate::PASCAL
    };
}

#[macro_export]
macro_rules! bar {
    ($num:expr) => {
        ($num as f64) * $crate::BAR
    };
}

#[macro_export]
macro_rules! joules {
    ($num:expr) => {
        ($num as f64) * $crate::JOULE
    };
}
