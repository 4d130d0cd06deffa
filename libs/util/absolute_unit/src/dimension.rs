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
use num::rational::Rational32;
use num_traits::{One, Zero};
use std::{
    fmt,
    ops::{Div, DivAssign, Mul, MulAssign},
};

const BASE_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Exponents over the seven SI base dimensions, in the order length, mass, time, current,
/// temperature, amount of substance and luminous intensity.
///
/// Exponents are rational so that roots of even powers (the square root of an area) stay
/// exact. Every operation produces a new vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension([Rational32; 7]);

impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new([0, 0, 0, 0, 0, 0, 0]);

    // Base
    pub const LENGTH: Self = Self::new([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Self = Self::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Self = Self::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Self = Self::new([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Self = Self::new([0, 0, 0, 0, 1, 0, 0]);
    pub const AMOUNT: Self = Self::new([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOUS_INTENSITY: Self = Self::new([0, 0, 0, 0, 0, 0, 1]);

    // Derived
    pub const AREA: Self = Self::new([2, 0, 0, 0, 0, 0, 0]);
    pub const VOLUME: Self = Self::new([3, 0, 0, 0, 0, 0, 0]);
    pub const FREQUENCY: Self = Self::new([0, 0, -1, 0, 0, 0, 0]);
    pub const VELOCITY: Self = Self::new([1, 0, -1, 0, 0, 0, 0]);
    pub const ACCELERATION: Self = Self::new([1, 0, -2, 0, 0, 0, 0]);
    pub const DENSITY: Self = Self::new([-3, 1, 0, 0, 0, 0, 0]);
    pub const FORCE: Self = Self::new([1, 1, -2, 0, 0, 0, 0]);
    pub const PRESSURE: Self = Self::new([-1, 1, -2, 0, 0, 0, 0]);
    pub const ENERGY: Self = Self::new([2, 1, -2, 0, 0, 0, 0]);
    pub const POWER: Self = Self::new([2, 1, -3, 0, 0, 0, 0]);
    pub const CHARGE: Self = Self::new([0, 0, 1, 1, 0, 0, 0]);
    pub const VOLTAGE: Self = Self::new([2, 1, -3, -1, 0, 0, 0]);
    pub const CAPACITANCE: Self = Self::new([-2, -1, 4, 2, 0, 0, 0]);
    pub const RESISTANCE: Self = Self::new([2, 1, -3, -2, 0, 0, 0]);
    pub const CONDUCTANCE: Self = Self::new([-2, -1, 3, 2, 0, 0, 0]);
    pub const MAGNETIC_FLUX: Self = Self::new([2, 1, -2, -1, 0, 0, 0]);
    pub const MAGNETIC_FLUX_DENSITY: Self = Self::new([0, 1, -2, -1, 0, 0, 0]);
    pub const INDUCTANCE: Self = Self::new([2, 1, -2, -2, 0, 0, 0]);

    pub const fn new(exponents: [i32; 7]) -> Self {
        let mut out = [Rational32::new_raw(0, 1); 7];
        let mut i = 0;
        while i < 7 {
            out[i] = Rational32::new_raw(exponents[i], 1);
            i += 1;
        }
        Self(out)
    }

    pub fn from_rational(exponents: [Rational32; 7]) -> Self {
        Self(exponents)
    }

    pub fn exponents(&self) -> &[Rational32; 7] {
        &self.0
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    pub fn recip(&self) -> Self {
        Self(self.0.map(|e| -e))
    }

    /// Scale every exponent by `n`. Never fails; fractional `n` takes roots.
    pub fn pow(&self, n: Rational32) -> Self {
        Self(self.0.map(|e| e * n))
    }

    pub fn powi(&self, i: i32) -> Self {
        self.pow(Rational32::from_integer(i))
    }

    /// The `i`th root: every exponent divided by `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is zero.
    pub fn root(&self, i: i32) -> Self {
        assert!(i != 0, "zeroth root of [{}]", self);
        self.pow(Rational32::new(1, i))
    }

    pub fn sqrt(&self) -> Self {
        self.root(2)
    }

    pub fn cbrt(&self) -> Self {
        self.root(3)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl Mul for Dimension {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, other: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0.iter()) {
            *a += *b;
        }
        Self(out)
    }
}

impl Div for Dimension {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0.iter()) {
            *a -= *b;
        }
        Self(out)
    }
}

impl MulAssign for Dimension {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Dimension {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .zip(BASE_SYMBOLS.iter())
            .filter(|(e, _)| !e.is_zero())
            .map(|(e, s)| {
                if e.is_one() {
                    (*s).to_owned()
                } else {
                    format!("{}^{}", s, e)
                }
            })
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(" "))
    }
}
