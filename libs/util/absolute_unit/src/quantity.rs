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
use crate::{error::Result, registry, Dimension, Magnitude, QuantityError};
use approx::{AbsDiffEq, RelativeEq};
use num::rational::Rational32;
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A magnitude in SI base units tagged with its physical dimension.
///
/// `M` is the shape of the magnitude: `f64` for a single value, or one of the nalgebra
/// containers for arrays (see `QuantityArray1` and `QuantityArray2`). Dimension rules are
/// identical for every shape; only shape checks differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity<M = f64> {
    magnitude: M,
    dimension: Dimension,
}

impl<M> Quantity<M> {
    /// Build from a magnitude that is already in SI base units.
    pub const fn new(magnitude: M, dimension: Dimension) -> Self {
        Self {
            magnitude,
            dimension,
        }
    }

    pub fn magnitude(&self) -> &M {
        &self.magnitude
    }

    pub fn into_magnitude(self) -> M {
        self.magnitude
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    pub(crate) fn check_dimension(&self, dimension: Dimension) -> Result<Dimension> {
        if self.dimension == dimension {
            Ok(dimension)
        } else {
            Err(QuantityError::mismatch(self.dimension, dimension))
        }
    }
}

impl<M: Magnitude> Quantity<M> {
    /// Convert `value`, given in the registered unit `symbol`, into a quantity.
    pub fn from_unit(value: M, symbol: &str) -> Result<Self> {
        let unit = registry().lookup(symbol)?;
        Ok(Self::new(
            value.map_values(|v| unit.to_base(v)),
            unit.dimension(),
        ))
    }

    pub fn shape(&self) -> (usize, usize) {
        self.magnitude.shape()
    }

    pub(crate) fn check_shape(&self, other: &M) -> Result<()> {
        if self.magnitude.shape() == other.shape() {
            Ok(())
        } else {
            Err(QuantityError::ShapeMismatch {
                left: self.magnitude.shape(),
                right: other.shape(),
            })
        }
    }

    pub(crate) fn check_nonzero(magnitude: &M) -> Result<()> {
        if magnitude.any_value(|v| v == 0.) {
            Err(QuantityError::DivideByZero)
        } else {
            Ok(())
        }
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        let dimension = self.check_dimension(rhs.dimension)?;
        self.check_shape(&rhs.magnitude)?;
        Ok(Self::new(
            self.magnitude.zip_values(&rhs.magnitude, |a, b| a + b),
            dimension,
        ))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        let dimension = self.check_dimension(rhs.dimension)?;
        self.check_shape(&rhs.magnitude)?;
        Ok(Self::new(
            self.magnitude.zip_values(&rhs.magnitude, |a, b| a - b),
            dimension,
        ))
    }

    /// Elementwise product. Only fails when two arrays differ in shape.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_shape(&rhs.magnitude)?;
        Ok(Self::new(
            self.magnitude.zip_values(&rhs.magnitude, |a, b| a * b),
            self.dimension * rhs.dimension,
        ))
    }

    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.check_shape(&rhs.magnitude)?;
        Self::check_nonzero(&rhs.magnitude)?;
        Ok(Self::new(
            self.magnitude.zip_values(&rhs.magnitude, |a, b| a / b),
            self.dimension / rhs.dimension,
        ))
    }

    /// Multiply by a plain number; the dimension is unchanged.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.magnitude.map_values(|v| v * factor), self.dimension)
    }

    pub fn recip(&self) -> Result<Self> {
        Self::check_nonzero(&self.magnitude)?;
        Ok(Self::new(
            self.magnitude.map_values(f64::recip),
            self.dimension.recip(),
        ))
    }

    /// Raise to a rational power: the magnitude by `n`, every dimension exponent scaled by `n`.
    /// Negative powers of a zero magnitude fail like `recip`.
    pub fn pow(&self, n: Rational32) -> Result<Self> {
        if *n.numer() < 0 {
            Self::check_nonzero(&self.magnitude)?;
        }
        let magnitude = if n.is_integer() {
            let i = *n.numer();
            self.magnitude.map_values(|v| v.powi(i))
        } else {
            let e = *n.numer() as f64 / *n.denom() as f64;
            self.magnitude.map_values(|v| v.powf(e))
        };
        Ok(Self::new(magnitude, self.dimension.pow(n)))
    }

    pub fn powi(&self, i: i32) -> Result<Self> {
        self.pow(Rational32::from_integer(i))
    }

    pub fn sqrt(&self) -> Self {
        Self::new(
            self.magnitude.map_values(f64::sqrt),
            self.dimension.sqrt(),
        )
    }

    pub fn cbrt(&self) -> Self {
        Self::new(
            self.magnitude.map_values(f64::cbrt),
            self.dimension.cbrt(),
        )
    }

    pub fn abs(&self) -> Self {
        Self::new(self.magnitude.map_values(f64::abs), self.dimension)
    }

    /// The bare magnitude of a dimensionless quantity.
    pub fn into_value(self) -> Result<M> {
        self.check_dimension(Dimension::DIMENSIONLESS)?;
        Ok(self.magnitude)
    }

    /// Apply a scalar quantity to every element: `element + rhs`.
    pub fn add_scalar(&self, rhs: &Quantity<f64>) -> Result<Self> {
        let dimension = self.check_dimension(rhs.dimension)?;
        let r = rhs.magnitude;
        Ok(Self::new(self.magnitude.map_values(|v| v + r), dimension))
    }

    pub fn sub_scalar(&self, rhs: &Quantity<f64>) -> Result<Self> {
        let dimension = self.check_dimension(rhs.dimension)?;
        let r = rhs.magnitude;
        Ok(Self::new(self.magnitude.map_values(|v| v - r), dimension))
    }

    pub fn mul_scalar(&self, rhs: &Quantity<f64>) -> Self {
        let r = rhs.magnitude;
        Self::new(
            self.magnitude.map_values(|v| v * r),
            self.dimension * rhs.dimension,
        )
    }

    pub fn div_scalar(&self, rhs: &Quantity<f64>) -> Result<Self> {
        Quantity::<f64>::check_nonzero(&rhs.magnitude)?;
        let r = rhs.magnitude;
        Ok(Self::new(
            self.magnitude.map_values(|v| v / r),
            self.dimension / rhs.dimension,
        ))
    }

    /// `lhs - element` for every element.
    pub fn rsub_scalar(&self, lhs: &Quantity<f64>) -> Result<Self> {
        let dimension = self.check_dimension(lhs.dimension)?;
        let l = lhs.magnitude;
        Ok(Self::new(self.magnitude.map_values(|v| l - v), dimension))
    }

    /// `lhs / element` for every element.
    pub fn rdiv_scalar(&self, lhs: &Quantity<f64>) -> Result<Self> {
        Self::check_nonzero(&self.magnitude)?;
        let l = lhs.magnitude;
        Ok(Self::new(
            self.magnitude.map_values(|v| l / v),
            lhs.dimension / self.dimension,
        ))
    }
}

impl Quantity<f64> {
    pub fn value(&self) -> f64 {
        self.magnitude
    }

    /// The larger of two quantities of the same dimension.
    pub fn max(&self, other: &Self) -> Result<Self> {
        let dimension = self.check_dimension(other.dimension)?;
        Ok(Self::new(self.magnitude.max(other.magnitude), dimension))
    }

    /// The smaller of two quantities of the same dimension.
    pub fn min(&self, other: &Self) -> Result<Self> {
        let dimension = self.check_dimension(other.dimension)?;
        Ok(Self::new(self.magnitude.min(other.magnitude), dimension))
    }

    /// Order two quantities of the same dimension.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.check_dimension(other.dimension)?;
        self.magnitude
            .partial_cmp(&other.magnitude)
            .ok_or_else(|| QuantityError::InvalidArgument("NaN magnitudes are unordered".into()))
    }
}

impl PartialOrd for Quantity<f64> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension == other.dimension {
            self.magnitude.partial_cmp(&other.magnitude)
        } else {
            None
        }
    }
}

impl<M> AbsDiffEq for Quantity<M>
where
    M: Magnitude + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimension == other.dimension
            && self.shape() == other.shape()
            && self.magnitude.abs_diff_eq(&other.magnitude, epsilon)
    }
}

impl<M> RelativeEq for Quantity<M>
where
    M: Magnitude + AbsDiffEq<Epsilon = f64> + RelativeEq,
{
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.dimension == other.dimension
            && self.shape() == other.shape()
            && self
                .magnitude
                .relative_eq(&other.magnitude, epsilon, max_relative)
    }
}

// Scalar with scalar. Products never fail; sums and quotients can.
impl Add for Quantity<f64> {
    type Output = Result<Quantity<f64>>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Sub for Quantity<f64> {
    type Output = Result<Quantity<f64>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl Mul for Quantity<f64> {
    type Output = Quantity<f64>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_scalar(&rhs)
    }
}

impl Div for Quantity<f64> {
    type Output = Result<Quantity<f64>>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(&rhs)
    }
}

// Plain numbers act as dimensionless quantities, for every shape.
impl<M: Magnitude> Mul<f64> for Quantity<M> {
    type Output = Quantity<M>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<M: Magnitude> Mul<Quantity<M>> for f64 {
    type Output = Quantity<M>;

    fn mul(self, rhs: Quantity<M>) -> Self::Output {
        rhs.scale(self)
    }
}

impl<M: Magnitude> Div<f64> for Quantity<M> {
    type Output = Result<Quantity<M>>;

    fn div(self, rhs: f64) -> Self::Output {
        if rhs == 0. {
            return Err(QuantityError::DivideByZero);
        }
        Ok(self.scale(rhs.recip()))
    }
}

impl<M: Magnitude> Div<Quantity<M>> for f64 {
    type Output = Result<Quantity<M>>;

    fn div(self, rhs: Quantity<M>) -> Self::Output {
        rhs.rdiv_scalar(&Quantity::new(self, Dimension::DIMENSIONLESS))
    }
}

impl<M: Magnitude> Neg for Quantity<M> {
    type Output = Quantity<M>;

    fn neg(self) -> Self::Output {
        Self::new(self.magnitude.map_values(|v| -v), self.dimension)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BAR, JOULE, KELVIN, KILO, LITER, METER, MOL, PASCAL, SECOND};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_construct_from_constants() {
        let t = 300. * KELVIN;
        assert_eq!(t.value(), 300.);
        assert_eq!(t.dimension(), Dimension::TEMPERATURE);
        let v = 5. * LITER;
        assert_relative_eq!(v.value(), 5e-3);
        assert_eq!(v.dimension(), Dimension::VOLUME);
    }

    #[test]
    fn test_construct_from_registry() {
        let p = Quantity::from_unit(2., "bar").unwrap();
        assert_eq!(p, 2. * BAR);
        let t = Quantity::from_unit(25., "°C").unwrap();
        assert_relative_eq!(t, 298.15 * KELVIN);
        assert_eq!(
            Quantity::from_unit(1., "smoot"),
            Err(QuantityError::UnknownUnit("smoot".to_owned()))
        );
    }

    #[test]
    fn test_add_then_subtract_recovers() {
        let a = 3. * METER;
        let b = 250. * METER;
        let back = ((a + b).unwrap() - b).unwrap();
        assert_relative_eq!(back, a);
        assert_eq!(back.dimension(), Dimension::LENGTH);
    }

    #[test]
    fn test_add_mismatched_dimensions() {
        let err = (3. * METER + 2. * SECOND).unwrap_err();
        assert_eq!(
            err,
            QuantityError::DimensionMismatch {
                left: Dimension::LENGTH,
                right: Dimension::TIME
            }
        );
        assert!((3. * METER - 2. * KELVIN).is_err());
    }

    #[test]
    fn test_mul_div_combine_dimensions() {
        let w = (2. * KILO * PASCAL) * (3. * LITER);
        assert_eq!(w.dimension(), JOULE.dimension());
        assert_relative_eq!(w.value(), 6.);
        let p = (w / (3. * LITER)).unwrap();
        assert_eq!(p.dimension(), Dimension::PRESSURE);
        let n = 2. * (5. * MOL);
        assert_eq!(n.value(), 10.);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!((METER / (0. * SECOND)).unwrap_err(), QuantityError::DivideByZero);
        assert_eq!((METER / 0.).unwrap_err(), QuantityError::DivideByZero);
        assert_eq!((1. / (0. * METER)).unwrap_err(), QuantityError::DivideByZero);
        assert!((0. * METER).recip().is_err());
    }

    #[test]
    fn test_powers() {
        let area = (4. * METER).powi(2).unwrap();
        assert_eq!(area.dimension(), Dimension::AREA);
        assert_relative_eq!(area.value(), 16.);
        let side = area.sqrt();
        assert_eq!(side.dimension(), Dimension::LENGTH);
        assert_relative_eq!(side.value(), 4.);
        let root = (9. * METER).pow(Rational32::new(1, 2)).unwrap();
        assert_relative_eq!(root.value(), 3.);
        assert_eq!(root.powi(2).unwrap().dimension(), Dimension::LENGTH);
        assert_relative_eq!((27. * METER.powi(3).unwrap()).cbrt(), 3. * METER);
    }

    #[test]
    fn test_negative_powers_of_zero() {
        let zero = 0. * METER;
        assert_eq!(zero.powi(-1), Err(QuantityError::DivideByZero));
        assert_eq!(zero.pow(Rational32::new(-1, 2)), Err(QuantityError::DivideByZero));
        assert_eq!(zero.powi(-1), zero.recip());
        assert_eq!(zero.powi(2).unwrap(), 0. * METER.powi(2).unwrap());
        assert_eq!(zero.powi(0).unwrap(), Quantity::new(1., Dimension::DIMENSIONLESS));
        let per_meter = (2. * METER).powi(-1).unwrap();
        assert_eq!(per_meter.dimension(), Dimension::LENGTH.recip());
        assert_relative_eq!(per_meter.value(), 0.5);
    }

    #[test]
    fn test_max_min() {
        let p1 = 110. * KILO * PASCAL;
        let p2 = BAR;
        assert_eq!(p1.max(&p2), Ok(p1));
        assert_eq!(p1.min(&p2), Ok(p2));
        assert_eq!(
            BAR.max(&KELVIN),
            Err(QuantityError::mismatch(Dimension::PRESSURE, Dimension::TEMPERATURE))
        );
        assert!(BAR.min(&KELVIN).is_err());
    }

    #[test]
    fn test_compare() {
        let a = 1. * BAR;
        let b = 90. * KILO * PASCAL;
        assert_eq!(a.try_cmp(&b), Ok(Ordering::Greater));
        assert!(b < a);
        assert_eq!(
            a.try_cmp(&KELVIN),
            Err(QuantityError::mismatch(Dimension::PRESSURE, Dimension::TEMPERATURE))
        );
        assert_eq!(a.partial_cmp(&KELVIN), None);
    }

    #[test]
    fn test_into_value() {
        let ratio = ((3. * METER) / (1.5 * METER)).unwrap();
        assert!(ratio.is_dimensionless());
        assert_abs_diff_eq!(ratio.into_value().unwrap(), 2.);
        assert!(METER.into_value().is_err());
    }

    #[test]
    fn test_negate_and_abs() {
        let t = -(5. * KELVIN);
        assert_eq!(t.value(), -5.);
        assert_eq!(t.abs(), 5. * KELVIN);
    }
}
