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
use crate::{error::Result, Quantity, QuantityError};
use nalgebra::{DMatrix, DVector};
use std::ops::{Add, Div, Mul, Sub};

/// A column of magnitudes sharing one dimension.
pub type QuantityArray1 = Quantity<DVector<f64>>;

/// A matrix of magnitudes sharing one dimension.
pub type QuantityArray2 = Quantity<DMatrix<f64>>;

impl QuantityArray1 {
    /// Collect scalar quantities that all share the first one's dimension.
    pub fn from_quantities(quantities: &[Quantity]) -> Result<Self> {
        let first = quantities.first().ok_or_else(|| {
            QuantityError::InvalidArgument("cannot infer a dimension from no quantities".into())
        })?;
        let dimension = first.dimension();
        for q in quantities {
            q.check_dimension(dimension)?;
        }
        Ok(Quantity::new(
            DVector::from_iterator(quantities.len(), quantities.iter().map(|q| q.value())),
            dimension,
        ))
    }

    /// `count` evenly spaced values from `start` to `stop`, both included.
    pub fn linspace(start: Quantity, stop: Quantity, count: usize) -> Result<Self> {
        let dimension = start.check_dimension(stop.dimension())?;
        let (a, b) = (start.value(), stop.value());
        let values = match count {
            0 => {
                return Err(QuantityError::InvalidArgument(
                    "linspace needs at least one point".into(),
                ))
            }
            1 => DVector::from_element(1, a),
            _ => {
                let step = (b - a) / (count - 1) as f64;
                let mut values = DVector::from_fn(count, |i, _| a + i as f64 * step);
                values[count - 1] = b;
                values
            }
        };
        Ok(Quantity::new(values, dimension))
    }

    /// `count` values from `start` to `stop`, both included, evenly spaced in log10.
    pub fn logspace(start: Quantity, stop: Quantity, count: usize) -> Result<Self> {
        let dimension = start.check_dimension(stop.dimension())?;
        let (a, b) = (start.value(), stop.value());
        if !(a > 0. && b > 0.) {
            return Err(QuantityError::InvalidArgument(format!(
                "logspace needs positive endpoints, got {} and {}",
                a, b
            )));
        }
        let values = match count {
            0 => {
                return Err(QuantityError::InvalidArgument(
                    "logspace needs at least one point".into(),
                ))
            }
            1 => DVector::from_element(1, a),
            _ => {
                let (la, lb) = (a.log10(), b.log10());
                let step = (lb - la) / (count - 1) as f64;
                let mut values =
                    DVector::from_fn(count, |i, _| 10f64.powf(la + i as f64 * step));
                values[0] = a;
                values[count - 1] = b;
                values
            }
        };
        Ok(Quantity::new(values, dimension))
    }

    pub fn len(&self) -> usize {
        self.magnitude().len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude().is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Quantity> {
        self.magnitude()
            .get(i)
            .map(|v| Quantity::new(*v, self.dimension()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        let dimension = self.dimension();
        self.magnitude()
            .iter()
            .map(move |v| Quantity::new(*v, dimension))
    }

    pub fn sum(&self) -> Quantity {
        Quantity::new(self.magnitude().sum(), self.dimension())
    }

    /// Integral over samples spaced `dx` apart, by the trapezoidal rule.
    pub fn integrate_trapezoidal(&self, dx: Quantity) -> Result<Quantity> {
        let n = self.len();
        if n == 0 {
            return Err(QuantityError::InvalidArgument(
                "cannot integrate no samples".into(),
            ));
        }
        let values = self.magnitude();
        let mut weights = DVector::from_element(n, 1.);
        weights[0] = 0.5;
        weights[n - 1] = 0.5;
        Ok(Quantity::new(
            values.dot(&weights) * dx.value(),
            self.dimension() * dx.dimension(),
        ))
    }

    /// Running trapezoidal integral; element `i` integrates samples `0..=i`.
    pub fn integrate_trapezoidal_cumulative(&self, dx: Quantity) -> QuantityArray1 {
        let values = self.magnitude();
        let mut running = DVector::zeros(values.len());
        for i in 1..values.len() {
            running[i] = running[i - 1] + (values[i - 1] + values[i]) * 0.5;
        }
        Quantity::new(running * dx.value(), self.dimension() * dx.dimension())
    }

    /// Inner product of two equally long arrays.
    pub fn dot(&self, other: &QuantityArray1) -> Result<Quantity> {
        self.check_shape(other.magnitude())?;
        Ok(Quantity::new(
            self.magnitude().dot(other.magnitude()),
            self.dimension() * other.dimension(),
        ))
    }
}

impl QuantityArray2 {
    /// Build a matrix from row-major `data`, each value multiplied by `unit`.
    pub fn from_row_slice(
        nrows: usize,
        ncols: usize,
        data: &[f64],
        unit: Quantity,
    ) -> Result<Self> {
        if nrows * ncols != data.len() {
            return Err(QuantityError::ShapeMismatch {
                left: (nrows, ncols),
                right: (data.len(), 1),
            });
        }
        Ok(DMatrix::from_row_slice(nrows, ncols, data) * unit)
    }

    pub fn nrows(&self) -> usize {
        self.magnitude().nrows()
    }

    pub fn ncols(&self) -> usize {
        self.magnitude().ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Quantity> {
        self.magnitude()
            .get((row, col))
            .map(|v| Quantity::new(*v, self.dimension()))
    }

    pub fn transpose(&self) -> Self {
        Quantity::new(self.magnitude().transpose(), self.dimension())
    }

    /// Matrix-vector product: the dot product of every row with `vector`.
    pub fn dot(&self, vector: &QuantityArray1) -> Result<QuantityArray1> {
        if self.ncols() != vector.len() {
            return Err(QuantityError::ShapeMismatch {
                left: self.shape(),
                right: vector.shape(),
            });
        }
        Ok(Quantity::new(
            self.magnitude() * vector.magnitude(),
            self.dimension() * vector.dimension(),
        ))
    }
}

impl Mul<Quantity> for Vec<f64> {
    type Output = QuantityArray1;

    fn mul(self, unit: Quantity) -> Self::Output {
        DVector::from_vec(self) * unit
    }
}

macro_rules! impl_array_ops {
    ($Magnitude:ty) => {
        // Array with array of the same shape.
        impl Add for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn add(self, rhs: Self) -> Self::Output {
                self.try_add(&rhs)
            }
        }

        impl Sub for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn sub(self, rhs: Self) -> Self::Output {
                self.try_sub(&rhs)
            }
        }

        impl Mul for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn mul(self, rhs: Self) -> Self::Output {
                self.try_mul(&rhs)
            }
        }

        impl Div for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn div(self, rhs: Self) -> Self::Output {
                self.try_div(&rhs)
            }
        }

        // Array with a broadcast scalar.
        impl Add<Quantity> for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn add(self, rhs: Quantity) -> Self::Output {
                self.add_scalar(&rhs)
            }
        }

        impl Sub<Quantity> for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn sub(self, rhs: Quantity) -> Self::Output {
                self.sub_scalar(&rhs)
            }
        }

        impl Mul<Quantity> for Quantity<$Magnitude> {
            type Output = Self;

            fn mul(self, rhs: Quantity) -> Self::Output {
                self.mul_scalar(&rhs)
            }
        }

        impl Div<Quantity> for Quantity<$Magnitude> {
            type Output = Result<Self>;

            fn div(self, rhs: Quantity) -> Self::Output {
                self.div_scalar(&rhs)
            }
        }

        // Broadcast scalar with array.
        impl Add<Quantity<$Magnitude>> for Quantity {
            type Output = Result<Quantity<$Magnitude>>;

            fn add(self, rhs: Quantity<$Magnitude>) -> Self::Output {
                rhs.add_scalar(&self)
            }
        }

        impl Sub<Quantity<$Magnitude>> for Quantity {
            type Output = Result<Quantity<$Magnitude>>;

            fn sub(self, rhs: Quantity<$Magnitude>) -> Self::Output {
                rhs.rsub_scalar(&self)
            }
        }

        impl Mul<Quantity<$Magnitude>> for Quantity {
            type Output = Quantity<$Magnitude>;

            fn mul(self, rhs: Quantity<$Magnitude>) -> Self::Output {
                rhs.mul_scalar(&self)
            }
        }

        impl Div<Quantity<$Magnitude>> for Quantity {
            type Output = Result<Quantity<$Magnitude>>;

            fn div(self, rhs: Quantity<$Magnitude>) -> Self::Output {
                rhs.rdiv_scalar(&self)
            }
        }

        // Bare numbers times a unit.
        impl Mul<Quantity> for $Magnitude {
            type Output = Quantity<$Magnitude>;

            fn mul(self, unit: Quantity) -> Self::Output {
                let scale = unit.value();
                Quantity::new(self.map(|v| v * scale), unit.dimension())
            }
        }
    };
}
impl_array_ops!(DVector<f64>);
impl_array_ops!(DMatrix<f64>);

impl From<Quantity> for QuantityArray1 {
    fn from(q: Quantity) -> Self {
        Quantity::new(DVector::from_element(1, q.value()), q.dimension())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Dimension, BAR, CELSIUS, JOULE, KELVIN, LITER, METER, MOL, PASCAL, SECOND};
    use approx::assert_relative_eq;

    fn vector(values: &[f64]) -> DVector<f64> {
        DVector::from_column_slice(values)
    }

    #[test]
    fn test_construct() {
        let v = vec![3., 5.] * METER.powi(3).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.dimension(), Dimension::VOLUME);
        let l = vec![1., 2.] * LITER;
        assert_relative_eq!(l.magnitude(), &vector(&[1e-3, 2e-3]));
        let t = QuantityArray1::from_unit(vector(&[0., 100.]), "°C").unwrap();
        assert_relative_eq!(t.magnitude(), &vector(&[273.15, 373.15]));
        assert_eq!(t, vec![0., 100.] * CELSIUS);
    }

    #[test]
    fn test_from_quantities() {
        let a = QuantityArray1::from_quantities(&[1. * BAR, 2. * PASCAL]).unwrap();
        assert_eq!(a.magnitude(), &vector(&[1e5, 2.]));
        assert!(QuantityArray1::from_quantities(&[1. * BAR, 2. * KELVIN]).is_err());
        assert!(QuantityArray1::from_quantities(&[]).is_err());
    }

    #[test]
    fn test_linspace() {
        for n in 2..12 {
            let xs = QuantityArray1::linspace(1. * MOL, 2. * MOL, n).unwrap();
            assert_eq!(xs.len(), n);
            assert_eq!(xs.get(0), Some(1. * MOL));
            assert_eq!(xs.get(n - 1), Some(2. * MOL));
            assert_eq!(xs.dimension(), Dimension::AMOUNT);
        }
        let quarters = QuantityArray1::linspace(0. * METER, METER, 5).unwrap();
        assert_relative_eq!(quarters.magnitude(), &vector(&[0., 0.25, 0.5, 0.75, 1.]));
        let single = QuantityArray1::linspace(3. * SECOND, 9. * SECOND, 1).unwrap();
        assert_eq!(single.magnitude(), &vector(&[3.]));
    }

    #[test]
    fn test_linspace_errors() {
        assert_eq!(
            QuantityArray1::linspace(MOL, 2. * MOL, 0).unwrap_err(),
            QuantityError::InvalidArgument("linspace needs at least one point".into())
        );
        assert!(matches!(
            QuantityArray1::linspace(MOL, 2. * KELVIN, 3),
            Err(QuantityError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_logspace() {
        let xs = QuantityArray1::logspace(METER, 16. * METER, 5).unwrap();
        assert_eq!(xs.dimension(), Dimension::LENGTH);
        assert_relative_eq!(
            xs.magnitude(),
            &vector(&[1., 2., 4., 8., 16.]),
            max_relative = 1e-12
        );
        assert_eq!(xs.get(0), Some(METER));
        assert_eq!(xs.get(4), Some(16. * METER));
        let single = QuantityArray1::logspace(BAR, 10. * BAR, 1).unwrap();
        assert_eq!(single.magnitude(), &vector(&[1e5]));
    }

    #[test]
    fn test_logspace_errors() {
        assert!(matches!(
            QuantityArray1::logspace(METER, 2. * SECOND, 3),
            Err(QuantityError::DimensionMismatch { .. })
        ));
        assert_eq!(
            QuantityArray1::logspace(METER, 2. * METER, 0).unwrap_err(),
            QuantityError::InvalidArgument("logspace needs at least one point".into())
        );
        assert!(matches!(
            QuantityArray1::logspace(0. * METER, METER, 3),
            Err(QuantityError::InvalidArgument(_))
        ));
        assert!(matches!(
            QuantityArray1::logspace(METER, -1. * METER, 3),
            Err(QuantityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_trapezoidal() {
        let v = vec![0., 1., 2., 3.] * METER;
        let dt = 2. * SECOND;
        let area = v.integrate_trapezoidal(dt).unwrap();
        assert_eq!(area.dimension(), Dimension::LENGTH * Dimension::TIME);
        assert_relative_eq!(area.value(), 9.);
        let running = v.integrate_trapezoidal_cumulative(dt);
        assert_eq!(running.dimension(), area.dimension());
        assert_relative_eq!(running.magnitude(), &vector(&[0., 1., 4., 9.]));
        assert_relative_eq!(running.get(3).unwrap(), area);
        let empty = QuantityArray1::new(DVector::zeros(0), Dimension::LENGTH);
        assert!(matches!(
            empty.integrate_trapezoidal(dt),
            Err(QuantityError::InvalidArgument(_))
        ));
        assert!(empty.integrate_trapezoidal_cumulative(dt).is_empty());
    }

    #[test]
    fn test_elementwise() {
        let a = vec![1., 2.] * METER;
        let b = vec![3., 4.] * METER;
        let sum = (a.clone() + b.clone()).unwrap();
        assert_eq!(sum.magnitude(), &vector(&[4., 6.]));
        let area = (a.clone() * b.clone()).unwrap();
        assert_eq!(area.dimension(), Dimension::AREA);
        assert_eq!(area.magnitude(), &vector(&[3., 8.]));
        let ratio = (b / a.clone()).unwrap();
        assert!(ratio.is_dimensionless());
        assert!((a + vec![1., 1.] * SECOND).is_err());
    }

    #[test]
    fn test_shape_mismatch() {
        let a = vec![1., 2.] * METER;
        let b = vec![1., 2., 3.] * METER;
        assert_eq!(
            (a.clone() + b.clone()).unwrap_err(),
            QuantityError::ShapeMismatch {
                left: (2, 1),
                right: (3, 1)
            }
        );
        assert!((a.clone() * b.clone()).is_err());
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn test_broadcast() {
        let ts = vec![300., 310.] * KELVIN;
        let shifted = (ts.clone() + 10. * KELVIN).unwrap();
        assert_eq!(shifted.magnitude(), &vector(&[310., 320.]));
        let below = (400. * KELVIN - ts.clone()).unwrap();
        assert_eq!(below.magnitude(), &vector(&[100., 90.]));
        assert!((ts.clone() + METER).is_err());
        let scaled = ts.clone() * (2. * MOL);
        assert_eq!(scaled.dimension(), Dimension::TEMPERATURE * Dimension::AMOUNT);
        let halved = (ts.clone() / 2.).unwrap();
        assert_eq!(halved.magnitude(), &vector(&[150., 155.]));
        let inverse = (KELVIN / ts.clone()).unwrap();
        assert_eq!(inverse.dimension(), Dimension::DIMENSIONLESS);
        assert!((ts / (0. * SECOND)).is_err());
    }

    #[test]
    fn test_divide_by_zero_element() {
        let a = vec![1., 2.] * METER;
        let b = vec![1., 0.] * SECOND;
        assert_eq!((a.clone() / b.clone()).unwrap_err(), QuantityError::DivideByZero);
        assert_eq!((METER / b).unwrap_err(), QuantityError::DivideByZero);
    }

    #[test]
    fn test_powers() {
        let sides = vec![2., 3.] * METER;
        let areas = sides.powi(2).unwrap();
        assert_eq!(areas.dimension(), Dimension::AREA);
        assert_eq!(areas.magnitude(), &vector(&[4., 9.]));
        assert_relative_eq!(areas.sqrt(), sides);
    }

    #[test]
    fn test_reductions() {
        let a = vec![1., 2., 3.] * JOULE;
        assert_eq!(a.sum(), 6. * JOULE);
        let b = vec![1., 1., 1.] * SECOND;
        assert_eq!(a.dot(&b).unwrap(), 6. * JOULE * SECOND);
        assert_eq!(a.iter().count(), 3);
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn test_matrix_vector() {
        let p = DMatrix::from_row_slice(2, 2, &[1., 2., 3., 4.]) * BAR;
        let v = vec![1., 2.] * LITER;
        let w = p.dot(&v).unwrap();
        assert_eq!(w.dimension(), Dimension::ENERGY);
        assert_relative_eq!(w.magnitude(), &vector(&[500., 1100.]));
        assert_eq!(p.transpose().get(0, 1), Some(3. * BAR));
        let short = vec![1.] * LITER;
        assert_eq!(
            p.dot(&short).unwrap_err(),
            QuantityError::ShapeMismatch {
                left: (2, 2),
                right: (1, 1)
            }
        );
    }

    #[test]
    fn test_from_row_slice() {
        let m = QuantityArray2::from_row_slice(2, 3, &[1., 2., 3., 4., 5., 6.], PASCAL).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m.get(1, 0), Some(4. * PASCAL));
        assert!(QuantityArray2::from_row_slice(2, 2, &[1.], PASCAL).is_err());
    }
}
