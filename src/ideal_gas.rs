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
use absolute_unit::{
    DMatrix, Magnitude, Quantity, QuantityArray1, QuantityArray2, Result, BAR, CELSIUS,
    CUBIC_METER, KELVIN, LITER, MOL,
};
use physical_constants::RGAS;

/// p = n R T / V, elementwise for array quantities.
pub fn pressure<M: Magnitude>(
    n: &Quantity<M>,
    t: &Quantity<M>,
    v: &Quantity<M>,
) -> Result<Quantity<M>> {
    n.mul_scalar(&RGAS).try_mul(t)?.try_div(v)
}

/// Ten moles at 300 K in five liters.
pub fn single_state() -> Result<Quantity> {
    let t = 300. * KELVIN;
    let v = 5. * LITER;
    let n = 10. * MOL;
    pressure(&n, &t, &v)
}

/// Two states swept between one and two moles.
pub fn state_series() -> Result<QuantityArray1> {
    let t = vec![25., 45.] * CELSIUS;
    let v = vec![3., 5.] * CUBIC_METER;
    let n = QuantityArray1::linspace(MOL, 2. * MOL, 2)?;
    pressure(&n, &t, &v)
}

/// Pressure-volume products for a grid of pressures applied to one set of volumes.
pub fn pressure_volume_work() -> Result<QuantityArray1> {
    let p: QuantityArray2 = DMatrix::from_row_slice(2, 2, &[1., 2., 3., 4.]) * BAR;
    let v = vec![1., 2.] * LITER;
    p.dot(&v)
}

#[cfg(test)]
mod test {
    use super::*;
    use absolute_unit::{approx::assert_relative_eq, Dimension, QuantityError, PASCAL};

    #[test]
    fn test_single_state() -> Result<()> {
        let p = single_state()?;
        assert_eq!(p.dimension(), Dimension::PRESSURE);
        assert_eq!(p.format(Some("MPa"))?, "4.9886775708919435 MPa");
        assert_eq!(p.to_string(), "4.9886775708919435 MPa");
        assert_relative_eq!(p, 4_988_677.570_891_944 * PASCAL, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn test_state_series() -> Result<()> {
        let p = state_series()?;
        assert_eq!(p.len(), 2);
        assert_eq!(
            p.format(Some("Pa"))?,
            "[826.3190098674627, 1058.0985127861811] Pa"
        );
        assert_eq!(p.to_string(), "[826.3190098674627, 1058.0985127861811] Pa");
        Ok(())
    }

    #[test]
    fn test_pressure_volume_work() -> Result<()> {
        let w = pressure_volume_work()?;
        assert_eq!(w.dimension(), Dimension::ENERGY);
        assert_eq!(w.format(Some("J"))?, "[500, 1100] J");
        assert_eq!(w.format(Some("kJ"))?, "[0.5, 1.1] kJ");
        Ok(())
    }

    #[test]
    fn test_pressure_rejects_swapped_inputs() {
        let t = 300. * KELVIN;
        let v = 5. * LITER;
        let n = 10. * MOL;
        let p = pressure(&n, &v, &t).unwrap();
        assert_ne!(p.dimension(), Dimension::PRESSURE);
        assert!(matches!(
            p.format(Some("Pa")),
            Err(QuantityError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_pressure_rejects_zero_volume() {
        let n = 1. * MOL;
        let t = 300. * KELVIN;
        let v = 0. * LITER;
        assert_eq!(pressure(&n, &t, &v).unwrap_err(), QuantityError::DivideByZero);
    }
}
