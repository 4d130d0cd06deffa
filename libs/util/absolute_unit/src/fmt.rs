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
use crate::{
    error::Result,
    magnitude::{fmt_value, Values},
    registry, Magnitude, Quantity,
};
use std::fmt;

impl<M: Magnitude> Quantity<M> {
    /// The magnitude expressed in the registered unit `symbol`.
    pub fn convert_to(&self, symbol: &str) -> Result<M> {
        let unit = registry().lookup(symbol)?;
        self.check_dimension(unit.dimension())?;
        Ok(self.magnitude().map_values(|v| unit.from_base(v)))
    }

    /// Render in `unit` if given, otherwise in the default unit for this dimension.
    pub fn format(&self, unit: Option<&str>) -> Result<String> {
        match unit {
            Some(symbol) => {
                let values = self.convert_to(symbol)?;
                Ok(format!("{} {}", Values(&values), symbol))
            }
            None => Ok(self.to_string()),
        }
    }
}

/// Renders in the registry's default unit for the dimension. Dimensions without one print
/// the base magnitude followed by their base-unit exponents.
///
/// Scalars additionally pick an engineering prefix when the unit allows one, and switch to
/// exponent notation when the shown value falls outside `[1e-2, 1e4)`.
impl<M: Magnitude> fmt::Display for Quantity<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let registry = registry();
        match registry.default_for(&self.dimension()) {
            Some(unit) => {
                if let Some(v) = self.magnitude().as_scalar() {
                    let max_prefix = registry.max_prefix_for(&self.dimension());
                    let (value, prefix) = engineering(unit.from_base(v), max_prefix);
                    fmt_scalar(value, f)?;
                    return write!(f, " {}{}", prefix, unit.symbol());
                }
                self.magnitude()
                    .map_values(|v| unit.from_base(v))
                    .fmt_values(f)?;
                write!(f, " {}", unit.symbol())
            }
            None => {
                self.magnitude().fmt_values(f)?;
                if !self.is_dimensionless() {
                    write!(f, " {}", self.dimension())?;
                }
                Ok(())
            }
        }
    }
}

/// Split `value` into a mantissa and the prefix for a power of 1000. Values at or above
/// `max_prefix`, at or below 1e-12, or with no `max_prefix` are left alone.
fn engineering(value: f64, max_prefix: Option<f64>) -> (f64, &'static str) {
    let max_prefix = match max_prefix {
        Some(max_prefix) => max_prefix,
        None => return (value, ""),
    };
    let abs = value.abs();
    if !(abs > 1e-12 && abs < max_prefix) {
        return (value, "");
    }
    let exponent = (abs.log10().floor() as i32).div_euclid(3) * 3;
    (value / 10f64.powi(exponent), prefix_symbol(exponent))
}

fn prefix_symbol(exponent: i32) -> &'static str {
    match exponent {
        24 => "Y",
        21 => "Z",
        18 => "E",
        15 => "P",
        12 => "T",
        9 => "G",
        6 => "M",
        3 => "k",
        -3 => "m",
        -6 => "µ",
        -9 => "n",
        -12 => "p",
        _ => "",
    }
}

fn fmt_scalar(value: f64, f: &mut fmt::Formatter) -> fmt::Result {
    if value == 0. || (1e-2..1e4).contains(&value.abs()) {
        return fmt_value(value, f);
    }
    match f.precision() {
        Some(precision) => write!(f, "{:.*e}", precision, value),
        None => write!(f, "{:e}", value),
    }
}
