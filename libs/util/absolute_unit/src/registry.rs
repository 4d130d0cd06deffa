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
use crate::{error::Result, Dimension, QuantityError};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Metric prefixes usable with `UnitRegistry::define_prefixed`.
const PREFIXES: [(&str, &str, f64); 20] = [
    ("Y", "yotta", 1e24),
    ("Z", "zetta", 1e21),
    ("E", "exa", 1e18),
    ("P", "peta", 1e15),
    ("T", "tera", 1e12),
    ("G", "giga", 1e9),
    ("M", "mega", 1e6),
    ("k", "kilo", 1e3),
    ("h", "hecto", 1e2),
    ("da", "deca", 1e1),
    ("d", "deci", 1e-1),
    ("c", "centi", 1e-2),
    ("m", "milli", 1e-3),
    ("µ", "micro", 1e-6),
    ("n", "nano", 1e-9),
    ("p", "pico", 1e-12),
    ("f", "femto", 1e-15),
    ("a", "atto", 1e-18),
    ("z", "zepto", 1e-21),
    ("y", "yocto", 1e-24),
];

/// A named unit: how to get from a value in this unit to the SI base magnitude.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitDefinition {
    symbol: String,
    name: String,
    dimension: Dimension,
    scale: f64,
    offset: f64,
}

impl UnitDefinition {
    pub fn new<S: Into<String>, N: Into<String>>(
        symbol: S,
        name: N,
        dimension: Dimension,
        scale: f64,
    ) -> Self {
        Self::affine(symbol, name, dimension, scale, 0.)
    }

    /// A unit whose zero point is shifted relative to the SI base unit, e.g. degrees celsius.
    pub fn affine<S: Into<String>, N: Into<String>>(
        symbol: S,
        name: N,
        dimension: Dimension,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            dimension,
            scale,
            offset,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_affine(&self) -> bool {
        self.offset != 0.
    }

    pub fn to_base(&self, value: f64) -> f64 {
        (value + self.offset) * self.scale
    }

    pub fn from_base(&self, magnitude: f64) -> f64 {
        magnitude / self.scale - self.offset
    }

    fn with_prefix(&self, prefix: &str, prefix_name: &str, factor: f64) -> Self {
        Self {
            symbol: format!("{}{}", prefix, self.symbol),
            name: format!("{}{}", prefix_name, self.name),
            dimension: self.dimension,
            scale: factor * self.scale,
            offset: self.offset,
        }
    }
}

/// The set of units known by symbol, plus the unit each dimension displays in by default.
#[derive(Debug, Default)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDefinition>,
    defaults: HashMap<Dimension, DisplayDefault>,
}

/// The display unit for one dimension, and the largest magnitude (in that unit) that
/// is still shown with a metric prefix. `None` never prefixes.
#[derive(Clone, Debug, PartialEq)]
struct DisplayDefault {
    symbol: String,
    max_prefix: Option<f64>,
}

impl UnitRegistry {
    /// Register a unit. Symbols are unique; a repeat is a programming error.
    pub fn define(&mut self, unit: UnitDefinition) -> &UnitDefinition {
        assert!(
            !self.units.contains_key(unit.symbol()),
            "duplicate unit symbol: {}",
            unit.symbol()
        );
        trace!("defining unit {} ({})", unit.symbol(), unit.name());
        let symbol = unit.symbol().to_owned();
        self.units.entry(symbol).or_insert(unit)
    }

    /// Register a unit and one derived unit per listed prefix symbol.
    pub fn define_prefixed(&mut self, unit: UnitDefinition, prefixes: &[&str]) {
        for &prefix in prefixes {
            let (symbol, name, factor) = PREFIXES
                .iter()
                .find(|(symbol, _, _)| *symbol == prefix)
                .unwrap_or_else(|| panic!("unknown metric prefix: {}", prefix));
            self.define(unit.with_prefix(symbol, name, *factor));
        }
        self.define(unit);
    }

    /// Make `symbol` the display unit for its dimension. Scalars below `max_prefix` in
    /// that unit are shown with an engineering prefix (`k`, `M`, `µ`, ...).
    pub fn set_default(&mut self, symbol: &str, max_prefix: Option<f64>) {
        let dimension = self
            .units
            .get(symbol)
            .unwrap_or_else(|| panic!("default unit {} is not defined", symbol))
            .dimension();
        let previous = self.defaults.insert(
            dimension,
            DisplayDefault {
                symbol: symbol.to_owned(),
                max_prefix,
            },
        );
        assert!(
            previous.is_none(),
            "dimension [{}] already displays as {:?}",
            dimension,
            previous.map(|d| d.symbol)
        );
    }

    pub fn lookup(&self, symbol: &str) -> Result<&UnitDefinition> {
        self.units
            .get(symbol)
            .ok_or_else(|| QuantityError::UnknownUnit(symbol.to_owned()))
    }

    pub fn default_for(&self, dimension: &Dimension) -> Option<&UnitDefinition> {
        self.defaults
            .get(dimension)
            .and_then(|default| self.units.get(&default.symbol))
    }

    /// Upper bound for prefixing scalars shown in the default unit of `dimension`.
    pub fn max_prefix_for(&self, dimension: &Dimension) -> Option<f64> {
        self.defaults
            .get(dimension)
            .and_then(|default| default.max_prefix)
    }

    pub fn to_base(&self, symbol: &str, value: f64) -> Result<f64> {
        Ok(self.lookup(symbol)?.to_base(value))
    }

    pub fn from_base(&self, symbol: &str, magnitude: f64) -> Result<f64> {
        Ok(self.lookup(symbol)?.from_base(magnitude))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.values()
    }

    /// SI base and derived units, common non-SI units, and their display defaults.
    pub fn si() -> Self {
        use Dimension as D;

        let mut r = Self::default();

        // Base
        r.define_prefixed(
            UnitDefinition::new("m", "meter", D::LENGTH, 1.),
            &["k", "c", "m", "µ", "n"],
        );
        r.define(UnitDefinition::new("kg", "kilogram", D::MASS, 1.));
        r.define_prefixed(UnitDefinition::new("g", "gram", D::MASS, 1e-3), &["m", "µ", "n"]);
        r.define_prefixed(UnitDefinition::new("s", "second", D::TIME, 1.), &["m", "µ", "n"]);
        r.define_prefixed(UnitDefinition::new("A", "ampere", D::CURRENT, 1.), &["m", "µ"]);
        r.define(UnitDefinition::new("K", "kelvin", D::TEMPERATURE, 1.));
        r.define_prefixed(UnitDefinition::new("mol", "mole", D::AMOUNT, 1.), &["k", "m", "µ"]);
        r.define(UnitDefinition::new("cd", "candela", D::LUMINOUS_INTENSITY, 1.));

        // Derived
        r.define(UnitDefinition::new("m²", "square meter", D::AREA, 1.));
        r.define(UnitDefinition::new("m³", "cubic meter", D::VOLUME, 1.));
        r.define_prefixed(UnitDefinition::new("Hz", "hertz", D::FREQUENCY, 1.), &["k", "M", "G"]);
        r.define_prefixed(UnitDefinition::new("N", "newton", D::FORCE, 1.), &["k", "M"]);
        r.define_prefixed(
            UnitDefinition::new("Pa", "pascal", D::PRESSURE, 1.),
            &["h", "k", "M", "G"],
        );
        r.define_prefixed(UnitDefinition::new("J", "joule", D::ENERGY, 1.), &["k", "M"]);
        r.define_prefixed(UnitDefinition::new("W", "watt", D::POWER, 1.), &["k", "M", "G"]);
        r.define(UnitDefinition::new("C", "coulomb", D::CHARGE, 1.));
        r.define_prefixed(UnitDefinition::new("V", "volt", D::VOLTAGE, 1.), &["k", "m"]);
        r.define_prefixed(UnitDefinition::new("F", "farad", D::CAPACITANCE, 1.), &["µ", "n", "p"]);
        r.define_prefixed(UnitDefinition::new("Ω", "ohm", D::RESISTANCE, 1.), &["k", "M"]);
        r.define(UnitDefinition::new("S", "siemens", D::CONDUCTANCE, 1.));
        r.define(UnitDefinition::new("Wb", "weber", D::MAGNETIC_FLUX, 1.));
        r.define(UnitDefinition::new("T", "tesla", D::MAGNETIC_FLUX_DENSITY, 1.));
        r.define(UnitDefinition::new("H", "henry", D::INDUCTANCE, 1.));

        // Compound
        let molar_energy = D::ENERGY / D::AMOUNT;
        r.define(UnitDefinition::new("m/s", "meter per second", D::VELOCITY, 1.));
        r.define(UnitDefinition::new("m/s²", "meter per second squared", D::ACCELERATION, 1.));
        r.define(UnitDefinition::new("kg/m³", "kilogram per cubic meter", D::DENSITY, 1.));
        r.define(UnitDefinition::new("g/m³", "gram per cubic meter", D::DENSITY, 1e-3));
        r.define(UnitDefinition::new("mol/m³", "mole per cubic meter", D::AMOUNT / D::VOLUME, 1.));
        r.define(UnitDefinition::new("m³/mol", "cubic meter per mole", D::VOLUME / D::AMOUNT, 1.));
        r.define(UnitDefinition::new("g/mol", "gram per mole", D::MASS / D::AMOUNT, 1e-3));
        r.define_prefixed(UnitDefinition::new("J/mol", "joule per mole", molar_energy, 1.), &["k"]);
        r.define(UnitDefinition::new("J/K", "joule per kelvin", D::ENERGY / D::TEMPERATURE, 1.));
        r.define(UnitDefinition::new(
            "J/mol/K",
            "joule per mole kelvin",
            molar_energy / D::TEMPERATURE,
            1.,
        ));
        r.define(UnitDefinition::new("J/kg", "joule per kilogram", D::ENERGY / D::MASS, 1.));
        r.define(UnitDefinition::new(
            "J/kg/K",
            "joule per kilogram kelvin",
            D::ENERGY / D::MASS / D::TEMPERATURE,
            1.,
        ));
        r.define_prefixed(
            UnitDefinition::new("Pa*s", "pascal second", D::PRESSURE * D::TIME, 1.),
            &["m"],
        );
        r.define(UnitDefinition::new("N/m", "newton per meter", D::FORCE / D::LENGTH, 1.));
        r.define(UnitDefinition::new(
            "W/m/K",
            "watt per meter kelvin",
            D::POWER / D::LENGTH / D::TEMPERATURE,
            1.,
        ));

        // Non-SI
        r.define_prefixed(UnitDefinition::new("l", "liter", D::VOLUME, 1e-3), &["m", "µ"]);
        r.define(UnitDefinition::new("L", "liter", D::VOLUME, 1e-3));
        r.define_prefixed(UnitDefinition::new("bar", "bar", D::PRESSURE, 1e5), &["m"]);
        r.define(UnitDefinition::new("atm", "atmosphere", D::PRESSURE, 101_325.));
        r.define_prefixed(UnitDefinition::new("cal", "calorie", D::ENERGY, 4.184), &["k"]);
        r.define(UnitDefinition::new("min", "minute", D::TIME, 60.));
        r.define(UnitDefinition::new("h", "hour", D::TIME, 3_600.));
        r.define(UnitDefinition::new("d", "day", D::TIME, 86_400.));
        r.define(UnitDefinition::new("Å", "angstrom", D::LENGTH, 1e-10));
        r.define(UnitDefinition::affine("°C", "degree celsius", D::TEMPERATURE, 1., 273.15));
        r.define(UnitDefinition::affine(
            "°F",
            "degree fahrenheit",
            D::TEMPERATURE,
            5. / 9.,
            459.67,
        ));
        r.define(UnitDefinition::new("°R", "degree rankine", D::TEMPERATURE, 5. / 9.));

        const MEGA: Option<f64> = Some(1e6);
        const PETA: Option<f64> = Some(1e15);
        for (symbol, max_prefix) in [
            ("m", MEGA),
            ("g", MEGA),
            ("s", Some(1e3)),
            ("A", MEGA),
            ("K", None),
            ("mol", MEGA),
            ("cd", None),
            ("m²", None),
            ("m³", None),
            ("Hz", PETA),
            ("N", PETA),
            ("Pa", PETA),
            ("J", PETA),
            ("W", PETA),
            ("C", None),
            ("V", PETA),
            ("F", PETA),
            ("Ω", PETA),
            ("S", PETA),
            ("Wb", PETA),
            ("T", PETA),
            ("H", PETA),
            ("m/s", MEGA),
            ("m/s²", None),
            ("mol/m³", MEGA),
            ("m³/mol", None),
            ("g/m³", MEGA),
            ("J/mol", PETA),
            ("J/K", PETA),
            ("J/mol/K", PETA),
            ("J/kg", PETA),
            ("J/kg/K", PETA),
            ("Pa*s", PETA),
            ("N/m", PETA),
            ("W/m/K", PETA),
            ("g/mol", MEGA),
        ] {
            r.set_default(symbol, max_prefix);
        }

        debug!(
            "unit registry ready: {} units, {} display defaults",
            r.len(),
            r.defaults.len()
        );
        r
    }
}

static REGISTRY: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::si);

/// The process-wide registry of SI units; built on first use, read-only afterwards.
pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion_round_trips() {
        for unit in registry().units() {
            for value in [-40., 0., 1., 25., 1.5e7] {
                let back = unit.from_base(unit.to_base(value));
                assert_relative_eq!(back, value, epsilon = 1e-9, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_prefixes_compose() {
        let mpa = registry().lookup("MPa").unwrap();
        assert_eq!(mpa.scale(), 1e6);
        assert_eq!(mpa.dimension(), Dimension::PRESSURE);
        assert_eq!(mpa.name(), "megapascal");
        assert_relative_eq!(registry().lookup("ml").unwrap().scale(), 1e-6);
        assert_relative_eq!(registry().lookup("kJ/mol").unwrap().scale(), 1e3);
    }

    #[test]
    fn test_affine_temperatures() {
        assert_relative_eq!(registry().to_base("°C", 25.).unwrap(), 298.15);
        assert_relative_eq!(registry().from_base("°C", 273.15).unwrap(), 0.);
        assert_relative_eq!(registry().to_base("°F", 32.).unwrap(), 273.15, epsilon = 1e-9);
        assert_relative_eq!(registry().to_base("°R", 491.67).unwrap(), 273.15, epsilon = 1e-9);
        assert!(registry().lookup("°C").unwrap().is_affine());
        assert!(!registry().lookup("K").unwrap().is_affine());
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            registry().lookup("furlong"),
            Err(QuantityError::UnknownUnit("furlong".to_owned()))
        );
        assert!(registry().to_base("parsec", 1.).is_err());
    }

    #[test]
    fn test_defaults() {
        let r = registry();
        assert_eq!(r.default_for(&Dimension::PRESSURE).unwrap().symbol(), "Pa");
        assert_eq!(r.default_for(&Dimension::ENERGY).unwrap().symbol(), "J");
        assert_eq!(r.default_for(&Dimension::TEMPERATURE).unwrap().symbol(), "K");
        assert_eq!(r.default_for(&Dimension::VOLUME).unwrap().symbol(), "m³");
        assert_eq!(r.default_for(&Dimension::MASS).unwrap().symbol(), "g");
        assert_eq!(r.max_prefix_for(&Dimension::PRESSURE), Some(1e15));
        assert_eq!(r.max_prefix_for(&Dimension::MASS), Some(1e6));
        assert_eq!(r.max_prefix_for(&Dimension::TEMPERATURE), None);
        assert_eq!(r.max_prefix_for(&(Dimension::ENERGY * Dimension::CURRENT)), None);
        assert!(r
            .default_for(&(Dimension::ENERGY * Dimension::CURRENT))
            .is_none());
    }

    #[test]
    #[should_panic(expected = "already displays as")]
    fn test_second_default_for_a_dimension_is_fatal() {
        let mut r = UnitRegistry::default();
        r.define(UnitDefinition::new("Pa", "pascal", Dimension::PRESSURE, 1.));
        r.define(UnitDefinition::new("bar", "bar", Dimension::PRESSURE, 1e5));
        r.set_default("Pa", Some(1e15));
        r.set_default("bar", None);
    }

    #[test]
    #[should_panic(expected = "duplicate unit symbol: K")]
    fn test_duplicate_symbol_is_fatal() {
        let mut r = UnitRegistry::default();
        r.define(UnitDefinition::new("K", "kelvin", Dimension::TEMPERATURE, 1.));
        r.define(UnitDefinition::new("K", "kelvin", Dimension::TEMPERATURE, 1.));
    }

    #[test]
    #[should_panic(expected = "duplicate unit symbol: kg")]
    fn test_prefixed_collision_is_fatal() {
        let mut r = UnitRegistry::default();
        r.define(UnitDefinition::new("kg", "kilogram", Dimension::MASS, 1.));
        r.define_prefixed(UnitDefinition::new("g", "gram", Dimension::MASS, 1e-3), &["k"]);
    }
}
