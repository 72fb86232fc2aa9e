use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{numeric::round_magnitude, unit::UnitValue},
    },
};

/// The physical quantity a unit measures.
///
/// Conversions are only defined between units of the same quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// Lengths and distances.
    Length,
    /// Masses and weights.
    Mass,
    /// Durations.
    Time,
    /// Temperatures.
    Temperature,
    /// Data sizes.
    Data,
}

/// A named unit, described as a linear map into its quantity's base unit.
///
/// A magnitude `v` measured in this unit equals `v * scale + offset` base
/// units. Plain ratio units have an offset of zero; only temperatures need
/// the affine form.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    /// The full unit name, matched case-insensitively.
    pub name:     String,
    /// The short symbol, matched exactly.
    pub symbol:   String,
    /// The physical quantity this unit measures.
    pub quantity: Quantity,
    /// Base units per one of this unit.
    pub scale:    f64,
    /// Offset into the base unit, in base units.
    pub offset:   f64,
}

impl UnitDef {
    fn convert_to(&self, value: f64, target: &Self) -> Option<f64> {
        if self.quantity != target.quantity {
            return None;
        }

        let base = value * self.scale + self.offset;
        Some((base - target.offset) / target.scale)
    }
}

/// A registry of named units and the conversions between them.
///
/// The registry resolves unit names written in source code, converts
/// magnitudes between units of the same quantity, and accepts custom ratio
/// definitions layered on top of the default catalog.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<UnitDef>,
}

impl UnitRegistry {
    /// Creates a registry preloaded with the default catalog: metric and
    /// imperial lengths, masses, durations, temperatures, and data sizes.
    #[must_use]
    pub fn with_defaults() -> Self {
        use Quantity::{Data, Length, Mass, Temperature, Time};

        let units = vec![
            ratio("millimeter", "mm", Length, 0.001),
            ratio("centimeter", "cm", Length, 0.01),
            ratio("meter", "m", Length, 1.0),
            ratio("kilometer", "km", Length, 1000.0),
            ratio("inch", "inch", Length, 0.0254),
            ratio("foot", "ft", Length, 0.3048),
            ratio("yard", "yd", Length, 0.9144),
            ratio("mile", "mi", Length, 1609.344),
            ratio("milligram", "mg", Mass, 0.001),
            ratio("gram", "g", Mass, 1.0),
            ratio("kilogram", "kg", Mass, 1000.0),
            ratio("tonne", "t", Mass, 1_000_000.0),
            ratio("ounce", "oz", Mass, 28.349_523_125),
            ratio("pound", "lb", Mass, 453.592_37),
            ratio("millisecond", "ms", Time, 0.001),
            ratio("second", "s", Time, 1.0),
            ratio("minute", "min", Time, 60.0),
            ratio("hour", "h", Time, 3600.0),
            ratio("day", "d", Time, 86_400.0),
            ratio("celsius", "C", Temperature, 1.0),
            UnitDef { name:     "fahrenheit".to_string(),
                      symbol:   "F".to_string(),
                      quantity: Temperature,
                      scale:    5.0 / 9.0,
                      offset:   -160.0 / 9.0, },
            UnitDef { name:     "kelvin".to_string(),
                      symbol:   "K".to_string(),
                      quantity: Temperature,
                      scale:    1.0,
                      offset:   -273.15, },
            ratio("bit", "b", Data, 0.125),
            ratio("byte", "B", Data, 1.0),
            ratio("kilobyte", "kB", Data, 1000.0),
            ratio("megabyte", "MB", Data, 1_000_000.0),
            ratio("gigabyte", "GB", Data, 1_000_000_000.0),
            ratio("terabyte", "TB", Data, 1_000_000_000_000.0),
        ];

        let mut registry = Self { units };
        registry.define_ratio("week", "wk", "day", 7.0);

        registry
    }

    /// Looks up a unit by symbol (exact) or by name (case-insensitive).
    ///
    /// Symbols win over names, so `m` is the meter even though it is also a
    /// prefix of several names.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&UnitDef> {
        self.units
            .iter()
            .find(|unit| unit.symbol == name)
            .or_else(|| self.units.iter().find(|unit| unit.name.eq_ignore_ascii_case(name)))
    }

    /// Converts a magnitude between two named units.
    ///
    /// Identical names pass the magnitude through unchanged, which is also how
    /// bare numbers acquire a unit label. Unknown names fail. A known pair
    /// with no conversion path between their quantities relabels the magnitude
    /// with the target name instead of failing.
    ///
    /// # Parameters
    /// - `value`: The magnitude measured in `from`.
    /// - `from`: The source unit name.
    /// - `to`: The target unit name.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(UnitValue)`: The converted (or relabeled) magnitude.
    /// - `Err(RuntimeError::UnknownUnit)`: If either name is not registered.
    ///
    /// # Example
    /// ```
    /// use unical::units::UnitRegistry;
    ///
    /// let registry = UnitRegistry::with_defaults();
    /// let converted = registry.convert(100.0, "m", "km", 1).unwrap();
    ///
    /// assert_eq!(converted.value, 0.1);
    /// assert_eq!(converted.unit, "km");
    /// ```
    pub fn convert(&self, value: f64, from: &str, to: &str, line: usize) -> EvalResult<UnitValue> {
        if from == to {
            return Ok(UnitValue { value,
                                  unit: to.to_string(), });
        }

        let source = self.find(from).ok_or_else(|| RuntimeError::UnknownUnit { name: from.to_string(),
                                                                               line })?;
        let target = self.find(to).ok_or_else(|| RuntimeError::UnknownUnit { name: to.to_string(),
                                                                             line })?;

        // No path between different quantities: relabel rather than fail.
        match source.convert_to(value, target) {
            Some(converted) => Ok(UnitValue { value: round_magnitude(converted),
                                              unit:  to.to_string(), }),
            None => Ok(UnitValue { value,
                                   unit: to.to_string(), }),
        }
    }

    /// Registers a custom unit as a fixed ratio to an existing one.
    ///
    /// One `name` equals `factor` times the `base` unit, and the new unit
    /// shares its quantity. Returns `false` without registering anything if
    /// the name or symbol is already taken, or if the base unit is unknown.
    ///
    /// # Example
    /// ```
    /// use unical::units::UnitRegistry;
    ///
    /// let mut registry = UnitRegistry::with_defaults();
    ///
    /// assert!(registry.define_ratio("fortnight", "ftn", "week", 2.0));
    /// assert!(!registry.define_ratio("fortnight", "ftn", "week", 2.0));
    ///
    /// let converted = registry.convert(1.0, "fortnight", "day", 1).unwrap();
    /// assert_eq!(converted.value, 14.0);
    /// ```
    pub fn define_ratio(&mut self, name: &str, symbol: &str, base: &str, factor: f64) -> bool {
        if self.find(name).is_some() || self.find(symbol).is_some() {
            return false;
        }

        let Some(base_unit) = self.find(base) else {
            return false;
        };
        let definition = UnitDef { name:     name.to_string(),
                                   symbol:   symbol.to_string(),
                                   quantity: base_unit.quantity,
                                   scale:    base_unit.scale * factor,
                                   offset:   base_unit.offset, };

        self.units.push(definition);
        true
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn ratio(name: &str, symbol: &str, quantity: Quantity, scale: f64) -> UnitDef {
    UnitDef { name: name.to_string(),
              symbol: symbol.to_string(),
              quantity,
              scale,
              offset: 0.0 }
}
