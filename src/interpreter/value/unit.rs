use crate::util::num::f64_to_i64_exact;

/// A numeric magnitude paired with the name of its unit, such as `10 km`.
///
/// The unit name is kept exactly as written; whether two names describe the
/// same physical quantity is the unit registry's concern, not the value's.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitValue {
    /// The magnitude, measured in `unit`s.
    pub value: f64,
    /// The unit name. Never empty.
    pub unit:  String,
}

impl std::fmt::Display for UnitValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f64_to_i64_exact(self.value) {
            Some(n) => write!(f, "{n} {}", self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}
