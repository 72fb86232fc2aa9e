/// Unit-tagged value representation.
///
/// Defines the `UnitValue` type, which pairs a numeric magnitude with the name
/// of its unit, such as `10 km`. Unit values participate in arithmetic and in
/// conversions through the unit registry.
pub mod unit;
/// Magnitude classification helpers.
///
/// Provides the rounding and integer/float classification rules applied to
/// every computed numeric magnitude before it becomes a value.
pub mod numeric;
/// Binary operation rules.
///
/// Implements the type lattice that decides, from the operand kinds, how a
/// binary operator combines two values and what kind the result has.
pub mod binary;

pub mod core;
