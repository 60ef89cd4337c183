//! Quantity literals such as `4.7kΩ 1% 100ppm`

use std::fmt;

use crate::node::Node;

/// The unit suffix of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `V`
    Volt,
    /// `A`
    Ampere,
    /// `Ω`
    Ohm,
    /// `W`
    Watt,
    /// `J`
    Joule,
    /// `s`
    Second,
    /// `f`, a dimensionless factor
    Factor,
}

/// A node containing a unit suffix
pub type UnitNode = Node<Unit>;

impl Unit {
    /// Looks up the unit for a suffix character
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'V' => Some(Self::Volt),
            'A' => Some(Self::Ampere),
            // the Greek capital omega and the ohm sign
            'Ω' | 'Ω' => Some(Self::Ohm),
            'W' => Some(Self::Watt),
            'J' => Some(Self::Joule),
            's' => Some(Self::Second),
            'f' => Some(Self::Factor),
            _ => None,
        }
    }

    /// The suffix character of the unit
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Volt => 'V',
            Self::Ampere => 'A',
            Self::Ohm => 'Ω',
            Self::Watt => 'W',
            Self::Joule => 'J',
            Self::Second => 's',
            Self::Factor => 'f',
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A quantity literal
///
/// `value` already includes the SI prefix, so `4.7k` is stored as `4700.0`.
/// A literal without a unit is a resistance.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: f64,
    unit: Option<UnitNode>,
    tolerance_percent: Option<Node<f64>>,
    coefficient_ppm: Option<Node<i32>>,
}

/// A node containing a literal
pub type LiteralNode = Node<Literal>;

impl Literal {
    #[must_use]
    pub const fn new(
        value: f64,
        unit: Option<UnitNode>,
        tolerance_percent: Option<Node<f64>>,
        coefficient_ppm: Option<Node<i32>>,
    ) -> Self {
        Self {
            value,
            unit,
            tolerance_percent,
            coefficient_ppm,
        }
    }

    /// The nominal value with the prefix applied
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn unit(&self) -> Option<&UnitNode> {
        self.unit.as_ref()
    }

    /// The tolerance as written, in percent
    #[must_use]
    pub const fn tolerance_percent(&self) -> Option<&Node<f64>> {
        self.tolerance_percent.as_ref()
    }

    /// The temperature coefficient as written, in ppm per °C
    #[must_use]
    pub const fn coefficient_ppm(&self) -> Option<&Node<i32>> {
        self.coefficient_ppm.as_ref()
    }
}
