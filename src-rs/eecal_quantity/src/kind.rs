use std::fmt;

/// The physical kind of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Volts
    Voltage,
    /// Amperes
    Current,
    /// Ohms
    Resistance,
    /// Watts
    Power,
    /// Joules
    Energy,
    /// Seconds
    Time,
    /// A dimensionless ratio
    Factor,
    /// Volts squared, an intermediate of `P = U² / R`
    SqVoltage,
    /// Amperes squared, an intermediate of `P = I² * R`
    SqCurrent,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Voltage,
        Self::Current,
        Self::Resistance,
        Self::Power,
        Self::Energy,
        Self::Time,
        Self::Factor,
        Self::SqVoltage,
        Self::SqCurrent,
    ];

    /// The unit symbol appended to rendered values
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Voltage => "V",
            Self::Current => "A",
            Self::Resistance => "Ω",
            Self::Power => "W",
            Self::Energy => "J",
            Self::Time => "s",
            Self::Factor => "",
            Self::SqVoltage => "V²",
            Self::SqCurrent => "A²",
        }
    }

    /// The kind produced by `self * rhs`, if the combination is defined
    #[must_use]
    pub fn product_with(self, rhs: Self) -> Option<Self> {
        lookup(MUL_CONVERSIONS, self, rhs)
    }

    /// The kind produced by `self / rhs`, if the combination is defined
    #[must_use]
    pub fn quotient_by(self, rhs: Self) -> Option<Self> {
        lookup(DIV_CONVERSIONS, self, rhs)
    }

    /// The kind produced by squaring, if squaring is defined for `self`
    #[must_use]
    pub const fn squared(self) -> Option<Self> {
        match self {
            Self::Voltage => Some(Self::SqVoltage),
            Self::Current => Some(Self::SqCurrent),
            Self::Resistance
            | Self::Power
            | Self::Energy
            | Self::Time
            | Self::Factor
            | Self::SqVoltage
            | Self::SqCurrent => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Voltage => "voltage",
            Self::Current => "current",
            Self::Resistance => "resistance",
            Self::Power => "power",
            Self::Energy => "energy",
            Self::Time => "time",
            Self::Factor => "factor",
            Self::SqVoltage => "squared voltage",
            Self::SqCurrent => "squared current",
        };

        write!(f, "{name}")
    }
}

fn lookup(table: &[(Kind, Kind, Kind)], lhs: Kind, rhs: Kind) -> Option<Kind> {
    table
        .iter()
        .find(|(table_lhs, table_rhs, _)| *table_lhs == lhs && *table_rhs == rhs)
        .map(|(_, _, result)| *result)
}

/// Result kinds of multiplication, as `(lhs, rhs, lhs * rhs)`
///
/// Combinations that are not listed are not defined. Each direction of a
/// commutative product is listed separately.
pub const MUL_CONVERSIONS: &[(Kind, Kind, Kind)] = &[
    // current
    (Kind::Current, Kind::Resistance, Kind::Voltage),
    (Kind::Current, Kind::Current, Kind::SqCurrent),
    (Kind::Current, Kind::Voltage, Kind::Power),
    (Kind::Current, Kind::Factor, Kind::Current),
    // voltage
    (Kind::Voltage, Kind::Current, Kind::Power),
    (Kind::Voltage, Kind::Voltage, Kind::SqVoltage),
    (Kind::Voltage, Kind::Factor, Kind::Voltage),
    // resistance
    (Kind::Resistance, Kind::Current, Kind::Voltage),
    (Kind::Resistance, Kind::Factor, Kind::Resistance),
    // power
    (Kind::Power, Kind::Factor, Kind::Power),
    (Kind::Power, Kind::Time, Kind::Energy),
    // energy
    (Kind::Energy, Kind::Factor, Kind::Energy),
    // time
    (Kind::Time, Kind::Factor, Kind::Time),
    // squared voltage
    (Kind::SqVoltage, Kind::Factor, Kind::SqVoltage),
    // squared current
    (Kind::SqCurrent, Kind::Factor, Kind::SqCurrent),
    (Kind::SqCurrent, Kind::Resistance, Kind::Power),
    // factor
    (Kind::Factor, Kind::Voltage, Kind::Voltage),
    (Kind::Factor, Kind::Current, Kind::Current),
    (Kind::Factor, Kind::Resistance, Kind::Resistance),
    (Kind::Factor, Kind::Power, Kind::Power),
    (Kind::Factor, Kind::Factor, Kind::Factor),
];

/// Result kinds of division, as `(lhs, rhs, lhs / rhs)`
///
/// Combinations that are not listed are not defined.
pub const DIV_CONVERSIONS: &[(Kind, Kind, Kind)] = &[
    // current
    (Kind::Current, Kind::Current, Kind::Factor),
    (Kind::Current, Kind::Factor, Kind::Current),
    // voltage
    (Kind::Voltage, Kind::Resistance, Kind::Current),
    (Kind::Voltage, Kind::Current, Kind::Resistance),
    (Kind::Voltage, Kind::Voltage, Kind::Factor),
    (Kind::Voltage, Kind::Factor, Kind::Voltage),
    // resistance
    (Kind::Resistance, Kind::Resistance, Kind::Factor),
    (Kind::Resistance, Kind::Factor, Kind::Resistance),
    // power
    (Kind::Power, Kind::Voltage, Kind::Current),
    (Kind::Power, Kind::Current, Kind::Voltage),
    (Kind::Power, Kind::Power, Kind::Factor),
    (Kind::Power, Kind::Factor, Kind::Power),
    // energy
    (Kind::Energy, Kind::Time, Kind::Power),
    (Kind::Energy, Kind::Energy, Kind::Factor),
    (Kind::Energy, Kind::Factor, Kind::Energy),
    // time
    (Kind::Time, Kind::Time, Kind::Factor),
    (Kind::Time, Kind::Factor, Kind::Time),
    // squared voltage
    (Kind::SqVoltage, Kind::Resistance, Kind::Power),
    (Kind::SqVoltage, Kind::Power, Kind::Resistance),
    (Kind::SqVoltage, Kind::Voltage, Kind::Voltage),
    (Kind::SqVoltage, Kind::SqVoltage, Kind::Factor),
    (Kind::SqVoltage, Kind::Factor, Kind::SqVoltage),
    // squared current
    (Kind::SqCurrent, Kind::Current, Kind::Current),
    (Kind::SqCurrent, Kind::SqCurrent, Kind::Factor),
    (Kind::SqCurrent, Kind::Factor, Kind::SqCurrent),
    // factor
    (Kind::Factor, Kind::Factor, Kind::Factor),
];
