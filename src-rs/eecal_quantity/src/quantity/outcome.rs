use std::fmt;

use crate::{interval::Interval, quantity::Quantity, render::RenderOptions};

/// The right-hand side of a quantity operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// Another quantity, combined through the conversion tables
    Quantity(&'a Quantity),
    /// A bare number, which yields bounds instead of a quantity
    Scalar(f64),
}

impl<'a> From<&'a Quantity> for Operand<'a> {
    fn from(quantity: &'a Quantity) -> Self {
        Self::Quantity(quantity)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

/// The result of a quantity operator
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A quantity of the kind given by the conversion tables
    Quantity(Quantity),
    /// Bare bounds, produced when a scalar operand has no conversion
    Bounds(Interval),
    /// The operation has no meaningful result, such as adding two factors
    Undefined,
}

impl Outcome {
    /// Returns the quantity, if the outcome is one
    #[must_use]
    pub fn into_quantity(self) -> Option<Quantity> {
        match self {
            Self::Quantity(quantity) => Some(quantity),
            Self::Bounds(_) | Self::Undefined => None,
        }
    }

    /// Renders the outcome as text
    ///
    /// Quantities follow `options`; bounds are printed as `(min, max)`.
    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        match self {
            Self::Quantity(quantity) => quantity.render(options),
            Self::Bounds(bounds) => format!("({}, {})", bounds.min(), bounds.max()),
            Self::Undefined => "undefined".to_string(),
        }
    }
}

impl From<Quantity> for Outcome {
    fn from(quantity: Quantity) -> Self {
        Self::Quantity(quantity)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderOptions::default()))
    }
}
