#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Worst-case tolerance algebra for electrical quantities

mod error;
pub mod interval;
mod kind;
mod measure;
pub mod prefix;
mod quantity;
mod render;
mod resistance;
pub mod util;

pub use error::{Operation, QuantityError};
pub use interval::Interval;
pub use kind::{DIV_CONVERSIONS, Kind, MUL_CONVERSIONS};
pub use measure::{Measure, Tolerance, mean_and_tolerance};
pub use quantity::{Operand, Outcome, Quantity};
pub use render::RenderOptions;
pub use resistance::{REFERENCE_TEMPERATURE, Resistance, Temperature};
