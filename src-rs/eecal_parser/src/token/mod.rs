//! Token parsers for the eecal calculator language.
//!
//! - `literal`: numbers and the parts of a quantity literal
//! - `naming`: variable names
//! - `symbol`: operators and delimiters
//!
//! All token parsers consume trailing inline whitespace after the matched
//! content and return the matched content as a [`Token`].

use crate::util::{InputSpan, Parser, Result};

pub mod error;
mod util;
pub use util::{Token, inline_whitespace};

pub mod literal;
pub mod naming;
pub mod symbol;
