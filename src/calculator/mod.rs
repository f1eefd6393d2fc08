//! Calculator core.
//!
//! This module provides functionality to:
//! - Classify raw characters into calculator keys
//! - Track the equation as it is typed, one key at a time
//! - Evaluate the equation and format the result

mod evaluation;
mod key;
mod state;

pub use evaluation::{EvalError, format_number};
pub use key::{ACCEPTED_KEYS, Key, Operator, is_accepted};
pub use state::{Calculator, Phase};
