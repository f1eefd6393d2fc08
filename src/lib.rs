//! A keystroke-driven four-function calculator.
//!
//! Front ends forward raw key characters to [`Calculator::input`] and copy
//! [`Calculator::short_output`] and [`Calculator::long_output`] onto the
//! screen. [`Keymap`] translates front-end key aliases into the calculator's
//! alphabet and [`config`] loads user settings for the bundled CLI.

pub mod calculator;
pub mod config;
pub mod display;
pub mod keymap;

pub use calculator::{Calculator, EvalError, Key, Operator, Phase};
pub use config::{Config, ConfigError};
pub use display::DisplaySnapshot;
pub use keymap::Keymap;
