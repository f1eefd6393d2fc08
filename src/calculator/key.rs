//! Key classification for the calculator.
//!
//! Decides whether a raw character belongs to the calculator's input
//! alphabet and, if so, what kind of key it is.

/// Every character the calculator reacts to. Anything else is ignored.
pub const ACCEPTED_KEYS: &str = "0123456789.+-*/=CN";

/// One of the four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol shown in the displays.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Multiplication and division bind tighter than addition and subtraction.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }
}

/// A classified calculator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A decimal digit (0-9).
    Digit(u8),
    /// The decimal point.
    Point,
    /// A binary operator.
    Operator(Operator),
    /// Evaluate the equation.
    Equals,
    /// Reset everything.
    Clear,
    /// Toggle the sign of the current number.
    Negate,
}

impl Key {
    /// Classify a character, returning `None` for anything outside
    /// [`ACCEPTED_KEYS`].
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            'N' => Some(Self::Negate),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// The character this key is typed as.
    pub fn to_char(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('0'),
            Self::Point => '.',
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
            Self::Negate => 'N',
        }
    }

    /// Operators and equals both end the number being typed.
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Operator(_) | Self::Equals)
    }

    /// Digits and the decimal point edit the current number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point)
    }
}

/// Check whether a character belongs to the calculator's input alphabet.
pub fn is_accepted(c: char) -> bool {
    Key::from_char(c).is_some()
}
