//! Pocket calculator state machine
//!
//! Left-to-right evaluation with a single pending operator, like a basic
//! four-function calculator. Results follow IEEE-754 doubles; dividing by
//! zero shows `Infinity` or `NaN` instead of failing.

use crate::types::{CalcKey, Operator};

const INITIAL_INPUT: &str = "0";

/// Widest number the display shows before switching to exponent form.
pub const MAX_DISPLAY_LEN: usize = 20;

/// Format a value the way the display shows it.
///
/// Finite values use the shortest decimal that round-trips (`3`, `0.5`).
/// Longer than [`MAX_DISPLAY_LEN`] falls back to exponent form (`1e300`),
/// dropping mantissa digits until it fits.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    } else if value == f64::INFINITY {
        return "Infinity".to_string();
    } else if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }

    let plain = format!("{}", value);
    if plain.len() <= MAX_DISPLAY_LEN {
        return plain;
    }

    let mut exp = format!("{:e}", value);
    let mut precision = MAX_DISPLAY_LEN;
    while exp.len() > MAX_DISPLAY_LEN && precision > 0 {
        precision -= 1;
        exp = format!("{:.*e}", precision, value);
    }
    exp
}

/// Parse a display string back into a value.
///
/// `current_input` always parses; anything else reads as `NaN`.
fn parse_number(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcState {
    current_input: String,
    pending_operand: Option<String>,
    pending_operator: Option<Operator>,
    /// Next digit starts a new number instead of appending.
    clear_on_next_digit: bool,
    /// An operand was entered since the last operator or result.
    operand_entered: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            pending_operand: None,
            pending_operator: None,
            clear_on_next_digit: false,
            operand_entered: false,
        }
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the display shows.
    pub fn display(&self) -> &str {
        &self.current_input
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn value(&self) -> f64 {
        parse_number(&self.current_input)
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.pending_operand.as_deref()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn clear_on_next_digit(&self) -> bool {
        self.clear_on_next_digit
    }

    /// Handle one key. Returns whether the state changed.
    pub fn press(&mut self, key: CalcKey) -> bool {
        let before = self.clone();
        match key {
            CalcKey::Digit(d) => self.digit(d),
            CalcKey::Decimal => self.decimal(),
            CalcKey::ToggleSign => self.toggle_sign(),
            CalcKey::Percent => self.percent(),
            CalcKey::Clear => *self = Self::default(),
            CalcKey::Operator(op) => self.operator(op),
            CalcKey::Equals => self.evaluate(),
        }
        *self != before
    }

    fn digit(&mut self, d: u8) {
        if d > 9 {
            return;
        }
        let ch = char::from(b'0' + d);
        self.operand_entered = true;

        if self.clear_on_next_digit {
            self.current_input = ch.to_string();
            self.clear_on_next_digit = false;
            return;
        }

        match self.current_input.as_str() {
            "0" => self.current_input = ch.to_string(),
            "-0" => self.current_input = format!("-{}", ch),
            _ if !self.value().is_finite() => self.current_input = ch.to_string(),
            s if s.len() >= MAX_DISPLAY_LEN => {}
            _ => self.current_input.push(ch),
        }
    }

    fn decimal(&mut self) {
        self.operand_entered = true;
        if self.clear_on_next_digit || !self.value().is_finite() {
            self.current_input = "0.".to_string();
            self.clear_on_next_digit = false;
            return;
        }
        if !self.current_input.contains('.') && self.current_input.len() < MAX_DISPLAY_LEN {
            self.current_input.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        self.operand_entered = true;
        if let Some(rest) = self.current_input.strip_prefix('-') {
            self.current_input = rest.to_string();
        } else {
            self.current_input.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        self.current_input = format_number(self.value() / 100.0);
        self.clear_on_next_digit = true;
        self.operand_entered = true;
    }

    fn operator(&mut self, op: Operator) {
        // Second operand already typed: fold it in first.
        if self.pending_operator.is_some() && self.operand_entered {
            self.evaluate();
        }
        self.pending_operand = Some(self.current_input.clone());
        self.pending_operator = Some(op);
        self.clear_on_next_digit = true;
        self.operand_entered = false;
    }

    fn evaluate(&mut self) {
        let (Some(operand), Some(op)) = (self.pending_operand.take(), self.pending_operator.take())
        else {
            return;
        };
        let result = op.apply(parse_number(&operand), self.value());
        self.current_input = format_number(result);
        self.clear_on_next_digit = true;
        self.operand_entered = false;
    }
}
