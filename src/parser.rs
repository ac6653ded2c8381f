use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::{BLANK, CELLS};
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    NotANumber(String),
    WrongLength(usize),
    OutOfRange(i32),
    NoBlank,
    MultipleBlanks,
    Duplicate(i32),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::NotANumber(ref token) => write!(f, "Not a number: {}", token),
            ParserErr::WrongLength(len) => {
                write!(f, "Expected {} values, got {}", CELLS, len)
            }
            ParserErr::OutOfRange(value) => {
                write!(f, "Value {} out of range 0..{}", value, CELLS - 1)
            }
            ParserErr::NoBlank => write!(f, "No blank (0)"),
            ParserErr::MultipleBlanks => write!(f, "More than one blank (0)"),
            ParserErr::Duplicate(value) => write!(f, "Value {} appears more than once", value),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for State {
    type Err = ParserErr;

    /// Accepts 16 numbers separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| ParserErr::NotANumber(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        State::parse(&values)
    }
}

pub(crate) fn validate(values: &[i32]) -> Result<[u8; CELLS], ParserErr> {
    if values.len() != CELLS {
        return Err(ParserErr::WrongLength(values.len()));
    }

    if let Some(&value) = values.iter().find(|&&v| v < 0 || v >= CELLS as i32) {
        return Err(ParserErr::OutOfRange(value));
    }

    match values.iter().filter(|&&v| v == i32::from(BLANK)).count() {
        0 => return Err(ParserErr::NoBlank),
        1 => {}
        _ => return Err(ParserErr::MultipleBlanks),
    }

    let mut seen = [false; CELLS];
    let mut cells = [BLANK; CELLS];
    for (cell, &value) in cells.iter_mut().zip(values) {
        if seen[value as usize] {
            return Err(ParserErr::Duplicate(value));
        }
        seen[value as usize] = true;
        *cell = value as u8;
    }

    Ok(cells)
}
