// Diatonic modes as rotations of the major-scale step pattern.
//
// Each mode is the Ionian whole/half step pattern started from a different
// position: Dorian begins on its second step, Phrygian on its third, and so
// on. Steps are measured in half steps (1 = half, 2 = whole).

use crate::error::{Result, ScaleError};
use nom::{Parser, character::complete::one_of, combinator::eof};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of steps (and degrees) in a diatonic scale.
pub const DEGREES: usize = 7;

/// Ionian step pattern in half steps.
pub const IONIAN_STEPS: [u8; DEGREES] = [2, 2, 1, 2, 2, 2, 1];

/// Gaps between consecutive scale degrees; element `i` separates degree
/// `i + 1` from degree `i + 2`, and the last element wraps back to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPattern {
    steps: [u8; DEGREES],
}

impl StepPattern {
    pub fn ionian() -> Self {
        StepPattern {
            steps: IONIAN_STEPS,
        }
    }

    /// Rotate left by `offset` positions. Offsets wrap, so `rotated(n)` and
    /// `rotated(n + 7)` are equal.
    pub fn rotated(&self, offset: usize) -> Self {
        let mut steps = self.steps;
        steps.rotate_left(offset % DEGREES);
        StepPattern { steps }
    }

    pub fn steps(&self) -> [u8; DEGREES] {
        self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.steps.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; DEGREES] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Mode for a 1-based index (1 = Ionian .. 7 = Locrian).
    pub fn from_index(index: u8) -> Option<Mode> {
        match index {
            1..=7 => Some(Mode::ALL[index as usize - 1]),
            _ => None,
        }
    }

    /// 1-based index of this mode.
    pub fn index(self) -> u8 {
        match self {
            Mode::Ionian => 1,
            Mode::Dorian => 2,
            Mode::Phrygian => 3,
            Mode::Lydian => 4,
            Mode::Mixolydian => 5,
            Mode::Aeolian => 6,
            Mode::Locrian => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
        }
    }

    /// Parse a mode token. Only a single digit `1`..`7` is accepted.
    pub fn parse(token: &str) -> Result<Mode> {
        parse_mode(token)
            .ok()
            .map(|(_, mode)| mode)
            .ok_or_else(|| ScaleError::InvalidMode(token.to_string()))
    }

    pub fn steps(self) -> StepPattern {
        StepPattern::ionian().rotated(self.index() as usize - 1)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_mode(input: &str) -> nom::IResult<&str, Mode> {
    let (input, digit) = one_of("1234567").parse(input)?;
    let (input, _) = eof.parse(input)?;
    let index = digit as u8 - b'0';
    match Mode::from_index(index) {
        Some(mode) => Ok((input, mode)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::OneOf,
        ))),
    }
}
