use crate::error::{Result, ScaleError};
use nom::{
    Parser,
    branch::alt,
    character::complete::{char, one_of},
    combinator::{eof, map_opt, opt},
    multi::many1,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of half steps in an octave.
pub const HALF_STEPS: i32 = 12;

/// The seven natural note letters, in cyclic order starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Position of the natural (unaltered) letter on the half-step cycle,
    /// C = 0 through B = 11.
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// The following letter name, wrapping B to C.
    pub fn next(self) -> Letter {
        match self {
            Letter::C => Letter::D,
            Letter::D => Letter::E,
            Letter::E => Letter::F,
            Letter::F => Letter::G,
            Letter::G => Letter::A,
            Letter::A => Letter::B,
            Letter::B => Letter::C,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A spelled pitch: a letter plus a signed accidental count.
/// Positive counts are sharps, negative counts are flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    pub accidental: i32,
}

impl Pitch {
    pub fn new(letter: Letter, accidental: i32) -> Self {
        Pitch { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        Pitch::new(letter, 0)
    }

    /// Parse a pitch name: one of `C D E F G A B`, optionally followed by a
    /// run of `#` or a run of `b`. Mixed runs are rejected.
    pub fn parse(token: &str) -> Result<Self> {
        match parse_pitch(token) {
            Ok((_, pitch)) => Ok(pitch),
            Err(e) => {
                log::trace!("pitch parse error: {:?}", e);
                Err(ScaleError::InvalidRoot(token.to_string()))
            }
        }
    }

    /// Sounding pitch class, 0..11.
    pub fn pitch_class(&self) -> i32 {
        (self.letter.semitone() + self.accidental).rem_euclid(HALF_STEPS)
    }
}

impl FromStr for Pitch {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self> {
        Pitch::parse(s)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let mark = if self.accidental > 0 { "#" } else { "b" };
        write!(f, "{}", mark.repeat(self.accidental.unsigned_abs() as usize))
    }
}

fn parse_letter(input: &str) -> nom::IResult<&str, Letter> {
    map_opt(one_of("CDEFGAB"), Letter::from_char).parse(input)
}

fn parse_accidental(input: &str) -> nom::IResult<&str, i32> {
    alt((
        many1(char('#')).map(|sharps: Vec<char>| sharps.len() as i32),
        many1(char('b')).map(|flats: Vec<char>| -(flats.len() as i32)),
    ))
    .parse(input)
}

fn parse_pitch(input: &str) -> nom::IResult<&str, Pitch> {
    let (input, letter) = parse_letter(input)?;
    let (input, accidental) = opt(parse_accidental).parse(input)?;
    let (input, _) = eof.parse(input)?;
    Ok((input, Pitch::new(letter, accidental.unwrap_or(0))))
}
