use crate::mode::{DEGREES, Mode};
use crate::pitch::{HALF_STEPS, Pitch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spell the pitch `half_steps` above `previous` on the next letter name.
///
/// The target is measured from the natural position of the previous letter,
/// so the previous accidental carries over and is then adjusted by however
/// far the next natural letter sits from the target. When the letter is
/// equally far in both directions the flat spelling wins.
pub fn step(previous: Pitch, half_steps: u8) -> Pitch {
    let letter = previous.letter.next();
    let target = (previous.letter.semitone() + half_steps as i32).rem_euclid(HALF_STEPS);

    let above = (letter.semitone() - target).rem_euclid(HALF_STEPS);
    let below = (target - letter.semitone()).rem_euclid(HALF_STEPS);

    let accidental = if above == 0 {
        previous.accidental
    } else if above <= below {
        previous.accidental - above
    } else {
        previous.accidental + below
    };
    Pitch::new(letter, accidental)
}

/// Serialized form of a `Scale`. Only the root and mode are stored; the
/// degrees are always respelled on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSpec {
    pub mode: Mode,
    pub root: Pitch,
}

/// A diatonic scale: seven spelled degrees from the root, ending before the
/// octave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScaleSpec", into = "ScaleSpec")]
pub struct Scale {
    mode: Mode,
    pitches: [Pitch; DEGREES],
}

impl From<ScaleSpec> for Scale {
    fn from(spec: ScaleSpec) -> Self {
        Scale::new(spec.root, spec.mode)
    }
}

impl From<Scale> for ScaleSpec {
    fn from(scale: Scale) -> Self {
        ScaleSpec {
            mode: scale.mode,
            root: scale.root(),
        }
    }
}

impl Scale {
    pub fn new(root: Pitch, mode: Mode) -> Self {
        let steps = mode.steps();
        log::debug!("{} {} steps {:?}", root, mode, steps.steps());

        let mut pitches = [root; DEGREES];
        for (i, size) in steps.iter().take(DEGREES - 1).enumerate() {
            pitches[i + 1] = step(pitches[i], size);
            log::trace!(
                "degree {}: {} (pc {})",
                i + 2,
                pitches[i + 1],
                pitches[i + 1].pitch_class()
            );
        }

        Scale { mode, pitches }
    }

    pub fn root(&self) -> Pitch {
        self.pitches[0]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pitches(&self) -> &[Pitch; DEGREES] {
        &self.pitches
    }

    /// Degree by 0-based index, wrapping in both directions across octaves.
    pub fn degree(&self, index: i32) -> Pitch {
        let scale_len = self.pitches.len() as i32;
        let wrapped_index = ((index % scale_len) + scale_len) % scale_len;
        self.pitches[wrapped_index as usize]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pitch) in self.pitches.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pitch)?;
        }
        Ok(())
    }
}
