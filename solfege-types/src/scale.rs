//! Major and minor scales.

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    #[default]
    Major,
    Minor,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 2] = [ScaleMode::Major, ScaleMode::Minor];

    pub fn name(&self) -> &'static str {
        match self {
            ScaleMode::Major => "major",
            ScaleMode::Minor => "minor",
        }
    }

    /// Semitones above the root for degrees 1 through 8.
    pub fn steps(&self) -> &'static [i32; 8] {
        match self {
            ScaleMode::Major => &[0, 2, 4, 5, 7, 9, 11, 12],
            ScaleMode::Minor => &[0, 2, 3, 5, 7, 8, 10, 12],
        }
    }

    pub fn from_name(name: &str) -> Option<ScaleMode> {
        match name.to_ascii_lowercase().as_str() {
            "major" => Some(ScaleMode::Major),
            "minor" => Some(ScaleMode::Minor),
            _ => None,
        }
    }
}

/// Eight degrees of a scale, the last repeating the root an octave up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub root: PitchClass,
    pub mode: ScaleMode,
    pub degrees: [PitchClass; 8],
}

impl Scale {
    /// 1-based degree lookup.
    pub fn degree(&self, n: usize) -> Option<PitchClass> {
        n.checked_sub(1).and_then(|i| self.degrees.get(i)).copied()
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.degrees.contains(&pc)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.degrees.iter().map(|pc| pc.name()).collect()
    }
}

pub fn scale(root: PitchClass, mode: ScaleMode) -> Scale {
    let steps = mode.steps();
    let mut degrees = [root; 8];
    for (degree, step) in degrees.iter_mut().zip(steps) {
        *degree = root.transpose(*step);
    }
    Scale {
        root,
        mode,
        degrees,
    }
}
