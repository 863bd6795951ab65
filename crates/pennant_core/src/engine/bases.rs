//! Base-running state machine for one half-inning.

use std::fmt;

/// Occupancy of the four base slots plus runs scored this half-inning.
///
/// Slot 0 is home plate (always unoccupied at rest), slots 1..=3 are
/// first through third base. A fresh state is created for every
/// half-inning and discarded once the enclosing loop reaches three outs;
/// it never self-resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bases {
    bases: [bool; 4],
    runs: u32,
}

impl Bases {
    pub fn new() -> Self {
        Bases { bases: [false; 4], runs: 0 }
    }

    /// Runs scored so far this half-inning.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Number of runners currently on base.
    pub fn runners_on(&self) -> usize {
        self.bases[1..].iter().filter(|&&occupied| occupied).count()
    }

    /// Apply one at-bat's advance of `earned` bases (0..=4) as a single
    /// atomic step.
    ///
    /// Existing runners move first, scanned third base down to first so a
    /// runner pushed onto a later-scanned base is never advanced twice;
    /// any runner reaching slot 4 or beyond scores. The batter-runner is
    /// placed last: straight to the run column on a 4 (home run),
    /// otherwise onto slot `earned`. An advance of 0 (any out) leaves the
    /// state untouched.
    pub fn play(&mut self, earned: u8) {
        if earned == 0 {
            return;
        }
        let earned = earned as usize;
        for base in (1..self.bases.len()).rev() {
            if self.bases[base] {
                let reached = base + earned;
                self.bases[base] = false;
                if reached >= 4 {
                    self.runs += 1;
                } else {
                    self.bases[reached] = true;
                }
            }
        }
        if earned == 4 {
            self.runs += 1;
        } else {
            self.bases[earned] = true;
        }
    }
}

impl Default for Bases {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} scored with men on", self.runs)?;
        for base in 1..4 {
            if self.bases[base] {
                write!(f, " {}", base)?;
            }
        }
        Ok(())
    }
}
