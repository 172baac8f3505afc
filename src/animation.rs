/// Sheet indices of the walk cycle: every third cell starting at 2
pub const RUNNING_STEPS: [usize; 5] = [2, 5, 8, 11, 14];

/// Number of sheet cells needed to play [`RUNNING_STEPS`]
pub fn frames_required() -> usize {
    RUNNING_STEPS.iter().copied().max().unwrap_or(0) + 1
}

/// Looping cursor over a fixed list of sheet indices.
///
/// The cursor moves once per [`FrameCycle::next_frame`] call, so the
/// animation rate follows the draw rate rather than wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCycle {
    steps: &'static [usize],
    cursor: usize,
}

impl FrameCycle {
    pub fn running() -> Self {
        FrameCycle {
            steps: &RUNNING_STEPS,
            cursor: 0,
        }
    }

    /// Sheet index to draw now; advances the cursor, wrapping after the last step
    pub fn next_frame(&mut self) -> usize {
        let frame = self.steps[self.cursor];
        self.cursor = (self.cursor + 1) % self.steps.len();
        frame
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for FrameCycle {
    fn default() -> Self {
        Self::running()
    }
}
