//! Frame-index cursor shared by every animated entity.
//!
//! A looping animation cycles forever and can be restarted; a one-shot
//! animation walks its frames once and then reports itself finished.

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    frames: usize,
    current: usize,
    ticks_per_frame: u32,
    ticks: u32,
    looping: bool,
    finished: bool,
}

impl Animation {
    /// Cycle through `frames`, switching every `ticks_per_frame` updates.
    pub fn looping(frames: usize, ticks_per_frame: u32) -> Self {
        Self::build(frames, ticks_per_frame, true)
    }

    /// Show each of `frames` for one update, then finish.
    pub fn once(frames: usize) -> Self {
        Self::build(frames, 1, false)
    }

    fn build(frames: usize, ticks_per_frame: u32, looping: bool) -> Self {
        Self {
            frames: frames.max(1),
            current: 0,
            ticks_per_frame: ticks_per_frame.max(1),
            ticks: 0,
            looping,
            finished: false,
        }
    }

    /// Index of the frame currently on screen.
    pub fn frame(&self) -> usize {
        self.current
    }

    /// A one-shot animation finishes on the update after its last frame was
    /// shown. Looping animations never finish.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one update.
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.ticks += 1;
        if self.ticks < self.ticks_per_frame {
            return;
        }
        self.ticks = 0;

        if self.current + 1 < self.frames {
            self.current += 1;
        } else if self.looping {
            self.current = 0;
        } else {
            self.finished = true;
        }
    }

    /// Rewind a looping animation. One-shot animations cannot be replayed.
    pub fn restart(&mut self) {
        if self.looping {
            self.current = 0;
            self.ticks = 0;
        }
    }
}
