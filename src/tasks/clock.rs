//! Frame counter that turns animation frames into gait phase.
use crate::robot::config::NUM_FRAMES;

/// Repeating frame counter. `phase = frame / num_frames`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    frame: u32,
    num_frames: u32,
}

impl FrameClock {
    /// `num_frames` of zero is treated as one.
    pub fn new(num_frames: u32) -> Self {
        Self {
            frame: 0,
            num_frames: num_frames.max(1),
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn num_frames(&self) -> u32 {
        self.num_frames
    }

    pub fn phase(&self) -> f64 {
        f64::from(self.frame) / f64::from(self.num_frames)
    }

    /// 1-based title, as shown above each animation frame.
    pub fn title(&self) -> String {
        format!("Frame {}/{}", self.frame + 1, self.num_frames)
    }

    /// Move to the next frame, wrapping back to the first one after the last.
    /// Returns `true` on wrap.
    pub fn advance(&mut self) -> bool {
        self.frame += 1;
        if self.frame >= self.num_frames {
            self.frame = 0;
            return true;
        }
        false
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(NUM_FRAMES)
    }
}
