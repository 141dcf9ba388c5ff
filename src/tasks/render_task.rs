//! Renderer seam between the kinematic core and the host.
//!
//! The host constructs and owns a [`Renderer`]; the motion task hands it one
//! [`FrameSnapshot`] per frame by value. [`LogRenderer`] is a headless renderer
//! that writes the geometry through the `log` facade.
use core::convert::Infallible;

use log::{debug, info};

use crate::robot::{leg::LegId, snapshot::FrameSnapshot};

pub trait Renderer {
    type Error;

    fn draw(&mut self, snapshot: FrameSnapshot) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn draw(&mut self, snapshot: FrameSnapshot) -> Result<(), Self::Error> {
        (**self).draw(snapshot)
    }
}

/// Logs every frame: the title and Jacobian at `info`, leg geometry at `debug`.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames_drawn: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for LogRenderer {
    type Error = Infallible;

    fn draw(&mut self, snapshot: FrameSnapshot) -> Result<(), Self::Error> {
        let stamp = "[RENDER_TASK]";
        info!("{stamp} {} (phase {:.4})", snapshot.title, snapshot.phase);
        for leg in LegId::ALL {
            let [mount, elbow, foot] = snapshot.leg(leg);
            debug!(
                "{stamp} {leg}: mount ({:.3}, {:.3}) elbow ({:.3}, {:.3}) foot ({:.3}, {:.3})",
                mount.x, mount.y, elbow.x, elbow.y, foot.x, foot.y
            );
        }
        info!("{stamp} jacobian:{}", snapshot.jacobian);
        self.frames_drawn += 1;
        Ok(())
    }
}

/// Keeps every snapshot in memory. Useful for hosts that post-process a run.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<FrameSnapshot>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn draw(&mut self, snapshot: FrameSnapshot) -> Result<(), Self::Error> {
        self.frames.push(snapshot);
        Ok(())
    }
}
