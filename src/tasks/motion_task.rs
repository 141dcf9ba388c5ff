//! High-level motion task for the hexapod.
//!
//! Owns the leg model and the frame clock. Each step converts the current frame
//! into a gait phase, writes the gait angles into the model, snapshots the
//! resulting geometry and hands it to the host's renderer.
use log::{debug, info};

use super::{clock::FrameClock, render_task::Renderer};
use crate::kinematics::leg_model::LegModel;
use crate::robot::{config::MechanismConfig, snapshot::FrameSnapshot};

pub struct MotionTask<R> {
    model: LegModel,
    clock: FrameClock,
    renderer: R,
}

impl<R: Renderer> MotionTask<R> {
    pub fn new(config: &MechanismConfig, renderer: R) -> Self {
        info!(
            "[MOTION_TASK] body radius {} leg length {} over {} frames",
            config.body_radius, config.leg_length, config.num_frames
        );
        Self {
            model: LegModel::from_config(config),
            clock: FrameClock::new(config.num_frames),
            renderer,
        }
    }

    pub fn model(&self) -> &LegModel {
        &self.model
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Tick the model at the current frame without drawing.
    pub fn update(&mut self) -> FrameSnapshot {
        let phase = self.clock.phase();
        self.model.tick(phase);
        self.model.snapshot(self.clock.title(), phase)
    }

    /// One full frame: tick, draw, advance the clock.
    pub fn step(&mut self) -> Result<(), R::Error> {
        let snapshot = self.update();
        self.renderer.draw(snapshot)?;
        if self.clock.advance() {
            debug!("[MOTION_TASK] animation wrapped");
        }
        Ok(())
    }

    pub fn run(&mut self, frames: u32) -> Result<(), R::Error> {
        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::gait_engine::gait_angles;
    use crate::tasks::render_task::RecordingRenderer;

    #[test]
    fn step_draws_one_snapshot_per_frame() {
        let config = MechanismConfig::default().with_num_frames(10);
        let mut task = MotionTask::new(&config, RecordingRenderer::default());
        task.run(4).unwrap();

        let frames = &task.renderer().frames;
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].title, "Frame 1/10");
        assert_eq!(frames[3].title, "Frame 4/10");
        assert_eq!(frames[3].phase, 0.3);
        assert_eq!(task.clock().frame(), 4);
    }

    #[test]
    fn model_holds_gait_angles_of_last_drawn_frame() {
        let config = MechanismConfig::default().with_num_frames(5);
        let mut task = MotionTask::new(&config, RecordingRenderer::default());
        task.run(3).unwrap();

        let expected = gait_angles(2.0 / 5.0);
        assert_eq!(task.model().hip_angles(), &expected.hip);
        assert_eq!(task.model().knee_angles(), &expected.knee);
    }

    #[test]
    fn snapshot_matches_model_queries() {
        let mut task = MotionTask::new(&MechanismConfig::default(), RecordingRenderer::default());
        let snapshot = task.update();
        assert_eq!(snapshot.end_effectors, task.model().end_effector_positions());
        assert_eq!(snapshot.jacobian, task.model().jacobian());
        assert_eq!(snapshot.body_outline, task.model().body_outline());
    }

    #[test]
    fn renderer_can_be_borrowed() {
        let mut recorder = RecordingRenderer::default();
        {
            let mut task = MotionTask::new(&MechanismConfig::default(), &mut recorder);
            task.run(2).unwrap();
        }
        assert_eq!(recorder.frames.len(), 2);
    }
}
