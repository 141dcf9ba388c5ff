use std::time::Duration;

// MECHANISM SIZE
pub const BODY_RADIUS: f64 = 1.0;
pub const LEG_LENGTH: f64 = 1.0;
pub const MOUNT_Z: f64 = 0.0;

/// Marker heights. They separate the leg segments visually and are not
/// derived from the joint angles.
pub const ELBOW_Z: f64 = 2.0;
pub const FOOT_Z: f64 = -2.0;

///CONST FOR MOVEMENT
pub const HIP_FREQUENCY: f64 = 60.0;
pub const NUM_FRAMES: u32 = 220;
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Runtime parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanismConfig {
    pub body_radius: f64,
    pub leg_length: f64,
    pub num_frames: u32,
    pub frame_interval: Duration,
}

impl MechanismConfig {
    pub fn new(body_radius: f64, leg_length: f64) -> Self {
        Self {
            body_radius,
            leg_length,
            ..Self::default()
        }
    }

    pub fn with_num_frames(mut self, num_frames: u32) -> Self {
        self.num_frames = num_frames;
        self
    }
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self {
            body_radius: BODY_RADIUS,
            leg_length: LEG_LENGTH,
            num_frames: NUM_FRAMES,
            frame_interval: FRAME_INTERVAL,
        }
    }
}
