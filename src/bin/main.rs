use std::thread;

use anyhow::Context;
use hexapod_kinematics::robot::config::MechanismConfig;
use hexapod_kinematics::tasks::{motion_task::MotionTask, render_task::LogRenderer};
use log::info;

const USAGE: &str = "usage: hexapod_kinematics [FRAMES] [--realtime]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = MechanismConfig::default();
    let mut realtime = false;
    let mut frames = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            n => {
                let n: u32 = n
                    .parse()
                    .with_context(|| format!("invalid frame count {n:?}\n{USAGE}"))?;
                frames = Some(n);
            }
        }
    }
    if let Some(n) = frames {
        config = config.with_num_frames(n);
    }

    info!("Starting hexapod simulation...");
    let mut task = MotionTask::new(&config, LogRenderer::new());
    for _ in 0..config.num_frames {
        match task.step() {
            Ok(()) => {}
            Err(never) => match never {},
        }
        if realtime {
            thread::sleep(config.frame_interval);
        }
    }
    info!("Drew {} frames", task.renderer().frames_drawn());

    Ok(())
}
