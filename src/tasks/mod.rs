//! Frame-driven tasks around the kinematic core.
//!
//! - [`clock`]: Frame counter that produces the gait phase.
//! - [`motion_task`]: Ticks the leg model once per frame and snapshots it.
//! - [`render_task`]: The [`render_task::Renderer`] seam owned by the host, plus
//!   headless renderers.
//!
//! Nothing here draws or sleeps; pacing belongs to the binary or the host.
pub mod clock;
pub mod motion_task;
pub mod render_task;
