//! Camera that follows the carousel state.
//!
//! The eye and look-at point are pure functions of the view mode, the
//! selection and the scroll position; the rig only damps toward them.

use glam::Vec3;

use super::core::Camera;
use crate::animation::Smoothed;
use crate::carousel::LayoutProfile;
use crate::options::CameraOptions;

/// Below this distance (world units) the camera counts as settled.
const SETTLE_EPSILON: f32 = 1.0e-4;

/// High-level camera framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Opening shot: far and elevated, looking at the carousel center.
    #[default]
    Intro,
    /// Normal browsing, tracking the scroll position.
    Browse,
}

/// A camera placement plus how quickly to approach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    /// Target eye position.
    pub eye: Vec3,
    /// Target look-at point.
    pub look_at: Vec3,
    /// Half-life to approach it with.
    pub half_life: f32,
}

/// Where the camera should be.
///
/// `selection_focus` is the x of the selected card's stage; any selection
/// overrides the view mode. The compact profile pulls the eye back along
/// its view ray by `compact_distance_scale`.
#[must_use]
pub fn camera_target(
    mode: ViewMode,
    selection_focus: Option<f32>,
    scroll_position: f32,
    profile: LayoutProfile,
    options: &CameraOptions,
) -> CameraTarget {
    let (eye, look_at, half_life) = match (selection_focus, mode) {
        (Some(x), _) => {
            let shift = Vec3::new(finite_or_zero(x), 0.0, 0.0);
            (
                Vec3::from_array(options.selected_eye) + shift,
                Vec3::from_array(options.selected_look) + shift,
                options.selected_half_life,
            )
        }
        (None, ViewMode::Intro) => (
            Vec3::from_array(options.intro_eye),
            Vec3::from_array(options.intro_look),
            options.intro_half_life,
        ),
        (None, ViewMode::Browse) => {
            let shift = Vec3::new(finite_or_zero(scroll_position), 0.0, 0.0);
            (
                Vec3::from_array(options.browse_eye) + shift,
                Vec3::from_array(options.browse_look) + shift,
                options.browse_half_life,
            )
        }
    };

    let eye = match profile {
        LayoutProfile::Compact => {
            look_at + (eye - look_at) * options.compact_distance_scale
        }
        LayoutProfile::Wide => eye,
    };

    CameraTarget {
        eye,
        look_at,
        half_life,
    }
}

fn finite_or_zero(x: f32) -> f32 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Damped camera driven by [`camera_target`].
#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: ViewMode,
    intro_elapsed: f32,
    eye: Smoothed<Vec3>,
    look_at: Smoothed<Vec3>,
    camera: Camera,
}

impl CameraRig {
    /// Rig resting on the intro shot.
    #[must_use]
    pub fn new(options: &CameraOptions, profile: LayoutProfile, aspect: f32) -> Self {
        let start =
            camera_target(ViewMode::Intro, None, 0.0, profile, options);
        let mut rig = Self {
            mode: ViewMode::Intro,
            intro_elapsed: 0.0,
            eye: Smoothed::new(start.eye),
            look_at: Smoothed::new(start.look_at),
            camera: Camera::default(),
        };
        rig.set_aspect(aspect);
        rig.apply_options(options);
        rig.sync_camera();
        rig
    }

    /// Current view mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Leave the intro shot (first user input). No-op once browsing.
    pub fn exit_intro(&mut self) {
        if self.mode == ViewMode::Intro {
            log::debug!(
                "intro ended after {:.2}s",
                self.intro_elapsed
            );
            self.mode = ViewMode::Browse;
        }
    }

    /// Update the projection aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
    }

    /// Apply projection options.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
    }

    /// Advance the intro clock and damp toward the current target.
    /// Returns `true` while the camera is moving.
    pub fn tick(
        &mut self,
        dt: f32,
        selection_focus: Option<f32>,
        scroll_position: f32,
        profile: LayoutProfile,
        options: &CameraOptions,
    ) -> bool {
        if self.mode == ViewMode::Intro && dt.is_finite() && dt > 0.0 {
            self.intro_elapsed += dt;
            if self.intro_elapsed >= options.intro_duration {
                self.exit_intro();
            }
        }

        let target = camera_target(
            self.mode,
            selection_focus,
            scroll_position,
            profile,
            options,
        );
        self.eye.set_target(target.eye);
        self.look_at.set_target(target.look_at);
        let moving_eye = self.eye.tick(target.half_life, dt, SETTLE_EPSILON);
        let moving_look =
            self.look_at.tick(target.half_life, dt, SETTLE_EPSILON);
        self.sync_camera();
        moving_eye || moving_look
    }

    fn sync_camera(&mut self) {
        self.camera.eye = self.eye.current;
        self.camera.target = self.look_at.current;
    }
}
