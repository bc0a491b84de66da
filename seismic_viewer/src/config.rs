//! Fixed viewer constants: volume size, animation, camera, window.

use bevy::prelude::*;

#[derive(Clone, Debug)]
pub struct VolumeSettings {
    pub width: f32,
    pub height: f32,
    pub length: f32,
}

#[derive(Clone, Debug)]
pub struct AnimationSettings {
    /// Distance the in-line slice travels per frame while running.
    pub step: f32,
    /// Scene yaw per frame, as a multiple of the slice speed.
    pub rotation_gain: f32,
    pub start_position: f32,
}

#[derive(Clone, Debug)]
pub struct CameraSettings {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, Resource)]
pub struct ViewerSettings {
    pub volume: VolumeSettings,
    pub animation: AnimationSettings,
    pub camera: CameraSettings,
    /// Directory under the asset root holding the survey images.
    pub image_dir: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            volume: VolumeSettings {
                width: 2.0,
                height: 2.0,
                length: 2.0,
            },
            animation: AnimationSettings {
                step: 0.01,
                rotation_gain: 0.5,
                start_position: 0.0,
            },
            camera: CameraSettings {
                position: Vec3::new(0.0, 3.0, 6.0),
                look_at: Vec3::ZERO,
                fov_degrees: 70.0,
                near: 0.01,
                far: 100.0,
            },
            image_dir: "images".to_string(),
        }
    }
}

impl ViewerSettings {
    /// Travel limit of the animated slice on either side of the volume center.
    pub fn half_length(&self) -> f32 {
        self.volume.length * 0.5
    }

    pub fn perspective(&self, aspect_ratio: f32) -> PerspectiveProjection {
        PerspectiveProjection {
            fov: self.camera.fov_degrees.to_radians(),
            aspect_ratio,
            near: self.camera.near,
            far: self.camera.far,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_layout() {
        let settings = ViewerSettings::default();

        assert_eq!(settings.volume.width, 2.0);
        assert_eq!(settings.half_length(), 1.0);
        assert_eq!(settings.animation.step, 0.01);
        assert_eq!(settings.camera.position, Vec3::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn perspective_uses_degrees_and_aspect() {
        let settings = ViewerSettings::default();
        let projection = settings.perspective(16.0 / 9.0);

        assert!((projection.fov - 70f32.to_radians()).abs() < 1e-6);
        assert!((projection.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(projection.near, 0.01);
    }
}
