//! Camera for the platformer client
//!
//! Screen-space orthographic projection: origin at the top-left, y growing
//! downward, one unit per pixel - the same coordinates the simulation uses.

use glam::Mat4;

pub struct Camera {
    pub view_proj: Mat4,
}

impl Camera {
    /// Create a pixel-space camera covering `width` x `height`
    pub fn screen_space(width: f32, height: f32) -> Self {
        // Bottom and top are swapped so +y points down the screen
        let view_proj = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { view_proj }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding to reach 256
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4Swizzles};

    #[test]
    fn test_screen_corners_map_to_clip_corners() {
        let camera = Camera::screen_space(800.0, 600.0);

        // Top-left pixel to (-1, 1), bottom-right to (1, -1)
        let tl = camera.view_proj * Vec3::new(0.0, 0.0, 0.0).extend(1.0);
        let br = camera.view_proj * Vec3::new(800.0, 600.0, 0.0).extend(1.0);

        assert!((tl.xy() - glam::Vec2::new(-1.0, 1.0)).length() < 1e-6);
        assert!((br.xy() - glam::Vec2::new(1.0, -1.0)).length() < 1e-6);
    }
}
