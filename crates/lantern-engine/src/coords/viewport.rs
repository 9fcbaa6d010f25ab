use super::Transform;

/// Where and how one frame is rendered.
///
/// `rect` and `draw_size` are in physical pixels; `window_size` is in logical
/// points. Copied into every render tick, so it stays a plain value type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Viewport rectangle `[x, y, w, h]`.
    pub rect: [i32; 4],

    /// Drawable surface size.
    pub draw_size: [u32; 2],

    /// Window size in logical points.
    pub window_size: [f64; 2],
}

impl Viewport {
    /// Full-surface viewport for a window of the given sizes.
    pub fn from_window(window_size: [f64; 2], draw_size: [u32; 2]) -> Self {
        Self {
            rect: [0, 0, draw_size[0] as i32, draw_size[1] as i32],
            draw_size,
            window_size,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.window_size[0] > 0.0
            && self.window_size[1] > 0.0
            && self.window_size[0].is_finite()
            && self.window_size[1].is_finite()
    }

    /// Transform from window coordinates (logical points, origin top-left,
    /// y down) to normalized device coordinates (`[-1, 1]`, y up).
    ///
    /// This is the base transform a fresh drawing context starts from, so
    /// draw code positioned in pixels lands where the backend expects it.
    pub fn abs_transform(&self) -> Transform {
        let sx = 2.0 / self.window_size[0];
        let sy = -2.0 / self.window_size[1];
        Transform([[sx, 0.0, -1.0], [0.0, sy, 1.0]])
    }
}
