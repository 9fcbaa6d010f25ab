use super::WindowError;

/// Window size in logical points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

impl From<[u32; 2]> for Size {
    fn from(size: [u32; 2]) -> Self {
        Self::new(size[0] as f64, size[1] as f64)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

/// Window construction settings.
///
/// Immutable once a window is built from them; runtime mutation goes through
/// the window itself (`set_title`, `set_should_close`).
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub size: Size,

    /// Borderless fullscreen on the primary monitor.
    pub fullscreen: bool,
    pub resizable: bool,
    pub decorated: bool,
    pub transparent: bool,

    /// Pressing Escape requests close.
    pub exit_on_esc: bool,

    /// A native close request marks the window closed without the
    /// application having to react to the event.
    pub automatic_close: bool,
}

impl WindowSettings {
    pub fn new(title: impl Into<String>, size: impl Into<Size>) -> Self {
        Self {
            title: title.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    /// Checks invariants that native construction would otherwise surface as
    /// opaque platform errors.
    pub fn validate(&self) -> Result<(), WindowError> {
        if !self.size.is_valid() {
            return Err(WindowError::InvalidSettings(format!(
                "window size must be positive, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "lantern".to_string(),
            size: Size::new(640.0, 480.0),
            fullscreen: false,
            resizable: true,
            decorated: true,
            transparent: false,
            exit_on_esc: false,
            automatic_close: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_conversions() {
        assert_eq!(Size::from([640, 480]), Size::new(640.0, 480.0));
        assert_eq!(Size::from((120, 80)), Size::new(120.0, 80.0));
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(1.0, 1.0).is_valid());
        assert!(!Size::new(0.0, 480.0).is_valid());
        assert!(!Size::new(640.0, 0.0).is_valid());
        assert!(!Size::new(-1.0, 480.0).is_valid());
        assert!(!Size::new(f64::INFINITY, 480.0).is_valid());
    }

    #[test]
    fn validate_rejects_zero_size() {
        let settings = WindowSettings::new("t", [0, 100]);
        assert!(matches!(
            settings.validate(),
            Err(WindowError::InvalidSettings(_))
        ));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(WindowSettings::default().validate().is_ok());
    }

    #[test]
    fn new_keeps_default_flags() {
        let settings = WindowSettings::new("demo", [320, 200]);
        assert_eq!(settings.title, "demo");
        assert!(settings.resizable);
        assert!(settings.decorated);
        assert!(settings.automatic_close);
        assert!(!settings.exit_on_esc);
        assert!(!settings.fullscreen);
    }
}
