/// Filter applied to the background image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    /// Brightness multiplier, 1.0 = unchanged.
    pub brightness: f32,
    pub blur_px:    f32,
    pub scale:      f32,
}

impl Backdrop {
    /// No detail overlay open.
    pub const CLEAR: Backdrop = Backdrop { brightness: 1.0, blur_px: 0.0, scale: 1.0 };

    /// Behind an open detail overlay.
    pub const DIMMED: Backdrop = Backdrop { brightness: 0.3, blur_px: 12.0, scale: 1.15 };

    pub fn is_dimmed(&self) -> bool {
        self.brightness < 1.0
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::CLEAR
    }
}
