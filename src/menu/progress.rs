use super::round_half_up;

/// Scales horizontal drag distance by half the control width.
///
/// A drag across half the control reports 100. Larger drags report more;
/// the value is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressMapper {
    half_width: u32,
}

impl ProgressMapper {
    pub fn new(control_width: u32) -> Self {
        Self {
            half_width: control_width / 2,
        }
    }

    /// Delta for a horizontal displacement measured from the gesture start.
    ///
    /// Dragging right (positive `dx`) gives a negative delta.
    pub fn delta(&self, dx: f32) -> i32 {
        if self.half_width == 0 {
            return 0;
        }
        round_half_up(-dx * 100.0 / self.half_width as f32)
    }
}
