/// Input the control reacts to, as produced by a gesture detector.
///
/// `PointerMove` deltas are relative to the previous sample. Positive `dx`
/// is a drag to the right, positive `dy` a drag downwards. Vertical deltas
/// go to the scroller unchanged, so dragging down brings later items to the
/// center slot and the panel content moves against the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { dx: f32, dy: f32 },
    PointerUp { x: f32, y: f32 },
    /// Fast release; never continues scrolling
    Fling { velocity_x: f32, velocity_y: f32 },
    LongPress,
    SingleTap,
}
