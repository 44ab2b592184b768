//! Interaction mode and the classifier that commits it.

/// How the current gesture is being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No gesture in progress, or no movement seen yet
    #[default]
    None,
    /// Vertical drag picking an item
    Scrolling,
    /// Horizontal drag changing a value
    Progressing,
}

impl InteractionMode {
    pub fn is_none(self) -> bool {
        self == InteractionMode::None
    }

    pub fn is_scrolling(self) -> bool {
        self == InteractionMode::Scrolling
    }

    pub fn is_progressing(self) -> bool {
        self == InteractionMode::Progressing
    }
}

/// Decide the mode of a gesture from its first movement.
///
/// Mostly-horizontal movement means progressing. Anything else, including an
/// exact diagonal, means scrolling.
pub fn classify(dx: f32, dy: f32) -> InteractionMode {
    if dx.abs() > dy.abs() {
        InteractionMode::Progressing
    } else {
        InteractionMode::Scrolling
    }
}
