/// Drag-to-select across the grid's checkboxes, abstracted from any pointer
/// API: pressing a cell starts painting a value, entering further cells
/// while dragging paints the same value, releasing stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragSelect {
    #[default]
    Idle,
    Dragging {
        paint: bool,
    },
}

impl DragSelect {
    /// Press on a cell. Returns the value the drag will paint, starting
    /// with the pressed cell itself: the inverse of its current state.
    pub fn pointer_down(&mut self, current: bool) -> bool {
        let paint = !current;
        *self = Self::Dragging { paint };
        paint
    }

    /// Entering a cell paints only while a drag is active.
    pub fn pointer_enter(&self) -> Option<bool> {
        match self {
            Self::Dragging { paint } => Some(*paint),
            Self::Idle => None,
        }
    }

    pub fn pointer_up(&mut self) {
        *self = Self::Idle;
    }
}
