use crate::maze::Direction;

pub const DEFAULT_SWIPE_MIN: f32 = 10.0;

/// Classifies a drag in screen space (`y` grows downwards). The dominant axis
/// wins; ties go to the vertical axis. Drags shorter than `min_length` are not
/// swipes.
pub fn swipe_direction(dx: f32, dy: f32, min_length: f32) -> Option<Direction> {
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 || length < min_length {
        return None;
    }

    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if dy > 0.0 {
        Direction::South
    } else {
        Direction::North
    };

    Some(direction)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    origin: Option<(f32, f32)>,
    min_length: f32,
}

impl SwipeTracker {
    pub fn new(min_length: f32) -> Self {
        Self {
            origin: None,
            min_length,
        }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    /// Finishes the current swipe. A release without a matching touch start
    /// yields nothing.
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.origin.take()?;
        swipe_direction(x - start_x, y - start_y, self.min_length)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_MIN)
    }
}
