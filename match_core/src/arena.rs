use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Rectangle intersection test. Boxes that merely touch along an edge do
    /// not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The playfield. Bounds are fixed at session start and read-only to every
/// system.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub bounds: Aabb,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::new(Vec2::ZERO, Vec2::new(width, height)),
        }
    }

    pub fn width(&self) -> f32 {
        self.bounds.max.x - self.bounds.min.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.max.y - self.bounds.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.bounds.min + self.bounds.max) * 0.5
    }

    /// Where a serve places the ball
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Clamp a paddle's vertical center so the whole paddle stays inside the
    /// arena
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        let half = paddle_height / 2.0;
        y.clamp(self.bounds.min.y + half, self.bounds.max.y - half)
    }
}
