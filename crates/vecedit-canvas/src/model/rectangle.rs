use tiny_skia::{Path, PathBuilder};
use vecedit_core::{Point, Rect, Size};

/// A filled rectangle occupying its bounding box exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub location: Point,
    pub size: Size,
}

impl Rectangle {
    pub fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.location, self.size)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    pub fn translate(&mut self, delta: Point) {
        self.location += delta;
    }

    pub fn path(&self) -> Option<Path> {
        let rect = tiny_skia::Rect::from_xywh(
            self.location.x as f32,
            self.location.y as f32,
            self.size.width as f32,
            self.size.height as f32,
        )?;
        Some(PathBuilder::from_rect(rect))
    }
}
