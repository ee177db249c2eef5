use tiny_skia::{Path, PathBuilder};
use vecedit_core::{Point, Rect, Size};

/// A filled isosceles triangle: apex at the top-center of the bounding
/// box, base corners at its bottom-left and bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub location: Point,
    pub size: Size,
}

impl Triangle {
    pub fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.location, self.size)
    }

    /// Bounding-box test, not point-in-polygon: the gaps beside the
    /// slanted edges still hit.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    pub fn translate(&mut self, delta: Point) {
        self.location += delta;
    }

    pub fn path(&self) -> Option<Path> {
        if self.size.width <= 0 || self.size.height <= 0 {
            return None;
        }
        let x = self.location.x as f32;
        let y = self.location.y as f32;
        let w = self.size.width as f32;
        let h = self.size.height as f32;

        let mut pb = PathBuilder::new();
        pb.move_to(x + w / 2.0, y);
        pb.line_to(x, y + h);
        pb.line_to(x + w, y + h);
        pb.close();
        pb.finish()
    }
}
