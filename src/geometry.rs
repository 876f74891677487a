//! Pure geometry of the icon: the lens circles and the viewfinder brackets.
//!
//! Coordinates are signed so that marks which fall partly or wholly outside
//! the canvas (tiny icon sizes) can still be described and then clipped by
//! the rasterizer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Mirror across the vertical line `x = axis`.
    pub fn reflect_x(self, axis: i64) -> Self {
        Self::new(2 * axis - self.x, self.y)
    }

    /// Mirror across the horizontal line `y = axis`.
    pub fn reflect_y(self, axis: i64) -> Self {
        Self::new(self.x, 2 * axis - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i64,
}

impl Circle {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// True for pixels within `width` of the circle's edge, measured inward.
    pub fn on_stroke(&self, x: i64, y: i64, width: u32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let inner = self.radius - i64::from(width);
        if inner < 0 {
            return true;
        }
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        dx * dx + dy * dy > inner * inner
    }
}

/// A straight stroke with butt caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: u32,
}

impl Segment {
    pub fn reflect_x(self, axis: i64) -> Self {
        Self {
            from: self.from.reflect_x(axis),
            to: self.to.reflect_x(axis),
            width: self.width,
        }
    }

    pub fn reflect_y(self, axis: i64) -> Self {
        Self {
            from: self.from.reflect_y(axis),
            to: self.to.reflect_y(axis),
            width: self.width,
        }
    }

    /// Inclusive bounding box of everything the stroke may cover.
    pub fn bounds(&self) -> (Point, Point) {
        let pad = i64::from(self.width).div_euclid(2) + 1;
        (
            Point::new(self.from.x.min(self.to.x) - pad, self.from.y.min(self.to.y) - pad),
            Point::new(self.from.x.max(self.to.x) + pad, self.from.y.max(self.to.y) + pad),
        )
    }

    /// Whether pixel `(x, y)` lies under the stroke.
    ///
    /// The pixel is covered when its projection onto the segment falls between
    /// the endpoints and its distance to the segment's line is at most half the
    /// stroke width. Everything is computed in integers so mirrored segments
    /// cover exactly mirrored pixels.
    pub fn covers(&self, x: i64, y: i64) -> bool {
        // Widths and lengths come straight from style files; i128 keeps the
        // squared terms exact for any u32 input.
        let dx = i128::from(self.to.x) - i128::from(self.from.x);
        let dy = i128::from(self.to.y) - i128::from(self.from.y);
        let px = i128::from(x) - i128::from(self.from.x);
        let py = i128::from(y) - i128::from(self.from.y);
        let width = i128::from(self.width);

        let len2 = dx * dx + dy * dy;
        if len2 == 0 {
            return 4 * (px * px + py * py) <= width * width;
        }

        let dot = px * dx + py * dy;
        if dot < 0 || dot > len2 {
            return false;
        }

        let cross = px * dy - py * dx;
        4 * cross * cross <= width * width * len2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Direction of the corner from the center, as `(sx, sy)`.
    fn signs(self) -> (i64, i64) {
        match self {
            Corner::TopLeft => (-1, -1),
            Corner::TopRight => (1, -1),
            Corner::BottomLeft => (-1, 1),
            Corner::BottomRight => (1, 1),
        }
    }

    pub fn mirrored_x(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }

    pub fn mirrored_y(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::TopRight,
        }
    }
}

/// An L-shaped mark: two arms sharing the elbow point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub horizontal: Segment,
    pub vertical: Segment,
}

impl Bracket {
    pub fn elbow(&self) -> Point {
        self.horizontal.from
    }

    pub fn reflect_x(self, axis: i64) -> Self {
        Self {
            horizontal: self.horizontal.reflect_x(axis),
            vertical: self.vertical.reflect_x(axis),
        }
    }

    pub fn reflect_y(self, axis: i64) -> Self {
        Self {
            horizontal: self.horizontal.reflect_y(axis),
            vertical: self.vertical.reflect_y(axis),
        }
    }

    pub fn segments(&self) -> [Segment; 2] {
        [self.horizontal, self.vertical]
    }
}

/// The camera lens: a filled outer disc and an inner aperture ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lens {
    pub outer: Circle,
    pub inner: Circle,
    pub aperture_width: u32,
}

impl Lens {
    /// Lens centered on a square canvas: outer radius is a third of the side,
    /// the aperture half of that.
    pub fn for_canvas(size: u32, aperture_width: u32) -> Self {
        let center = i64::from(size / 2);
        let center = Point::new(center, center);
        let outer_radius = i64::from(size / 3);
        Self {
            outer: Circle {
                center,
                radius: outer_radius,
            },
            inner: Circle {
                center,
                radius: outer_radius / 2,
            },
            aperture_width,
        }
    }
}

/// Four corner brackets framing the lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewfinder {
    pub center: Point,
    /// Distance from the center to each bracket's elbow along both axes.
    pub offset: i64,
    pub length: i64,
    pub width: u32,
}

impl Viewfinder {
    /// Brackets sitting `margin` pixels outside the lens' outer circle.
    pub fn around(lens: &Lens, margin: u32, length: u32, width: u32) -> Self {
        Self {
            center: lens.outer.center,
            offset: lens.outer.radius + i64::from(margin),
            length: i64::from(length),
            width,
        }
    }

    pub fn bracket(&self, corner: Corner) -> Bracket {
        let (sx, sy) = corner.signs();
        let elbow = Point::new(
            self.center.x + sx * self.offset,
            self.center.y + sy * self.offset,
        );
        Bracket {
            horizontal: Segment {
                from: elbow,
                to: Point::new(elbow.x - sx * self.length, elbow.y),
                width: self.width,
            },
            vertical: Segment {
                from: elbow,
                to: Point::new(elbow.x, elbow.y - sy * self.length),
                width: self.width,
            },
        }
    }

    pub fn brackets(&self) -> [(Corner, Bracket); 4] {
        Corner::ALL.map(|corner| (corner, self.bracket(corner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_viewfinder() -> Viewfinder {
        let lens = Lens::for_canvas(1024, 20);
        Viewfinder::around(&lens, 80, 60, 15)
    }

    #[test]
    fn test_lens_constants_for_1024() {
        let lens = Lens::for_canvas(1024, 20);
        assert_eq!(lens.outer.center, Point::new(512, 512));
        assert_eq!(lens.outer.radius, 341);
        assert_eq!(lens.inner.radius, 170);
    }

    #[test]
    fn test_top_left_bracket_layout() {
        let bracket = default_viewfinder().bracket(Corner::TopLeft);
        assert_eq!(bracket.elbow(), Point::new(91, 91));
        assert_eq!(bracket.horizontal.to, Point::new(151, 91));
        assert_eq!(bracket.vertical.to, Point::new(91, 151));
        assert_eq!(bracket.horizontal.width, 15);
    }

    #[test]
    fn test_brackets_mirror_each_other() {
        let viewfinder = default_viewfinder();
        let axis = viewfinder.center.x;
        for corner in Corner::ALL {
            let bracket = viewfinder.bracket(corner);
            assert_eq!(
                bracket.reflect_x(axis),
                viewfinder.bracket(corner.mirrored_x())
            );
            assert_eq!(
                bracket.reflect_y(viewfinder.center.y),
                viewfinder.bracket(corner.mirrored_y())
            );
        }
    }

    #[test]
    fn test_horizontal_segment_coverage() {
        let segment = Segment {
            from: Point::new(10, 10),
            to: Point::new(20, 10),
            width: 15,
        };
        assert!(segment.covers(10, 10));
        assert!(segment.covers(20, 17));
        assert!(segment.covers(15, 3));
        assert!(!segment.covers(15, 18));
        assert!(!segment.covers(9, 10));
        assert!(!segment.covers(21, 10));
    }

    #[test]
    fn test_circle_stroke_is_inward() {
        let circle = Circle {
            center: Point::new(0, 0),
            radius: 10,
        };
        assert!(circle.on_stroke(10, 0, 2));
        assert!(circle.on_stroke(9, 0, 2));
        assert!(!circle.on_stroke(8, 0, 2));
        assert!(!circle.on_stroke(11, 0, 2));
        assert!(circle.on_stroke(0, 0, 20));
    }

    #[test]
    fn test_huge_stroke_width_covers_without_overflow() {
        let segment = Segment {
            from: Point::new(10, 10),
            to: Point::new(70, 10),
            width: 100_000_000,
        };
        assert!(segment.covers(40, 10));
        assert!(segment.covers(40, 50_000_010));
        assert!(!segment.covers(71, 10));

        let widest = Segment {
            from: Point::new(0, 0),
            to: Point::new(i64::from(u32::MAX) * 2, 0),
            width: u32::MAX,
        };
        assert!(widest.covers(1, 1));
    }
}
