//! Resolution-independent geometry used by the icon composer.
//!
//! Every coordinate the composer produces is a fraction of the icon size,
//! so paths here are plain `f32` user-space values with no notion of pixels.

use std::f32::consts::PI;

/// A point in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A single path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    /// Elliptical arc with SVG endpoint parameterization.
    ArcTo {
        radii: Point,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

impl PathCommand {
    /// The on-curve point this command ends at, if any.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(p),
            Self::QuadTo { end, .. } | Self::ArcTo { end, .. } => Some(end),
            Self::Close => None,
        }
    }
}

/// A sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    pub fn arc_to(&mut self, radii: Point, large_arc: bool, sweep: bool, end: Point) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radii,
            large_arc,
            sweep,
            end,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// On-curve vertices in drawing order, excluding the implicit return of `Close`.
    pub fn vertices(&self) -> Vec<Point> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.commands.iter().filter(|c| c.end_point().is_some()).count()
    }

    /// Returns true if the last command closes the path.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// An axis-aligned rectangle.
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(x, y))
            .line_to(Point::new(x + w, y))
            .line_to(Point::new(x + w, y + h))
            .line_to(Point::new(x, y + h))
            .close();
        path
    }

    /// The upper half of an axis-aligned ellipse, from its left to its right extreme.
    pub fn upper_half_ellipse(center: Point, rx: f32, ry: f32) -> Self {
        let mut path = Self::new();
        path.move_to(center.offset(-rx, 0.0)).arc_to(
            Point::new(rx, ry),
            false,
            true,
            center.offset(rx, 0.0),
        );
        path
    }
}

/// Builds a closed star polygon with `spikes` points.
///
/// The first vertex sits straight above `center` at `outer_radius`; vertices
/// then alternate outer and inner radii, advancing by `PI / spikes` each step.
pub fn star_path(center: Point, spikes: u32, outer_radius: f32, inner_radius: f32) -> Path {
    let step = PI / spikes as f32;
    let mut rotation = PI / 2.0 * 3.0;

    let mut path = Path::new();
    path.move_to(center.offset(0.0, -outer_radius));
    for _ in 0..spikes {
        path.line_to(center.offset(
            rotation.cos() * outer_radius,
            rotation.sin() * outer_radius,
        ));
        rotation += step;
        path.line_to(center.offset(
            rotation.cos() * inner_radius,
            rotation.sin() * inner_radius,
        ));
        rotation += step;
    }
    path.close();
    path
}

/// Builds a closed rectangle whose corners are quadratic curves of `radius`.
///
/// `radius` must not exceed half the shorter side.
pub fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Path {
    debug_assert!(
        radius <= w.min(h) / 2.0,
        "corner radius {radius} exceeds half of {w}x{h}"
    );

    let mut path = Path::new();
    path.move_to(Point::new(x + radius, y))
        .line_to(Point::new(x + w - radius, y))
        .quad_to(Point::new(x + w, y), Point::new(x + w, y + radius))
        .line_to(Point::new(x + w, y + h - radius))
        .quad_to(Point::new(x + w, y + h), Point::new(x + w - radius, y + h))
        .line_to(Point::new(x + radius, y + h))
        .quad_to(Point::new(x, y + h), Point::new(x, y + h - radius))
        .line_to(Point::new(x, y + radius))
        .quad_to(Point::new(x, y), Point::new(x + radius, y))
        .close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn five_point_star_has_eleven_vertices() {
        let path = star_path(Point::new(50.0, 50.0), 5, 20.0, 10.0);
        assert_eq!(path.vertex_count(), 11);
        assert!(path.is_closed());
    }

    #[test]
    fn star_starts_at_top_and_alternates_radii() {
        let center = Point::new(50.0, 50.0);
        let path = star_path(center, 5, 20.0, 10.0);
        let vertices = path.vertices();

        assert!(approx(vertices[0], Point::new(50.0, 30.0)));
        for (i, v) in vertices.iter().enumerate().skip(1) {
            let dist = ((v.x - center.x).powi(2) + (v.y - center.y).powi(2)).sqrt();
            let expected = if i % 2 == 1 { 20.0 } else { 10.0 };
            assert!(
                (dist - expected).abs() < 1e-3,
                "vertex {i} at distance {dist}, expected {expected}"
            );
        }
    }

    #[test]
    fn star_vertex_count_scales_with_spikes() {
        let path = star_path(Point::default(), 8, 4.0, 2.0);
        assert_eq!(path.vertex_count(), 17);
    }

    #[test]
    fn rounded_rect_with_zero_radius_is_a_rectangle() {
        let path = rounded_rect_path(10.0, 20.0, 30.0, 40.0, 0.0);
        let corners = [
            Point::new(10.0, 20.0),
            Point::new(40.0, 20.0),
            Point::new(40.0, 60.0),
            Point::new(10.0, 60.0),
        ];

        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    assert!(corners.contains(&p), "{p:?} is not a corner");
                }
                PathCommand::QuadTo { control, end } => {
                    assert_eq!(control, end, "curve should collapse to its corner");
                    assert!(corners.contains(&end));
                }
                PathCommand::ArcTo { .. } => panic!("unexpected arc"),
                PathCommand::Close => {}
            }
        }

        let mut distinct = path.vertices();
        distinct.dedup();
        assert_eq!(&distinct[..4], &corners);
        assert_eq!(distinct[4], corners[0]);
        assert!(path.is_closed());
    }

    #[test]
    fn rounded_rect_corners_are_inset_by_radius() {
        let path = rounded_rect_path(0.0, 0.0, 100.0, 50.0, 10.0);
        let vertices = path.vertices();
        assert_eq!(vertices[0], Point::new(10.0, 0.0));
        assert_eq!(vertices[1], Point::new(90.0, 0.0));
        assert_eq!(vertices[2], Point::new(100.0, 10.0));
        assert_eq!(*vertices.last().unwrap(), Point::new(10.0, 0.0));
    }

    #[test]
    fn rect_path_is_closed_quad() {
        let path = Path::rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(path.vertex_count(), 4);
        assert!(path.is_closed());
    }

    #[test]
    fn half_ellipse_spans_horizontal_diameter() {
        let path = Path::upper_half_ellipse(Point::new(50.0, 50.0), 20.0, 5.0);
        let vertices = path.vertices();
        assert_eq!(vertices, vec![Point::new(30.0, 50.0), Point::new(70.0, 50.0)]);
        assert!(!path.is_closed());
    }
}
