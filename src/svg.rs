//! SVG serialization and rasterization using resvg/usvg.
//!
//! A [`Scene`] is written out as a self-contained SVG document in user-space
//! units (one unit per output pixel) and rendered with resvg into a
//! tiny-skia pixmap, which is then converted to an [`image::RgbaImage`].

use std::fmt::Write as _;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::fontdb::{self, Family, Query};
use resvg::usvg::{Options, Tree};
use tracing::debug;

use crate::error::{IconError, IconResult};
use crate::geometry::{Path, PathCommand};
use crate::icon::IconImage;
use crate::paint::{GradientStop, Paint, Shadow};
use crate::surface::{Baseline, DrawCommand, Operation, Scene, Shape, Target, Text};

/// Families tried, in order, when the system has no Arial.
const SANS_SERIF_FALLBACKS: &[&str] = &[
    "Liberation Sans",
    "Arimo",
    "Helvetica",
    "DejaVu Sans",
    "Noto Sans",
];

// ============================================================================
// Serialization
// ============================================================================

impl Scene {
    /// Serializes the scene as an SVG document of `size` x `size` user units.
    pub fn to_svg(&self, size: u32) -> String {
        let mut writer = SvgWriter::new(size);
        for group in self.groups() {
            if group.id.is_empty() {
                writer.out.push_str("<g>");
            } else {
                let _ = write!(writer.out, r#"<g id="{}">"#, escape(group.id));
            }
            for command in &group.commands {
                writer.command(command);
            }
            writer.out.push_str("</g>");
        }
        writer.finish()
    }
}

struct SvgWriter {
    out: String,
    size: u32,
    next_id: usize,
}

impl SvgWriter {
    fn new(size: u32) -> Self {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        Self {
            out,
            size,
            next_id: 0,
        }
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }

    fn fresh_id(&mut self, prefix: char) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn command(&mut self, command: &DrawCommand) {
        let paint = self.paint_ref(&command.paint);
        let filter = command.shadow.map(|shadow| self.shadow_filter(&shadow));

        let mut attrs = String::new();
        match command.operation {
            Operation::Fill => {
                let _ = write!(attrs, r#" fill="{}""#, paint.value);
                if let Some(alpha) = paint.alpha {
                    let _ = write!(attrs, r#" fill-opacity="{}""#, num(alpha));
                }
            }
            Operation::Stroke { width } => {
                let _ = write!(
                    attrs,
                    r#" fill="none" stroke="{}" stroke-width="{}""#,
                    paint.value,
                    num(width)
                );
                if let Some(alpha) = paint.alpha {
                    let _ = write!(attrs, r#" stroke-opacity="{}""#, num(alpha));
                }
            }
        }
        if command.opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, num(command.opacity));
        }
        if let Some(id) = filter {
            let _ = write!(attrs, r#" filter="url(#{id})""#);
        }

        match &command.target {
            Target::Shape(Shape::Path(path)) => {
                let _ = write!(self.out, r#"<path d="{}"{attrs}/>"#, path_data(path));
            }
            Target::Shape(Shape::Circle { center, radius }) => {
                let _ = write!(
                    self.out,
                    r#"<circle cx="{}" cy="{}" r="{}"{attrs}/>"#,
                    num(center.x),
                    num(center.y),
                    num(*radius)
                );
            }
            Target::Shape(Shape::Ellipse { center, rx, ry }) => {
                let _ = write!(
                    self.out,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{attrs}/>"#,
                    num(center.x),
                    num(center.y),
                    num(*rx),
                    num(*ry)
                );
            }
            Target::Text(text) => self.text(text, &attrs),
        }
    }

    fn text(&mut self, text: &Text, attrs: &str) {
        let baseline = match text.baseline {
            Baseline::Alphabetic => "alphabetic",
            Baseline::Middle => "middle",
        };
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="{baseline}" font-family="{}" font-weight="{}" font-size="{}"{attrs}>{}</text>"#,
            num(text.anchor.x),
            num(text.anchor.y),
            escape(text.family),
            text.weight,
            num(text.font_size),
            escape(&text.content)
        );
    }

    /// Emits any gradient definition `paint` needs and returns how to reference it.
    fn paint_ref(&mut self, paint: &Paint) -> PaintRef {
        match paint {
            Paint::Solid(color) => PaintRef {
                value: color.to_hex(),
                alpha: (color.a < 1.0).then_some(color.a),
            },
            Paint::LinearGradient { start, end, stops } => {
                let id = self.fresh_id('p');
                let _ = write!(
                    self.out,
                    r#"<defs><linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    num(start.x),
                    num(start.y),
                    num(end.x),
                    num(end.y)
                );
                self.stops(stops);
                self.out.push_str("</linearGradient></defs>");
                PaintRef::url(&id)
            }
            Paint::RadialGradient {
                focal,
                focal_radius,
                center,
                radius,
                stops,
            } => {
                // resvg starts every radial gradient at a zero-radius focal
                // point, so a concentric inner circle is folded into the stops.
                let (focal_radius, stops) =
                    if focal == center && *focal_radius > 0.0 && *radius > *focal_radius {
                        (0.0, fold_focal_radius(stops, *focal_radius, *radius))
                    } else {
                        (*focal_radius, stops.clone())
                    };

                let id = self.fresh_id('p');
                let _ = write!(
                    self.out,
                    r#"<defs><radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}" fx="{}" fy="{}" fr="{}">"#,
                    num(center.x),
                    num(center.y),
                    num(*radius),
                    num(focal.x),
                    num(focal.y),
                    num(focal_radius)
                );
                self.stops(&stops);
                self.out.push_str("</radialGradient></defs>");
                PaintRef::url(&id)
            }
        }
    }

    fn stops(&mut self, stops: &[GradientStop]) {
        for stop in stops {
            let _ = write!(
                self.out,
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                num(stop.offset),
                stop.color.to_hex(),
                num(stop.color.a)
            );
        }
    }

    /// Emits a drop-shadow filter covering the whole canvas and returns its id.
    fn shadow_filter(&mut self, shadow: &Shadow) -> String {
        let id = self.fresh_id('f');
        let _ = write!(
            self.out,
            r#"<defs><filter id="{id}" filterUnits="userSpaceOnUse" x="0" y="0" width="{size}" height="{size}"><feDropShadow dx="0" dy="{}" stdDeviation="{}" flood-color="{}" flood-opacity="{}"/></filter></defs>"#,
            num(shadow.offset_y),
            num(shadow.std_deviation()),
            shadow.color.to_hex(),
            num(shadow.color.a),
            size = self.size
        );
        id
    }
}

/// Maps stops spread between radii `inner` and `outer` onto the full `0..outer` range.
fn fold_focal_radius(stops: &[GradientStop], inner: f32, outer: f32) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|stop| GradientStop {
            offset: (inner + stop.offset * (outer - inner)) / outer,
            ..*stop
        })
        .collect()
}

struct PaintRef {
    value: String,
    alpha: Option<f32>,
}

impl PaintRef {
    fn url(id: &str) -> Self {
        Self {
            value: format!("url(#{id})"),
            alpha: None,
        }
    }
}

/// Converts a path to SVG path data.
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for cmd in path.commands() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match *cmd {
            PathCommand::MoveTo(p) => write!(d, "M{} {}", num(p.x), num(p.y)),
            PathCommand::LineTo(p) => write!(d, "L{} {}", num(p.x), num(p.y)),
            PathCommand::QuadTo { control, end } => write!(
                d,
                "Q{} {} {} {}",
                num(control.x),
                num(control.y),
                num(end.x),
                num(end.y)
            ),
            PathCommand::ArcTo {
                radii,
                large_arc,
                sweep,
                end,
            } => write!(
                d,
                "A{} {} 0 {} {} {} {}",
                num(radii.x),
                num(radii.y),
                u8::from(large_arc),
                u8::from(sweep),
                num(end.x),
                num(end.y)
            ),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

/// Formats a number with at most three decimals and no trailing zeros.
fn num(value: f32) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders scenes to pixels through resvg.
pub struct SvgRasterizer {
    options: Options<'static>,
}

impl SvgRasterizer {
    /// Creates a rasterizer that renders text with the system's fonts.
    pub fn new() -> Self {
        let mut options = Options::default();
        let db = Arc::make_mut(&mut options.fontdb);
        db.load_system_fonts();
        configure_sans_serif(db);
        debug!(faces = db.len(), "loaded system fonts");
        Self { options }
    }

    /// Creates a rasterizer with an empty font database; text is not drawn.
    pub fn without_system_fonts() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Number of font faces available for text.
    pub fn font_count(&self) -> usize {
        self.options.fontdb.len()
    }

    /// Rasterizes `scene` into a `size` x `size` image.
    pub fn rasterize(&self, scene: &Scene, size: u32) -> IconResult<IconImage> {
        if size == 0 {
            return Err(IconError::InvalidSize { size });
        }
        let svg = scene.to_svg(size);
        debug!(size, bytes = svg.len(), "rasterizing scene");
        let data = render_svg(&svg, size, &self.options)?;
        Ok(IconImage::new(data))
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Points the generic `sans-serif` family at an installed face when Arial is absent.
fn configure_sans_serif(db: &mut fontdb::Database) {
    let has_family = |db: &fontdb::Database, name: &str| {
        db.query(&Query {
            families: &[Family::Name(name)],
            ..Query::default()
        })
        .is_some()
    };

    if has_family(db, "Arial") {
        return;
    }
    let fallback = SANS_SERIF_FALLBACKS
        .iter()
        .find(|name| has_family(db, name))
        .map(|name| name.to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        });
    if let Some(name) = fallback {
        debug!(family = %name, "using fallback sans-serif family");
        db.set_sans_serif_family(name);
    }
}

/// Renders SVG markup into a `size` x `size` RGBA image.
///
/// The document is scaled uniformly so its larger dimension spans `size`.
pub fn render_svg(svg_data: &str, size: u32, options: &Options) -> IconResult<RgbaImage> {
    let tree = Tree::from_str(svg_data, options)?;
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::PixmapAllocation { size })?;

    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::paint::Color;
    use crate::surface::Surface;

    const SIMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><circle cx="50" cy="50" r="40" fill="#ff0000"/></svg>"##;

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.25), "0.25");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn path_data_covers_every_command() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .quad_to(Point::new(10.0, 10.0), Point::new(0.0, 10.0))
            .arc_to(Point::new(5.0, 2.5), false, true, Point::new(0.0, 0.0))
            .close();
        assert_eq!(path_data(&path), "M0 0 L10 0 Q10 10 0 10 A5 2.5 0 0 1 0 0 Z");
    }

    #[test]
    fn scene_svg_declares_gradients_and_filters() {
        let mut scene = Scene::new();
        scene.begin_group("glow");
        scene.draw(
            DrawCommand::fill(
                Shape::Circle {
                    center: Point::new(8.0, 8.0),
                    radius: 8.0,
                },
                Paint::radial(
                    Point::new(8.0, 4.0),
                    0.0,
                    Point::new(8.0, 8.0),
                    11.0,
                    &[
                        GradientStop::new(0.0, Color::hex(0x1a1040)),
                        GradientStop::new(1.0, Color::hex(0x050510)),
                    ],
                ),
            )
            .with_shadow(Shadow::dropped(Color::rgba(0, 0, 0, 0.5), 4.0, 1.0)),
        );
        scene.end_group();

        let svg = scene.to_svg(16);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"<g id="glow">"#));
        assert!(svg.contains(r#"<radialGradient id="p0" gradientUnits="userSpaceOnUse" cx="8" cy="8" r="11" fx="8" fy="4" fr="0">"#));
        assert!(svg.contains(r##"stop-color="#1a1040""##));
        assert!(svg.contains(r#"stdDeviation="2""#));
        assert!(svg.contains(r#"filter="url(#f1)""#));
        assert!(svg.contains(r#"fill="url(#p0)""#));
    }

    #[test]
    fn translucent_solid_stroke_uses_stroke_opacity() {
        let mut scene = Scene::new();
        scene.draw(
            DrawCommand::stroke(
                Path::rect(0.0, 0.0, 4.0, 4.0),
                Color::rgba(217, 119, 6, 0.3),
                0.5,
            )
            .with_opacity(0.8),
        );

        let svg = scene.to_svg(4);
        assert!(svg.contains(r##"fill="none" stroke="#d97706" stroke-width="0.5" stroke-opacity="0.3" opacity="0.8""##));
    }

    #[test]
    fn text_is_escaped_and_centered() {
        let mut scene = Scene::new();
        scene.draw(DrawCommand::fill_text(
            Text::new("A&B", Point::new(5.0, 5.0), 4.0)
                .weight(900)
                .baseline(Baseline::Middle),
            Color::WHITE,
        ));

        let svg = scene.to_svg(10);
        assert!(svg.contains("A&amp;B</text>"));
        assert!(svg.contains(r#"text-anchor="middle" dominant-baseline="middle""#));
        assert!(svg.contains(r#"font-weight="900""#));
    }

    #[test]
    fn render_simple_svg() {
        let img = render_svg(SIMPLE_SVG, 50, &Options::default()).unwrap();
        assert_eq!(img.dimensions(), (50, 50));

        let center = img.get_pixel(25, 25);
        assert_eq!(center.0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0, "corner should be transparent");
    }

    #[test]
    fn rasterize_empty_scene() {
        let image = SvgRasterizer::without_system_fonts()
            .rasterize(&Scene::new(), 16)
            .unwrap();
        assert_eq!(image.data.dimensions(), (16, 16));
    }

    #[test]
    fn rasterize_rejects_zero_size() {
        let result = SvgRasterizer::without_system_fonts().rasterize(&Scene::new(), 0);
        assert!(matches!(result, Err(IconError::InvalidSize { size: 0 })));
    }

    fn red_to_blue_disc(focal_radius: f32) -> Scene {
        let center = Point::new(50.0, 50.0);
        let mut scene = Scene::new();
        scene.draw(DrawCommand::fill(
            Shape::Circle {
                center,
                radius: 45.0,
            },
            Paint::radial(
                center,
                focal_radius,
                center,
                45.0,
                &[
                    GradientStop::new(0.0, Color::hex(0xff0000)),
                    GradientStop::new(1.0, Color::hex(0x0000ff)),
                ],
            ),
        ));
        scene
    }

    #[test]
    fn concentric_inner_radius_is_folded_into_stops() {
        let svg = red_to_blue_disc(30.0).to_svg(100);
        assert!(svg.contains(r#"fr="0""#));
        assert!(svg.contains(r#"<stop offset="0.667""#));
        assert!(svg.contains(r#"<stop offset="1""#));
    }

    #[test]
    fn inside_inner_circle_paints_first_stop() {
        let rasterizer = SvgRasterizer::without_system_fonts();

        let folded = rasterizer.rasterize(&red_to_blue_disc(30.0), 100).unwrap();
        assert_eq!(folded.data.get_pixel(65, 50).0, [255, 0, 0, 255]);

        let plain = rasterizer.rasterize(&red_to_blue_disc(0.0), 100).unwrap();
        assert_ne!(plain.data.get_pixel(65, 50).0, [255, 0, 0, 255]);
    }

    #[test]
    fn system_fonts_resolve_sans_serif() {
        let rasterizer = SvgRasterizer::new();
        if rasterizer.font_count() == 0 {
            eprintln!("no system fonts installed, skipping");
            return;
        }
        let query = Query {
            families: &[Family::SansSerif],
            ..Query::default()
        };
        assert!(rasterizer.options.fontdb.query(&query).is_some());
    }

    #[test]
    fn rasterizer_without_fonts_has_empty_database() {
        assert_eq!(SvgRasterizer::without_system_fonts().font_count(), 0);
    }
}
