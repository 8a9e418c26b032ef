//! The wizard icon composition.
//!
//! [`compose`] paints the whole icon onto a [`Surface`]. Every coordinate,
//! radius, stroke width and font size is a literal fraction of the icon
//! size, so the same picture comes out at 16 px and at 512 px.
//!
//! Layers, back to front:
//!
//! 1. `background` - disc with a radial gradient anchored above center
//! 2. `rings` - flat gold outer ring and a gradient inner ring
//! 3. `particles` - 25 glowing dots from the [`PARTICLES`] table
//! 4. `hat` - curved cone with a violet glow
//! 5. `tip-star` - five-pointed star and its glow at the hat's apex
//! 6. `band` - gold band and buckle near the hat's base
//! 7. `brim` - elliptical brim and its highlight
//! 8. `card` - rounded playing card with drop shadow and two borders
//! 9. `card-glyph` - large "W" on the card
//! 10. `suits` - one suit symbol in each card corner
//! 11. `sparkles` - three plus-shaped sparkles around the card
//! 12. `title` - "WIZARD" below the card
//! 13. `aura` - faint violet wash over the upper middle

use std::f32::consts::TAU;

use crate::geometry::{Path, Point, rounded_rect_path, star_path};
use crate::paint::{Color, GradientStop, Paint, Shadow};
use crate::surface::{Baseline, DrawCommand, Shape, Surface, Text};

// ============================================================================
// Palette
// ============================================================================

const GOLD: Color = Color::hex(0xfbbf24);
const AMBER: Color = Color::hex(0xf59e0b);
const DEEP_AMBER: Color = Color::hex(0xd97706);
const CREAM: Color = Color::hex(0xfef3c7);
const LAVENDER: Color = Color::hex(0xa78bfa);
const VIOLET: Color = Color::rgb(139, 92, 246);
const HAZE: Color = Color::rgb(168, 130, 255);
const HAT_DARK: Color = Color::hex(0x2d1b69);
const HAT_DEEP: Color = Color::hex(0x4c1d95);

const GOLD_RAMP: [GradientStop; 3] = [
    GradientStop::new(0.0, GOLD),
    GradientStop::new(0.5, AMBER),
    GradientStop::new(1.0, DEEP_AMBER),
];

const TITLE_FONT: &str = Text::DEFAULT_FAMILY;
const SUIT_FONT: &str = "Arial";
const BLACK_WEIGHT: u16 = 900;

// ============================================================================
// Particle Table
// ============================================================================

/// Number of particles in the sparkle field.
pub const PARTICLE_COUNT: usize = 25;

/// One particle of the sparkle field, in fractions of the icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Angular slot; the angle is `step / 25 * TAU + 0.3` radians.
    pub step: u8,
    /// Distance from the icon center.
    pub distance: f32,
    /// Radius of the bright core; the halo is three times larger.
    pub size: f32,
    /// Peak opacity of the core and halo.
    pub alpha: f32,
}

impl Particle {
    const fn new(step: u8, distance: f32, size: f32, alpha: f32) -> Self {
        Self {
            step,
            distance,
            size,
            alpha,
        }
    }

    pub fn angle(&self) -> f32 {
        self.step as f32 / PARTICLE_COUNT as f32 * TAU + 0.3
    }

    /// Position of this particle's center on an icon of `size`.
    pub fn position(&self, size: f32) -> Point {
        let dist = size * self.distance;
        let angle = self.angle();
        Point::new(
            size / 2.0 + angle.cos() * dist,
            size / 2.0 + angle.sin() * dist,
        )
    }
}

#[rustfmt::skip]
pub const PARTICLES: [Particle; PARTICLE_COUNT] = [
    Particle::new(0, 0.22, 0.006, 0.5),
    Particle::new(1, 0.35, 0.008, 0.7),
    Particle::new(2, 0.18, 0.005, 0.4),
    Particle::new(3, 0.40, 0.010, 0.8),
    Particle::new(4, 0.28, 0.007, 0.6),
    Particle::new(5, 0.33, 0.009, 0.5),
    Particle::new(6, 0.19, 0.006, 0.7),
    Particle::new(7, 0.38, 0.011, 0.3),
    Particle::new(8, 0.25, 0.005, 0.6),
    Particle::new(9, 0.42, 0.008, 0.8),
    Particle::new(10, 0.20, 0.007, 0.4),
    Particle::new(11, 0.36, 0.010, 0.7),
    Particle::new(12, 0.30, 0.006, 0.5),
    Particle::new(13, 0.15, 0.009, 0.6),
    Particle::new(14, 0.41, 0.005, 0.8),
    Particle::new(15, 0.27, 0.008, 0.3),
    Particle::new(16, 0.34, 0.011, 0.7),
    Particle::new(17, 0.21, 0.006, 0.5),
    Particle::new(18, 0.39, 0.007, 0.4),
    Particle::new(19, 0.23, 0.010, 0.6),
    Particle::new(20, 0.37, 0.005, 0.8),
    Particle::new(21, 0.16, 0.009, 0.5),
    Particle::new(22, 0.43, 0.008, 0.3),
    Particle::new(23, 0.29, 0.006, 0.7),
    Particle::new(24, 0.32, 0.011, 0.6),
];

// ============================================================================
// Layout
// ============================================================================

/// The hat's anchor points; the band and brim hang off these.
#[derive(Debug, Clone, Copy)]
struct Hat {
    center_x: f32,
    top_y: f32,
    base_y: f32,
    width: f32,
}

impl Hat {
    fn new(s: f32) -> Self {
        Self {
            center_x: s * 0.5,
            top_y: s * 0.08,
            base_y: s * 0.42,
            width: s * 0.42,
        }
    }
}

/// The playing card's bounding box.
#[derive(Debug, Clone, Copy)]
struct Card {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Card {
    fn new(s: f32) -> Self {
        let w = s * 0.28;
        Self {
            x: s * 0.5 - w / 2.0,
            y: s * 0.40,
            w,
            h: s * 0.38,
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Paints the complete icon into the top-left `size` x `size` region of `surface`.
///
/// The output depends on nothing but `size`.
pub fn compose(surface: &mut impl Surface, size: u32) {
    let s = size as f32;
    let hat = Hat::new(s);
    let card = Card::new(s);

    layer(surface, "background", |sf| background(sf, s));
    layer(surface, "rings", |sf| rings(sf, s));
    layer(surface, "particles", |sf| particles(sf, s));
    layer(surface, "hat", |sf| hat_body(sf, s, &hat));
    layer(surface, "tip-star", |sf| tip_star(sf, s, &hat));
    layer(surface, "band", |sf| band(sf, s, &hat));
    layer(surface, "brim", |sf| brim(sf, s, &hat));
    layer(surface, "card", |sf| card_body(sf, s, &card));
    layer(surface, "card-glyph", |sf| card_glyph(sf, s, &card));
    layer(surface, "suits", |sf| suits(sf, s, &card));
    layer(surface, "sparkles", |sf| sparkles(sf, s, &card));
    layer(surface, "title", |sf| title(sf, s, &card));
    layer(surface, "aura", |sf| aura(sf, s));
}

fn layer<S: Surface>(surface: &mut S, id: &'static str, paint: impl FnOnce(&mut S)) {
    surface.begin_group(id);
    paint(surface);
    surface.end_group();
}

fn circle(center: Point, radius: f32) -> Shape {
    Shape::Circle { center, radius }
}

fn background(surface: &mut impl Surface, s: f32) {
    let paint = Paint::radial(
        Point::new(s * 0.5, s * 0.3),
        0.0,
        Point::new(s * 0.5, s * 0.5),
        s * 0.7,
        &[
            GradientStop::new(0.0, Color::hex(0x1a1040)),
            GradientStop::new(0.5, Color::hex(0x0d0b1a)),
            GradientStop::new(1.0, Color::hex(0x050510)),
        ],
    );
    surface.draw(DrawCommand::fill(
        circle(Point::new(s / 2.0, s / 2.0), s / 2.0),
        paint,
    ));
}

fn rings(surface: &mut impl Surface, s: f32) {
    let center = Point::new(s / 2.0, s / 2.0);
    surface.draw(DrawCommand::stroke(
        circle(center, s / 2.0 - s * 0.02),
        GOLD,
        s * 0.025,
    ));

    let gradient = Paint::linear(Point::new(0.0, 0.0), Point::new(s, s), &GOLD_RAMP);
    surface.draw(DrawCommand::stroke(
        circle(center, s / 2.0 - s * 0.055),
        gradient,
        s * 0.008,
    ));
}

fn particles(surface: &mut impl Surface, s: f32) {
    for particle in &PARTICLES {
        let center = particle.position(s);
        let core = s * particle.size;
        let alpha = particle.alpha;

        let halo = Paint::glow(
            center,
            core * 3.0,
            &[
                GradientStop::new(0.0, GOLD.with_alpha(alpha)),
                GradientStop::new(0.5, HAZE.with_alpha(alpha * 0.5)),
                GradientStop::new(1.0, HAZE.with_alpha(0.0)),
            ],
        );
        surface.draw(DrawCommand::fill(circle(center, core * 3.0), halo));
        surface.draw(DrawCommand::fill(
            circle(center, core),
            Color::WHITE.with_alpha(alpha),
        ));
    }
}

fn hat_body(surface: &mut impl Surface, s: f32, hat: &Hat) {
    let Hat {
        center_x: cx,
        top_y,
        base_y,
        width,
    } = *hat;

    let gradient = Paint::linear(
        Point::new(cx - width / 2.0, base_y),
        Point::new(cx, top_y),
        &[
            GradientStop::new(0.0, HAT_DARK),
            GradientStop::new(0.3, HAT_DEEP),
            GradientStop::new(0.6, Color::hex(0x6d28d9)),
            GradientStop::new(1.0, Color::hex(0x7c3aed)),
        ],
    );

    let mut path = Path::new();
    path.move_to(Point::new(cx, top_y))
        .quad_to(
            Point::new(cx - width * 0.15, base_y * 0.5),
            Point::new(cx - width / 2.0, base_y),
        )
        .line_to(Point::new(cx + width / 2.0, base_y))
        .quad_to(
            Point::new(cx + width * 0.15, base_y * 0.5),
            Point::new(cx, top_y),
        )
        .close();

    surface.draw(
        DrawCommand::fill(path, gradient)
            .with_shadow(Shadow::glow(VIOLET.with_alpha(0.6), s * 0.06)),
    );
}

fn tip_star(surface: &mut impl Surface, s: f32, hat: &Hat) {
    let center = Point::new(hat.center_x + s * 0.02, hat.top_y + s * 0.01);
    surface.draw(DrawCommand::fill(
        star_path(center, 5, s * 0.025, s * 0.012),
        GOLD,
    ));

    let glow = Paint::glow(
        center,
        s * 0.05,
        &[
            GradientStop::new(0.0, GOLD.with_alpha(0.6)),
            GradientStop::new(1.0, GOLD.with_alpha(0.0)),
        ],
    );
    surface.draw(DrawCommand::fill(circle(center, s * 0.05), glow));
}

fn band(surface: &mut impl Surface, s: f32, hat: &Hat) {
    let cx = hat.center_x;
    let band_y = hat.base_y - s * 0.04;
    let left = cx - hat.width * 0.38;
    let right = cx + hat.width * 0.38;

    let gradient = Paint::linear(
        Point::new(0.0, band_y),
        Point::new(0.0, band_y + s * 0.04),
        &GOLD_RAMP,
    );
    let mut path = Path::new();
    path.move_to(Point::new(left, band_y + s * 0.015))
        .quad_to(
            Point::new(cx, band_y - s * 0.005),
            Point::new(right, band_y + s * 0.015),
        )
        .line_to(Point::new(right, band_y + s * 0.04))
        .quad_to(
            Point::new(cx, band_y + s * 0.02),
            Point::new(left, band_y + s * 0.04),
        )
        .close();
    surface.draw(DrawCommand::fill(path, gradient));

    let buckle_y = band_y + s * 0.025;
    let (buckle_w, buckle_h) = (s * 0.04, s * 0.03);
    surface.draw(DrawCommand::stroke(
        Path::rect(cx - buckle_w / 2.0, buckle_y - buckle_h / 2.0, buckle_w, buckle_h),
        CREAM,
        s * 0.005,
    ));
}

fn brim(surface: &mut impl Surface, s: f32, hat: &Hat) {
    let cx = hat.center_x;
    let base_y = hat.base_y;

    let gradient = Paint::linear(
        Point::new(0.0, base_y),
        Point::new(0.0, base_y + s * 0.035),
        &[
            GradientStop::new(0.0, HAT_DEEP),
            GradientStop::new(1.0, HAT_DARK),
        ],
    );
    surface.draw(DrawCommand::fill(
        Shape::Ellipse {
            center: Point::new(cx, base_y + s * 0.01),
            rx: hat.width * 0.65,
            ry: s * 0.035,
        },
        gradient,
    ));

    surface.draw(DrawCommand::stroke(
        Path::upper_half_ellipse(Point::new(cx, base_y + s * 0.005), hat.width * 0.6, s * 0.02),
        VIOLET.with_alpha(0.5),
        s * 0.004,
    ));
}

fn card_body(surface: &mut impl Surface, s: f32, card: &Card) {
    let Card { x, y, w, h } = *card;

    let gradient = Paint::linear(
        Point::new(x, y),
        Point::new(x + w, y + h),
        &[
            GradientStop::new(0.0, Color::hex(0x1e1b4b)),
            GradientStop::new(0.5, Color::hex(0x1e1040)),
            GradientStop::new(1.0, Color::hex(0x0f0a2a)),
        ],
    );
    let outline = rounded_rect_path(x, y, w, h, s * 0.02);
    surface.draw(
        DrawCommand::fill(outline.clone(), gradient).with_shadow(Shadow::dropped(
            Color::rgba(0, 0, 0, 0.5),
            s * 0.03,
            s * 0.01,
        )),
    );
    surface.draw(DrawCommand::stroke(outline, DEEP_AMBER, s * 0.006));

    let inset = s * 0.015;
    surface.draw(DrawCommand::stroke(
        rounded_rect_path(x + inset, y + inset, w - inset * 2.0, h - inset * 2.0, s * 0.012),
        DEEP_AMBER.with_alpha(0.3),
        s * 0.003,
    ));
}

fn card_glyph(surface: &mut impl Surface, s: f32, card: &Card) {
    let anchor = Point::new(s * 0.5, card.y + card.h * 0.45);
    let text = Text::new("W", anchor, s * 0.22)
        .weight(BLACK_WEIGHT)
        .family(TITLE_FONT)
        .baseline(Baseline::Middle);

    let gradient = Paint::linear(
        anchor.offset(-s * 0.1, -s * 0.1),
        anchor.offset(s * 0.1, s * 0.1),
        &[
            GradientStop::new(0.0, Color::hex(0xc4b5fd)),
            GradientStop::new(0.3, Color::WHITE),
            GradientStop::new(0.7, Color::hex(0xe9d5ff)),
            GradientStop::new(1.0, LAVENDER),
        ],
    );
    surface.draw(
        DrawCommand::fill_text(text.clone(), gradient)
            .with_shadow(Shadow::glow(VIOLET.with_alpha(0.8), s * 0.04)),
    );
    surface.draw(DrawCommand::stroke_text(text, VIOLET.with_alpha(0.4), s * 0.003));
}

fn suits(surface: &mut impl Surface, s: f32, card: &Card) {
    let Card { x, y, w, h } = *card;
    let font_size = s * 0.035;
    let top = y + s * 0.04;
    let bottom = y + h - s * 0.02;
    let left = x + s * 0.03;
    let right = x + w - s * 0.03;

    let corners = [
        ("\u{2660}", Point::new(left, top), LAVENDER),
        ("\u{2665}", Point::new(right, top), Color::hex(0xf87171)),
        ("\u{2666}", Point::new(left, bottom), GOLD),
        ("\u{2663}", Point::new(right, bottom), Color::hex(0x34d399)),
    ];
    for (glyph, anchor, color) in corners {
        surface.draw(DrawCommand::fill_text(
            Text::new(glyph, anchor, font_size).family(SUIT_FONT),
            color,
        ));
    }
}

fn sparkles(surface: &mut impl Surface, s: f32, card: &Card) {
    let Card { x, y, w, h } = *card;
    sparkle(surface, Point::new(x - s * 0.04, y + h * 0.3), s * 0.02, GOLD);
    sparkle(surface, Point::new(x + w + s * 0.04, y + h * 0.5), s * 0.015, LAVENDER);
    sparkle(surface, Point::new(x + w * 0.8, y - s * 0.02), s * 0.012, GOLD);
}

/// A plus-shaped sparkle of arm length `size` with a soft glow.
fn sparkle(surface: &mut impl Surface, center: Point, size: f32, color: Color) {
    let Point { x, y } = center;
    surface.draw(
        DrawCommand::fill(
            Path::rect(x - size * 0.12, y - size, size * 0.24, size * 2.0),
            color,
        )
        .with_opacity(0.8),
    );
    surface.draw(
        DrawCommand::fill(
            Path::rect(x - size, y - size * 0.12, size * 2.0, size * 0.24),
            color,
        )
        .with_opacity(0.8),
    );

    let glow = Paint::glow(
        center,
        size * 1.5,
        &[
            GradientStop::new(0.0, color),
            GradientStop::new(1.0, Color::TRANSPARENT),
        ],
    );
    surface.draw(DrawCommand::fill(circle(center, size * 1.5), glow).with_opacity(0.4));
}

fn title(surface: &mut impl Surface, s: f32, card: &Card) {
    let title_y = card.y + card.h + s * 0.075;
    let text = Text::new("WIZARD", Point::new(s / 2.0, title_y), s * 0.075)
        .weight(BLACK_WEIGHT)
        .family(TITLE_FONT);

    let gradient = Paint::linear(
        Point::new(s * 0.25, title_y),
        Point::new(s * 0.75, title_y),
        &[
            GradientStop::new(0.0, GOLD),
            GradientStop::new(0.3, CREAM),
            GradientStop::new(0.5, GOLD),
            GradientStop::new(0.7, CREAM),
            GradientStop::new(1.0, AMBER),
        ],
    );
    surface.draw(
        DrawCommand::fill_text(text.clone(), gradient)
            .with_shadow(Shadow::glow(GOLD.with_alpha(0.6), s * 0.03)),
    );
    surface.draw(DrawCommand::stroke_text(
        text,
        Color::rgba(180, 120, 0, 0.5),
        s * 0.002,
    ));
}

fn aura(surface: &mut impl Surface, s: f32) {
    let center = Point::new(s / 2.0, s * 0.35);
    let paint = Paint::radial(
        center,
        s * 0.05,
        center,
        s * 0.45,
        &[
            GradientStop::new(0.0, VIOLET.with_alpha(0.08)),
            GradientStop::new(0.5, VIOLET.with_alpha(0.03)),
            GradientStop::new(1.0, VIOLET.with_alpha(0.0)),
        ],
    );
    surface.draw(DrawCommand::fill(circle(center, s * 0.45), paint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Operation, Scene, Target};

    fn composed(size: u32) -> Scene {
        let mut scene = Scene::new();
        compose(&mut scene, size);
        scene
    }

    #[test]
    fn layers_paint_in_order() {
        let scene = composed(128);
        let ids: Vec<_> = scene.groups().iter().map(|g| g.id).collect();
        assert_eq!(
            ids,
            [
                "background",
                "rings",
                "particles",
                "hat",
                "tip-star",
                "band",
                "brim",
                "card",
                "card-glyph",
                "suits",
                "sparkles",
                "title",
                "aura",
            ]
        );
    }

    #[test]
    fn particle_tables_match_reference_values() {
        let distances = [
            0.22, 0.35, 0.18, 0.40, 0.28, 0.33, 0.19, 0.38, 0.25, 0.42, 0.20, 0.36, 0.30, 0.15,
            0.41, 0.27, 0.34, 0.21, 0.39, 0.23, 0.37, 0.16, 0.43, 0.29, 0.32,
        ];
        let sizes = [
            0.006, 0.008, 0.005, 0.010, 0.007, 0.009, 0.006, 0.011, 0.005, 0.008, 0.007, 0.010,
            0.006, 0.009, 0.005, 0.008, 0.011, 0.006, 0.007, 0.010, 0.005, 0.009, 0.008, 0.006,
            0.011,
        ];
        let alphas = [
            0.5, 0.7, 0.4, 0.8, 0.6, 0.5, 0.7, 0.3, 0.6, 0.8, 0.4, 0.7, 0.5, 0.6, 0.8, 0.3, 0.7,
            0.5, 0.4, 0.6, 0.8, 0.5, 0.3, 0.7, 0.6,
        ];

        for (i, particle) in PARTICLES.iter().enumerate() {
            assert_eq!(particle.step as usize, i);
            assert_eq!(particle.distance, distances[i], "distance {i}");
            assert_eq!(particle.size, sizes[i], "size {i}");
            assert_eq!(particle.alpha, alphas[i], "alpha {i}");
        }
    }

    #[test]
    fn particle_angle_starts_offset_and_advances_evenly() {
        assert!((PARTICLES[0].angle() - 0.3).abs() < 1e-6);
        let delta = PARTICLES[1].angle() - PARTICLES[0].angle();
        assert!((delta - TAU / 25.0).abs() < 1e-5);
    }

    #[test]
    fn exactly_twenty_five_particles_are_drawn() {
        let scene = composed(256);
        let group = scene.group("particles").unwrap();
        // halo + core per particle
        assert_eq!(group.commands.len(), PARTICLE_COUNT * 2);

        for (particle, pair) in PARTICLES.iter().zip(group.commands.chunks(2)) {
            let expected = particle.position(256.0);
            let Target::Shape(Shape::Circle { center, radius }) = &pair[1].target else {
                panic!("particle core should be a circle");
            };
            assert_eq!(*center, expected);
            assert!((radius - 256.0 * particle.size).abs() < 1e-4);
            assert_eq!(pair[1].paint, Paint::Solid(Color::WHITE.with_alpha(particle.alpha)));
        }
    }

    #[test]
    fn particle_field_scales_with_size() {
        let small = composed(100);
        let large = composed(300);
        let centers = |scene: &Scene| -> Vec<Point> {
            scene
                .group("particles")
                .unwrap()
                .commands
                .iter()
                .filter_map(|c| match &c.target {
                    Target::Shape(Shape::Circle { center, .. }) => Some(*center),
                    _ => None,
                })
                .collect()
        };

        for (a, b) in centers(&small).iter().zip(centers(&large)) {
            assert!((a.x * 3.0 - b.x).abs() < 1e-3);
            assert!((a.y * 3.0 - b.y).abs() < 1e-3);
        }
    }

    #[test]
    fn composition_is_deterministic() {
        assert_eq!(composed(192), composed(192));
    }

    #[test]
    fn tip_star_is_a_five_point_star() {
        let scene = composed(512);
        let star = &scene.group("tip-star").unwrap().commands[0];
        let Target::Shape(Shape::Path(path)) = &star.target else {
            panic!("star should be a path");
        };
        assert_eq!(path.vertex_count(), 11);
        assert_eq!(star.paint, Paint::Solid(GOLD));
    }

    #[test]
    fn only_hat_card_glyph_and_title_cast_shadows() {
        let scene = composed(128);
        for group in scene.groups() {
            let shadowed = group.commands.iter().filter(|c| c.shadow.is_some()).count();
            let expected = match group.id {
                "hat" | "card" | "card-glyph" | "title" => 1,
                _ => 0,
            };
            assert_eq!(shadowed, expected, "group {}", group.id);
        }

        let card = &scene.group("card").unwrap().commands[0];
        let shadow = card.shadow.unwrap();
        assert!((shadow.offset_y - 1.28).abs() < 1e-4);
        assert_eq!(shadow.color, Color::rgba(0, 0, 0, 0.5));
    }

    #[test]
    fn card_outline_has_rounded_corners() {
        let scene = composed(100);
        let commands = &scene.group("card").unwrap().commands;
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0].operation, Operation::Fill));
        assert!(matches!(commands[1].operation, Operation::Stroke { .. }));

        let Target::Shape(Shape::Path(outline)) = &commands[0].target else {
            panic!("card should be a path");
        };
        let first = outline.vertices()[0];
        assert!((first.x - 38.0).abs() < 1e-4, "starts one radius right of x=36");
        assert!((first.y - 40.0).abs() < 1e-4);
    }

    #[test]
    fn text_layers_carry_expected_glyphs() {
        let scene = composed(256);
        let texts = |id: &str| -> Vec<String> {
            scene
                .group(id)
                .unwrap()
                .commands
                .iter()
                .filter_map(|c| match &c.target {
                    Target::Text(t) => Some(t.content.clone()),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(texts("card-glyph"), ["W", "W"]);
        assert_eq!(texts("suits"), ["♠", "♥", "♦", "♣"]);
        assert_eq!(texts("title"), ["WIZARD", "WIZARD"]);
    }

    #[test]
    fn card_glyph_is_black_weight_and_vertically_centered() {
        let scene = composed(200);
        let Target::Text(text) = &scene.group("card-glyph").unwrap().commands[0].target else {
            panic!("expected text");
        };
        assert_eq!(text.weight, 900);
        assert_eq!(text.baseline, Baseline::Middle);
        assert!((text.font_size - 44.0).abs() < 1e-4);
        assert!((text.anchor.y - (80.0 + 76.0 * 0.45)).abs() < 1e-3);
    }

    #[test]
    fn sparkles_use_canvas_alpha() {
        let scene = composed(128);
        let commands = &scene.group("sparkles").unwrap().commands;
        assert_eq!(commands.len(), 9);
        for trio in commands.chunks(3) {
            assert_eq!(trio[0].opacity, 0.8);
            assert_eq!(trio[1].opacity, 0.8);
            assert_eq!(trio[2].opacity, 0.4);
        }
    }
}
