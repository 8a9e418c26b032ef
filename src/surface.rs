//! The drawing-surface capability the composer paints onto.
//!
//! The composer never rasterizes anything itself. It issues [`DrawCommand`]s
//! to a [`Surface`]; the crate's own surface is [`Scene`], which records them
//! so they can be inspected directly or handed to
//! [`SvgRasterizer`](crate::SvgRasterizer) for pixels.

use crate::geometry::{Path, Point};
use crate::paint::{Color, Paint, Shadow};

// ============================================================================
// Draw Targets
// ============================================================================

/// A filled or stroked shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(Path),
    Circle { center: Point, radius: f32 },
    Ellipse { center: Point, rx: f32, ry: f32 },
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Middle,
}

/// A run of horizontally centered text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub anchor: Point,
    pub font_size: f32,
    pub weight: u16,
    pub family: &'static str,
    pub baseline: Baseline,
}

impl Text {
    pub const DEFAULT_FAMILY: &'static str = "Arial, sans-serif";

    pub fn new(content: impl Into<String>, anchor: Point, font_size: f32) -> Self {
        Self {
            content: content.into(),
            anchor,
            font_size,
            weight: 400,
            family: Self::DEFAULT_FAMILY,
            baseline: Baseline::Alphabetic,
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn family(mut self, family: &'static str) -> Self {
        self.family = family;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
}

/// What a command paints.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Shape(Shape),
    Text(Text),
}

/// How a command paints its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Fill,
    Stroke { width: f32 },
}

// ============================================================================
// DrawCommand
// ============================================================================

/// One paint operation on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub target: Target,
    pub operation: Operation,
    pub paint: Paint,
    pub shadow: Option<Shadow>,
    /// Whole-command opacity in 0.0-1.0, applied on top of the paint's alpha.
    pub opacity: f32,
}

impl DrawCommand {
    pub fn fill(shape: impl Into<Shape>, paint: impl Into<Paint>) -> Self {
        Self::new(Target::Shape(shape.into()), Operation::Fill, paint.into())
    }

    pub fn stroke(shape: impl Into<Shape>, paint: impl Into<Paint>, width: f32) -> Self {
        Self::new(
            Target::Shape(shape.into()),
            Operation::Stroke { width },
            paint.into(),
        )
    }

    pub fn fill_text(text: Text, paint: impl Into<Paint>) -> Self {
        Self::new(Target::Text(text), Operation::Fill, paint.into())
    }

    pub fn stroke_text(text: Text, paint: impl Into<Paint>, width: f32) -> Self {
        Self::new(Target::Text(text), Operation::Stroke { width }, paint.into())
    }

    fn new(target: Target, operation: Operation, paint: Paint) -> Self {
        Self {
            target,
            operation,
            paint,
            shadow: None,
            opacity: 1.0,
        }
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Applies `f` to every color this command paints with, shadow included.
    pub fn map_colors(&mut self, f: impl Fn(Color) -> Color) {
        self.paint.map_colors(&f);
        if let Some(shadow) = &mut self.shadow {
            shadow.color = f(shadow.color);
        }
    }
}

// ============================================================================
// Surface Trait
// ============================================================================

/// A 2D drawing surface.
///
/// Later commands paint over earlier ones. Groups only label runs of
/// commands; they do not change how anything is painted.
pub trait Surface {
    /// Paints one command.
    fn draw(&mut self, command: DrawCommand);

    /// Starts a labelled run of commands.
    fn begin_group(&mut self, _id: &'static str) {}

    /// Ends the current labelled run.
    fn end_group(&mut self) {}
}

// ============================================================================
// Scene
// ============================================================================

/// A labelled run of draw commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: &'static str,
    pub commands: Vec<DrawCommand>,
}

/// A recording surface.
///
/// Commands drawn outside any group land in an unnamed group with id `""`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    groups: Vec<Group>,
    open: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Finds the first group with the given id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// All commands in painting order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.groups.iter().flat_map(|g| g.commands.iter())
    }

    pub fn command_count(&self) -> usize {
        self.groups.iter().map(|g| g.commands.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.command_count() == 0
    }

    /// Rotates the hue of every color in the scene by `degrees`.
    pub fn rotate_hue(&mut self, degrees: f32) {
        for command in self.groups.iter_mut().flat_map(|g| g.commands.iter_mut()) {
            command.map_colors(|c| c.rotate_hue(degrees));
        }
    }
}

impl Surface for Scene {
    fn draw(&mut self, command: DrawCommand) {
        if !self.open {
            self.groups.push(Group {
                id: "",
                commands: Vec::new(),
            });
            self.open = true;
        }
        if let Some(group) = self.groups.last_mut() {
            group.commands.push(command);
        }
    }

    fn begin_group(&mut self, id: &'static str) {
        self.groups.push(Group {
            id,
            commands: Vec::new(),
        });
        self.open = true;
    }

    fn end_group(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> DrawCommand {
        DrawCommand::fill(
            Shape::Circle {
                center: Point::new(1.0, 1.0),
                radius: 1.0,
            },
            Color::hex(0xff0000),
        )
    }

    #[test]
    fn scene_records_groups_in_order() {
        let mut scene = Scene::new();
        scene.begin_group("a");
        scene.draw(dot());
        scene.draw(dot());
        scene.end_group();
        scene.begin_group("b");
        scene.draw(dot());
        scene.end_group();

        let ids: Vec<_> = scene.groups().iter().map(|g| g.id).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(scene.group("a").unwrap().commands.len(), 2);
        assert_eq!(scene.command_count(), 3);
    }

    #[test]
    fn ungrouped_commands_land_in_anonymous_group() {
        let mut scene = Scene::new();
        scene.begin_group("a");
        scene.draw(dot());
        scene.end_group();
        scene.draw(dot());

        assert_eq!(scene.groups().len(), 2);
        assert_eq!(scene.groups()[1].id, "");
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(dot().with_opacity(1.5).opacity, 1.0);
        assert_eq!(dot().with_opacity(-0.5).opacity, 0.0);
    }

    #[test]
    fn rotate_hue_recolors_shadows() {
        let mut scene = Scene::new();
        scene.draw(dot().with_shadow(Shadow::glow(Color::hex(0xff0000), 4.0)));
        scene.rotate_hue(120.0);

        let command = scene.commands().next().unwrap();
        let shadow = command.shadow.unwrap();
        assert!(shadow.color.g > shadow.color.r);
        let Paint::Solid(fill) = command.paint else {
            panic!("expected solid paint");
        };
        assert!(fill.g > fill.r);
    }
}
