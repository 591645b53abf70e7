//! Positions, virtual bounds, drag relocation and connection curves.

use log::debug;
use serde::Serialize;

use super::CanvasConfig;
use crate::models::{Point, Position, Roadmap, Size, StepId};

/// A step together with its resolved logical position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedStep {
    pub step_id: StepId,
    pub position: Point,
    /// False when the position comes from the default layout.
    pub explicit: bool,
}

/// Axis-aligned box in logical coordinates. `max` is the far edge of the
/// furthest card, footprint included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// A curve between two consecutive steps in linear order, in render
/// coordinates. Purely derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub from: StepId,
    pub to: StepId,
    pub start: Point,
    pub control_start: Point,
    pub control_end: Point,
    pub end: Point,
}

/// Everything a renderer needs to draw the canvas once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasLayout {
    /// Virtual canvas size in render coordinates.
    pub size: Size,
    pub steps: Vec<PlacedStep>,
    pub connections: Vec<Connection>,
}

/// Resolves every step's logical position in linear order.
///
/// Unpositioned steps are stacked below the previous step (or placed at the
/// layout origin when first), so the result is deterministic.
pub fn resolve_positions(roadmap: &Roadmap, config: &CanvasConfig) -> Vec<PlacedStep> {
    let mut placed: Vec<PlacedStep> = Vec::with_capacity(roadmap.step_count());
    for step in roadmap.steps() {
        let explicit = step.position.point().filter(Point::is_finite);
        let position = match (explicit, placed.last()) {
            (Some(point), _) => point,
            (None, Some(prev)) => Point::new(prev.position.x, prev.position.y + config.layout_spacing),
            (None, None) => config.layout_origin,
        };
        placed.push(PlacedStep {
            step_id: step.id.clone(),
            position,
            explicit: explicit.is_some(),
        });
    }
    placed
}

/// Resolved logical position of one step.
pub fn position_of(roadmap: &Roadmap, id: &StepId, config: &CanvasConfig) -> Option<Point> {
    resolve_positions(roadmap, config)
        .into_iter()
        .find(|p| &p.step_id == id)
        .map(|p| p.position)
}

/// Pins every unpositioned step at its default-layout position.
///
/// After this, removing or moving one step can no longer shift the steps
/// laid out below it.
pub fn pin_positions(roadmap: &Roadmap, config: &CanvasConfig) -> Roadmap {
    let placed = resolve_positions(roadmap, config);
    let mut next = roadmap.clone();
    for (step, place) in next.steps_mut().zip(placed) {
        if !place.explicit {
            step.position = Position::from(place.position);
        }
    }
    next
}

/// Bounding box of all cards, `None` for a roadmap without steps.
pub fn content_bounds(roadmap: &Roadmap, config: &CanvasConfig) -> Option<Bounds> {
    resolve_positions(roadmap, config)
        .iter()
        .map(|p| p.position)
        .fold(None, |acc: Option<Bounds>, p| {
            let far = Point::new(p.x + config.footprint.width, p.y + config.footprint.height);
            Some(match acc {
                None => Bounds { min: p, max: far },
                Some(b) => Bounds {
                    min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point::new(b.max.x.max(far.x), b.max.y.max(far.y)),
                },
            })
        })
}

/// Size of the virtual canvas: the content's far edge plus padding on both
/// sides, never smaller than the configured minimum.
pub fn virtual_size(roadmap: &Roadmap, config: &CanvasConfig) -> Size {
    match content_bounds(roadmap, config) {
        None => config.min_size,
        Some(bounds) => Size::new(
            config
                .min_size
                .width
                .max(bounds.max.x.max(0.0) + 2.0 * config.padding),
            config
                .min_size
                .height
                .max(bounds.max.y.max(0.0) + 2.0 * config.padding),
        ),
    }
}

/// Logical to render coordinates.
pub fn to_render(point: Point, config: &CanvasConfig) -> Point {
    Point::new(point.x + config.padding, point.y + config.padding)
}

/// Allowed range of logical coordinates for a card's top-left corner on a
/// canvas of the given size.
pub fn drag_limits(canvas: Size, config: &CanvasConfig) -> Bounds {
    let low = -config.padding + config.margin;
    let high_x = canvas.width - config.padding - config.footprint.width - config.margin;
    let high_y = canvas.height - config.padding - config.footprint.height - config.margin;
    Bounds {
        min: Point::new(low, low),
        max: Point::new(high_x.max(low), high_y.max(low)),
    }
}

/// Clamps a logical position into the drag limits of the given canvas.
pub fn clamp_to_canvas(point: Point, canvas: Size, config: &CanvasConfig) -> Point {
    let limits = drag_limits(canvas, config);
    // NaN limits from a broken config are skipped by max/min.
    Point::new(
        point.x.max(limits.min.x).min(limits.max.x),
        point.y.max(limits.min.y).min(limits.max.y),
    )
}

/// Moves a step to an absolute logical position, clamped into the current
/// virtual canvas. Unknown ids and non-finite targets are ignored.
///
/// All other steps are pinned first so none of them follows the move.
pub fn move_step(roadmap: &Roadmap, id: &StepId, target: Point, config: &CanvasConfig) -> Roadmap {
    if !target.is_finite() || roadmap.step(id).is_none() {
        debug!("move ignored for step {id}");
        return roadmap.clone();
    }
    let clamped = clamp_to_canvas(target, virtual_size(roadmap, config), config);
    let mut next = pin_positions(roadmap, config);
    if let Some(step) = next.step_mut(id) {
        step.position = Position::from(clamped);
    }
    next
}

/// Commits a drag: the step's current position plus the pointer delta,
/// clamped into the current virtual canvas.
///
/// An unpositioned step starts from its default-layout position.
pub fn drag_step(roadmap: &Roadmap, id: &StepId, delta: Point, config: &CanvasConfig) -> Roadmap {
    let Some(origin) = position_of(roadmap, id, config) else {
        debug!("drag ignored: step {id} not found");
        return roadmap.clone();
    };
    if !delta.is_finite() {
        return roadmap.clone();
    }
    move_step(
        roadmap,
        id,
        Point::new(origin.x + delta.x, origin.y + delta.y),
        config,
    )
}

/// Connection curves between consecutive steps in linear order, from the
/// bottom center of one card to the top center of the next.
pub fn connections(roadmap: &Roadmap, config: &CanvasConfig) -> Vec<Connection> {
    let half_width = config.footprint.width / 2.0;
    resolve_positions(roadmap, config)
        .windows(2)
        .map(|pair| {
            let from = to_render(pair[0].position, config);
            let to = to_render(pair[1].position, config);
            let start = Point::new(from.x + half_width, from.y + config.footprint.height);
            let end = Point::new(to.x + half_width, to.y);
            let bend = ((end.y - start.y).abs() / 2.0).max(40.0);
            Connection {
                from: pair[0].step_id.clone(),
                to: pair[1].step_id.clone(),
                start,
                control_start: Point::new(start.x, start.y + bend),
                control_end: Point::new(end.x, end.y - bend),
                end,
            }
        })
        .collect()
}

/// Computes the full layout of a roadmap in one pass.
pub fn layout(roadmap: &Roadmap, config: &CanvasConfig) -> CanvasLayout {
    CanvasLayout {
        size: virtual_size(roadmap, config),
        steps: resolve_positions(roadmap, config),
        connections: connections(roadmap, config),
    }
}
