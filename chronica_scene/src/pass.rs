// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use chronica_axis::{AxisScale, TickPlan, ViewState};
use chronica_model::{Entity, EntityId, Event, EventId, Lane, LaneId, PositionOverride, Relation};
use chronica_placer::{Candidate, LanePlacer};
use chronica_range::{YearRange, resolve_range};
use hashbrown::HashMap;
use kurbo::{Line, Point, Rect, Size};
use smallvec::SmallVec;

use crate::SceneParams;

/// Identifier of a placed item: an entity label or an event marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemId {
    /// An entity's placed label.
    Entity(EntityId),
    /// An event's placed marker/label.
    Event(EventId),
}

/// The input records of one placement pass, immutable for its duration.
#[derive(Copy, Clone, Debug)]
pub struct SceneInput<'a> {
    /// Lanes in view, in display order (top to bottom).
    pub lanes: &'a [Lane],
    /// Entities across all lanes; filtered per lane by the pass.
    pub entities: &'a [Entity],
    /// Events across all lanes.
    pub events: &'a [Event],
    /// Relations between entities.
    pub relations: &'a [Relation],
}

/// Vertical geometry of one lane in the stacked view.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneLayout {
    /// The lane.
    pub id: LaneId,
    /// Lane display name.
    pub name: String,
    /// The lane's strip of the surface.
    pub bounds: Rect,
    /// Y of the lane's horizontal axis line.
    pub axis_y: f64,
}

/// One gridline, positioned on the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Year value of the gridline.
    pub year: f64,
    /// Surface x coordinate.
    pub x: f64,
    /// `true` for labeled (major) gridlines.
    pub major: bool,
}

/// A placed entity label or event marker.
///
/// Produced fresh each pass; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// What was placed.
    pub id: ItemId,
    /// The lane it belongs to.
    pub lane: LaneId,
    /// Final bounding box in surface pixels.
    pub rect: Rect,
    /// Label text.
    pub label: String,
}

/// A drawable relation between two placed entities.
#[derive(Clone, Debug, PartialEq)]
pub struct RelationLine {
    /// Source entity.
    pub from: EntityId,
    /// Target entity.
    pub to: EntityId,
    /// Segment between the two placed label centers.
    pub line: Line,
    /// Optional label drawn along the segment.
    pub label: Option<String>,
}

/// The complete output geometry of one placement pass.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The resolved shared year window.
    pub range: YearRange,
    /// The year ↔ pixel transform used for every position in the scene.
    pub axis: AxisScale,
    /// Snapshot of the view state the pass ran against.
    pub view: ViewState,
    /// Stacked lane geometry, top to bottom.
    pub lanes: Vec<LaneLayout>,
    /// Gridlines across the full range.
    pub ticks: Vec<TickMark>,
    /// Placed items in placement order (later = drawn on top).
    pub items: Vec<PlacedItem>,
    /// Relations whose endpoints both resolved to placed entities.
    pub relations: Vec<RelationLine>,
}

impl Scene {
    /// Converts a completed drag of an entity into the override record the
    /// host persists: the drop position plus the year under it.
    #[must_use]
    pub fn position_override(&self, entity: EntityId, drop: Point) -> PositionOverride {
        PositionOverride {
            entity,
            x: drop.x,
            y: drop.y,
            year: self.axis.x_to_year(drop.x),
        }
    }

    /// Returns the placed geometry for an item, if it was laid out.
    #[must_use]
    pub fn placed(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Runs the placement pass: range → axis → ticks → per-lane placement →
/// relations.
///
/// Pure in all inputs; call it again whenever any of them change. `measure`
/// supplies the natural pixel size of a label (see
/// [`crate::estimate_label_size`] for a metrics-free fallback).
///
/// Entities whose anchor year does not resolve, and relations with an
/// unplaced endpoint, are silently skipped; degenerate inputs produce an
/// empty but valid scene over the default year window.
#[must_use]
pub fn layout(
    input: &SceneInput<'_>,
    view: &ViewState,
    params: &SceneParams,
    measure: impl Fn(&str) -> Size,
) -> Scene {
    let range = resolve_range(input.lanes, input.entities, input.events);
    let axis = AxisScale::new(range, view, &params.axis);

    let plan = TickPlan::choose(axis.density(), params.min_major_spacing);
    let ticks = plan
        .ticks(range)
        .map(|tick| TickMark {
            year: tick.year,
            x: axis.year_to_x(tick.year),
            major: tick.major,
        })
        .collect();

    let mut lanes = Vec::with_capacity(input.lanes.len());
    let mut items = Vec::new();
    if !input.lanes.is_empty() {
        let lane_height = view.pixel_height / input.lanes.len() as f64;
        for (index, lane) in input.lanes.iter().enumerate() {
            let top = index as f64 * lane_height;
            let bounds = Rect::new(0.0, top, view.pixel_width, top + lane_height);
            let axis_y = top + lane_height * params.axis_fraction;
            place_lane(
                lane, input, &axis, view, params, bounds, axis_y, &measure, &mut items,
            );
            lanes.push(LaneLayout {
                id: lane.id,
                name: lane.name.clone(),
                bounds,
                axis_y,
            });
        }
    }

    let relations = connect(input.relations, &items);

    Scene {
        range,
        axis,
        view: *view,
        lanes,
        ticks,
        items,
        relations,
    }
}

/// Runs the pass against a fixed-resolution surface with a reset view.
///
/// This is the export path: `scale = 1`, no pan, caller-supplied pixel
/// dimensions. Because it is the same pipeline, the output geometry is
/// pixel-identical to the live view at scale 1.
#[must_use]
pub fn export_layout(
    input: &SceneInput<'_>,
    pixel_width: f64,
    pixel_height: f64,
    params: &SceneParams,
    measure: impl Fn(&str) -> Size,
) -> Scene {
    layout(input, &ViewState::new(pixel_width, pixel_height), params, measure)
}

/// Places one lane's entities and events into a shared obstacle set.
///
/// Entities prefer the rows above the axis line and events the rows below,
/// but both compete for the same vertical space, so they go through one
/// placer per lane. Items from other lanes never interfere.
fn place_lane(
    lane: &Lane,
    input: &SceneInput<'_>,
    axis: &AxisScale,
    view: &ViewState,
    params: &SceneParams,
    bounds: Rect,
    axis_y: f64,
    measure: &impl Fn(&str) -> Size,
    items: &mut Vec<PlacedItem>,
) {
    let mut labels: HashMap<ItemId, &str> = HashMap::new();
    let mut candidates: SmallVec<[Candidate<ItemId>; 32]> = SmallVec::new();

    for entity in input.entities.iter().filter(|e| e.lane == lane.id) {
        let Some(year) = entity.anchor_year() else {
            continue;
        };
        let size = measure(&entity.label);
        let id = ItemId::Entity(entity.id);
        labels.insert(id, &entity.label);
        candidates.push(Candidate {
            source: id,
            x: axis.year_to_x(year),
            width: size.width,
            height: size.height,
            preferred_y: axis_y - params.label_gap - size.height / 2.0,
        });
    }
    for event in input.events.iter().filter(|e| e.lane == lane.id) {
        let size = measure(&event.label);
        let id = ItemId::Event(event.id);
        labels.insert(id, &event.label);
        candidates.push(Candidate {
            source: id,
            x: axis.year_to_x(event.year),
            width: size.width,
            height: size.height,
            preferred_y: axis_y + params.label_gap + size.height / 2.0,
        });
    }

    let mut placer = LanePlacer::new(&params.placer, view.scale, bounds.y0, bounds.y1);
    placer.place_all(candidates);

    for placed in placer.into_placed() {
        let label = labels.get(&placed.source).copied().unwrap_or("");
        items.push(PlacedItem {
            id: placed.source,
            lane: lane.id,
            rect: placed.rect,
            label: String::from(label),
        });
    }
}

/// Resolves relations into segments between placed entity centers.
/// Relations with a missing or unplaced endpoint are skipped.
fn connect(relations: &[Relation], items: &[PlacedItem]) -> Vec<RelationLine> {
    let mut centers: HashMap<EntityId, Point> = HashMap::new();
    for item in items {
        if let ItemId::Entity(id) = item.id {
            centers.insert(id, item.rect.center());
        }
    }

    relations
        .iter()
        .filter_map(|relation| {
            let from = centers.get(&relation.from)?;
            let to = centers.get(&relation.to)?;
            Some(RelationLine {
                from: relation.from,
                to: relation.to,
                line: Line::new(*from, *to),
                label: relation.label.clone(),
            })
        })
        .collect()
}
