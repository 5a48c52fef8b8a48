// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::{ItemId, Scene};

/// A backend-neutral draw primitive.
///
/// The scene flattens itself into these so hosts paint without re-deriving
/// any geometry; a canvas backend strokes/fills them, the SVG emitter
/// turns them into markup. Commands are emitted back-to-front: gridlines,
/// lane furniture, relations, items, then labels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// A vertical gridline across the surface.
    GridLine {
        /// The segment to stroke.
        line: Line,
        /// `true` for labeled (major) gridlines.
        major: bool,
    },
    /// A year label under a major gridline.
    TickLabel {
        /// Anchor position (top-center of the label).
        at: Point,
        /// The year, as rendered on the axis.
        year: f64,
    },
    /// A lane's horizontal axis line.
    LaneRule {
        /// The segment to stroke.
        line: Line,
    },
    /// A lane's display name, anchored at the lane's top-left.
    LaneLabel {
        /// Anchor position.
        at: Point,
        /// Lane name.
        text: String,
    },
    /// A relation segment between two placed entities.
    Relation {
        /// Start of the segment (source entity center).
        from: Point,
        /// End of the segment (target entity center); arrowhead end.
        to: Point,
        /// Optional label for the segment midpoint.
        label: Option<String>,
    },
    /// A placed item's bounding box.
    ItemBox {
        /// The item.
        id: ItemId,
        /// Box to fill/stroke.
        rect: Rect,
    },
    /// A placed item's label text, centered in its box.
    ItemLabel {
        /// The item.
        id: ItemId,
        /// Center of the label box.
        at: Point,
        /// Label text.
        text: String,
    },
}

impl Scene {
    /// Flattens the scene into draw primitives, back to front.
    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCmd> {
        let height = self.view.pixel_height;
        let mut cmds = Vec::new();

        for tick in &self.ticks {
            cmds.push(DrawCmd::GridLine {
                line: Line::new((tick.x, 0.0), (tick.x, height)),
                major: tick.major,
            });
            if tick.major {
                cmds.push(DrawCmd::TickLabel {
                    at: Point::new(tick.x, height),
                    year: tick.year,
                });
            }
        }

        for lane in &self.lanes {
            cmds.push(DrawCmd::LaneRule {
                line: Line::new((lane.bounds.x0, lane.axis_y), (lane.bounds.x1, lane.axis_y)),
            });
            cmds.push(DrawCmd::LaneLabel {
                at: Point::new(lane.bounds.x0, lane.bounds.y0),
                text: lane.name.clone(),
            });
        }

        for relation in &self.relations {
            cmds.push(DrawCmd::Relation {
                from: relation.line.p0,
                to: relation.line.p1,
                label: relation.label.clone(),
            });
        }

        for item in &self.items {
            cmds.push(DrawCmd::ItemBox {
                id: item.id,
                rect: item.rect,
            });
        }
        for item in &self.items {
            cmds.push(DrawCmd::ItemLabel {
                id: item.id,
                at: item.rect.center(),
                text: item.label.clone(),
            });
        }

        cmds
    }
}
