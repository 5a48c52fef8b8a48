// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Incremental movement tracking for one pointer drag.
///
/// Tracks the start and most recent pointer positions; [`DragTrack::advance`]
/// yields the delta since the previous update, which is what pan and item
/// drags apply per move event.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragTrack {
    session: Option<(Point, Point)>,
}

impl DragTrack {
    /// Begins a drag at `pos`, replacing any session in flight.
    pub fn begin(&mut self, pos: Point) {
        self.session = Some((pos, pos));
    }

    /// Advances to `pos`, returning the movement since the last update.
    ///
    /// Returns `None` when no drag is in flight.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let (_, last) = self.session.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Total movement from the drag start to `pos`, if a drag is in flight.
    #[must_use]
    pub fn displacement(&self, pos: Point) -> Option<Vec2> {
        self.session.map(|(start, _)| pos - start)
    }

    /// Ends the drag, returning the last tracked position.
    pub fn finish(&mut self) -> Option<Point> {
        self.session.take().map(|(_, last)| last)
    }

    /// Returns `true` while a drag is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

/// Completed item drag: the identifier and where the pointer ended up.
///
/// The host converts the position into a persisted override (the scene
/// crate resolves the year under `position.x`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEnd<K> {
    /// The dragged item.
    pub target: K,
    /// Final pointer position in surface pixels.
    pub position: Point,
}

/// Drag session for repositioning a single item (e.g. an entity label).
///
/// Unlike a pan, an item drag has a target and a meaningful end product:
/// [`ItemDrag::finish`] reports the drop position for persistence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemDrag<K> {
    target: Option<K>,
    track: DragTrack,
}

impl<K> Default for ItemDrag<K> {
    fn default() -> Self {
        Self {
            target: None,
            track: DragTrack::default(),
        }
    }
}

impl<K: Copy> ItemDrag<K> {
    /// Begins dragging `target` from `pos`.
    pub fn begin(&mut self, target: K, pos: Point) {
        self.target = Some(target);
        self.track.begin(pos);
    }

    /// Advances the drag, returning the delta to move the item's visual by.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        self.target.and(self.track.advance(pos))
    }

    /// The item currently being dragged, if any.
    #[must_use]
    pub fn target(&self) -> Option<K> {
        self.target
    }

    /// Ends the drag at `pos`, returning the completed-drag record.
    pub fn finish(&mut self, pos: Point) -> Option<DragEnd<K>> {
        let target = self.target.take()?;
        self.track.finish();
        Some(DragEnd {
            target,
            position: pos,
        })
    }

    /// Abandons the drag without producing a result (pointer left the
    /// surface). Nothing to roll back; positions were never committed.
    pub fn cancel(&mut self) {
        self.target = None;
        self.track.finish();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{DragTrack, ItemDrag};

    #[test]
    fn advance_yields_incremental_deltas() {
        let mut track = DragTrack::default();
        assert!(track.advance(Point::new(1.0, 1.0)).is_none());

        track.begin(Point::new(0.0, 0.0));
        assert_eq!(track.advance(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(track.advance(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            track.displacement(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn finish_reports_last_position_and_clears() {
        let mut track = DragTrack::default();
        track.begin(Point::new(2.0, 2.0));
        track.advance(Point::new(9.0, 4.0));

        assert_eq!(track.finish(), Some(Point::new(9.0, 4.0)));
        assert!(!track.is_active());
        assert!(track.finish().is_none());
    }

    #[test]
    fn item_drag_produces_a_drop_record() {
        let mut drag = ItemDrag::<u32>::default();
        assert!(drag.advance(Point::new(0.0, 0.0)).is_none());

        drag.begin(7, Point::new(100.0, 50.0));
        assert_eq!(drag.target(), Some(7));
        assert_eq!(
            drag.advance(Point::new(110.0, 55.0)),
            Some(Vec2::new(10.0, 5.0))
        );

        let end = drag.finish(Point::new(112.0, 57.0)).unwrap();
        assert_eq!(end.target, 7);
        assert_eq!(end.position, Point::new(112.0, 57.0));
        assert!(drag.finish(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn cancel_discards_the_session() {
        let mut drag = ItemDrag::<u32>::default();
        drag.begin(3, Point::new(10.0, 10.0));
        drag.cancel();
        assert_eq!(drag.target(), None);
        assert!(drag.finish(Point::new(10.0, 10.0)).is_none());
    }
}
