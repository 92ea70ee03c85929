//! Pointer geometry and drag gestures.
//!
//! Turns raw pointer positions into [`StudioEvent`]s. Drag sources and drop
//! targets are traits so the same tracker works for any draggable payload;
//! the studio uses [`Adapter`] sources and [`PortTarget`] drop zones laid
//! out by [`HexagonLayout`].

use serde::Serialize;

use crate::domain::{
    entities::adapter::Adapter,
    studio::StudioEvent,
    value_objects::{AdapterId, PortId},
};

/// Width of a port drop zone, in layout units.
pub const PORT_WIDTH: f32 = 144.0;
/// Height of a port drop zone, in layout units.
pub const PORT_HEIGHT: f32 = 96.0;

/// Default hexagon size on a wide screen.
pub const DEFAULT_WIDTH: f32 = 320.0;
pub const DEFAULT_HEIGHT: f32 = 384.0;

/// Relative anchor of each port on the hexagon bounding box, in port order.
const PORT_ANCHORS: [(PortId, f32, f32); 6] = [
    (PortId::Port1, 0.5, 0.0),
    (PortId::Port2, 1.0, 0.25),
    (PortId::Port3, 1.0, 0.75),
    (PortId::Port4, 0.5, 1.0),
    (PortId::Port5, 0.0, 0.75),
    (PortId::Port6, 0.0, 0.25),
];

// ── Geometry ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

// ── Capabilities ─────────────────────────────────────────────────────────────

/// Something that can be picked up.
pub trait DragSource {
    type Payload;

    fn source_id(&self) -> &AdapterId;
    fn payload(&self) -> &Self::Payload;
}

impl DragSource for Adapter {
    type Payload = Adapter;

    fn source_id(&self) -> &AdapterId {
        &self.id
    }

    fn payload(&self) -> &Adapter {
        self
    }
}

/// Something that can receive a dragged payload.
pub trait DropTarget<P> {
    type Id: Copy;

    fn target_id(&self) -> Self::Id;
    fn bounds(&self) -> Rect;

    /// Whether this target would take `payload`. Defaults to yes.
    fn accepts(&self, _payload: &P) -> bool {
        true
    }
}

/// A port's drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortTarget {
    pub port: PortId,
    pub bounds: Rect,
}

impl DropTarget<Adapter> for PortTarget {
    type Id = PortId;

    fn target_id(&self) -> PortId {
        self.port
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

// ── Layout ───────────────────────────────────────────────────────────────────

/// Port drop zones around a hexagon of the given size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexagonLayout {
    pub width: f32,
    pub height: f32,
    targets: Vec<PortTarget>,
}

impl HexagonLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let targets = PORT_ANCHORS
            .iter()
            .map(|&(port, fx, fy)| PortTarget {
                port,
                bounds: Rect::centered(Point::new(fx * width, fy * height), PORT_WIDTH, PORT_HEIGHT),
            })
            .collect();

        Self {
            width,
            height,
            targets,
        }
    }

    pub fn targets(&self) -> &[PortTarget] {
        &self.targets
    }

    pub fn anchor(&self, port: PortId) -> Point {
        self.targets[port.index()].bounds.center()
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn tracker(&self) -> PointerTracker<PortTarget> {
        let mut tracker = PointerTracker::new();
        for target in &self.targets {
            tracker.register(*target);
        }
        tracker
    }
}

impl Default for HexagonLayout {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

// ── Tracking ─────────────────────────────────────────────────────────────────

/// Resolves pointer positions to drop targets.
///
/// Overlapping targets resolve to the one registered first.
#[derive(Debug, Clone)]
pub struct PointerTracker<T> {
    targets: Vec<T>,
}

impl<T> PointerTracker<T> {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    pub fn register(&mut self, target: T) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn hit_test<P>(&self, point: Point, payload: &P) -> Option<<T as DropTarget<P>>::Id>
    where
        T: DropTarget<P>,
    {
        self.targets
            .iter()
            .find(|t| t.bounds().contains(point) && t.accepts(payload))
            .map(|t| t.target_id())
    }
}

impl<T> Default for PointerTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns one pointer gesture into studio events.
#[derive(Debug)]
pub struct DragController<T> {
    tracker: PointerTracker<T>,
    dragging: Option<Adapter>,
    hover: Option<PortId>,
}

impl<T> DragController<T>
where
    T: DropTarget<Adapter, Id = PortId>,
{
    pub fn new(tracker: PointerTracker<T>) -> Self {
        Self {
            tracker,
            dragging: None,
            hover: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Starts a gesture; `None` while another gesture is still held.
    pub fn pointer_down<S>(&mut self, source: &S) -> Option<StudioEvent>
    where
        S: DragSource<Payload = Adapter>,
    {
        if self.dragging.is_some() {
            return None;
        }
        self.dragging = Some(source.payload().clone());
        self.hover = None;
        Some(StudioEvent::BeginDrag(source.source_id().clone()))
    }

    /// `None` unless the hovered port changed.
    pub fn pointer_move(&mut self, point: Point) -> Option<StudioEvent> {
        let payload = self.dragging.as_ref()?;
        let hover = self.tracker.hit_test(point, payload);
        if hover == self.hover {
            return None;
        }
        self.hover = hover;
        Some(StudioEvent::UpdateHover(hover))
    }

    /// Ends the gesture; `None` if no gesture was in progress.
    pub fn pointer_up(&mut self, point: Point) -> Option<StudioEvent> {
        let payload = self.dragging.take()?;
        self.hover = None;
        Some(StudioEvent::EndDrag(self.tracker.hit_test(point, &payload)))
    }
}
