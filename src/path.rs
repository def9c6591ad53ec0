use crate::geometry::CanvasPoint;

/// One drawing instruction in a stroke path. Freehand strokes are a
/// `MoveTo` followed by quadratic bezier arcs, so consecutive segments
/// join smoothly instead of as a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(CanvasPoint),
    QuadTo {
        control: CanvasPoint,
        end: CanvasPoint,
    },
}

impl PathSegment {
    pub const fn end_point(self) -> CanvasPoint {
        match self {
            Self::MoveTo(point) => point,
            Self::QuadTo { end, .. } => end,
        }
    }
}

/// Geometry of a single freehand stroke. Grows only while the owning
/// gesture is in progress; once the stroke is finalized the path is never
/// mutated again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokePath {
    segments: Vec<PathSegment>,
}

impl StrokePath {
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn move_to(&mut self, point: CanvasPoint) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn quad_to(&mut self, control: CanvasPoint, end: CanvasPoint) {
        self.segments.push(PathSegment::QuadTo { control, end });
    }

    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last_point(&self) -> Option<CanvasPoint> {
        self.segments.last().map(|segment| segment.end_point())
    }
}
