//! Splits a stitch sequence into coloured polylines.
//!
//! The walk is a fold over the stitches with [`Segmenter`] as the
//! accumulator. STOP and END close the current block and emit it with the
//! colour of the block that just finished; END also halts the walk. JUMP and
//! TRIM lift the pen without closing the block. A block still open when the
//! stitches run out is never emitted.

use crate::pattern::{Pattern, Point, Stitch};
use rgb::RGB8;
use std::ops::ControlFlow;

/// Colour used when a stitch references a thread that does not exist.
pub const FALLBACK_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// A finished colour block, in the y-negated drawing frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    /// Disconnected runs of stitching; travel moves start a new one.
    pub subpaths: Vec<Vec<Point>>,
    pub color: RGB8,
}

impl PathSegment {
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }
}

/// The in-progress path.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PathState {
    #[default]
    Idle,
    Building(Vec<Vec<Point>>),
}

impl PathState {
    /// Starts a new sub-path at `point` without drawing.
    fn move_to(self, point: Point) -> Self {
        match self {
            PathState::Idle => PathState::Building(vec![vec![point]]),
            PathState::Building(mut subpaths) => {
                // A move right after a move only relocates the pen
                match subpaths.last_mut() {
                    Some(last) if last.len() == 1 => last[0] = point,
                    _ => subpaths.push(vec![point]),
                }
                PathState::Building(subpaths)
            }
        }
    }

    /// Draws a line from the pen position to `point`.
    fn line_to(self, point: Point) -> Self {
        match self {
            PathState::Idle => PathState::Building(vec![vec![point]]),
            PathState::Building(mut subpaths) => {
                match subpaths.last_mut() {
                    Some(last) => last.push(point),
                    None => subpaths.push(vec![point]),
                }
                PathState::Building(subpaths)
            }
        }
    }

    fn point_count(&self) -> usize {
        match self {
            PathState::Idle => 0,
            PathState::Building(subpaths) => subpaths.iter().map(Vec::len).sum(),
        }
    }
}

/// Fold state for [`segment`].
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    pattern: &'a Pattern,
    state: PathState,
    previous_color: Option<i32>,
    segments: Vec<PathSegment>,
}

impl<'a> Segmenter<'a> {
    pub fn new(pattern: &'a Pattern) -> Self {
        Self {
            pattern,
            state: PathState::Idle,
            previous_color: pattern.stitches.first().map(|stitch| stitch.color),
            segments: Vec::new(),
        }
    }

    /// Applies one stitch. Breaks once an END stitch has been consumed.
    pub fn step(mut self, stitch: &Stitch) -> ControlFlow<Self, Self> {
        // Drawing frame has y pointing the other way
        let point = Point::new(stitch.x, -stitch.y);

        if stitch.flags.is_boundary() {
            self.flush();
            self.previous_color = Some(stitch.color);
            if stitch.flags.is_terminal() {
                return ControlFlow::Break(self);
            }
            self.state = self.state.move_to(point);
        } else if stitch.flags.is_travel() {
            self.state = self.state.move_to(point);
        } else {
            self.state = self.state.line_to(point);
        }
        ControlFlow::Continue(self)
    }

    /// Emits the current path if it draws anything, then resets it.
    fn flush(&mut self) {
        if self.state.point_count() < 2 {
            self.state = PathState::Idle;
            return;
        }
        let color = self.resolve_color();
        if let PathState::Building(subpaths) = std::mem::take(&mut self.state) {
            self.segments.push(PathSegment { subpaths, color });
        }
    }

    fn resolve_color(&self) -> RGB8 {
        let index = self.previous_color.unwrap_or(-1);
        self.pattern.thread_color(index).unwrap_or_else(|| {
            log::warn!(
                "thread index {} out of range ({} threads), using black",
                index,
                self.pattern.threads.len()
            );
            FALLBACK_COLOR
        })
    }

    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }
}

/// Groups the pattern's stitches into coloured path segments.
pub fn segment(pattern: &Pattern) -> Vec<PathSegment> {
    let walk = pattern
        .stitches
        .iter()
        .try_fold(Segmenter::new(pattern), |segmenter, stitch| {
            segmenter.step(stitch)
        });

    let segmenter = match walk {
        ControlFlow::Continue(segmenter) | ControlFlow::Break(segmenter) => segmenter,
    };
    let segments = segmenter.into_segments();
    log::debug!("segmenter: {} coloured segments", segments.len());
    segments
}
