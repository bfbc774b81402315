//! Grid geometry: column inference and two-dimensional movement.

use trellis_core::logging::{span_names, targets};

use super::keys::Intent;
use crate::collection::Key;

/// Items whose top edges differ by at most this many pixels share a row.
pub const ROW_TOLERANCE: f32 = 5.0;

/// Minimum number of materialized items sampled for column inference.
pub const MIN_SAMPLE: usize = 20;

/// Items moved by Page Up / Page Down in one-dimensional collections.
pub const PAGE_STRIDE: usize = 10;

/// An axis-aligned rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The top edge.
    pub fn top(&self) -> f32 {
        self.y
    }
}

/// Geometry oracle supplied by the renderer.
///
/// Must be free of side effects; it may be called repeatedly.
pub trait LayoutProbe: Send + Sync {
    /// The laid-out rectangle for an item, or `None` if it is not materialized.
    fn rect_for_key(&self, key: &Key) -> Option<Rect>;
}

/// Infer the column count of a grid from item geometry.
///
/// Counts how many leading materialized items share the first item's row.
/// Returns `fallback` when fewer than two items are materialized.
pub fn detect_grid_columns(probe: &dyn LayoutProbe, keys: &[Key], fallback: usize) -> usize {
    let _span = tracing::trace_span!(target: targets::GRID, "grid_detect", name = span_names::GRID_DETECT).entered();

    if keys.len() < 2 {
        return fallback;
    }

    let sample_size = MIN_SAMPLE.max(fallback.saturating_mul(2));
    let mut rects = keys
        .iter()
        .filter_map(|key| probe.rect_for_key(key))
        .take(sample_size);

    let Some(first) = rects.next() else {
        return fallback;
    };

    let mut columns = 1;
    let mut seen = 1;
    for rect in rects {
        seen += 1;
        if (rect.top() - first.top()).abs() <= ROW_TOLERANCE {
            columns += 1;
        } else {
            break;
        }
    }

    if seen < 2 {
        tracing::trace!(target: targets::GRID, "fewer than two materialized items, using hint");
        return fallback;
    }

    tracing::trace!(target: targets::GRID, columns, "detected grid columns");
    columns.max(1)
}

/// Position of an item within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Flat index.
    pub index: usize,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl GridPosition {
    /// The position of a flat index in a grid with `columns` columns.
    pub fn of(index: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            index,
            row: index / columns,
            col: index % columns,
        }
    }
}

/// The target index for a grid movement.
///
/// Row-edge movement clamps; with `wrap` set, movement past the absolute
/// first or last item recycles, and vertical movement wraps within the
/// column.
pub fn grid_target(index: usize, intent: Intent, columns: usize, count: usize, wrap: bool) -> Option<usize> {
    if count == 0 || index >= count {
        return None;
    }
    let columns = columns.max(1);
    let last = count - 1;

    let target = match intent {
        Intent::First => 0,
        Intent::Last => last,
        Intent::Right | Intent::Next => {
            if index < last && (index + 1) % columns != 0 {
                index + 1
            } else if wrap && index == last {
                0
            } else {
                index
            }
        }
        Intent::Left | Intent::Previous => {
            if index % columns != 0 {
                index - 1
            } else if wrap && index == 0 {
                last
            } else {
                index
            }
        }
        Intent::Down | Intent::PageDown => {
            if index + columns < count {
                index + columns
            } else if wrap {
                index % columns
            } else {
                index
            }
        }
        Intent::Up | Intent::PageUp => {
            if index >= columns {
                index - columns
            } else if wrap {
                let col = index % columns;
                (last - col) / columns * columns + col
            } else {
                index
            }
        }
    };

    Some(target)
}

/// The target index for a page movement in a one-dimensional collection.
pub fn page_target(index: usize, intent: Intent, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match intent {
        Intent::PageUp => Some(index.saturating_sub(PAGE_STRIDE)),
        Intent::PageDown => Some((index + PAGE_STRIDE).min(count - 1)),
        _ => None,
    }
}
