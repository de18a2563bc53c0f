//! Minimap frame composition.

use super::{MarkSource, MinimapSettings, Rect, Viewport};
use crate::range::TextRange;

const BACKGROUND: &str = "rgba(255, 255, 255, .5)";
const ARROW_COLOR: &str = "darkgray";

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimapFrame {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl MinimapFrame {
    /// Number of match ticks in the frame.
    pub fn tick_count(&self) -> usize {
        // Background is the only non-tick fill.
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count()
            .saturating_sub(1)
    }
}

/// Lay out the bar: background, the scroll-arrow boxes at both ends, and
/// one tick per rendered range scaled into the track between them.
pub fn compose_frame(
    settings: MinimapSettings,
    viewport: Viewport,
    marks: &[MarkSource],
    rect_of: impl Fn(&TextRange) -> Option<Rect>,
) -> MinimapFrame {
    let width = f64::from(settings.width);
    let height = viewport.client_height;
    let track = height - 2.0 * width;
    let mut ops = vec![
        DrawOp::Clear,
        DrawOp::FillRect {
            x: 0.0,
            y: 0.0,
            w: width,
            h: height,
            color: BACKGROUND.into(),
        },
    ];

    arrow_box(&mut ops, 1.5, width);
    arrow_box(&mut ops, height - width + 1.5, width);

    if viewport.document_height > 0.0 && track > 0.0 {
        for mark in marks {
            for range in &mark.ranges {
                let Some(rect) = rect_of(range) else {
                    continue;
                };
                let top = (rect.top + viewport.scroll_top) / viewport.document_height;
                let bottom = (rect.bottom + viewport.scroll_top) / viewport.document_height;
                if top < 0.0 || bottom > 1.0 {
                    continue;
                }
                ops.push(DrawOp::FillRect {
                    x: 0.0,
                    y: width + track * top,
                    w: width,
                    h: track * (bottom - top),
                    color: mark.color.clone(),
                });
            }
        }
    }

    MinimapFrame { width, height, ops }
}

fn arrow_box(ops: &mut Vec<DrawOp>, y: f64, width: f64) {
    let color = || ARROW_COLOR.to_string();
    let size = width - 3.0;
    ops.push(DrawOp::StrokeRect {
        x: 1.5,
        y,
        w: size,
        h: size,
        color: color(),
    });
    ops.push(DrawOp::Line {
        from: (1.5, y),
        to: (width - 1.5, y + size),
        color: color(),
    });
    ops.push(DrawOp::Line {
        from: (width - 1.5, y),
        to: (1.5, y + size),
        color: color(),
    });
}
