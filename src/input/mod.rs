//! Pointer input adapter (impure shell).
//!
//! Terminals report absolute cell positions, while the gesture machines
//! want origin-relative translations in points plus a release velocity.
//! The tracker bridges the two: it anchors a drag at the press cell,
//! scales cell deltas into points (terminal cells are roughly 8x16 px), and
//! estimates release velocity from a sliding window of recent samples.

use std::collections::VecDeque;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::model::gesture::DragEvent;

/// Points per terminal cell on each axis.
///
/// Keeps the px-tuned default thresholds meaningful when driven from cell
/// coordinates; hosts with real pixel input can use a 1:1 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerScale {
    /// Points per column.
    pub x: f64,
    /// Points per row.
    pub y: f64,
}

impl Default for PointerScale {
    fn default() -> Self {
        Self { x: 8.0, y: 16.0 }
    }
}

/// Sliding window over which release velocity is estimated, in seconds.
const VELOCITY_WINDOW: f64 = 0.1;

/// Translates crossterm mouse events into the pointer-drag stream.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracker {
    scale: PointerScale,
    origin: Option<(u16, u16)>,
    /// Recent `(time, translation_x, translation_y)` samples in points.
    samples: VecDeque<(f64, f64, f64)>,
}

impl PointerTracker {
    /// A tracker with the given cell-to-point scale.
    pub fn new(scale: PointerScale) -> Self {
        Self {
            scale,
            origin: None,
            samples: VecDeque::new(),
        }
    }

    /// Feed one crossterm mouse event at time `now` (seconds, any epoch).
    ///
    /// Returns the corresponding drag sample for left-button press, drag
    /// and release; other events (moves without a press, scroll, other
    /// buttons) produce nothing.
    pub fn handle_mouse(&mut self, event: &MouseEvent, now: f64) -> Option<DragEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                self.samples.clear();
                self.samples.push_back((now, 0.0, 0.0));
                Some(DragEvent::began())
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (tx, ty) = self.translation(event)?;
                self.push_sample(now, tx, ty);
                Some(DragEvent::moved(tx, ty))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (tx, ty) = self.translation(event)?;
                self.push_sample(now, tx, ty);
                let (vx, vy) = self.velocity();
                self.origin = None;
                self.samples.clear();
                Some(DragEvent::ended(tx, ty, vx, vy))
            }
            _ => None,
        }
    }

    /// Whether a drag is currently in progress.
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    fn translation(&self, event: &MouseEvent) -> Option<(f64, f64)> {
        let (ox, oy) = self.origin?;
        let tx = (f64::from(event.column) - f64::from(ox)) * self.scale.x;
        let ty = (f64::from(event.row) - f64::from(oy)) * self.scale.y;
        Some((tx, ty))
    }

    fn push_sample(&mut self, now: f64, tx: f64, ty: f64) {
        self.samples.push_back((now, tx, ty));
        while let Some(&(t, _, _)) = self.samples.front() {
            if now - t > VELOCITY_WINDOW && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity over the retained sample window, in points per second.
    fn velocity(&self) -> (f64, f64) {
        let (Some(&(t0, x0, y0)), Some(&(t1, x1, y1))) =
            (self.samples.front(), self.samples.back())
        else {
            return (0.0, 0.0);
        };
        let dt = t1 - t0;
        if dt <= f64::EPSILON {
            return (0.0, 0.0);
        }
        ((x1 - x0) / dt, (y1 - y0) / dt)
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(PointerScale::default())
    }
}
