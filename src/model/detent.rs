//! Named resting positions for the sheet and the table mapping them to
//! vertical offsets.
//!
//! Offsets are measured in points from the top of the viewport, so `Large`
//! (the tallest, most-open state) has the smallest offset and `Dismissed`
//! (fully off-screen) the largest.

use thiserror::Error;

/// A named discrete resting position for the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detent {
    /// Nearly full-screen; the default position after opening.
    Large,
    /// Roughly the upper half of the viewport covered.
    Medium,
    /// Lower third of the viewport.
    Small,
    /// Collapsed to a title-height strip at the bottom.
    Mini,
    /// Fully off-screen. Never a drag-settle target; reached only by
    /// dismissal or an external close.
    Dismissed,
}

impl Detent {
    /// The four open detents, ordered tallest first.
    pub const OPEN: [Detent; 4] = [Detent::Large, Detent::Medium, Detent::Small, Detent::Mini];

    /// Whether the sheet is on screen at this detent.
    pub fn is_open(self) -> bool {
        !matches!(self, Detent::Dismissed)
    }

    fn index(self) -> usize {
        match self {
            Detent::Large => 0,
            Detent::Medium => 1,
            Detent::Small => 2,
            Detent::Mini => 3,
            Detent::Dismissed => 4,
        }
    }
}

/// Viewport-height fractions each detent rests at, measured from the top.
///
/// These are tuned constants, not invariants: hosts may reconfigure them as
/// long as the ordering stays strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetentFractions {
    /// Fraction for [`Detent::Large`].
    pub large: f64,
    /// Fraction for [`Detent::Medium`].
    pub medium: f64,
    /// Fraction for [`Detent::Small`].
    pub small: f64,
    /// Fraction for [`Detent::Mini`].
    pub mini: f64,
}

impl Default for DetentFractions {
    fn default() -> Self {
        Self {
            large: 0.10,
            medium: 0.40,
            small: 0.70,
            mini: 0.85,
        }
    }
}

/// Error raised when detent fractions do not produce a valid table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetentError {
    /// The configured fractions are not strictly increasing, or fall
    /// outside `(0, 1)`.
    #[error("detent fractions must be strictly increasing within (0, 1): \
             large={large}, medium={medium}, small={small}, mini={mini}")]
    NonIncreasing {
        /// Configured large fraction.
        large: f64,
        /// Configured medium fraction.
        medium: f64,
        /// Configured small fraction.
        small: f64,
        /// Configured mini fraction.
        mini: f64,
    },
}

/// Ordered mapping from [`Detent`] to an offset-from-top in points.
///
/// Derived once from the viewport height; immutable for the lifetime of a
/// mount and recomputed only when the viewport changes. Invariant:
/// `large < medium < small < mini < dismissed`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetentSet {
    offsets: [f64; 5],
    viewport_height: f64,
}

impl DetentSet {
    /// Compute the detent table for a viewport height.
    ///
    /// Pure and deterministic. A degenerate viewport height (`<= 0`) is a
    /// precondition violation owned by the caller and is only debug-asserted.
    ///
    /// # Errors
    ///
    /// Returns [`DetentError::NonIncreasing`] when the fractions are not
    /// strictly increasing within `(0, 1)`.
    pub fn compute(viewport_height: f64, fractions: &DetentFractions) -> Result<Self, DetentError> {
        debug_assert!(
            viewport_height > 0.0,
            "viewport height must be positive (caller precondition)"
        );

        let DetentFractions {
            large,
            medium,
            small,
            mini,
        } = *fractions;

        let increasing =
            0.0 < large && large < medium && medium < small && small < mini && mini < 1.0;
        if !increasing {
            return Err(DetentError::NonIncreasing {
                large,
                medium,
                small,
                mini,
            });
        }

        Ok(Self {
            offsets: [
                large * viewport_height,
                medium * viewport_height,
                small * viewport_height,
                mini * viewport_height,
                viewport_height,
            ],
            viewport_height,
        })
    }

    /// Offset-from-top of the given detent, in points.
    pub fn offset(&self, detent: Detent) -> f64 {
        self.offsets[detent.index()]
    }

    /// Viewport height this table was derived from.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// The open detent whose offset is numerically closest to `position`.
    ///
    /// An exact match degenerates to that detent. Ties resolve toward the
    /// more open detent (the scan runs tallest-first with a strict compare).
    pub fn nearest_open(&self, position: f64) -> Detent {
        let mut best = Detent::Large;
        let mut best_distance = (position - self.offset(Detent::Large)).abs();
        for detent in &Detent::OPEN[1..] {
            let distance = (position - self.offset(*detent)).abs();
            if distance < best_distance {
                best = *detent;
                best_distance = distance;
            }
        }
        best
    }
}
