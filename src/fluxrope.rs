//! Flux rope entities generated at reconnection sites.

use crate::{
    constants::PLASMA_SHEET_HALF_THICKNESS,
    error::{McError, McResult},
    geometry::{
        Dim2::{X, Y},
        Point2,
    },
    sampling::{fmc, DistributionSpec},
};
use rand::Rng;
use std::fmt;

/// Direction a flux rope travels relative to the observing spacecraft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Planetward,
    Tailward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Planetward => "p",
                Self::Tailward => "t",
            }
        )
    }
}

/// Validated bounds for the cross-tail width of a flux rope [R_M].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthRange {
    min: fmc,
    max: fmc,
}

impl WidthRange {
    /// Creates a validated width range with `0 < min <= max`.
    pub fn new(min: fmc, max: fmc) -> McResult<Self> {
        if min <= 0.0 || max < min {
            return Err(McError::InvalidParameter(format!(
                "width bounds ({}, {}) do not satisfy 0 < min <= max",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Returns the lower width bound.
    pub fn min(&self) -> fmc {
        self.min
    }

    /// Returns the upper width bound.
    pub fn max(&self) -> fmc {
        self.max
    }

    /// Draws a width uniformly from the inclusive range `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> fmc {
        rng.gen_range(self.min..=self.max)
    }
}

/// The vertical (cross-tail) extent reached by a flux rope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalExtent {
    min: fmc,
    max: fmc,
}

impl VerticalExtent {
    /// Creates the extent of a rope with the given center y-value and width.
    pub fn from_center_and_width(center_y: fmc, width: fmc) -> Self {
        Self {
            min: center_y - 0.5 * width,
            max: center_y + 0.5 * width,
        }
    }

    /// Returns the minimum y-value the rope reaches.
    pub fn min(&self) -> fmc {
        self.min
    }

    /// Returns the maximum y-value the rope reaches.
    pub fn max(&self) -> fmc {
        self.max
    }

    /// Whether the given y-coordinate lies strictly inside the extent.
    pub fn contains_strictly(&self, y: fmc) -> bool {
        self.min < y && y < self.max
    }
}

/// One candidate reconnection event, generated with randomized location and
/// width and classified against the observing spacecraft.
///
/// All fields are fixed at generation time.
#[derive(Clone, Debug)]
pub struct FluxRope {
    index: usize,
    location: Point2<fmc>,
    width: fmc,
    extent: VerticalExtent,
    direction: Direction,
    detected: bool,
}

impl FluxRope {
    /// Generates a new flux rope observed from the given spacecraft location.
    ///
    /// Normal-distributed x-locations are redrawn until non-positive
    /// (reconnection sites lie tailward of the planet) and y-locations until
    /// inside the plasma sheet; both loops are bounded and fail with a
    /// sampling timeout when exhausted. The width is always drawn uniformly
    /// from the given bounds.
    pub fn generate<R: Rng>(
        index: usize,
        x_spec: &DistributionSpec,
        y_spec: &DistributionSpec,
        width_range: &WidthRange,
        spacecraft_location: &Point2<fmc>,
        rng: &mut R,
    ) -> McResult<Self> {
        x_spec.validate()?;
        y_spec.validate()?;

        let location_x = if x_spec.is_normal() {
            x_spec.sample_where(rng, "flux rope x-location", |x| x <= 0.0)?
        } else {
            x_spec.sample(rng)
        };
        let location_y = if y_spec.is_normal() {
            y_spec.sample_where(rng, "flux rope y-location", |y| {
                y.abs() <= PLASMA_SHEET_HALF_THICKNESS
            })?
        } else {
            y_spec.sample(rng)
        };

        let width = width_range.sample(rng);
        let extent = VerticalExtent::from_center_and_width(location_y, width);

        let direction = if location_x < spacecraft_location[X] {
            Direction::Planetward
        } else {
            Direction::Tailward
        };
        let detected = extent.contains_strictly(spacecraft_location[Y]);

        Ok(Self {
            index,
            location: Point2::new(location_x, location_y),
            width,
            extent,
            direction,
            detected,
        })
    }

    /// Returns the index of the rope within its crossing.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the location of the rope center.
    pub fn location(&self) -> &Point2<fmc> {
        &self.location
    }

    /// Returns the cross-tail width of the rope.
    pub fn width(&self) -> fmc {
        self.width
    }

    /// Returns the vertical extent reached by the rope.
    pub fn extent(&self) -> &VerticalExtent {
        &self.extent
    }

    /// Returns whether the rope travels planetward or tailward of the
    /// spacecraft.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the rope would pass over the spacecraft.
    pub fn is_detected(&self) -> bool {
        self.detected
    }
}
