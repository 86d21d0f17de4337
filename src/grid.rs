//! Tracking of how much of the tail region generated flux ropes have covered.

use crate::{
    error::{McError, McResult},
    geometry::{Dim2::Y, Point2},
    sampling::fmc,
};
use log::warn;
use ndarray::{s, Array2};

/// Outcome of adding one flux rope to the occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridUpdate {
    /// Every x-row was incremented for the y-bins in the given inclusive
    /// index range.
    Covered { min_bin: usize, max_bin: usize },
    /// The rope's vertical extent fell entirely outside the tracked region
    /// and the grid was left unchanged.
    OutsideRegion,
}

/// A discretized occupancy map of the tail region, counting how many flux
/// rope vertical extents overlap each spatial bin.
///
/// Flux ropes are treated as x-independent vertical bands spanning the full
/// tail x-range, so only their y-extent determines which bins they cover.
/// Cell counts only ever increase over the lifetime of the grid.
#[derive(Clone, Debug)]
pub struct TailGrid {
    counts: Array2<u32>,
    y_min: fmc,
    y_max: fmc,
    dely: fmc,
}

impl TailGrid {
    /// Creates an empty grid over `[x_min, x_max] x [y_min, y_max]` with the
    /// given uniform bin widths.
    pub fn new(
        x_bounds: (fmc, fmc),
        y_bounds: (fmc, fmc),
        delx: fmc,
        dely: fmc,
    ) -> McResult<Self> {
        let (x_min, x_max) = x_bounds;
        let (y_min, y_max) = y_bounds;
        if x_min >= x_max || y_min >= y_max {
            return Err(McError::InvalidParameter(format!(
                "tail region [{}, {}] x [{}, {}] has non-positive extent",
                x_min, x_max, y_min, y_max
            )));
        }
        if delx <= 0.0 || dely <= 0.0 {
            return Err(McError::InvalidParameter(format!(
                "bin widths ({}, {}) are not positive",
                delx, dely
            )));
        }
        let n_x = ((x_max - x_min) / delx) as usize;
        let n_y = ((y_max - y_min) / dely) as usize;
        if n_x == 0 || n_y == 0 {
            return Err(McError::InvalidParameter(format!(
                "bin widths ({}, {}) leave no complete bin inside the tail region",
                delx, dely
            )));
        }
        Ok(Self {
            counts: Array2::zeros((n_x, n_y)),
            y_min,
            y_max,
            dely,
        })
    }

    /// Returns the number of bins along each dimension as `(n_x, n_y)`.
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Returns the bin-center y-value of the given y-bin.
    pub fn bin_center_y(&self, bin: usize) -> fmc {
        self.y_min + (bin as fmc + 0.5) * self.dely
    }

    /// Records coverage of the vertical extent of a flux rope with the given
    /// center and width.
    ///
    /// The y-bins containing the top and bottom of the rope are located by
    /// half-open containment in each bin's span, with an end coinciding
    /// exactly with a bin edge resolved to the bin that has the end as its
    /// edge. Ends protruding below or above the region clamp to the first or
    /// last bin. Every x-row is then incremented over the resulting inclusive
    /// bin range. A rope whose extent resolves no bin on either end lies
    /// entirely outside the tracked region and leaves the grid unchanged.
    pub fn add_flux_rope(&mut self, center: &Point2<fmc>, width: fmc) -> GridUpdate {
        let top = center[Y] + 0.5 * width;
        let bottom = center[Y] - 0.5 * width;

        let (_, n_y) = self.shape();

        let mut min_bin = None;
        let mut max_bin = None;

        for bin in 0..n_y {
            let lower_edge = self.y_min + bin as fmc * self.dely;
            let upper_edge = lower_edge + self.dely;

            if upper_edge > top && lower_edge < top {
                max_bin = Some(bin);
            }
            if upper_edge > bottom && lower_edge < bottom {
                min_bin = Some(bin);
            }
            if lower_edge == bottom {
                min_bin = Some(bin);
            }
            if upper_edge == top {
                max_bin = Some(bin);
            }
        }

        if bottom < self.y_min {
            min_bin = Some(0);
        }
        if top > self.y_max {
            max_bin = Some(n_y - 1);
        }

        match (min_bin, max_bin) {
            (Some(min_bin), Some(max_bin)) => {
                let mut band = self.counts.slice_mut(s![.., min_bin..=max_bin]);
                band += 1;
                GridUpdate::Covered { min_bin, max_bin }
            }
            _ => {
                warn!(
                    "flux rope with extent [{}, {}] generated outside the tracked region",
                    bottom, top
                );
                GridUpdate::OutsideRegion
            }
        }
    }

    /// Returns an owned copy of the current counters, decoupled from the
    /// live grid.
    pub fn snapshot(&self) -> Array2<u32> {
        self.counts.clone()
    }
}
