//! Ray casting over a flat row-major grid of cells
//!
//! Every ray starts at an origin and steps by a direction vector for as long as
//! the cells it reaches are inside the grid and hold one of the accepted states.

use crate::board::Cell;
use crate::error::{Error, Result};
use crate::point::{Point, Size};

/// What an info ray collects along its path
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InfoMode {
    Points,
    Counts,
    Both,
}

/// How many cells of each state a ray passed over
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub empty: usize,
    pub x: usize,
    pub o: usize,
}

impl CellCounts {
    pub fn get(&self, cell: Cell) -> usize {
        match cell {
            Cell::Empty => self.empty,
            Cell::X => self.x,
            Cell::O => self.o,
        }
    }

    fn add(&mut self, cell: Cell) {
        match cell {
            Cell::Empty => self.empty += 1,
            Cell::X => self.x += 1,
            Cell::O => self.o += 1,
        }
    }
}

/// The path walked by an info ray, in visiting order, and the states it met
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RayInfo {
    pub points: Vec<Point>,
    pub counts: CellCounts,
}

impl RayInfo {
    fn record(&mut self, point: Point, cell: Cell, mode: InfoMode) {
        if mode != InfoMode::Counts {
            self.points.push(point);
        }
        if mode != InfoMode::Points {
            self.counts.add(cell);
        }
    }
}

fn validate(grid: &[Cell], size: Size, direction: Point, accepted: &[Cell]) -> Result<()> {
    if size.area() == 0 {
        return Err(Error::invalid("grid has no cells"));
    }
    if grid.len() != size.area() {
        return Err(Error::invalid(format!(
            "grid holds {} cells but its size is {}x{}",
            grid.len(),
            size.width,
            size.height
        )));
    }
    if direction.is_zero() {
        return Err(Error::invalid("ray direction is the zero vector"));
    }
    if !(-1..=1).contains(&direction.x) || !(-1..=1).contains(&direction.y) {
        return Err(Error::invalid(format!(
            "ray direction {} is not a single step",
            direction
        )));
    }
    if accepted.is_empty() {
        return Err(Error::invalid("ray accepts no cell states"));
    }
    Ok(())
}

// the cell at `point`, if it lies inside the grid and holds an accepted state
fn accepted_cell(grid: &[Cell], size: Size, accepted: &[Cell], point: Point) -> Option<Cell> {
    let cell = *grid.get(point.index_in(size)?)?;
    if accepted.contains(&cell) {
        Some(cell)
    } else {
        None
    }
}

/// Checks for `required_length` accepted cells in a row, starting at `origin` and walking one way
///
/// If the walk breaks early and `bounce` is set, it is retried once from the origin in the
/// opposite direction.
pub fn cast_boundary_ray(
    origin: Point,
    direction: Point,
    grid: &[Cell],
    size: Size,
    accepted: &[Cell],
    required_length: usize,
    bounce: bool,
) -> Result<bool> {
    validate(grid, size, direction, accepted)?;
    if required_length == 0 {
        return Err(Error::invalid("required ray length is zero"));
    }
    if accepted_cell(grid, size, accepted, origin).is_none() {
        return Ok(false);
    }

    let mut direction = direction;
    let mut can_bounce = bounce;
    'cast: loop {
        let mut position = origin;
        for _ in 1..required_length {
            let next = position + direction;
            if accepted_cell(grid, size, accepted, next).is_some() {
                position = next;
            } else if can_bounce {
                can_bounce = false;
                direction = -direction;
                continue 'cast;
            } else {
                return Ok(false);
            }
        }
        return Ok(true);
    }
}

/// Checks whether the run of accepted cells through `origin` along one axis is exactly
/// `required_length` long
///
/// Two rays leave the origin in opposite directions with a shared offset. Each one stops at the
/// first cell that is outside the grid or not accepted, and the run is the sum of how far both
/// got plus the origin itself. A run that is still unbroken after `required_length` steps is
/// longer than required and fails, as does an origin outside the grid.
pub fn cast_bidirectional_ray(
    origin: Point,
    direction: Point,
    grid: &[Cell],
    size: Size,
    accepted: &[Cell],
    required_length: usize,
) -> Result<bool> {
    validate(grid, size, direction, accepted)?;
    if required_length == 0 {
        return Err(Error::invalid("required ray length is zero"));
    }
    if origin.is_out_of_bounds(size) {
        return Ok(false);
    }

    let mut forward_run = None;
    let mut backward_run = None;
    for step in 0..required_length {
        let offset = direction * (step as i32 + 1);
        if forward_run.is_none() && accepted_cell(grid, size, accepted, origin + offset).is_none()
        {
            forward_run = Some(step);
        }
        if backward_run.is_none() && accepted_cell(grid, size, accepted, origin + -offset).is_none()
        {
            backward_run = Some(step);
        }
        if let (Some(forward), Some(backward)) = (forward_run, backward_run) {
            return Ok(forward + backward + 1 == required_length);
        }
    }
    Ok(false)
}

/// Walks from `origin` and reports the cells it passed over
///
/// Each leg takes at most `max_steps` steps. When the first leg is stopped by a cell outside the
/// grid or not accepted and `bounce` is set, a second leg starts from the origin in the opposite direction and adds to the same result, so
/// a bouncing ray covers the whole accepted run through the origin along its axis.
///
/// Returns `None` if the origin itself is outside the grid or not accepted.
#[allow(clippy::too_many_arguments)]
pub fn cast_info_ray(
    origin: Point,
    max_steps: usize,
    direction: Point,
    grid: &[Cell],
    size: Size,
    accepted: &[Cell],
    bounce: bool,
    mode: InfoMode,
) -> Result<Option<RayInfo>> {
    validate(grid, size, direction, accepted)?;

    let origin_cell = match accepted_cell(grid, size, accepted, origin) {
        Some(cell) => cell,
        None => return Ok(None),
    };
    let mut info = RayInfo::default();
    info.record(origin, origin_cell, mode);

    let mut direction = direction;
    let mut can_bounce = bounce;
    loop {
        let mut position = origin;
        let mut blocked = false;
        for _ in 0..max_steps {
            let next = position + direction;
            match accepted_cell(grid, size, accepted, next) {
                Some(cell) => {
                    info.record(next, cell, mode);
                    position = next;
                }
                None => {
                    blocked = true;
                    break;
                }
            }
        }
        if !blocked || !can_bounce {
            return Ok(Some(info));
        }
        can_bounce = false;
        direction = -direction;
    }
}
