use crate::{
    array::Array2D,
    dims::*,
    error::{MazeError, MazeResult},
    grid::{CellState, Direction, Grid},
    queue::BoundedQueue,
};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Cells taken out of the queue.
    pub explored: usize,
    /// Most cells waiting in the queue at once.
    pub queue_peak: usize,
    /// Cells ever put into the queue.
    pub enqueued: usize,
    /// Capacity of the queue, the area of the grid.
    pub capacity: usize,
}

/// Result of a single search, with the statistics kept even when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub route: Option<Route>,
    pub stats: SearchStats,
}

/// Shortest path found by the [`PathFinder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Dims>,
    stats: SearchStats,
}

impl Route {
    /// Cells from start to exit, both included.
    pub fn cells(&self) -> &[Dims] {
        &self.cells
    }

    /// Number of moves between start and exit.
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn start(&self) -> Dims {
        self.cells[0]
    }

    pub fn exit(&self) -> Dims {
        self.cells[self.cells.len() - 1]
    }

    /// Cells strictly between start and exit.
    pub fn between(&self) -> &[Dims] {
        match self.cells.len() {
            0..=2 => &[],
            len => &self.cells[1..len - 1],
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Breadth first search over the open cells of a [`Grid`].
///
/// Neighbours are tried in a fixed order, by default down, up, right, left (see
/// [`Direction::get_in_order`]). The route returned is always a shortest one, the order only
/// decides which one when several have the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    order: [Direction; 4],
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    pub fn new() -> Self {
        Self::with_order(Direction::get_in_order())
    }

    pub fn with_order(order: [Direction; 4]) -> Self {
        Self { order }
    }

    fn check_endpoint(grid: &Grid, pos: Dims) -> MazeResult<()> {
        match grid.get(pos) {
            Ok(state) if state.is_open() => Ok(()),
            _ => {
                log::warn!("Endpoint {} is not an open cell", pos);
                Err(MazeError::UnreachableEndpoint(pos))
            }
        }
    }

    /// Searches for a shortest route without touching the grid.
    ///
    /// Only `Path` and `Exit` cells are stepped onto, the start itself may have any open state.
    /// Returns `Ok(None)` when the exit can't be reached.
    pub fn find(&self, grid: &Grid, start: Dims, exit: Dims) -> MazeResult<Option<Route>> {
        Ok(self.search(grid, start, exit)?.route)
    }

    /// Like [`PathFinder::find`], but also reports the statistics of a failed search.
    pub fn search(&self, grid: &Grid, start: Dims, exit: Dims) -> MazeResult<SearchOutcome> {
        Self::check_endpoint(grid, start)?;
        Self::check_endpoint(grid, exit)?;

        let (w, h) = (grid.width() as usize, grid.height() as usize);
        let mut queue = BoundedQueue::new(grid.area());
        let mut visited = Array2D::new(false, w, h);
        let mut parents: Array2D<Option<Dims>> = Array2D::new(None, w, h);

        queue.enqueue(start)?;
        visited[start] = true;

        let mut found = false;
        let mut explored = 0;
        while !queue.is_empty() {
            let current = queue.dequeue()?;
            explored += 1;

            if current == exit {
                found = true;
                break;
            }

            for (next, state) in grid.neighbors(current, self.order) {
                if state.is_passable() && !visited[next] {
                    visited[next] = true;
                    parents[next] = Some(current);
                    queue.enqueue(next)?;
                }
            }
        }

        let stats = SearchStats {
            explored,
            queue_peak: queue.high_water(),
            enqueued: queue.total_enqueued(),
            capacity: queue.capacity(),
        };
        log::trace!("Search {} -> {} finished: {:?}", start, exit, stats);

        if !found {
            log::debug!("No path from {} to {}", start, exit);
            return Ok(SearchOutcome { route: None, stats });
        }

        let mut cells = vec![exit];
        let mut trace = exit;
        while trace != start {
            // every dequeued cell but the start was discovered from a parent
            trace = parents[trace].ok_or(MazeError::UnreachableEndpoint(trace))?;
            cells.push(trace);
        }
        cells.reverse();

        Ok(SearchOutcome {
            route: Some(Route { cells, stats }),
            stats,
        })
    }

    /// Marks the route on the grid. Only plain `Path` cells change, the start and any `Start`
    /// or `Exit` markers are kept. Returns the number of cells marked.
    pub fn mark(grid: &mut Grid, route: &Route) -> MazeResult<usize> {
        let mut marked = 0;
        for &pos in route.cells().iter().skip(1) {
            if grid.get(pos)? == CellState::Path {
                grid.set(pos, CellState::Solution)?;
                marked += 1;
            }
        }

        Ok(marked)
    }

    /// Finds a shortest route and marks it as `Solution`.
    ///
    /// Returns `false` when there is no route, the grid is left as it was.
    pub fn solve(&self, grid: &mut Grid, start: Dims, exit: Dims) -> MazeResult<bool> {
        match self.find(grid, start, exit)? {
            Some(route) => {
                Self::mark(grid, &route)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Like [`PathFinder::solve`], but hands back the route and reports a missing one as
    /// [`MazeError::NoPathFound`].
    pub fn solve_route(&self, grid: &mut Grid, start: Dims, exit: Dims) -> MazeResult<Route> {
        let route = self
            .find(grid, start, exit)?
            .ok_or(MazeError::NoPathFound { start, exit })?;
        Self::mark(grid, &route)?;

        Ok(route)
    }
}
