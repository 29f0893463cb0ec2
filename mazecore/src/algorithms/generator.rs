use std::fmt;

use rand::{seq::SliceRandom as _, RngCore};

use crate::{
    dims::*,
    error::{MazeError, MazeResult},
    grid::{CellState, Direction, Grid},
};

/// Turns a grid of walls into a maze.
pub trait MazeCarver: fmt::Debug {
    /// Carves passages starting in the room `start`. Returns the number of rooms carved.
    fn carve(&self, grid: &mut Grid, start: Dims, rng: &mut dyn RngCore) -> MazeResult<usize>;

    fn name(&self) -> &'static str;
}

/// Randomized depth first carving.
///
/// Every room reachable from the start is visited exactly once and a room is only entered while
/// it is still a wall, so the carved passages form a spanning tree over the rooms: a perfect
/// maze. The border is never touched.
///
/// The walk keeps its own stack of [`Frame`]s instead of recursing, the depth can reach the
/// number of rooms on corridor-like mazes. Directions are shuffled once when a room is entered,
/// which draws random numbers in the same order a recursive walk would.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveBacktracker;

#[derive(Debug)]
struct Frame {
    pos: Dims,
    ways: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter(grid: &mut Grid, pos: Dims, rng: &mut dyn RngCore) -> MazeResult<Self> {
        grid.set(pos, CellState::Path)?;

        let mut ways = Direction::get_in_order();
        ways.shuffle(rng);

        Ok(Frame { pos, ways, next: 0 })
    }
}

/// Number of rooms on a lattice of the given odd size.
fn room_count(size: Dims) -> usize {
    let Dims(w, h) = size;
    (w as usize / 2) * (h as usize / 2)
}

impl MazeCarver for RecursiveBacktracker {
    fn carve(&self, grid: &mut Grid, start: Dims, rng: &mut dyn RngCore) -> MazeResult<usize> {
        if !grid.is_room(start) {
            log::warn!("Cannot start carving at {}, it's not a room", start);
            return Err(MazeError::UnreachableEndpoint(start));
        }

        let room_count = room_count(grid.size());

        let mut stack = Vec::with_capacity(room_count);
        stack.push(Frame::enter(grid, start, rng)?);
        let mut carved = 1;
        let mut deepest = 1;

        while let Some(frame) = stack.last_mut() {
            let Some(&way) = frame.ways.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let step = way.to_coord();
            let wall = frame.pos + step;
            let neighbor = frame.pos + step * 2;

            if grid.is_interior(neighbor) && grid.get(neighbor)?.is_wall() {
                grid.set(wall, CellState::Path)?;
                stack.push(Frame::enter(grid, neighbor, rng)?);
                carved += 1;
                deepest = deepest.max(stack.len());
            }
        }

        log::debug!(
            "Carved {} of {} rooms from {}, deepest backtrack {}",
            carved,
            room_count,
            start,
            deepest
        );

        Ok(carved)
    }

    fn name(&self) -> &'static str {
        "recursive backtracker"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng as _;

    use super::*;
    use crate::{algorithms::Random, array::Array2D};

    fn carved(size: Dims, seed: u64) -> Grid {
        let mut grid = Grid::new_dims(size).unwrap();
        let mut rng = Random::seed_from_u64(seed);
        RecursiveBacktracker
            .carve(&mut grid, Dims(1, 1), &mut rng)
            .unwrap();
        grid
    }

    /// Open cells reachable from `from`.
    fn flood(grid: &Grid, from: Dims) -> Array2D<bool> {
        let mut seen = Array2D::new_dims(false, grid.size()).unwrap();
        let mut todo = VecDeque::from([from]);
        seen[from] = true;

        while let Some(pos) = todo.pop_front() {
            for (next, state) in grid.neighbors(pos, Direction::get_in_order()) {
                if state.is_open() && !seen[next] {
                    seen[next] = true;
                    todo.push_back(next);
                }
            }
        }

        seen
    }

    #[test]
    fn carves_a_spanning_tree() {
        for seed in 0..20 {
            let grid = carved(Dims(21, 15), seed);

            let rooms = grid.rooms().count();
            assert_eq!(rooms, 10 * 7);
            // every room plus one wall per tree edge
            assert_eq!(grid.open_count(), 2 * rooms - 1);
            assert_eq!(grid.open_count() - 1, grid.connection_count());
        }
    }

    #[test]
    fn every_room_is_reachable() {
        let grid = carved(Dims(31, 11), 7);
        let seen = flood(&grid, Dims(1, 1));

        for room in grid.rooms() {
            assert!(seen[room], "room {} not reachable", room);
        }
        assert_eq!(seen.count(|s| *s), grid.open_count());
    }

    #[test]
    fn border_stays_wall() {
        let grid = carved(Dims(41, 21), 3);
        for pos in grid.iter_pos().filter(|pos| grid.is_border(*pos)) {
            assert_eq!(grid.get(pos), Ok(CellState::Wall), "border at {}", pos);
        }
    }

    #[test]
    fn no_cell_between_four_rooms_is_carved() {
        // cells with both coordinates even are never a passage between two rooms
        let grid = carved(Dims(25, 25), 11);
        for pos in grid.iter_pos().filter(|p| p.0 % 2 == 0 && p.1 % 2 == 0) {
            assert_eq!(grid.get(pos), Ok(CellState::Wall));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(carved(Dims(41, 21), 1234), carved(Dims(41, 21), 1234));
        assert_ne!(carved(Dims(41, 21), 1234), carved(Dims(41, 21), 4321));
    }

    #[test]
    fn huge_maze_does_not_overflow_the_stack() {
        let grid = carved(Dims(801, 801), 5);
        assert_eq!(grid.open_count(), 2 * 400 * 400 - 1);
    }

    #[test]
    fn smallest_maze_is_a_single_room() {
        let grid = carved(Dims(3, 3), 0);
        assert_eq!(grid.open_count(), 1);
        assert_eq!(grid.get(Dims(1, 1)), Ok(CellState::Path));
    }

    #[test]
    fn room_count_of_wide_lattices() {
        assert_eq!(room_count(Dims(3, 3)), 1);
        assert_eq!(room_count(Dims(41, 21)), 20 * 10);
        // the product alone doesn't fit into an i32
        assert_eq!(room_count(Dims(100_001, 100_003)), 50_000 * 50_001);
    }

    #[test]
    fn carved_rooms_match_the_lattice() {
        let mut grid = Grid::new(21, 15).unwrap();
        let mut rng = Random::seed_from_u64(2);
        let carved = RecursiveBacktracker
            .carve(&mut grid, Dims(1, 1), &mut rng)
            .unwrap();
        assert_eq!(carved, room_count(grid.size()));
    }

    #[test]
    fn start_must_be_a_room() {
        let mut rng = Random::seed_from_u64(0);
        for start in [Dims(2, 1), Dims(0, 0), Dims(9, 1), Dims(-1, 1)] {
            let mut grid = Grid::new(9, 9).unwrap();
            assert_eq!(
                RecursiveBacktracker.carve(&mut grid, start, &mut rng),
                Err(MazeError::UnreachableEndpoint(start))
            );
            assert_eq!(grid.open_count(), 0);
        }
    }

    #[test]
    fn other_start_rooms_work_too() {
        let mut grid = Grid::new(11, 7).unwrap();
        let mut rng = Random::seed_from_u64(9);
        let rooms = RecursiveBacktracker
            .carve(&mut grid, Dims(9, 5), &mut rng)
            .unwrap();
        assert_eq!(rooms, 15);
        assert_eq!(grid.open_count(), 29);
    }
}
