//! Edge-walled maze pathfinding over a rectangular lattice.
//!
//! A maze is its dimensions plus a set of walls (prohibited connections
//! between orthogonally adjacent cells). Walls live on a doubled grid with
//! twice the rows and columns of the maze: the wall at (2r-1, 2c) sits above
//! cell (r, c), the wall at (2r, 2c-1) to its left. Search is uniform-cost
//! Dijkstra over a binary heap.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::{Coord, Dimensions};

/// A wall on the doubled grid. (0, 1) is the top-left vertical wall and
/// (1, 0) the top-left horizontal wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub row: u32,
    pub col: u32,
}

impl Wall {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// One step of a maze solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Operator-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// Given maze dimensions, start and goal cells, and the wall set, return the
/// directions of a shortest path from start to goal. Empty when the goal is
/// unreachable (or start equals goal).
pub fn shortest_path(
    size: Dimensions,
    start: Coord,
    goal: Coord,
    walls: &[Wall],
) -> Vec<Direction> {
    let walls: HashSet<Wall> = walls.iter().copied().collect();
    let mut unvisited: BinaryHeap<Reverse<(u32, Coord)>> = BinaryHeap::new();
    let mut distances: HashMap<Coord, u32> = HashMap::new();
    // For cell c, came_from[c] is the cell immediately preceding it on the
    // shortest path currently known.
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    distances.insert(start, 0);
    unvisited.push(Reverse((0, start)));
    while let Some(Reverse((distance, current))) = unvisited.pop() {
        if current == goal {
            return unwind_path(current, &came_from);
        }
        let next_distance = distance + 1;
        for neighbor in neighbors(current, size, &walls) {
            if distances
                .get(&neighbor)
                .is_none_or(|&known| known > next_distance)
            {
                distances.insert(neighbor, next_distance);
                unvisited.push(Reverse((next_distance, neighbor)));
                came_from.insert(neighbor, current);
            }
        }
    }
    Vec::new() // no path found
}

fn neighbors(current: Coord, size: Dimensions, walls: &HashSet<Wall>) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(4);
    if current.row > 0 && !walls.contains(&Wall::new(2 * current.row - 1, 2 * current.col)) {
        cells.push(Coord::new(current.row - 1, current.col)); // up
    }
    if current.row < size.rows - 1
        && !walls.contains(&Wall::new(2 * current.row + 1, 2 * current.col))
    {
        cells.push(Coord::new(current.row + 1, current.col)); // down
    }
    if current.col > 0 && !walls.contains(&Wall::new(2 * current.row, 2 * current.col - 1)) {
        cells.push(Coord::new(current.row, current.col - 1)); // left
    }
    if current.col < size.cols - 1
        && !walls.contains(&Wall::new(2 * current.row, 2 * current.col + 1))
    {
        cells.push(Coord::new(current.row, current.col + 1)); // right
    }
    cells
}

fn step_direction(previous: Coord, current: Coord) -> Direction {
    if current.row < previous.row {
        Direction::Up
    } else if current.row > previous.row {
        Direction::Down
    } else if current.col < previous.col {
        Direction::Left
    } else {
        Direction::Right
    }
}

fn unwind_path(goal: Coord, came_from: &HashMap<Coord, Coord>) -> Vec<Direction> {
    let mut directions = Vec::new();
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        directions.push(step_direction(previous, current));
        current = previous;
    }
    directions.reverse(); // unpacked goal-first
    directions
}

// ===========================================================================
// Tests
// ===========================================================================
