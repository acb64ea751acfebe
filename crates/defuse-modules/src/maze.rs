//! Solver for vanilla Maze.
//!
//! The bomb shows a 6x6 maze identified only by the coordinates of its
//! circular markings; the full wall sets live here. Walls use the doubled
//! grid of [`defuse_spatial::maze`].

use defuse_core::edgework::EdgeFlags;
use defuse_core::error::SolveError;
use defuse_core::solver::{ModuleSolver, SolveContext, SolverState};
use defuse_spatial::{Coord, Dimensions, Wall, ask_coord, shortest_path};

static MAZES: [[Wall; 25]; 9] = [
    [
        Wall::new(0, 5),
        Wall::new(1, 2),
        Wall::new(1, 8),
        Wall::new(1, 10),
        Wall::new(2, 1),
        Wall::new(2, 5),
        Wall::new(3, 4),
        Wall::new(3, 6),
        Wall::new(3, 8),
        Wall::new(4, 1),
        Wall::new(4, 5),
        Wall::new(5, 2),
        Wall::new(5, 8),
        Wall::new(6, 1),
        Wall::new(6, 7),
        Wall::new(7, 2),
        Wall::new(7, 4),
        Wall::new(7, 6),
        Wall::new(7, 8),
        Wall::new(8, 5),
        Wall::new(8, 9),
        Wall::new(9, 2),
        Wall::new(9, 8),
        Wall::new(10, 3),
        Wall::new(10, 7),
    ],
    [
        Wall::new(0, 5),
        Wall::new(1, 0),
        Wall::new(1, 4),
        Wall::new(1, 10),
        Wall::new(2, 3),
        Wall::new(2, 7),
        Wall::new(3, 2),
        Wall::new(3, 6),
        Wall::new(3, 8),
        Wall::new(4, 1),
        Wall::new(4, 5),
        Wall::new(5, 4),
        Wall::new(5, 8),
        Wall::new(6, 3),
        Wall::new(6, 7),
        Wall::new(6, 9),
        Wall::new(7, 2),
        Wall::new(7, 6),
        Wall::new(8, 1),
        Wall::new(8, 3),
        Wall::new(8, 5),
        Wall::new(8, 9),
        Wall::new(9, 8),
        Wall::new(10, 1),
        Wall::new(10, 5),
    ],
    [
        Wall::new(0, 5),
        Wall::new(0, 7),
        Wall::new(1, 2),
        Wall::new(2, 1),
        Wall::new(2, 3),
        Wall::new(2, 5),
        Wall::new(2, 9),
        Wall::new(3, 0),
        Wall::new(3, 6),
        Wall::new(3, 8),
        Wall::new(4, 3),
        Wall::new(4, 5),
        Wall::new(4, 9),
        Wall::new(6, 1),
        Wall::new(6, 3),
        Wall::new(6, 5),
        Wall::new(6, 7),
        Wall::new(6, 9),
        Wall::new(8, 1),
        Wall::new(8, 5),
        Wall::new(8, 7),
        Wall::new(8, 9),
        Wall::new(9, 2),
        Wall::new(9, 4),
        Wall::new(10, 7),
    ],
    [
        Wall::new(0, 3),
        Wall::new(1, 4),
        Wall::new(1, 6),
        Wall::new(1, 8),
        Wall::new(2, 1),
        Wall::new(2, 3),
        Wall::new(3, 6),
        Wall::new(3, 8),
        Wall::new(4, 1),
        Wall::new(4, 5),
        Wall::new(4, 9),
        Wall::new(5, 2),
        Wall::new(5, 4),
        Wall::new(5, 8),
        Wall::new(6, 1),
        Wall::new(7, 2),
        Wall::new(7, 4),
        Wall::new(7, 6),
        Wall::new(7, 8),
        Wall::new(8, 9),
        Wall::new(9, 2),
        Wall::new(9, 4),
        Wall::new(9, 6),
        Wall::new(10, 5),
        Wall::new(10, 9),
    ],
    [
        Wall::new(1, 0),
        Wall::new(1, 2),
        Wall::new(1, 4),
        Wall::new(1, 6),
        Wall::new(2, 9),
        Wall::new(3, 2),
        Wall::new(3, 4),
        Wall::new(3, 8),
        Wall::new(3, 10),
        Wall::new(4, 3),
        Wall::new(4, 7),
        Wall::new(5, 4),
        Wall::new(5, 6),
        Wall::new(6, 1),
        Wall::new(6, 7),
        Wall::new(6, 9),
        Wall::new(7, 2),
        Wall::new(7, 4),
        Wall::new(7, 8),
        Wall::new(8, 1),
        Wall::new(8, 9),
        Wall::new(9, 4),
        Wall::new(9, 6),
        Wall::new(9, 8),
        Wall::new(10, 1),
    ],
    [
        Wall::new(0, 1),
        Wall::new(0, 5),
        Wall::new(1, 6),
        Wall::new(2, 1),
        Wall::new(2, 3),
        Wall::new(2, 5),
        Wall::new(2, 9),
        Wall::new(3, 8),
        Wall::new(4, 3),
        Wall::new(4, 5),
        Wall::new(4, 7),
        Wall::new(5, 2),
        Wall::new(5, 4),
        Wall::new(5, 10),
        Wall::new(6, 3),
        Wall::new(6, 7),
        Wall::new(6, 9),
        Wall::new(7, 0),
        Wall::new(8, 3),
        Wall::new(8, 5),
        Wall::new(8, 7),
        Wall::new(9, 2),
        Wall::new(9, 4),
        Wall::new(9, 8),
        Wall::new(10, 7),
    ],
    [
        Wall::new(0, 7),
        Wall::new(1, 2),
        Wall::new(1, 4),
        Wall::new(2, 1),
        Wall::new(2, 5),
        Wall::new(2, 9),
        Wall::new(3, 4),
        Wall::new(3, 6),
        Wall::new(3, 8),
        Wall::new(4, 3),
        Wall::new(4, 7),
        Wall::new(5, 0),
        Wall::new(5, 2),
        Wall::new(5, 6),
        Wall::new(5, 10),
        Wall::new(6, 3),
        Wall::new(6, 9),
        Wall::new(7, 6),
        Wall::new(7, 8),
        Wall::new(8, 1),
        Wall::new(8, 3),
        Wall::new(8, 9),
        Wall::new(9, 2),
        Wall::new(9, 4),
        Wall::new(9, 6),
    ],
    [
        Wall::new(0, 1),
        Wall::new(0, 7),
        Wall::new(1, 4),
        Wall::new(2, 5),
        Wall::new(2, 9),
        Wall::new(3, 2),
        Wall::new(3, 4),
        Wall::new(3, 6),
        Wall::new(3, 8),
        Wall::new(4, 1),
        Wall::new(4, 9),
        Wall::new(5, 4),
        Wall::new(5, 6),
        Wall::new(6, 1),
        Wall::new(6, 5),
        Wall::new(7, 2),
        Wall::new(7, 6),
        Wall::new(7, 8),
        Wall::new(7, 10),
        Wall::new(8, 1),
        Wall::new(8, 3),
        Wall::new(9, 4),
        Wall::new(9, 6),
        Wall::new(9, 8),
        Wall::new(9, 10),
    ],
    [
        Wall::new(0, 1),
        Wall::new(1, 4),
        Wall::new(1, 6),
        Wall::new(2, 1),
        Wall::new(2, 3),
        Wall::new(2, 7),
        Wall::new(2, 9),
        Wall::new(3, 6),
        Wall::new(4, 5),
        Wall::new(4, 9),
        Wall::new(5, 2),
        Wall::new(5, 4),
        Wall::new(5, 8),
        Wall::new(6, 1),
        Wall::new(6, 3),
        Wall::new(6, 7),
        Wall::new(7, 6),
        Wall::new(7, 8),
        Wall::new(8, 1),
        Wall::new(8, 3),
        Wall::new(8, 5),
        Wall::new(8, 9),
        Wall::new(9, 10),
        Wall::new(10, 3),
        Wall::new(10, 7),
    ],
];

/// Circular-marking coordinates and the maze each identifies.
static MARKINGS: [(Coord, usize); 18] = [
    (Coord::new(1, 0), 0),
    (Coord::new(2, 5), 0),
    (Coord::new(3, 1), 1),
    (Coord::new(1, 4), 1),
    (Coord::new(3, 3), 2),
    (Coord::new(3, 5), 2),
    (Coord::new(0, 0), 3),
    (Coord::new(3, 0), 3),
    (Coord::new(2, 4), 4),
    (Coord::new(5, 3), 4),
    (Coord::new(0, 4), 5),
    (Coord::new(4, 2), 5),
    (Coord::new(0, 1), 6),
    (Coord::new(5, 1), 6),
    (Coord::new(0, 3), 7),
    (Coord::new(3, 2), 7),
    (Coord::new(1, 2), 8),
    (Coord::new(4, 0), 8),
];

fn maze_for_marking(marking: Coord) -> Option<&'static [Wall; 25]> {
    MARKINGS
        .iter()
        .find(|(coord, _)| *coord == marking)
        .map(|(_, index)| &MAZES[*index])
}

#[derive(Debug)]
pub struct Maze {
    state: SolverState,
}

impl Maze {
    pub fn new(count: u32) -> Self {
        Self {
            state: SolverState::new(count),
        }
    }

    pub fn boxed(count: u32) -> Box<dyn ModuleSolver> {
        Box::new(Self::new(count))
    }
}

impl ModuleSolver for Maze {
    fn name(&self) -> &str {
        "Maze"
    }

    fn type_id(&self) -> &str {
        "Maze"
    }

    fn required_edgework(&self) -> EdgeFlags {
        EdgeFlags::NONE
    }

    fn state(&self) -> &SolverState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SolverState {
        &mut self.state
    }

    fn run_stage(&mut self, ctx: &mut SolveContext<'_>) -> Result<(), SolveError> {
        loop {
            ctx.console.emit("What coordinate contains the white light?");
            let start = ask_coord(ctx.console)?;
            ctx.console.emit("What coordinate contains the red triangle?");
            let goal = ask_coord(ctx.console)?;
            ctx.console.emit("What coordinate contains a circular marking?");
            ctx.console.emit("(You may use either one.)");
            let mut marking = ask_coord(ctx.console)?;
            while maze_for_marking(marking).is_none() {
                ctx.console.emit("That doesn't fit any of the mazes.");
                ctx.console.emit("What coordinate contains a circular marking?");
                ctx.console.emit("(You may use either one.)");
                marking = ask_coord(ctx.console)?;
            }
            let Some(walls) = maze_for_marking(marking) else {
                continue;
            };
            let path = shortest_path(Dimensions::new(6, 6), start, goal, walls);
            if path.is_empty() {
                ctx.console
                    .emit("Something went wrong and I couldn't find a path.");
                continue;
            }
            ctx.console.emit("Press the following directions in order:");
            for direction in path {
                ctx.console.emit(direction.name());
            }
            return Ok(());
        }
    }
}
