use std::io::Write;

use mazecore::{Dims, Maze, MazeCarver, MazeSpec, PathFinder, RecursiveBacktracker};

use crate::{error::AppError, renderer::Renderer, settings::Settings};

/// Everything a single run needs, settings merged with the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub spec: MazeSpec,
    pub solve: bool,
    pub renderer: Renderer,
}

/// Values given on the command line, they take precedence over the settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub seed: Option<u64>,
    pub no_solve: bool,
    pub plain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub seed: u64,
    /// Length of the shortest route, `None` when not solved.
    pub steps: Option<usize>,
}

impl RunConfig {
    pub fn resolve(settings: &Settings, overrides: Overrides) -> Self {
        let Dims(w, h) = settings.get_size();
        let size = Dims(overrides.width.unwrap_or(w), overrides.height.unwrap_or(h));

        let mut spec = MazeSpec::new(size);
        spec.seed = overrides.seed.or(settings.get_seed());

        let renderer = if overrides.plain {
            Renderer::plain()
        } else {
            Renderer::new(settings.get_color_scheme())
        };

        RunConfig {
            spec,
            solve: settings.get_solve() && !overrides.no_solve,
            renderer,
        }
    }
}

/// Generates the maze, prints it, then prints it again with the shortest route marked.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<RunOutcome, AppError> {
    run_with(config, &RecursiveBacktracker, out)
}

pub fn run_with(
    config: &RunConfig,
    carver: &dyn MazeCarver,
    out: &mut impl Write,
) -> Result<RunOutcome, AppError> {
    let renderer = &config.renderer;

    let mut maze = Maze::generate(&config.spec, carver)?;
    if config.spec.seed.is_none() {
        writeln!(out, "Seed: {}", maze.seed())?;
    }

    renderer.header("MAZE RUNNER: Generated Maze", "S: Start | E: Exit", out)?;
    renderer.render(maze.grid(), out)?;

    if !config.solve {
        return Ok(RunOutcome {
            seed: maze.seed(),
            steps: None,
        });
    }

    writeln!(out)?;
    renderer.header(
        "MAZE RUNNER: Shortest Solution (BFS)",
        "**: Shortest Path Found",
        out,
    )?;

    let steps = match maze.solve_route(&PathFinder::new()) {
        Ok(route) => {
            log::info!("Solved in {} steps, {:?}", route.steps(), route.stats());
            renderer.render(maze.grid(), out)?;
            Some(route.steps())
        }
        Err(err) if err.is_recoverable() => {
            // perfect mazes are connected, this means the generator is broken
            log::error!("{}", err);
            writeln!(out, "Error: Could not find a path!")?;
            None
        }
        Err(err) => return Err(err.into()),
    };

    Ok(RunOutcome {
        seed: maze.seed(),
        steps,
    })
}
