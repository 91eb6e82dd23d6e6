// components.rs
use bevy::prelude::*;
use rand::Rng;

/// A grid cell. All gameplay positions are cell coordinates; conversion to
/// world pixels happens only in the render systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Sentinel for a freshly grown segment: off the grid until the next
    /// advance shifts it onto its predecessor's old cell.
    pub const OFFSCREEN: Position = Position { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit cell delta, y-up to match world coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Direction a fresh snake heads in.
pub const INITIAL_DIRECTION: Direction = Direction::Down;

/// The snake: segment cells with the head at index 0, plus the direction the
/// head moves on the next tick.
#[derive(Component, Debug, Clone)]
pub struct Snake {
    pub segments: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    pub fn spawn(head: Position, direction: Direction) -> Self {
        Self {
            segments: vec![head],
            direction,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Score shown in the HUD is simply the snake's length.
    pub fn score(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Sets the direction for the next advance. Immediate reversal is
    /// deliberately not rejected; with a long enough body it runs the head
    /// into itself, which the self-collision scan then catches.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Appends a placeholder segment at the off-grid sentinel. It takes over
    /// the old tail cell on the next advance.
    pub fn grow(&mut self) {
        self.segments.push(Position::OFFSCREEN);
    }

    /// One simulation step: each trailing segment moves to its predecessor's
    /// prior cell (back to front, so old positions are read before being
    /// overwritten), then the head moves one cell in the current direction,
    /// wrapping at the grid edges.
    pub fn advance(&mut self, grid: &GridSettings) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        let (dx, dy) = self.direction.delta();
        let head = &mut self.segments[0];
        head.x = (head.x + dx).rem_euclid(grid.grid_width);
        head.y = (head.y + dy).rem_euclid(grid.grid_height);
    }

    /// True iff the head sits on a segment at index >= 3. Indices 1 and 2
    /// are skipped so segments still stacked near the head right after a
    /// growth cannot register as a crash.
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(3).any(|&seg| seg == head)
    }
}

/// The apple occupies a single cell.
#[derive(Component, Debug, Clone, Copy)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    pub fn spawn(position: Position) -> Self {
        Self { position }
    }

    /// Moves the apple to a uniformly random in-bounds cell. Cells occupied
    /// by the snake are not excluded; a brief overlap is an accepted quirk.
    pub fn relocate(&mut self, grid: &GridSettings) {
        let mut rng = rand::rng();
        self.position = Position::new(
            rng.random_range(0..grid.grid_width),
            rng.random_range(0..grid.grid_height),
        );
    }
}

// Sprite markers. Segment sprites carry their index into Snake::segments.
#[derive(Component)]
pub struct SegmentSprite {
    pub index: usize,
}

#[derive(Component)]
pub struct AppleSprite;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct GameOverText;

#[derive(Component)]
pub struct BackgroundMusic;

#[derive(Resource, Clone)]
pub struct GridSettings {
    pub cell_size: f32,
    pub grid_width: i32,
    pub grid_height: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size: 40.0, // Each cell is 40x40 pixels
            grid_width: 25,  // 25 cells across (1000 pixels)
            grid_height: 20, // 20 cells high (800 pixels)
        }
    }
}

impl GridSettings {
    /// World-space center of a cell, with the grid centered in the window.
    pub fn cell_to_world(&self, pos: Position) -> Vec2 {
        let half_width = (self.grid_width as f32 * self.cell_size) / 2.0;
        let half_height = (self.grid_height as f32 * self.cell_size) / 2.0;
        Vec2::new(
            (pos.x as f32 * self.cell_size) - half_width + (self.cell_size / 2.0),
            (pos.y as f32 * self.cell_size) - half_height + (self.cell_size / 2.0),
        )
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }

    /// Cell the snake starts on: one cell in from the top-left corner.
    pub fn snake_spawn(&self) -> Position {
        Position::new(1, self.grid_height - 2)
    }

    /// Cell the apple starts on.
    pub fn apple_spawn(&self) -> Position {
        Position::new(3, self.grid_height - 4)
    }
}
