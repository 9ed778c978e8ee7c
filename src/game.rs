//! Grid model and simulation.
//!
//! The whole game is one small state machine: a snake on a square tile grid,
//! advanced one cell per tick, ended by the first wall or body collision.
//! Everything here is pure logic so it runs (and is tested) off-wasm.

pub const TILE_COUNT: i32 = 20;
pub const INITIAL_LENGTH: usize = 3;

pub const START_TICK_MS: u32 = 150;
pub const TICK_DECREMENT_MS: u32 = 5;
pub const MIN_TICK_MS: u32 = 50;

/// One grid tile, addressed by integer coordinates with the origin at the
/// top left. Live cells satisfy `0 <= x, y < TILE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn shifted(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn in_bounds(self) -> bool {
        (0..TILE_COUNT).contains(&self.x) && (0..TILE_COUNT).contains(&self.y)
    }
}

/// Movement direction, one grid unit per tick along exactly one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What a single tick did, for the loop driver to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Moved,
    Ate { new_high: bool },
    Died,
}

/// Full game state. One owning context holds this and feeds it to the
/// scheduler and renderer; nothing lives in module globals.
#[derive(Debug, Clone)]
pub struct Game {
    /// Body cells, head at index 0.
    pub snake: Vec<Cell>,
    pub food: Cell,
    /// Direction committed by the last tick.
    velocity: Direction,
    /// Direction the next tick will use. Input overwrites this freely; the
    /// most recent valid key or swipe before a tick wins. That last-write-
    /// wins policy is intentional, not an accidental race.
    pending: Direction,
    pub score: u32,
    /// Score at the moment of the last game over.
    pub previous_score: u32,
    pub high_score: u32,
    /// Current inter-tick delay. Shrinks as food is eaten, floored at
    /// `MIN_TICK_MS`.
    pub tick_ms: u32,
    pub phase: Phase,
}

impl Game {
    pub fn new() -> Self {
        let mut game = Game {
            snake: Vec::new(),
            food: Cell::new(0, 0),
            velocity: Direction::Right,
            pending: Direction::Right,
            score: 0,
            previous_score: 0,
            high_score: 0,
            tick_ms: START_TICK_MS,
            phase: Phase::Running,
        };
        game.reset();
        game
    }

    /// Rebuilds all transient state: a fresh centered snake moving +x, score
    /// 0, starting speed, new food. Previous and high scores survive resets.
    pub fn reset(&mut self) {
        let mid = TILE_COUNT / 2;
        self.snake = (0..INITIAL_LENGTH as i32)
            .map(|i| Cell::new(mid - i, mid))
            .collect();
        self.velocity = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.tick_ms = START_TICK_MS;
        self.phase = Phase::Running;
        self.spawn_food();
    }

    /// Requests a direction change for the next tick. Only the axis
    /// orthogonal to the last tick's velocity is accepted, which is what
    /// makes an instant reversal into the neck impossible.
    pub fn steer(&mut self, dir: Direction) {
        if dir.is_horizontal() != self.velocity.is_horizontal() {
            self.pending = dir;
        }
    }

    /// Advances the simulation by one tick: move, collide, eat, grow.
    pub fn step(&mut self) -> Tick {
        if self.phase == Phase::GameOver {
            return Tick::Died;
        }
        self.velocity = self.pending;
        let head = self.snake[0].shifted(self.velocity);

        // The tail cell is about to be vacated but still counts as a hit;
        // moving onto the current tail is fatal by the game's rules.
        if !head.in_bounds() || self.snake.contains(&head) {
            self.phase = Phase::GameOver;
            self.previous_score = self.score;
            return Tick::Died;
        }

        self.snake.insert(0, head);
        if head == self.food {
            self.score += 1;
            let new_high = self.score > self.high_score;
            if new_high {
                self.high_score = self.score;
            }
            self.tick_ms = self.tick_ms.saturating_sub(TICK_DECREMENT_MS).max(MIN_TICK_MS);
            self.spawn_food();
            Tick::Ate { new_high }
        } else {
            self.snake.pop();
            Tick::Moved
        }
    }

    /// Places food uniformly over the cells the snake does not occupy.
    /// Enumerating the free cells up front means this terminates even on a
    /// nearly full grid; a completely full grid leaves the food where it is.
    fn spawn_food(&mut self) {
        let free: Vec<Cell> = (0..TILE_COUNT)
            .flat_map(|y| (0..TILE_COUNT).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        if let Some(&cell) = free.get(crate::rand::below(free.len())) {
            self.food = cell;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
