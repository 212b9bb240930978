//! Snake module - head-first body, fruit and closeness tests
//!
//! The scene uses abstract units (180 x 180 by default). Every move adds a new
//! head one step (two head radii) away; the tail is dropped unless a fruit was
//! eaten. Collisions use an axis-aligned closeness box, not a true distance:
//! two points are "too close" when they differ by less than the factor on
//! both axes.

use std::collections::VecDeque;

use crate::config::SnakeConfig;
use crate::rng::SimpleRng;
use crate::types::*;

/// `a` lies strictly inside the `2f x 2f` box centred on `b`
pub fn too_close(a: Position, b: Position, f: i32) -> bool {
    a.x > b.x - f && a.x < b.x + f && a.y > b.y - f && a.y < b.y + f
}

/// Outcome of one snake step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakeEvent {
    /// Not running
    Idle,
    Moved,
    /// A fruit was eaten; the step period should shrink
    Ate { points: u32 },
    /// Wall or self collision
    Crashed { points: u32 },
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: SnakeConfig,
    body: VecDeque<Position>,
    fruit: Position,
    direction: Direction,
    points: u32,
    status: PlayState,
    rng: SimpleRng,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let fruit = random_fruit(&config, &mut rng);
        Ok(Self {
            body: VecDeque::from([start_position(&config)]),
            config,
            fruit,
            direction: Direction::Down,
            points: 0,
            status: PlayState::Idle,
            rng,
        })
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Head first
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or_else(|| start_position(&self.config))
    }

    pub fn fruit(&self) -> Position {
        self.fruit
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn status(&self) -> PlayState {
        self.status
    }

    /// Replace the fruit (scenario setups)
    pub fn place_fruit(&mut self, fruit: Position) {
        self.fruit = fruit;
    }

    /// Replace the body, head first (scenario setups). An empty body is ignored.
    pub fn place_body(&mut self, body: impl IntoIterator<Item = Position>) {
        let body: VecDeque<Position> = body.into_iter().collect();
        if !body.is_empty() {
            self.body = body;
        }
    }

    pub fn start(&mut self) -> bool {
        if self.status != PlayState::Idle {
            return false;
        }
        self.status = PlayState::Running;
        true
    }

    /// Single-segment snake in the middle heading down, new fruit, zero points.
    pub fn reset(&mut self) {
        self.body = VecDeque::from([start_position(&self.config)]);
        self.fruit = random_fruit(&self.config, &mut self.rng);
        self.direction = Direction::Down;
        self.points = 0;
        self.status = PlayState::Idle;
    }

    /// Turn unless the new heading reverses the current one.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status != PlayState::Running || direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Head outside the scene (with a `radius - 1` margin) or inside the
    /// closeness box of another body point.
    pub fn is_ending_move(&self) -> bool {
        let head = self.head();
        let r = self.config.head_radius;
        let margin = r - 1;
        let out_of_scene = head.x < margin
            || head.x > self.config.width - margin
            || head.y < margin
            || head.y > self.config.height - margin;

        out_of_scene || self.body.iter().skip(1).any(|&p| too_close(p, head, r))
    }

    fn move_forward(&mut self) {
        let (dx, dy) = self.direction.delta();
        let step = self.config.step();
        let head = self.head().offset(dx * step, dy * step);
        self.body.push_front(head);
    }

    pub fn tick(&mut self) -> SnakeEvent {
        if self.status != PlayState::Running {
            return SnakeEvent::Idle;
        }

        if self.is_ending_move() {
            self.status = PlayState::Ended;
            return SnakeEvent::Crashed {
                points: self.points,
            };
        }

        let reach = self.config.head_radius + self.config.fruit_radius;
        if too_close(self.head(), self.fruit, reach) {
            self.move_forward();
            self.fruit = random_fruit(&self.config, &mut self.rng);
            self.points = self.points.saturating_add(self.config.points_per_fruit);
            SnakeEvent::Ate {
                points: self.points,
            }
        } else {
            self.move_forward();
            self.body.pop_back();
            SnakeEvent::Moved
        }
    }

    pub fn final_score(&self) -> Option<FinalScore> {
        (self.status == PlayState::Ended).then_some(FinalScore::Points(self.points))
    }
}

fn start_position(config: &SnakeConfig) -> Position {
    Position::new(config.width / 2, config.height / 2)
}

/// Uniform in `[fruit_radius, size - fruit_radius]` on both axes
pub fn random_fruit(config: &SnakeConfig, rng: &mut SimpleRng) -> Position {
    let r = config.fruit_radius;
    Position::new(
        rng.next_range_inclusive(r, config.width - r),
        rng.next_range_inclusive(r, config.height - r),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> SnakeGame {
        let mut game = SnakeGame::new(SnakeConfig::default(), 11).unwrap();
        game.place_fruit(Position::new(10, 10));
        game.start();
        game
    }

    #[test]
    fn test_too_close_is_strict() {
        let b = Position::new(50, 50);
        assert!(too_close(Position::new(52, 48), b, 3));
        assert!(!too_close(Position::new(53, 50), b, 3));
        assert!(!too_close(Position::new(56, 50), b, 3));
    }

    #[test]
    fn test_starts_in_the_middle_heading_down() {
        let game = SnakeGame::new(SnakeConfig::default(), 1).unwrap();
        assert_eq!(game.head(), Position::new(90, 90));
        assert_eq!(game.direction(), Direction::Down);
        assert_eq!(game.body().len(), 1);
    }

    #[test]
    fn test_move_drops_tail() {
        let mut game = running();
        assert_eq!(game.tick(), SnakeEvent::Moved);
        assert_eq!(game.head(), Position::new(90, 96));
        assert_eq!(game.body().len(), 1);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = running();
        game.place_fruit(Position::new(92, 92));
        assert_eq!(game.tick(), SnakeEvent::Ate { points: 10 });
        assert_eq!(game.body().len(), 2);
        assert_eq!(game.head(), Position::new(90, 96));
    }

    #[test]
    fn test_reverse_direction_ignored() {
        let mut game = running();
        assert!(!game.change_direction(Direction::Up));
        assert!(game.change_direction(Direction::Left));
        assert_eq!(game.direction(), Direction::Left);
    }

    #[test]
    fn test_wall_ends_game_before_moving() {
        let mut game = running();
        game.place_body([Position::new(90, 179)]);
        assert_eq!(game.tick(), SnakeEvent::Crashed { points: 0 });
        assert_eq!(game.head(), Position::new(90, 179));
        assert_eq!(game.final_score(), Some(FinalScore::Points(0)));
    }

    #[test]
    fn test_fruit_stays_inside_margin() {
        let config = SnakeConfig::default();
        let mut rng = SimpleRng::new(3);
        for _ in 0..500 {
            let f = random_fruit(&config, &mut rng);
            assert!((4..=176).contains(&f.x));
            assert!((4..=176).contains(&f.y));
        }
    }
}
