use crate::{algorithms::Algorithm, dims::Dims, gameboard::MazeError};

/// Parameters of a maze: size, start, goal, generation algorithm and seed.
///
/// The size is fixed at construction, start and goal are clamped into the
/// grid whenever they are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeOptions {
    size: Dims,
    start: Dims,
    goal: Dims,
    algorithm: Algorithm,
    seed: Option<u64>,
}

impl MazeOptions {
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        let size = Dims(width, height);
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimension(size));
        }

        Ok(Self {
            size,
            start: Dims::ZERO,
            goal: size - Dims(1, 1),
            algorithm: Algorithm::default(),
            seed: None,
        })
    }

    pub fn with_start(mut self, start: Dims) -> Self {
        self.start = start.clamp_into(self.size);
        self
    }

    pub fn with_goal(mut self, goal: Dims) -> Self {
        self.goal = goal.clamp_into(self.size);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn size_x(&self) -> i32 {
        self.size.0
    }

    pub fn size_y(&self) -> i32 {
        self.size.1
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn goal(&self) -> Dims {
        self.goal
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = MazeOptions::new(5, 3).unwrap();
        assert_eq!(options.size(), Dims(5, 3));
        assert_eq!(options.start(), Dims(0, 0));
        assert_eq!(options.goal(), Dims(4, 2));
        assert_eq!(options.algorithm(), Algorithm::DepthFirstSearch);
        assert_eq!(options.seed(), None);
    }

    #[test]
    fn rejects_empty_size() {
        assert_eq!(
            MazeOptions::new(0, 4),
            Err(MazeError::InvalidDimension(Dims(0, 4)))
        );
        assert!(MazeOptions::new(4, -2).is_err());
    }

    #[test]
    fn clamps_points() {
        let options = MazeOptions::new(4, 4)
            .unwrap()
            .with_start(Dims(-3, 2))
            .with_goal(Dims(10, 10));
        assert_eq!(options.start(), Dims(0, 2));
        assert_eq!(options.goal(), Dims(3, 3));

        let options = options.with_goal(Dims(1, -1));
        assert_eq!(options.goal(), Dims(1, 0));
    }

    #[test]
    fn builder_keeps_other_fields() {
        let options = MazeOptions::new(2, 2)
            .unwrap()
            .with_algorithm(Algorithm::Wilson)
            .with_seed(Some(12))
            .with_start(Dims(1, 1));
        assert_eq!(options.algorithm(), Algorithm::Wilson);
        assert_eq!(options.seed(), Some(12));
        assert_eq!(options.goal(), Dims(1, 1));
    }
}
