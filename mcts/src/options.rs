pub struct MCTSOptions {
    pub(crate) iterations: usize,
    pub(crate) exploration_constant: f32,
}

impl MCTSOptions {
    pub fn new(iterations: usize, exploration_constant: f32) -> Self {
        MCTSOptions {
            iterations,
            exploration_constant,
        }
    }
}

impl Default for MCTSOptions {
    fn default() -> Self {
        Self::new(60, std::f32::consts::SQRT_2)
    }
}
