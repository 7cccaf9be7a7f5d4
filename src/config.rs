use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Candidate keys per generation.
    #[arg(long, default_value_t = 100)]
    pub population_size: usize,

    /// Probability that a freshly bred child is mutated.
    #[arg(long, default_value_t = 0.9)]
    pub mutation_rate: f64,

    /// Top-ranked keys copied unchanged into the next generation.
    #[arg(long, default_value_t = 3)]
    pub elite_size: usize,

    /// Generation budget. The search always runs to the budget unless
    /// --patience is set.
    #[arg(long, default_value_t = 100)]
    pub generations: usize,

    /// Stop early after this many generations without an all-time-best
    /// improvement. Off by default: the fixed budget is the reference
    /// behavior.
    #[arg(long)]
    pub patience: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.9,
            elite_size: 3,
            generations: 100,
            patience: None,
        }
    }
}
