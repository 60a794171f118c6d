//! rabbits - command line driver
//!
//! Runs a single simulation and reports how the population's traits moved.

use clap::Parser;
use core::ops::ControlFlow;
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use rabbits::{
    serde_traits::ToJson, EvolutionEngine, EvolutionHooks, History, Hook, RunConfig, Stats,
    Trait,
};
use std::{error::Error, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "rabbits")]
#[command(version)]
#[command(about = "Simulate the evolution of a rabbit population")]
struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rabbits to start with
    #[arg(short, long)]
    population: Option<usize>,

    /// Number of generations to simulate
    #[arg(short, long)]
    generations: Option<usize>,

    /// Chance of each trait of each child mutating (0.0-1.0)
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Food available in the environment
    #[arg(long)]
    food: Option<f64>,

    /// Predator pressure in the environment
    #[arg(long)]
    predators: Option<f64>,

    /// Write the per-generation trait averages here (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quiet mode (no progress bar)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// The configuration file, or the defaults, with any flags given applied on top
    fn run_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(food) = self.food {
            config.environment.food_availability = food;
        }
        if let Some(predators) = self.predators {
            config.environment.predator_pressure = predators;
        }

        config.validate()?;
        Ok(config)
    }
}

fn progress(generations: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(generations as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{bar:40} {pos}/{len} generations [{elapsed_precise}] {msg}")
    {
        bar.set_style(style);
    }
    bar
}

fn report(history: &History) {
    let Some(last) = history.last() else {
        return;
    };

    println!(
        "generation {} ({} rabbits):",
        last.generation, last.population
    );
    for t in Trait::ALL {
        let series = history.series(t);
        if let (Some((_, first)), Some((_, end))) = (series.first(), series.last()) {
            println!("  {:<18} {first:>10.4} -> {end:>10.4}", t.name());
        }
    }
}

fn simulate(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.run_config()?;

    let bar = progress(config.generations, cli.quiet);
    let hook_bar = bar.clone();
    let mut hooks = EvolutionHooks::new(vec![Box::new(move |stats: &Stats<'_>| {
        hook_bar.set_message(format!("{} rabbits", stats.len()));
        hook_bar.inc(1);
        ControlFlow::Continue(())
    }) as Hook]);

    let result = EvolutionEngine::seeded(config.seed).run(&config, &mut hooks);
    bar.finish_and_clear();
    let history = result?;

    report(&history);
    if let Some(path) = &cli.output {
        history.to_file(path)?;
        println!("history written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match simulate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
