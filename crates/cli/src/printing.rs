use cylevo_sim::objective::CylinderSolution;
use cylevo_sim::simulation::{Configuration, GenerationSummary};

pub fn print_parameters(config: &Configuration) {
    let execution = &config.execution;
    let evolution = &config.evolution;

    println!("\n📋 Run Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        execution.population_size
    );
    println!(
        "  • Generations: {} [-g, --generations]",
        execution.total_generations
    );
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🥫 Objective");
    println!("  • Volume: {} [--volume]", config.objective.fixed_volume);
    println!(
        "  • Radius Range: [{}, {}] [--min-radius, --max-radius]",
        config.domain.min, config.domain.max
    );

    println!("\n⚡ Evolution Parameters");
    println!(
        "  • Mutation Rate: {:.3} [--mutation-rate]",
        evolution.mutation_rate
    );
    println!(
        "  • Mutation Std Dev: {:.3} [--mutation-std-dev]",
        evolution.mutation_std_dev
    );
    println!(
        "  • Crossover Rate: {:.3} [--crossover-rate]",
        evolution.crossover_rate
    );
    println!();
}

/// Whether `generation` gets a progress line.
pub fn should_report(generation: usize, report_every: usize, total_generations: usize) -> bool {
    generation % report_every == 0 || generation + 1 == total_generations
}

pub fn format_summary(summary: &GenerationSummary) -> String {
    format!(
        "Generation {}: Max Fitness = {:.6}, Mean Fitness = {:.6}, Mutations = {}",
        summary.generation, summary.max_fitness, summary.mean_fitness, summary.mutation_count
    )
}

pub fn print_solution(title: &str, solution: &CylinderSolution) {
    println!("\n{title}:");
    println!("  • Radius: {:.6} units", solution.radius);
    println!("  • Height: {:.6} units", solution.height);
    println!("  • Surface Area: {:.6} square units", solution.surface_area);
}
