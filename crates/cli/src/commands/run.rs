use anyhow::{Context, Result};
use cylevo_sim::objective::CylinderSolution;
use cylevo_sim::simulation::{Configuration, EngineBuilder, GenerationSummary, RunResult};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::args::RunArgs;
use crate::printing::{format_summary, print_parameters, print_solution, should_report};

/// Everything `--json` prints, as one document.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    configuration: &'a Configuration,
    summaries: Vec<GenerationSummary>,
    result: RunResult,
    solution: CylinderSolution,
    analytic: CylinderSolution,
}

pub fn run_optimizer(args: &RunArgs) -> Result<()> {
    anyhow::ensure!(args.report_every > 0, "--report-every must be at least 1");

    let mut builder = EngineBuilder::new()
        .population_size(args.population_size)
        .generations(args.generations)
        .bounds(args.min_radius, args.max_radius)
        .mutation(args.mutation_rate, args.mutation_std_dev)
        .crossover_rate(args.crossover_rate)
        .fixed_volume(args.volume);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut engine = builder
        .build_cylinder()
        .context("Failed to configure optimizer")?;

    let total_generations = engine.configuration().execution.total_generations;

    if args.json {
        let mut summaries = Vec::with_capacity(total_generations);
        let result = engine
            .run(&mut |summary: &GenerationSummary| summaries.push(*summary))
            .context("Optimization failed")?;

        let objective = engine.evaluator();
        let report = RunReport {
            configuration: engine.configuration(),
            summaries,
            result,
            solution: objective.solution(result.best_genome),
            analytic: objective.analytic_optimum(),
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
        return Ok(());
    }

    println!("🥫 Cylevo - Running Optimizer");
    println!("============================================");
    print_parameters(engine.configuration());
    println!("Running {total_generations} generations...");

    let pb = if args.progress {
        let pb = ProgressBar::new(total_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report_every = args.report_every;
    let result = engine
        .run(&mut |summary: &GenerationSummary| {
            if should_report(summary.generation, report_every, total_generations) {
                let line = format_summary(summary);
                match &pb {
                    Some(pb) => pb.println(line),
                    None => println!("{line}"),
                }
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        })
        .context("Optimization failed")?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let objective = engine.evaluator();
    let solution = objective.solution(result.best_genome);
    let analytic = objective.analytic_optimum();

    print_solution("Genetic Algorithm Solution", &solution);
    print_solution("Analytic Solution", &analytic);

    let gap = (solution.surface_area - analytic.surface_area) / analytic.surface_area;
    println!("\n✓ Optimization complete!");
    println!("  Surface area above optimum: {:.4}%", gap * 100.0);

    Ok(())
}
