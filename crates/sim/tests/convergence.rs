//! End-to-end tests of the cylinder optimization.

use cylevo_sim::errors::GaError;
use cylevo_sim::objective::CylinderArea;
use cylevo_sim::simulation::{Engine, EngineBuilder, GenerationSummary, RunResult};

/// Run the default cylinder problem (V = 1000, r in [0.1, 10]) with `seed`.
fn run_default(seed: u64) -> (RunResult, Vec<GenerationSummary>, Engine<CylinderArea>) {
    let mut engine = EngineBuilder::new()
        .population_size(50)
        .generations(100)
        .bounds(0.1, 10.0)
        .mutation(0.1, 0.1)
        .crossover_rate(0.8)
        .fixed_volume(1000.0)
        .seed(seed)
        .build_cylinder()
        .unwrap();

    let mut summaries = Vec::new();
    let result = engine
        .run(&mut |s: &GenerationSummary| summaries.push(*s))
        .unwrap();
    (result, summaries, engine)
}

fn relative_error(value: f64, reference: f64) -> f64 {
    (value - reference).abs() / reference
}

#[test]
fn test_analytic_optimum_reference() {
    let optimum = CylinderArea::new(1000.0).unwrap().analytic_optimum();
    assert!((optimum.radius - 5.419).abs() < 1e-3);
    assert!((optimum.height - 2.0 * optimum.radius).abs() < 1e-9);
    assert!((optimum.surface_area - 553.58).abs() < 0.01);
}

#[test]
fn test_default_run_approaches_optimum() {
    let mut areas = Vec::new();

    for seed in [1, 2, 3, 4, 5] {
        let (result, summaries, engine) = run_default(seed);
        let objective = engine.evaluator();
        let solution = objective.solution(result.best_genome);

        assert_eq!(summaries.len(), 100);
        assert!((0.1..=10.0).contains(&solution.radius));
        assert!((result.best_fitness - 1.0 / solution.surface_area).abs() < 1e-12);

        let optimum = objective.analytic_optimum();
        assert!(
            solution.surface_area >= optimum.surface_area - 1e-9,
            "no radius beats the analytic optimum"
        );
        assert!(
            relative_error(solution.surface_area, optimum.surface_area) < 0.10,
            "seed {seed}: area {} too far from {}",
            solution.surface_area,
            optimum.surface_area
        );
        areas.push(solution.surface_area);
    }

    let mean_area = areas.iter().sum::<f64>() / areas.len() as f64;
    assert!(relative_error(mean_area, 553.58) < 0.05);
}

#[test]
fn test_default_run_finds_optimal_radius() {
    let (result, _, engine) = run_default(42);
    let optimum = engine.evaluator().analytic_optimum();

    assert!(
        relative_error(result.best_genome, optimum.radius) < 0.05,
        "radius {} too far from {}",
        result.best_genome,
        optimum.radius
    );
    let solution = engine.evaluator().solution(result.best_genome);
    assert!(relative_error(solution.height, optimum.height) < 0.10);
    assert!(relative_error(solution.surface_area, optimum.surface_area) < 0.005);
}

#[test]
fn test_mean_fitness_improves() {
    let (_, summaries, _) = run_default(42);
    let first = summaries.first().unwrap();
    let last = summaries.last().unwrap();

    assert!(last.mean_fitness > first.mean_fitness);
    for summary in &summaries {
        assert!(summary.mean_fitness <= summary.max_fitness);
        assert!(summary.mutation_count <= 50);
    }
}

#[test]
fn test_larger_run_is_tighter() {
    let mut engine = EngineBuilder::new()
        .population_size(200)
        .generations(200)
        .bounds(0.1, 10.0)
        .mutation(0.1, 0.1)
        .crossover_rate(0.8)
        .seed(2024)
        .build_cylinder()
        .unwrap();

    let result = engine.run(&mut |_: &GenerationSummary| {}).unwrap();
    let objective = engine.evaluator();
    let area = objective.surface_area(result.best_genome);

    assert!(relative_error(area, objective.analytic_optimum().surface_area) < 0.05);
}

#[test]
fn test_same_seed_same_run() {
    let (result_a, summaries_a, engine_a) = run_default(42);
    let (result_b, summaries_b, engine_b) = run_default(42);

    assert_eq!(result_a, result_b);
    assert_eq!(summaries_a, summaries_b);
    assert_eq!(engine_a.population(), engine_b.population());
}

#[test]
fn test_single_generation() {
    let mut engine = EngineBuilder::new()
        .population_size(5)
        .generations(1)
        .bounds(0.1, 10.0)
        .mutation(0.1, 0.1)
        .crossover_rate(0.8)
        .seed(9)
        .build_cylinder()
        .unwrap();

    let mut generations = Vec::new();
    engine
        .run(&mut |s: &GenerationSummary| generations.push(s.generation))
        .unwrap();

    assert_eq!(generations, vec![0]);
    assert_eq!(engine.generation(), Some(1));
}

#[test]
fn test_population_of_one() {
    let mut engine = EngineBuilder::new()
        .population_size(1)
        .generations(10)
        .bounds(0.1, 10.0)
        .mutation(0.5, 0.5)
        .crossover_rate(1.0)
        .seed(5)
        .build_cylinder()
        .unwrap();

    let result = engine.run(&mut |_: &GenerationSummary| {}).unwrap();
    assert_eq!(engine.population().unwrap().genomes(), &[result.best_genome]);
}

#[test]
fn test_custom_objective() {
    // Maximum of a bell curve centred on 3.0
    let mut engine = EngineBuilder::new()
        .population_size(60)
        .generations(60)
        .bounds(1.0, 5.0)
        .mutation(0.2, 0.05)
        .crossover_rate(0.8)
        .seed(17)
        .build(|x: f64| (-(x - 3.0).powi(2)).exp())
        .unwrap();

    let result = engine.run(&mut |_: &GenerationSummary| {}).unwrap();
    assert!((result.best_genome - 3.0).abs() < 0.5);
}

#[test]
fn test_degenerate_objective_aborts_run() {
    let mut engine = EngineBuilder::new()
        .population_size(10)
        .generations(10)
        .bounds(0.1, 10.0)
        .seed(1)
        .build(|_: f64| f64::INFINITY)
        .unwrap();

    let mut called = false;
    let err = engine
        .run(&mut |_: &GenerationSummary| called = true)
        .unwrap_err();

    assert!(matches!(err, GaError::DegenerateFitness { generation: 0, .. }));
    assert!(!called);
}
