use anyhow::{Context, Result};
use cylevo_sim::objective::CylinderArea;

use crate::printing::print_solution;

pub fn show_analytic(volume: f64) -> Result<()> {
    let objective = CylinderArea::new(volume).context("Invalid volume")?;

    println!("📐 Cylevo - Analytic Solution");
    println!("============================================");
    println!("  • Volume: {volume} [--volume]");
    print_solution("Analytic Solution", &objective.analytic_optimum());

    Ok(())
}
