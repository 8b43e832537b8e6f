//! Structural scoring demonstration for structure_lab

use structure_lab::*;

fn main() -> Result<()> {
    println!("=== structure_lab Analysis Demo ===\n");

    let diameter = 200.0;
    let weight = 40.0;

    println!(
        "Scoring all shapes as Honeycomb at diameter {} mm under {} kg:\n",
        diameter, weight
    );

    for shape in PrimitiveShape::ALL {
        let stats = calc_stats(shape, StructureType::Honeycomb, diameter, weight);
        println!(
            "  {:<10} strength {:>5.1}%  max load {:>6.0} kg  efficiency {:>5.1}%  load ratio {:>4.2}  -> {}",
            shape.name(),
            stats.strength,
            stats.max_load,
            stats.efficiency,
            stats.load_ratio,
            stats.verdict()
        );
    }

    // Compare structure types for one shape
    println!("\nCube across structure types:\n");
    for structure_type in StructureType::ALL {
        let report = analyze_structure("Cube", structure_type.name(), diameter, weight)?;
        println!(
            "  {:<10} max load {:>6.0} kg  material {:>5.2}  -> {}",
            structure_type.name(),
            report.stats.max_load,
            report.stats.material,
            report.sim_result
        );
    }

    // Unknown keys are hard errors
    println!("\nLookup failure:");
    match analyze_structure("Tesseract", "Solid", diameter, weight) {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  {}", err),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
