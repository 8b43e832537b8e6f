//! Blueprint conversion demonstration for structure_lab

use structure_lab::*;

fn main() {
    println!("=== structure_lab Conversion Demo ===\n");

    // Step 1: Build a blueprint
    let shapes = vec![
        Shape::new(
            "deck",
            "rectangle",
            Point2::new(0.0, 0.0),
            Size2::new(300.0, 120.0),
            "steel",
        ),
        Shape::new(
            "pillar",
            "rectangle",
            Point2::new(130.0, 120.0),
            Size2::new(40.0, 80.0),
            "concrete",
        ),
    ];

    let bounds = BoundingBox::of_shapes(&shapes).unwrap();
    println!("Blueprint: {} shapes", shapes.len());
    println!(
        "  Bounding box: {:.1} x {:.1} at ({:.1}, {:.1})",
        bounds.width(),
        bounds.height(),
        bounds.min.x,
        bounds.min.y
    );

    // Step 2: Solid passthrough
    let solid = convert_blueprint(shapes.clone(), "solid", DEFAULT_HEX_SIZE);
    println!("\nSolid: {} shapes (unchanged)", solid.len());

    // Step 3: Honeycomb infill at two cell sizes
    for hex_size in [10.0, 20.0] {
        let cells = convert_blueprint(shapes.clone(), "honeycomb", hex_size);
        println!("Honeycomb (size {}): {} cells", hex_size, cells.len());
        if let Some(first) = cells.first() {
            println!(
                "  First cell {} at ({:.1}, {:.1})",
                first.id, first.position.x, first.position.y
            );
        }
    }

    // Step 4: Bone lattice
    let bars = convert_blueprint(shapes, "bone", DEFAULT_HEX_SIZE);
    println!("Bone: {} bars", bars.len());
    for bar in &bars {
        println!(
            "  {} at ({:.1}, {:.1}), {:.1} x {:.1}",
            bar.id, bar.position.x, bar.position.y, bar.dimensions.width, bar.dimensions.height
        );
    }

    println!("\n=== Demo Complete ===");
}
