//! Blueprint JSON workflow demonstration for structure_lab

use structure_lab::*;

fn main() -> Result<()> {
    println!("=== structure_lab Blueprint Demo ===\n");

    // Step 1: Parse an uploaded blueprint document
    let raw = r#"{
        "shapes": [
            {
                "id": "slab",
                "type": "rectangle",
                "position": {"x": 0.0, "y": 0.0},
                "dimensions": {"width": 240.0, "height": 160.0},
                "material": "concrete"
            }
        ]
    }"#;

    let blueprint = Blueprint::from_json_str(raw)?;
    println!("Parsed blueprint with {} shapes", blueprint.shapes.len());

    // Step 2: Convert with the upload-form defaults, then with honeycomb
    let options = ConvertOptions {
        structure_type: "honeycomb".to_string(),
        ..ConvertOptions::default()
    };
    let cells = convert_with_options(blueprint.into_shapes(), &options);
    println!(
        "Converted to {} with {} cells",
        options.structure_type,
        cells.len()
    );

    // Step 3: Serialize the result back to the wire format
    let out = Blueprint { shapes: cells };
    let json = serde_json::to_string_pretty(&out).expect("blueprint serializes");
    let preview: String = json.lines().take(12).collect::<Vec<_>>().join("\n");
    println!("\nOutput document preview:\n{}\n  ...", preview);

    // A document without a shapes key is a valid, empty blueprint
    let empty = Blueprint::from_json_str("{}")?;
    println!("\nEmpty document parses to {} shapes", empty.shapes.len());

    println!("\n=== Demo Complete ===");
    Ok(())
}
