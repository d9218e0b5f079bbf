//! # TileCalc CLI Application
//!
//! Terminal front-end for the tile layout engine: prompts for room and
//! tile dimensions, runs the calculation, and prints the counts, a
//! breakdown of the preview layout, and the JSON record an API consumer
//! would receive.

use std::io::{self, BufRead, Write};

use tile_core::calculations::{calculate, CalculationInput, Pattern};
use tile_core::layout::{fit_canvas, generate_placement};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_pattern(prompt: &str, default: Pattern) -> Pattern {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    if input.trim().is_empty() {
        return default;
    }
    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("TileCalc CLI - Tile Layout Calculator");
    println!("=====================================");
    println!();
    println!("Patterns: grid, brick, herringbone, diagonal");
    println!();

    let room_length_m = prompt_f64("Room length (m) [5.0]: ", 5.0);
    let room_width_m = prompt_f64("Room width (m) [4.0]: ", 4.0);
    let tile_length_cm = prompt_f64("Tile length (cm) [30.0]: ", 30.0);
    let tile_width_cm = prompt_f64("Tile width (cm) [30.0]: ", 30.0);
    let spacing_mm = prompt_f64("Grout spacing (mm) [2.0]: ", 2.0);
    let pattern = prompt_pattern("Pattern [grid]: ", Pattern::Grid);

    let input = CalculationInput {
        room_length_m,
        room_width_m,
        tile_length_cm,
        tile_width_cm,
        spacing_mm,
        pattern,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  TILE CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!(
                "  Room:    {:.2} m × {:.2} m ({:.2} m²)",
                input.room_length_m, input.room_width_m, result.room_area_m2
            );
            println!(
                "  Tile:    {:.1} cm × {:.1} cm, {:.1} mm grout",
                input.tile_length_cm, input.tile_width_cm, input.spacing_mm
            );
            println!("  Pattern: {}", input.pattern.label());
            println!();
            println!("Counts:");
            println!(
                "  Layout grid:  {} × {}",
                result.tiles_along_length, result.tiles_along_width
            );
            println!("  Tiles needed: {}", result.tiles_needed);
            println!("  Whole tiles:  {}", result.whole_tiles);
            println!("  Cut tiles:    {}", result.cut_tiles);
            println!(
                "  Order (with 10% waste): {} tiles",
                result.total_tiles_with_waste
            );

            // Preview the layout the way the web view draws it
            let (canvas_w, canvas_h) =
                fit_canvas(input.room_length_m, input.room_width_m, 800.0, 600.0);
            match generate_placement(&input, canvas_w, canvas_h) {
                Ok(placement) => {
                    let counts = placement.class_counts();
                    println!();
                    println!(
                        "Preview ({} × {} px canvas, {} tiles drawn):",
                        canvas_w.round(),
                        canvas_h.round(),
                        placement.tiles.len()
                    );
                    println!("  Whole:  {}", counts.whole);
                    println!("  Edge:   {}", counts.edge);
                    println!("  Corner: {}", counts.corner);
                }
                Err(e) => eprintln!("Preview unavailable: {}", e),
            }

            println!();
            println!("═══════════════════════════════════════");

            if let Some(explanation) = &result.calculation_explanation {
                println!();
                println!("{}", explanation);
            }

            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
