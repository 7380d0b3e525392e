//! Basic DataString parsing and generation.
//!
//! Run with: cargo run --example simple

use datastring::{function, generate, main_context, parse};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Parse a document of drawing instructions.
    let text = "move(0; 0); line(100; 50); stroke(rgb(255; 0; 0); 2.5); close()";
    let document = parse(text)?;

    println!("Parsed {} items:", document.children().len());
    for item in document.children() {
        println!("  {:?}", item);
    }

    // Generate canonical text back from the tree.
    let rendered = generate(&document);
    println!("\nCanonical output:\n{}\n", rendered);
    assert_eq!(rendered, text);

    // Build a tree by hand and render it.
    let built = main_context![
        function!("move", 10, 10),
        function!("line", 20, 40),
        function!("close"),
    ];
    println!("Built by hand: {}", built);

    // Generated text always re-parses to an equal tree.
    assert_eq!(parse(&generate(&built))?, built);
    println!("✓ Round-trip successful");

    Ok(())
}
