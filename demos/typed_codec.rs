//! Mapping Rust types onto DataString functions with the typed codec.
//!
//! Run with: cargo run --example typed_codec

use datastring::{from_str, to_string, DataStringEncodable, Registry, Schema};
use num_bigint::BigInt;
use std::error::Error;

#[derive(Debug, Default, Clone, PartialEq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Default, PartialEq)]
struct Stroke {
    color: Rgb,
    width: f64,
}

#[derive(Debug, Default, PartialEq)]
struct Close;

#[derive(Debug, PartialEq)]
enum Instruction {
    Stroke(Stroke),
    Close,
}

fn set_u8(slot: &mut u8, value: &BigInt) -> bool {
    u8::try_from(value).map(|v| *slot = v).is_ok()
}

impl DataStringEncodable for Rgb {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("rgb")
            .integer("r", |c| Some(BigInt::from(c.r)), |c, v| set_u8(&mut c.r, v))
            .integer("g", |c| Some(BigInt::from(c.g)), |c, v| set_u8(&mut c.g, v))
            .integer("b", |c| Some(BigInt::from(c.b)), |c, v| set_u8(&mut c.b, v))
    }
}

impl DataStringEncodable for Stroke {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("stroke")
            .nested::<Rgb>("color", |s| Some(&s.color), |s, c| s.color = c)
            .float(
                "width",
                |s| datastring::BigFloat::from_f64(s.width),
                |s, v| v.as_f64().map(|w| s.width = w).is_some(),
            )
    }
}

impl DataStringEncodable for Close {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("close")
    }
}

impl From<Stroke> for Instruction {
    fn from(value: Stroke) -> Self {
        Instruction::Stroke(value)
    }
}

impl From<Close> for Instruction {
    fn from(_: Close) -> Self {
        Instruction::Close
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let stroke = Stroke {
        color: Rgb { r: 255, g: 0, b: 0 },
        width: 2.5,
    };

    // Encode a single value to notation text.
    let text = to_string(&stroke)?;
    println!("Encoded: {}", text);

    // Decode it back.
    let back: Stroke = from_str(&text)?;
    assert_eq!(back, stroke);
    println!("✓ Round-trip successful");

    // A registry dispatches a whole document to the matching types by name.
    let mut registry = Registry::new();
    registry.register::<Stroke>()?;
    registry.register::<Close>()?;

    let instructions: Vec<Instruction> =
        registry.decode_all("stroke(rgb(0; 128; 255); 1.5); close()")?;
    println!("\nDecoded document:");
    for instruction in &instructions {
        println!("  {:?}", instruction);
    }

    Ok(())
}
