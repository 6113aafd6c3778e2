// Command line front end for the MRZ correction and verification engine.
// Takes the raw text an OCR engine produced (plus optional box heights) and
// reports whether it cleans up into a valid TD3 passport record.

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use mrzpass::models::{CorrectionConfig, EngineMetadata};
use mrzpass::{MrzReader, ScanOutcome};

#[derive(Parser)]
#[command(name = "mrzpass", about = "Correct and verify a TD3 passport MRZ")]
struct Args {
    /// File holding the raw two-line MRZ text; reads stdin when omitted
    input: Option<PathBuf>,

    /// JSON array of per-character box heights from the OCR engine,
    /// 88 values in reading order
    #[arg(long)]
    box_heights: Option<PathBuf>,

    /// Skip the height-based correction pass
    #[arg(long)]
    no_height_correction: bool,

    /// Skip the line-length repair pass
    #[arg(long)]
    no_line_repair: bool,

    /// Skip the field-alphabet correction pass
    #[arg(long)]
    no_field_correction: bool,

    /// Also validate the visual/name line instead of only the data line
    #[arg(long)]
    check_first_line: bool,

    /// Emit the outcome as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let raw_text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let metadata = match &args.box_heights {
        Some(path) => EngineMetadata {
            box_heights: Some(serde_json::from_str(&fs::read_to_string(path)?)?),
        },
        None => EngineMetadata::default(),
    };

    let config = CorrectionConfig {
        use_height_correction: !args.no_height_correction,
        fix_line_lengths: !args.no_line_repair,
        apply_field_alphabets: !args.no_field_correction,
    };

    let reader = MrzReader::with_config(config, !args.check_first_line);
    let outcome = reader.process(Some(&raw_text), &metadata)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_report(&outcome);
    }

    if !outcome.verdict.is_valid {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(outcome: &ScanOutcome) {
    println!("Corrected MRZ:");
    println!("  {}", outcome.record.line1);
    println!("  {}", outcome.record.line2);

    println!(
        "\nVERIFICATION RESULT:\n  Document is {}",
        if outcome.verdict.is_valid { "VALID" } else { "INVALID" }
    );

    if !outcome.verdict.reasons.is_empty() {
        println!("\nISSUES FOUND:");
        for reason in &outcome.verdict.reasons {
            println!("  - {}", reason);
        }
    }
}
