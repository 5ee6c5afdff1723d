use clap::Args;

use spacing_core::{Rect, Side, measure};

/// Arguments for the `measure` subcommand.
#[derive(Args)]
pub struct MeasureArgs {
    /// Selected box as TOP,LEFT,WIDTH,HEIGHT
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    selected: Rect,
    /// Target box as TOP,LEFT,WIDTH,HEIGHT
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    target: Rect,
    /// Print the measurement as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &MeasureArgs) {
    let measurement = measure(&args.selected, &args.target);
    let marks = measurement.marks();

    if args.json {
        let out = serde_json::json!({
            "measurement": measurement,
            "marks": marks,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }

    let spacing = if measurement.outside {
        "external"
    } else {
        "internal"
    };
    println!("{} ({spacing} spacing)", measurement.relation);
    for side in Side::ALL {
        let label = marks
            .iter()
            .find(|m| m.side == side)
            .map_or("-", |m| m.label.as_str());
        println!(
            "  {:<6} {:>10.2}  {label}",
            side.as_str(),
            measurement.distances.get(side)
        );
    }
    println!("{} marks", marks.len());
}

/// Parses `TOP,LEFT,WIDTH,HEIGHT` into a rect.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    match parts[..] {
        [top, left, width, height] if width >= 0.0 && height >= 0.0 => {
            Ok(Rect::new(top, left, width, height))
        }
        [_, _, _, _] => Err("width and height must not be negative".into()),
        _ => Err(format!("expected TOP,LEFT,WIDTH,HEIGHT, got '{s}'")),
    }
}
