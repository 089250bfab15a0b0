use anyhow::Context;
use std::env;
use std::fs;

use ramp_core::{MAX_STEPS, MIN_STEPS, Ramp, format_css};

fn help_text() -> String {
    format!(
        r##"OKLCH Ramp CLI v{}

            Commands:
            css <base_color> [steps]
            list <base_color> [steps]
            json <base_color> [steps]
            export <base_color> <file.css> [steps]

            <base_color> accepts hex, rgb(...), hsl(...), oklch(...) or a named color.
            [steps] is the number of tints and of shades, {MIN_STEPS}..{MAX_STEPS} (default {default}).

            Examples:
            cargo run -p ramp_cli -- css "#ad0770" 5
            cargo run -p ramp_cli -- list "rgb(173, 7, 112)"
            cargo run -p ramp_cli -- export "#ad0770" palette.css 3
        "##,
        ramp_core::version(),
        default = ramp_core::DEFAULT_STEPS,
    )
}

fn print_help() {
    println!("{}", help_text());
}

fn parse_steps(arg: Option<&String>) -> anyhow::Result<usize> {
    let steps = match arg {
        Some(s) => s.parse::<usize>().context("steps must be a number")?,
        None => ramp_core::DEFAULT_STEPS,
    };
    anyhow::ensure!(
        (MIN_STEPS..=MAX_STEPS).contains(&steps),
        "steps must be between {MIN_STEPS} and {MAX_STEPS}, got {steps}"
    );
    Ok(steps)
}

fn generate(args: &[String], steps_at: usize) -> anyhow::Result<Ramp> {
    let color = args.get(2).context("missing <base_color>")?;
    let steps = parse_steps(args.get(steps_at))?;
    let ramp = Ramp::generate(color, steps)
        .with_context(|| format!("cannot build a ramp from '{color}'"))?;
    Ok(ramp)
}

fn print_list(ramp: &Ramp) {
    println!(
        "Base: {} | {} | {}",
        ramp.base.hex,
        ramp.base.oklch.css_value(),
        ramp.base.hsl.css_value()
    );
    println!("Swatches (dark to light):");

    let count = ramp.steps();
    for (i, entry) in ramp.shades.iter().enumerate() {
        println!(
            "  {:<12} | L {:>3}% | {}",
            format!("--shade-{}", count - i),
            entry.lightness,
            entry.color.css_value()
        );
    }
    println!(
        "  {:<12} | L {:>3}% | {}",
        "--base-color",
        (ramp.base.oklch.l * 100.0).round() as u8,
        ramp.base.oklch.css_value()
    );
    for (i, entry) in ramp.tints.iter().enumerate() {
        println!(
            "  {:<12} | L {:>3}% | {}",
            format!("--tint-{}", i + 1),
            entry.lightness,
            entry.color.css_value()
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "css" => {
            let ramp = generate(&args, 3)?;
            print!("{}", format_css(&ramp));
        }
        "list" => {
            let ramp = generate(&args, 3)?;
            print_list(&ramp);
        }
        "json" => {
            let ramp = generate(&args, 3)?;
            println!("{}", ramp.to_json()?);
        }
        "export" => {
            let path = args.get(3).context("missing <file.css>")?;
            let ramp = generate(&args, 4)?;
            fs::write(path, format_css(&ramp))
                .with_context(|| format!("write css file '{path}'"))?;
            println!(
                "Wrote {} variables ({} shades + base + {} tints) to {}",
                2 * ramp.steps() + 1,
                ramp.steps(),
                ramp.steps(),
                path
            );
        }
        _ => print_help(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_keeps_quoted_hex_examples() {
        let help = help_text();
        assert!(help.contains(r##"css "#ad0770" 5"##));
        assert!(help.contains(r##"export "#ad0770" palette.css 3"##));
        assert!(help.contains(ramp_core::version()));
    }

    #[test]
    fn steps_bounds_are_enforced() {
        assert!(parse_steps(Some(&"3".to_string())).is_ok());
        assert!(parse_steps(None).is_ok());
        assert!(parse_steps(Some(&"0".to_string())).is_err());
        assert!(parse_steps(Some(&"6".to_string())).is_err());
        assert!(parse_steps(Some(&"many".to_string())).is_err());
    }
}
