use crate::ramp::Ramp;

/// Render a ramp as a `:root { ... }` CSS custom-property block.
///
/// Variables are emitted shades first (`--shade-N` darkest down to
/// `--shade-1` nearest the base), then `--base-color`, then tints
/// (`--tint-1` nearest the base up to `--tint-N` lightest). Output is
/// deterministic: the same ramp always yields byte-identical text.
pub fn format_css(ramp: &Ramp) -> String {
    let count = ramp.shades.len();
    let mut css = String::from(":root {\n");

    css.push_str("  /* Shades */\n");
    for (i, shade) in ramp.shades.iter().enumerate() {
        css.push_str(&format!(
            "  --shade-{}: {};\n",
            count - i,
            shade.color.css_value()
        ));
    }

    css.push_str("\n  /* Base Color */\n");
    css.push_str(&format!(
        "  --base-color: {};\n",
        ramp.base.oklch.css_value()
    ));

    css.push_str("\n  /* Tints */\n");
    for (i, tint) in ramp.tints.iter().enumerate() {
        css.push_str(&format!(
            "  --tint-{}: {};\n",
            i + 1,
            tint.color.css_value()
        ));
    }

    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RampError;
    use crate::color::{HslColor, OklchColor};
    use crate::ramp::{BaseColor, RampEntry};

    fn entry(l: f64, c: f64, h: Option<f64>) -> RampEntry {
        RampEntry {
            color: OklchColor::new(l, c, h),
            lightness: (l * 100.0).round() as u8,
        }
    }

    fn fixed_ramp(h: Option<f64>) -> Ramp {
        Ramp {
            base: BaseColor {
                oklch: OklchColor::new(0.5, 0.2, h),
                hex: "#000000".to_string(),
                hsl: HslColor {
                    h: 0.0,
                    s: 0.0,
                    l: 0.0,
                },
            },
            tints: vec![entry(0.75, 0.1, h)],
            shades: vec![entry(0.25, 0.1, h)],
        }
    }

    #[test]
    fn exact_block_for_single_step() {
        let css = format_css(&fixed_ramp(Some(340.0)));
        assert_eq!(
            css,
            ":root {\n\
             \x20 /* Shades */\n\
             \x20 --shade-1: oklch(0.250000 0.100000 340.0000);\n\
             \n\
             \x20 /* Base Color */\n\
             \x20 --base-color: oklch(0.500000 0.200000 340.0000);\n\
             \n\
             \x20 /* Tints */\n\
             \x20 --tint-1: oklch(0.750000 0.100000 340.0000);\n\
             }\n"
        );
    }

    #[test]
    fn achromatic_ramp_omits_hue_terms() {
        let css = format_css(&fixed_ramp(None));
        assert!(css.contains("--base-color: oklch(0.500000 0.200000);"));
        assert!(css.contains("--shade-1: oklch(0.250000 0.100000);"));
        assert!(!css.contains("undefined"));
    }

    #[test]
    fn output_is_deterministic() -> Result<(), RampError> {
        let ramp = Ramp::generate("#ad0770", 5)?;
        assert_eq!(format_css(&ramp), format_css(&ramp));
        Ok(())
    }

    #[test]
    fn variable_count_is_two_n_plus_one() -> Result<(), RampError> {
        for steps in 1..=5 {
            let ramp = Ramp::generate("#ad0770", steps)?;
            let css = format_css(&ramp);
            let vars = css.lines().filter(|l| l.contains("--")).count();
            assert_eq!(vars, 2 * steps + 1);
        }
        Ok(())
    }

    #[test]
    fn variables_read_darkest_to_lightest() -> Result<(), RampError> {
        let ramp = Ramp::generate("#ad0770", 5)?;
        let css = format_css(&ramp);

        let names: Vec<&str> = css
            .lines()
            .filter(|l| l.contains("--"))
            .map(|l| l.trim().split(':').next().unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "--shade-5",
                "--shade-4",
                "--shade-3",
                "--shade-2",
                "--shade-1",
                "--base-color",
                "--tint-1",
                "--tint-2",
                "--tint-3",
                "--tint-4",
                "--tint-5",
            ]
        );
        Ok(())
    }

    #[test]
    fn every_value_uses_oklch_notation() -> Result<(), RampError> {
        let ramp = Ramp::generate("#ad0770", 3)?;
        for line in format_css(&ramp).lines().filter(|l| l.contains("--")) {
            assert!(line.trim_end().ends_with(");"));
            assert!(line.contains(": oklch("));
        }
        Ok(())
    }
}
