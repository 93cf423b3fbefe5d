//! Print each category's tooltip, one per line.

use std::io::Write;

use anyhow::Context;
use cuv_chart::StackedBarRenderer;

use crate::options::ChartInputs;
use crate::ChartArgs;

/// Writes `label<TAB>tooltip` for every category in dataset order.
pub fn run_tooltips(args: &ChartArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let inputs = ChartInputs::from_args(args)?;
    let mut renderer = StackedBarRenderer::new(inputs.config);
    let scene = renderer
        .render(&inputs.points, &inputs.legend)
        .with_context(|| format!("Cannot chart {}", args.input))?;

    for row in &scene.rows {
        writeln!(out, "{}\t{}", row.label, row.tooltip)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tooltips_csv_with_label_key() {
        let dir = std::env::temp_dir().join(format!("cuv-cmd-tooltips-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("usage.csv");
        std::fs::write(&input, "namespace,a,b\nroot,30,10\nteam/,5,5\n").unwrap();

        let args = ChartArgs {
            input: input.to_string_lossy().into_owned(),
            series: vec![
                cuv_chart::LegendEntry::new("a", "tokens"),
                cuv_chart::LegendEntry::new("b", "entities"),
            ],
            label_key: Some("namespace".to_string()),
            ..ChartArgs::default()
        };
        let mut out = Vec::new();
        run_tooltips(&args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root\t80% of total client counts: 30 tokens, 10 entities.",
                "team/\t20% of total client counts: 5 tokens, 5 entities.",
            ]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
