//! Write a dataset to an SVG file.

use anyhow::Context;
use cuv_chart::StackedBarRenderer;
use log::info;

use crate::options::ChartInputs;
use crate::ChartArgs;

pub fn run_render(args: &ChartArgs, output: &str) -> anyhow::Result<()> {
    let inputs = ChartInputs::from_args(args)?;
    let mut renderer = StackedBarRenderer::new(inputs.config);
    let scene = renderer
        .render(&inputs.points, &inputs.legend)
        .with_context(|| format!("Cannot chart {}", args.input))?;
    info!(
        "Rendering {} categories ({} bars) to {}",
        scene.rows.len(),
        scene.bars.len(),
        output
    );

    let svg = renderer
        .to_svg()
        .context("Renderer produced no scene")?;
    std::fs::write(output, svg).with_context(|| format!("Failed to write {output}"))?;

    info!("Render complete. Output: {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_render_writes_svg() {
        let dir = std::env::temp_dir().join(format!("cuv-cmd-render-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("usage.json");
        std::fs::write(
            &input,
            r#"[{"label": "root", "total": 100, "non_entity_tokens": 60, "distinct_entities": 40}]"#,
        )
        .unwrap();
        let output = dir.join("usage.svg");

        let args = ChartArgs {
            input: input.to_string_lossy().into_owned(),
            denominator: Some(19000.0),
            ..ChartArgs::default()
        };
        run_render(&args, &output.to_string_lossy()).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("1% of total client counts: 60 non-entity tokens, 40 unique entities."));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_render_reports_invalid_data() {
        let dir = std::env::temp_dir().join(format!("cuv-cmd-render-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("usage.json");
        std::fs::write(&input, r#"[{"label": "root", "non_entity_tokens": 60}]"#).unwrap();
        let output = dir.join("usage.svg");

        let args = ChartArgs {
            input: input.to_string_lossy().into_owned(),
            ..ChartArgs::default()
        };
        let err = run_render(&args, &output.to_string_lossy()).unwrap_err();
        assert!(format!("{err:#}").contains("distinct_entities"));
        assert!(!output.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
