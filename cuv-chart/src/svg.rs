//! Standalone SVG output.
//!
//! Interaction targets carry `<title>` children so a browser shows the
//! tooltip text natively when the file is opened on its own.

use crate::hover::HoverState;
use crate::scene::{HitArea, Scene};

pub fn to_svg(scene: &Scene, hover: &HoverState) -> String {
    let mut svg = String::new();
    let width = scene.width;
    let height = scene.height;
    let font_size = scene.font_size;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"stacked-bar-chart\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    ));

    svg.push_str("<g class=\"bars\">");
    for bar in &scene.bars {
        svg.push_str(&format!(
            "<rect data-row=\"{}\" data-series=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" fill=\"{}\"/>",
            bar.row,
            bar.series,
            bar.rect.x,
            bar.rect.y,
            bar.rect.width,
            bar.rect.height,
            bar.radius,
            escape_xml(scene.fill_for(bar, hover.highlighted)),
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"axis\">");
    for label in &scene.axis_labels {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-size=\"{font_size}\">{}</text>",
            label.x,
            label.y,
            escape_xml(&label.text),
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"totals\">");
    for total in &scene.totals {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\" font-size=\"{font_size}\">{}</text>",
            total.x,
            total.y,
            escape_xml(&total.text),
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"row-targets\">");
    for area in &scene.row_targets {
        let title = scene.rows.get(area.row).map(|r| r.tooltip.as_str());
        svg.push_str(&target_svg(area, title));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"label-targets\">");
    for area in &scene.label_targets {
        let title = scene
            .rows
            .get(area.row)
            .filter(|r| r.truncated)
            .map(|r| r.label.as_str());
        svg.push_str(&target_svg(area, title));
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn target_svg(area: &HitArea, title: Option<&str>) -> String {
    let open = format!(
        "<rect data-row=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"transparent\"",
        area.row, area.rect.x, area.rect.y, area.rect.width, area.rect.height,
    );
    match title {
        Some(text) => format!("{open}><title>{}</title></rect>", escape_xml(text)),
        None => format!("{open}/>"),
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
