//! Turning CLI arguments into a chart config, legend and dataset.

use anyhow::Context;
use cuv_chart::{loader, ChartConfig, DataPoint, LegendEntry, PercentBase};
use log::info;

use crate::ChartArgs;

/// Parse `key=label`; a bare `key` is its own label.
pub fn parse_series(s: &str) -> Result<LegendEntry, String> {
    let (key, label) = match s.split_once('=') {
        Some((key, label)) => (key.trim(), label.trim()),
        None => (s.trim(), s.trim()),
    };
    if key.is_empty() {
        return Err(format!("series `{s}` has an empty key"));
    }
    Ok(LegendEntry::new(key, label))
}

/// Everything a subcommand needs to build a chart.
pub struct ChartInputs {
    pub config: ChartConfig,
    pub legend: Vec<LegendEntry>,
    pub points: Vec<DataPoint>,
}

impl ChartInputs {
    pub fn from_args(args: &ChartArgs) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => ChartConfig::from_path(path)
                .with_context(|| format!("Failed to load chart config {path}"))?,
            None => ChartConfig::default(),
        };
        if let Some(denominator) = args.denominator {
            config.percent_base = PercentBase::Fixed(denominator);
        }

        let legend = resolve_legend(&args.series, &config);
        info!(
            "Stacking {} series: {}",
            legend.len(),
            legend.iter().map(|e| e.key.as_str()).collect::<Vec<_>>().join(", ")
        );

        let points = loader::load_path(&args.input, args.label_key.as_deref())
            .with_context(|| format!("Failed to load dataset {}", args.input))?;

        Ok(Self {
            config,
            legend,
            points,
        })
    }
}

/// Command line series win over the config file, which wins over the
/// client usage default.
pub fn resolve_legend(series: &[LegendEntry], config: &ChartConfig) -> Vec<LegendEntry> {
    if !series.is_empty() {
        return series.to_vec();
    }
    config
        .legend
        .clone()
        .unwrap_or_else(LegendEntry::client_usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series() {
        let entry = parse_series("non_entity_tokens=non-entity tokens").unwrap();
        assert_eq!(entry.key, "non_entity_tokens");
        assert_eq!(entry.label, "non-entity tokens");

        let entry = parse_series("clients").unwrap();
        assert_eq!(entry.label, "clients");

        assert!(parse_series("=label").is_err());
    }

    #[test]
    fn test_resolve_legend_precedence() {
        let config = ChartConfig::default();
        assert_eq!(resolve_legend(&[], &config), LegendEntry::client_usage());

        let from_config = vec![LegendEntry::new("a", "A")];
        let config = ChartConfig {
            legend: Some(from_config.clone()),
            ..ChartConfig::default()
        };
        assert_eq!(resolve_legend(&[], &config), from_config);

        let from_args = vec![LegendEntry::new("b", "B")];
        assert_eq!(resolve_legend(&from_args, &config), from_args);
    }
}
