//! Command implementations for the CUV CLI.
//!
//! Provides subcommands for rendering usage datasets to SVG and for
//! printing the tooltip each row would show.

use clap::{Args, Subcommand};

pub mod options;
pub mod render;
pub mod tooltips;

#[derive(Subcommand)]
pub enum Command {
    /// Render a dataset as a stacked bar chart SVG
    Render {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output path for the SVG file
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Print the hover tooltip for every category
    Tooltips {
        #[command(flatten)]
        chart: ChartArgs,
    },
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Dataset to chart (.json array of records or .csv with a header row)
    #[arg(short = 'i', long)]
    pub input: String,

    /// Series in stacking order, as `key=label` (repeatable)
    #[arg(short = 's', long = "series", value_parser = options::parse_series)]
    pub series: Vec<cuv_chart::LegendEntry>,

    /// Record field holding the category label
    #[arg(short = 'l', long)]
    pub label_key: Option<String>,

    /// Fixed total that tooltip percentages are measured against
    #[arg(short = 'd', long)]
    pub denominator: Option<f64>,

    /// JSON chart config file
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render { chart, output } => render::run_render(&chart, &output),
        Command::Tooltips { chart } => {
            let stdout = std::io::stdout();
            tooltips::run_tooltips(&chart, &mut stdout.lock())
        }
    }
}
