//! Command implementations for WQP CLI.
//!
//! Each subcommand drives the same query controller the browser app uses,
//! with the chart and popup replaced by terminal output.

use clap::Subcommand;
use std::io::Write;
use wqp_controller::QueryController;
use wqp_core::{filter_menu, Axis, DataEndpoint};

pub mod output;
pub mod source;

pub use source::{Source, SourceArgs};

use output::{CapturedChart, LoggedPopup};

pub type Controller<E> = QueryController<E, CapturedChart, LoggedPopup>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every station as CSV
    Stations,

    /// Open a station and print its default pollutant, matrix and series
    Defaults {
        /// Station code
        #[arg(short, long)]
        code: String,
    },

    /// Open a station, apply filters and print the resulting series
    Series {
        #[arg(short, long)]
        code: String,

        #[arg(short, long)]
        pollutant: Option<String>,

        #[arg(short, long)]
        matrix: Option<String>,
    },

    /// Print the pollutant menu of a station
    Pollutants {
        #[arg(short, long)]
        code: String,

        /// Only pollutants measured in this matrix
        #[arg(short, long)]
        matrix: Option<String>,

        /// Text typed into the input
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Print the matrix menu of a station
    Matrices {
        #[arg(short, long)]
        code: String,

        /// Only matrices in which this pollutant was measured
        #[arg(short, long)]
        pollutant: Option<String>,

        #[arg(short, long, default_value = "")]
        query: String,
    },
}

pub async fn run(source: &SourceArgs, command: Command) -> anyhow::Result<()> {
    let endpoint = Source::open(source)?;
    let controller = QueryController::new(endpoint, CapturedChart::default(), LoggedPopup);
    let stdout = std::io::stdout();
    execute(&controller, command, stdout.lock()).await
}

/// Run `command` against `controller`, writing the result to `out`.
pub async fn execute<E: DataEndpoint, W: Write>(
    controller: &Controller<E>,
    command: Command,
    mut out: W,
) -> anyhow::Result<()> {
    match command {
        Command::Stations => {
            let stations = controller.load_stations().await;
            output::write_stations(out, &stations)
        }
        Command::Defaults { code } => {
            open_station(controller, &code).await?;
            let selection = controller.selection();
            writeln!(out, "# pollutant: {}", selection.pollutant.unwrap_or_default())?;
            writeln!(out, "# matrix: {}", selection.matrix)?;
            print_series(controller, out)
        }
        Command::Series {
            code,
            pollutant,
            matrix,
        } => {
            open_station(controller, &code).await?;
            controller.chart().clear();
            controller.apply_filter(pollutant, matrix).await;
            print_series(controller, out)
        }
        Command::Pollutants {
            code,
            matrix,
            query,
        } => print_menu(controller, Axis::Pollutant, &code, matrix.as_deref(), &query, out).await,
        Command::Matrices {
            code,
            pollutant,
            query,
        } => print_menu(controller, Axis::Matrix, &code, pollutant.as_deref(), &query, out).await,
    }
}

async fn open_station<E: DataEndpoint>(controller: &Controller<E>, code: &str) -> anyhow::Result<()> {
    controller.load_stations().await;
    if !controller.stations().iter().any(|s| s.code == code.trim()) {
        anyhow::bail!("unknown station '{}'", code);
    }
    controller.station_clicked(code).await;
    Ok(())
}

fn print_series<E: DataEndpoint, W: Write>(controller: &Controller<E>, out: W) -> anyhow::Result<()> {
    let chart = controller.chart();
    match (chart.last(), chart.failure()) {
        (Some(series), _) => output::write_series(out, &series),
        (None, Some(failure)) => anyhow::bail!("could not load series: {}", failure),
        (None, None) => anyhow::bail!("no series was rendered"),
    }
}

async fn print_menu<E: DataEndpoint, W: Write>(
    controller: &Controller<E>,
    axis: Axis,
    code: &str,
    other: Option<&str>,
    query: &str,
    out: W,
) -> anyhow::Result<()> {
    let values = controller.list_distinct_values(axis, code, other).await?;
    output::write_menu(out, &filter_menu(query, &values))
}
