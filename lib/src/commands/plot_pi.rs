use crate::error_table::*;
use crate::paths::Paths;
use crate::plotter::*;
use crate::storage::*;
use crate::commands::utils::*;
use tracing::info;

pub const PI_TABLE : &str = "pi_res";
pub const PI_IMAGE : &str = "pi";
pub const PI_TITLE : &str = "Porównanie dokładności w wyliczaniu wartości liczby PI";

/// Plots the vector and integral errors of the PI estimations.
pub fn plot_pi(storage : &mut impl Storage,
               plotter : &mut impl Plotter,
               paths : &Paths) -> anyhow::Result<()> {
    let input = paths.table(PI_TABLE);
    let table = storage.load_error_table(&input, &PI_COLUMNS)?;
    info!("Loaded {} rows from {}", table.len(), input.display());

    let spec = build_plot_spec(table,
        &[(SeriesColor::Red, "Vector Error"), (SeriesColor::Green, "Integral Error (Simpson)")],
        PI_TITLE, paths.error_image(PI_IMAGE))?;
    plotter.plot_lines(&spec)?;
    info!("Saved {}", spec.output.display());

    Ok(())
}
