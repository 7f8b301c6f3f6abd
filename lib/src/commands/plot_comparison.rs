use crate::error_table::*;
use crate::paths::Paths;
use crate::plotter::*;
use crate::storage::*;
use crate::test_function::TestFunction;
use crate::commands::utils::*;
use strum::IntoEnumIterator;
use tracing::info;

pub const COMPARISON_STYLES : [(SeriesColor, &str); 3] = [
    (SeriesColor::Red, "Rectangle Error"),
    (SeriesColor::Green, "Trapezoid Error"),
    (SeriesColor::Blue, "Simpson's Error")
];

pub fn comparison_title(function : TestFunction) -> String {
    format!("Porównanie dokładności metod całkowania (f(x) = {})", function.notation())
}

/// Plots the errors of the three quadrature rules, one chart per test function.
pub fn plot_comparison(storage : &mut impl Storage,
                       plotter : &mut impl Plotter,
                       paths : &Paths) -> anyhow::Result<()> {
    for function in TestFunction::iter() {
        let input = paths.table(function.id());
        let table = storage.load_error_table(&input, &COMPARISON_COLUMNS)?;
        info!("Loaded {} rows from {}", table.len(), input.display());

        let spec = build_plot_spec(table, &COMPARISON_STYLES,
            &comparison_title(function), paths.error_image(function.id()))?;
        plotter.plot_lines(&spec)?;
        info!("Saved {}", spec.output.display());
    }

    Ok(())
}
