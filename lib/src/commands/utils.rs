use crate::error_table::ErrorTable;
use crate::plotter::*;
use anyhow::ensure;
use std::path::PathBuf;

pub const X_LABEL : &str = "Liczba podziałów";
pub const Y_LABEL : &str = "Wartość błędu";

/// Pairs every series of `table` with a color and label, in order.
pub fn build_plot_spec(table : ErrorTable,
                       styles : &[(SeriesColor, &str)],
                       title : &str,
                       output : PathBuf) -> anyhow::Result<PlotSpec> {
    ensure!(table.series.len() == styles.len(),
        "Expected {} error series for '{}', found {}", styles.len(), title, table.series.len());

    let series = table.series.into_iter()
        .zip(styles)
        .map(|(values, (color, label))| Series { label : String::from(*label), color : *color, values })
        .collect();

    Ok(PlotSpec {
        samples : table.samples,
        series,
        x_label : String::from(X_LABEL),
        y_label : String::from(Y_LABEL),
        title : String::from(title),
        output
    })
}
