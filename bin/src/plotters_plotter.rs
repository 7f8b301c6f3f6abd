use errplot_lib;
use errplot_lib::SeriesColor;
use plotters::prelude::*;
use std::ops::Range;

const IMAGE_SIZE : (u32, u32) = (1280, 960);

pub struct PlottersPlotter{}

impl PlottersPlotter {
    pub fn create() -> anyhow::Result<PlottersPlotter> {
        Ok(PlottersPlotter{})
    }
}

impl errplot_lib::Plotter for PlottersPlotter {
    fn plot_lines(&mut self, spec : &errplot_lib::PlotSpec) -> anyhow::Result<()> {
        let (x_range, y_range) = spec.log_ranges()?;

        let root_area =
            BitMapBackend::new(&spec.output, IMAGE_SIZE).into_drawing_area();
        root_area.fill(&WHITE)?;

        let mut cc = ChartBuilder::on(&root_area)
            .caption(&spec.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(PlottersPlotter::axis(x_range).log_scale(),
                                PlottersPlotter::axis(y_range).log_scale())?;

        cc.configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0e}", v))
            .draw()?;

        for series in &spec.series {
            let color = PlottersPlotter::get_color(series.color);
            // Only the first segment carries the legend entry.
            for (i, segment) in series.positive_segments(&spec.samples).into_iter().enumerate() {
                let annotation = cc.draw_series(LineSeries::new(segment, &color))?;
                if i == 0 {
                    annotation
                        .label(series.label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
                }
            }
        }

        cc.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root_area.present()?;
        Ok(())
    }
}

impl PlottersPlotter {
    fn get_color(color : SeriesColor) -> RGBColor {
        match color {
            SeriesColor::Red => RED,
            SeriesColor::Green => RGBColor(0, 128, 0),
            SeriesColor::Blue => BLUE
        }
    }

    // A single positive value still needs a non-empty logarithmic range.
    fn axis((min, max) : (f64, f64)) -> Range<f64> {
        if min < max {
            min..max
        }
        else {
            min / 2.0..max * 2.0
        }
    }
}
