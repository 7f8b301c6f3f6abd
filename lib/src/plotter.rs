use anyhow::{anyhow, ensure};
use std::path::PathBuf;

#[cfg(test)]
use mockall::{automock};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SeriesColor {
    Red,
    Green,
    Blue
}

/// One labelled line of a chart.
#[derive(Debug, PartialEq, Clone)]
pub struct Series {
    pub label : String,
    pub color : SeriesColor,
    pub values : Vec<f64>
}

/// Everything needed to render and save one log-log chart.
#[derive(Debug, PartialEq, Clone)]
pub struct PlotSpec {
    pub samples : Vec<u64>,
    pub series : Vec<Series>,
    pub x_label : String,
    pub y_label : String,
    pub title : String,
    pub output : PathBuf
}

impl PlotSpec {
    /// Checks that every series lines up with the samples and that something can be drawn
    /// on logarithmic axes. Returns the ranges of the positive x and y values.
    pub fn log_ranges(&self) -> anyhow::Result<((f64, f64), (f64, f64))> {
        ensure!(!self.series.is_empty(), "Plot '{}' has no series", self.title);
        for s in &self.series {
            ensure!(s.values.len() == self.samples.len(),
                "Series '{}' has {} values but there are {} samples", s.label, s.values.len(), self.samples.len());
        }

        let mut x_range = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y_range = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.series {
            for (x, y) in s.positive_points(&self.samples) {
                x_range = (x_range.0.min(x), x_range.1.max(x));
                y_range = (y_range.0.min(y), y_range.1.max(y));
            }
        }

        if !x_range.0.is_finite() || !y_range.0.is_finite() {
            return Err(anyhow!("Plot '{}' has no positive values to draw on logarithmic axes", self.title));
        }

        Ok((x_range, y_range))
    }
}

impl Series {
    /// Points that can be placed on logarithmic axes, in sample order.
    pub fn positive_points<'a>(&'a self, samples : &'a [u64]) -> impl Iterator<Item = (f64, f64)> + 'a {
        samples.iter()
            .zip(&self.values)
            .map(|(&x, &y)| (x as f64, y))
            .filter(|&(x, y)| is_drawable(x, y))
    }

    /// Runs of consecutive drawable points. A point that cannot be placed on logarithmic axes
    /// ends the current run, so the line shows a gap there.
    pub fn positive_segments(&self, samples : &[u64]) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (&x, &y) in samples.iter().zip(&self.values) {
            let x = x as f64;
            if is_drawable(x, y) {
                current.push((x, y));
            }
            else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

fn is_drawable(x : f64, y : f64) -> bool {
    x > 0.0 && y > 0.0 && y.is_finite()
}

#[cfg_attr(test, automock)]
pub trait Plotter {
    fn plot_lines(&mut self, spec : &PlotSpec) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_spec(samples : Vec<u64>, values : Vec<Vec<f64>>) -> PlotSpec {
        let series = values.into_iter()
            .enumerate()
            .map(|(i, values)| Series { label : format!("s{}", i), color : SeriesColor::Red, values })
            .collect();
        PlotSpec { samples, series, x_label : String::from("x"), y_label : String::from("y"),
            title : String::from("title"), output : PathBuf::from("out.png") }
    }

    #[test]
    fn ranges_cover_all_series() -> anyhow::Result<()> {
        let spec = build_spec(vec!(2, 4, 8), vec!(vec!(0.5, 0.25, 0.125), vec!(1e-3, 1e-6, 1e-9)));

        let (x_range, y_range) = spec.log_ranges()?;

        assert_eq!(x_range, (2.0, 8.0));
        assert_eq!(y_range, (1e-9, 0.5));
        Ok(())
    }

    #[test]
    fn ranges_skip_non_positive_values() -> anyhow::Result<()> {
        let spec = build_spec(vec!(0, 2, 4, 8), vec!(vec!(10.0, 0.5, 0.0, -1.0)));

        let (x_range, y_range) = spec.log_ranges()?;

        assert_eq!(x_range, (2.0, 2.0));
        assert_eq!(y_range, (0.5, 0.5));
        Ok(())
    }

    #[test]
    fn segments_break_at_non_positive_values() {
        let series = Series { label : String::from("Simpson's Error"), color : SeriesColor::Blue,
            values : vec!(1e-3, 0.0, 0.0, 2e-8, 1e-9, -1.0, 5e-10) };

        let segments = series.positive_segments(&[2, 4, 8, 16, 32, 64, 128]);

        assert_eq!(segments, vec!(
            vec!((2.0, 1e-3)),
            vec!((16.0, 2e-8), (32.0, 1e-9)),
            vec!((128.0, 5e-10))));
    }

    #[test]
    fn segments_of_fully_positive_series() {
        let series = Series { label : String::from("a"), color : SeriesColor::Red, values : vec!(0.5, 0.25) };

        assert_eq!(series.positive_segments(&[1, 2]), vec!(vec!((1.0, 0.5), (2.0, 0.25))));
        assert!(Series { values : vec!(0.0, 0.0), ..series }.positive_segments(&[1, 2]).is_empty());
    }

    #[test]
    fn mismatched_series_length_is_rejected() {
        let spec = build_spec(vec!(2, 4, 8), vec!(vec!(0.5, 0.25, 0.125), vec!(1e-3, 1e-6)));

        let message = spec.log_ranges().unwrap_err().to_string();

        assert!(message.contains("'s1' has 2 values but there are 3 samples"), "unexpected message: {}", message);
    }

    #[test]
    fn missing_series_are_rejected() {
        let spec = build_spec(vec!(2, 4), vec!());

        assert!(spec.log_ranges().is_err());
    }

    #[test]
    fn only_non_positive_values_are_rejected() {
        let spec = build_spec(vec!(2, 4), vec!(vec!(0.0, -2.0)));

        assert!(spec.log_ranges().is_err());
    }
}
