use std::f64::consts::{E, FRAC_PI_2, LN_2, PI};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Functions whose integrals are used to compare the quadrature rules.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumString, EnumIter, IntoStaticStr)]
pub enum TestFunction {
    #[strum(serialize = "1x")]
    Reciprocal,
    #[strum(serialize = "cos")]
    Cosine,
    #[strum(serialize = "ex")]
    Exponential,
    #[strum(serialize = "sin")]
    Sine,
    #[strum(serialize = "x2")]
    Square
}

impl TestFunction {
    /// Short identifier used in the dump and image file names.
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn notation(&self) -> &'static str {
        match self {
            TestFunction::Reciprocal => "1 / x",
            TestFunction::Cosine => "cos(x)",
            TestFunction::Exponential => "e^x",
            TestFunction::Sine => "sin(x)",
            TestFunction::Square => "x^2"
        }
    }

    pub fn interval(&self) -> (f64, f64) {
        match self {
            TestFunction::Reciprocal => (1.0, 2.0),
            TestFunction::Cosine => (0.0, FRAC_PI_2),
            TestFunction::Exponential => (0.0, 1.0),
            TestFunction::Sine => (0.0, PI),
            TestFunction::Square => (-1.0, 1.0)
        }
    }

    /// Exact value of the integral over `interval()`.
    pub fn exact_integral(&self) -> f64 {
        match self {
            TestFunction::Reciprocal => LN_2,
            TestFunction::Cosine => 1.0,
            TestFunction::Exponential => E - 1.0,
            TestFunction::Sine => 2.0,
            TestFunction::Square => 2.0 / 3.0
        }
    }

    pub fn eval(&self, x : f64) -> f64 {
        match self {
            TestFunction::Reciprocal => 1.0 / x,
            TestFunction::Cosine => x.cos(),
            TestFunction::Exponential => x.exp(),
            TestFunction::Sine => x.sin(),
            TestFunction::Square => x * x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_follow_file_naming() {
        let ids : Vec<&str> = TestFunction::iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!("1x", "cos", "ex", "sin", "x2"));
    }

    #[test]
    fn parse_from_id() {
        assert_eq!("ex".parse::<TestFunction>(), Ok(TestFunction::Exponential));
        assert!("tan".parse::<TestFunction>().is_err());
    }

    #[test]
    fn exact_integral_matches_antiderivative() {
        for function in TestFunction::iter() {
            let (a, b) = function.interval();
            let expected = match function {
                TestFunction::Reciprocal => b.ln() - a.ln(),
                TestFunction::Cosine => b.sin() - a.sin(),
                TestFunction::Exponential => b.exp() - a.exp(),
                TestFunction::Sine => a.cos() - b.cos(),
                TestFunction::Square => (b.powi(3) - a.powi(3)) / 3.0
            };
            assert!((function.exact_integral() - expected).abs() < 1e-15, "{:?}", function);
        }
    }
}
