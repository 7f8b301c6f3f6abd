use crate::error_table::ComparisonRow;
use crate::integrate::*;
use crate::paths::Paths;
use crate::storage::*;
use crate::test_function::TestFunction;
use anyhow::ensure;
use getset::{Setters};
use strum::IntoEnumIterator;
use tracing::{debug, info};

#[derive(Debug, Setters)]
#[getset(set = "pub")]
pub struct DumpOptions {
    /// Subdivision counts run from 2^1 up to 2^max_exponent.
    pub max_exponent : u32
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions { max_exponent : 27 }
    }
}

/// Absolute errors of the three quadrature rules for `function` over `n` subdivisions.
pub fn compare_rules(function : TestFunction, n : u32) -> anyhow::Result<ComparisonRow> {
    let (a, b) = function.interval();
    let exact = function.exact_integral();
    let f = |x| function.eval(x);

    Ok(ComparisonRow {
        n : n as u64,
        rec : (exact - rectangle(a, b, n, f)?).abs(),
        trp : (exact - trapezoid(a, b, n, f)?).abs(),
        sim : (exact - simpson(a, b, n, f)?).abs()
    })
}

/// Writes one comparison table per test function.
pub fn dump_comparison(storage : &mut impl Storage,
                       paths : &Paths,
                       options : &DumpOptions) -> anyhow::Result<()> {
    ensure!(options.max_exponent < u32::BITS,
        "2^{} subdivisions do not fit in 32 bits", options.max_exponent);

    for function in TestFunction::iter() {
        let mut rows = Vec::new();
        for exponent in 1..=options.max_exponent {
            let n = 1u32 << exponent;
            let row = compare_rules(function, n)?;
            debug!("{} n={}: {:?}", function.id(), n, row);
            rows.push(row);
        }

        let output = paths.table(function.id());
        storage.save_comparison(&output, &rows)?;
        info!("Saved {} rows to {}", rows.len(), output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn errors_shrink_with_more_subdivisions() -> anyhow::Result<()> {
        let coarse = compare_rules(TestFunction::Sine, 8)?;
        let fine = compare_rules(TestFunction::Sine, 64)?;

        assert_eq!(fine.n, 64);
        assert!(fine.rec < coarse.rec);
        assert!(fine.trp < coarse.trp);
        assert!(fine.sim < coarse.sim);
        assert!(fine.sim < fine.rec && fine.rec < fine.trp);
        Ok(())
    }

    #[test]
    fn odd_subdivisions_are_rejected() {
        assert!(compare_rules(TestFunction::Square, 3).is_err());
    }

    #[test]
    fn dump_every_function() -> anyhow::Result<()> {
        let mut storage = MockStorage::new();
        let mut options = DumpOptions::default();
        options.set_max_exponent(4);

        for id in ["1x", "cos", "ex", "sin", "x2"].iter() {
            let output = PathBuf::from(format!("dump/{}.csv", id));
            storage.expect_save_comparison()
                .withf(move |path, rows| {
                    let samples : Vec<u64> = rows.iter().map(|r| r.n).collect();
                    path == output.as_path() && samples == vec!(2, 4, 8, 16)
                })
                .times(1)
                .return_once(|_, _| Ok(()));
        }

        dump_comparison(&mut storage, &Paths::default(), &options)
    }

    #[test]
    fn too_many_subdivisions_are_rejected() {
        let mut storage = MockStorage::new();
        storage.expect_save_comparison().never();
        let mut options = DumpOptions::default();
        options.set_max_exponent(32);

        assert!(dump_comparison(&mut storage, &Paths::default(), &options).is_err());
    }
}
