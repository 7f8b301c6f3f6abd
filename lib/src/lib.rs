mod error_table;
mod integrate;
mod paths;
mod plotter;
mod storage;
mod test_function;
pub mod commands;

pub use error_table::*;
pub use integrate::*;
pub use paths::*;
pub use plotter::*;
pub use storage::*;
pub use test_function::*;
pub use commands::dump_comparison::DumpOptions;

use strum::{EnumString, IntoStaticStr};

/// What a single invocation produces.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// Chart of the PI estimation errors.
    Pi,
    /// Charts comparing the quadrature rules, one per test function.
    All,
    /// Comparison tables for every test function.
    Dump
}

pub fn run(mode : Mode,
           storage : &mut impl Storage,
           plotter : &mut impl Plotter,
           paths : &Paths,
           dump_options : &DumpOptions) -> anyhow::Result<()> {
    match mode {
        Mode::Pi => commands::plot_pi::plot_pi(storage, plotter, paths),
        Mode::All => commands::plot_comparison::plot_comparison(storage, plotter, paths),
        Mode::Dump => commands::dump_comparison::dump_comparison(storage, paths, dump_options)
    }
}
