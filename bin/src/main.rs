mod file_storage;
mod plotters_plotter;

use errplot_lib;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(about = "Plots the errors of numerical integration methods on log-log axes")]
struct Opt {
    /// What to produce: `pi`, `all` or `dump`
    #[structopt(parse(try_from_str))]
    mode : errplot_lib::Mode
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mode_name : &str = opt.mode.into();
    info!("Running {} mode", mode_name);

    let mut storage = file_storage::FileStorage::create()?;
    let mut plotter = plotters_plotter::PlottersPlotter::create()?;
    errplot_lib::run(opt.mode, &mut storage, &mut plotter,
                     &errplot_lib::Paths::default(), &errplot_lib::DumpOptions::default())
}
