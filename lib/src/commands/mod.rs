pub mod utils;
pub mod plot_pi;
pub mod plot_comparison;
pub mod dump_comparison;
