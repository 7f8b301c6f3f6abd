use crate::error_table::*;
use std::path::Path;

#[cfg(test)]
use mockall::{automock};

#[cfg_attr(test, automock)]
pub trait Storage {
    fn load_error_table(&mut self, path : &Path, columns : &[usize]) -> anyhow::Result<ErrorTable>;
    fn save_comparison(&mut self, path : &Path, rows : &[ComparisonRow]) -> anyhow::Result<()>;
}
