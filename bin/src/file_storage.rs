use anyhow::Context;
use errplot_lib;
use std::path::Path;

pub struct FileStorage{}

impl FileStorage {
    pub fn create() -> anyhow::Result<FileStorage> {
        Ok(FileStorage{})
    }
}

impl errplot_lib::Storage for FileStorage {
    fn load_error_table(&mut self, path : &Path, columns : &[usize]) -> anyhow::Result<errplot_lib::ErrorTable> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        errplot_lib::read_error_table(file, columns)
            .with_context(|| format!("Could not load {}", path.display()))
    }

    fn save_comparison(&mut self, path : &Path, rows : &[errplot_lib::ComparisonRow]) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;

        errplot_lib::write_comparison_rows(file, rows)
            .with_context(|| format!("Could not write {}", path.display()))
    }
}
