use getset::{Setters};
use std::path::PathBuf;

/// Where input tables are read from and charts are written to.
#[derive(Debug, Clone, Setters)]
#[getset(set = "pub")]
pub struct Paths {
    data_dir : PathBuf,
    image_dir : PathBuf
}

impl Default for Paths {
    fn default() -> Self {
        Paths { data_dir : PathBuf::from("dump"), image_dir : PathBuf::from("img") }
    }
}

impl Paths {
    pub fn table(&self, name : &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", name))
    }

    pub fn error_image(&self, name : &str) -> PathBuf {
        self.image_dir.join(format!("{}_err.png", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locations() {
        let paths = Paths::default();
        assert_eq!(paths.table("pi_res"), PathBuf::from("dump/pi_res.csv"));
        assert_eq!(paths.error_image("sin"), PathBuf::from("img/sin_err.png"));
    }

    #[test]
    fn redirected_locations() {
        let mut paths = Paths::default();
        paths.set_data_dir(PathBuf::from("/tmp/in")).set_image_dir(PathBuf::from("/tmp/out"));
        assert_eq!(paths.table("x2"), PathBuf::from("/tmp/in/x2.csv"));
        assert_eq!(paths.error_image("pi"), PathBuf::from("/tmp/out/pi_err.png"));
    }
}
