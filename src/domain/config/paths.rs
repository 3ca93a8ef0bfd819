use std::path::{Path, PathBuf};

/// Name of the per-project config file.
pub const PROJECT_CONFIG_FILE: &str = ".fawkes.json";

/// Config locations in lookup order: project, home, XDG-style home.
pub fn candidates(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(home) = home {
        paths.push(home.join(PROJECT_CONFIG_FILE));
        paths.push(home.join(".config").join("fawkes").join("config.json"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_file_comes_first() {
        let paths = candidates(Path::new("/work"), Some(Path::new("/home/dev")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/work/.fawkes.json"),
                PathBuf::from("/home/dev/.fawkes.json"),
                PathBuf::from("/home/dev/.config/fawkes/config.json"),
            ]
        );
    }

    #[test]
    fn no_home_means_project_only() {
        assert_eq!(candidates(Path::new("/work"), None), vec![PathBuf::from("/work/.fawkes.json")]);
    }
}
