use crate::domain::conversion::FileName;
use crate::domain::layout::{AppIdentity, KNOWN_SUFFIXES, ProjectLayout};
use crate::domain::naming::to_pascal_case;

const DEFAULT_APP: &str = "App";
const TEST_SUFFIX: &str = "_test";

/// Which root a path sits under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Root {
    Lib,
    Test,
}

/// Module name pieces read off a resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ModuleParts {
    pub root: Option<Root>,
    /// PascalCase application name without `Web`.
    pub app: String,
    /// PascalCase namespace words between the app and the file.
    pub namespace: Vec<String>,
    /// PascalCase file name with `_test` and one kind suffix removed.
    pub name: String,
    /// Snake-case stem with `_test` removed, kind suffix kept.
    pub stem: String,
    /// Raw directory segments of the path.
    pub directories: Vec<String>,
    pub extension: String,
}

impl ModuleParts {
    pub fn from_path(path: &str, layout: &ProjectLayout, app_name: Option<&str>) -> Self {
        let normalized = path.strip_prefix("./").unwrap_or(path);
        let segments: Vec<&str> = normalized.split('/').collect();
        let last = segments.len() - 1;
        let file = FileName::parse(segments[last]);

        let root_index =
            segments[..last].iter().position(|s| *s == layout.lib || *s == layout.test);
        let root = root_index.map(|index| {
            if segments[index] == layout.lib { Root::Lib } else { Root::Test }
        });

        let app_index = root_index
            .map(|index| if segments[index + 1] == layout.features { index + 2 } else { index + 1 })
            .filter(|&index| index < last);
        let app = match app_index {
            Some(index) => {
                to_pascal_case(&AppIdentity::from_segment(segments[index], &layout.web_suffix).base_name)
            }
            None => app_name.map(to_pascal_case).unwrap_or_else(|| DEFAULT_APP.to_string()),
        };

        let first_namespace = app_index.or(root_index).map_or(0, |index| index + 1);
        let namespace = segments[first_namespace.min(last)..last]
            .iter()
            .filter(|s| !layout.is_special_directory(s) && **s != layout.features)
            .map(|s| to_pascal_case(s))
            .collect();

        let stem = file.stem.strip_suffix(TEST_SUFFIX).unwrap_or(&file.stem).to_string();
        let base = KNOWN_SUFFIXES
            .iter()
            .find_map(|suffix| stem.strip_suffix(suffix))
            .unwrap_or(&stem);

        Self {
            root,
            app,
            namespace,
            name: to_pascal_case(base),
            stem: stem.clone(),
            directories: segments[..last].iter().map(|s| s.to_string()).collect(),
            extension: file.extension,
        }
    }

    /// Namespace words after `lib/mix/tasks`, when the path has that prefix.
    pub fn task_namespace(path: &str, layout: &ProjectLayout) -> Option<Vec<String>> {
        let normalized = path.strip_prefix("./").unwrap_or(path);
        let segments: Vec<&str> = normalized.split('/').collect();
        let last = segments.len().checked_sub(1)?;
        let start = segments[..last]
            .windows(3)
            .position(|w| w[0] == layout.lib && w[1] == "mix" && w[2] == "tasks")?;
        Some(segments[start + 3..last].iter().map(|s| to_pascal_case(s)).collect())
    }

    pub fn has_directory(&self, name: &str) -> bool {
        self.directories.iter().any(|directory| directory == name)
    }

    /// `<Prefix>.<Ns>.<Name><suffix>`.
    pub fn module(&self, prefix: &str, suffix: &str) -> String {
        let mut words = vec![prefix.to_string()];
        words.extend(self.namespace.iter().cloned());
        words.push(format!("{}{}", self.name, suffix));
        words.join(".")
    }

    pub fn web(&self) -> String {
        format!("{}Web", self.app)
    }
}
