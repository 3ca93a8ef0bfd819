use crate::domain::{ProjectLayout, module_name_to_path, path_to_module_name};

/// Elixir module name for `path`, empty when the path has no lib or test root.
pub fn module_name(path: &str, layout: &ProjectLayout) -> String {
    path_to_module_name(path, layout)
}

/// File path for `module`.
///
/// `root` and `extension` default to the layout's lib directory and source
/// extension.
pub fn module_path(
    module: &str,
    root: Option<&str>,
    extension: Option<&str>,
    layout: &ProjectLayout,
) -> String {
    let root = root.unwrap_or(&layout.lib);
    let extension = extension.unwrap_or(&layout.source_extension);
    module_name_to_path(module, root, extension, layout)
}
