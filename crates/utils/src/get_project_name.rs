use std::path::Path;

/// Name of the root project a module belongs to: the module directory's parent directory.
#[must_use]
pub fn get_project_name(module_dir: &Path) -> Option<String> {
    let module_dir = module_dir
        .canonicalize()
        .unwrap_or_else(|_| module_dir.to_path_buf());
    module_dir
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().to_string())
}
