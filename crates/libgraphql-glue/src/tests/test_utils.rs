use std::path::Path;

/// Writes `content` to `base_dir/rel_path`, creating parent directories as
/// needed.
pub(super) fn write_file(base_dir: &Path, rel_path: &str, content: &str) {
    let file_path = base_dir.join(rel_path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(file_path, content).unwrap();
}
