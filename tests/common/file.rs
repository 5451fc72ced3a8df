use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

/// Generate a random tree layout as relative paths with content, so the
/// same layout can be materialized into both sides of a comparison.
pub fn generate_tree_specs(files_per_dir: usize, depth: usize) -> Vec<(PathBuf, String)> {
    fn fill(specs: &mut Vec<(PathBuf, String)>, base: &Path, files_per_dir: usize, depth: usize) {
        use fake::{
            Fake,
            faker::lorem::en::{Word, Words},
        };

        for i in 0..files_per_dir {
            let file_name = format!("{}_{}.txt", Word().fake::<String>(), i);
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
            specs.push((base.join(file_name), file_content));
        }

        if depth > 0 {
            let subdir = base.join(format!("dir_{}", Word().fake::<String>()));
            fill(specs, &subdir, files_per_dir, depth - 1);
        }
    }

    let mut specs = Vec::new();
    fill(&mut specs, Path::new(""), files_per_dir, depth);
    specs
}

pub fn materialize_tree(root: &Path, specs: &[(PathBuf, String)]) {
    for (relative_path, content) in specs {
        write_file(FileSpec::new(root.join(relative_path), content.clone()));
    }
}
