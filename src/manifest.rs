//! Barrel export manifests
//!
//! `index.ts` files are append-only: a line is added only when the current
//! text does not already contain it.

use std::path::{Path, PathBuf};

use crate::error::LuminResult;
use crate::fs::FileSystem;
use crate::models::CanonicalName;

/// Export line for the root index (client components)
pub fn csr_export_line(name: &CanonicalName) -> String {
    format!("export * from \"./csr/{}\";\n", name)
}

/// Export line for the server-render index
pub fn ssr_export_line(name: &CanonicalName) -> String {
    format!("export * from \"./{}\";\n", name)
}

/// Append-only text manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportManifest {
    path: PathBuf,
}

impl ExportManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines of `lines` that the manifest would gain
    pub fn pending<'a>(
        &self,
        fs: &dyn FileSystem,
        lines: &'a [String],
    ) -> LuminResult<Vec<&'a str>> {
        let current = self.read(fs)?;
        Ok(missing_lines(&current, lines))
    }

    /// Append every line not already present; returns how many were added
    ///
    /// A missing manifest is created. Nothing is written when all lines are
    /// already present.
    pub fn ensure_lines(&self, fs: &dyn FileSystem, lines: &[String]) -> LuminResult<usize> {
        let mut text = self.read(fs)?;
        let mut appended = 0;

        for line in lines {
            if text.contains(line.as_str()) {
                continue;
            }
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(line);
            appended += 1;
        }

        if appended > 0 {
            fs.write_atomic(&self.path, &text)?;
        }
        Ok(appended)
    }

    fn read(&self, fs: &dyn FileSystem) -> LuminResult<String> {
        if fs.exists(&self.path) {
            fs.read_to_string(&self.path)
        } else {
            Ok(String::new())
        }
    }
}

fn missing_lines<'a>(current: &str, lines: &'a [String]) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for line in lines {
        if !current.contains(line.as_str()) && !seen.contains(&line.as_str()) {
            seen.push(line.as_str());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::naming::canonicalize;

    #[test]
    fn test_export_line_formats() {
        let name = canonicalize("lm-3-squares");
        assert_eq!(
            csr_export_line(&name),
            "export * from \"./csr/ThreeSquares\";\n"
        );
        assert_eq!(ssr_export_line(&name), "export * from \"./ThreeSquares\";\n");
    }

    #[test]
    fn test_ensure_lines_twice_yields_one_line() {
        let fs =
            MockFileSystem::new().with_file("/lib/src/index.ts", "export * from \"./lib\";\n");
        let manifest = ExportManifest::new("/lib/src/index.ts");
        let lines = vec![csr_export_line(&canonicalize("star"))];

        assert_eq!(manifest.ensure_lines(&fs, &lines).unwrap(), 1);
        assert_eq!(manifest.ensure_lines(&fs, &lines).unwrap(), 0);

        let text = fs.get("/lib/src/index.ts").unwrap();
        assert_eq!(text.matches("./csr/Star\"").count(), 1);
        assert_eq!(
            text,
            "export * from \"./lib\";\nexport * from \"./csr/Star\";\n"
        );
    }

    #[test]
    fn test_ensure_lines_creates_missing_manifest() {
        let fs = MockFileSystem::new();
        let manifest = ExportManifest::new("/lib/src/ssr/index.ts");
        let lines = vec![
            ssr_export_line(&canonicalize("moon")),
            ssr_export_line(&canonicalize("sun")),
        ];

        assert_eq!(manifest.ensure_lines(&fs, &lines).unwrap(), 2);
        assert_eq!(
            fs.get("/lib/src/ssr/index.ts").unwrap(),
            "export * from \"./Moon\";\nexport * from \"./Sun\";\n"
        );
    }

    #[test]
    fn test_ensure_lines_terminates_unfinished_last_line() {
        let fs = MockFileSystem::new().with_file("/index.ts", "export * from \"./lib\";");
        let manifest = ExportManifest::new("/index.ts");
        manifest
            .ensure_lines(&fs, &[csr_export_line(&canonicalize("star"))])
            .unwrap();
        assert_eq!(
            fs.get("/index.ts").unwrap(),
            "export * from \"./lib\";\nexport * from \"./csr/Star\";\n"
        );
    }

    #[test]
    fn test_nothing_written_when_all_present() {
        let original = "export * from \"./csr/Star\";\n";
        let fs = MockFileSystem::new().with_file("/index.ts", original);
        let manifest = ExportManifest::new("/index.ts");

        let lines = [csr_export_line(&canonicalize("star"))];
        let pending = manifest.pending(&fs, &lines).unwrap();
        assert!(pending.is_empty());
        assert_eq!(manifest.ensure_lines(&fs, &lines).unwrap(), 0);
        assert_eq!(fs.get("/index.ts").unwrap(), original);
    }

    #[test]
    fn test_pending_dedups_requested_lines() {
        let fs = MockFileSystem::new();
        let manifest = ExportManifest::new("/index.ts");
        let line = csr_export_line(&canonicalize("star"));
        let lines = [line.clone(), line];
        let pending = manifest.pending(&fs, &lines).unwrap();
        assert_eq!(pending.len(), 1);
    }
}
