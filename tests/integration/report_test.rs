use pretty_assertions::assert_eq;
use project_analyzer::{
    output::{ProgressReporter, ReportWriter},
    ProjectReport, Settings,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn render(root: &Path) -> String {
    let settings = Settings::resolve(root, root).unwrap();
    let mut out = ReportWriter::new(Vec::new(), "memory");
    ProjectReport::new(settings)
        .write_to(&mut out, &ProgressReporter::silent())
        .unwrap();
    String::from_utf8(out.finish().unwrap()).unwrap()
}

fn tree_section(report: &str) -> &str {
    let start = report.find("## 📂 Project Directory Tree").unwrap();
    let end = report.find("## 📄 Detailed File Analysis").unwrap();
    &report[start..end]
}

#[test]
fn test_python_scenario() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::write(root.join("src/app.py"), "import os\nfrom sys import argv\nprint('hi')\n").unwrap();
    fs::write(root.join("node_modules/lib.js"), "module.exports = require('x');\n").unwrap();

    let expected = "# Project Analysis for: proj\n\n\
## 📂 Project Directory Tree\n\n\
```\n\
📂 proj/\n    📂 src/\n        📄 app.py\n\
```\n\n\
## 📄 Detailed File Analysis\n\n\
### File: `src/app.py`\n\n\
**Detected Imports:**\n\
```\n\
import os\n\
from sys import argv\n\
```\n\n\
**Content Preview (first 25 lines):**\n\
```py\n\
import os\n\
from sys import argv\n\
print('hi')\n\
\n\
```\n\n\
---\n\n";

    assert_eq!(render(&root), expected);
}

#[test]
fn test_excluded_directories_vanish_from_both_sections() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for excluded in ["node_modules", ".git", ".vscode", "dist", "build", "__pycache__", ".next", "public", "assets"] {
        let nested = root.join("web").join(excluded).join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("hidden.js"), "import x from 'x';\n").unwrap();
    }
    fs::write(root.join("web/visible.js"), "import y from 'y';\n").unwrap();

    let report = render(root);

    assert!(!report.contains("hidden.js"));
    assert!(!report.contains("deep"));
    assert!(!report.contains("node_modules"));
    assert!(!report.contains("__pycache__"));
    assert!(report.contains("### File: `web/visible.js`"));
}

#[test]
fn test_non_analyzable_files_only_in_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("main.go"), "import \"fmt\"\n").unwrap();
    fs::write(root.join("index.ts"), "import { a } from './a';\n").unwrap();

    let report = render(root);

    assert!(tree_section(&report).contains("📄 main.go\n"));
    assert!(tree_section(&report).contains("📄 index.ts\n"));
    assert!(!report.contains("### File: `main.go`"));
    assert!(report.contains("### File: `index.ts`"));
}

#[test]
fn test_short_file_preview_is_verbatim() {
    let dir = tempdir().unwrap();
    let content = "  body {\n\tcolor: red;  \n}";
    fs::write(dir.path().join("site.css"), content).unwrap();

    let report = render(dir.path());

    assert!(report.contains(&format!("```css\n{}\n```\n\n", content)));
    assert!(report.contains("**Detected Imports:** None\n\n"));
}

#[test]
fn test_no_imports_shows_none_marker() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), "{\"name\": \"demo\"}\n").unwrap();

    let report = render(dir.path());

    assert!(report.contains("### File: `data.json`\n\n**Detected Imports:** None\n\n**Content Preview"));
    assert!(!report.contains("**Detected Imports:**\n"));
}

#[test]
fn test_long_file_preview_has_25_lines() {
    let dir = tempdir().unwrap();
    let content: String = (1..=60).map(|i| format!("line {}\n", i)).collect();
    fs::write(dir.path().join("long.md"), &content).unwrap();

    let report = render(dir.path());

    assert!(report.contains("line 25\n\n```"));
    assert!(!report.contains("line 26"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_stop_the_run() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let root = dir.path();
    symlink(root.join("missing-target.py"), root.join("a_broken.py")).unwrap();
    fs::write(root.join("b_fine.py"), "import sys\n").unwrap();

    let report = render(root);

    let broken = report.find("### File: `a_broken.py`").unwrap();
    let fine = report.find("### File: `b_fine.py`").unwrap();
    assert!(broken < fine);

    let broken_section = &report[broken..fine];
    assert!(broken_section.contains("**Detected Imports:**\n```\nError reading file: "));
    assert!(!broken_section.contains("Content Preview"));
    assert!(broken_section.ends_with("---\n\n"));
    assert!(report[fine..].contains("import sys"));
}

#[test]
fn test_corrupt_bytes_are_tolerated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bin.js"), b"\x00\xff\xfeconst a = require('a');\n\x80\n").unwrap();

    let report = render(dir.path());

    assert!(report.contains("```\n\u{0}const a = require('a');\n```"));
}

#[test]
fn test_empty_root() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("blank");
    fs::create_dir(&root).unwrap();

    assert_eq!(
        render(&root),
        "# Project Analysis for: blank\n\n\
         ## 📂 Project Directory Tree\n\n```\n📂 blank/\n```\n\n\
         ## 📄 Detailed File Analysis\n\n"
    );
}

#[test]
fn test_runs_are_identical() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b/c")).unwrap();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("b/c/x.tsx"), "import React from 'react';\n").unwrap();
    fs::write(root.join("a/y.html"), "<html></html>\n").unwrap();
    fs::write(root.join("README.md"), "# Readme\n").unwrap();

    assert_eq!(render(root), render(root));
}

#[test]
fn test_sections_follow_walk_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(root.join("z.py"), "").unwrap();
    fs::write(root.join("a.py"), "").unwrap();
    fs::write(root.join("lib/m.py"), "").unwrap();

    let report = render(root);

    let a = report.find("### File: `a.py`").unwrap();
    let z = report.find("### File: `z.py`").unwrap();
    let m = report.find("### File: `lib/m.py`").unwrap();
    assert!(a < z && z < m);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_read_and_rendered_lossily() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    let latin1_dir = root.join(OsStr::from_bytes(b"caf\xe9"));
    fs::create_dir_all(&latin1_dir).unwrap();
    fs::write(latin1_dir.join("a.py"), "import os\n").unwrap();
    fs::write(root.join(OsStr::from_bytes(b"caf\xe9.py")), "from sys import argv\n").unwrap();

    let report = render(&root);

    assert!(tree_section(&report).contains("    📂 caf\u{FFFD}/\n        📄 a.py\n"));
    assert!(tree_section(&report).contains("    📄 caf\u{FFFD}.py\n"));
    assert!(report.contains("### File: `caf\u{FFFD}/a.py`"));
    assert!(report.contains("### File: `caf\u{FFFD}.py`"));
    assert!(report.contains("import os"));
    assert!(report.contains("from sys import argv"));
    assert!(!report.contains("Error reading file"));
}
