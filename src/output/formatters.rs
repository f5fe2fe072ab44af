//! Markdown formatting for the report
//!
//! Every function returns a finished chunk of text; callers append the
//! chunks to the report in document order.

use crate::models::FileAnalysis;

const FENCE: &str = "```";

/// Header of the directory tree section
pub const TREE_HEADER: &str = "## 📂 Project Directory Tree\n\n";

/// Header of the detailed analysis section
pub const ANALYSIS_HEADER: &str = "## 📄 Detailed File Analysis\n\n";

/// Separator written after every analyzed file
pub const FILE_SEPARATOR: &str = "---\n\n";

fn indent(level: usize) -> String {
    " ".repeat(4 * level)
}

/// Top-level report title
pub fn format_title(project_name: &str) -> String {
    format!("# Project Analysis for: {}\n\n", project_name)
}

/// Opening of the tree section
pub fn format_tree_open() -> String {
    format!("{}{}\n", TREE_HEADER, FENCE)
}

/// Closing of the tree section
pub fn format_tree_close() -> String {
    format!("{}\n\n", FENCE)
}

/// Tree line for a directory at `depth`
pub fn format_tree_dir(depth: usize, name: &str) -> String {
    format!("{}📂 {}/\n", indent(depth), name)
}

/// Tree line for a file inside a directory at `depth`
pub fn format_tree_file(depth: usize, name: &str) -> String {
    format!("{}📄 {}\n", indent(depth + 1), name)
}

/// Full subsection for one analyzed file, separator included
pub fn format_file_section(relative_path: &str, extension: &str, analysis: &FileAnalysis, preview_limit: usize) -> String {
    let mut output = format!("### File: `{}`\n\n", relative_path);

    let imports = analysis.import_lines();
    if imports.is_empty() {
        output.push_str("**Detected Imports:** None\n\n");
    } else {
        output.push_str("**Detected Imports:**\n");
        output.push_str(FENCE);
        output.push('\n');
        for line in &imports {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(FENCE);
        output.push_str("\n\n");
    }

    let preview = analysis.preview_lines();
    if !preview.is_empty() {
        output.push_str(&format!("**Content Preview (first {} lines):**\n", preview_limit));
        output.push_str(FENCE);
        output.push_str(&extension.replace('.', ""));
        output.push('\n');
        // Raw lines already carry their own terminators
        for line in preview {
            output.push_str(line);
        }
        output.push('\n');
        output.push_str(FENCE);
        output.push_str("\n\n");
    }

    output.push_str(FILE_SEPARATOR);
    output
}
