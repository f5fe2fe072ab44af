//! Directory tree section

use std::io::Write;

use tracing::info;

use crate::config::Settings;
use crate::core::walker::DirWalker;
use crate::error::Result;
use crate::output::formatters::{format_tree_close, format_tree_dir, format_tree_file, format_tree_open};
use crate::output::ReportWriter;

/// Writes the indented directory tree
pub struct TreeBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Append the tree section. Walk errors abort the run.
    pub fn write_tree<W: Write>(&self, out: &mut ReportWriter<W>) -> Result<()> {
        info!(root = %self.settings.scan_root.display(), "writing directory tree");

        out.write_str(&format_tree_open())?;

        let walker = DirWalker::new(&self.settings.scan_root, &self.settings.rules)
            .skipping_file(&self.settings.output_file);
        for listing in walker.walk() {
            let listing = listing?;
            out.write_str(&format_tree_dir(listing.depth, &listing.name()))?;
            for file in &listing.files {
                out.write_str(&format_tree_file(listing.depth, &file.to_string_lossy()))?;
            }
        }

        out.write_str(&format_tree_close())
    }
}
