use crate::areas::viewer::Viewer;
use crate::artifacts::comparison::result::Stats;
use colored::Colorize;
use std::io::Write;

impl Viewer {
    pub fn print_stats(&self, stats: &Stats) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} additions(+), {} deletions(-), {} unchanged",
            stats.added.to_string().green(),
            stats.removed.to_string().red(),
            stats.unchanged
        )?;

        Ok(())
    }
}
