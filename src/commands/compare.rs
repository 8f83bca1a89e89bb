use crate::areas::viewer::Viewer;
use crate::artifacts::comparison::display_line::{DisplayLine, LineType};
use crate::artifacts::comparison::result::ComparisonResult;
use anyhow::Context;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::path::Path;

const LINE_NUMBER_WIDTH: usize = 5;

fn line_number(no: usize) -> String {
    if no == 0 {
        " ".repeat(LINE_NUMBER_WIDTH)
    } else {
        format!("{no:>LINE_NUMBER_WIDTH$}")
    }
}

fn paint(text: &str, line_type: LineType, highlighted: bool) -> ColoredString {
    let painted = match line_type {
        LineType::Added => text.green(),
        LineType::Removed => text.red(),
        LineType::Equal => text.normal(),
    };

    if highlighted {
        painted.bold().reversed()
    } else {
        painted
    }
}

impl Viewer {
    pub fn compare(&self, path1: &Path, path2: &Path) -> anyhow::Result<ComparisonResult> {
        let result = self.engine().compare_files(path1, path2).with_context(|| {
            format!("cannot compare {} and {}", path1.display(), path2.display())
        })?;

        self.print_result(&result)?;

        Ok(result)
    }

    pub fn print_result(&self, result: &ComparisonResult) -> anyhow::Result<()> {
        if result.has_changes() {
            let (label1, label2) = result.labels();
            writeln!(self.writer(), "{}", format!("--- {label1}").bold())?;
            writeln!(self.writer(), "{}", format!("+++ {label2}").bold())?;

            for line in result.filtered(self.display().filter) {
                self.print_line(line)?;
            }
        } else {
            writeln!(self.writer(), "Files are identical - no differences found.")?;
        }

        if self.display().stat {
            self.print_stats(&result.stats())?;
        }

        Ok(())
    }

    fn print_line(&self, line: &DisplayLine) -> anyhow::Result<()> {
        let mut row = String::new();

        if self.display().line_numbers {
            let numbers = format!(
                "{} {} ",
                line_number(line.line_no1),
                line_number(line.line_no2)
            );
            row.push_str(&numbers.dimmed().to_string());
        }

        row.push_str(&paint(&line.line_type.sign().to_string(), line.line_type, false).to_string());

        let segments = line.segments();
        if !segments.is_empty() {
            row.push(' ');
        }
        for (text, highlighted) in segments {
            row.push_str(&paint(text, line.line_type, highlighted).to_string());
        }

        writeln!(self.writer(), "{row}")?;

        Ok(())
    }
}
