//! Core utilities and shared types
//!
//! This module contains shared utilities used by the command-line front-end.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set to any value.
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. This allows
/// using the pager as a drop-in replacement for stdout in commands that produce
/// long output.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Decides whether output should go through the pager.
pub fn paging_enabled(stdout_is_terminal: bool, no_pager_env: bool, disabled: bool) -> bool {
    stdout_is_terminal && !no_pager_env && !disabled
}

/// Opens the writer for command output: the pager when stdout is an
/// interactive terminal, plain stdout otherwise.
///
/// The returned pager, if any, must be handed to `minus::page_all` once
/// all output has been written.
pub fn open_output(disabled: bool) -> (Box<dyn Write>, Option<Pager>) {
    let page = paging_enabled(
        io::stdout().is_terminal(),
        std::env::var_os(NO_PAGER_ENV).is_some(),
        disabled,
    );

    if page {
        let pager = Pager::new();
        (Box::new(PagerWriter::new(pager.clone())), Some(pager))
    } else {
        (Box::new(io::stdout()), None)
    }
}
