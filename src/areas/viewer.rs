use crate::areas::engine::Engine;
use crate::artifacts::comparison::filter::LineFilter;
use derive_new::new;
use std::cell::{RefCell, RefMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayOptions {
    pub line_numbers: bool,
    pub filter: LineFilter,
    pub stat: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            filter: LineFilter::all(),
            stat: false,
        }
    }
}

/// Runs comparisons and renders their results to a writer.
pub struct Viewer {
    engine: Engine,
    display: DisplayOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Viewer {
    pub fn new(engine: Engine, display: DisplayOptions, writer: Box<dyn std::io::Write>) -> Self {
        Self {
            engine,
            display,
            writer: RefCell::new(writer),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
