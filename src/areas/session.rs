use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::num::NonZeroUsize;

/// Options of one comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CompareConfig {
    /// Print entry deltas on the console
    pub show_diff: bool,
    /// Archive pairs compared at once in directory mode
    pub jobs: NonZeroUsize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            show_diff: false,
            jobs: NonZeroUsize::MIN,
        }
    }
}

/// Console-facing state shared by the commands of one run
pub struct Session {
    config: CompareConfig,
    writer: RefCell<Box<dyn Write>>,
}

impl Session {
    pub fn new(config: CompareConfig, writer: Box<dyn Write>) -> Self {
        Session {
            config,
            writer: RefCell::new(writer),
        }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }
}
