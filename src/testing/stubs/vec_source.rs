use crate::core::Reading;
use crate::sources::{ReadingSource, SourceError, TimeWindow};
use std::cell::{Cell, RefCell};

/// Returns its readings unfiltered and records every window it was asked for.
pub struct VecSource {
    pub readings: Vec<Reading>,
    windows: RefCell<Vec<TimeWindow>>,
    fetches: Cell<usize>,
}

impl VecSource {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self {
            readings,
            windows: RefCell::new(Vec::new()),
            fetches: Cell::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn last_window(&self) -> Option<TimeWindow> {
        self.windows.borrow().last().copied()
    }
}

impl ReadingSource for VecSource {
    fn label(&self) -> String {
        format!("vec ({} readings)", self.readings.len())
    }

    fn fetch(&self, window: &TimeWindow) -> Result<Vec<Reading>, SourceError> {
        self.fetches.set(self.fetches.get() + 1);
        self.windows.borrow_mut().push(*window);
        Ok(self.readings.clone())
    }
}
