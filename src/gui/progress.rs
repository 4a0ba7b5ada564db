// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    what: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, what: s!() }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, what: &str) {
        self.what = s!(what);
    }
    fn log(&mut self, msg: &str) {
        if self.what.is_empty() {
            self.set_status(msg);
        } else {
            self.set_status(format!("{} ({})", msg, self.what));
        }
    }
    fn finish(&mut self) {
        self.set_status(format!("Lookup finished: {}", self.what));
    }
}
