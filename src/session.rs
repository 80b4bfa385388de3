use chrono::{DateTime, Local};

/// Successful analyses since the process started.
#[derive(Debug, Clone)]
pub struct SessionCounter {
    total: u64,
    started_at: DateTime<Local>,
}

impl SessionCounter {
    pub fn new() -> Self {
        Self {
            total: 0,
            started_at: Local::now(),
        }
    }

    pub fn increment(&mut self) -> u64 {
        self.total = self.total.saturating_add(1);
        self.total
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}

impl Default for SessionCounter {
    fn default() -> Self {
        Self::new()
    }
}
