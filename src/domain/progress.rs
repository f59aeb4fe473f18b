use log::info;

/// Track progress while resolving a batch of tournaments
pub struct ProcessProgress {
    total: usize,
    resolved: usize,
    skipped: usize,
}

impl ProcessProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            resolved: 0,
            skipped: 0,
        }
    }

    pub fn increment_resolved(&mut self) {
        self.resolved += 1;
        self.log_progress();
    }

    pub fn increment_skipped(&mut self) {
        self.skipped += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.resolved + self.skipped
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} ({} resolved, {} skipped)",
                current, self.total, self.resolved, self.skipped
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
