#[derive(Debug, Clone)]
pub enum Progress {
    RunStart { total_generations: u64 },
    Generation { generation: u64, population: usize },
    RunFinish,

    Message(String),
}

/// Forwards simulation events to an optional observer.
///
/// The observer is borrowed for the duration of a run, so any closure or
/// plain `fn(Progress)` will do.
#[derive(Clone, Copy, Default)]
pub struct ProgressReporter<'a> {
    observer: Option<&'a (dyn Fn(Progress) + Sync)>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(observer: &'a (dyn Fn(Progress) + Sync)) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(observer) = self.observer {
            observer(event);
        }
    }
}
