use std::time::Duration;

/// Normalized position along a sequence, always within \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamp `value` into \[0, 1\]. NaN maps to the start.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// `offset / max(1, scrollable)`, where `scrollable` is the document
    /// height minus the viewport height.
    pub fn from_scroll(offset: f64, scrollable: f64) -> Self {
        Self::new((offset / scrollable.max(1.0)) as f32)
    }

    /// Elapsed time over total duration. A zero-length sequence is complete.
    pub fn from_elapsed(elapsed: Duration, total: Duration) -> Self {
        if total.is_zero() {
            return Self::END;
        }
        Self::new((elapsed.as_secs_f64() / total.as_secs_f64()) as f32)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}

impl From<f32> for Progress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Fan-out of progress samples to registered callbacks.
///
/// Hosts publish whatever their event source produced (scroll, resize,
/// animation frames); subscribers never see the event mechanism itself.
#[derive(Default)]
pub struct ProgressBus {
    subscribers: Vec<Box<dyn FnMut(Progress)>>,
}

impl ProgressBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(Progress) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn publish(&mut self, progress: impl Into<Progress>) {
        let progress = progress.into();
        for callback in self.subscribers.iter_mut() {
            callback(progress);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
