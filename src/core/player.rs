use std::time::Duration;

use instant::Instant;

use super::progress::Progress;
use super::scene::{SceneMapper, SceneTable};
use super::snapshot::{RenderSink, VisualSnapshot};
use super::timeline::Timeline;

/// Plays a compiled timeline against wall-clock time.
///
/// Starting is one-shot: later calls to [`SequencePlayer::start`] are ignored.
/// There is no pause, resume or seek.
#[derive(Clone, Debug)]
pub struct SequencePlayer {
    table: SceneTable,
    total: Duration,
    started_at: Option<Instant>,
}

impl SequencePlayer {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            table: timeline.compile(),
            total: Duration::from_secs_f32(timeline.duration().max(0.0)),
            started_at: None,
        }
    }

    pub fn table(&self) -> &SceneTable {
        &self.table
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Returns false if the player was already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|t0| if now > t0 { now - t0 } else { Duration::ZERO })
            .unwrap_or_default()
    }

    /// Playback progress; the start of the sequence until started.
    pub fn progress_at(&self, now: Instant) -> Progress {
        if self.started_at.is_none() {
            return Progress::START;
        }
        Progress::from_elapsed(self.elapsed(now), self.total)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.is_started() && self.progress_at(now).is_complete()
    }

    pub fn sample(&self, now: Instant) -> VisualSnapshot {
        self.table.compute_snapshot(self.progress_at(now))
    }

    pub fn render(&self, now: Instant, sink: &mut dyn RenderSink) {
        self.table.render(self.progress_at(now), sink);
    }
}
