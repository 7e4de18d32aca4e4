//! Table-driven progress → snapshot mapping.
//!
//! A [`SceneTable`] is a list of scenes over progress space. Each scene owns a
//! [`Span`] with explicit bound inclusivity and a handful of tracks, each
//! interpolating one [`Channel`]. Evaluation per channel:
//!
//! 1. the last scene in table order whose span contains `p` interpolates;
//! 2. otherwise the scene that most recently ended before `p` holds its end value;
//! 3. otherwise the table's base snapshot applies.
//!
//! Text windows resolve the active message independently: the last window
//! containing `p` wins, and there is no hold, so gaps mean "no text".

use std::ops::{Bound, RangeBounds};

use smallvec::SmallVec;

use super::ease::{lerp, map_range, Ease};
use super::progress::Progress;
use super::snapshot::{Channel, OffsetUnit, RenderSink, VisualSnapshot};

/// Interval over progress space. Unbounded ends stand for 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: Bound<f32>,
    pub end: Bound<f32>,
}

impl Span {
    pub const fn new(start: Bound<f32>, end: Bound<f32>) -> Self {
        Self { start, end }
    }

    /// Whole progress range.
    pub const fn full() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// `[start, end]`
    pub const fn closed(start: f32, end: f32) -> Self {
        Self::new(Bound::Included(start), Bound::Included(end))
    }

    /// `[start, end)`
    pub const fn half_open(start: f32, end: f32) -> Self {
        Self::new(Bound::Included(start), Bound::Excluded(end))
    }

    /// `(start, end]`
    pub const fn left_open(start: f32, end: f32) -> Self {
        Self::new(Bound::Excluded(start), Bound::Included(end))
    }

    /// `(start, end)`
    pub const fn open(start: f32, end: f32) -> Self {
        Self::new(Bound::Excluded(start), Bound::Excluded(end))
    }

    /// `p < end`
    pub const fn below(end: f32) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(end))
    }

    /// `p > start`
    pub const fn above(start: f32) -> Self {
        Self::new(Bound::Excluded(start), Bound::Unbounded)
    }

    pub fn lo(&self) -> f32 {
        match self.start {
            Bound::Included(v) | Bound::Excluded(v) => v,
            Bound::Unbounded => 0.0,
        }
    }

    pub fn hi(&self) -> f32 {
        match self.end {
            Bound::Included(v) | Bound::Excluded(v) => v,
            Bound::Unbounded => 1.0,
        }
    }

    pub fn contains(&self, p: f32) -> bool {
        (self.start, self.end).contains(&p)
    }

    /// True once `p` has moved beyond the end of the span.
    pub fn is_past(&self, p: f32) -> bool {
        match self.end {
            Bound::Included(e) => p > e,
            Bound::Excluded(e) => p >= e,
            Bound::Unbounded => false,
        }
    }

    /// Position of `p` within the span, clamped to \[0, 1\].
    pub fn local_t(&self, p: f32) -> f32 {
        let (lo, hi) = (self.lo(), self.hi());
        if hi - lo <= f32::EPSILON {
            return 1.0;
        }
        map_range(p, lo, hi, 0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
    pub ease: Ease,
}

impl Track {
    pub fn linear(channel: Channel, from: f32, to: f32) -> Self {
        Self {
            channel,
            from,
            to,
            ease: Ease::Linear,
        }
    }

    pub fn eased(channel: Channel, from: f32, to: f32, ease: Ease) -> Self {
        Self {
            channel,
            from,
            to,
            ease,
        }
    }

    /// Constant value for as long as the owning scene is active.
    pub fn constant(channel: Channel, value: f32) -> Self {
        Self::linear(channel, value, value)
    }

    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        lerp(self.from, self.to, self.ease.apply(t))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub name: String,
    pub span: Span,
    pub tracks: SmallVec<[Track; 4]>,
}

impl Scene {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
            tracks: SmallVec::new(),
        }
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }
}

/// Selects message `index` while `span` contains the progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextWindow {
    pub span: Span,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("scene `{name}` has a non-finite bound")]
    NonFinite { name: String },
    #[error("scene `{name}` ends before it starts ({start} > {end})")]
    Reversed { name: String, start: f32, end: f32 },
    #[error("text window {window} selects message {index} but only {count} exist")]
    MissingMessage {
        window: usize,
        index: usize,
        count: usize,
    },
}

/// Anything that can turn a progress sample into a snapshot.
pub trait SceneMapper {
    fn compute_snapshot(&self, progress: Progress) -> VisualSnapshot;

    /// Compute and hand the result to `sink`.
    fn render(&self, progress: Progress, sink: &mut dyn RenderSink);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneTable {
    pub base: VisualSnapshot,
    pub unit: OffsetUnit,
    pub scenes: Vec<Scene>,
    pub text_windows: Vec<TextWindow>,
    /// Message contents addressed by text windows. Empty when the text lives
    /// in the page markup and windows only pick a group.
    pub messages: Vec<String>,
}

impl SceneTable {
    pub fn new(base: VisualSnapshot, unit: OffsetUnit) -> Self {
        Self {
            base,
            unit,
            ..Self::default()
        }
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    pub fn text_window(mut self, span: Span, index: usize) -> Self {
        self.text_windows.push(TextWindow { span, index });
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        for scene in &self.scenes {
            let (lo, hi) = (scene.span.lo(), scene.span.hi());
            if !lo.is_finite() || !hi.is_finite() {
                return Err(SceneError::NonFinite {
                    name: scene.name.clone(),
                });
            }
            if lo > hi {
                return Err(SceneError::Reversed {
                    name: scene.name.clone(),
                    start: lo,
                    end: hi,
                });
            }
        }
        if !self.messages.is_empty() {
            let count = self.messages.len();
            if let Some((window, w)) = self
                .text_windows
                .iter()
                .enumerate()
                .find(|(_, w)| w.index >= count)
            {
                return Err(SceneError::MissingMessage {
                    window,
                    index: w.index,
                    count,
                });
            }
        }
        Ok(())
    }

    /// True if any scene has a track for `channel`. Channels nothing drives
    /// stay at their base value for every progress sample.
    pub fn drives(&self, channel: Channel) -> bool {
        self.scenes
            .iter()
            .any(|scene| scene.tracks.iter().any(|t| t.channel == channel))
    }

    /// Message shown by `snapshot`, if the table carries contents.
    pub fn message_for<'a>(&'a self, snapshot: &VisualSnapshot) -> Option<&'a str> {
        snapshot
            .text
            .active
            .and_then(|i| self.messages.get(i))
            .map(String::as_str)
    }
}

impl SceneMapper for SceneTable {
    fn compute_snapshot(&self, progress: Progress) -> VisualSnapshot {
        let p = progress.value();
        let mut active: [Option<f32>; Channel::COUNT] = [None; Channel::COUNT];
        // (end of span, held value)
        let mut held: [Option<(f32, f32)>; Channel::COUNT] = [None; Channel::COUNT];

        for scene in &self.scenes {
            if scene.span.contains(p) {
                let t = scene.span.local_t(p);
                for track in &scene.tracks {
                    active[track.channel.index()] = Some(track.sample(t));
                }
            } else if scene.span.is_past(p) {
                let end = scene.span.hi();
                for track in &scene.tracks {
                    let slot = &mut held[track.channel.index()];
                    if slot.map_or(true, |(e, _)| end >= e) {
                        *slot = Some((end, track.to));
                    }
                }
            }
        }

        let mut snapshot = self.base;
        for channel in Channel::ALL {
            let i = channel.index();
            if let Some(v) = active[i].or(held[i].map(|(_, v)| v)) {
                snapshot.set(channel, v);
            }
        }
        snapshot.text.active = self
            .text_windows
            .iter()
            .rev()
            .find(|w| w.span.contains(p))
            .map(|w| w.index);
        snapshot
    }

    fn render(&self, progress: Progress, sink: &mut dyn RenderSink) {
        let snapshot = self.compute_snapshot(progress);
        sink.apply(&snapshot, &self.messages);
    }
}
