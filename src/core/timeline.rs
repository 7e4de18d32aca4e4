//! Authored, time-based sequences compiled into a [`SceneTable`].
//!
//! A [`Timeline`] collects tweens and text cues at positions expressed in
//! seconds (absolute, relative to a label, or relative to the previous child).
//! [`Timeline::compile`] normalizes everything by the total duration so the
//! same scene mapper drives both scroll and playback.

use std::ops::Bound;

use fnv::FnvHashMap;
use smallvec::SmallVec;

use super::ease::Ease;
use super::progress::Progress;
use super::scene::{Scene, SceneMapper, SceneTable, Span, TextWindow, Track};
use super::snapshot::{Channel, OffsetUnit, VisualSnapshot};

/// Ease used when a tween does not name one (power1.out).
pub const DEFAULT_EASE: Ease = Ease::OutQuad;

// Crossfade text subsequence timings (seconds)
pub const TEXT_FADE_OUT_SEC: f32 = 1.0;
pub const TEXT_FADE_IN_SEC: f32 = 1.5;
pub const TEXT_FADE_AWAY_SEC: f32 = 1.0;

/// Where a child is placed on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Position {
    /// Absolute time in seconds.
    At(f32),
    /// Label time plus offset. Unknown labels are created at the current end.
    Label(String, f32),
    /// End of the most recently added child plus offset.
    AfterPrevious(f32),
    /// Current end of the timeline.
    End,
}

impl Position {
    pub fn label(name: &str) -> Self {
        Self::Label(name.to_string(), 0.0)
    }

    pub fn label_offset(name: &str, offset: f32) -> Self {
        Self::Label(name.to_string(), offset)
    }

    pub fn after_previous(offset: f32) -> Self {
        Self::AfterPrevious(offset)
    }
}

/// Channel targets reached over `duration` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub targets: SmallVec<[(Channel, f32); 4]>,
    pub duration: f32,
    pub ease: Ease,
}

/// Start a tween description lasting `duration` seconds.
pub fn tween(duration: f32) -> TweenSpec {
    TweenSpec {
        targets: SmallVec::new(),
        duration: duration.max(0.0),
        ease: DEFAULT_EASE,
    }
}

impl TweenSpec {
    pub fn to(mut self, channel: Channel, value: f32) -> Self {
        self.targets.push((channel, value));
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

#[derive(Clone, Debug)]
struct PlacedTween {
    start: f32,
    spec: TweenSpec,
    order: usize,
}

#[derive(Clone, Copy, Debug)]
struct TextCue {
    at: f32,
    index: usize,
    order: usize,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    initial: VisualSnapshot,
    unit: OffsetUnit,
    labels: FnvHashMap<String, f32>,
    tweens: Vec<PlacedTween>,
    cues: Vec<TextCue>,
    messages: Vec<String>,
    duration: f32,
    last_end: f32,
    next_order: usize,
}

impl Timeline {
    pub fn new(initial: VisualSnapshot, unit: OffsetUnit) -> Self {
        Self {
            initial,
            unit,
            labels: FnvHashMap::default(),
            tweens: Vec::new(),
            cues: Vec::new(),
            messages: Vec::new(),
            duration: 0.0,
            last_end: 0.0,
            next_order: 0,
        }
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn label_time(&self, name: &str) -> Option<f32> {
        self.labels.get(name).copied()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Place a label at the current end of the timeline.
    pub fn add_label(&mut self, name: &str) -> &mut Self {
        let at = self.duration;
        self.labels.insert(name.to_string(), at);
        self
    }

    fn resolve(&mut self, position: Position) -> f32 {
        let t = match position {
            Position::At(t) => t,
            Position::Label(name, offset) => {
                let end = self.duration;
                *self.labels.entry(name).or_insert(end) + offset
            }
            Position::AfterPrevious(offset) => self.last_end + offset,
            Position::End => self.duration,
        };
        t.max(0.0)
    }

    fn close_child(&mut self, end: f32) {
        self.last_end = end;
        self.duration = self.duration.max(end);
    }

    fn order(&mut self) -> usize {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    fn place(&mut self, start: f32, spec: TweenSpec) {
        let order = self.order();
        self.tweens.push(PlacedTween { start, spec, order });
    }

    /// Add a tween at `position`.
    pub fn add(&mut self, spec: TweenSpec, position: Position) -> &mut Self {
        let start = self.resolve(position);
        let end = start + spec.duration;
        self.place(start, spec);
        self.close_child(end);
        self
    }

    /// Jump channels to values at `position` without interpolation.
    pub fn set(&mut self, targets: &[(Channel, f32)], position: Position) -> &mut Self {
        let mut spec = tween(0.0);
        spec.targets.extend_from_slice(targets);
        self.add(spec, position)
    }

    /// Swap the message content at `position`.
    pub fn swap_text(&mut self, text: &str, position: Position) -> &mut Self {
        let at = self.resolve(position);
        self.push_cue(text, at);
        self.close_child(at);
        self
    }

    fn push_cue(&mut self, text: &str, at: f32) {
        let index = self.messages.len();
        self.messages.push(text.to_string());
        let order = self.order();
        self.cues.push(TextCue { at, index, order });
    }

    /// Fade the current message out, swap in `text`, fade it in, hold it for
    /// `hold` seconds and fade it away again. Placed as one child.
    pub fn crossfade_text(&mut self, text: &str, hold: f32, position: Position) -> &mut Self {
        let start = self.resolve(position);
        let hold = hold.max(0.0);

        let fade_in_at = start + TEXT_FADE_OUT_SEC;
        let hold_at = fade_in_at + TEXT_FADE_IN_SEC;
        let fade_away_at = hold_at + hold;
        let end = fade_away_at + TEXT_FADE_AWAY_SEC;

        self.place(start, tween(TEXT_FADE_OUT_SEC).to(Channel::TextOpacity, 0.0));
        self.push_cue(text, fade_in_at);
        self.place(
            fade_in_at,
            tween(TEXT_FADE_IN_SEC)
                .to(Channel::TextOpacity, 1.0)
                .ease(Ease::OutCubic),
        );
        self.place(hold_at, tween(hold).to(Channel::TextOpacity, 1.0));
        self.place(
            fade_away_at,
            tween(TEXT_FADE_AWAY_SEC)
                .to(Channel::TextOpacity, 0.0)
                .ease(Ease::InCubic),
        );
        self.close_child(end);
        self
    }

    /// Normalize the timeline into a scene table over playback progress.
    ///
    /// Each tween starts from whatever value its channels hold at its start
    /// time, evaluated over the tweens that started before it.
    pub fn compile(&self) -> SceneTable {
        let total = self.duration.max(f32::EPSILON);
        let mut table = SceneTable::new(self.initial, self.unit);
        table.messages = self.messages.clone();

        let mut tweens: Vec<&PlacedTween> = self.tweens.iter().collect();
        tweens.sort_by(|a, b| a.start.total_cmp(&b.start).then(a.order.cmp(&b.order)));

        for placed in tweens {
            let p0 = placed.start / total;
            let p1 = (placed.start + placed.spec.duration) / total;
            let at_start = table.compute_snapshot(Progress::new(p0));
            let name = match placed.spec.targets.first() {
                Some((channel, _)) => format!("{:?}@{:.2}s", channel, placed.start),
                None => format!("empty@{:.2}s", placed.start),
            };
            let mut scene = Scene::new(name, Span::half_open(p0, p1));
            for &(channel, to) in &placed.spec.targets {
                scene = scene.track(Track::eased(
                    channel,
                    at_start.get(channel),
                    to,
                    placed.spec.ease,
                ));
            }
            table.scenes.push(scene);
        }

        let mut cues = self.cues.clone();
        cues.sort_by(|a, b| a.at.total_cmp(&b.at).then(a.order.cmp(&b.order)));
        for (i, cue) in cues.iter().enumerate() {
            let start = Bound::Included(cue.at / total);
            let end = match cues.get(i + 1) {
                Some(next) => Bound::Excluded(next.at / total),
                None => Bound::Unbounded,
            };
            table.text_windows.push(TextWindow {
                span: Span::new(start, end),
                index: cue.index,
            });
        }
        table
    }
}
