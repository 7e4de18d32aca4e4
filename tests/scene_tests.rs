// Host-side tests for scene tables, progress and the sink boundary.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use sky_greeting::core::*;

fn table_with(scenes: Vec<Scene>) -> SceneTable {
    let mut table = SceneTable::new(VisualSnapshot::default(), OffsetUnit::Px);
    table.scenes = scenes;
    table
}

fn at(table: &SceneTable, p: f32) -> VisualSnapshot {
    table.compute_snapshot(Progress::new(p))
}

#[test]
fn span_bounds_keep_their_inclusivity() {
    assert!(Span::closed(0.2, 0.4).contains(0.2));
    assert!(Span::closed(0.2, 0.4).contains(0.4));
    assert!(Span::half_open(0.2, 0.4).contains(0.2));
    assert!(!Span::half_open(0.2, 0.4).contains(0.4));
    assert!(!Span::left_open(0.2, 0.4).contains(0.2));
    assert!(Span::left_open(0.2, 0.4).contains(0.4));
    assert!(!Span::open(0.2, 0.4).contains(0.2));
    assert!(!Span::open(0.2, 0.4).contains(0.4));
    assert!(Span::below(0.2).contains(0.0));
    assert!(!Span::below(0.2).contains(0.2));
    assert!(Span::above(0.8).contains(1.0));
    assert!(!Span::above(0.8).contains(0.8));
    assert!(Span::full().contains(0.0) && Span::full().contains(1.0));
}

#[test]
fn span_past_and_local_position() {
    assert!(Span::half_open(0.2, 0.4).is_past(0.4));
    assert!(!Span::closed(0.2, 0.4).is_past(0.4));
    assert!(Span::closed(0.2, 0.4).is_past(0.41));
    assert!(!Span::above(0.5).is_past(1.0));

    let span = Span::half_open(0.2, 0.6);
    assert!((span.local_t(0.4) - 0.5).abs() < 1e-6);
    assert_eq!(span.local_t(0.0), 0.0);
    assert_eq!(span.local_t(0.9), 1.0);
    // unbounded ends stand for the edges of progress space
    assert!((Span::below(0.5).local_t(0.25) - 0.5).abs() < 1e-6);
    assert!((Span::above(0.5).local_t(0.75) - 0.5).abs() < 1e-6);
    // degenerate spans are already complete
    assert_eq!(Span::half_open(0.3, 0.3).local_t(0.3), 1.0);
    // same clamped rescale as map_range
    for p in [0.1, 0.3, 0.45, 0.7] {
        assert_eq!(span.local_t(p), map_range(p, 0.2, 0.6, 0.0, 1.0));
    }
}

#[test]
fn later_scene_wins_while_both_are_active() {
    let table = table_with(vec![
        Scene::new("wide", Span::closed(0.0, 1.0))
            .track(Track::linear(Channel::Atmosphere, 0.0, 1.0)),
        Scene::new("narrow", Span::closed(0.4, 0.6))
            .track(Track::constant(Channel::Atmosphere, 0.25)),
    ]);
    assert!((at(&table, 0.2).atmosphere - 0.2).abs() < 1e-6);
    assert_eq!(at(&table, 0.5).atmosphere, 0.25);
    // the narrow scene ended but the wide one is still running
    assert!((at(&table, 0.8).atmosphere - 0.8).abs() < 1e-6);
}

#[test]
fn finished_scenes_hold_the_latest_end_value() {
    let table = table_with(vec![
        Scene::new("long", Span::half_open(0.0, 0.6))
            .track(Track::linear(Channel::SkyDay, 0.0, 1.0)),
        Scene::new("short", Span::half_open(0.1, 0.3))
            .track(Track::linear(Channel::SkyDay, 0.0, 0.5)),
        Scene::new("first", Span::half_open(0.0, 0.2))
            .track(Track::linear(Channel::SkyDawn, 0.0, 0.3)),
        Scene::new("second", Span::half_open(0.1, 0.4))
            .track(Track::linear(Channel::SkyDawn, 0.0, 0.7)),
    ]);
    // "short" comes later in the table but "long" ended more recently
    assert_eq!(at(&table, 0.9).sky.day, 1.0);
    assert_eq!(at(&table, 0.5).sky.dawn, 0.7);
    assert_eq!(at(&table, 0.9).sky.dawn, 0.7);
}

#[test]
fn untouched_channels_keep_base_values() {
    let mut base = VisualSnapshot::default();
    base.landscape_brightness = 0.4;
    let table = SceneTable::new(base, OffsetUnit::Vh).scene(
        Scene::new("late", Span::closed(0.5, 1.0))
            .track(Track::linear(Channel::LandscapeBrightness, 0.4, 0.9)),
    );
    assert_eq!(at(&table, 0.1).landscape_brightness, 0.4);
    assert_eq!(at(&table, 0.1).sun, base.sun);
    assert!((at(&table, 1.0).landscape_brightness - 0.9).abs() < 1e-6);
}

#[test]
fn eased_tracks_use_their_curve() {
    let table = table_with(vec![Scene::new("ease", Span::closed(0.0, 1.0)).track(
        Track::eased(Channel::SunY, 0.0, 100.0, Ease::OutQuad),
    )]);
    assert!((at(&table, 0.5).sun.offset.y - 75.0).abs() < 1e-4);
}

#[test]
fn text_windows_do_not_hold() {
    let table = table_with(vec![])
        .text_window(Span::half_open(0.0, 0.3), 0)
        .text_window(Span::half_open(0.5, 0.7), 1);
    assert_eq!(at(&table, 0.1).text.active, Some(0));
    assert_eq!(at(&table, 0.4).text.active, None);
    assert_eq!(at(&table, 0.6).text.active, Some(1));
    assert_eq!(at(&table, 0.9).text.active, None);
}

#[test]
fn validation_rejects_broken_tables() {
    let reversed = table_with(vec![Scene::new("backwards", Span::closed(0.6, 0.2))]);
    assert!(matches!(
        reversed.validate(),
        Err(SceneError::Reversed { ref name, .. }) if name == "backwards"
    ));

    let nan = table_with(vec![Scene::new("nan", Span::closed(f32::NAN, 1.0))]);
    assert!(matches!(nan.validate(), Err(SceneError::NonFinite { .. })));

    let mut missing = table_with(vec![]).text_window(Span::full(), 2);
    missing.messages = vec!["only one".to_string()];
    assert_eq!(
        missing.validate(),
        Err(SceneError::MissingMessage {
            window: 0,
            index: 2,
            count: 1
        })
    );

    assert!(scroll::scroll_table().validate().is_ok());
}

#[test]
fn progress_clamps_every_source() {
    assert_eq!(Progress::new(-1.0), Progress::START);
    assert_eq!(Progress::new(2.0), Progress::END);
    assert_eq!(Progress::new(f32::NAN), Progress::START);
    assert_eq!(Progress::from_scroll(500.0, 1000.0).value(), 0.5);
    assert_eq!(Progress::from_scroll(5000.0, 1000.0), Progress::END);
    // pages shorter than the viewport divide by at least one
    assert_eq!(Progress::from_scroll(0.5, 0.0).value(), 0.5);
    assert_eq!(Progress::from_scroll(3.0, -200.0), Progress::END);
    assert_eq!(
        Progress::from_elapsed(Duration::from_secs(5), Duration::from_secs(20)).value(),
        0.25
    );
    assert_eq!(
        Progress::from_elapsed(Duration::from_secs(1), Duration::ZERO),
        Progress::END
    );
}

#[test]
fn bus_delivers_clamped_progress_to_every_subscriber() {
    let seen_a = Rc::new(RefCell::new(Vec::new()));
    let seen_b = Rc::new(RefCell::new(Vec::new()));
    let mut bus = ProgressBus::new();
    assert!(bus.is_empty());
    {
        let seen = seen_a.clone();
        bus.subscribe(move |p| seen.borrow_mut().push(p.value()));
    }
    {
        let seen = seen_b.clone();
        bus.subscribe(move |p| seen.borrow_mut().push(p.value()));
    }
    bus.publish(0.25);
    bus.publish(1.5);
    assert_eq!(bus.len(), 2);
    assert_eq!(*seen_a.borrow(), vec![0.25, 1.0]);
    assert_eq!(*seen_b.borrow(), vec![0.25, 1.0]);
}

#[derive(Default)]
struct RecordingSink {
    applied: Vec<(VisualSnapshot, usize)>,
}

impl RenderSink for RecordingSink {
    fn apply(&mut self, snapshot: &VisualSnapshot, messages: &[String]) {
        self.applied.push((*snapshot, messages.len()));
    }
}

#[test]
fn render_hands_complete_snapshots_to_the_sink() {
    let table = scroll::scroll_table();
    let mut sink = RecordingSink::default();
    table.render(Progress::new(0.0), &mut sink);
    table.render(Progress::new(1.0), &mut sink);
    assert_eq!(sink.applied.len(), 2);
    assert_eq!(sink.applied[0].0, scroll::compute_snapshot(0.0));
    assert_eq!(sink.applied[1].0, scroll::compute_snapshot(1.0));
    assert_eq!(sink.applied[1].1, 0);
}

#[test]
fn css_formatting() {
    let t = Transform {
        offset: glam::Vec2::new(0.0, 150.0),
        scale: 0.8,
        rotation_deg: 72.0,
    };
    assert_eq!(
        t.css(OffsetUnit::Vh),
        "translate(0.00vh, 150.00vh) scale(0.8000) rotate(72.00deg)"
    );
    assert_eq!(
        Transform::default().css(OffsetUnit::Px),
        "translate(0.00px, 0.00px) scale(1.0000) rotate(0.00deg)"
    );
    assert_eq!(brightness_css(0.1), "brightness(0.100)");
}

#[test]
fn snapshot_channels_round_trip_through_get_and_set() {
    let mut s = VisualSnapshot::default();
    for (i, channel) in Channel::ALL.into_iter().enumerate() {
        s.set(channel, i as f32 + 0.5);
    }
    for (i, channel) in Channel::ALL.into_iter().enumerate() {
        assert_eq!(s.get(channel), i as f32 + 0.5, "{channel:?}");
        assert_eq!(channel.index(), i);
    }
}
