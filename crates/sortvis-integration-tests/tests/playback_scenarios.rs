//! End-to-end controller scenarios over both engines.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sortvis_algorithms::{AlgorithmProvider, BuiltinProvider};
use sortvis_engine::{EngineKind, StreamingConfig};
use sortvis_events::{IndexRange, SortEvent};
use sortvis_integration_tests::{controller, play_until_stopped, ScriptedProvider, SCRIPT};
use sortvis_playback::{Direction, Highlight, HighlightKind, PlaybackController, PlaybackState};

const FRAME: Duration = Duration::from_millis(16);

fn three_one_two() -> Arc<dyn AlgorithmProvider> {
    Arc::new(ScriptedProvider::new(vec![
        SortEvent::Compare { i: 0, j: 1 },
        SortEvent::Swap { i: 0, j: 1 },
        SortEvent::Compare { i: 1, j: 2 },
        SortEvent::Done,
    ]))
}

fn scripted(kind: EngineKind, provider: Arc<dyn AlgorithmProvider>, input: &[i32]) -> PlaybackController {
    controller(kind, provider, StreamingConfig::default(), SCRIPT, input)
}

#[test]
fn step_forward_twice_then_back_once() {
    for kind in [EngineKind::Materializing, EngineKind::Streaming] {
        let mut controller = scripted(kind, three_one_two(), &[3, 1, 2]);

        controller.step_forward();
        controller.step_forward();
        assert_eq!(controller.array(), &[1, 3, 2], "{kind}");
        assert_eq!(
            controller.snapshot().highlights,
            vec![Highlight { kind: HighlightKind::Swapping, indices: vec![0, 1] }],
            "{kind}"
        );

        controller.step_backward();
        assert_eq!(controller.array(), &[3, 1, 2], "{kind}");
        assert_eq!(controller.position(), 1, "{kind}");
        assert_eq!(
            controller.snapshot().highlights,
            vec![Highlight { kind: HighlightKind::Comparing, indices: vec![0, 1] }],
            "{kind}"
        );
    }
}

#[test]
fn range_pair_is_balanced() {
    let provider: Arc<dyn AlgorithmProvider> = Arc::new(ScriptedProvider::new(vec![
        SortEvent::EnterRange { lo: 1, hi: 2 },
        SortEvent::ExitRange { lo: 1, hi: 2 },
        SortEvent::Done,
    ]));
    let mut controller = scripted(EngineKind::Materializing, provider, &[5, 6, 7]);

    assert_eq!(controller.snapshot().active_range, None);
    assert_eq!(controller.visual().range_depth(), 0);

    controller.step_forward();
    assert_eq!(controller.snapshot().active_range, Some(IndexRange { lo: 1, hi: 2 }));

    controller.step_forward();
    assert_eq!(controller.snapshot().active_range, None);
    assert_eq!(controller.visual().range_depth(), 0);
}

#[test]
fn play_from_done_restarts_at_zero() {
    for kind in [EngineKind::Materializing, EngineKind::Streaming] {
        let mut controller = scripted(kind, three_one_two(), &[3, 1, 2]);
        controller.play();
        play_until_stopped(&mut controller, FRAME, 1_000);
        assert_eq!(controller.state(), PlaybackState::Done, "{kind}");
        assert_eq!(controller.total_steps(), 4, "{kind}");

        controller.play();
        assert_eq!(controller.position(), 0, "{kind}");
        assert_eq!(controller.array(), &[3, 1, 2], "{kind}");
        assert_eq!(controller.state(), PlaybackState::Playing, "{kind}");

        play_until_stopped(&mut controller, FRAME, 1_000);
        assert_eq!(controller.array(), &[1, 3, 2], "{kind}");
    }
}

#[test]
fn frame_rate_does_not_change_progress() {
    let provider: Arc<dyn AlgorithmProvider> = Arc::new(ScriptedProvider::counting(10_000));
    let mut slow = scripted(EngineKind::Materializing, Arc::clone(&provider), &[]);
    let mut fast = scripted(EngineKind::Materializing, provider, &[]);
    slow.play();
    fast.play();

    // Three seconds at 60 events/s, sliced two different ways.
    for _ in 0..30 {
        slow.tick(Duration::from_millis(100));
    }
    for _ in 0..300 {
        fast.tick(Duration::from_millis(10));
    }

    assert_eq!(slow.position(), 180);
    assert_eq!(fast.position(), 180);
}

#[test]
fn streaming_backward_play_pauses_at_window_edge() {
    let provider: Arc<dyn AlgorithmProvider> = Arc::new(ScriptedProvider::counting(10_000));
    let mut controller = controller(
        EngineKind::Streaming,
        provider,
        StreamingConfig::new(200, 3),
        SCRIPT,
        &[],
    );

    controller.set_speed(100.0);
    controller.play();
    // 6000 events/s for a little under a second
    controller.tick(Duration::from_millis(833));
    assert_eq!(controller.position(), 4_998);

    controller.play_backward();
    assert_eq!(controller.direction(), Direction::Backward);
    for _ in 0..100 {
        controller.tick(FRAME);
    }

    assert_eq!(controller.state(), PlaybackState::Paused);
    assert_eq!(controller.position(), 4_998 - 600);
}

#[test]
fn zero_sized_streaming_config_plays_to_done() {
    let config = StreamingConfig {
        batch_size: 0,
        buffer_batches: 0,
    };
    let provider: Arc<dyn AlgorithmProvider> = Arc::new(BuiltinProvider);
    let mut controller = controller(EngineKind::Streaming, provider, config, "bubble", &[3, 2, 1]);

    controller.play();
    play_until_stopped(&mut controller, FRAME, 1_000);

    assert_eq!(controller.state(), PlaybackState::Done);
    assert_eq!(controller.array(), &[1, 2, 3]);
}

#[test]
fn full_playback_round_trip_restores_input() {
    let provider: Arc<dyn AlgorithmProvider> = Arc::new(BuiltinProvider);
    let input = [8, 3, 5, 1, 9, 2, 7];
    let mut controller = controller(
        EngineKind::Materializing,
        provider,
        StreamingConfig::default(),
        "heap",
        &input,
    );
    controller.set_speed(10.0);

    controller.play();
    play_until_stopped(&mut controller, FRAME, 10_000);
    assert_eq!(controller.array(), &[1, 2, 3, 5, 7, 8, 9]);
    assert!(controller.snapshot().is_sorted);

    controller.play_backward();
    play_until_stopped(&mut controller, FRAME, 10_000);
    assert_eq!(controller.position(), 0);
    assert_eq!(controller.array(), &input);
    assert!(!controller.snapshot().is_sorted);
}

#[test]
fn renderers_and_audio_observe_playback() {
    let frames = Arc::new(Mutex::new(0usize));
    let sounds = Arc::new(Mutex::new(Vec::new()));

    let mut controller = scripted(EngineKind::Streaming, three_one_two(), &[3, 1, 2]);
    let frame_count = Arc::clone(&frames);
    controller.on_render(move |snapshot| {
        assert_eq!(snapshot.value_range.min, 1);
        assert_eq!(snapshot.value_range.max, 3);
        *frame_count.lock().unwrap() += 1;
    });
    let heard = Arc::clone(&sounds);
    let audio = controller.on_event(move |event, _array| heard.lock().unwrap().push(*event));

    controller.play();
    play_until_stopped(&mut controller, FRAME, 1_000);

    assert_eq!(sounds.lock().unwrap().len(), 4);
    // play, then one frame per applied event
    assert_eq!(*frames.lock().unwrap(), 5);

    assert!(controller.unsubscribe(audio));
    controller.reset();
    controller.step_forward();
    assert_eq!(sounds.lock().unwrap().len(), 4);
}
