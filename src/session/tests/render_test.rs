use super::fixture::{clip, playback, ready};
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::error::FailureKind;
use crate::frame_classifier::label::ShapeLabel;
use crate::session::core::{init, ModelState, PlaybackState, State};
use crate::session::render::Render;
use std::sync::{Arc, Mutex};

fn render(state: &State) -> DeviceDisplayFake {
    let display = DeviceDisplayFake::new();
    Render::new(Arc::new(Mutex::new(display.clone())))
        .render(state)
        .unwrap();
    display
}

#[test]
fn test_render_initial_state() {
    let (state, _) = init();
    let display = render(&state);

    assert_eq!(display.line(0), "Select a video");
    assert_eq!(display.line(1), "Model loading...");
    assert_eq!(display.frame(), None);
}

#[test]
fn test_render_analyzing() {
    let display = render(&ready(PlaybackState::Decoding {
        load_id: 1,
        video_index: 0,
    }));
    assert_eq!(display.line(0), "Analyzing...");

    let display = render(&ready(PlaybackState::Inferring {
        load_id: 1,
        video_index: 0,
        clip: clip(150),
        ground_truth: None,
    }));
    assert_eq!(display.line(0), "Analyzing...");
    assert_eq!(display.line(1), "");
}

#[test]
fn test_render_playing_before_first_tick() {
    let display = render(&ready(PlaybackState::Playing(playback(1, 150))));

    assert_eq!(display.line(0), "Analyzing...");
    assert_eq!(display.line(1), "");
    assert!(display.frame().is_some());
}

#[test]
fn test_render_playing_label_and_ground_truth() {
    let mut playback = playback(1, 150);
    playback.frame_index = Some(2);
    playback.label = Some(ShapeLabel::Arc);

    let display = render(&ready(PlaybackState::Playing(playback)));

    assert_eq!(display.line(0), "arc");
    assert_eq!(display.line(1), "Actual: line");

    let frame = display.frame().unwrap();
    assert_eq!((frame.width, frame.height), (2, 2));
    assert_eq!(frame.rgb[0], 2);
}

#[test]
fn test_render_ended_keeps_last_label() {
    let mut playback = playback(1, 150);
    playback.frame_index = Some(149);
    playback.label = Some(ShapeLabel::Square);

    let display = render(&ready(PlaybackState::Ended(playback)));

    assert_eq!(display.line(0), "square");
}

#[test]
fn test_render_failure_is_neutral() {
    let display = render(&ready(PlaybackState::Failed {
        video_index: 4,
        kind: FailureKind::MediaDecode,
    }));

    assert_eq!(display.line(0), "No prediction");
    assert_eq!(display.line(1), "");
}

#[test]
fn test_render_unavailable_model() {
    let state = State {
        model: ModelState::Unavailable,
        ..ready(PlaybackState::Failed {
            video_index: 4,
            kind: FailureKind::ModelUnavailable,
        })
    };
    let display = render(&state);

    assert_eq!(display.line(0), "No prediction");
    assert_eq!(display.line(1), "Model unavailable");
}

#[test]
fn test_render_redraws_frame_only_when_it_changes() {
    let display = DeviceDisplayFake::new();
    let render = Render::new(Arc::new(Mutex::new(display.clone())));

    let mut playback = playback(1, 150);
    playback.frame_index = Some(3);
    playback.label = Some(ShapeLabel::Line);
    let state = ready(PlaybackState::Playing(playback.clone()));

    render.render(&state).unwrap();
    render.render(&state).unwrap();
    render.render(&state).unwrap();
    assert_eq!(display.frames_shown(), 1);

    playback.frame_index = Some(4);
    let moved = ready(PlaybackState::Playing(playback));
    render.render(&moved).unwrap();
    assert_eq!(display.frames_shown(), 2);
    assert_eq!(display.line(0), "line");

    render.render(&ready(PlaybackState::Idle)).unwrap();
    assert_eq!(display.frames_shown(), 3);
    assert_eq!(display.frame(), None);
}
