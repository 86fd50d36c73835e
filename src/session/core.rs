use crate::config::Config;
use crate::error::{ClassifyError, DecodeError, FailureKind, ModelError};
use crate::frame_classifier::label::ShapeLabel;
use crate::frame_classifier::prediction_table::{frame_index_at, PredictionTable};
use crate::playback_clock::interface::PlaybackPosition;
use crate::video_decoder::interface::DecodedVideo;
use crate::video_decoder::video_clip::VideoClip;
use std::sync::Arc;
use std::time::Duration;

pub type LoadId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Loading,
    Ready,
    Unavailable,
}

/// A clip with its predictions, being played or finished.
#[derive(Debug, Clone)]
pub struct Playback {
    pub load_id: LoadId,
    pub video_index: usize,
    pub clip: Arc<VideoClip>,
    pub table: Arc<PredictionTable>,
    pub ground_truth: Option<Arc<Vec<ShapeLabel>>>,
    pub frame_index: Option<usize>,
    pub label: Option<ShapeLabel>,
}

impl Playback {
    pub fn actual_label(&self) -> Option<ShapeLabel> {
        let frame_index = self.frame_index?;
        self.ground_truth.as_ref()?.get(frame_index).copied()
    }
}

#[derive(Debug, Clone)]
pub enum PlaybackState {
    Idle,
    Decoding {
        load_id: LoadId,
        video_index: usize,
    },
    Inferring {
        load_id: LoadId,
        video_index: usize,
        clip: Arc<VideoClip>,
        ground_truth: Option<Arc<Vec<ShapeLabel>>>,
    },
    Playing(Playback),
    Ended(Playback),
    Failed {
        video_index: usize,
        kind: FailureKind,
    },
}

#[derive(Debug, Clone)]
pub struct State {
    pub model: ModelState,
    pub playback: PlaybackState,
    pub next_load_id: LoadId,
}

impl State {
    pub fn to_display_string(&self) -> String {
        let playback = match &self.playback {
            PlaybackState::Idle => "Idle".to_string(),
            PlaybackState::Decoding {
                load_id,
                video_index,
            } => format!("Decoding {{ load_id: {}, video: {} }}", load_id, video_index),
            PlaybackState::Inferring {
                load_id,
                video_index,
                ..
            } => format!("Inferring {{ load_id: {}, video: {} }}", load_id, video_index),
            PlaybackState::Playing(playback) => format!(
                "Playing {{ load_id: {}, video: {}, frame: {:?}, label: {:?} }}",
                playback.load_id, playback.video_index, playback.frame_index, playback.label
            ),
            PlaybackState::Ended(playback) => format!(
                "Ended {{ load_id: {}, video: {}, label: {:?} }}",
                playback.load_id, playback.video_index, playback.label
            ),
            PlaybackState::Failed { video_index, kind } => {
                format!("Failed {{ video: {}, kind: {:?} }}", video_index, kind)
            }
        };
        format!("model: {:?}, playback: {}", self.model, playback)
    }
}

#[derive(Debug)]
pub enum Event {
    Tick(Option<PlaybackPosition>),
    VideoSelected(usize),
    ModelReloadRequested,
    ModelLoadDone(Result<(), ModelError>),
    DecodeDone {
        load_id: LoadId,
        result: Result<DecodedVideo, DecodeError>,
    },
    ClassifyDone {
        load_id: LoadId,
        result: Result<PredictionTable, ClassifyError>,
    },
    Shutdown,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::DecodeDone {
                load_id,
                result: Ok(decoded),
            } => format!(
                "DecodeDone {{ load_id: {}, frames: {} }}",
                load_id,
                decoded.clip.frame_count()
            ),
            Event::ClassifyDone {
                load_id,
                result: Ok(table),
            } => format!(
                "ClassifyDone {{ load_id: {}, frames: {} }}",
                load_id,
                table.frame_count()
            ),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeTick,
    LoadModel,
    DecodeVideo {
        load_id: LoadId,
        video_index: usize,
    },
    ClassifyVideo {
        load_id: LoadId,
        clip: Arc<VideoClip>,
    },
    StartPlayback {
        load_id: LoadId,
        duration: Duration,
    },
    StopPlayback {
        load_id: LoadId,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyVideo { load_id, clip } => format!(
                "ClassifyVideo {{ load_id: {}, frames: {} }}",
                load_id,
                clip.frame_count()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State {
            model: ModelState::Loading,
            playback: PlaybackState::Idle,
            next_load_id: 1,
        },
        vec![Effect::LoadModel, Effect::SubscribeTick],
    )
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.playback.clone(), event) {
        // Model lifecycle
        (_, Event::ModelLoadDone(result)) => {
            let model = match result {
                Ok(()) => ModelState::Ready,
                Err(_) => ModelState::Unavailable,
            };
            (State { model, ..state }, vec![])
        }
        (_, Event::ModelReloadRequested) => {
            if state.model == ModelState::Loading {
                (state, vec![])
            } else {
                (
                    State {
                        model: ModelState::Loading,
                        ..state
                    },
                    vec![Effect::LoadModel],
                )
            }
        }

        // Loading a clip
        (PlaybackState::Decoding { .. } | PlaybackState::Inferring { .. }, Event::VideoSelected(_)) => {
            (state, vec![])
        }
        (_, Event::VideoSelected(video_index)) => {
            if video_index >= config.video_count {
                return (state, vec![]);
            }

            // The old clock keeps running until the new load replaces it;
            // its ticks carry a stale token and are ignored.
            let load_id = state.next_load_id;
            let effects = vec![Effect::DecodeVideo {
                load_id,
                video_index,
            }];

            (
                State {
                    playback: PlaybackState::Decoding {
                        load_id,
                        video_index,
                    },
                    next_load_id: load_id + 1,
                    ..state
                },
                effects,
            )
        }
        (
            PlaybackState::Decoding {
                load_id,
                video_index,
            },
            Event::DecodeDone {
                load_id: done_id,
                result,
            },
        ) if load_id == done_id => match result {
            Ok(decoded) => {
                let clip = Arc::new(decoded.clip);
                (
                    State {
                        playback: PlaybackState::Inferring {
                            load_id,
                            video_index,
                            clip: clip.clone(),
                            ground_truth: decoded.ground_truth.map(Arc::new),
                        },
                        ..state
                    },
                    vec![Effect::ClassifyVideo { load_id, clip }],
                )
            }
            Err(_) => (
                State {
                    playback: PlaybackState::Failed {
                        video_index,
                        kind: FailureKind::MediaDecode,
                    },
                    ..state
                },
                vec![],
            ),
        },
        (
            PlaybackState::Inferring {
                load_id,
                video_index,
                clip,
                ground_truth,
            },
            Event::ClassifyDone {
                load_id: done_id,
                result,
            },
        ) if load_id == done_id => match result {
            Ok(table) => {
                let duration = config.clip_duration(table.frame_count());
                (
                    State {
                        playback: PlaybackState::Playing(Playback {
                            load_id,
                            video_index,
                            clip,
                            table: Arc::new(table),
                            ground_truth,
                            frame_index: None,
                            label: None,
                        }),
                        ..state
                    },
                    vec![Effect::StartPlayback { load_id, duration }],
                )
            }
            Err(error) => (
                State {
                    playback: PlaybackState::Failed {
                        video_index,
                        kind: FailureKind::from(&error),
                    },
                    ..state
                },
                vec![],
            ),
        },

        // Playback synchronization
        (PlaybackState::Playing(mut playback), Event::Tick(Some(position)))
            if position.token == playback.load_id =>
        {
            let frame_index = frame_index_at(position.elapsed, config.frame_rate);
            if let Some(label) = playback.table.label_for_frame(frame_index) {
                playback.frame_index = Some(frame_index);
                playback.label = Some(label);
            }

            if position.ended {
                let load_id = playback.load_id;
                (
                    State {
                        playback: PlaybackState::Ended(playback),
                        ..state
                    },
                    vec![Effect::StopPlayback { load_id }],
                )
            } else {
                (
                    State {
                        playback: PlaybackState::Playing(playback),
                        ..state
                    },
                    vec![],
                )
            }
        }

        // Stale completions, ticks while nothing plays, shutdown
        _ => (state, vec![]),
    }
}
