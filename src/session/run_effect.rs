use crate::config::Config;
use crate::error::DecodeError;
use crate::frame_classifier::main::FrameClassifier;
use crate::frame_classifier::normalize::normalize;
use crate::library::logger::interface::Logger;
use crate::playback_clock::interface::PlaybackClock;
use crate::session::core::{Effect, Event};
use crate::video_decoder::asset::VideoAsset;
use crate::video_decoder::interface::{DecodedVideo, VideoDecoder};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    frame_classifier: FrameClassifier,
    video_decoder: Arc<dyn VideoDecoder + Send + Sync>,
    playback_clock: Arc<dyn PlaybackClock + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        frame_classifier: FrameClassifier,
        video_decoder: Arc<dyn VideoDecoder + Send + Sync>,
        playback_clock: Arc<dyn PlaybackClock + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            frame_classifier,
            video_decoder,
            playback_clock,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        if effect != Effect::SubscribeTick {
            let _ = self
                .logger
                .info(&format!("Running effect: {}", effect.to_display_string()));
        }

        match effect {
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.poll_rate);
                let position = self.playback_clock.position();
                if self.event_sender.send(Event::Tick(position)).is_err() {
                    break;
                }
            },
            Effect::LoadModel => {
                let loaded = self.frame_classifier.reload();
                if let Err(e) = &loaded {
                    let _ = self.logger.error(&format!("Model load failed: {}", e));
                }
                let _ = self.event_sender.send(Event::ModelLoadDone(loaded));
            }
            Effect::DecodeVideo {
                load_id,
                video_index,
            } => {
                let asset = VideoAsset::resolve(&self.config.video_folder, video_index);
                let decoded = self.decode(&asset);
                if let Err(e) = &decoded {
                    let _ = self
                        .logger
                        .error(&format!("Decoding video {} failed: {}", video_index, e));
                }
                let _ = self.event_sender.send(Event::DecodeDone {
                    load_id,
                    result: decoded,
                });
            }
            Effect::ClassifyVideo { load_id, clip } => {
                let input = normalize(&clip);
                let classified = self.frame_classifier.classify(&input);
                if let Err(e) = &classified {
                    let _ = self.logger.error(&format!("Classification failed: {}", e));
                }
                let _ = self.event_sender.send(Event::ClassifyDone {
                    load_id,
                    result: classified,
                });
            }
            Effect::StartPlayback { load_id, duration } => {
                self.playback_clock.start(load_id, duration);
            }
            Effect::StopPlayback { load_id } => {
                self.playback_clock.stop_if(load_id);
            }
        }
    }

    fn decode(&self, asset: &VideoAsset) -> Result<DecodedVideo, DecodeError> {
        let clip = self.video_decoder.decode(asset)?;

        let ground_truth = if self.config.load_ground_truth {
            Some(self.video_decoder.read_labels(asset)?)
        } else {
            None
        };

        Ok(DecodedVideo { clip, ground_truth })
    }
}
