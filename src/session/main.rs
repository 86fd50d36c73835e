use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::frame_classifier::main::FrameClassifier;
use crate::library::logger::interface::Logger;
use crate::playback_clock::interface::PlaybackClock;
use crate::session::core::{init, transition, Effect, Event, PlaybackState, State};
use crate::session::render::Render;
use crate::session::run_effect::RunEffect;
use crate::shape_model::interface::ShapeModel;
use crate::video_decoder::interface::VideoDecoder;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Owns the playback state machine. Events arrive on one channel, effects run
/// on their own threads and report back through the same channel.
#[derive(Clone)]
pub struct Session {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    playback_clock: Arc<dyn PlaybackClock + Send + Sync>,
    run_effect: RunEffect,
    render: Render,
    event_sender: Sender<Event>,
    event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl Session {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        shape_model: Arc<dyn ShapeModel + Send + Sync>,
        video_decoder: Arc<dyn VideoDecoder + Send + Sync>,
        playback_clock: Arc<dyn PlaybackClock + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("session");
        let frame_classifier = FrameClassifier::new(shape_model, logger.clone());

        Self {
            run_effect: RunEffect::new(
                config.clone(),
                logger.clone(),
                frame_classifier,
                video_decoder,
                playback_clock.clone(),
                event_sender.clone(),
            ),
            render: Render::new(device_display),
            config,
            logger,
            playback_clock,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }

    pub fn event_sender(&self) -> Sender<Event> {
        self.event_sender.clone()
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut state, effects) = init();

        self.render.init()?;
        self.render.render(&state)?;
        self.spawn_effects(effects);

        let event_receiver = self.event_receiver.lock().map_err(|e| e.to_string())?;

        loop {
            let event = event_receiver.recv()?;

            if matches!(event, Event::Shutdown) {
                let _ = self.logger.info("Shutting down");
                self.playback_clock.stop();
                return Ok(());
            }

            let (new_state, effects) = self.step(state, event);
            state = new_state;

            self.render.render(&state)?;
            self.spawn_effects(effects);
        }
    }

    pub fn step(&self, state: State, event: Event) -> (State, Vec<Effect>) {
        let quiet = matches!(event, Event::Tick(_));

        if let Event::VideoSelected(video_index) = &event {
            if matches!(
                state.playback,
                PlaybackState::Decoding { .. } | PlaybackState::Inferring { .. }
            ) {
                let _ = self.logger.info(&format!(
                    "Rejected video {}: a previous load is still running",
                    video_index
                ));
            }
        }

        if !quiet {
            let _ = self.logger.info(&format!(
                "\nold state:\n\t{}\n\nevent:\n\t{}",
                state.to_display_string(),
                event.to_display_string(),
            ));
        }

        let (new_state, effects) = transition(&self.config, state, event);

        if !quiet || !effects.is_empty() {
            let _ = self.logger.info(&format!(
                "\nnew state:\n\t{}\n\neffects:\n\t{:?}",
                new_state.to_display_string(),
                effects
                    .iter()
                    .map(Effect::to_display_string)
                    .collect::<Vec<_>>()
            ));
        }

        (new_state, effects)
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
