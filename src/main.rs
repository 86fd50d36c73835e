use config::Config;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use playback_clock::impl_system::PlaybackClockSystem;
use session::main::Session;
use shape_model::impl_tract_onnx::ShapeModelTractOnnx;
use std::sync::{Arc, Mutex};
use video_decoder::impl_ffmpeg::VideoDecoderFfmpeg;

mod config;
mod device_display;
mod error;
mod frame_classifier;
mod library;
mod playback_clock;
mod session;
mod shape_model;
mod video_decoder;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let shape_model = Arc::new(ShapeModelTractOnnx::new(
        config.model.clone(),
        logger.clone(),
    ));

    let video_decoder = Arc::new(VideoDecoderFfmpeg::new(&config, logger.clone()));

    let playback_clock = Arc::new(PlaybackClockSystem::new());

    let device_display = DeviceDisplayGui::new(config.video_count, config.poll_rate);

    let start_session = |device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>| {
        let session = Session::new(
            config.clone(),
            logger.clone(),
            shape_model.clone(),
            video_decoder.clone(),
            playback_clock.clone(),
            device_display,
        );
        let event_sender = session.event_sender();
        let logger = logger.clone();
        let session_thread = std::thread::spawn(move || {
            if let Err(e) = session.run() {
                let _ = logger.error(&format!("Session stopped: {}", e));
            }
        });
        (event_sender, session_thread)
    };

    let window_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        Arc::new(Mutex::new(device_display.clone()));
    let (event_sender, session_thread) = start_session(window_display);

    let window = device_display.run_window(event_sender);

    let _ = session_thread.join();

    if let Err(e) = window {
        let _ = logger.error(&format!(
            "Window unavailable ({}), falling back to console",
            e
        ));

        let console_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
            Arc::new(Mutex::new(DeviceDisplayConsole::new()));
        let (event_sender, session_thread) = start_session(console_display);

        DeviceDisplayConsole::run_prompt(std::io::stdin().lock(), event_sender)?;

        let _ = session_thread.join();
    }

    Ok(())
}
