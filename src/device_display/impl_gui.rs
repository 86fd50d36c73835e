use crate::device_display::interface::{DeviceDisplay, FrameImage};
use crate::session::core::Event;
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct Screen {
    lines: [String; 2],
    frame: Option<FrameImage>,
    frame_version: u64,
}

struct VideoWindow {
    screen: Arc<Mutex<Screen>>,
    video_count: usize,
    repaint_rate: Duration,
    selected: usize,
    event_sender: Sender<Event>,
    texture: Option<egui::TextureHandle>,
    texture_version: u64,
}

impl VideoWindow {
    fn sync_texture(&mut self, ctx: &egui::Context, frame: Option<FrameImage>, version: u64) {
        if version == self.texture_version {
            return;
        }

        self.texture = frame.map(|frame| {
            ctx.load_texture(
                "video-frame",
                egui::ColorImage::from_rgb([frame.width, frame.height], &frame.rgb),
                egui::TextureOptions::NEAREST,
            )
        });
        self.texture_version = version;
    }
}

impl eframe::App for VideoWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (lines, frame, version) = match self.screen.lock() {
            Ok(screen) => {
                let frame = if screen.frame_version != self.texture_version {
                    screen.frame.clone()
                } else {
                    None
                };
                (screen.lines.clone(), frame, screen.frame_version)
            }
            Err(_) => return,
        };

        self.sync_texture(ctx, frame, version);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::ComboBox::from_label("Video")
                    .selected_text(self.selected.to_string())
                    .show_ui(ui, |ui| {
                        for index in 0..self.video_count {
                            ui.selectable_value(&mut self.selected, index, index.to_string());
                        }
                    });

                if ui.button("Load").clicked() {
                    let _ = self.event_sender.send(Event::VideoSelected(self.selected));
                }

                if ui.button("Reload model").clicked() {
                    let _ = self.event_sender.send(Event::ModelReloadRequested);
                }
            });

            ui.separator();

            ui.vertical_centered(|ui| {
                match &self.texture {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(260.0, 260.0)));
                    }
                    None => {
                        ui.add_space(260.0);
                    }
                }

                ui.label(egui::RichText::new(&lines[0]).size(28.0).strong());
                ui.label(egui::RichText::new(&lines[1]).size(16.0));
            });
        });

        ctx.request_repaint_after(self.repaint_rate);
    }
}

/// egui window with the video selector, current frame and predicted label.
/// Clones share one screen, so the session can draw into one clone while the
/// main thread runs the window from another.
#[derive(Clone)]
pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
    video_count: usize,
    repaint_rate: Duration,
}

impl DeviceDisplayGui {
    pub fn new(video_count: usize, repaint_rate: Duration) -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
            video_count,
            repaint_rate,
        }
    }

    /// Blocks until the window is closed, then asks the session to stop.
    /// Must be called from the main thread.
    pub fn run_window(&self, event_sender: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 420.0])
                .with_resizable(false),
            ..Default::default()
        };

        let window = VideoWindow {
            screen: self.screen.clone(),
            video_count: self.video_count,
            repaint_rate: self.repaint_rate,
            selected: 0,
            event_sender: event_sender.clone(),
            texture: None,
            texture_version: 0,
        };

        let result = eframe::run_native(
            "Shape Video Classifier",
            options,
            Box::new(|_cc| Box::new(window)),
        );

        let _ = event_sender.send(Event::Shutdown);

        result.map_err(|e| e.to_string().into())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }

        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        if screen.lines[line as usize] != text {
            screen.lines[line as usize] = text.to_string();
        }
        Ok(())
    }

    fn show_frame(&mut self, frame: Option<FrameImage>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        if screen.frame != frame {
            screen.frame = frame;
            screen.frame_version += 1;
        }
        Ok(())
    }
}
