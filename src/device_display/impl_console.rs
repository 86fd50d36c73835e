use crate::device_display::interface::{DeviceDisplay, FrameImage};
use crate::session::core::Event;
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::Sender;

const WIDTH: usize = 24;

/// Text-only display for machines without a window system. Frames are skipped.
pub struct DeviceDisplayConsole {
    display_buffer: [String; 2],
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [String::new(), String::new()],
        }
    }

    fn render_display(&self) {
        println!("{}", render_box(&self.display_buffer));
    }

    /// Reads commands until `quit` or end of input, then asks the session to stop.
    ///
    /// A number selects that video, `reload` reloads the model.
    pub fn run_prompt<R: BufRead>(
        input: R,
        event_sender: Sender<Event>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("Enter a video number, `reload`, or `quit`");

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Some(Event::Shutdown) => break,
                Some(event) => event_sender.send(event).map_err(|e| e.to_string())?,
                None if line.trim().is_empty() => {}
                None => println!("Unknown command: {}", line.trim()),
            }
        }

        let _ = event_sender.send(Event::Shutdown);
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }

        let text: String = text.chars().take(WIDTH).collect();

        // Rendering happens every tick; only print what changed
        if self.display_buffer[line as usize] != text {
            self.display_buffer[line as usize] = text;
            self.render_display();
        }
        Ok(())
    }

    fn show_frame(&mut self, _frame: Option<FrameImage>) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}

fn render_box(lines: &[String; 2]) -> String {
    let border = "─".repeat(WIDTH);
    let mut out = format!("┌{}┐\n", border);
    for line in lines {
        out.push_str(&format!("│{:<width$}│\n", line, width = WIDTH));
    }
    out.push_str(&format!("└{}┘", border));
    out
}

fn parse_command(line: &str) -> Option<Event> {
    match line.trim() {
        "q" | "quit" | "exit" => Some(Event::Shutdown),
        "r" | "reload" => Some(Event::ModelReloadRequested),
        other => other.parse::<usize>().ok().map(Event::VideoSelected),
    }
}
