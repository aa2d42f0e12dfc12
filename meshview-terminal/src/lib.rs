/// Terminal front end: ASCII rendering and mouse-driven orbit controls
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{debug, info};
use meshview_core::ViewerSession;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod error;
pub mod input;
pub mod options;
pub mod renderer;

pub use error::AppError;
pub use input::{key_action, mouse_command, KeyAction};
pub use options::{AppOptions, TerminalOptions};
pub use renderer::{AsciiRenderer, TerminalMesh, TerminalSource};

pub type TerminalSession = ViewerSession<TerminalSource>;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    session: TerminalSession,
    options: TerminalOptions,
    renderer: AsciiRenderer,
    title: String,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(session: TerminalSession, options: TerminalOptions, title: String) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut app = Self {
            session,
            options,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            title,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        };
        app.resize(width, height);
        Ok(app)
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.options.target_fps.max(1)));

        while self.running {
            let frame_start = Instant::now();

            // Drain input until the frame is due
            loop {
                let remaining = target_frame_time.saturating_sub(frame_start.elapsed());
                if !event::poll(remaining)? {
                    break;
                }
                let event = event::read()?;
                self.handle_event(&event);
                if !self.running {
                    return Ok(());
                }
            }

            self.session.update();
            self.render()?;

            // Update FPS counter
            self.frame_count += 1;
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Apply one terminal event to the viewer
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(mouse) => {
                if let Some(command) = mouse_command(mouse, self.options.cell_aspect) {
                    self.session.apply(command);
                }
            }
            Event::Key(key) => match key_action(key) {
                Some(KeyAction::Quit) => self.running = false,
                Some(KeyAction::Reset) => {
                    debug!("camera reset");
                    self.session.reset();
                }
                Some(KeyAction::ToggleSpin) => {
                    let enabled = !self.session.options().spin.enabled;
                    debug!("spin {}", if enabled { "on" } else { "off" });
                    self.session.set_spin(enabled);
                }
                Some(KeyAction::Control(zoom)) => self.session.apply(zoom.command()),
                None => {}
            },
            Event::Resize(width, height) => self.resize(*width, *height),
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        info!("terminal size {}x{}", width, height);
        self.renderer.resize(width as usize, height as usize);
        self.session
            .resize(f64::from(width), f64::from(height) * self.options.cell_aspect);
    }

    fn render(&mut self) -> io::Result<()> {
        // Clear renderer
        self.renderer.clear();

        // Render mesh
        self.renderer.render_mesh(self.session.drawable(), self.session.camera());

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} | {} triangles | FPS: {:.1} | drag=orbit shift/right-drag=pan ctrl/middle-drag=zoom  r=reset space=spin q=quit",
                self.title,
                self.session.drawable().facets().len(),
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
