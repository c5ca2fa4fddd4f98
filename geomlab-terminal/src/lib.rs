/// Terminal front end for the solid-letter pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};

use geomlab_core::{render_mesh, Camera, Mesh, Style, Transform};

pub mod renderer;

pub use renderer::PainterCanvas;

const ROT_STEP: f32 = 0.1;
const TRANS_STEP: f32 = 0.5;
const SCALE_STEP: f32 = 0.5;
const CAM_STEP: f32 = 0.05;

fn preset() -> (Transform, Camera) {
    (
        Transform {
            rx: 0.3,
            ry: -0.8,
            scale: 3.0,
            ..Transform::new()
        },
        Camera::new(0.6),
    )
}

/// Interactive viewer: every key press mutates one transform parameter,
/// recomputes the full pipeline and redraws. No animation clock; the loop
/// blocks until the next input event.
pub struct LetterApp {
    mesh: Mesh,
    transform: Transform,
    camera: Camera,
    style: Style,
    canvas: PainterCanvas,
    running: bool,
}

impl LetterApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let (transform, camera) = preset();
        Ok(Self {
            mesh,
            transform,
            camera,
            style: Style::default(),
            canvas: PainterCanvas::new(width as usize, height as usize),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render_frame()?;
        while self.running {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => {
                    self.handle_key(code);
                    self.render_frame()?;
                }
                Event::Resize(width, height) => {
                    self.canvas = PainterCanvas::new(width as usize, height as usize);
                    self.render_frame()?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('w') | KeyCode::Up => self.transform.rx += ROT_STEP,
            KeyCode::Char('s') | KeyCode::Down => self.transform.rx -= ROT_STEP,
            KeyCode::Char('a') | KeyCode::Left => self.transform.ry -= ROT_STEP,
            KeyCode::Char('d') | KeyCode::Right => self.transform.ry += ROT_STEP,
            KeyCode::Char('e') => self.transform.rz += ROT_STEP,
            KeyCode::Char('r') => self.transform.rz -= ROT_STEP,
            KeyCode::Char('h') => self.transform.tx -= TRANS_STEP,
            KeyCode::Char('l') => self.transform.tx += TRANS_STEP,
            KeyCode::Char('j') => self.transform.ty -= TRANS_STEP,
            KeyCode::Char('k') => self.transform.ty += TRANS_STEP,
            KeyCode::Char('u') => self.transform.tz -= TRANS_STEP,
            KeyCode::Char('i') => self.transform.tz += TRANS_STEP,
            KeyCode::Char('+') | KeyCode::Char('=') => self.transform.scale += SCALE_STEP,
            KeyCode::Char('-') => {
                self.transform.scale = (self.transform.scale - SCALE_STEP).max(SCALE_STEP)
            }
            KeyCode::Char('[') => self.camera.angle -= CAM_STEP,
            KeyCode::Char(']') => self.camera.angle += CAM_STEP,
            KeyCode::Char('0') => {
                let (transform, camera) = preset();
                self.transform = transform;
                self.camera = camera;
            }
            _ => {}
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let primitives = render_mesh(&self.mesh, &self.transform, &self.camera, &self.style);
        self.canvas.compose(&primitives);

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "geomlab | scale {:.1} orbit {:.2} | WASD/arrows rotate  E/R roll  HJKL move  U/I depth  +/- scale  [/] orbit  0 reset  Q quit",
                self.transform.scale, self.camera.angle
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
