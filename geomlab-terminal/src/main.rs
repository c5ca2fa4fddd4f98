/// Geomlab Terminal Demo - Extruded Letter
///
/// Renders an extruded "R" glyph as a solid mesh with painter's-algorithm
/// visibility and Lambertian shading.
/// Controls:
///   - WASD / Arrow Keys: Rotate the letter
///   - E/R: Roll rotation
///   - HJKL: Translate, U/I: Depth translate
///   - +/-: Scale, [/]: Orbit the camera
///   - 0: Reset, Q/ESC: Quit

use geomlab_core::Mesh;
use geomlab_terminal::LetterApp;
use std::io;

fn main() -> io::Result<()> {
    let mesh = Mesh::letter_r(1.2);

    let mut app = LetterApp::new(mesh)?;
    app.run()
}
