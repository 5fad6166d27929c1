use crate::pitch::format_pitch;
use crate::stave::Stave;
use std::io::{self, Write};

/// Render the stave as one line of space terminated `<Note><Octave>` tokens
pub fn render_stave(stave: &Stave) -> String {
    let mut line = String::new();
    for pitch in stave.pitches() {
        line.push_str(&format_pitch(pitch));
        line.push(' ');
    }
    line.push('\n');
    line
}

/// Write the rendered stave to `out` and flush it
pub fn write_stave<W: Write>(stave: &Stave, out: &mut W) -> io::Result<()> {
    out.write_all(render_stave(stave).as_bytes())?;
    out.flush()
}
