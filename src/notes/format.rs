//! Release note rendering

use crate::types::ReleaseNote;
use std::io::{self, Write};

impl ReleaseNote {
    /// Render as `name\n body\n`, or `name (tag)\n body\n` when the release
    /// name differs from its tag
    pub fn render(&self) -> String {
        if self.name == self.tag {
            format!("{}\n {}\n", self.name, self.body)
        } else {
            format!("{} ({})\n {}\n", self.name, self.tag, self.body)
        }
    }
}

/// Write each note followed by a blank line
pub fn write_notes<W: Write>(out: &mut W, notes: &[ReleaseNote]) -> io::Result<()> {
    for note in notes {
        writeln!(out, "{}", note.render())?;
    }
    out.flush()
}
