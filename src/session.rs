//! Interactive command loop
//!
//! Show state, show menu, read one line, run it. Ends on Exit or end of input.

use crate::game::{Controller, Outcome};
use crate::menu;
use crate::settings::VisualSettings;
use crate::ui;
use std::io::{self, BufRead, Write};

/// Run the menu loop until the player exits or input runs out
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    controller: &mut Controller,
    visual: &VisualSettings,
) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        ui::render_state(&mut output, controller, visual)?;
        ui::render_menu(&mut output)?;

        line.clear();
        // Raw bytes, so a line in the wrong encoding is just invalid input
        if input.read_until(b'\n', &mut line)? == 0 {
            tracing::info!("End of input, leaving session");
            writeln!(output)?;
            ui::render_outcome(&mut output, &Outcome::Exit, visual)?;
            break;
        }

        let command = match menu::parse_command(&String::from_utf8_lossy(&line)) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Invalid input: {}", e);
                ui::render_invalid(&mut output, &e)?;
                continue;
            }
        };

        match controller.execute(command) {
            Ok(Outcome::Exit) => {
                ui::render_outcome(&mut output, &Outcome::Exit, visual)?;
                break;
            }
            Ok(outcome) => ui::render_outcome(&mut output, &outcome, visual)?,
            Err(e) => ui::render_rejection(&mut output, &e)?,
        }
    }
    output.flush()
}
