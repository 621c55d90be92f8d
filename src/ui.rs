//! Plain-text rendering of the queue, the reserve stack and the menu

use crate::error::PieceError;
use crate::game::{Controller, Outcome, Refill};
use crate::menu::{self, InvalidCommand};
use crate::piece::Piece;
use crate::settings::VisualSettings;
use crossterm::style::Stylize;
use std::io::{self, Write};

const RULE: &str = "----------------------------------------";

/// Format a piece, coloured by type when enabled
fn piece_label(piece: Piece, visual: &VisualSettings) -> String {
    let label = piece.to_string();
    if visual.color {
        label.with(piece.kind.color()).to_string()
    } else {
        label
    }
}

/// Space-separated pieces, or the empty marker
fn piece_row(pieces: impl Iterator<Item = Piece>, visual: &VisualSettings) -> String {
    let labels: Vec<String> = pieces.map(|p| piece_label(p, visual)).collect();
    if labels.is_empty() {
        visual.empty_marker.clone()
    } else {
        labels.join(" ")
    }
}

/// Render both containers
pub fn render_state(out: &mut impl Write, controller: &Controller, visual: &VisualSettings) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Current state:")?;
    let queue = controller.queue();
    let stack = controller.stack();
    writeln!(
        out,
        "Next queue ({}/{}):\t{}",
        queue.len(),
        queue.capacity(),
        piece_row(queue.iter(), visual)
    )?;
    writeln!(
        out,
        "Reserve ({}/{}, top -> bottom):\t{}",
        stack.len(),
        stack.capacity(),
        piece_row(stack.iter(), visual)
    )?;
    writeln!(out, "{}", RULE)
}

/// Render the numbered options and the prompt
pub fn render_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Options:")?;
    for item in menu::items() {
        writeln!(out, "{} - {}", item.key, item.label)?;
    }
    write!(out, "Choose an option: ")?;
    out.flush()
}

fn render_refill(out: &mut impl Write, refill: Refill, visual: &VisualSettings) -> io::Result<()> {
    match refill {
        Refill::Added(piece) => writeln!(
            out,
            "New piece {} added to the back of the queue.",
            piece_label(piece, visual)
        ),
        Refill::Dropped(piece) => writeln!(
            out,
            "New piece {} dealt but discarded: {}.",
            piece_label(piece, visual),
            PieceError::QueueFull
        ),
        Refill::None => Ok(()),
    }
}

/// Report a successful command
pub fn render_outcome(out: &mut impl Write, outcome: &Outcome, visual: &VisualSettings) -> io::Result<()> {
    match *outcome {
        Outcome::Played { piece, refill } => {
            writeln!(out, "Playing piece {}.", piece_label(piece, visual))?;
            render_refill(out, refill, visual)
        }
        Outcome::Reserved { piece, refill } => {
            writeln!(out, "Piece {} moved to the top of the reserve.", piece_label(piece, visual))?;
            render_refill(out, refill, visual)
        }
        Outcome::Used { piece, refill } => {
            writeln!(out, "Using reserved piece {}.", piece_label(piece, visual))?;
            render_refill(out, refill, visual)
        }
        Outcome::SwappedOne { front, top } => writeln!(
            out,
            "Swapped: queue front is now {}, reserve top is now {}.",
            piece_label(front, visual),
            piece_label(top, visual)
        ),
        Outcome::SwappedMany => writeln!(out, "Swapped the first 3 queued pieces with the reserve."),
        Outcome::Inserted(piece) => writeln!(
            out,
            "New piece {} added to the back of the queue.",
            piece_label(piece, visual)
        ),
        Outcome::Exit => writeln!(out, "Exiting..."),
    }
}

/// Report a rejected command
pub fn render_rejection(out: &mut impl Write, error: &PieceError) -> io::Result<()> {
    writeln!(out, "Cannot do that: {}.", error)
}

/// Report input that is not a command
pub fn render_invalid(out: &mut impl Write, error: &InvalidCommand) -> io::Result<()> {
    writeln!(out, "{}. Try again.", error)
}
