//! Interactive match session: one running game plus its undo history

use crate::core::{Match, MatchResult, MatchSnapshot, Position, Side};

use super::command::Command;

pub struct Session {
    game: Match,
    undo_stack: Vec<MatchSnapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: Match::default(),
            undo_stack: Vec::new(),
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Run one command; returns false when the session should end.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::New(preset) => {
                self.game = Match::new(preset.board());
                self.undo_stack.clear();
                println!("New {} match. {} to play.", preset, self.game.active_side());
            }
            Command::Show => print!("{}", self.game.board()),
            Command::Move { from, to } => self.try_move(from, to),
            Command::Undo => self.undo(),
            Command::Status => self.report_status(),
            Command::Help => print_help(),
            Command::Quit => return false,
        }
        true
    }

    fn try_move(&mut self, from: Position, to: Position) {
        if self.game.end_status().is_some() {
            println!("The match is over; start another with 'new'.");
            return;
        }
        if !self.game.select_source(from) {
            println!("No {} piece at {}.", self.game.active_side(), from);
            return;
        }
        if !self.game.select_destination(from, to) {
            println!("Illegal destination {}.", to);
            return;
        }

        self.undo_stack.push(self.game.save());
        for piece in self.game.make_move(from, to) {
            println!("Captured {} {} at {}.", piece.side, piece.kind, piece.pos);
        }
        self.game.end_turn();
        self.report_status();
    }

    fn undo(&mut self) {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.game.restore(&snapshot);
                println!("Rewound to turn {}.", self.game.turn_number());
            }
            None => println!("Nothing to undo."),
        }
    }

    fn report_status(&self) {
        match self.game.end_status() {
            Some(verdict) => {
                if verdict[Side::Attacker] == MatchResult::Draw {
                    println!("Match over: draw.");
                } else {
                    for side in Side::all() {
                        println!("{}: {}", side, verdict[side]);
                    }
                }
            }
            None => println!(
                "Turn {}: {} to play.",
                self.game.turn_number(),
                self.game.active_side()
            ),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn print_help() {
    println!("Commands:");
    println!("  new [classic|variant]     start a fresh match");
    println!("  show                      draw the board");
    println!("  move <row,col> <row,col>  move a piece");
    println!("  undo                      rewind the last move");
    println!("  status                    whose turn it is, or the result");
    println!("  help                      this text");
    println!("  quit                      leave");
}
