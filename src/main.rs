use std::io::{self, BufRead};

use hrafn::cli::{Command, Session};

fn main() {
    println!("Hrafn - Tafl Rules Engine");
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let input = line.unwrap();

        match Command::from_line(&input) {
            Ok(Some(command)) => {
                if !session.handle_command(command) {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => eprintln!("{}", err),
        }
    }
}
