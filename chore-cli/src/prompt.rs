//! Blocking stdin prompter used by install and update.

use std::io::{self, BufRead, Write};

use chore_lifecycle::Prompter;

pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm_install(&mut self, _source: &str, content: &str) -> io::Result<bool> {
        println!("Your chorefile contains:");
        println!("{content}");
        print!("Do you wish to continue [y/N]? ");
        io::stdout().flush()?;

        let answer = read_line()?;
        Ok(answer.trim_start().to_ascii_lowercase().starts_with('y'))
    }

    fn prompt_alias(&mut self, default: &str) -> io::Result<String> {
        print!("Please specify a name for {default} in the system repository [{default}]: ");
        io::stdout().flush()?;

        let answer = read_line()?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
