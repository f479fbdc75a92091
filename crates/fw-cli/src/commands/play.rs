use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use fw_story::{StoryConfig, StorySession};
use miette::IntoDiagnostic;

pub fn run(story: &Path, character: &Path, seed: u64, reroll: bool) -> miette::Result<()> {
    let bundle = super::load_bundle(story)?;
    let character = super::load_character(character)?;
    let config = StoryConfig::default()
        .with_seed(seed)
        .with_sticky_availability(!reroll);

    let mut session = StorySession::new(bundle, character, config).into_diagnostic()?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if let Some(title) = &session.current().title {
            println!("  {}", title.bold());
        }
        println!("{}\n", session.rendered_body());

        if session.is_ended() {
            println!("  {}", "The End.".bold());
            break;
        }

        let offered: Vec<(usize, String)> = session
            .offered_choices()
            .into_iter()
            .map(|(index, choice)| (index, choice.text.clone()))
            .collect();
        if offered.is_empty() {
            miette::bail!("no choices are open in scenario '{}'", session.current().id);
        }
        for (n, (_, text)) in offered.iter().enumerate() {
            println!("  {}. {text}", n + 1);
        }

        print!("> ");
        io::stdout().flush().into_diagnostic()?;

        line.clear();
        if reader.read_line(&mut line).into_diagnostic()? == 0 {
            break; // EOF
        }

        let picked = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| offered.get(n));
        let Some((index, _)) = picked else {
            println!(
                "{}\n",
                format!("Enter a number between 1 and {}.", offered.len()).yellow()
            );
            continue;
        };

        session.choose(*index).into_diagnostic()?;
    }

    println!("  Path: {}", session.history().join(" -> "));
    Ok(())
}
