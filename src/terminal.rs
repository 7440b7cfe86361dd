//! Command dispatch for the easter-egg terminal.
//!
//! A fixed table keyed by the trimmed, lowercased input line. `COMMANDS`
//! declaration order is the order `help` lists them in. Output text for
//! `skills`/`projects`/`contact` is derived from the loaded portfolio
//! document rather than duplicated here.

use crate::portfolio::PortfolioData;

pub const PROMPT: &str = "visitor@portfolio:~$";

/// Known commands, in `help` listing order.
pub const COMMANDS: &[&str] = &["skills", "projects", "contact", "joke", "clear", "help", "exit"];

pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "Why do Java developers wear glasses? Because they can't C# ! 👓",
    "A SQL query goes into a bar, walks up to two tables and asks... \"Can I join you?\" 🍺",
];

/// What the terminal should do with a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Append this output line, then a fresh input line.
    Output(String),
    /// Reset the transcript to a single empty input line.
    Clear,
    /// Hide the terminal without appending anything.
    Exit,
}

/// Dispatch one input line. `pick` selects the joke (the caller supplies
/// the randomness). Blank input produces no reply at all.
pub fn dispatch(input: &str, data: &PortfolioData, pick: usize) -> Option<Reply> {
    let typed = input.trim();
    if typed.is_empty() {
        return None;
    }
    let reply = match typed.to_lowercase().as_str() {
        "skills" => Reply::Output(data.skills.technical_skills.join(", ")),
        "projects" => Reply::Output(
            data.projects
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        "contact" => Reply::Output(format!(
            "Email: {} | Phone: {}",
            data.personal_info.contact.email, data.personal_info.contact.phone
        )),
        "joke" => Reply::Output(JOKES[pick % JOKES.len()].to_string()),
        "clear" => Reply::Clear,
        "help" => Reply::Output(format!("Available commands: {}", COMMANDS.join(", "))),
        "exit" => Reply::Exit,
        _ => Reply::Output(format!(
            "Command not found: {typed}. Type 'help' for available commands."
        )),
    };
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioData;

    fn data() -> PortfolioData {
        serde_json::from_str(
            r#"{
                "personal_info": {
                    "name": "Ada Lovelace",
                    "title": "Engine Programmer",
                    "contact": { "email": "ada@example.com", "phone": "+1 555 0100" }
                },
                "skills": { "technical_skills": ["Flutter", "Dart"] },
                "projects": [ { "name": "Lifeline" }, { "name": "Bank Dash" } ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn commands_derive_from_loaded_data() {
        let d = data();
        assert_eq!(
            dispatch("skills", &d, 0),
            Some(Reply::Output("Flutter, Dart".into()))
        );
        assert_eq!(
            dispatch("projects", &d, 0),
            Some(Reply::Output("Lifeline, Bank Dash".into()))
        );
        assert_eq!(
            dispatch("contact", &d, 0),
            Some(Reply::Output("Email: ada@example.com | Phone: +1 555 0100".into()))
        );
    }

    #[test]
    fn input_is_trimmed_and_case_insensitive() {
        let d = data();
        assert_eq!(dispatch("  HELP  ", &d, 0), dispatch("help", &d, 0));
        assert_eq!(dispatch("Exit", &d, 0), Some(Reply::Exit));
        assert_eq!(dispatch("CLEAR", &d, 0), Some(Reply::Clear));
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(dispatch("   ", &data(), 0), None);
        assert_eq!(dispatch("", &data(), 0), None);
    }

    #[test]
    fn unknown_command_echoes_typed_text() {
        let d = data();
        match dispatch("  FroBnIcate ", &d, 0) {
            Some(Reply::Output(msg)) => {
                assert_eq!(
                    msg,
                    "Command not found: FroBnIcate. Type 'help' for available commands."
                );
            }
            other => panic!("unexpected reply: {other:?}"),
        }
        // Dispatch state is a constant table; an unknown command changes
        // nothing, so a known command still works afterwards.
        assert_eq!(dispatch("exit", &d, 0), Some(Reply::Exit));
    }

    #[test]
    fn help_lists_commands_in_declaration_order() {
        match dispatch("help", &data(), 0).unwrap() {
            Reply::Output(msg) => assert_eq!(
                msg,
                "Available commands: skills, projects, contact, joke, clear, help, exit"
            ),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn joke_pick_wraps_over_the_fixed_set() {
        let d = data();
        assert_eq!(
            dispatch("joke", &d, 0),
            dispatch("joke", &d, JOKES.len())
        );
    }
}
