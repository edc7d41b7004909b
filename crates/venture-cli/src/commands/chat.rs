//! Interactive assistant session.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;
use venture_core::chat::{ChatEntry, Speaker};
use venture_core::config::VentureConfig;
use venture_core::extraction::{Role, Suggestions};
use venture_core::profile::{InvestmentHorizon, ProfileField, RiskTolerance};
use venture_core::state::{Action, Outcome, Store};

const COMMANDS: &[&str] = &[
    "/go", "/persona", "/role", "/autofill", "/apply", "/dismiss", "/set", "/prefs", "/profile",
    "/state", "/help", "/quit",
];

const HELP: &str = "\
Plain text is sent to the assistant. Commands:
  /go <screen> [tab]        switch screen (e.g. /go profile preferences)
  /persona <id>             talk to a specific persona
  /role <founder|investor|expert>
  /autofill <text>          extract profile suggestions without chatting
  /apply | /dismiss         confirm or discard pending suggestions
  /set <field> [value]      edit a profile field (no value clears it)
  /prefs risk <level> | horizon <term> | industry <name> | region <name>
  /profile | /state         show the profile or the full session as JSON
  /quit
Replies arrive after a short delay; press Enter to show any that landed.";

/// A parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Dispatch(Action),
    ShowProfile,
    ShowState,
    Help,
    Quit,
}

/// Rustyline helper: completes commands and their first argument (screens,
/// persona ids, roles, profile fields) and hints the first candidate.
struct CliHelper {
    screens: Vec<String>,
    personas: Vec<String>,
    roles: Vec<String>,
    fields: Vec<String>,
}

impl CliHelper {
    fn new(store: &Store) -> Self {
        let catalog = store.router().catalog();
        Self {
            screens: catalog.screens().into_iter().map(str::to_string).collect(),
            personas: catalog.personas().iter().map(|p| p.id.clone()).collect(),
            roles: Role::iter().map(|r| r.to_string()).collect(),
            fields: ProfileField::iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Returns where the word under the cursor starts and what it may become.
    fn candidates<'a>(&'a self, line: &'a str) -> (usize, Vec<&'a str>) {
        let (command, word) = match line.split_once(' ') {
            None if line.starts_with('/') => ("", line),
            None => return (0, Vec::new()),
            Some((command, rest)) => (command, rest.trim_start()),
        };
        if word.contains(char::is_whitespace) {
            return (0, Vec::new());
        }

        let pool: Vec<&str> = match command {
            "" => COMMANDS.to_vec(),
            "/go" => self.screens.iter().map(String::as_str).collect(),
            "/persona" => self.personas.iter().map(String::as_str).collect(),
            "/role" => self.roles.iter().map(String::as_str).collect(),
            "/set" => self.fields.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        };
        let start = line.len() - word.len();
        let matches = pool.into_iter().filter(|c| c.starts_with(word)).collect();
        (start, matches)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|c| Pair {
                display: c.to_string(),
                replacement: c.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let typed = &line[..pos];
        let (start, matches) = self.candidates(typed);
        let word = &typed[start..];
        matches
            .into_iter()
            .find(|c| c.len() > word.len())
            .map(|c| c[word.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn parse_line(line: &str) -> std::result::Result<ReplCommand, String> {
    let line = line.trim();
    if !line.starts_with('/') {
        return Ok(ReplCommand::Dispatch(Action::SendMessage {
            text: line.to_string(),
        }));
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let command = match command {
        "/quit" | "/exit" => ReplCommand::Quit,
        "/help" => ReplCommand::Help,
        "/profile" => ReplCommand::ShowProfile,
        "/state" => ReplCommand::ShowState,
        "/apply" => ReplCommand::Dispatch(Action::ConfirmSuggestions),
        "/dismiss" => ReplCommand::Dispatch(Action::DismissSuggestions),
        "/go" => {
            let mut parts = rest.split_whitespace();
            let screen = parts.next().ok_or("Usage: /go <screen> [tab]")?;
            ReplCommand::Dispatch(Action::Navigate {
                screen: screen.to_string(),
                tab: parts.next().map(str::to_string),
            })
        }
        "/persona" => {
            if rest.is_empty() {
                return Err("Usage: /persona <id>".to_string());
            }
            ReplCommand::Dispatch(Action::SwitchPersona {
                persona_id: rest.to_string(),
            })
        }
        "/role" => {
            let role: Role = rest
                .parse()
                .map_err(|_| format!("Unknown role '{}'", rest))?;
            ReplCommand::Dispatch(Action::SetRole { role })
        }
        "/autofill" => {
            if rest.is_empty() {
                return Err("Usage: /autofill <text>".to_string());
            }
            ReplCommand::Dispatch(Action::RequestAutofill {
                text: rest.to_string(),
            })
        }
        "/set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            let field: ProfileField = field
                .parse()
                .map_err(|_| format!("Unknown profile field '{}'", field))?;
            ReplCommand::Dispatch(Action::EditProfileField {
                field,
                value: value.to_string(),
            })
        }
        "/prefs" => parse_prefs(rest)?,
        other => return Err(format!("Unknown command '{}'. Type /help.", other)),
    };

    Ok(command)
}

fn parse_prefs(rest: &str) -> std::result::Result<ReplCommand, String> {
    let (kind, value) = rest
        .split_once(char::is_whitespace)
        .map(|(k, v)| (k, v.trim()))
        .ok_or("Usage: /prefs risk|horizon|industry|region <value>")?;

    let action = match kind {
        "risk" => Action::SetRiskTolerance {
            risk_tolerance: Some(
                value
                    .parse::<RiskTolerance>()
                    .map_err(|_| format!("Unknown risk tolerance '{}'", value))?,
            ),
        },
        "horizon" => Action::SetHorizon {
            horizon: Some(
                value
                    .parse::<InvestmentHorizon>()
                    .map_err(|_| format!("Unknown horizon '{}'", value))?,
            ),
        },
        "industry" => Action::TogglePreferredIndustry {
            industry: value.to_string(),
        },
        "region" => Action::ToggleGeographicFocus {
            region: value.to_string(),
        },
        other => return Err(format!("Unknown preference '{}'", other)),
    };
    Ok(ReplCommand::Dispatch(action))
}

fn print_entry(store: &Store, entry: &ChatEntry) {
    match entry.speaker {
        Speaker::User => println!("{}", format!("> {}", entry.text).green()),
        Speaker::Assistant => {
            let name = entry
                .persona_id
                .as_deref()
                .and_then(|id| store.router().catalog().get(id))
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Assistant".to_string());
            println!("{}", format!("[{}]", name).bright_magenta());
            for line in entry.text.lines() {
                println!("{}", line.bright_blue());
            }
            println!();
        }
    }
}

/// Prints assistant entries appended since `shown`; user entries were
/// already echoed by the terminal.
fn print_new_entries(store: &Store, shown: &mut usize) {
    let transcript = store.transcript();
    for entry in transcript.iter().skip(*shown) {
        if entry.is_assistant() {
            print_entry(store, entry);
        }
    }
    *shown = transcript.len();
}

fn print_profile(store: &Store) {
    let profile = &store.state().profile;
    if profile.is_empty() {
        println!("{}", "Profile is empty.".bright_black());
    }
    for (field, value) in profile.iter() {
        println!("{}: {}", field.label().bright_cyan(), value);
    }
    if let Some(pending) = &store.state().pending_suggestions {
        print_pending(pending);
    }
}

fn print_pending(pending: &Suggestions) {
    println!("{}", "Pending suggestions (/apply or /dismiss):".bright_yellow());
    for (field, value) in pending.iter() {
        println!("  {}", format!("{}: {}", field.label(), value).yellow());
    }
}

/// What `/autofill` tells the user.
#[derive(Debug, PartialEq, Eq)]
enum AutofillFeedback<'a> {
    Suggested(&'a Suggestions),
    NothingRecognized { stale_pending: bool },
}

fn autofill_feedback<'a>(outcome: &Outcome, pending: Option<&'a Suggestions>) -> AutofillFeedback<'a> {
    match pending {
        Some(pending) if !outcome.suggested_fields.is_empty() => AutofillFeedback::Suggested(pending),
        _ => AutofillFeedback::NothingRecognized {
            stale_pending: pending.is_some(),
        },
    }
}

fn report_autofill(store: &Store, outcome: &Outcome) {
    match autofill_feedback(outcome, store.state().pending_suggestions.as_ref()) {
        AutofillFeedback::Suggested(pending) => print_pending(pending),
        AutofillFeedback::NothingRecognized { stale_pending } => {
            println!("{}", "Nothing in that text matched a profile field.".bright_black());
            if stale_pending {
                println!(
                    "{}",
                    "Earlier suggestions are still pending; see /profile.".bright_black()
                );
            }
        }
    }
}

/// Runs the REPL until `/quit` or end of input.
pub async fn run(config: &VentureConfig, role: Role, screen: Option<String>) -> Result<()> {
    let mut store = Store::from_config(config)?;
    store.dispatch(Action::SetRole { role })?;
    if let Some(screen) = screen {
        store.dispatch(Action::Navigate { screen, tab: None })?;
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(&store)));

    println!("{}", "=== Venture Desk ===".bright_magenta().bold());
    println!("{}", "Type /help for commands, /quit to exit.".bright_black());
    println!();

    let mut shown = 0;

    loop {
        // Replies land in the background; show whatever arrived since the last prompt.
        print_new_entries(&store, &mut shown);

        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(trimmed) {
                    tracing::debug!("History not updated: {}", e);
                }

                let command = match parse_line(trimmed) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                match command {
                    ReplCommand::Quit => break,
                    ReplCommand::Help => println!("{}", HELP.bright_black()),
                    ReplCommand::ShowProfile => print_profile(&store),
                    ReplCommand::ShowState => {
                        println!("{}", serde_json::to_string_pretty(&store.snapshot())?)
                    }
                    ReplCommand::Dispatch(action) => {
                        let is_autofill = matches!(action, Action::RequestAutofill { .. });
                        match store.dispatch(action) {
                            Ok(outcome) => {
                                // Greetings appended by this action come before any feedback.
                                print_new_entries(&store, &mut shown);
                                if is_autofill {
                                    report_autofill(&store, &outcome);
                                }
                                if !outcome.applied_fields.is_empty() {
                                    println!(
                                        "{}",
                                        format!(
                                            "Updated {} profile field(s).",
                                            outcome.applied_fields.len()
                                        )
                                        .bright_green()
                                    );
                                }
                            }
                            Err(e) => println!("{}", format!("Error: {}", e).red()),
                        }
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    store.dispatch(Action::EndSession)?;
    store.settle().await;
    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            parse_line("hello there").unwrap(),
            ReplCommand::Dispatch(Action::SendMessage {
                text: "hello there".to_string()
            })
        );
    }

    #[test]
    fn test_go_with_tab() {
        assert_eq!(
            parse_line("/go profile preferences").unwrap(),
            ReplCommand::Dispatch(Action::Navigate {
                screen: "profile".to_string(),
                tab: Some("preferences".to_string()),
            })
        );
        assert!(parse_line("/go").is_err());
    }

    #[test]
    fn test_set_field_with_spaces_in_value() {
        assert_eq!(
            parse_line("/set fullName Layla Haddad").unwrap(),
            ReplCommand::Dispatch(Action::EditProfileField {
                field: ProfileField::FullName,
                value: "Layla Haddad".to_string(),
            })
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        assert_eq!(
            parse_line("/set city").unwrap(),
            ReplCommand::Dispatch(Action::EditProfileField {
                field: ProfileField::City,
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_prefs_commands() {
        assert_eq!(
            parse_line("/prefs risk aggressive").unwrap(),
            ReplCommand::Dispatch(Action::SetRiskTolerance {
                risk_tolerance: Some(RiskTolerance::Aggressive)
            })
        );
        assert!(parse_line("/prefs horizon forever").is_err());
        assert!(parse_line("/prefs").is_err());
    }

    fn helper() -> CliHelper {
        let store = Store::from_config(&VentureConfig::default()).unwrap();
        CliHelper::new(&store)
    }

    #[test]
    fn test_completes_command_names() {
        let helper = helper();
        let (start, matches) = helper.candidates("/pr");
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["/prefs", "/profile"]);
    }

    #[test]
    fn test_completes_screens_after_go() {
        let helper = helper();
        let (start, matches) = helper.candidates("/go mes");
        assert_eq!(start, 4);
        assert_eq!(matches, vec!["messaging"]);
    }

    #[test]
    fn test_completes_persona_ids_and_fields() {
        let helper = helper();
        assert_eq!(helper.candidates("/persona deal").1, vec!["deal-analyst"]);
        assert_eq!(helper.candidates("/set yea").1, vec!["yearsExperience"]);
        assert_eq!(helper.candidates("/role inv").1, vec!["investor"]);
    }

    #[test]
    fn test_no_completion_for_free_text_or_later_arguments() {
        let helper = helper();
        assert!(helper.candidates("hello the").1.is_empty());
        assert!(helper.candidates("/go profile pre").1.is_empty());
        assert!(helper.candidates("/apply x").1.is_empty());
    }

    fn autofill(store: &mut Store, text: &str) -> Outcome {
        store
            .dispatch(Action::RequestAutofill {
                text: text.to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_autofill_feedback_lists_recognized_fields() {
        let mut store = Store::from_config(&VentureConfig::default()).unwrap();
        let outcome = autofill(&mut store, "fintech founder in dubai");

        match autofill_feedback(&outcome, store.state().pending_suggestions.as_ref()) {
            AutofillFeedback::Suggested(pending) => {
                assert_eq!(pending.get(ProfileField::City), Some("Dubai"));
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_autofill_feedback_when_nothing_matches() {
        let mut store = Store::from_config(&VentureConfig::default()).unwrap();
        let outcome = autofill(&mut store, "just saying hello");
        assert_eq!(
            autofill_feedback(&outcome, store.state().pending_suggestions.as_ref()),
            AutofillFeedback::NothingRecognized {
                stale_pending: false
            }
        );

        autofill(&mut store, "based in cairo");
        let outcome = autofill(&mut store, "nothing useful");
        assert_eq!(
            autofill_feedback(&outcome, store.state().pending_suggestions.as_ref()),
            AutofillFeedback::NothingRecognized {
                stale_pending: true
            }
        );
    }

    #[test]
    fn test_unknown_command_and_role() {
        assert!(parse_line("/dance").is_err());
        assert!(parse_line("/role astronaut").is_err());
        assert_eq!(parse_line("/exit").unwrap(), ReplCommand::Quit);
    }
}
