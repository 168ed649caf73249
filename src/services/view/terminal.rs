use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::{ElementId, UiEvent, ViewPort};

const HELP: &str = "commands:
  set <field> <value>   fill an input (organizer, participants, start, end, note,
                        listPhone, adminPhone, ruleNoShowThreshold, ruleAdvanceHours,
                        ruleMaxDurationDays)
  <button>              click: create, list, markNoShow, resetNoShow, loadRules, saveRules
  show                  print current field values
  help                  this text
  quit                  leave";

#[derive(Debug, PartialEq)]
enum Command {
    Set(ElementId, String),
    Click(ElementId),
    Show,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match word {
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "show" => Command::Show,
        "set" => {
            let (field, value) = rest.trim_start().split_once(char::is_whitespace).unwrap_or((rest.trim(), ""));
            match ElementId::parse(field) {
                Some(id) if id.is_input() => Command::Set(id, value.to_string()),
                _ => Command::Invalid(format!("unknown field: {field}")),
            }
        }
        other => match ElementId::parse(other) {
            Some(id) if id.is_button() => Command::Click(id),
            _ => Command::Invalid(format!("unknown command: {other}")),
        },
    }
}

/// Line-oriented stand-in for the booking page.
pub struct TerminalView {
    fields: Mutex<HashMap<ElementId, String>>,
    lines: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(HashMap::new()),
            lines: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    fn show_fields(&self) {
        let fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
        for id in ElementId::ALL.iter().filter(|id| id.is_input()) {
            let value = fields.get(id).map(String::as_str).unwrap_or("");
            println!("  {:<20} {}", id.as_str(), value);
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewPort for TerminalView {
    fn read_field(&self, id: ElementId) -> String {
        self.fields
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    fn render_list(&self, id: ElementId, items: &[String]) {
        let mut out = format!("[{}]\n", id.as_str());
        for item in items {
            out.push_str(&format!("  - {item}\n"));
        }
        print!("{out}");
    }

    fn set_text(&self, id: ElementId, text: &str) {
        println!("[{}]\n{text}", id.as_str());
    }

    async fn next_event(&self) -> Option<UiEvent> {
        let mut lines = self.lines.lock().await;
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read from stdin");
                    return None;
                }
            };

            match parse_command(&line) {
                Command::Set(id, value) => {
                    self.fields
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .insert(id, value);
                }
                Command::Click(id) => return Some(UiEvent::Click(id)),
                Command::Show => self.show_fields(),
                Command::Help => println!("{HELP}"),
                Command::Quit => return None,
                Command::Empty => {}
                Command::Invalid(msg) => println!("{msg} (try `help`)"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_keeps_value_spaces() {
        assert_eq!(
            parse_command("set note  bring the projector"),
            Command::Set(ElementId::Note, " bring the projector".to_string())
        );
        assert_eq!(
            parse_command("set listPhone"),
            Command::Set(ElementId::ListPhone, String::new())
        );
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_command("create"), Command::Click(ElementId::Create));
        assert_eq!(parse_command("  list "), Command::Click(ElementId::List));
        assert_eq!(parse_command("saveRules"), Command::Click(ElementId::SaveRules));
    }

    #[test]
    fn test_parse_rejects_non_inputs_and_non_buttons() {
        assert!(matches!(parse_command("set users x"), Command::Invalid(_)));
        assert!(matches!(parse_command("organizer"), Command::Invalid(_)));
        assert!(matches!(parse_command("frobnicate"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("show"), Command::Show);
    }
}
