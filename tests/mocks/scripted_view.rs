use contact_book::View;
use std::collections::VecDeque;

/// One thing the REPL asked the view to do.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Message(String),
    Prompt(String),
    Contacts(String),
    Help(String),
}

/// View that replays queued input lines and records everything shown.
///
/// When the script runs out, `get_input` reports end of input.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedView {
    input: VecDeque<String>,
    events: Vec<ViewEvent>,
}

#[allow(dead_code)]
impl ScriptedView {
    /// Create a view that will feed `lines` one by one.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            events: Vec::new(),
        }
    }

    /// Every recorded event, in order.
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Only the texts passed to `show_message`.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of prompts issued.
    pub fn prompt_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Prompt(_)))
            .count()
    }
}

impl View for ScriptedView {
    fn show_message(&mut self, message: &str) {
        self.events.push(ViewEvent::Message(message.to_string()));
    }

    fn get_input(&mut self, prompt: &str) -> Option<String> {
        self.events.push(ViewEvent::Prompt(prompt.to_string()));
        self.input.pop_front()
    }

    fn display_contacts(&mut self, contacts: &str) {
        self.events.push(ViewEvent::Contacts(contacts.to_string()));
    }

    fn display_help(&mut self, commands: &str) {
        self.events.push(ViewEvent::Help(commands.to_string()));
    }
}
