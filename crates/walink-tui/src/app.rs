use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use walink_core::{generate, normalize_pasted, preview, Feedback, WhatsappLink};
use walink_desktop::CopyOutcome;

use crate::actions::Action;

#[derive(Debug, Clone)]
pub struct App {
    pub input: String,
    pub result: Option<WhatsappLink>,
    pub message: Option<Feedback>,
    /// Set when no clipboard accepted the link; the full URL is shown for selection.
    pub manual_copy: bool,
    pub live_preview: bool,
    pub show_help: bool,
    pub should_quit: bool,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(live_preview: bool) -> Self {
        Self {
            input: String::new(),
            result: None,
            message: None,
            manual_copy: false,
            live_preview,
            show_help: false,
            should_quit: false,
            actions: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_message(&mut self, feedback: Feedback) {
        self.message = Some(feedback);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some(Feedback::error(message));
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.refresh_preview();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Enter => self.generate(),
            KeyCode::Char('y') if ctrl => self.request_copy(),
            KeyCode::Char('o') if ctrl => self.request_open(),
            KeyCode::Char('r') if ctrl => self.reset(),
            _ => {
                if apply_text_input(&mut self.input, key) {
                    self.refresh_preview();
                }
            }
        }
    }

    /// Pasted text is merged into the field and whitespace-normalized as a whole.
    pub fn handle_paste(&mut self, text: &str) {
        self.input.push_str(text);
        self.input = normalize_pasted(&self.input);
        self.refresh_preview();
    }

    pub fn generate(&mut self) {
        let result = generate(&self.input);
        self.message = Some(Feedback::for_result(&result));
        self.manual_copy = false;
        self.result = result.ok();
    }

    pub fn request_copy(&mut self) {
        match &self.result {
            Some(link) => {
                let text = link.link.clone();
                self.enqueue(Action::Copy(text));
            }
            None => self.set_message(Feedback::nothing_to_copy()),
        }
    }

    pub fn request_open(&mut self) {
        match &self.result {
            Some(link) => {
                let text = link.link.clone();
                self.enqueue(Action::Open(text));
            }
            None => self.set_message(Feedback::nothing_to_open()),
        }
    }

    pub fn apply_copy_outcome(&mut self, outcome: &CopyOutcome) {
        if outcome.is_copied() {
            self.manual_copy = false;
            self.set_message(Feedback::copied());
        } else {
            self.manual_copy = true;
            self.set_message(Feedback::copy_failed());
        }
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
        self.manual_copy = false;
        self.clear_message();
    }

    fn refresh_preview(&mut self) {
        if !self.live_preview {
            return;
        }
        match preview(&self.input) {
            Some(display) => self.set_message(Feedback::preview(&display)),
            None => self.clear_message(),
        }
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
            true
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
            true
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            target.push(ch);
            true
        }
        KeyCode::Backspace => target.pop().is_some(),
        _ => false,
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}
