//! Player setup form shown over the board.

use crossterm::event::KeyCode;
use tictac_engine::{GameEngine, PlayerId, PlayerSetup};

/// Labels for the form fields, in focus order.
pub const FIELD_LABELS: [&str; 4] = [
    "Player 1 name",
    "Player 1 symbol",
    "Player 2 name",
    "Player 2 symbol",
];

/// What the form wants after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Still editing.
    Editing,
    /// Apply the entered players.
    Submit,
    /// Close without changes.
    Cancel,
}

/// Editable names and symbols for both seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    fields: [String; 4],
    colors: [String; 2],
    focus: usize,
    error: Option<String>,
}

impl SetupForm {
    /// Prefills the form with the engine's current players.
    pub fn from_engine(engine: &GameEngine) -> Self {
        let [one, two] = engine.players();
        Self {
            fields: [
                one.name().clone(),
                one.symbol().clone(),
                two.name().clone(),
                two.symbol().clone(),
            ],
            colors: [one.color().clone(), two.color().clone()],
            focus: 0,
            error: None,
        }
    }

    /// Applies a key to the focused field.
    pub fn handle_key(&mut self, key: KeyCode) -> FormAction {
        match key {
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FIELD_LABELS.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELD_LABELS.len() - 1) % FIELD_LABELS.len()
            }
            KeyCode::Backspace => {
                self.fields[self.focus].pop();
            }
            KeyCode::Char(c) => self.fields[self.focus].push(c),
            _ => {}
        }
        FormAction::Editing
    }

    /// The entered players, seat one first. Blank fields are left for the
    /// engine to fill from the seat defaults.
    pub fn setups(&self) -> [PlayerSetup; 2] {
        [PlayerId::One, PlayerId::Two].map(|seat| {
            let base = seat.index() * 2;
            PlayerSetup::new(
                &self.fields[base],
                &self.fields[base + 1],
                &self.colors[seat.index()],
            )
        })
    }

    /// Field values in focus order.
    pub fn fields(&self) -> &[String; 4] {
        &self.fields
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Why the last submit was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records a rejected submit.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = SetupForm::from_engine(&GameEngine::default());
        for _ in 0.."Player X".len() {
            form.handle_key(KeyCode::Backspace);
        }
        for c in "Ann".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        assert_eq!(form.setups()[0].name, "Ann");
        assert_eq!(form.setups()[1].name, "Player O");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = SetupForm::from_engine(&GameEngine::default());
        form.handle_key(KeyCode::BackTab);
        assert_eq!(form.focus(), 3);
        form.handle_key(KeyCode::Tab);
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_enter_and_esc() {
        let mut form = SetupForm::from_engine(&GameEngine::default());
        assert_eq!(form.handle_key(KeyCode::Enter), FormAction::Submit);
        assert_eq!(form.handle_key(KeyCode::Esc), FormAction::Cancel);
    }
}
