use keymap_core::{
    Action, ActionInfo, BindingError, CaptureFilter, CaptureOutcome, KeyBindingStore, KeyId, Storage,
};

const MAX_OUTPUT_LINES: usize = 800;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Bindings,
    Output,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Browse,
    /// Waiting for the next key press to bind to this action
    Capture(Action),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PendingAction {
    Reassign { action: Action, key: KeyId, from: Action },
    RemoveLast { action: Action, key: KeyId },
    ResetAll,
}

pub struct App {
    pub focused_pane: Pane,
    pub mode: Mode,
    pub store: KeyBindingStore<Box<dyn Storage>>,
    pub filter: CaptureFilter,
    pub actions: Vec<ActionInfo>,
    pub action_index: usize,
    pub key_index: usize,
    pub storage_location: String,
    pub status: String,
    pub output: Vec<String>,
    pub output_scroll: usize,
    pub confirm_prompt: Option<String>,
    pub pending_action: Option<PendingAction>,
}

impl App {
    pub fn new(
        store: KeyBindingStore<Box<dyn Storage>>,
        filter: CaptureFilter,
        storage_location: impl Into<String>,
    ) -> Self {
        let actions = store.actions();
        Self {
            focused_pane: Pane::Bindings,
            mode: Mode::Browse,
            store,
            filter,
            actions,
            action_index: 0,
            key_index: 0,
            storage_location: storage_location.into(),
            status: "Ready".to_string(),
            output: vec![],
            output_scroll: 0,
            confirm_prompt: None,
            pending_action: None,
        }
    }

    pub fn selected_action(&self) -> Action {
        self.actions
            .get(self.action_index)
            .map(|info| info.action)
            .unwrap_or(Action::Up)
    }

    pub fn selected_key(&self) -> Option<&KeyId> {
        self.store.keys(self.selected_action()).get(self.key_index)
    }

    /// True when an action's keys differ from the catalog defaults
    pub fn is_customized(&self, action: Action) -> bool {
        self.store.keys(action) != action.defaults().as_slice()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn push_output<S: AsRef<str>>(&mut self, msg: S) {
        for line in msg.as_ref().lines() {
            self.output.push(line.to_string());
        }
        if self.output.len() > MAX_OUTPUT_LINES {
            let overflow = self.output.len() - MAX_OUTPUT_LINES;
            self.output.drain(0..overflow);
        }
        self.output_scroll = self.output.len().saturating_sub(1);
    }

    pub fn start_confirm<S: Into<String>>(&mut self, prompt: S, action: PendingAction) {
        self.confirm_prompt = Some(prompt.into());
        self.pending_action = Some(action);
    }

    pub fn clear_confirm(&mut self) {
        self.confirm_prompt = None;
        self.pending_action = None;
    }

    pub fn select_previous_action(&mut self) {
        if self.action_index > 0 {
            self.action_index -= 1;
            self.clamp_key_index();
        }
    }

    pub fn select_next_action(&mut self) {
        if self.action_index + 1 < self.actions.len() {
            self.action_index += 1;
            self.clamp_key_index();
        }
    }

    pub fn select_previous_key(&mut self) {
        self.key_index = self.key_index.saturating_sub(1);
    }

    pub fn select_next_key(&mut self) {
        let count = self.store.keys(self.selected_action()).len();
        if self.key_index + 1 < count {
            self.key_index += 1;
        }
    }

    fn clamp_key_index(&mut self) {
        let count = self.store.keys(self.selected_action()).len();
        self.key_index = self.key_index.min(count.saturating_sub(1));
    }

    pub fn start_capture(&mut self) {
        let action = self.selected_action();
        self.mode = Mode::Capture(action);
        self.set_status(format!(
            "Press a key for {} (Esc cancels)",
            action.label()
        ));
    }

    /// Feed one key press to an active capture
    pub fn handle_captured(&mut self, key: Option<KeyId>) {
        let Mode::Capture(action) = self.mode else {
            return;
        };
        let Some(key) = key else {
            self.set_status("That key has no identifier, try another");
            return;
        };

        match self.filter.classify(key.as_str()) {
            CaptureOutcome::Cancel => {
                self.mode = Mode::Browse;
                self.set_status("Cancelled");
            }
            CaptureOutcome::Ignore => {
                self.set_status(format!("{} is reserved, press another key", key.friendly_name()));
            }
            CaptureOutcome::Accept(key) => {
                self.mode = Mode::Browse;
                if let Err(e) = self.store.check_add(action.id(), key.as_str()) {
                    self.report_rejection(&key, &e);
                    return;
                }
                match self.store.lookup_action(key.as_str()) {
                    Some(from) if from != action => {
                        let prompt = format!(
                            "Key \"{}\" is mapped to \"{}\". Reassign to \"{}\"?",
                            key.friendly_name(),
                            from.label(),
                            action.label()
                        );
                        self.start_confirm(prompt, PendingAction::Reassign { action, key, from });
                    }
                    _ => self.apply_add(action, &key),
                }
            }
        }
    }

    fn apply_add(&mut self, action: Action, key: &KeyId) {
        match self.store.add_binding(action.id(), key.as_str()) {
            Ok(()) => {
                self.set_status(format!("Bound {} to {}", key.friendly_name(), action.label()));
                self.push_output(format!("+ {} -> {}", key, action.id()));
                if let Some(index) = self.store.keys(action).iter().position(|k| k == key) {
                    if action == self.selected_action() {
                        self.key_index = index;
                    }
                }
            }
            Err(e) => self.report_rejection(key, &e),
        }
        self.clamp_key_index();
    }

    fn report_rejection(&mut self, key: &KeyId, error: &BindingError) {
        let status = match error {
            BindingError::WouldEmpty { action } => format!(
                "Cannot take {}: {} would be left with no keys",
                key.friendly_name(),
                action.label()
            ),
            BindingError::AlreadyBound { action, .. } => {
                format!("{} is already bound to {}", key.friendly_name(), action.label())
            }
            other => other.to_string(),
        };
        self.set_status(status);
        self.push_output(format!("! {}", error));
    }

    /// Remove the highlighted key, asking first if it is the action's last one
    pub fn remove_selected_key(&mut self) {
        let action = self.selected_action();
        let Some(key) = self.selected_key().cloned() else {
            return;
        };

        if self.store.keys(action).len() == 1 {
            let defaults = action
                .defaults()
                .iter()
                .map(KeyId::friendly_name)
                .collect::<Vec<_>>()
                .join(", ");
            self.start_confirm(
                format!("This is the last key. Removing it resets to defaults: {}. Continue?", defaults),
                PendingAction::RemoveLast { action, key },
            );
        } else {
            self.apply_remove(action, &key);
        }
    }

    fn apply_remove(&mut self, action: Action, key: &KeyId) {
        match self.store.remove_binding(action.id(), key.as_str()) {
            Ok(()) => {
                self.set_status(format!("Removed {} from {}", key.friendly_name(), action.label()));
                self.push_output(format!("- {} -> {}", key, action.id()));
            }
            Err(e) => {
                self.set_status(format!("Cannot remove {}: {}", key.friendly_name(), e));
                self.push_output(format!("! {}", e));
            }
        }
        self.clamp_key_index();
    }

    pub fn request_reset(&mut self) {
        self.start_confirm(
            "Reset all keyboard mappings to defaults? This removes all custom bindings.",
            PendingAction::ResetAll,
        );
    }

    pub fn run_pending(&mut self, pending: PendingAction) {
        match pending {
            PendingAction::Reassign { action, key, from } => {
                self.apply_add(action, &key);
                if self.store.lookup_action(key.as_str()) == Some(action) {
                    self.push_output(format!("  (taken from {})", from.id()));
                }
            }
            PendingAction::RemoveLast { action, key } => self.apply_remove(action, &key),
            PendingAction::ResetAll => {
                self.store.reset_to_defaults();
                self.key_index = 0;
                self.set_status("All mappings reset to defaults");
                self.push_output("* reset to defaults");
            }
        }
    }

    pub fn cycle_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Bindings => Pane::Output,
            Pane::Output => Pane::Bindings,
        };
    }
}
