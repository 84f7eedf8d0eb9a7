use crate::domain::model::FieldId;
use crate::domain::ports::FormSurface;

/// Form surface for the one-shot CLI: field values come from the command
/// line, and the UI effects the workflow would apply to a page become
/// terminal output.
#[derive(Debug, Clone)]
pub struct ConsoleSurface {
    first_name: String,
    email: String,
    goal: String,
}

impl ConsoleSurface {
    pub fn new(first_name: String, email: String, goal: String) -> Self {
        Self {
            first_name,
            email,
            goal,
        }
    }
}

impl FormSurface for ConsoleSurface {
    fn field_value(&self, field: FieldId) -> String {
        match field {
            FieldId::FirstName => self.first_name.clone(),
            FieldId::Email => self.email.clone(),
            FieldId::Goal => self.goal.clone(),
        }
    }

    fn mark_invalid(&self, field: FieldId) {
        match field {
            FieldId::FirstName => eprintln!("⚠️  Please enter your first name"),
            FieldId::Email => eprintln!("⚠️  Please enter a valid email address"),
            FieldId::Goal => {}
        }
    }

    fn clear_invalid(&self, field: FieldId) {
        tracing::debug!("Clearing invalid styling on {:?}", field);
    }

    fn focus(&self, field: FieldId) {
        tracing::debug!("Focus moves to {:?}", field);
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("⏳ Adding you to the list...");
        } else {
            tracing::debug!("Loading state cleared");
        }
    }

    fn disable_all(&self) {
        tracing::debug!("Form controls disabled");
    }

    fn show_success(&self) {
        println!("✅ You're on the list! We'll be in touch soon.");
    }

    fn show_error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    fn hide_error(&self) {
        tracing::debug!("Error banner hidden");
    }

    fn scroll_to_success(&self) {
        tracing::debug!("Success message brought into view");
    }
}
