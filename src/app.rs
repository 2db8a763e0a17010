//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::document::{DocumentRenderer, TypstRenderer};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, FieldEdit, FieldKind, PendingAction, Step};
use crate::submission::{SubmissionClientTrait, SubmissionPayload, WebhookClient};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    config: RegistrationConfig,
    client: Box<dyn SubmissionClientTrait>,
    renderer: Box<dyn DocumentRenderer>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App wired to the configured webhook and Typst binary
    pub fn new(config: RegistrationConfig) -> Result<Self> {
        let client = WebhookClient::new(config.webhook_url())?;
        let renderer = TypstRenderer::new(config.typst_binary());
        tracing::info!(webhook = %client.url(), "registration wizard ready");
        Ok(Self::with_services(
            config,
            Box::new(client),
            Box::new(renderer),
        ))
    }

    pub fn with_services(
        config: RegistrationConfig,
        client: Box<dyn SubmissionClientTrait>,
        renderer: Box<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            state: AppState::new(),
            config,
            client,
            renderer,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message);
    }

    /// Whether the event loop has work to run before reading more input
    pub fn has_pending(&self) -> bool {
        self.state.pending.is_some()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Nothing is editable while a submission is in flight
        if self.state.wizard.is_submitting() {
            return;
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) || key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.handle_shortcut(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                if let Some(n) = c.to_digit(10) {
                    self.state.go_to_step(n as usize);
                }
            }
            return;
        }

        let kind = self.state.active_field_id().map(|f| f.kind());
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::PageDown => self.state.next_step(),
            KeyCode::PageUp => self.state.prev_step(),
            KeyCode::Esc => self.state.status_message = None,
            KeyCode::Left => self.edit(FieldEdit::Cycle { forward: false }),
            KeyCode::Right => self.edit(FieldEdit::Cycle { forward: true }),
            KeyCode::Backspace => self.edit(FieldEdit::Backspace),
            KeyCode::Delete => self.edit(FieldEdit::Clear),
            KeyCode::Enter => match kind {
                // Single-line inputs advance like a form would
                Some(k) if k.accepts_text() && k != FieldKind::Multiline => {
                    self.state.next_field()
                }
                _ => self.edit(FieldEdit::Activate),
            },
            KeyCode::Char(' ')
                if matches!(
                    kind,
                    Some(FieldKind::Toggle | FieldKind::Action | FieldKind::Choice)
                ) =>
            {
                self.edit(FieldEdit::Activate)
            }
            KeyCode::Char(c) => self.edit(FieldEdit::Insert(c)),
            _ => {}
        }
    }

    /// Handle mouse input. The wheel moves the field focus, or scrolls the
    /// summary on the review step.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.has_errors() || self.state.wizard.is_submitting() {
            return;
        }
        let on_review = self.state.wizard.step() == Step::Review;
        match mouse.kind {
            MouseEventKind::ScrollDown if on_review => self.state.scroll_review(true),
            MouseEventKind::ScrollUp if on_review => self.state.scroll_review(false),
            MouseEventKind::ScrollDown => self.state.next_field(),
            MouseEventKind::ScrollUp => self.state.prev_field(),
            _ => {}
        }
    }

    fn handle_shortcut(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.state.pending = Some(PendingAction::SaveDocument),
            KeyCode::Char('n') => self.state.next_step(),
            KeyCode::Char('b') => self.state.prev_step(),
            KeyCode::Char('u') => self.edit(FieldEdit::Clear),
            _ => {}
        }
    }

    fn edit(&mut self, edit: FieldEdit) {
        self.state.edit_active_field(edit);
    }

    /// Run work queued by the last key press
    pub async fn process_pending(&mut self) {
        match self.state.pending.take() {
            Some(PendingAction::SaveDocument) => self.save_document().await,
            Some(PendingAction::Submit) => self.submit().await,
            None => {}
        }
    }

    /// Render the summary PDF into the output directory
    async fn save_document(&mut self) {
        let output_dir = self.config.output_dir();
        let saved = self
            .renderer
            .render(self.state.wizard.form())
            .await
            .and_then(|doc| doc.save_to(&output_dir));
        match saved {
            Ok(path) => {
                tracing::info!(path = %path.display(), "saved registration document");
                self.state
                    .set_status(format!("Saved PDF to {}", path.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save registration document");
                self.push_error(format!("Failed to save PDF: {e}"));
            }
        }
    }

    /// Render the PDF and POST everything to the webhook, once
    async fn submit(&mut self) {
        let form = self.state.wizard.form();
        let payload = SubmissionPayload::from_form(form);
        let rendered = self.renderer.render(form).await;

        let document = match rendered {
            Ok(doc) => {
                if let Err(e) = doc.save_to(&self.config.output_dir()) {
                    tracing::warn!(error = %e, "could not keep a local copy of the PDF");
                }
                Some(doc)
            }
            Err(e) => {
                tracing::warn!(error = %e, "submitting without the registration document");
                self.state
                    .set_status(format!("PDF not attached: {e}"));
                None
            }
        };

        let result = self.client.submit(payload, document).await;
        self.state.wizard.end_submit();

        match result {
            Ok(()) => {
                self.state.reset();
                self.state
                    .set_status("Registration submitted successfully! / பதிவு சமர்ப்பிக்கப்பட்டது");
            }
            Err(e) => {
                tracing::error!(error = %e, "registration submission failed");
                self.push_error(format!(
                    "Submission failed: {e}\nYour answers are kept. Try submitting again."
                ));
            }
        }
    }
}
