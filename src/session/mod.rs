use uuid::Uuid;

use crate::api::{ApiClient, ChatRequest};
use crate::catalog::MessageCatalog;
use crate::models::{ChatMessage, Offer};

/// How many prior messages accompany each request as short-term context for
/// the backend. The message being sent is never part of the window.
pub const HISTORY_WINDOW: usize = 5;

/// In-memory conversation state for one chat session with the travel agent.
///
/// Owns the transcript, the backend's conversation identifier, the latest
/// offer set, and transient request status. Mutated only through
/// [`append_message`](Self::append_message),
/// [`send_user_message`](Self::send_user_message) and
/// [`clear`](Self::clear). Nothing is persisted; the session dies with the
/// process.
///
/// Failures inside `send_user_message` never reach the caller: they land in
/// [`error`](Self::error) and as a canned assistant reply, so the transcript
/// always advances by a user/assistant pair per send.
pub struct ChatSession {
    client: ApiClient,
    catalog: MessageCatalog,
    messages: Vec<ChatMessage>,
    conversation_id: Option<String>,
    offers: Vec<Offer>,
    suggested_actions: Vec<String>,
    needs_clarification: bool,
    missing_fields: Vec<String>,
    is_loading: bool,
    error: Option<String>,
}

impl ChatSession {
    pub fn new(client: ApiClient, catalog: MessageCatalog) -> Self {
        Self {
            client,
            catalog,
            messages: Vec::new(),
            conversation_id: None,
            offers: Vec::new(),
            suggested_actions: Vec::new(),
            needs_clarification: false,
            missing_fields: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn suggested_actions(&self) -> &[String] {
        &self.suggested_actions
    }

    /// Whether the last response asked for more details, and which fields
    /// the backend said were missing. Transient per turn.
    pub fn needs_clarification(&self) -> bool {
        self.needs_clarification
    }

    pub fn missing_fields(&self) -> &[String] {
        &self.missing_fields
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append a message to the transcript. No deduplication, no size cap.
    pub fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Send one user turn to the backend and fold the response into the
    /// session. Exactly one outbound request per call; the transcript grows
    /// by two messages whether or not the request succeeds.
    pub async fn send_user_message(&mut self, content: &str) {
        self.append_message(ChatMessage::user(content));
        self.is_loading = true;
        self.error = None;
        self.needs_clarification = false;
        self.missing_fields.clear();

        let request = ChatRequest {
            message: content.to_string(),
            conversation_id: self.conversation_id.clone(),
            history: self.history_window(),
            trace_id: Some(Uuid::new_v4().to_string()),
        };

        match self.client.chat(&request).await {
            Ok(response) => {
                self.append_message(ChatMessage::assistant(response.message));

                // Every response may update the conversation id, not just
                // the first one.
                if let Some(id) = response.conversation_id {
                    self.conversation_id = Some(id);
                }

                // Offers are replaced wholesale, never merged. A response
                // without an offers field leaves the previous set alone.
                if let Some(offers) = response.offers {
                    self.offers = offers;
                }
                if let Some(actions) = response.suggested_actions {
                    self.suggested_actions = actions;
                }
                self.needs_clarification = response.needs_clarification;
                if let Some(fields) = response.missing_fields {
                    self.missing_fields = fields;
                }
            }
            Err(e) => {
                let text = e.to_string();
                self.error = Some(if text.is_empty() {
                    self.catalog.send_failed().to_string()
                } else {
                    text
                });
                self.append_message(ChatMessage::assistant(self.catalog.retry_reply()));
            }
        }

        self.is_loading = false;
    }

    /// Reset to an empty session. `is_loading` is deliberately left alone;
    /// it tracks the transport, not the transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.offers.clear();
        self.suggested_actions.clear();
        self.needs_clarification = false;
        self.missing_fields.clear();
        self.error = None;
    }

    /// The last `HISTORY_WINDOW` messages before the one just appended,
    /// oldest first. All of them when the transcript is shorter.
    fn history_window(&self) -> Vec<ChatMessage> {
        let end = self.messages.len().saturating_sub(1);
        let start = end.saturating_sub(HISTORY_WINDOW);
        self.messages[start..end].to_vec()
    }
}
