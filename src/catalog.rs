//! User-facing strings, keyed by locale. The backend serves a Brazilian
//! audience, so pt-BR is the default and the fallback for unknown tags.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    PtBr,
    En,
}

impl Locale {
    /// Parse a BCP-47-ish tag ("pt-BR", "pt", "en", "en-US"). Unknown tags
    /// fall back to pt-BR.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Locale::En,
            _ => Locale::PtBr,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Generic failure string, used when the underlying error carries no
    /// message of its own.
    pub fn send_failed(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Erro ao enviar mensagem",
            Locale::En => "Failed to send message",
        }
    }

    /// Assistant turn appended on failure, so the transcript never shows an
    /// unanswered user message.
    pub fn retry_reply(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Desculpe, ocorreu um erro. Por favor, tente novamente.",
            Locale::En => "Sorry, something went wrong. Please try again.",
        }
    }

    pub fn offers_heading(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Opções encontradas",
            Locale::En => "Options found",
        }
    }

    pub fn suggestions_heading(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Sugestões",
            Locale::En => "Suggestions",
        }
    }

    pub fn clarification_heading(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "O agente precisa de mais detalhes",
            Locale::En => "The agent needs more details",
        }
    }

    pub fn session_cleared(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Conversa reiniciada.",
            Locale::En => "Conversation cleared.",
        }
    }

    pub fn no_offers(&self) -> &'static str {
        match self.locale {
            Locale::PtBr => "Nenhuma opção de voo nesta conversa ainda.",
            Locale::En => "No flight options in this conversation yet.",
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(Locale::PtBr)
    }
}
