use consts::LOADING_MESSAGES;

/// Cursor over a fixed, ordered list of status messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingMessages {
    messages: &'static [&'static str],
    index: usize,
}

impl Default for LoadingMessages {
    fn default() -> Self {
        Self::new(&LOADING_MESSAGES)
    }
}

impl LoadingMessages {
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self { messages, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.messages.get(self.index).copied().unwrap_or_default()
    }

    /// Moves to the next message, wrapping to the first after the last.
    pub fn advance(&mut self) -> &'static str {
        if !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
        }
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
