//! Channel-fed recognizer
//!
//! Stands in for the platform recognizer: events are pushed by whoever owns
//! the sending half (the terminal front end, or a test).

use super::{RecognitionEvent, SessionSettings, SpeechRecognizer};
use crate::error::{VoiceError, VoiceResult};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

pub struct ChannelRecognizer {
    events: mpsc::Receiver<RecognitionEvent>,
    listening: bool,
    last_settings: Option<SessionSettings>,
}

impl ChannelRecognizer {
    pub fn new(events: mpsc::Receiver<RecognitionEvent>) -> Self {
        Self {
            events,
            listening: false,
            last_settings: None,
        }
    }

    /// Create a recognizer together with the sender that feeds it
    pub fn channel(capacity: usize) -> (mpsc::Sender<RecognitionEvent>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Settings of the most recent session
    pub fn last_settings(&self) -> Option<&SessionSettings> {
        self.last_settings.as_ref()
    }
}

#[async_trait]
impl SpeechRecognizer for ChannelRecognizer {
    async fn start(&mut self, settings: &SessionSettings) -> VoiceResult<()> {
        if self.listening {
            return Err(VoiceError::Recognizer(
                "recognition already started".to_string(),
            ));
        }
        debug!("Session started: lang={} grammar={}", settings.lang, settings.grammar);
        self.listening = true;
        self.last_settings = Some(settings.clone());
        Ok(())
    }

    async fn next_event(&mut self) -> Option<RecognitionEvent> {
        let event = self.events.recv().await;
        if !matches!(event, Some(RecognitionEvent::SpeechEnd)) {
            // Any terminal event (or a closed channel) ends the session
            self.listening = false;
        }
        event
    }

    async fn stop(&mut self) -> VoiceResult<()> {
        self.listening = false;
        Ok(())
    }
}
