//! Mock Speech Recognizer for Testing
//!
//! Replays a fixed list of events and records how it was driven.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use voice_search::error::{VoiceError, VoiceResult};
use voice_search::recognition::{RecognitionEvent, SessionSettings, SpeechRecognizer};

/// What the service did with the recognizer
#[derive(Debug, Default)]
pub struct Calls {
    pub started: Vec<SessionSettings>,
    pub stops: usize,
}

pub struct MockRecognizer {
    events: VecDeque<RecognitionEvent>,
    available: bool,
    fail_start: bool,
    pub calls: Arc<Mutex<Calls>>,
}

impl MockRecognizer {
    pub fn new(events: Vec<RecognitionEvent>) -> Self {
        Self {
            events: events.into(),
            available: true,
            fail_start: false,
            calls: Arc::new(Mutex::new(Calls::default())),
        }
    }

    /// A recognizer that hears a single transcript after speech ends
    pub fn with_transcript(text: &str) -> Self {
        Self::new(vec![
            RecognitionEvent::SpeechEnd,
            RecognitionEvent::Result {
                transcript: text.to_string(),
            },
        ])
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(vec![])
        }
    }

    pub fn failing_start() -> Self {
        Self {
            fail_start: true,
            ..Self::new(vec![])
        }
    }
}

#[async_trait]
impl SpeechRecognizer for MockRecognizer {
    async fn start(&mut self, settings: &SessionSettings) -> VoiceResult<()> {
        if self.fail_start {
            return Err(VoiceError::Recognizer("microphone blocked".to_string()));
        }
        self.calls.lock().unwrap().started.push(settings.clone());
        Ok(())
    }

    async fn next_event(&mut self) -> Option<RecognitionEvent> {
        self.events.pop_front()
    }

    async fn stop(&mut self) -> VoiceResult<()> {
        self.calls.lock().unwrap().stops += 1;
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
