//! Startup gate between the asynchronous font/phrase loads and body creation.
//!
//! Bodies need both the font and the phrase list. The two arrive from the
//! host in either order; phrases are released exactly once. A font failure
//! is permanent: no text node is ever created afterwards.

use crate::assets::phrases::Phrase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
enum PhraseState {
    Pending,
    Ready(Vec<Phrase>),
    Failed,
    Released,
}

#[derive(Debug)]
pub struct LoadGate {
    font: FontState,
    phrases: PhraseState,
}

impl LoadGate {
    pub fn new() -> Self {
        Self {
            font: FontState::Pending,
            phrases: PhraseState::Pending,
        }
    }

    pub fn font(&self) -> FontState {
        self.font
    }

    pub fn font_ready(&self) -> bool {
        self.font == FontState::Ready
    }

    /// Mark the font as loaded. Returns true only on the transition into
    /// `Ready`, so one-shot text (the sun label) is created once.
    pub fn font_loaded(&mut self) -> bool {
        match self.font {
            FontState::Pending => {
                self.font = FontState::Ready;
                true
            }
            FontState::Ready => false,
            FontState::Failed => {
                log::warn!("font reported loaded after a failure; text stays disabled");
                false
            }
        }
    }

    pub fn font_failed(&mut self) {
        if self.font == FontState::Ready {
            log::warn!("font failure reported after load; ignoring");
            return;
        }
        self.font = FontState::Failed;
    }

    /// Store the phrase list. Later deliveries are ignored.
    pub fn phrases_loaded(&mut self, phrases: Vec<Phrase>) {
        match self.phrases {
            PhraseState::Pending | PhraseState::Failed => {
                self.phrases = PhraseState::Ready(phrases);
            }
            PhraseState::Ready(_) | PhraseState::Released => {
                log::warn!("phrase list delivered twice; keeping the first");
            }
        }
    }

    pub fn phrases_failed(&mut self) {
        if self.phrases == PhraseState::Pending {
            self.phrases = PhraseState::Failed;
        }
    }

    /// Hand out the phrase list once both the font and phrases are in.
    pub fn take_phrases(&mut self) -> Option<Vec<Phrase>> {
        if self.font != FontState::Ready {
            return None;
        }
        match std::mem::replace(&mut self.phrases, PhraseState::Released) {
            PhraseState::Ready(list) => Some(list),
            other => {
                self.phrases = other;
                None
            }
        }
    }

    /// Whether bodies have already been released.
    pub fn released(&self) -> bool {
        self.phrases == PhraseState::Released
    }
}

impl Default for LoadGate {
    fn default() -> Self {
        Self::new()
    }
}
