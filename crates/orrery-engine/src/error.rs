//! Error types for scene construction and asset loading.

use thiserror::Error;

/// Everything that can go wrong while building or feeding a scene.
///
/// None of these are fatal to a running scene: asset failures degrade it
/// (no text nodes), and init failures are either logged or handed to the
/// host depending on the stage's init policy.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed phrase payload: {0}")]
    Phrases(#[from] serde_json::Error),

    /// The host could not deliver the phrase list.
    #[error("phrase list unavailable: {0}")]
    PhraseSource(String),

    /// The host could not load the label font.
    #[error("font unavailable: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<Vec<String>>("[1,").unwrap_err();
        let scene_err: SceneError = err.into();
        assert!(matches!(scene_err, SceneError::Phrases(_)));
        assert!(scene_err.to_string().starts_with("malformed phrase payload"));
    }

    #[test]
    fn host_failures_name_their_source() {
        assert_eq!(SceneError::Font("404".into()).to_string(), "font unavailable: 404");
        let nested = SceneError::PhraseSource(SceneError::Phrases(
            serde_json::from_str::<Vec<String>>("{").unwrap_err(),
        ).to_string());
        assert!(nested.to_string().starts_with("phrase list unavailable: malformed phrase payload"));
    }

    #[test]
    fn config_error_message() {
        let err = SceneError::InvalidConfig("near plane must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: near plane must be positive");
    }
}
