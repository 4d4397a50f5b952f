use lorecast::domain::{StatusSnapshot, Terminality};

#[test]
fn given_complete_status_without_error_then_classified_success() {
    let snapshot = StatusSnapshot {
        status: 100,
        audio_url: Some("http://cdn/ep.wav".to_string()),
        audio_title: Some("Episode".to_string()),
        ..Default::default()
    };

    assert_eq!(
        snapshot.classify(),
        Terminality::SucceededAudio {
            url: "http://cdn/ep.wav".to_string(),
            title: "Episode".to_string(),
        }
    );
    assert!(snapshot.is_terminal());
}

#[test]
fn given_error_message_then_classified_failed_regardless_of_status() {
    for status in [0, 55, 100] {
        let snapshot = StatusSnapshot {
            status,
            error_message: Some("quota exceeded".to_string()),
            ..Default::default()
        };
        assert_eq!(
            snapshot.classify(),
            Terminality::Failed {
                message: "quota exceeded".to_string(),
            }
        );
    }
}

#[test]
fn given_partial_status_without_error_then_classified_pending() {
    let snapshot = StatusSnapshot {
        status: 40,
        ..Default::default()
    };

    assert_eq!(snapshot.classify(), Terminality::Pending { status: 40 });
    assert!(!snapshot.is_terminal());
}

#[test]
fn given_text_body_at_completion_then_routes_to_text_branch() {
    // Branch choice depends on payload shape alone, even when audio
    // fields are also present.
    let snapshot = StatusSnapshot {
        status: 100,
        response_text: Some("<p>guide</p>".to_string()),
        audio_url: Some("http://cdn/ep.wav".to_string()),
        audio_title: Some("Episode".to_string()),
        ..Default::default()
    };

    assert_eq!(
        snapshot.classify(),
        Terminality::SucceededText {
            body: "<p>guide</p>".to_string(),
        }
    );
}

#[test]
fn given_empty_text_body_at_completion_then_routes_to_audio_branch() {
    let snapshot = StatusSnapshot {
        status: 100,
        response_text: Some(String::new()),
        audio_url: Some("http://cdn/ep.wav".to_string()),
        audio_title: Some("Episode".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        snapshot.classify(),
        Terminality::SucceededAudio { .. }
    ));
}

#[test]
fn given_empty_error_message_then_not_treated_as_failure() {
    let snapshot = StatusSnapshot {
        status: 40,
        error_message: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(snapshot.classify(), Terminality::Pending { status: 40 });
}
