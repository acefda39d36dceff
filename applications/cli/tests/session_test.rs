//! Session integration tests
//!
//! Drive the command loop the way a script or terminal user would.

use cadence_cli::{
    catalog::Catalog,
    config::CliConfig,
    session::{Outcome, Session},
};
use std::io::{Cursor, Write};

// ===== Test Helpers =====

fn run_script(session: &mut Session, script: &str) -> String {
    let mut output = Vec::new();
    session
        .run(Cursor::new(script), &mut output, None)
        .expect("session run failed");
    String::from_utf8(output).expect("output is not UTF-8")
}

fn builtin_session() -> Session {
    Session::new(Catalog::builtin(), &CliConfig::default())
}

fn current_id(session: &Session) -> Option<String> {
    session.store().current_track().map(|t| t.id.clone())
}

// ===== Tests =====

#[test]
fn test_album_walkthrough() {
    let mut session = builtin_session();
    let output = run_script(
        &mut session,
        "# play a whole album
album Trending Now
next
next
next
next
prev
",
    );

    assert_eq!(current_id(&session).as_deref(), Some("11"));
    assert!(session.store().is_playing());
    assert!(output.contains("No next track in the queue"));
    assert_eq!(session.store().queue().len(), 4);
}

#[test]
fn test_queue_editing_script() {
    let mut session = builtin_session();
    run_script(
        &mut session,
        "add 1
add 2
add 3
play 1
pause
add 4
remove 2
",
    );

    let ids: Vec<&str> = session
        .store()
        .queue()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
    assert_eq!(current_id(&session).as_deref(), Some("1"));
    assert!(!session.store().is_playing());

    // Next skips the removed entry and resumes
    run_script(&mut session, "next\n");
    assert_eq!(current_id(&session).as_deref(), Some("3"));
    assert!(session.store().is_playing());
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let mut session = builtin_session();
    let output = run_script(
        &mut session,
        "play 404
dance
play 5
",
    );

    assert!(output.contains("error: Track not found: 404"));
    assert!(output.contains("error: Invalid command: unknown command 'dance'"));
    assert_eq!(current_id(&session).as_deref(), Some("5"));
}

#[test]
fn test_quit_ignores_rest_of_script() {
    let mut session = builtin_session();
    run_script(&mut session, "play 1\nquit\nplay 2\n");
    assert_eq!(current_id(&session).as_deref(), Some("1"));
}

#[test]
fn test_clear_keeps_current_track() {
    let mut session = builtin_session();
    run_script(&mut session, "album Minimalist Moods\nclear\n");

    assert!(session.store().queue().is_empty());
    assert_eq!(current_id(&session).as_deref(), Some("5"));
    assert!(session.store().is_playing());
}

#[test]
fn test_snapshot_is_json() {
    let mut session = builtin_session();
    run_script(&mut session, "add 9\nplay 9\n");

    let outcome = session
        .execute("snapshot".parse().unwrap())
        .expect("snapshot failed");
    let Outcome::Continue(json) = outcome else {
        panic!("unexpected quit");
    };

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["currentTrack"]["title"], "Quantum Entanglement");
    assert_eq!(value["isPlaying"], true);
}

#[test]
fn test_events_drain_as_json_lines() {
    let mut session = builtin_session();
    run_script(&mut session, "add 1\nplay 1\n");

    let output = run_script(&mut session, "events\nevents\n");
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(r#"{"type":"queueChanged","length":1}"#));
    assert_eq!(lines.next(), Some(r#"{"type":"stateChanged","is_playing":true}"#));
    assert_eq!(
        lines.next(),
        Some(r#"{"type":"trackChanged","track_id":"1","previous_track_id":null}"#)
    );
    assert_eq!(lines.next(), Some("No pending events"));
}

#[test]
fn test_session_over_loaded_catalog() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[tracks]]
id = "x"
title = "Watermelon Sugar"
artist = "Harry Styles"
duration = 174

[[tracks]]
id = "y"
title = "Don't Start Now"
artist = "Dua Lipa"
duration = 183
"#
    )
    .unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    let mut session = Session::new(catalog, &CliConfig::default());
    let output = run_script(&mut session, "add x\nadd y\nplay x\nnext\nstatus\n");

    assert_eq!(current_id(&session).as_deref(), Some("y"));
    assert!(output.contains("Don't Start Now — Dua Lipa"));
    assert!(output.contains("3:03"));
}
