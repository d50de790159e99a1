//! Integration tests for resolution and dispatch through `Localization`.

use std::collections::HashMap;
use std::io;

use lexicon::{
    Catalog, ConsoleLogLevel, Delivery, DispatchError, LoadError, Localization, MemoryConsole,
    MemorySink, MessageSink, ReceiverDataLoader, ReceiverRegistry, Settings, SinkError, Target,
    messages,
};
use tracing::Level;

type Player = u32;

const ALICE: Player = 1;
const BOB: Player = 2;
const CAROL: Player = 3;

fn catalogs() -> Vec<Catalog<String>> {
    vec![
        Catalog::new(
            "en",
            messages! {
                "welcome" => "Welcome, ${1}!",
                "bye" => "Goodbye.",
                "list" => "Players: ${*}",
                "server_only" => "Server ${1} started",
            },
        )
        .unwrap(),
        Catalog::new(
            "fr",
            messages! {
                "welcome" => "Bienvenue, ${1} !",
                "list" => "Joueurs : ${*}",
            },
        )
        .unwrap(),
    ]
}

fn setup() -> (
    Localization<String, Player>,
    MemorySink<String, Player>,
    MemoryConsole<String>,
) {
    let sink = MemorySink::new();
    let console = MemoryConsole::new();
    let mut localization =
        Localization::with_console(Settings::default(), sink.clone(), console.clone());
    localization.load_languages(&mut catalogs()).unwrap();
    localization.set_language(ALICE, "fr");
    localization.set_language(BOB, "en");
    (localization, sink, console)
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_receiver_language_selects_catalog() {
    let (localization, _, _) = setup();
    assert_eq!(
        localization.message(&ALICE, "welcome").map(String::as_str),
        Some("Bienvenue, ${1} !")
    );
    assert_eq!(
        localization.message(&BOB, "welcome").map(String::as_str),
        Some("Welcome, ${1}!")
    );
}

#[test]
fn test_receiver_without_preference_uses_default_language() {
    let (localization, _, _) = setup();
    assert_eq!(localization.language(&CAROL), None);
    assert_eq!(localization.language_of(Target::Receiver(&CAROL)), "en");
    assert_eq!(
        localization.message(&CAROL, "welcome").map(String::as_str),
        Some("Welcome, ${1}!")
    );
}

#[test]
fn test_missing_key_falls_back_to_default_language() {
    let (localization, _, _) = setup();
    assert_eq!(
        localization.message(&ALICE, "bye").map(String::as_str),
        Some("Goodbye.")
    );
}

#[test]
fn test_key_missing_everywhere_resolves_to_none() {
    let (localization, _, _) = setup();
    assert!(localization.message(&ALICE, "nope").is_none());
    assert!(localization.console_message("nope").is_none());
}

#[test]
fn test_unloaded_language_resolves_to_none() {
    let (mut localization, _, _) = setup();
    localization.set_language(CAROL, "xx");
    assert!(localization.message(&CAROL, "welcome").is_none());
}

#[test]
fn test_missing_default_catalog_does_not_panic() {
    let mut localization = Localization::<String, Player>::with_console(
        Settings::builder().default_language("de").build(),
        MemorySink::new(),
        MemoryConsole::new(),
    );
    localization.load_languages(&mut catalogs()).unwrap();
    localization.set_language(ALICE, "fr");

    assert!(localization.message(&ALICE, "bye").is_none());
    assert!(localization.message(&BOB, "welcome").is_none());
    assert!(localization.console_message("welcome").is_none());
}

#[test]
fn test_console_uses_console_language() {
    let mut localization = Localization::<String, Player>::with_console(
        Settings::builder()
            .console_language("fr".to_string())
            .build(),
        MemorySink::new(),
        MemoryConsole::new(),
    );
    localization.load_languages(&mut catalogs()).unwrap();

    assert_eq!(localization.console_language(), "fr");
    assert_eq!(
        localization.console_message("welcome").map(String::as_str),
        Some("Bienvenue, ${1} !")
    );
    assert_eq!(
        localization.console_message("bye").map(String::as_str),
        Some("Goodbye.")
    );

    localization.set_console_language("en");
    assert_eq!(
        localization.resolve(Target::Console, "welcome").map(String::as_str),
        Some("Welcome, ${1}!")
    );
}

#[test]
fn test_render_message() {
    let (localization, _, _) = setup();
    let rendered = localization.render_message(Target::from(&ALICE), "welcome", Some(&["Ada"][..]));
    assert_eq!(rendered.as_deref(), Some("Bienvenue, Ada !"));

    let untouched = localization.render_message::<&str>(Target::Console, "welcome", None);
    assert_eq!(untouched.as_deref(), Some("Welcome, ${1}!"));
}

#[test]
fn test_put_message_updates_resolution() {
    let (mut localization, _, _) = setup();
    localization
        .put_message("fr", "bye", "Au revoir.".to_string())
        .unwrap();
    assert_eq!(
        localization.message(&ALICE, "bye").map(String::as_str),
        Some("Au revoir.")
    );
}

#[test]
fn test_reload_replaces_catalogs() {
    let (mut localization, _, _) = setup();
    let count = localization
        .reload_languages(&mut vec![
            Catalog::new("en", messages! { "welcome" => "Hey ${1}" }).unwrap(),
        ])
        .unwrap();

    assert_eq!(count, 1);
    assert!(localization.store().catalog("fr").is_none());
    assert!(localization.message(&ALICE, "welcome").is_none());
    assert_eq!(
        localization.message(&BOB, "welcome").map(String::as_str),
        Some("Hey ${1}")
    );
}

// =============================================================================
// Receiver preferences
// =============================================================================

#[test]
fn test_set_language_is_idempotent() {
    let (mut localization, _, _) = setup();
    assert_eq!(localization.set_language(ALICE, "en"), Some("fr".to_string()));
    assert_eq!(localization.set_language(ALICE, "en"), Some("en".to_string()));
    assert_eq!(localization.language(&ALICE), Some("en"));
    assert_eq!(localization.receivers().len(), 2);
}

#[test]
fn test_remove_language_restores_default() {
    let (mut localization, _, _) = setup();
    assert_eq!(localization.remove_language(&ALICE), Some("fr".to_string()));
    assert_eq!(localization.language_of(Target::Receiver(&ALICE)), "en");
}

#[test]
fn test_receiver_data_round_trip_through_map() {
    let (localization, _, _) = setup();
    let mut saved: HashMap<Player, String> = HashMap::new();
    localization.save_receiver_data(&mut saved).unwrap();
    assert_eq!(saved.get(&ALICE).map(String::as_str), Some("fr"));
    assert_eq!(saved.len(), 2);

    let (mut fresh, _, _) = setup();
    fresh.remove_language(&ALICE);
    fresh.remove_language(&BOB);
    assert_eq!(fresh.load_receiver_data(&mut saved).unwrap(), 2);
    assert_eq!(fresh.language(&ALICE), Some("fr"));
}

#[test]
fn test_registry_load_merges_entries() {
    let mut registry = ReceiverRegistry::new();
    registry.set_language(CAROL, "de");

    let mut loader: HashMap<Player, String> = HashMap::from([(ALICE, "fr".to_string())]);
    assert_eq!(registry.load_receiver_data(&mut loader).unwrap(), 2);
    assert_eq!(registry.language(&CAROL), Some("de"));
    assert!(!registry.is_empty());
}

struct FailingStorage;

impl ReceiverDataLoader<Player> for FailingStorage {
    fn load(&mut self) -> Result<HashMap<Player, String>, LoadError> {
        Err(LoadError::Io {
            path: "players.properties".into(),
            source: io::Error::other("disk on fire"),
        })
    }

    fn save(&mut self, _data: &HashMap<Player, String>) -> Result<(), LoadError> {
        Err(LoadError::Write {
            path: "players.properties".into(),
            source: io::Error::other("read-only"),
        })
    }
}

#[test]
fn test_receiver_storage_errors_propagate() {
    let (mut localization, _, _) = setup();
    assert!(matches!(
        localization.load_receiver_data(&mut FailingStorage),
        Err(LoadError::Io { .. })
    ));
    assert!(matches!(
        localization.save_receiver_data(&mut FailingStorage),
        Err(LoadError::Write { .. })
    ));
    assert_eq!(localization.language(&ALICE), Some("fr"));
}

// =============================================================================
// Receiver dispatch
// =============================================================================

#[test]
fn test_send_message_with_args() {
    let (mut localization, sink, _) = setup();
    let delivery = localization
        .send_message_with_args(&ALICE, "welcome", &["Ada"])
        .unwrap();

    assert_eq!(delivery, Delivery::Sent);
    assert_eq!(sink.take(), vec![(ALICE, "Bienvenue, Ada !".to_string())]);
}

#[test]
fn test_send_message_without_args_keeps_placeholders() {
    let (mut localization, sink, _) = setup();
    localization.send_message(&BOB, "welcome").unwrap();
    assert_eq!(sink.take(), vec![(BOB, "Welcome, ${1}!".to_string())]);
}

#[test]
fn test_send_with_empty_args_clears_placeholders() {
    let (mut localization, sink, _) = setup();
    let args: [&str; 0] = [];
    localization
        .send_message_with_args(&BOB, "welcome", &args)
        .unwrap();
    assert_eq!(sink.take(), vec![(BOB, "Welcome, !".to_string())]);
}

#[test]
fn test_send_missing_key_sends_nothing() {
    let (mut localization, sink, _) = setup();
    let delivery = localization.send_message(&ALICE, "nope").unwrap();
    assert_eq!(delivery, Delivery::Missing);
    assert!(sink.is_empty());
}

#[test]
fn test_transform_applies_after_rendering() {
    let (mut localization, sink, _) = setup();
    localization
        .send_message_with(&BOB, "welcome", Some(&["Ada"][..]), |message| {
            format!("[Server] {message}")
        })
        .unwrap();
    assert_eq!(sink.take(), vec![(BOB, "[Server] Welcome, Ada!".to_string())]);
}

#[test]
fn test_send_translated_message_bypasses_catalogs() {
    let (mut localization, sink, _) = setup();
    localization
        .send_translated_message(&CAROL, "raw ${1}".to_string())
        .unwrap();
    assert_eq!(sink.take(), vec![(CAROL, "raw ${1}".to_string())]);
}

#[test]
fn test_send_messages_to_many_receivers() {
    let (mut localization, sink, _) = setup();
    let sent = localization
        .send_messages("bye", &[ALICE, BOB, CAROL])
        .unwrap();

    assert_eq!(sent, 3);
    assert_eq!(
        sink.take(),
        vec![
            (ALICE, "Goodbye.".to_string()),
            (BOB, "Goodbye.".to_string()),
            (CAROL, "Goodbye.".to_string()),
        ]
    );
}

#[test]
fn test_send_messages_stops_at_first_failure() {
    let delivered = MemorySink::<String, Player>::new();
    let mut record = delivered.clone();
    let mut localization = Localization::<String, Player>::with_console(
        Settings::default(),
        move |receiver: &Player, message: String| -> Result<(), SinkError> {
            if *receiver == BOB {
                return Err("connection closed".into());
            }
            record.send(receiver, message)
        },
        MemoryConsole::new(),
    );
    localization.load_languages(&mut catalogs()).unwrap();

    let err = localization
        .send_messages("bye", &[ALICE, BOB, CAROL])
        .unwrap_err();
    assert!(matches!(err, DispatchError::Rejected { ref key, .. } if key == "bye"));
    insta::assert_snapshot!(err, @"failed to deliver 'bye': connection closed");
    assert_eq!(delivered.take(), vec![(ALICE, "Goodbye.".to_string())]);
}

#[test]
fn test_translated_rejection_message() {
    let mut localization = Localization::<String, Player>::with_console(
        Settings::default(),
        |_: &Player, _: String| -> Result<(), SinkError> { Err("offline".into()) },
        MemoryConsole::new(),
    );
    let err = localization
        .send_translated_message(&ALICE, "hi".to_string())
        .unwrap_err();
    insta::assert_snapshot!(err, @"failed to deliver translated message: offline");
}

// =============================================================================
// Console dispatch
// =============================================================================

#[test]
fn test_console_message_with_args() {
    let (mut localization, sink, console) = setup();
    let delivery =
        localization.send_console_message_with_args(ConsoleLogLevel::Info, "server_only", &["lobby"]);

    assert_eq!(delivery, Delivery::Sent);
    assert_eq!(
        console.take(),
        vec![(ConsoleLogLevel::Info, "Server lobby started".to_string())]
    );
    assert!(sink.is_empty());
}

#[test]
fn test_console_missing_key() {
    let (mut localization, _, console) = setup();
    assert_eq!(
        localization.send_console_message(ConsoleLogLevel::Warn, "nope"),
        Delivery::Missing
    );
    assert!(console.is_empty());
}

#[test]
fn test_console_transform_and_translated() {
    let (mut localization, _, console) = setup();
    localization.send_console_message_with(
        ConsoleLogLevel::Error,
        "list",
        Some(&["a", "b"][..]),
        |message| message.to_uppercase(),
    );
    localization.send_translated_console_message(ConsoleLogLevel::Debug, "raw".to_string());

    assert_eq!(
        console.take(),
        vec![
            (ConsoleLogLevel::Error, "PLAYERS: A B".to_string()),
            (ConsoleLogLevel::Debug, "raw".to_string()),
        ]
    );
}

#[test]
fn test_set_console_log_replaces_console() {
    let (mut localization, _, first) = setup();
    let second = MemoryConsole::new();
    localization.set_console_log(second.clone());
    localization.send_console_message(ConsoleLogLevel::Info, "bye");

    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
}

// =============================================================================
// Target dispatch
// =============================================================================

#[test]
fn test_send_to_routes_by_target() {
    let (mut localization, sink, console) = setup();
    let receiver = localization
        .send_to(
            Target::Receiver(&ALICE),
            ConsoleLogLevel::Warn,
            "welcome",
            Some(&["Ada"][..]),
            |message| message,
        )
        .unwrap();
    let server = localization
        .send_to(
            Target::Console,
            ConsoleLogLevel::Warn,
            "server_only",
            Some(&["lobby"][..]),
            |message| format!("> {message}"),
        )
        .unwrap();

    assert_eq!((receiver, server), (Delivery::Sent, Delivery::Sent));
    assert_eq!(sink.take(), vec![(ALICE, "Bienvenue, Ada !".to_string())]);
    assert_eq!(
        console.take(),
        vec![(ConsoleLogLevel::Warn, "> Server lobby started".to_string())]
    );
}

#[test]
fn test_send_to_missing_key_sends_nothing() {
    let (mut localization, sink, console) = setup();
    for target in [Target::Receiver(&BOB), Target::Console] {
        let delivery = localization
            .send_to::<&str>(target, ConsoleLogLevel::Info, "nope", None, |message| message)
            .unwrap();
        assert_eq!(delivery, Delivery::Missing);
    }
    assert!(sink.is_empty());
    assert!(console.is_empty());
}

#[test]
fn test_console_log_levels_display_uppercase() {
    let names: Vec<String> = ConsoleLogLevel::ALL
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, vec!["ERROR", "WARN", "INFO", "DEBUG", "TRACE"]);
    assert_eq!(ConsoleLogLevel::default(), ConsoleLogLevel::Info);
}

#[test]
fn test_console_log_level_maps_to_tracing_level() {
    assert_eq!(Level::from(ConsoleLogLevel::Warn), Level::WARN);
    assert_eq!(
        serde_json::to_string(&ConsoleLogLevel::Debug).unwrap(),
        r#""DEBUG""#
    );
}

#[test]
fn test_receiver_data_view() {
    let (localization, _, _) = setup();
    let data = localization.receivers().receiver_data();
    assert_eq!(data.get(&ALICE).map(String::as_str), Some("fr"));
    assert_eq!(data.get(&BOB).map(String::as_str), Some("en"));
}
