//! The process-wide facade. Kept to a single test: every call shares one
//! global registry.

use std::sync::Arc;

use severino_logger::{handler::CallbackHandler, Level, RegistryError};

#[test]
fn test_facade_forwards_to_root_logger() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();

    assert_eq!(
        severino_logger::default_environment_variable_prefix(),
        severino_logger::DEFAULT_ENV_PREFIX
    );
    severino_logger::set_default_environment_variable_prefix("SEVERINO_FACADE_TEST").unwrap();
    assert_eq!(
        severino_logger::default_environment_variable_prefix(),
        "SEVERINO_FACADE_TEST"
    );

    severino_logger::add_handler(Arc::new(
        CallbackHandler::new()
            .on_info(move |m| sink.lock().unwrap().push(m.to_string()))
            .on_debug(|_| panic!("debug is below the configured level")),
    ));
    severino_logger::set_level(Level::Info);
    assert_eq!(severino_logger::facade::level(), Level::Info);

    severino_logger::debug(format_args!("hidden"));
    severino_logger::info(format_args!("visible {}", 1));
    assert_eq!(*seen.lock().unwrap(), vec!["visible 1".to_string()]);

    let root = severino_logger::default_logger();
    assert!(Arc::ptr_eq(&root, &severino_logger::global().root()));
    assert_eq!(root.namespace(), "");

    let named = severino_logger::namespace("facade-test");
    assert!(Arc::ptr_eq(&named, &severino_logger::namespace("FACADE-TEST")));

    let err = severino_logger::set_default_environment_variable_prefix("LATE").unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyInUse { .. }));

    severino_logger::set_level(Level::None);
    let signal = severino_logger::fatal(format_args!("stop"));
    assert!(!signal.was_dispatched());
}
