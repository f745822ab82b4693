//! Subscriber installation from loaded configuration

use todoapp_common::logging::{self, LoggingError};
use todoapp_common::{format_error, LogLevel};
use todoapp_domain::{
    ConfigLoader, DomainError, LoggingConfig, TodoStatus, TodoStatusTransitionPolicy,
};

#[test]
fn test_init_from_config_is_idempotent() {
    let config = LoggingConfig {
        level: "debug".to_string(),
    };
    let options = config.to_log_options().unwrap();
    assert_eq!(options.level, LogLevel::Debug);

    logging::init(options.clone()).unwrap();
    assert!(matches!(
        logging::init(options),
        Err(LoggingError::AlreadyInitialized(_))
    ));

    // policy and config events now flow through the installed subscriber
    let policy = TodoStatusTransitionPolicy::new();
    policy.add_transition_rule(TodoStatus::Deleted, TodoStatus::Todo);
    assert!(policy.can_transition(TodoStatus::Deleted, TodoStatus::Todo));
    assert!(ConfigLoader::new()
        .env_prefix("TODOAPP_ITEST_LOG")
        .load()
        .is_ok());
}

#[test]
fn test_format_error_for_domain_errors() {
    let err = DomainError::invalid_state("DELETED", "transition to TODO");
    assert_eq!(
        format_error(&err),
        "Invalid state [DELETED] for operation [transition to TODO]"
    );
}
