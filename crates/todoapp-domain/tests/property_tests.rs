//! Property-based tests for value objects, enums and policies

use proptest::prelude::*;
use todoapp_domain::{
    Outcome, TodoDescription, TodoId, TodoStatus, TodoStatusTransitionPolicy, TodoTitle, UserId,
    UserName, UserPermissionPolicy, UserRole,
};

fn status_strategy() -> impl Strategy<Value = TodoStatus> {
    prop::sample::select(TodoStatus::all().to_vec())
}

fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,3}"
}

proptest! {
    /// Accepted titles are stored trimmed and stay within 1..=255 characters
    #[test]
    fn prop_title_is_trimmed_and_bounded(
        body in "[a-zA-Z0-9あ-ん][a-zA-Z0-9 あ-ん]{0,200}[a-zA-Z0-9あ-ん]",
        left in padding_strategy(),
        right in padding_strategy(),
    ) {
        let raw = format!("{left}{body}{right}");
        let title = TodoTitle::of(&raw);
        prop_assert!(title.is_success());
        let title = title.into_value();
        prop_assert_eq!(title.value(), raw.trim());
        prop_assert!((1..=255).contains(&title.len()));
    }

    /// Titles longer than the limit report their trimmed length
    #[test]
    fn prop_long_title_reports_length(len in 256usize..400, pad in padding_strategy()) {
        let raw = format!("{pad}{}{pad}", "x".repeat(len));
        let outcome = TodoTitle::of(&raw);
        let message = outcome.error_message().unwrap_or_default();
        prop_assert!(message.contains(&len.to_string()));
    }

    /// Blank descriptions are normalized to "no description"
    #[test]
    fn prop_blank_description_is_absent(blank in "[ \t\r\n]{0,20}") {
        let description = TodoDescription::of(Some(&blank));
        prop_assert!(description.is_success());
        prop_assert!(!description.value().has_value());
    }

    /// Re-validating a valid user name yields the same name
    #[test]
    fn prop_user_name_is_idempotent(raw in " {0,2}[a-zA-Z0-9ぁ-ゖ][a-zA-Z0-9_ぁ-ゖ-]{2,40} {0,2}") {
        let first = UserName::of(&raw);
        prop_assert!(first.is_success());
        let again = UserName::of(first.value().value());
        prop_assert_eq!(again, first);
    }

    /// Numeric and string paths agree for ids
    #[test]
    fn prop_id_string_path_matches_numeric(value in any::<i64>()) {
        prop_assert_eq!(TodoId::parse(&value.to_string()), TodoId::of(value));
        prop_assert_eq!(UserId::parse(&format!(" {value} ")), UserId::of(value));
        prop_assert_eq!(TodoId::of(value).is_success(), value >= 1);
        prop_assert_eq!(UserId::of(value).is_success(), value > 0);
    }

    /// Status codes survive case changes and surrounding whitespace
    #[test]
    fn prop_status_lookup_round_trips(
        status in status_strategy(),
        lower in any::<bool>(),
        pad in padding_strategy(),
    ) {
        let code = if lower { status.code().to_lowercase() } else { status.code().to_string() };
        let padded = format!("{pad}{code}{pad}");
        prop_assert_eq!(TodoStatus::from_code(&padded).unwrap(), status);
        prop_assert_eq!(TodoStatus::from_name(&padded).unwrap(), status);
    }

    /// Self transitions are always allowed, leaving DELETED never is
    #[test]
    fn prop_transition_invariants(from in status_strategy(), to in status_strategy()) {
        let policy = TodoStatusTransitionPolicy::new();
        prop_assert!(policy.can_transition(from, from));
        if from == TodoStatus::Deleted && to != TodoStatus::Deleted {
            prop_assert!(!policy.can_transition(from, to));
        }
        if !policy.can_transition(from, to) {
            prop_assert!(!policy.can_transition_with_approval(from, to, true));
        }
    }

    /// Mapping a failure never changes its message
    #[test]
    fn prop_failure_propagates_through_chain(message in "[a-z]{1,20}", factor in any::<i32>()) {
        let outcome: Outcome<i32> = Outcome::failure(message.clone());
        let chained = outcome
            .map(|v| v.wrapping_mul(factor))
            .flat_map(|v| Outcome::success(v.to_string()));
        prop_assert_eq!(chained.error_message(), Some(message.as_str()));
    }
}

#[test]
fn prop_default_permissions_are_monotonic() {
    let policy = UserPermissionPolicy::new();
    let ordered = [
        UserRole::User,
        UserRole::Moderator,
        UserRole::Admin,
        UserRole::SuperAdmin,
    ];
    for pair in ordered.windows(2) {
        let lower = policy.permissions(pair[0]);
        let higher = policy.permissions(pair[1]);
        assert!(
            lower.is_subset(&higher),
            "{} should hold every permission of {}",
            pair[1],
            pair[0]
        );
    }
}
