//! Property-based tests for the authorization gate.

use proptest::prelude::*;

use super::error::AccessError;
use super::gate::{Operation, allows, authorize};
use super::role::AccountRole;

/// Strategy for generating account roles.
fn role_strategy() -> impl Strategy<Value = AccountRole> {
    prop_oneof![
        Just(AccountRole::View),
        Just(AccountRole::Crud),
        Just(AccountRole::Post),
    ]
}

/// Strategy for generating operations.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Read),
        Just(Operation::Create),
        Just(Operation::Update),
        Just(Operation::Delete),
    ]
}

/// Strategy for generating write-side operations.
fn write_operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Create),
        Just(Operation::Update),
        Just(Operation::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A view-role caller can never perform any write operation.
    #[test]
    fn prop_view_never_writes(operation in write_operation_strategy()) {
        prop_assert!(!allows(AccountRole::View, operation));
        prop_assert_eq!(
            authorize(Some(AccountRole::View), operation),
            Err(AccessError::Denied)
        );
    }

    /// A post-role caller can create but never read or mutate.
    #[test]
    fn prop_post_is_create_only(operation in operation_strategy()) {
        let allowed = allows(AccountRole::Post, operation);
        prop_assert_eq!(allowed, matches!(operation, Operation::Create));
    }

    /// Absent membership denies every operation for every role-less caller.
    #[test]
    fn prop_no_access_denies_all(operation in operation_strategy()) {
        prop_assert_eq!(authorize(None, operation), Err(AccessError::Denied));
    }

    /// The gate is a pure function: repeated checks agree.
    #[test]
    fn prop_gate_is_deterministic(
        role in role_strategy(),
        operation in operation_strategy(),
    ) {
        prop_assert_eq!(allows(role, operation), allows(role, operation));
    }

    /// Mutation capability implies read capability only for crud: the gate
    /// never grants update/delete to a role that could not also read what
    /// it mutates.
    #[test]
    fn prop_mutators_can_read(role in role_strategy()) {
        if allows(role, Operation::Update) || allows(role, Operation::Delete) {
            prop_assert!(allows(role, Operation::Read));
        }
    }
}
