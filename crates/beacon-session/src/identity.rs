// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pseudonymous distinct ids derived from client identity hints.

use uuid::Uuid;

/// Namespace for name-based distinct ids: `UUIDv5(URL, "https://sentry.io/#did")`.
///
/// Downstream consumers join on the derived ids, so this value is part of the
/// wire contract and must never change.
pub const DISTINCT_ID_NAMESPACE: Uuid = Uuid::from_u128(0xa59e99c3_f380_5ce1_be0a_bf985af6f9eb);

/// Distinct id reported for sessions without identity material.
pub const UNKNOWN_DISTINCT_ID: Uuid = Uuid::nil();

/// Derives the opaque `distinct_id` for a device/user hint.
///
/// Absent or empty input yields the nil UUID. Any other input is hashed into a
/// UUID v5, which is stable across calls and processes and not reversible.
pub fn derive_distinct_id(distinct_device_id: Option<&str>) -> String {
    distinct_id_uuid(distinct_device_id).to_string()
}

fn distinct_id_uuid(distinct_device_id: Option<&str>) -> Uuid {
    match distinct_device_id {
        Some(did) if !did.is_empty() => Uuid::new_v5(&DISTINCT_ID_NAMESPACE, did.as_bytes()),
        _ => UNKNOWN_DISTINCT_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn namespace_matches_its_derivation() {
        assert_eq!(
            DISTINCT_ID_NAMESPACE,
            Uuid::new_v5(&Uuid::NAMESPACE_URL, b"https://sentry.io/#did")
        );
    }

    #[test]
    fn known_input_hashes_to_known_id() {
        assert_eq!(
            derive_distinct_id(Some("foobarbaz")),
            "367e2499-2b45-586d-814f-778b60144e87"
        );
    }

    #[test]
    fn absent_identity_is_nil() {
        assert_eq!(
            derive_distinct_id(None),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(derive_distinct_id(Some("")), derive_distinct_id(None));
    }

    #[test]
    fn raw_device_id_is_never_passed_through() {
        let did = "8333339f-5675-4f89-a9a0-1c935255ab58";
        assert_ne!(derive_distinct_id(Some(did)), did);
    }

    proptest! {
        #[test]
        fn derivation_is_deterministic(did in ".{1,64}") {
            prop_assert_eq!(derive_distinct_id(Some(&did)), derive_distinct_id(Some(&did)));
        }

        #[test]
        fn distinct_inputs_get_distinct_ids(a in "[a-z0-9]{1,32}", b in "[a-z0-9]{1,32}") {
            prop_assume!(a != b);
            prop_assert_ne!(derive_distinct_id(Some(&a)), derive_distinct_id(Some(&b)));
        }

        #[test]
        fn derived_ids_are_version_five(did in ".{1,64}") {
            let id: Uuid = derive_distinct_id(Some(&did)).parse().unwrap();
            prop_assert_eq!(id.get_version_num(), 5);
        }
    }
}
