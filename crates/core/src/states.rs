//! The fixed set of states an entry may be registered under.

/// Allowed values for [`Entry::state`](crate::entry::Entry::state), in
/// declared order. `GET /states` returns exactly this list.
pub const ALLOWED_STATES: [&str; 5] = [
    "Tamil Nadu",
    "Kerala",
    "Karnataka",
    "Andhra Pradesh",
    "Telangana",
];

/// Exact, case-sensitive membership test against [`ALLOWED_STATES`].
pub fn is_allowed_state(state: &str) -> bool {
    ALLOWED_STATES.contains(&state)
}
