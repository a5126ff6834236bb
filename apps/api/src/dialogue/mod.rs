// Guided resume dialogue: collects name, education, skills, interests and
// experience one turn at a time, then hands a completed profile to generation.
// The core (validation, machine) is pure; sessions and handlers own the state.

pub mod fields;
pub mod handlers;
pub mod machine;
pub mod profile;
pub mod prompts;
pub mod session;
pub mod store;
pub mod transcript;
pub mod validation;
