// Resume generation: turns a completed dialogue profile into the resume
// document, career suggestions, interview practice and a job-search link.
// Everything here is pure and deterministic; no LLM calls.

pub mod composer;
pub mod handlers;
pub mod interview;
pub mod job_search;
pub mod suggestions;
