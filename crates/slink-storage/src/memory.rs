mod links;
mod submissions;

pub use links::InMemoryLinkRepository;
pub use submissions::InMemorySubmissionRepository;
