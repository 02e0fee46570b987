pub mod submissions;

pub use submissions::SubmissionService;
