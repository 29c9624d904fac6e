pub mod discovery;
pub mod git;
