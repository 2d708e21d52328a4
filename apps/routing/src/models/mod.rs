pub mod interviewer;
pub mod routing;
pub mod user;

#[cfg(test)]
pub mod fixtures;
