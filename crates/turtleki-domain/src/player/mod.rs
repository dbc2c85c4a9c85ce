mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::PlayerState;
pub use repository::PlayerRepository;
