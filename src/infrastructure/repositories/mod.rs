//! Repository implementations using SeaORM

pub mod interaction_repository;

pub use interaction_repository::SeaOrmInteractionRepository;
