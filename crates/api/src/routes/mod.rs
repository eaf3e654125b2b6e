pub mod coffee;
pub mod health;
pub mod trivia;
