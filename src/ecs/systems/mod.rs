pub mod career;
pub mod death;
pub mod education;
pub mod events;
pub mod expenses;
pub mod health;
pub mod lifecycle;
pub mod relationships;
