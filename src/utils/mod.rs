pub mod database;
pub mod extract;
pub mod pagination;
pub mod password;
pub mod token;
pub mod validation;
