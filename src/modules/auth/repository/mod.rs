pub mod reset_token;
pub mod session;
