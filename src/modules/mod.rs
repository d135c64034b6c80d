pub mod admin;
pub mod amendment;
pub mod application;
pub mod auth;
pub mod closure;
pub mod notification;
pub mod review;
pub mod stall;
pub mod storage;
pub mod user;

mod router;
pub use router::get_router;
