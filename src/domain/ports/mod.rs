pub mod clock;
pub mod member_store;
