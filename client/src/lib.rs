pub mod input;
pub mod layout;
pub mod run;
pub mod session;
pub mod view;
