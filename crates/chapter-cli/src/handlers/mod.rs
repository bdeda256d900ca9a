pub mod activities;
pub mod check;
pub mod events;
pub mod faq;
pub mod site;
pub mod team;
pub mod timeline;
