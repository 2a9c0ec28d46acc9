pub mod page;
pub mod post;
pub mod service;
pub mod site;
pub mod submission;
pub mod team;
pub mod testimonial;
pub mod user;
