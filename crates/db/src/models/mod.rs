pub mod inquiry;
pub mod post;
pub mod service_offering;
pub mod session;
pub mod testimonial;
pub mod user;
