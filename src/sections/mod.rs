// Landing page sections

mod about;
mod contact;
mod footer;
mod hero;
mod portfolio;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::HeroSection;
pub use portfolio::Portfolio;
pub use services::Services;
