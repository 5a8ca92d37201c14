pub mod admin;

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod development;
pub use development::Development;

mod gallery;
pub use gallery::Gallery;

mod notices;
pub use notices::Notices;

mod schemes;
pub use schemes::Schemes;

mod services;
pub use services::Services;

mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;

mod apply_service;
pub use apply_service::ApplyServicePage;

mod my_applications;
pub use my_applications::MyApplications;

mod complaint;
pub use complaint::SubmitComplaint;
