mod layout;
pub use layout::AdminShell;

mod dashboard;
pub use dashboard::AdminDashboard;

mod notices;
pub use notices::AdminNotices;

mod services;
pub use services::AdminServices;

mod schemes;
pub use schemes::AdminSchemes;

mod gallery;
pub use gallery::AdminGallery;

mod complaints;
pub use complaints::AdminComplaints;

mod development;
pub use development::AdminDevelopment;

mod contacts;
pub use contacts::AdminContacts;

mod village;
pub use village::AdminVillage;
