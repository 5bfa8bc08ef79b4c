pub mod about;
pub mod capstone;
pub mod contact;
pub mod experience;
pub mod face_detection;
pub mod footer;
pub mod header;
pub mod portfolio;
pub mod services;
