pub mod config;
pub mod gui;
pub mod image_classifier;
pub mod lesion;
pub mod library;
pub mod predictor;
pub mod report;
