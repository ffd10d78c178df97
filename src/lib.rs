pub mod calendar;
pub mod cycle;
pub mod gestation;
pub mod models;
pub mod routes;
pub mod settings;
