pub mod cycle;
pub mod gestation;
