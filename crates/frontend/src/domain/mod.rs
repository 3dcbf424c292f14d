pub mod category;
pub mod formation;
pub mod formateur;
pub mod safety_activity;
