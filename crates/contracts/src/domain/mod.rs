pub mod category;
pub mod formateur;
pub mod formation;
pub mod safety_activity;
