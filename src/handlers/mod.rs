pub mod companies;
pub mod disclosures;
pub mod health;
