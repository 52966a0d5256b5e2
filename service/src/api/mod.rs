pub mod generate;
pub mod health;

pub use generate::generate_pdf;
pub use health::health_check;
