pub mod category;
pub mod question;
pub use category::{Category, CategorySelector};
pub use question::{NewQuestion, Question};
