pub mod countries;
pub mod daily;
pub mod feedback;
pub mod selector;
