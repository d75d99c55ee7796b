mod page;

pub use page::MoldsPage;
