mod page;

pub use page::RawMaterialsPage;
