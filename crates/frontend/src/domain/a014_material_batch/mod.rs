mod page;

pub use page::MaterialBatchesPage;
