mod page;

pub use page::QualityInspectionsPage;
