mod gcs;

pub use gcs::GcsObjectStore;
