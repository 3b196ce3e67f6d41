// Storage backends for the catalog

pub mod repositories;
