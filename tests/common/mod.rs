//! Helpers for integration tests.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgb};
use tempfile::NamedTempFile;
use travely_categories::domain::category::Category;
use travely_categories::domain::types::{CategoryId, CategoryName, ImageData};
use travely_categories::repository::{DieselRepository, SchemaManager};

/// Temporary database used in integration tests.
pub struct TestDb {
    tempfile: NamedTempFile,
    repo: DieselRepository,
}

impl TestDb {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let repo = DieselRepository::new(tempfile.path().to_str().unwrap());
        repo.ensure_schema().expect("Failed to create schema");
        TestDb { tempfile, repo }
    }

    pub fn repo(&self) -> DieselRepository {
        self.repo.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        self.tempfile.path()
    }
}

#[allow(dead_code)]
pub fn category(id: i64, name: &str, image: &[u8]) -> Category {
    Category {
        id: CategoryId::new(id).expect("valid category id"),
        name: CategoryName::new(name).expect("valid category name"),
        image: ImageData::new(image.to_vec()).expect("non-empty image"),
    }
}

/// Solid-colour PNG of the given size.
#[allow(dead_code)]
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgb(rgb));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}
