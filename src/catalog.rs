/// A record living in one of the static, read-only catalogs.
pub trait CatalogEntry {
    fn id(&self) -> &str;
}

/// Linear scan by identity. Absence is `None`, never an error.
pub fn get_by_id<'a, T: CatalogEntry>(catalog: &'a [T], id: &str) -> Option<&'a T> {
    catalog.iter().find(|entry| entry.id() == id)
}
