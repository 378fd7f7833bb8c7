pub mod books;
pub mod photographers;

use mongodb::Database;

use folio_kernel::ModuleRegistry;

/// Register all resource modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, db: &Database) {
    registry.register(books::create_module(db));
    registry.register(photographers::create_module(db));
}
