//! Helpers for integration tests.

#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pricemaster::db::{DbPool, establish_connection_pool};
use pricemaster::domain::category::CategoryKind;
use pricemaster::domain::component::NewComponent;
use pricemaster::domain::types::{ComponentId, ComponentName, Money, UnitId};
use pricemaster::forms::products::{BomItemForm, CreateProductForm};
use pricemaster::repository::{CatalogWriter, DieselRepository};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Stores a component with the seeded `piece` unit.
pub fn add_component(
    repo: &DieselRepository,
    name: &str,
    price: Decimal,
    category: CategoryKind,
) -> ComponentId {
    repo.create_component(&NewComponent {
        name: ComponentName::new(name).expect("valid component name"),
        unit_id: UnitId::new(1).expect("valid unit id"),
        price_per_unit: Money::new(price).expect("valid price"),
        category,
    })
    .expect("component should be stored")
}

/// Frame ×4 @ 12.40, canvas ×0.18 @ 450.55, gilding labor ×1 @ 350.10.
pub fn seed_components(repo: &DieselRepository) -> [ComponentId; 3] {
    [
        add_component(repo, "Frame", dec!(12.40), CategoryKind::Artifact),
        add_component(repo, "Canvas", dec!(450.55), CategoryKind::BaseMaterial),
        add_component(repo, "Gilding", dec!(350.10), CategoryKind::AssemblyWork),
    ]
}

/// A valid creation request using the components from [`seed_components`].
pub fn product_form(code: &str, components: &[ComponentId; 3]) -> CreateProductForm {
    CreateProductForm {
        product_code: code.to_string(),
        series_id: 1,
        size_width: dec!(60),
        size_height: dec!(30),
        recommended_price: dec!(2300),
        bom_items: vec![
            BomItemForm {
                component_id: components[0].get(),
                quantity: dec!(4),
            },
            BomItemForm {
                component_id: components[1].get(),
                quantity: dec!(0.18),
            },
            BomItemForm {
                component_id: components[2].get(),
                quantity: dec!(1),
            },
        ],
        notes: Some("gift box".to_string()),
    }
}
