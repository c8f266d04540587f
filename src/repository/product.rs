use diesel::prelude::*;

use crate::domain::product::{BomItem, NewProduct, Product, ProductWithBom};
use crate::domain::types::{Money, ProductCode, ProductId};
use crate::models::component::Component as DbComponent;
use crate::models::product::{
    BomItem as DbBomItem, NewBomItem as DbNewBomItem, NewProduct as DbNewProduct,
    Product as DbProduct,
};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn product_exists(&self, code: &ProductCode) -> RepositoryResult<bool> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let exists = diesel::select(diesel::dsl::exists(
            products::table.filter(products::product_code.eq(code.as_str())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }

    fn get_product_by_code_with_bom(
        &self,
        code: &ProductCode,
    ) -> RepositoryResult<Option<ProductWithBom>> {
        use crate::schema::{bom_items, categories, components, products};

        let mut conn = self.conn()?;

        let product = conn.transaction::<_, RepositoryError, _>(|conn| {
            let Some(product) = products::table
                .filter(products::product_code.eq(code.as_str()))
                .first::<DbProduct>(conn)
                .optional()?
            else {
                return Ok(None);
            };

            let bom_items = bom_items::table
                .inner_join(components::table.inner_join(categories::table))
                .filter(bom_items::product_id.eq(product.id))
                .select((
                    bom_items::all_columns,
                    components::all_columns,
                    categories::name,
                ))
                .order(bom_items::id.asc())
                .load::<(DbBomItem, DbComponent, String)>(conn)?
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<BomItem>, _>>()?;

            Ok(Some(ProductWithBom {
                product: product.try_into()?,
                bom_items,
            }))
        })?;

        Ok(product)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::product_code.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
        use crate::schema::{bom_items, products};

        let mut conn = self.conn()?;

        let product_id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let taken = diesel::select(diesel::dsl::exists(
                products::table.filter(products::product_code.eq(product.product_code.as_str())),
            ))
            .get_result::<bool>(conn)?;
            if taken {
                log::warn!("Product code {} is already taken", product.product_code);
                return Err(RepositoryError::Duplicate(format!(
                    "products.product_code {}",
                    product.product_code
                )));
            }

            let product_id: i32 = diesel::insert_into(products::table)
                .values(DbNewProduct::from(product))
                .returning(products::id)
                .get_result(conn)?;

            let items: Vec<DbNewBomItem> = product
                .bom_items
                .iter()
                .map(|item| DbNewBomItem::new(product_id, item))
                .collect();

            diesel::insert_into(bom_items::table)
                .values(&items)
                .execute(conn)?;

            Ok(ProductId::new(product_id)?)
        })?;

        Ok(product_id)
    }

    fn update_recommended_price(&self, id: ProductId, price: Money) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(products::recommended_price.eq(price.to_string()))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn clear_bom(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::bom_items;

        let mut conn = self.conn()?;

        let affected = diesel::delete(bom_items::table.filter(bom_items::product_id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::{production_histories, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            let history = production_histories::table
                .filter(production_histories::product_id.eq(id.get()))
                .count()
                .get_result::<i64>(conn)?;
            if history > 0 {
                log::warn!("Product {id} still has {history} production history records");
                return Err(RepositoryError::ConstraintViolation(format!(
                    "product {id} has {history} production history records"
                )));
            }

            // BOM lines go with the product through ON DELETE CASCADE.
            Ok(diesel::delete(products::table.filter(products::id.eq(id.get()))).execute(conn)?)
        })?;

        Ok(affected)
    }
}
