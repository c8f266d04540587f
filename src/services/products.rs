use chrono::Utc;

use crate::domain::types::{ProductCode, ProductId};
use crate::dto::products::ProductDto;
use crate::forms::products::{CreateProductForm, CreateProductFormPayload};
use crate::repository::{ProductReader, ProductWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

fn duplicate_code(code: &ProductCode) -> ServiceError {
    ServiceError::Conflict(format!("Product with code {code} already exists."))
}

/// Validates `form` and stores the product with its BOM.
///
/// A code that is already taken, whether detected up front or by the unique
/// index on insert, is reported as a conflict.
pub fn create_product<R>(form: CreateProductForm, repo: &R) -> ServiceResult<ProductId>
where
    R: ProductReader + ProductWriter,
{
    let payload = CreateProductFormPayload::try_from(form)?;
    let code = payload.product_code.clone();

    match repo.product_exists(&code) {
        Ok(false) => {}
        Ok(true) => {
            log::warn!("Rejected duplicate product code {code}");
            return Err(duplicate_code(&code));
        }
        Err(e) => {
            log::error!("Failed to check product code {code}: {e}");
            return Err(ServiceError::Internal(e.to_string()));
        }
    }

    let product = payload.into_new_product(Utc::now().naive_utc());
    match repo.create_product(&product) {
        Ok(id) => {
            log::info!(
                "Created product {code} with {} BOM items",
                product.bom_items.len()
            );
            Ok(id)
        }
        Err(RepositoryError::Duplicate(e)) => {
            log::warn!("Product code {code} taken concurrently: {e}");
            Err(duplicate_code(&code))
        }
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Product {code} references unknown rows: {e}");
            Err(ServiceError::Validation(vec![format!(
                "Product {code} references an unknown series or component."
            )]))
        }
        Err(e) => {
            log::error!("Failed to create product {code}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Lists the catalog ordered by product code.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::category::CategoryKind;
    use crate::domain::types::Money;
    use crate::domain::product::{NewProduct, Product, ProductWithBom};
    use crate::forms::products::BomItemForm;
    use crate::repository::RepositoryResult;
    use crate::repository::test::{TestRepository, component};

    /// Reports every code as free, as a reader racing another writer would.
    struct StaleReadRepository(TestRepository);

    impl ProductReader for StaleReadRepository {
        fn product_exists(&self, _code: &ProductCode) -> RepositoryResult<bool> {
            Ok(false)
        }

        fn get_product_by_code_with_bom(
            &self,
            code: &ProductCode,
        ) -> RepositoryResult<Option<ProductWithBom>> {
            self.0.get_product_by_code_with_bom(code)
        }

        fn list_products(&self) -> RepositoryResult<Vec<Product>> {
            self.0.list_products()
        }
    }

    impl ProductWriter for StaleReadRepository {
        fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
            self.0.create_product(product)
        }

        fn update_recommended_price(&self, id: ProductId, price: Money) -> RepositoryResult<usize> {
            self.0.update_recommended_price(id, price)
        }

        fn clear_bom(&self, id: ProductId) -> RepositoryResult<usize> {
            self.0.clear_bom(id)
        }

        fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
            self.0.delete_product(id)
        }
    }

    fn repo() -> TestRepository {
        TestRepository::new(vec![
            component(1, "Frame", Money::new(dec!(12.40)).unwrap(), CategoryKind::Artifact),
            component(2, "Canvas", Money::new(dec!(450.55)).unwrap(), CategoryKind::BaseMaterial),
        ])
    }

    fn form(code: &str) -> CreateProductForm {
        CreateProductForm {
            product_code: code.to_string(),
            series_id: 1,
            size_width: dec!(60),
            size_height: dec!(30),
            recommended_price: dec!(2300),
            bom_items: vec![
                BomItemForm {
                    component_id: 1,
                    quantity: dec!(4),
                },
                BomItemForm {
                    component_id: 2,
                    quantity: dec!(0.18),
                },
            ],
            notes: None,
        }
    }

    #[test]
    fn creates_product_with_every_bom_item() {
        let repo = repo();
        create_product(form("110"), &repo).unwrap();

        let products = repo.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].bom_items.len(), 2);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let repo = repo();
        create_product(form("110"), &repo).unwrap();

        let err = create_product(form("110"), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Conflict("Product with code 110 already exists.".to_string())
        );
        assert_eq!(repo.products().len(), 1);
    }

    #[test]
    fn invalid_form_never_reaches_the_store() {
        let repo = repo();
        let err = create_product(CreateProductForm::default(), &repo).unwrap_err();
        assert_eq!(err.messages().len(), 6);
        assert!(repo.products().is_empty());
    }

    #[test]
    fn unknown_component_is_a_failure_result() {
        let repo = repo();
        let mut request = form("111");
        request.bom_items[0].component_id = 99;

        let err = create_product(request, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.products().is_empty());
    }

    #[test]
    fn store_failures_become_internal_errors() {
        let repo = repo();
        repo.fail_writes();
        let err = create_product(form("110"), &repo).unwrap_err();
        assert_eq!(err.to_string(), "Internal error: disk I/O error");
    }

    #[test]
    fn lists_products_by_code() {
        let repo = repo();
        create_product(form("220"), &repo).unwrap();
        create_product(form("110"), &repo).unwrap();

        let codes: Vec<String> = list_products(&repo)
            .unwrap()
            .into_iter()
            .map(|p| p.product_code)
            .collect();
        assert_eq!(codes, vec!["110", "220"]);
    }

    #[test]
    fn duplicate_detected_on_insert_is_a_conflict() {
        let repo = StaleReadRepository(repo());
        create_product(form("110"), &repo).unwrap();

        let err = create_product(form("110"), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Conflict("Product with code 110 already exists.".to_string())
        );
        assert_eq!(repo.0.products().len(), 1);
    }
}
