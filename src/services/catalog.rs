use crate::domain::types::{ComponentId, SeriesId, UnitId};
use crate::dto::catalog::{ComponentDto, NamedDto};
use crate::forms::catalog::{
    AddComponentForm, AddComponentFormPayload, AddSeriesForm, AddSeriesFormPayload, AddUnitForm,
    AddUnitFormPayload,
};
use crate::repository::{CatalogReader, CatalogWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn list_components<R>(repo: &R) -> ServiceResult<Vec<ComponentDto>>
where
    R: CatalogReader,
{
    match repo.list_components() {
        Ok(components) => Ok(components.into_iter().map(ComponentDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list components: {e}");
            Err(e.into())
        }
    }
}

pub fn add_component<R>(form: AddComponentForm, repo: &R) -> ServiceResult<ComponentId>
where
    R: CatalogWriter,
{
    let payload = AddComponentFormPayload::try_from(form)?;
    let name = payload.component.name.clone();

    match repo.create_component(&payload.component) {
        Ok(id) => {
            log::info!("Created component {name}");
            Ok(id)
        }
        Err(RepositoryError::Duplicate(e)) => {
            log::warn!("Rejected duplicate component {name}: {e}");
            Err(ServiceError::Conflict(format!(
                "Component with name {name} already exists."
            )))
        }
        Err(e) => {
            log::error!("Failed to create component {name}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

pub fn list_units<R>(repo: &R) -> ServiceResult<Vec<NamedDto>>
where
    R: CatalogReader,
{
    match repo.list_units() {
        Ok(units) => Ok(units.into_iter().map(NamedDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list units: {e}");
            Err(e.into())
        }
    }
}

pub fn add_unit<R>(form: AddUnitForm, repo: &R) -> ServiceResult<UnitId>
where
    R: CatalogWriter,
{
    let payload = AddUnitFormPayload::try_from(form)?;
    let name = payload.unit.name.clone();

    match repo.create_unit(&payload.unit) {
        Ok(id) => {
            log::info!("Created unit {name}");
            Ok(id)
        }
        Err(RepositoryError::Duplicate(e)) => {
            log::warn!("Rejected duplicate unit {name}: {e}");
            Err(ServiceError::Conflict(format!(
                "Unit with name {name} already exists."
            )))
        }
        Err(e) => {
            log::error!("Failed to create unit {name}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

pub fn list_series<R>(repo: &R) -> ServiceResult<Vec<NamedDto>>
where
    R: CatalogReader,
{
    match repo.list_series() {
        Ok(series) => Ok(series.into_iter().map(NamedDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list series: {e}");
            Err(e.into())
        }
    }
}

pub fn add_series<R>(form: AddSeriesForm, repo: &R) -> ServiceResult<SeriesId>
where
    R: CatalogWriter,
{
    let payload = AddSeriesFormPayload::try_from(form)?;
    let name = payload.series.name.clone();

    match repo.create_series(&payload.series) {
        Ok(id) => {
            log::info!("Created series {name}");
            Ok(id)
        }
        Err(RepositoryError::Duplicate(e)) => {
            log::warn!("Rejected duplicate series {name}: {e}");
            Err(ServiceError::Conflict(format!(
                "Series with name {name} already exists."
            )))
        }
        Err(e) => {
            log::error!("Failed to create series {name}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

/// Deletes a component that no BOM line uses.
pub fn remove_component<R>(component_id: i32, repo: &R) -> ServiceResult<()>
where
    R: CatalogWriter,
{
    let id = ComponentId::new(component_id)?;

    match repo.delete_component(id) {
        Ok(0) => Err(ServiceError::NotFound(format!(
            "Component with id {id} not found."
        ))),
        Ok(_) => {
            log::info!("Deleted component {id}");
            Ok(())
        }
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Refused to delete component {id}: {e}");
            Err(ServiceError::Conflict(format!(
                "Component with id {id} is used by a product."
            )))
        }
        Err(e) => {
            log::error!("Failed to delete component {id}: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::category::CategoryKind;
    use crate::domain::types::Money;
    use crate::forms::products::{BomItemForm, CreateProductForm};
    use crate::repository::test::{TestRepository, component};
    use crate::services::products::create_product;

    fn form(name: &str) -> AddComponentForm {
        AddComponentForm {
            name: name.to_string(),
            unit_id: 1,
            price_per_unit: dec!(12.4),
            category: "Artifact".to_string(),
        }
    }

    #[test]
    fn adds_and_lists_components_by_name() {
        let repo = TestRepository::default();
        add_component(form("Frame"), &repo).unwrap();
        add_component(form("Canvas"), &repo).unwrap();

        let names: Vec<String> = list_components(&repo)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Canvas", "Frame"]);
    }

    #[test]
    fn duplicate_names_conflict() {
        let repo = TestRepository::default();
        add_component(form("Frame"), &repo).unwrap();
        let err = add_component(form("Frame"), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Conflict("Component with name Frame already exists.".to_string())
        );
    }

    #[test]
    fn components_in_use_cannot_be_removed() {
        let repo = TestRepository::new(vec![
            component(1, "Frame", Money::new(dec!(12.4)).unwrap(), CategoryKind::Artifact),
            component(2, "Spare", Money::new(dec!(1)).unwrap(), CategoryKind::Artifact),
        ]);
        create_product(
            CreateProductForm {
                product_code: "110".to_string(),
                series_id: 1,
                size_width: dec!(60),
                size_height: dec!(30),
                recommended_price: dec!(2300),
                bom_items: vec![BomItemForm {
                    component_id: 1,
                    quantity: dec!(1),
                }],
                notes: None,
            },
            &repo,
        )
        .unwrap();

        assert!(matches!(
            remove_component(1, &repo),
            Err(ServiceError::Conflict(_))
        ));
        remove_component(2, &repo).unwrap();
        assert!(matches!(
            remove_component(2, &repo),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn units_and_series_reject_taken_names() {
        let repo = TestRepository::default();
        let unit = || AddUnitForm {
            name: "m".to_string(),
        };
        add_unit(unit(), &repo).unwrap();
        assert_eq!(
            add_unit(unit(), &repo).unwrap_err(),
            ServiceError::Conflict("Unit with name m already exists.".to_string())
        );

        let series = || AddSeriesForm {
            name: "Carpathians".to_string(),
        };
        add_series(series(), &repo).unwrap();
        assert_eq!(
            add_series(series(), &repo).unwrap_err(),
            ServiceError::Conflict("Series with name Carpathians already exists.".to_string())
        );

        assert_eq!(list_units(&repo).unwrap().len(), 1);
        assert_eq!(
            list_series(&repo).unwrap(),
            vec![NamedDto {
                id: 1,
                name: "Carpathians".to_string()
            }]
        );
    }

    #[test]
    fn unit_write_failures_are_internal() {
        let repo = TestRepository::default();
        repo.fail_writes();
        assert!(matches!(
            add_unit(
                AddUnitForm {
                    name: "m".to_string()
                },
                &repo
            ),
            Err(ServiceError::Internal(_))
        ));
    }
}
