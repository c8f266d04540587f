use chrono::{Duration, NaiveDate, NaiveDateTime};
use pricemaster::domain::report::ReportPeriod;
use pricemaster::domain::types::{Money, ProductCode, ProductId};
use pricemaster::forms::production_history::{AddProductionHistoryForm, ProductReportForm};
use pricemaster::repository::{DieselRepository, ProductWriter, ReportReader};
use pricemaster::services::ServiceError;
use pricemaster::services::production_history::{
    add_production_history_entry, get_product_detailed_report, get_total_production_value,
};
use pricemaster::services::products::create_product;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;

fn start_of_2024() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid timestamp")
}

fn end_of_2024() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .expect("valid timestamp")
}

fn record(repo: &DieselRepository, code: &str, at: NaiveDateTime) {
    add_production_history_entry(
        AddProductionHistoryForm {
            product_code: code.to_string(),
            production_date: Some(at),
            notes: None,
        },
        repo,
    )
    .expect("record production");
}

fn set_price(repo: &DieselRepository, id: ProductId, price: Decimal) {
    repo.update_recommended_price(id, Money::new(price).expect("valid price"))
        .expect("update price");
}

fn report_form(code: &str) -> ProductReportForm {
    ProductReportForm {
        product_code: code.to_string(),
        start_date: Some(start_of_2024()),
        end_date: Some(end_of_2024()),
    }
}

/// Five records around 2024 with a distinct recommended price each.
fn seed_year(repo: &DieselRepository) -> ProductId {
    let components = common::seed_components(repo);
    let id = create_product(common::product_form("110", &components), repo)
        .expect("create product");

    let start = start_of_2024();
    let end = end_of_2024();
    let points = [
        (start - Duration::seconds(1), dec!(1000)),
        (start, dec!(2300)),
        (start + Duration::days(182), dec!(2400)),
        (end, dec!(2500)),
        (end + Duration::seconds(2), dec!(9000)),
    ];
    for (at, price) in points {
        set_price(repo, id, price);
        record(repo, "110", at);
    }
    id
}

#[test]
fn inclusive_bounds_select_three_of_five_records() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_year(&repo);

    let report = get_product_detailed_report(report_form("110"), &repo)
        .expect("valid request")
        .expect("records in range");

    assert_eq!(report.product_code.as_str(), "110");
    assert_eq!(report.count, 3);
    assert_eq!(report.total_value.get(), dec!(7200));
    assert_eq!(report.work_cost.get(), dec!(1053));
    assert_eq!(report.period_from, start_of_2024());
    assert_eq!(report.period_to, end_of_2024());
}

#[test]
fn open_bounds_fall_back_to_record_timestamps() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_year(&repo);

    let report = repo
        .product_detailed_report(
            &ProductCode::new("110").expect("valid code"),
            ReportPeriod::new(Some(start_of_2024()), None),
        )
        .expect("should query")
        .expect("records in range");

    assert_eq!(report.count, 4);
    assert_eq!(report.period_from, start_of_2024());
    assert_eq!(report.period_to, end_of_2024() + Duration::seconds(2));
}

#[test]
fn empty_range_is_absent() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_year(&repo);

    let mut form = report_form("110");
    form.start_date = Some(start_of_2024() + Duration::days(400));
    form.end_date = Some(start_of_2024() + Duration::days(500));

    let report = get_product_detailed_report(form, &repo).expect("valid request");
    assert!(report.is_none());
}

#[test]
fn reports_never_mix_products() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    seed_year(&repo);
    let components = repo_components(&repo);
    create_product(common::product_form("220", &components), &repo).expect("create 220");
    record(&repo, "220", start_of_2024() + Duration::days(10));

    let report = get_product_detailed_report(report_form("220"), &repo)
        .expect("valid request")
        .expect("records in range");
    assert_eq!(report.count, 1);
    assert_eq!(report.total_value.get(), dec!(2300));
}

#[test]
fn reversed_range_is_a_validation_failure() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let mut form = report_form("110");
    form.start_date = Some(end_of_2024());
    form.end_date = Some(start_of_2024());

    let err = get_product_detailed_report(form, &repo).expect_err("reversed range");
    assert_eq!(
        err,
        ServiceError::Validation(vec!["Start date cannot be later than end date.".to_string()])
    );
}

#[test]
fn total_value_sums_every_frozen_price() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    assert_eq!(
        get_total_production_value(&repo).expect("empty history"),
        Decimal::ZERO
    );

    seed_year(&repo);
    assert_eq!(
        get_total_production_value(&repo).expect("sum history"),
        dec!(17200)
    );
}

fn repo_components(repo: &DieselRepository) -> [pricemaster::domain::types::ComponentId; 3] {
    use pricemaster::repository::CatalogReader;

    let components = repo.list_components().expect("should list components");
    let id = |name: &str| {
        components
            .iter()
            .find(|c| c.name.as_str() == name)
            .map(|c| c.id)
            .expect("seeded component")
    };
    [id("Frame"), id("Canvas"), id("Gilding")]
}
