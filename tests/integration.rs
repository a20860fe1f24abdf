//! Integration tests for the payroll engine.
//!
//! This test suite covers:
//! - Salaried and hourly breakdowns through the HTTP API
//! - Weekday overtime and the Saturday rule
//! - PTO for both pay types
//! - Pre-tax deductions exceeding gross
//! - Payroll runs over a roster, including skipped employees
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{PayrollCalculator, aggregate_hours};
use payroll_engine::config::{ConfigLoader, HoursRules};
use payroll_engine::models::{
    Employee, EmployeeStatus, EntriesByDate, MedicalCoverage, PayConfiguration, PayPeriod,
    PayType, TimeEntry, index_entries_by_date,
};
use payroll_engine::orchestrator::PayrollRunner;
use payroll_engine::store::InMemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn employee_json(id: &str, pay_type: &str) -> Value {
    json!({
        "id": id,
        "first_name": "Katherine",
        "last_name": "Johnson",
        "pay_type": pay_type
    })
}

fn calculation_request(
    pay_type: &str,
    base_pay: &str,
    dependents: u32,
    medical_coverage: &str,
    entries: Vec<Value>,
) -> Value {
    json!({
        "employee": employee_json("E3001", pay_type),
        "pay_configuration": {
            "pay_type": pay_type,
            "base_pay": base_pay,
            "dependents": dependents,
            "medical_coverage": medical_coverage
        },
        "pay_period": { "start_date": "2026-01-12", "end_date": "2026-01-18" },
        "time_entries": entries
    })
}

fn worked(date: &str, hours: &str) -> Value {
    json!({ "work_date": date, "hours_worked": hours })
}

fn pto(date: &str, hours: &str) -> Value {
    json!({ "work_date": date, "pto_hours": hours })
}

fn assert_money(value: &Value, expected: &str) {
    assert_eq!(value, &json!(expected), "expected {} got {}", expected, value);
}

// =============================================================================
// Salaried employees
// =============================================================================

#[tokio::test]
async fn test_salary_52000_single() {
    let request = calculation_request("salary", "52000", 0, "single", vec![]);
    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &body["breakdown"];
    assert_money(&breakdown["gross"], "1000.00");
    assert_money(&breakdown["pretax"], "50.00");
    assert_money(&breakdown["taxable"], "950.00");
    assert_money(&breakdown["state_employee"], "29.93");
    assert_money(&breakdown["federal_employee"], "72.68");
    assert_money(&breakdown["social_security_employee"], "58.90");
    assert_money(&breakdown["medicare_employee"], "13.78");
    assert_money(&breakdown["federal_employer"], "72.68");
    assert_money(&breakdown["net"], "774.73");
    assert_eq!(decimal(body["hours"]["regular_hours"].as_str().unwrap()), decimal("40"));
}

#[tokio::test]
async fn test_salary_pto_is_reported_but_not_paid() {
    let request = calculation_request(
        "salary",
        "52000",
        0,
        "single",
        vec![pto("2026-01-14", "8"), pto("2026-01-15", "4")],
    );
    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(body["hours"]["regular_hours"].as_str().unwrap()), decimal("40"));
    assert_eq!(decimal(body["hours"]["pto_hours"].as_str().unwrap()), decimal("12"));
    assert_money(&body["breakdown"]["gross"], "1000.00");
}

#[tokio::test]
async fn test_salary_low_pay_yields_negative_net() {
    let request = calculation_request("salary", "1000", 0, "single", vec![]);
    let (_, body) = post(create_router_for_test(), "/calculate", request).await;

    let breakdown = &body["breakdown"];
    assert_money(&breakdown["gross"], "19.23");
    assert_money(&breakdown["taxable"], "0.00");
    assert_money(&breakdown["federal_employee"], "0.00");
    assert_money(&breakdown["net"], "-30.77");
}

// =============================================================================
// Hourly employees
// =============================================================================

#[tokio::test]
async fn test_hourly_weekday_overtime_family_coverage() {
    let request = calculation_request(
        "hourly",
        "20",
        2,
        "family",
        vec![worked("2026-01-13", "10")],
    );
    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &body["breakdown"];
    assert_money(&breakdown["gross"], "310.00");
    assert_money(&breakdown["pretax"], "100.00");
    assert_money(&breakdown["taxable"], "210.00");
    assert_money(&breakdown["state_employee"], "6.62");
    assert_money(&breakdown["federal_employee"], "16.07");
    assert_money(&breakdown["social_security_employee"], "13.02");
    assert_money(&breakdown["medicare_employee"], "3.05");
    assert_money(&breakdown["net"], "171.26");
}

#[tokio::test]
async fn test_hourly_full_week_with_saturday_overtime() {
    let request = calculation_request(
        "hourly",
        "22.50",
        0,
        "single",
        vec![
            worked("2026-01-12", "8"),
            worked("2026-01-13", "9.5"),
            worked("2026-01-14", "8"),
            worked("2026-01-15", "8"),
            worked("2026-01-16", "6"),
            worked("2026-01-17", "4"),
        ],
    );
    let (_, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(decimal(body["hours"]["regular_hours"].as_str().unwrap()), decimal("38"));
    assert_eq!(decimal(body["hours"]["overtime_hours"].as_str().unwrap()), decimal("5.5"));
    assert_money(&body["breakdown"]["gross"], "1040.63");
    assert_money(&body["breakdown"]["net"], "807.85");
}

#[tokio::test]
async fn test_hourly_sunday_uses_daily_threshold() {
    let request = calculation_request(
        "hourly",
        "20",
        0,
        "single",
        vec![worked("2026-01-18", "10")],
    );
    let (_, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(decimal(body["hours"]["regular_hours"].as_str().unwrap()), decimal("8"));
    assert_eq!(decimal(body["hours"]["overtime_hours"].as_str().unwrap()), decimal("2"));
}

#[tokio::test]
async fn test_hourly_entries_outside_period_are_ignored() {
    let request = calculation_request(
        "hourly",
        "20",
        0,
        "single",
        vec![worked("2026-01-11", "8"), worked("2026-01-19", "8")],
    );
    let (_, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_money(&body["breakdown"]["gross"], "0.00");
    assert_money(&body["breakdown"]["net"], "-50.00");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_pay_type_mismatch_is_rejected() {
    let mut request = calculation_request("hourly", "20", 0, "single", vec![]);
    request["employee"]["pay_type"] = json!("salary");

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], json!("PAY_TYPE_MISMATCH"));
}

#[tokio::test]
async fn test_negative_base_pay_is_rejected() {
    let request = calculation_request("hourly", "-5", 0, "single", vec![]);

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], json!("INVALID_CONFIGURATION"));
}

#[tokio::test]
async fn test_unknown_pay_type_is_malformed() {
    let mut request = calculation_request("hourly", "20", 0, "single", vec![]);
    request["employee"]["pay_type"] = json!("commission");

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("MALFORMED_JSON"));
}

// =============================================================================
// Payroll runs
// =============================================================================

#[tokio::test]
async fn test_payroll_run_over_roster() {
    let request = json!({
        "pay_period": { "start_date": "2026-01-12", "end_date": "2026-01-18" },
        "calculated_by": "payroll_clerk",
        "employees": [
            {
                "employee": employee_json("S1", "salary"),
                "pay_configuration": {
                    "pay_type": "salary",
                    "base_pay": "50000",
                    "dependents": 1
                }
            },
            {
                "employee": {
                    "id": "T1",
                    "first_name": "Former",
                    "last_name": "Employee",
                    "pay_type": "hourly",
                    "status": "terminated"
                },
                "pay_configuration": { "pay_type": "hourly", "base_pay": "20" },
                "time_entries": [{ "work_date": "2026-01-13", "hours_worked": "8" }]
            },
            {
                "employee": employee_json("M1", "hourly"),
                "pay_configuration": { "pay_type": "salary", "base_pay": "40000" }
            }
        ]
    });

    let (status, body) = post(create_router_for_test(), "/payroll-runs", request).await;

    assert_eq!(status, StatusCode::CREATED);
    let paychecks = body["paychecks"].as_array().unwrap();
    assert_eq!(paychecks.len(), 1);
    assert_eq!(paychecks[0]["employee_id"], json!("S1"));
    assert_eq!(paychecks[0]["employee_name"], json!("Johnson, Katherine"));
    assert_money(&paychecks[0]["breakdown"]["gross"], "1006.54");
    assert_money(&paychecks[0]["breakdown"]["net"], "780.06");

    let skipped = body["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["employee_id"], json!("M1"));

    assert_money(&body["total_gross"], "1006.54");
    assert_money(&body["total_net"], "780.06");
}

// =============================================================================
// Library API
// =============================================================================

#[test]
fn test_library_compute_matches_http_path() {
    let employee = Employee {
        id: "E3001".to_string(),
        first_name: "Katherine".to_string(),
        last_name: "Johnson".to_string(),
        pay_type: PayType::Hourly,
        status: EmployeeStatus::Active,
    };
    let configuration = PayConfiguration {
        pay_type: PayType::Hourly,
        base_pay: decimal("20"),
        dependents: 2,
        medical_coverage: MedicalCoverage::Family,
    };
    let period = PayPeriod::new(make_date("2026-01-12"), make_date("2026-01-18")).unwrap();
    let entries = index_entries_by_date(vec![TimeEntry::new(
        "E3001",
        make_date("2026-01-13"),
        decimal("10"),
        Decimal::ZERO,
    )])
    .unwrap();

    let config = ConfigLoader::load("./config/payroll").unwrap();
    let rates = config.rates_for(period.start_date).unwrap();
    let breakdown = PayrollCalculator::new(rates)
        .compute(&employee, Some(&configuration), &period, &entries)
        .unwrap();

    assert_eq!(breakdown.gross, decimal("310.00"));
    assert_eq!(breakdown.net, decimal("171.26"));
}

#[test]
fn test_aggregate_hours_with_empty_entries() {
    let period = PayPeriod::new(make_date("2026-01-12"), make_date("2026-01-25")).unwrap();
    let rules = HoursRules::default();

    let hourly = aggregate_hours(PayType::Hourly, &EntriesByDate::new(), &period, &rules);
    assert_eq!(hourly.paid_hours(), Decimal::ZERO);

    let salaried = aggregate_hours(PayType::Salary, &EntriesByDate::new(), &period, &rules);
    assert_eq!(salaried.regular_hours, decimal("80"));
    assert_eq!(salaried.overtime_hours, Decimal::ZERO);
}

#[test]
fn test_runner_with_in_memory_store() {
    let store = InMemoryStore::new();
    store.set_pay_configuration(
        "H1",
        PayConfiguration {
            pay_type: PayType::Hourly,
            base_pay: decimal("22.50"),
            dependents: 0,
            medical_coverage: MedicalCoverage::Single,
        },
    );
    for (date, hours) in [
        ("2026-01-12", "8"),
        ("2026-01-13", "9.5"),
        ("2026-01-14", "8"),
        ("2026-01-15", "8"),
        ("2026-01-16", "6"),
        ("2026-01-17", "4"),
    ] {
        store
            .save_time_entry(TimeEntry::new("H1", make_date(date), decimal(hours), Decimal::ZERO))
            .unwrap();
    }

    let employees = vec![Employee {
        id: "H1".to_string(),
        first_name: "Dorothy".to_string(),
        last_name: "Vaughan".to_string(),
        pay_type: PayType::Hourly,
        status: EmployeeStatus::Active,
    }];
    let period = PayPeriod::new(make_date("2026-01-12"), make_date("2026-01-18")).unwrap();

    let run = PayrollRunner::default()
        .run(&store, &employees, period, None)
        .unwrap();

    let paycheck = run.paycheck_for("H1").unwrap();
    assert_eq!(paycheck.breakdown.gross, decimal("1040.63"));
    assert_eq!(paycheck.breakdown.net, decimal("807.85"));
    assert_eq!(store.paychecks_for_run(run.id).len(), 1);
}
