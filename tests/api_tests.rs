use actix_web::{App, http::StatusCode, test, web};
use digital_resolution::{Config, routes};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .service(web::scope("/api/v1").configure(routes::configure_api)),
        )
        .await
    };
}

fn web_task(id: &str, date: &str, hours: f64, websites: u32) -> Value {
    json!({
        "id": id,
        "employeeId": "e-1",
        "role": "web_developer",
        "date": date,
        "hours": hours,
        "attendance": "present",
        "numberOfWebsites": websites
    })
}

#[actix_web::test]
async fn calendar_pads_first_week_of_2025() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/attendance/calendar")
        .set_json(json!({
            "range": { "from": "2025-01-01", "to": "2025-01-07" },
            "presentDays": ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-05"],
            "leaveDays": ["2025-01-04"],
            "absentDays": []
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["firstWeekday"], 3);
    assert_eq!(body["presentCount"], 4);
    assert_eq!(body["leaveCount"], 1);

    let cells = body["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 10);
    assert!(cells[..3].iter().all(|c| c["kind"] == "padding"));

    let statuses: Vec<&str> = cells[3..]
        .iter()
        .map(|c| c["status"].as_str().unwrap())
        .collect();
    assert_eq!(
        statuses,
        vec!["present", "present", "present", "leave", "present", "none", "none"]
    );
}

#[actix_web::test]
async fn calendar_uses_only_selected_employee_records() {
    let app = init_app!();

    let mut other = web_task("t-9", "2025-01-02", 8.0, 1);
    other["employeeId"] = json!("e-2");

    let req = test::TestRequest::post()
        .uri("/api/v1/attendance/calendar")
        .set_json(json!({
            "employeeId": "e-1",
            "range": { "from": "2025-01-01", "to": "2025-01-02" },
            "records": [web_task("t-1", "2025-01-01", 8.0, 1), other]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["presentCount"], 1);
    assert_eq!(body["cells"][4]["status"], "none");
}

#[actix_web::test]
async fn calendar_rejects_reversed_range() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/attendance/calendar")
        .set_json(json!({ "range": { "from": "2025-01-07", "to": "2025-01-01" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Invalid range: start 2025-01-07 is after end 2025-01-01"
    );
}

#[actix_web::test]
async fn calendar_rejects_ranges_over_the_limit() {
    let app = init_app!();

    let bodies = [
        json!({ "range": { "days": 90000000 } }),
        json!({ "range": { "from": "0001-01-01", "to": "9999-12-31" } }),
    ];
    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/v1/attendance/calendar")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Bad request: range may span at most 366 days");
    }
}

#[actix_web::test]
async fn summary_rejects_ranges_over_the_limit() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/summary")
        .set_json(json!({ "range": { "days": 367 }, "records": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn summary_for_web_developer() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/summary")
        .set_json(json!({
            "employeeId": "e-1",
            "role": "web_developer",
            "records": [
                web_task("a", "2025-01-01", 4.0, 1),
                web_task("b", "2025-01-02", 6.0, 2),
                web_task("c", "2025-01-03", 5.0, 1)
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalHours"], 15.0);
    assert_eq!(body["averageHours"], 5.0);
    assert_eq!(body["presentCount"], 3);
    assert_eq!(body["roleTotal"], json!({ "role": "web_developer", "total": 4 }));
    assert!(body.get("warnings").is_none());
}

#[actix_web::test]
async fn summary_reports_unknown_roles() {
    let app = init_app!();

    let mut stray = web_task("x", "2025-01-02", 2.0, 5);
    stray["role"] = json!("sound_engineer");

    let req = test::TestRequest::post()
        .uri("/api/v1/summary")
        .set_json(json!({
            "role": "web_developer",
            "today": "2025-01-05",
            "range": { "days": 7 },
            "records": [web_task("a", "2025-01-01", 4.0, 1), stray]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalHours"], 6.0);
    assert_eq!(body["roleTotal"]["total"], 1);
    assert_eq!(
        body["warnings"],
        json!([{ "kind": "unknown_role", "recordId": "x", "role": "sound_engineer" }])
    );
}

#[actix_web::test]
async fn summary_rejects_days_with_from_to() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/summary")
        .set_json(json!({
            "range": { "days": 7, "from": "2025-01-01", "to": "2025-01-07" },
            "records": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn buckets_trail_the_anchor() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/summary/buckets")
        .set_json(json!({
            "today": "2025-01-10",
            "records": [
                web_task("a", "2025-01-10", 3.0, 1),
                web_task("b", "2025-01-04", 4.0, 1),
                web_task("c", "2024-12-20", 5.0, 1)
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["daily"]["hours"], 3.0);
    assert_eq!(body["weekly"]["hours"], 7.0);
    assert_eq!(body["monthly"]["hours"], 12.0);
}

#[actix_web::test]
async fn buckets_reject_summary_only_fields() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/summary/buckets")
        .set_json(json!({
            "today": "2025-01-10",
            "range": { "days": 7 },
            "records": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn ranking_orders_departments_by_hours() {
    let app = init_app!();

    let mut design = web_task("d", "2025-01-10", 9.0, 0);
    design["role"] = json!("graphic_designer");

    let req = test::TestRequest::post()
        .uri("/api/v1/ranking")
        .set_json(json!({
            "groupBy": "department",
            "granularity": "daily",
            "today": "2025-01-10",
            "records": [web_task("a", "2025-01-10", 4.0, 1), design, web_task("b", "2025-01-09", 8.0, 1)]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!([
            { "key": "graphic_designer", "totalHours": 9.0, "recordCount": 1 },
            { "key": "web_developer", "totalHours": 4.0, "recordCount": 1 }
        ])
    );
}

#[actix_web::test]
async fn employee_search_third_page() {
    let app = init_app!();

    let employees: Vec<Value> = (1..=23)
        .map(|i| json!({ "id": format!("e-{i}"), "name": format!("Employee {i}"), "department": "marketer" }))
        .collect();

    let req = test::TestRequest::post()
        .uri("/api/v1/employees/search")
        .set_json(json!({ "page": 3, "perPage": 10, "employees": employees }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["total"], 23);
    assert_eq!(body["totalPages"], 3);
}

#[actix_web::test]
async fn client_search_matches_location() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/clients/search")
        .set_json(json!({
            "search": "SYLHET",
            "clients": [
                { "id": "c-1", "name": "Rahim", "location": "Dhaka" },
                { "id": "c-2", "name": "Selina", "location": "Sylhet" }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["id"], "c-2");
    assert_eq!(body["perPage"], 10);
}

#[actix_web::test]
async fn salary_summary_by_department() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/salary/summary")
        .set_json(json!({
            "salaries": [
                { "employeeId": "a", "department": "video_editor", "month": "2025-01-01", "baseSalary": 30000.0, "bonus": 1000.0, "deductions": 500.0 },
                { "employeeId": "b", "department": "video_editor", "month": "2025-01-01", "baseSalary": 20000.0 }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalNet"], 50500.0);
    assert_eq!(body["employeeCount"], 2);
    assert_eq!(body["byDepartment"][0]["employeeCount"], 2);
}

#[actix_web::test]
async fn friday_submission_is_locked() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/tasks/eligibility")
        .set_json(json!({ "action": "submit", "date": "2025-01-10", "today": "2025-01-10" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "allowed": false, "reason": "locked_weekday" }));

    let req = test::TestRequest::post()
        .uri("/api/v1/tasks/eligibility")
        .set_json(json!({ "action": "edit", "date": "2025-01-08", "today": "2025-01-08" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "allowed": true }));
}
