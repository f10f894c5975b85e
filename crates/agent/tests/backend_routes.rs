use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use revrec_agent::AgentRuntime;
use revrec_core::config::BackendConfig;
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct StubBackend {
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    fn record(&self, entry: String) {
        self.seen.lock().expect("stub lock").push(entry);
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("stub lock").clone()
    }
}

async fn add_customer(State(stub): State<StubBackend>, Json(body): Json<Value>) -> String {
    stub.record(format!("POST /customers {body}"));
    format!("{} has ID 4", body["name"].as_str().unwrap_or_default())
}

async fn list_customers(State(stub): State<StubBackend>) -> Json<Value> {
    stub.record("GET /customers".to_string());
    Json(json!([{ "id": 4, "name": "Acme Co" }, { "id": 5, "name": "Alpha" }]))
}

async fn customer_by_name(
    State(stub): State<StubBackend>,
    Path(name): Path<String>,
) -> Json<Value> {
    stub.record(format!("GET /customers/name/{name}"));
    Json(json!({ "id": 4, "name": name }))
}

async fn customer_by_id(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    stub.record(format!("GET /customers/id/{id}"));
    if id == 4 {
        Ok(Json(json!({ "id": 4, "name": "Acme Co" })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn contracts_for_customer(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
) -> Json<Value> {
    stub.record(format!("GET /customers/id/{id}/contracts"));
    Json(json!([]))
}

async fn add_contract(State(stub): State<StubBackend>, Json(body): Json<Value>) -> String {
    stub.record(format!("POST /contracts {body}"));
    "Contract 1 was added".to_string()
}

async fn segments_for_contract(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
) -> Json<Value> {
    stub.record(format!("GET /contracts/id/{id}/revenuesegments"));
    Json(json!([
        {
            "id": 1, "contract_id": id, "name": "Setup", "type": "point_in_time",
            "amount": 500, "delay_rev_start_mths": 0, "delay_inv_from_rev_mths": 0,
            "length_rev_mths": 1, "invoice_schedule": "upfront"
        },
        {
            "id": 2, "contract_id": id, "name": "Support", "type": "ratable",
            "amount": 2400, "delay_rev_start_mths": 2, "delay_inv_from_rev_mths": 1,
            "length_rev_mths": 24, "invoice_schedule": "quarterly"
        }
    ]))
}

async fn clear_database(State(stub): State<StubBackend>) -> &'static str {
    stub.record("DELETE /clear_database".to_string());
    "Database cleared"
}

async fn dataframe(State(stub): State<StubBackend>) -> &'static str {
    stub.record("GET /dataframe".to_string());
    "Dataframe populated"
}

async fn spawn_stub() -> (SocketAddr, StubBackend) {
    let stub = StubBackend::default();
    let app = Router::new()
        .route("/customers", get(list_customers).post(add_customer))
        .route("/customers/name/{name}", get(customer_by_name))
        .route("/customers/id/{id}", get(customer_by_id))
        .route("/customers/id/{id}/contracts", get(contracts_for_customer))
        .route("/contracts", post(add_contract))
        .route("/contracts/id/{id}/revenuesegments", get(segments_for_contract))
        .route("/clear_database", delete(clear_database))
        .route("/dataframe", get(dataframe))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub backend");
    let address = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (address, stub)
}

fn runtime_for(address: SocketAddr) -> AgentRuntime {
    AgentRuntime::from_config(&BackendConfig {
        base_url: format!("http://{address}"),
        timeout_secs: 5,
    })
    .expect("runtime should build")
}

#[tokio::test]
async fn customer_functions_round_trip_through_http() {
    let (address, stub) = spawn_stub().await;
    let runtime = runtime_for(address);

    let added = runtime.invoke("addcustomer", "Acme Co").await.expect("addcustomer");
    assert_eq!(added, "Acme Co has ID 4");

    let names = runtime.invoke("getcustomers", "").await.expect("getcustomers");
    assert_eq!(names, "Acme Co, Alpha");

    let by_name = runtime
        .invoke("getcustomerbyname", r#"{"name": "Acme Co"}"#)
        .await
        .expect("getcustomerbyname");
    assert_eq!(by_name, "The customer ID is 4");

    let by_id = runtime.invoke("getcustomerbyid", "{'id': 4}").await.expect("getcustomerbyid");
    assert_eq!(by_id, "Customer name is Acme Co");

    assert_eq!(
        stub.seen(),
        vec![
            r#"POST /customers {"name":"Acme Co"}"#.to_string(),
            "GET /customers".to_string(),
            "GET /customers/name/Acme Co".to_string(),
            "GET /customers/id/4".to_string(),
        ]
    );
}

#[tokio::test]
async fn contract_and_segment_functions_use_documented_routes() {
    let (address, stub) = spawn_stub().await;
    let runtime = runtime_for(address);

    let added = runtime
        .handle_call_line("Ask Func[addcontract]: {'customer_id': 4, 'booked_month': 3}")
        .await
        .expect("addcontract");
    assert_eq!(added, "Func[addcontract] says: Contract 1 was added");

    let contracts = runtime
        .invoke("getcontractsforcustomer", r#"{"customer_id": 4}"#)
        .await
        .expect("getcontractsforcustomer");
    assert_eq!(contracts, "No contracts for this customer");

    let segments = runtime
        .invoke("getrevenuesegmentsforcontract", r#"{"contract_id": 1}"#)
        .await
        .expect("getrevenuesegmentsforcontract");
    assert!(segments.starts_with("Revenue segments: Setup, Support\nAmounts: 500, 2400\n"));
    assert!(segments.contains(
        "Support: revenue from month +2 for 24 months, invoiced 1 months after revenue (quarterly)"
    ));

    assert_eq!(
        stub.seen(),
        vec![
            r#"POST /contracts {"customer_id":4,"booked_month":3}"#.to_string(),
            "GET /customers/id/4/contracts".to_string(),
            "GET /contracts/id/1/revenuesegments".to_string(),
        ]
    );
}

#[tokio::test]
async fn maintenance_functions_relay_backend_text() {
    let (address, stub) = spawn_stub().await;
    let runtime = runtime_for(address);

    assert_eq!(runtime.invoke("cleardatabase", "").await.expect("clear"), "Database cleared");
    assert_eq!(
        runtime.invoke("populatedataframe", "").await.expect("dataframe"),
        "Dataframe populated"
    );
    assert_eq!(stub.seen(), vec!["DELETE /clear_database", "GET /dataframe"]);
}

#[tokio::test]
async fn missing_customer_surfaces_backend_status() {
    let (address, _stub) = spawn_stub().await;
    let runtime = runtime_for(address);

    let error = runtime
        .invoke("getcustomerbyid", r#"{"id": 99}"#)
        .await
        .expect_err("unknown customer should fail");
    assert!(error.to_string().contains("status 404"), "unexpected error: {error}");
}
