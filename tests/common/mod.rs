//! Shared helpers for integration tests: an in-process stand-in for the
//! remote accounting API plus an app router wired against it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use pcge_frontend::config::ContabilidadSettings;
use pcge_frontend::services::accounting_client::AccountingClient;
use pcge_frontend::startup::build_router;
use pcge_frontend::AppState;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,pcge_frontend=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// One request observed by the mock accounting API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned data and behavior switches for the mock accounting API.
pub struct MockOptions {
    pub accounts: Value,
    pub vouchers: Value,
    pub entries: Value,
    pub movements: Value,
    pub balance: Value,
    pub sale_response: Value,
    /// Status for the sale endpoints; 200 answers with `sale_response`.
    pub sale_status: StatusCode,
    /// When set, every query endpoint answers 500.
    pub broken: bool,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            accounts: json!([
                {
                    "codigo": "10",
                    "nombre": "Efectivo y Equivalentes de Efectivo",
                    "nivel": 1,
                    "tipo": "ACTIVO",
                    "padreId": null
                },
                {
                    "codigo": "70",
                    "nombre": "Ventas",
                    "nivel": 1,
                    "tipo": "INGRESO",
                    "padreId": null
                }
            ]),
            vouchers: json!([
                {
                    "numeroOperacion": 900,
                    "fechaEmision": "2024-01-10",
                    "fechaVencimiento": null,
                    "tipoComprobante": "01",
                    "numeroSerie": "F001",
                    "numeroDocumento": "12345678",
                    "tipoDocumentoIdentidad": "6",
                    "numeroDocumentoIdentidad": "20123456789",
                    "cliente": "Empresa ABC",
                    "tipoVenta": "CONTADO",
                    "montoTotal": 150.5
                }
            ]),
            entries: json!([
                {
                    "numeroAsiento": "AS-001",
                    "fecha": "2024-01-10",
                    "descripcion": "Venta al contado - Empresa ABC",
                    "movimientos": [
                        {
                            "cuenta": {"codigo": "10", "nombre": "Efectivo"},
                            "debe": 150.5,
                            "haber": 0
                        },
                        {
                            "cuenta": {"codigo": "70", "nombre": "Ventas"},
                            "debe": 0,
                            "haber": 150.5
                        }
                    ]
                }
            ]),
            movements: json!([
                {"id": 1, "debe": 100, "haber": 0},
                {"id": 2, "debe": 0, "haber": 250}
            ]),
            balance: json!(1234.5),
            sale_response: json!({
                "numeroAsiento": "AS-100",
                "fecha": "2024-01-15",
                "descripcion": "Venta al contado - Empresa ABC",
                "movimientos": [
                    {
                        "cuenta": {"codigo": "10", "nombre": "Efectivo"},
                        "debe": 150.5,
                        "haber": 0
                    },
                    {
                        "cuenta": {"codigo": "70", "nombre": "Ventas"},
                        "debe": 0,
                        "haber": 150.5
                    }
                ]
            }),
            sale_status: StatusCode::OK,
            broken: false,
        }
    }
}

pub struct MockState {
    options: MockOptions,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    fn record(&self, method: &str, path: String, body: Option<Value>) {
        self.requests
            .lock()
            .expect("mock request log")
            .push(RecordedRequest {
                method: method.to_string(),
                path,
                body,
            });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock request log").clone()
    }

    fn query(&self, data: &Value) -> Response {
        if self.options.broken {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        } else {
            Json(data.clone()).into_response()
        }
    }
}

async fn cuentas(State(mock): State<Arc<MockState>>) -> Response {
    mock.record("GET", "/cuentas".to_string(), None);
    mock.query(&mock.options.accounts)
}

async fn comprobantes(State(mock): State<Arc<MockState>>) -> Response {
    mock.record("GET", "/contabilidad/comprobantes".to_string(), None);
    mock.query(&mock.options.vouchers)
}

async fn asientos(State(mock): State<Arc<MockState>>) -> Response {
    mock.record("GET", "/contabilidad/asientos".to_string(), None);
    mock.query(&mock.options.entries)
}

async fn libro_mayor(
    State(mock): State<Arc<MockState>>,
    Path(codigo): Path<String>,
) -> Response {
    mock.record(
        "GET",
        format!("/contabilidad/libro-mayor/{codigo}"),
        None,
    );
    mock.query(&mock.options.movements)
}

async fn saldo(State(mock): State<Arc<MockState>>, Path(codigo): Path<String>) -> Response {
    mock.record("GET", format!("/contabilidad/saldo/{codigo}"), None);
    mock.query(&mock.options.balance)
}

async fn venta_contado(
    State(mock): State<Arc<MockState>>,
    Json(body): Json<Value>,
) -> Response {
    mock.record("POST", "/contabilidad/venta-contado".to_string(), Some(body));
    sale_response(&mock)
}

async fn venta_credito(
    State(mock): State<Arc<MockState>>,
    Json(body): Json<Value>,
) -> Response {
    mock.record("POST", "/contabilidad/venta-credito".to_string(), Some(body));
    sale_response(&mock)
}

fn sale_response(mock: &MockState) -> Response {
    if mock.options.sale_status == StatusCode::OK {
        Json(mock.options.sale_response.clone()).into_response()
    } else {
        mock.options.sale_status.into_response()
    }
}

fn mock_router(mock: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/cuentas", get(cuentas))
        .route("/api/contabilidad/comprobantes", get(comprobantes))
        .route("/api/contabilidad/asientos", get(asientos))
        .route("/api/contabilidad/libro-mayor/:codigo", get(libro_mayor))
        .route("/api/contabilidad/saldo/:codigo", get(saldo))
        .route("/api/contabilidad/venta-contado", post(venta_contado))
        .route("/api/contabilidad/venta-credito", post(venta_credito))
        .with_state(mock)
}

/// The app under test plus a handle on the mock accounting API behind it.
pub struct TestApp {
    pub router: Router,
    pub mock: Arc<MockState>,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn post_form(&self, path: &str, body: String) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body))
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
        (status, headers, body)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(MockOptions::default()).await
}

/// Start the mock API on an ephemeral port and build the app against it.
/// The app itself is driven through `oneshot`, so only the mock needs a
/// real socket.
pub async fn spawn_app_with(options: MockOptions) -> TestApp {
    init_tracing();
    pcge_frontend::services::metrics::init_metrics();

    let mock = Arc::new(MockState {
        options,
        requests: Mutex::new(Vec::new()),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock addr");
    let upstream = mock_router(mock.clone());
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.ok();
    });

    let settings = ContabilidadSettings {
        base_url: format!("http://{addr}/api"),
        timeout_seconds: 5,
    };
    let api = AccountingClient::new(&settings).expect("accounting client");
    let router = build_router(AppState::new(Arc::new(api)));

    TestApp { router, mock }
}

fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, value.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&")
}

/// A complete, valid cash-sale form body; `overrides` replace fields by
/// their form name (or add new ones).
pub fn sale_form(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        ("numeroOperacion", "1001"),
        ("cliente", "Empresa ABC"),
        ("tipoVenta", "CONTADO"),
        ("montoTotal", "150.50"),
        ("descripcion", ""),
        ("tipoComprobante", "01"),
        ("numeroSerie", "F001"),
        ("numeroDocumento", "12345678"),
        ("tipoDocumentoIdentidad", "6"),
        ("numeroDocumentoIdentidad", "20123456789"),
        ("fechaEmision", "2024-01-15"),
        ("fechaVencimiento", ""),
    ];

    for (name, value) in overrides.iter().copied() {
        match fields.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = value,
            None => fields.push((name, value)),
        }
    }

    encode_form(&fields)
}
