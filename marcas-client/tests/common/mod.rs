//! 共享测试工具：进程内的假商标服务
//!
//! 行为与真实服务一致：按 id 倒序返回、注册号唯一、错误体为 `{"detail": ...}`。

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use marcas_client::{ClientConfig, HttpMarcaClient};

/// 假服务的内部状态
#[derive(Default)]
pub struct FakeState {
    pub rows: Vec<Value>,
    pub next_id: i64,
    /// 记录收到的请求（"METHOD path"）
    pub requests: Vec<String>,
}

pub type SharedState = Arc<Mutex<FakeState>>;

/// 启动假服务，返回指向它的客户端与共享状态
pub async fn spawn_fake_service() -> (HttpMarcaClient, SharedState) {
    let state: SharedState = Arc::new(Mutex::new(FakeState {
        next_id: 1,
        ..FakeState::default()
    }));

    let app = Router::new()
        .route("/marcas/", get(list).post(create))
        .route("/marcas/buscar/:term", get(search))
        .route("/marcas/:id", put(update).delete(remove))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = HttpMarcaClient::new(&ClientConfig::new(format!("http://{addr}/"))).unwrap();
    (client, state)
}

/// 返回一个未被监听的地址对应的客户端（用于连接失败场景）
pub async fn unreachable_client() -> HttpMarcaClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    HttpMarcaClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap()
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn sorted_desc(rows: &[Value]) -> Vec<Value> {
    let mut rows = rows.to_vec();
    rows.sort_by_key(|r| std::cmp::Reverse(r["id"].as_i64().unwrap_or_default()));
    rows
}

async fn list(State(state): State<SharedState>) -> Json<Vec<Value>> {
    let mut guard = state.lock().unwrap();
    guard.requests.push("GET /marcas/".to_string());
    Json(sorted_desc(&guard.rows))
}

async fn search(State(state): State<SharedState>, Path(term): Path<String>) -> Json<Vec<Value>> {
    let mut guard = state.lock().unwrap();
    guard.requests.push(format!("GET /marcas/buscar/{term}"));
    let needle = term.to_lowercase();
    let matches: Vec<Value> = guard
        .rows
        .iter()
        .filter(|row| {
            ["nombre", "titular", "numero_registro"].iter().any(|key| {
                row[*key]
                    .as_str()
                    .is_some_and(|v| v.to_lowercase().contains(&needle))
            })
        })
        .cloned()
        .collect();
    Json(sorted_desc(&matches))
}

async fn create(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut guard = state.lock().unwrap();
    guard.requests.push("POST /marcas/".to_string());

    let duplicate = guard
        .rows
        .iter()
        .any(|row| row["numero_registro"] == body["numero_registro"]);
    if duplicate {
        return detail(StatusCode::BAD_REQUEST, "El número de registro ya existe");
    }

    let id = guard.next_id;
    guard.next_id += 1;
    let row = json!({
        "id": id,
        "nombre": body["nombre"],
        "titular": body["titular"],
        "numero_registro": body["numero_registro"],
        "fecha_registro": "2024-01-15 09:30:00",
        "categoria": body["categoria"],
        "descripcion": body.get("descripcion").cloned().unwrap_or(json!("")),
        "estado": body.get("estado").cloned().unwrap_or(json!("Activa")),
    });
    guard.rows.push(row.clone());
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut guard = state.lock().unwrap();
    guard.requests.push(format!("PUT /marcas/{id}"));

    let Some(row) = guard.rows.iter_mut().find(|r| r["id"] == id) else {
        return detail(StatusCode::NOT_FOUND, "Marca no encontrada");
    };
    for key in ["nombre", "titular", "numero_registro", "categoria", "descripcion", "estado"] {
        if let Some(value) = body.get(key) {
            row[key] = value.clone();
        }
    }
    Json(row.clone()).into_response()
}

async fn remove(State(state): State<SharedState>, Path(id): Path<i64>) -> Response {
    let mut guard = state.lock().unwrap();
    guard.requests.push(format!("DELETE /marcas/{id}"));

    let before = guard.rows.len();
    guard.rows.retain(|r| r["id"] != id);
    if guard.rows.len() == before {
        return detail(StatusCode::NOT_FOUND, "Marca no encontrada");
    }
    Json(json!({ "message": "Marca eliminada exitosamente" })).into_response()
}
