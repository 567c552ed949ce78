// tests/support/mod.rs
#![allow(dead_code)]

use artemanha::{config::Config, state::AppState, web::routes::create_router};
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Pedido recebido pelo backend falso.
#[derive(Debug, Clone)]
pub struct Pedido {
    pub metodo: Method,
    pub caminho: String,
    pub corpo: Option<Value>,
}

#[derive(Clone, Default)]
struct Roteiro {
    respostas: Arc<Mutex<HashMap<(Method, String), (StatusCode, Value)>>>,
    pedidos: Arc<Mutex<Vec<Pedido>>>,
}

/// Backend REST falso numa porta efémera. Responde o que lhe for ensinado
/// com `responder` e 404 ao resto, guardando todos os pedidos.
pub struct BackendFalso {
    pub base_url: String,
    roteiro: Roteiro,
}

async fn atender(State(r): State<Roteiro>, metodo: Method, uri: Uri, corpo: Bytes) -> Response {
    let corpo_json = serde_json::from_slice(&corpo).ok();
    r.pedidos.lock().unwrap().push(Pedido {
        metodo: metodo.clone(),
        caminho: uri.path().to_string(),
        corpo: corpo_json,
    });
    let resposta = r
        .respostas
        .lock()
        .unwrap()
        .get(&(metodo, uri.path().to_string()))
        .cloned();
    match resposta {
        Some((status, json)) => (status, Json(json)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

impl BackendFalso {
    pub async fn iniciar() -> Self {
        let roteiro = Roteiro::default();
        let app = Router::new().fallback(atender).with_state(roteiro.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        BackendFalso {
            base_url: format!("http://{}", addr),
            roteiro,
        }
    }

    pub fn responder(&self, metodo: Method, caminho: &str, status: u16, json: Value) {
        self.roteiro.respostas.lock().unwrap().insert(
            (metodo, caminho.to_string()),
            (StatusCode::from_u16(status).unwrap(), json),
        );
    }

    pub fn pedidos(&self) -> Vec<Pedido> {
        self.roteiro.pedidos.lock().unwrap().clone()
    }

    /// Pedidos que alteram dados (tudo menos GET).
    pub fn escritas(&self) -> Vec<Pedido> {
        self.pedidos()
            .into_iter()
            .filter(|p| p.metodo != Method::GET)
            .collect()
    }

    pub fn app(&self) -> Router {
        let base = self.base_url.clone();
        let config = Config::from_lookup(|nome| match nome {
            "API_BASE_URL" => Some(base.clone()),
            "API_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        create_router(AppState::new(&config).unwrap())
    }
}

pub struct Resposta {
    pub status: StatusCode,
    pub location: Option<String>,
    pub html: String,
}

impl Resposta {
    /// Mensagem do banner codificada no redirect (`?sucesso=...`).
    pub fn sucesso(&self) -> Option<String> {
        let location = self.location.as_deref()?;
        let (_, valor) = location.split_once("sucesso=")?;
        Some(urlencoding::decode(valor).unwrap().into_owned())
    }
}

async fn enviar(app: Router, req: Request<Body>) -> Resposta {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let corpo = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    Resposta {
        status,
        location,
        html: String::from_utf8(corpo.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Resposta {
    enviar(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: Router, uri: &str, campos: &[(&str, &str)]) -> Resposta {
    let corpo = campos
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(corpo))
        .unwrap();
    enviar(app, req).await
}
